//! Products Data

/// New Product Data
///
/// All fields are raw text as submitted; the service trims and validates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub url: String,
    pub price: String,
    pub image: String,
    pub notes: String,
}
