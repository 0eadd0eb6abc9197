//! Products

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
mod repository;
pub mod service;

pub use errors::{ProductsServiceError, ProductsStoreError};
pub use service::*;
