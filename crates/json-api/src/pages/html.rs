//! Catalog page rendering.
//!
//! Pure functions from product collections to markup. Every user-supplied
//! text field is HTML-escaped before interpolation; product ids are
//! backend-assigned uuids and are interpolated raw.

use jiff::Timestamp;

use stash_app::domain::products::models::Product;

/// Literal shown in the list container when the collection is empty.
pub(crate) const EMPTY_STATE: &str = "<p>No items yet — add something!</p>";

/// Submitted form values to preserve when the page is re-displayed after a
/// failed submission.
#[derive(Debug, Default)]
pub(crate) struct FormValues {
    pub title: String,
    pub url: String,
    pub price: String,
    pub image: String,
    pub notes: String,
}

/// Replaces `& < > " '` with their HTML entities.
pub(crate) fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }

    escaped
}

fn format_created_at(created_at: Timestamp) -> String {
    created_at.strftime("%d %b %Y %H:%M").to_string()
}

fn render_card(product: &Product) -> String {
    let media = if product.image.is_empty() {
        r#"<div class="no-img">No image</div>"#.to_string()
    } else {
        format!(
            r#"<img src="{src}" alt="{alt}">"#,
            src = escape_html(&product.image),
            alt = escape_html(&product.title),
        )
    };

    format!(
        r#"<div class="product">
<div class="left">{media}</div>
<div class="right">
<a class="title" href="{url}" target="_blank" rel="noopener">{title}</a>
<div class="meta"><span class="price">{price}</span> <span class="date">{date}</span></div>
<p class="notes">{notes}</p>
<form class="delete-form" method="post" action="/products/{id}/delete" onsubmit="return confirm('Delete this item?');">
<button type="submit" class="delete" data-id="{id}">Delete</button>
</form>
</div>
</div>
"#,
        url = escape_html(&product.url),
        title = escape_html(&product.title),
        price = escape_html(&product.price),
        date = format_created_at(product.created_at),
        notes = escape_html(&product.notes),
        id = product.uuid,
    )
}

/// Renders the list container's content: the empty-state message, or one
/// card per product in the given order.
pub(crate) fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return EMPTY_STATE.to_string();
    }

    products.iter().map(render_card).collect()
}

/// Renders the whole catalog page: heading, optional alert, creation form
/// and the product list.
pub(crate) fn render_page(products: &[Product], alert: Option<&str>, form: &FormValues) -> String {
    let alert_html = alert.map_or_else(String::new, |message| {
        format!(
            "<div class=\"alert\" role=\"alert\">{}</div>\n",
            escape_html(message)
        )
    });

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Stash</title>
<link rel="stylesheet" href="/assets/style.css">
</head>
<body>
<main class="container">
<h1>Stash</h1>
{alert_html}<form id="productForm" method="post" action="/products">
<input id="title" name="title" placeholder="Title" value="{title}">
<input id="url" name="url" placeholder="URL" value="{url}">
<input id="price" name="price" placeholder="Price" value="{price}">
<input id="image" name="image" placeholder="Image URL" value="{image}">
<textarea id="notes" name="notes" placeholder="Notes">{notes}</textarea>
<button type="submit">Add</button>
</form>
<div id="products">
{products_html}</div>
</main>
</body>
</html>
"#,
        title = escape_html(&form.title),
        url = escape_html(&form.url),
        price = escape_html(&form.price),
        image = escape_html(&form.image),
        notes = escape_html(&form.notes),
        products_html = render_products(products),
    )
}
