//! Browser page for manual calculations.

use std::fmt::Write as _;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Render the index page with the current sizes (ascending) listed.
pub fn render_index(sizes: &[i64], default_order: i64) -> String {
    let mut items = String::new();
    for size in sizes {
        let _ = write!(items, "<li>{size}</li>");
    }
    let csv = sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    INDEX_TEMPLATE
        .replace("{{sizes}}", &items)
        .replace("{{sizes_csv}}", &csv)
        .replace("{{order}}", &default_order.to_string())
}
