//! Plain-text rendering of views for the terminal front end.

use std::fmt::Write;

use boutique_catalog::{InventoryStats, Markdown, Product, format_inr};
use boutique_core::Price;

use crate::views::DataSource;

/// Product grid of the shop: one block per product.
pub fn product_grid(products: &[&Product]) -> String {
    let mut out = String::new();
    for product in products {
        let markdown = Markdown::for_price(product.price());
        let _ = writeln!(
            out,
            "[{}] {}\n    {} • {}",
            product.id_typed(),
            product.name(),
            product.category().to_uppercase(),
            product.target_audience().to_uppercase(),
        );
        let _ = write!(out, "    {}", format_inr(product.price()));
        if let Some(badge) = markdown.badge() {
            // compare_at is rounded from a valid price, so it is valid too.
            let compare_at = Price::new(markdown.compare_at).unwrap_or(product.price());
            let _ = write!(out, "  (was {}, {badge})", format_inr(compare_at));
        }
        out.push('\n');
        if !product.sizes().is_empty() {
            let _ = writeln!(out, "    sizes: {}", product.sizes().join(", "));
        }
    }
    out
}

/// Dashboard stat cards.
pub fn stats(stats: &InventoryStats) -> String {
    let total = match Price::new(stats.total_value) {
        Ok(total) => format_inr(total),
        Err(e) => {
            tracing::warn!(
                total = stats.total_value,
                error = %e,
                "inventory total not displayable"
            );
            "n/a".to_string()
        }
    };
    format!(
        "Total Products: {}\nTotal Value:    {}\nCategories:     {}\nAudiences:      {}\n",
        stats.count,
        total,
        stats.distinct_categories,
        stats.distinct_audiences,
    )
}

/// Dashboard inventory table.
pub fn inventory_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found\n".to_string();
    }

    let mut out = format!(
        "{:<6} {:<28} {:<10} {:<14} {:>12}\n",
        "ID", "PRODUCT", "CATEGORY", "AUDIENCE", "PRICE"
    );
    for product in products {
        let _ = writeln!(
            out,
            "{:<6} {:<28} {:<10} {:<14} {:>12}",
            product.id_typed(),
            truncate(product.name(), 28),
            truncate(product.category(), 10),
            truncate(product.target_audience(), 14),
            format_inr(product.price()),
        );
    }
    out
}

/// Notice shown when the directory could not be reached.
pub fn source_banner(source: DataSource) -> Option<&'static str> {
    match source {
        DataSource::Live => None,
        DataSource::Sample => Some("(showing sample products: the catalog service is unavailable)"),
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
