//! Price presentation helpers shared by the shop and dashboard views.

use boutique_core::Price;

/// Markup applied to derive the "compare at" price shown struck through.
const COMPARE_AT_MARKUP: f64 = 1.4;

/// Compare-at price and discount badge for a product card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Markdown {
    pub compare_at: f64,
    pub discount_percent: u32,
}

impl Markdown {
    pub fn for_price(price: Price) -> Self {
        let amount = price.amount();
        let compare_at = (amount * COMPARE_AT_MARKUP).round();
        let discount_percent = if compare_at > 0.0 {
            (((compare_at - amount) / compare_at) * 100.0).round().max(0.0) as u32
        } else {
            0
        };
        Self {
            compare_at,
            discount_percent,
        }
    }

    /// Badge text, e.g. `-29%`; `None` when there is no discount.
    pub fn badge(&self) -> Option<String> {
        (self.discount_percent > 0).then(|| format!("-{}%", self.discount_percent))
    }
}

/// Render an amount with the rupee sign and thousands separators
/// (`₹12,999`, `₹1,234.5`).
pub fn format_inr(price: Price) -> String {
    format!("₹{}", group_thousands(price.amount()))
}

fn group_thousands(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (digits, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}
