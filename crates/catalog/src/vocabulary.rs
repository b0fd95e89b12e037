//! Fixed catalog vocabulary offered by the admin form and the shop filters.

pub const CLOTHES: &str = "Clothes";
pub const JEWELRY: &str = "Jewelry";

pub const CATEGORIES: [&str; 2] = [CLOTHES, JEWELRY];

pub const AUDIENCES: [&str; 2] = ["Women", "Kids 1-10yrs"];

const CLOTHES_SUB_CATEGORIES: [&str; 5] = ["Sarees", "Lehengas", "Kurtis", "Kids Wear", "Other"];
const JEWELRY_SUB_CATEGORIES: [&str; 5] = ["Necklaces", "Earrings", "Bangles", "Rings", "Other"];

/// Sub-categories available under `category` (case-insensitive lookup).
///
/// Unknown categories have none.
pub fn sub_categories(category: &str) -> &'static [&'static str] {
    match canonical(&CATEGORIES, category) {
        Some(CLOTHES) => &CLOTHES_SUB_CATEGORIES,
        Some(JEWELRY) => &JEWELRY_SUB_CATEGORIES,
        _ => &[],
    }
}

/// Returns the canonical spelling of `value` among `options`, ignoring case
/// and surrounding whitespace.
pub fn canonical(options: &[&'static str], value: &str) -> Option<&'static str> {
    let wanted = value.trim().to_lowercase();
    options
        .iter()
        .copied()
        .find(|option| option.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_ignores_case_and_whitespace() {
        assert_eq!(canonical(&CATEGORIES, " clothes "), Some(CLOTHES));
        assert_eq!(canonical(&AUDIENCES, "KIDS 1-10YRS"), Some("Kids 1-10yrs"));
        assert_eq!(canonical(&CATEGORIES, "Footwear"), None);
    }

    #[test]
    fn sub_categories_depend_on_category() {
        assert!(sub_categories("Clothes").contains(&"Sarees"));
        assert!(sub_categories("jewelry").contains(&"Bangles"));
        assert!(!sub_categories("Jewelry").contains(&"Sarees"));
        assert!(sub_categories("Footwear").is_empty());
    }
}
