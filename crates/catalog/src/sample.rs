//! Fixed sample catalog shown when the product directory cannot be reached.

use boutique_core::{Price, ProductId};

use crate::product::Product;

fn item(
    id: i64,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    sub_category: &str,
    audience: &str,
    image: &str,
) -> Product {
    // Literal, non-negative prices only.
    let price = Price::new(price).unwrap_or(Price::ZERO);
    Product::new(ProductId::new(id), name, category, audience, price)
        .with_description(description)
        .with_sub_category(sub_category)
        .with_image_urls(vec![image.to_string()])
}

/// Sample catalog for the shop view.
pub fn shop_sample() -> Vec<Product> {
    vec![
        item(
            1,
            "Silk Banarasi Saree",
            "Elegant hand-woven Banarasi silk saree with intricate gold zari work",
            12999.0,
            "Clothes",
            "Sarees",
            "Women",
            "https://images.unsplash.com/photo-1610030469983-98e550d6193c?w=600",
        ),
        item(
            2,
            "Designer Lehenga",
            "Beautiful bridal lehenga with heavy embroidery and sequin work",
            25999.0,
            "Clothes",
            "Lehengas",
            "Women",
            "https://images.unsplash.com/photo-1583391733956-3750e0ff4e8b?w=600",
        ),
        item(
            3,
            "Temple Necklace Set",
            "Traditional temple jewelry necklace with matching earrings",
            8999.0,
            "Jewelry",
            "Necklaces",
            "Women",
            "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=600",
        ),
        item(
            4,
            "Kids Pattu Pavadai",
            "Traditional South Indian silk dress for kids",
            3999.0,
            "Clothes",
            "Kids Wear",
            "Kids 1-10yrs",
            "https://images.unsplash.com/photo-1518831959646-742c3a14ebf7?w=600",
        ),
        item(
            5,
            "Kundan Bangles Set",
            "Elegant kundan work bangles set of 4",
            4999.0,
            "Jewelry",
            "Bangles",
            "Women",
            "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=600",
        ),
        item(
            6,
            "Kids Anarkali Dress",
            "Beautiful embroidered Anarkali dress for kids",
            2999.0,
            "Clothes",
            "Kids Wear",
            "Kids 1-10yrs",
            "https://images.unsplash.com/photo-1596870230751-ebdfce98ec42?w=600",
        ),
    ]
}

/// Sample inventory for the admin dashboard (the first three shop items).
pub fn dashboard_sample() -> Vec<Product> {
    let mut products = shop_sample();
    products.truncate(3);
    products
}
