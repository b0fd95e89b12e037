//! Catalog domain module.
//!
//! Filtering and derived statistics over an already-fetched product list,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod draft;
pub mod filter;
pub mod pricing;
pub mod product;
pub mod sample;
pub mod stats;
pub mod vocabulary;

pub use draft::{MAX_IMAGES, NewProduct, NewProductRecord, ProductDraft, check_image_count};
pub use filter::{Facet, FilterSelection, filter, result_label};
pub use pricing::{Markdown, format_inr};
pub use product::{Product, ProductKind, ProductRecord};
pub use sample::{dashboard_sample, shop_sample};
pub use stats::{InventoryStats, aggregate};
