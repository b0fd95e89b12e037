//! `boutique-storefront`
//!
//! **Responsibility:** thin client around the remote product directory.
//!
//! This crate provides:
//! - A typed HTTP client for the product directory
//! - Injected session state with a persisted token
//! - View controllers for the shop, dashboard, add-product and login screens
//!
//! Filtering and statistics live in `boutique-catalog`; this crate only decides
//! when to call them.

pub mod config;
pub mod directory;
pub mod error;
pub mod http;
pub mod render;
pub mod session;
pub mod token_store;
pub mod views;

pub use config::StorefrontConfig;
pub use directory::{Credentials, ImageUpload, ProductDirectory};
pub use error::{DirectoryError, SessionError, ViewError};
pub use http::HttpDirectory;
pub use session::{AuthToken, Session, SessionHandle, SessionWriter};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use views::DataSource;
