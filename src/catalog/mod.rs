pub mod google;
pub mod provider;
pub mod repository;
pub mod types;

pub use google::GoogleBooksCatalog;
pub use provider::{Catalog, CatalogError};
pub use repository::CatalogRepository;
pub use types::{CatalogItem, ImageLinks, SearchResponse, VolumeInfo};
