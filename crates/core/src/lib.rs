#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod overlay;
pub mod progress;

pub use catalog::{Catalog, CatalogError, CatalogIssue};
pub use error::Error;
pub use overlay::{LineMetrics, OverlayBand};
pub use progress::{Hydration, ProgressState};
