use thiserror::Error;

use crate::catalog::CatalogError;
use crate::overlay::LineMetricsError;
use crate::progress::ProgressParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Progress(#[from] ProgressParseError),
    #[error(transparent)]
    LineMetrics(#[from] LineMetricsError),
}
