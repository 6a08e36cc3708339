use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Unbalanced release of tracker client for {url}")]
    UnbalancedRelease { url: String },
}
