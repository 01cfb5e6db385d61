#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Could not connect to data")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
