use movies_core::types::MovieId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid seed dataset: {0}")]
    InvalidSeed(#[from] serde_json::Error),

    #[error("Duplicate movie id in seed dataset: {0}")]
    DuplicateId(MovieId),
}
