use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(u32),

    #[error("Duplicate recipe id in catalog: {0}")]
    DuplicateId(u32),

    #[error("Unknown {kind} key: {value}")]
    UnknownKey { kind: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
