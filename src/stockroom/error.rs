use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("Product with ID '{0}' not found!")]
    ProductNotFound(String),

    #[error("Product with ID '{0}' already exists!")]
    DuplicateProduct(String),

    #[error("Product ID cannot be empty!")]
    InvalidId,

    #[error("Product ID '{id}' does not match the ID it is stored under ('{key}')")]
    IdMismatch { key: String, id: String },

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockroomError>;
