use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("No item in the catalog with id {0}")]
    ItemNotFound(Uuid),

    #[error("\"{title}\" is already on loan to {borrower}")]
    AlreadyOnLoan { title: String, borrower: String },

    #[error("Item {0} is not on loan")]
    NotOnLoan(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BiblioError>;
