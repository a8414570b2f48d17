use mongodb::bson::Bson;
use thiserror::Error;

/// Errors returned by `StudentStore` implementations.
///
/// Every variant is a server-side fault; "not found" outcomes are reported through
/// `Option` and `bool` return values instead of errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// MongoDB driver error (connection, command, or document decoding failure).
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// The database acknowledged an insert with an identifier that is not an ObjectId.
    #[error("Inserted document has a non-ObjectId _id: {0}")]
    UnexpectedInsertedId(Bson),

    /// Failure reported by a non-MongoDB store backend.
    #[error("Store backend failure: {0}")]
    Backend(String),
}
