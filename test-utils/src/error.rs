use bson::oid::ObjectId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// A fault was injected into the collection via `MemoryCollection::fail_with`.
    ///
    /// Every operation on the collection returns this error until the fault is cleared,
    /// which lets tests exercise the server-fault path of the service.
    #[error("Injected collection fault: {0}")]
    InjectedFault(String),

    /// A document with the same `_id` is already stored in the collection.
    #[error("Duplicate key: a document with _id {0} already exists")]
    DuplicateKey(ObjectId),
}
