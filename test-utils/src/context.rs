use crate::collection::MemoryCollection;

/// Test context containing the in-memory student collection.
///
/// Provides an isolated collection for unit and integration testing. Each context owns its
/// own collection, so tests never observe each other's documents.
pub struct TestContext {
    /// In-memory collection standing in for the MongoDB student collection.
    ///
    /// Clones share storage, so handing a clone to the service under test lets the test
    /// inspect the resulting documents afterwards.
    pub collection: MemoryCollection,
}

impl TestContext {
    /// Creates a new test context with an empty collection.
    ///
    /// # Returns
    /// - New `TestContext` instance with no documents
    pub fn new() -> Self {
        Self {
            collection: MemoryCollection::new(),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
