use std::future::Future;

use crate::error::StorageError;

/// Key/value access to JSON documents.
///
/// Implementations must report a missing key as [`StorageError::NotFound`]
/// and return `list` results in ascending key order.
pub trait RecordStore: Clone + Send + Sync + 'static {
    fn get(&self, key: &str) -> impl Future<Output = Result<Vec<u8>, StorageError>> + Send;

    fn put(&self, key: &str, body: Vec<u8>)
    -> impl Future<Output = Result<(), StorageError>> + Send;

    fn list(&self, prefix: &str) -> impl Future<Output = Result<Vec<String>, StorageError>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}
