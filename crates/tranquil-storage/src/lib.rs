//! tranquil-storage
//!
//! Persistence for scored assessments. The backing store is an opaque
//! object store addressed by key; S3 in production, memory in tests.

pub mod assessments;
pub mod client;
pub mod error;
pub mod memory;
pub mod s3;
pub mod store;

pub use memory::MemoryStore;
pub use s3::S3Store;
pub use store::RecordStore;
