//! Database client traits
//!
//! The kernel talks to Milvus only through these traits, so the HTTP
//! adapter can be swapped for another transport or a test double.

use async_trait::async_trait;

use crate::core::{IndexType, MetricType, Result, Status};

/// Factory for connections to a Milvus server
#[async_trait]
pub trait MilvusClient: Send + Sync {
    /// Open a connection to the server at `address` (`host:port`, optionally
    /// prefixed with `user:password@`)
    async fn connect(&self, address: &str) -> Result<Box<dyn Connection>>;

    /// Get the client name
    fn name(&self) -> &str;
}

/// An open connection to a Milvus server
#[async_trait]
pub trait Connection: Send + Sync {
    /// Address this connection was opened with
    fn address(&self) -> &str;

    /// List all collection names
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// Create a collection
    async fn create_collection(
        &self,
        collection_name: &str,
        dimension: i64,
        index_file_size: i64,
        metric_type: MetricType,
    ) -> Result<Status>;

    /// Drop a collection
    async fn drop_collection(&self, collection_name: &str) -> Result<Status>;

    /// Create a partition in a collection
    async fn create_partition(&self, collection_name: &str, partition_tag: &str)
        -> Result<Status>;

    /// Drop a partition from a collection
    async fn drop_partition(&self, collection_name: &str, partition_tag: &str) -> Result<Status>;

    /// List the partitions of a collection
    async fn list_partitions(&self, collection_name: &str) -> Result<Vec<String>>;

    /// Build an index on a collection
    async fn create_index(
        &self,
        collection_name: &str,
        index_type: IndexType,
        nlist: i64,
    ) -> Result<Status>;

    /// Drop the index of a collection
    async fn drop_index(&self, collection_name: &str) -> Result<Status>;

    /// Reclaim space held by deleted entities
    async fn compact(&self, collection_name: &str) -> Result<Status>;

    /// Persist pending inserts of the given collections
    async fn flush(&self, collection_names: &[String]) -> Result<Status>;
}
