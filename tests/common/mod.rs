//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use milvus_shell::client::{Connection, MilvusClient};
use milvus_shell::core::{IndexType, MetricType, Result, ShellError, Status};
use milvus_shell::kernel::{DisplayData, DisplaySink, Kernel};

/// Every client call, in order
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// A client that records calls and answers from canned data
#[derive(Clone, Default)]
pub struct FakeClient {
    pub calls: CallLog,
    pub collections: Vec<String>,
    /// Operations (by name) that fail with a client error
    pub failing: Arc<Mutex<Vec<&'static str>>>,
}

impl FakeClient {
    pub fn with_collections(names: &[&str]) -> Self {
        Self {
            collections: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing(self, operation: &'static str) -> Self {
        self.fail(operation);
        self
    }

    /// Make `operation` fail from now on
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().push(operation);
    }

    fn fails(&self, operation: &str) -> bool {
        self.failing.lock().unwrap().iter().any(|op| *op == operation)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

struct FakeConnection {
    client: FakeClient,
    address: String,
}

impl FakeConnection {
    fn record(&self, operation: &'static str, call: String) -> Result<()> {
        self.client.calls.lock().unwrap().push(call);
        if self.client.fails(operation) {
            return Err(ShellError::client(format!("{} failed: server unavailable", operation)));
        }
        Ok(())
    }

    fn status(&self, operation: &'static str, call: String) -> Result<Status> {
        self.record(operation, call)?;
        Ok(Status::ok("Success"))
    }
}

#[async_trait]
impl MilvusClient for FakeClient {
    async fn connect(&self, address: &str) -> Result<Box<dyn Connection>> {
        self.calls.lock().unwrap().push(format!("connect({})", address));
        if self.fails("connect") {
            return Err(ShellError::client("connect failed: connection refused"));
        }
        Ok(Box::new(FakeConnection {
            client: self.clone(),
            address: address.to_string(),
        }))
    }

    fn name(&self) -> &str {
        "fake"
    }
}

#[async_trait]
impl Connection for FakeConnection {
    fn address(&self) -> &str {
        &self.address
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        self.record("list_collections", "list_collections()".to_string())?;
        Ok(self.client.collections.clone())
    }

    async fn create_collection(
        &self,
        collection_name: &str,
        dimension: i64,
        index_file_size: i64,
        metric_type: MetricType,
    ) -> Result<Status> {
        self.status(
            "create_collection",
            format!(
                "create_collection({}, {}, {}, {})",
                collection_name, dimension, index_file_size, metric_type
            ),
        )
    }

    async fn drop_collection(&self, collection_name: &str) -> Result<Status> {
        self.record(
            "drop_collection",
            format!("drop_collection({})", collection_name),
        )?;
        Ok(Status::failure(1, format!("collection {} not found", collection_name)))
    }

    async fn create_partition(
        &self,
        collection_name: &str,
        partition_tag: &str,
    ) -> Result<Status> {
        self.status(
            "create_partition",
            format!("create_partition({}, {})", collection_name, partition_tag),
        )
    }

    async fn drop_partition(&self, collection_name: &str, partition_tag: &str) -> Result<Status> {
        self.status(
            "drop_partition",
            format!("drop_partition({}, {})", collection_name, partition_tag),
        )
    }

    async fn list_partitions(&self, collection_name: &str) -> Result<Vec<String>> {
        self.record(
            "list_partitions",
            format!("list_partitions({})", collection_name),
        )?;
        Ok(vec!["_default".to_string()])
    }

    async fn create_index(
        &self,
        collection_name: &str,
        index_type: IndexType,
        nlist: i64,
    ) -> Result<Status> {
        self.status(
            "create_index",
            format!("create_index({}, {}, {})", collection_name, index_type, nlist),
        )
    }

    async fn drop_index(&self, collection_name: &str) -> Result<Status> {
        self.status("drop_index", format!("drop_index({})", collection_name))
    }

    async fn compact(&self, collection_name: &str) -> Result<Status> {
        self.status("compact", format!("compact({})", collection_name))
    }

    async fn flush(&self, collection_names: &[String]) -> Result<Status> {
        self.status("flush", format!("flush({})", collection_names.join("|")))
    }
}

/// A display that keeps every event
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    events: Arc<Mutex<Vec<DisplayData>>>,
}

impl RecordingDisplay {
    /// Plain-text form of every event so far
    pub fn texts(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.plain().unwrap_or_default().to_string())
            .collect()
    }

    pub fn events(&self) -> Vec<DisplayData> {
        self.events.lock().unwrap().clone()
    }
}

impl DisplaySink for RecordingDisplay {
    fn display(&self, data: DisplayData) {
        self.events.lock().unwrap().push(data);
    }
}

/// A kernel wired to the given fake client and a fresh recording display
pub fn kernel_with(client: &FakeClient) -> (Kernel, RecordingDisplay) {
    let display = RecordingDisplay::default();
    let kernel = Kernel::new(Arc::new(client.clone()), Arc::new(display.clone()));
    (kernel, display)
}
