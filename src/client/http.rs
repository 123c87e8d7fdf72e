//! HTTP client for the Milvus RESTful API
//!
//! Every operation is a `POST {base}/v2/vectordb/<resource>/<action>` with a
//! JSON body; responses carry a `code` (0 on success), an optional
//! `message` and optional `data`.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

use crate::client::traits::{Connection, MilvusClient};
use crate::core::{Config, IndexType, MetricType, Result, ShellError, Status};

const API_PREFIX: &str = "v2/vectordb";

/// Milvus RESTful API client
#[derive(Clone)]
pub struct HttpMilvusClient {
    client: Client,
    config: Config,
}

/// Response envelope shared by all endpoints
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    code: i32,
    message: Option<String>,
    data: Option<T>,
}

impl HttpMilvusClient {
    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.milvus.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl MilvusClient for HttpMilvusClient {
    async fn connect(&self, address: &str) -> Result<Box<dyn Connection>> {
        let (token, host_port) = match address.rsplit_once('@') {
            Some((credentials, host_port)) => (Some(credentials.to_string()), host_port),
            None => (None, address),
        };

        let base = Url::parse(&self.config.base_url_for(host_port))?;
        if base.host_str().map_or(true, str::is_empty) {
            return Err(ShellError::client(format!(
                "Invalid Milvus address '{}'",
                address
            )));
        }

        tracing::info!(base = %base, "Opening Milvus connection");

        Ok(Box::new(HttpConnection {
            client: self.client.clone(),
            base,
            address: address.to_string(),
            token,
        }))
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Connection to one Milvus server over HTTP
pub struct HttpConnection {
    client: Client,
    base: Url,
    address: String,
    token: Option<String>,
}

impl HttpConnection {
    /// Full URL of an API endpoint
    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(&format!("{}/{}", API_PREFIX, path))?)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<ApiResponse<T>> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, %body, "Milvus request");

        let mut request = self.client.post(url).json(&body);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                ShellError::client(format!(
                    "Cannot connect to Milvus at {}. Is it running?",
                    self.base
                ))
            } else {
                ShellError::from(e)
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ShellError::client(format!(
                "Milvus returned {}: {}",
                status, error_text
            )));
        }

        Ok(response.json().await?)
    }

    /// Call a mutating endpoint, folding the response into a [`Status`]
    async fn call(&self, path: &str, body: Value) -> Result<Status> {
        let response: ApiResponse<Value> = self.post(path, body).await?;
        if response.code == 0 {
            Ok(Status::ok(response.message.unwrap_or_else(|| "Success".to_string())))
        } else {
            Ok(Status::failure(
                response.code,
                response.message.unwrap_or_default(),
            ))
        }
    }

    /// Call a listing endpoint
    async fn list(&self, path: &str, body: Value) -> Result<Vec<String>> {
        let response: ApiResponse<Vec<String>> = self.post(path, body).await?;
        if response.code != 0 {
            return Err(ShellError::client(format!(
                "[{}] {}",
                response.code,
                response.message.unwrap_or_default()
            )));
        }
        Ok(response.data.unwrap_or_default())
    }
}

#[async_trait]
impl Connection for HttpConnection {
    fn address(&self) -> &str {
        &self.address
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        self.list("collections/list", json!({})).await
    }

    async fn create_collection(
        &self,
        collection_name: &str,
        dimension: i64,
        index_file_size: i64,
        metric_type: MetricType,
    ) -> Result<Status> {
        self.call(
            "collections/create",
            json!({
                "collectionName": collection_name,
                "dimension": dimension,
                "metricType": metric_type,
                "params": { "index_file_size": index_file_size },
            }),
        )
        .await
    }

    async fn drop_collection(&self, collection_name: &str) -> Result<Status> {
        self.call(
            "collections/drop",
            json!({ "collectionName": collection_name }),
        )
        .await
    }

    async fn create_partition(
        &self,
        collection_name: &str,
        partition_tag: &str,
    ) -> Result<Status> {
        self.call(
            "partitions/create",
            json!({ "collectionName": collection_name, "partitionName": partition_tag }),
        )
        .await
    }

    async fn drop_partition(&self, collection_name: &str, partition_tag: &str) -> Result<Status> {
        self.call(
            "partitions/drop",
            json!({ "collectionName": collection_name, "partitionName": partition_tag }),
        )
        .await
    }

    async fn list_partitions(&self, collection_name: &str) -> Result<Vec<String>> {
        self.list(
            "partitions/list",
            json!({ "collectionName": collection_name }),
        )
        .await
    }

    async fn create_index(
        &self,
        collection_name: &str,
        index_type: IndexType,
        nlist: i64,
    ) -> Result<Status> {
        self.call(
            "indexes/create",
            json!({
                "collectionName": collection_name,
                "indexParams": [{
                    "indexType": index_type,
                    "params": { "nlist": nlist },
                }],
            }),
        )
        .await
    }

    async fn drop_index(&self, collection_name: &str) -> Result<Status> {
        self.call(
            "indexes/drop",
            json!({ "collectionName": collection_name }),
        )
        .await
    }

    async fn compact(&self, collection_name: &str) -> Result<Status> {
        self.call(
            "collections/compact",
            json!({ "collectionName": collection_name }),
        )
        .await
    }

    async fn flush(&self, collection_names: &[String]) -> Result<Status> {
        self.call(
            "collections/flush",
            json!({ "collectionNames": collection_names }),
        )
        .await
    }
}
