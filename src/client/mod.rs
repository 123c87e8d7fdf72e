//! Client module - Milvus database clients
//!
//! Provides the client traits the kernel dispatches to, with an HTTP
//! implementation for the Milvus RESTful API.

pub mod http;
pub mod traits;

pub use http::HttpMilvusClient;
pub use traits::{Connection, MilvusClient};
