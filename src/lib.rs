//! milvus-shell - a notebook-style shell for Milvus
//!
//! Accepts a small `;`-delimited command dialect and turns each statement
//! into one call against a Milvus server.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Dialect**: Statement splitting and parsing
//! - **Client**: Database client traits with an HTTP implementation
//! - **Kernel**: Session state, dispatch, rendering and replies
//! - **CLI**: Command-line interface and REPL
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use milvus_shell::client::HttpMilvusClient;
//! use milvus_shell::kernel::{Kernel, StdoutDisplay};
//! use milvus_shell::Config;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HttpMilvusClient::from_config(&Config::default()).unwrap();
//!     let mut kernel = Kernel::new(Arc::new(client), Arc::new(StdoutDisplay));
//!
//!     let reply = kernel
//!         .execute("milvus://127.0.0.1:19530; list collections;", false)
//!         .await;
//!     println!("{:?}", reply.status);
//! }
//! ```

pub mod cli;
pub mod client;
pub mod core;
pub mod dialect;
pub mod kernel;

// Re-export commonly used items
pub use cli::Repl;
pub use crate::core::{Config, ParseError, Result, ShellError};
pub use kernel::{ExecuteReply, Kernel};
