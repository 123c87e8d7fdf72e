//! Dialect module - the milvus-shell command language
//!
//! Splits submissions into statements and parses each into a typed
//! [`Statement`].

pub mod parser;
pub mod splitter;
pub mod statement;

pub use parser::parse;
pub use splitter::{split, Batch};
pub use statement::{CollectionSpec, IndexSpec, Statement, Verb, VERBS};
