//! Execute replies and kernel info
//!
//! Structured completion status returned to the host after each submission.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome tag of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Ok,
    Error,
}

/// Completion status of one `execute` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecuteReply {
    pub status: ReplyStatus,
    pub execution_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evalue: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub traceback: Vec<String>,
    pub payload: Vec<Value>,
    pub user_expressions: Map<String, Value>,
}

impl ExecuteReply {
    /// A successful reply
    pub fn ok(execution_count: u32) -> Self {
        Self {
            status: ReplyStatus::Ok,
            execution_count,
            error: None,
            ename: None,
            evalue: None,
            traceback: Vec::new(),
            payload: Vec::new(),
            user_expressions: Map::new(),
        }
    }

    /// A failed reply; the name, value and traceback all carry the message
    pub fn error(execution_count: u32, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: ReplyStatus::Error,
            execution_count,
            traceback: vec![message.clone()],
            ename: Some(message.clone()),
            evalue: Some(message.clone()),
            error: Some(message),
            payload: Vec::new(),
            user_expressions: Map::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ReplyStatus::Ok
    }
}

/// Language description advertised to hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
    pub mimetype: String,
    pub file_extension: String,
}

/// Identity of the kernel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelInfo {
    pub implementation: String,
    pub implementation_version: String,
    pub language: String,
    pub language_version: String,
    pub language_info: LanguageInfo,
    pub banner: String,
}

impl Default for KernelInfo {
    fn default() -> Self {
        Self {
            implementation: "milvus_kernel".to_string(),
            implementation_version: env!("CARGO_PKG_VERSION").to_string(),
            language: "sql".to_string(),
            language_version: "latest".to_string(),
            language_info: LanguageInfo {
                name: "sql".to_string(),
                mimetype: "text/x-sh".to_string(),
                file_extension: ".sql".to_string(),
            },
            banner: "milvus kernel".to_string(),
        }
    }
}
