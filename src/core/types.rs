//! Shared types used across milvus-shell modules
//!
//! Contains the enum tables of the dialect, operation statuses and the
//! parameter values carried by parsed statements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance/similarity function used by a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricType {
    #[serde(rename = "INVALID")]
    Invalid,
    #[serde(rename = "L2")]
    L2,
    #[serde(rename = "IP")]
    Ip,
    #[serde(rename = "HAMMING")]
    Hamming,
    #[serde(rename = "JACCARD")]
    Jaccard,
    #[serde(rename = "TANIMOTO")]
    Tanimoto,
    #[serde(rename = "SUBSTRUCTURE")]
    Substructure,
    #[serde(rename = "SUPERSTRUCTURE")]
    Superstructure,
}

/// Lookup table for metric type names, as written in statements
pub const METRIC_TYPES: &[(&str, MetricType)] = &[
    ("HAMMING", MetricType::Hamming),
    ("INVALID", MetricType::Invalid),
    ("IP", MetricType::Ip),
    ("JACCARD", MetricType::Jaccard),
    ("L2", MetricType::L2),
    ("SUBSTRUCTURE", MetricType::Substructure),
    ("SUPERSTRUCTURE", MetricType::Superstructure),
    ("TANIMOTO", MetricType::Tanimoto),
];

impl MetricType {
    /// Name of the metric type as accepted by the server
    pub fn as_str(&self) -> &'static str {
        METRIC_TYPES
            .iter()
            .find(|(_, m)| m == self)
            .map(|(name, _)| *name)
            .unwrap_or("INVALID")
    }
}

impl FromStr for MetricType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        METRIC_TYPES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, m)| *m)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index algorithm used to accelerate search over a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexType {
    #[serde(rename = "INVALID")]
    Invalid,
    #[serde(rename = "FLAT")]
    Flat,
    #[serde(rename = "IVFLAT")]
    IvFlat,
    #[serde(rename = "IVF_SQ8")]
    IvfSq8,
    #[serde(rename = "RNSG")]
    Rnsg,
    #[serde(rename = "IVF_SQ8H")]
    IvfSq8H,
    #[serde(rename = "IVF_PQ")]
    IvfPq,
    #[serde(rename = "HNSW")]
    Hnsw,
    #[serde(rename = "ANNOY")]
    Annoy,
}

/// Lookup table for index type names, as written in statements
pub const INDEX_TYPES: &[(&str, IndexType)] = &[
    ("IVFLAT", IndexType::IvFlat),
    ("ANNOY", IndexType::Annoy),
    ("FLAT", IndexType::Flat),
    ("HNSW", IndexType::Hnsw),
    ("INVALID", IndexType::Invalid),
    ("IVF_PQ", IndexType::IvfPq),
    ("IVF_SQ8", IndexType::IvfSq8),
    ("IVF_SQ8H", IndexType::IvfSq8H),
    ("RNSG", IndexType::Rnsg),
];

impl IndexType {
    /// Name of the index type as accepted by the server
    pub fn as_str(&self) -> &'static str {
        INDEX_TYPES
            .iter()
            .find(|(_, i)| i == self)
            .map(|(name, _)| *name)
            .unwrap_or("INVALID")
    }
}

impl FromStr for IndexType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        INDEX_TYPES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, i)| *i)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status returned by a mutating database operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Server status code (0 means success)
    pub code: i32,
    /// Human-readable message
    pub message: String,
}

impl Status {
    /// Create a successful status
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
        }
    }

    /// Create a failed status
    pub fn failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Whether the server reported success
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A parameter value extracted from a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    List(Vec<String>),
    Metric(MetricType),
    Index(IndexType),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::List(items) => f.write_str(&items.join(", ")),
            ParamValue::Metric(m) => write!(f, "{}", m),
            ParamValue::Index(i) => write!(f, "{}", i),
        }
    }
}
