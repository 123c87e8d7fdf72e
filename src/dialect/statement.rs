//! Parsed statements and the verb table
//!
//! Each verb has a fixed prefix and a fixed parameter schema. `VERBS` is
//! ordered by priority: the first prefix that matches wins.

use serde::Serialize;
use std::fmt;

use crate::core::{IndexType, MetricType, ParamValue};

/// Verb tag of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verb {
    Connect,
    Help,
    ListCollections,
    CreateCollection,
    DropCollection,
    CreatePartition,
    DropPartition,
    ListPartitions,
    CreateIndex,
    DropIndex,
    Compact,
    Flush,
    Unknown,
}

/// Verb prefixes, matched case-insensitively in this order
pub const VERBS: &[(&str, Verb)] = &[
    ("milvus://", Verb::Connect),
    ("help", Verb::Help),
    ("list collections", Verb::ListCollections),
    ("create collection ", Verb::CreateCollection),
    ("drop collection ", Verb::DropCollection),
    ("create partition ", Verb::CreatePartition),
    ("drop partition ", Verb::DropPartition),
    ("list partitions ", Verb::ListPartitions),
    ("create index ", Verb::CreateIndex),
    ("drop index ", Verb::DropIndex),
    ("compact ", Verb::Compact),
    ("flush ", Verb::Flush),
];

impl Verb {
    /// Find the verb whose prefix starts `statement`, and the prefix length
    pub fn recognize(statement: &str) -> (Verb, usize) {
        let lower = statement.to_ascii_lowercase();
        VERBS
            .iter()
            .find(|(prefix, _)| lower.starts_with(prefix))
            .map(|(prefix, verb)| (*verb, prefix.len()))
            .unwrap_or((Verb::Unknown, 0))
    }

    /// Stable tag of the verb
    pub fn tag(&self) -> &'static str {
        match self {
            Verb::Connect => "connect",
            Verb::Help => "help",
            Verb::ListCollections => "list-collections",
            Verb::CreateCollection => "create-collection",
            Verb::DropCollection => "drop-collection",
            Verb::CreatePartition => "create-partition",
            Verb::DropPartition => "drop-partition",
            Verb::ListPartitions => "list-partitions",
            Verb::CreateIndex => "create-index",
            Verb::DropIndex => "drop-index",
            Verb::Compact => "compact",
            Verb::Flush => "flush",
            Verb::Unknown => "unknown",
        }
    }

    /// Names of the parameters a statement with this verb carries
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Verb::Connect => &["address"],
            Verb::Help | Verb::ListCollections | Verb::Unknown => &[],
            Verb::CreateCollection => &[
                "collection_name",
                "dimension",
                "index_file_size",
                "metric_type",
            ],
            Verb::CreatePartition | Verb::DropPartition => &["collection_name", "partition_tag"],
            Verb::CreateIndex => &["collection_name", "index_type", "nlist"],
            Verb::DropCollection | Verb::ListPartitions | Verb::DropIndex | Verb::Compact => {
                &["collection_name"]
            }
            Verb::Flush => &["collection_name_list"],
        }
    }

    /// Whether dispatching this verb needs an open connection
    pub fn requires_connection(&self) -> bool {
        !matches!(self, Verb::Connect | Verb::Help | Verb::Unknown)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parameters of `create collection`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSpec {
    pub collection_name: String,
    pub dimension: i64,
    pub index_file_size: i64,
    pub metric_type: MetricType,
}

/// Parameters of `create index`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub collection_name: String,
    pub index_type: IndexType,
    pub nlist: i64,
}

/// A single parsed instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Connect {
        address: String,
    },
    Help,
    ListCollections,
    CreateCollection(CollectionSpec),
    DropCollection {
        collection_name: String,
    },
    CreatePartition {
        collection_name: String,
        partition_tag: String,
    },
    DropPartition {
        collection_name: String,
        partition_tag: String,
    },
    ListPartitions {
        collection_name: String,
    },
    CreateIndex(IndexSpec),
    DropIndex {
        collection_name: String,
    },
    Compact {
        collection_name: String,
    },
    Flush {
        collection_names: Vec<String>,
    },
    Unknown,
}

impl Statement {
    /// Verb tag of this statement
    pub fn verb(&self) -> Verb {
        match self {
            Statement::Connect { .. } => Verb::Connect,
            Statement::Help => Verb::Help,
            Statement::ListCollections => Verb::ListCollections,
            Statement::CreateCollection(_) => Verb::CreateCollection,
            Statement::DropCollection { .. } => Verb::DropCollection,
            Statement::CreatePartition { .. } => Verb::CreatePartition,
            Statement::DropPartition { .. } => Verb::DropPartition,
            Statement::ListPartitions { .. } => Verb::ListPartitions,
            Statement::CreateIndex(_) => Verb::CreateIndex,
            Statement::DropIndex { .. } => Verb::DropIndex,
            Statement::Compact { .. } => Verb::Compact,
            Statement::Flush { .. } => Verb::Flush,
            Statement::Unknown => Verb::Unknown,
        }
    }

    /// Parameters as name/value pairs, in schema order
    pub fn params(&self) -> Vec<(&'static str, ParamValue)> {
        let name = |n: &String| ("collection_name", ParamValue::Str(n.clone()));
        match self {
            Statement::Connect { address } => vec![("address", ParamValue::Str(address.clone()))],
            Statement::Help | Statement::ListCollections | Statement::Unknown => Vec::new(),
            Statement::CreateCollection(spec) => vec![
                name(&spec.collection_name),
                ("dimension", ParamValue::Int(spec.dimension)),
                ("index_file_size", ParamValue::Int(spec.index_file_size)),
                ("metric_type", ParamValue::Metric(spec.metric_type)),
            ],
            Statement::CreatePartition {
                collection_name,
                partition_tag,
            }
            | Statement::DropPartition {
                collection_name,
                partition_tag,
            } => vec![
                name(collection_name),
                ("partition_tag", ParamValue::Str(partition_tag.clone())),
            ],
            Statement::CreateIndex(spec) => vec![
                name(&spec.collection_name),
                ("index_type", ParamValue::Index(spec.index_type)),
                ("nlist", ParamValue::Int(spec.nlist)),
            ],
            Statement::DropCollection { collection_name }
            | Statement::ListPartitions { collection_name }
            | Statement::DropIndex { collection_name }
            | Statement::Compact { collection_name } => vec![name(collection_name)],
            Statement::Flush { collection_names } => vec![(
                "collection_name_list",
                ParamValue::List(collection_names.clone()),
            )],
        }
    }
}
