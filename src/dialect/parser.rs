//! Statement recognition and parameter extraction
//!
//! Verbs are matched case-insensitively; extracted values keep the case
//! they were written in. The `where` and `and` keywords must stand as
//! whitespace-delimited words.

use std::collections::BTreeMap;

use crate::core::{IndexType, MetricType, ParseError};
use crate::dialect::statement::{CollectionSpec, IndexSpec, Statement, Verb};

const COLLECTION_KEYS: &[&str] = &["dimension", "index_file_size", "metric_type"];
const PARTITION_KEYS: &[&str] = &["partition_tag"];
const INDEX_KEYS: &[&str] = &["index_type", "nlist"];

/// Parse one trimmed statement.
///
/// Unrecognized statements parse to [`Statement::Unknown`].
pub fn parse(statement: &str) -> Result<Statement, ParseError> {
    let (verb, prefix_len) = Verb::recognize(statement);
    let rest = &statement[prefix_len..];

    let parsed = match verb {
        Verb::Connect => Statement::Connect {
            address: rest.to_string(),
        },
        Verb::Help => Statement::Help,
        Verb::ListCollections => Statement::ListCollections,
        Verb::CreateCollection => {
            let (name, clauses) = split_where(statement, rest)?;
            let mut clauses = Clauses::parse(clauses, COLLECTION_KEYS)?;
            Statement::CreateCollection(CollectionSpec {
                collection_name: name,
                dimension: clauses.int("dimension")?,
                index_file_size: clauses.int("index_file_size")?,
                metric_type: clauses.metric_type()?,
            })
        }
        Verb::DropCollection => Statement::DropCollection {
            collection_name: collection_name(rest)?,
        },
        Verb::CreatePartition | Verb::DropPartition => {
            let (collection_name, clauses) = split_where(statement, rest)?;
            let mut clauses = Clauses::parse(clauses, PARTITION_KEYS)?;
            let partition_tag = clauses.take("partition_tag")?.to_string();
            if verb == Verb::CreatePartition {
                Statement::CreatePartition {
                    collection_name,
                    partition_tag,
                }
            } else {
                Statement::DropPartition {
                    collection_name,
                    partition_tag,
                }
            }
        }
        Verb::ListPartitions => Statement::ListPartitions {
            collection_name: collection_name(rest)?,
        },
        Verb::CreateIndex => {
            let (name, clauses) = split_where(statement, rest)?;
            let mut clauses = Clauses::parse(clauses, INDEX_KEYS)?;
            Statement::CreateIndex(IndexSpec {
                collection_name: name,
                index_type: clauses.index_type()?,
                nlist: clauses.int("nlist")?,
            })
        }
        Verb::DropIndex => Statement::DropIndex {
            collection_name: collection_name(rest)?,
        },
        Verb::Compact => Statement::Compact {
            collection_name: collection_name(rest)?,
        },
        Verb::Flush => {
            let collection_names: Vec<String> = rest
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            if collection_names.is_empty() {
                return Err(ParseError::MissingParameter("collection_name_list"));
            }
            Statement::Flush { collection_names }
        }
        Verb::Unknown => Statement::Unknown,
    };

    Ok(parsed)
}

fn collection_name(text: &str) -> Result<String, ParseError> {
    let name = text.trim();
    if name.is_empty() {
        return Err(ParseError::MissingParameter("collection_name"));
    }
    Ok(name.to_string())
}

/// Split `NAME where CLAUSES` into the collection name and the clause text
fn split_where<'a>(statement: &str, rest: &'a str) -> Result<(String, &'a str), ParseError> {
    let (start, end) = keyword_spans(rest, "where")
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::MissingWhere(statement.to_string()))?;
    let name = collection_name(&rest[..start])?;
    Ok((name, &rest[end..]))
}

/// Byte spans of `keyword` where it stands as a whitespace-delimited word.
///
/// The start and end of `text` count as delimiters.
fn keyword_spans(text: &str, keyword: &str) -> Vec<(usize, usize)> {
    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    lower
        .match_indices(keyword)
        .map(|(start, kw)| (start, start + kw.len()))
        .filter(|&(start, end)| {
            let before = start == 0 || bytes[start - 1].is_ascii_whitespace();
            let after = end == bytes.len() || bytes[end].is_ascii_whitespace();
            before && after
        })
        .collect()
}

/// `key=value` clauses joined by `and`
struct Clauses<'a> {
    values: BTreeMap<&'static str, &'a str>,
}

impl<'a> Clauses<'a> {
    fn parse(text: &'a str, allowed: &[&'static str]) -> Result<Self, ParseError> {
        let mut values = BTreeMap::new();
        let mut cursor = 0;
        let mut pieces = Vec::new();
        for (start, end) in keyword_spans(text, "and") {
            pieces.push(&text[cursor..start]);
            cursor = end;
        }
        pieces.push(&text[cursor..]);

        for clause in pieces {
            let clause = clause.trim();
            let (key, value) = clause
                .split_once('=')
                .ok_or_else(|| ParseError::MissingAssignment(clause.to_string()))?;
            let key = key.trim();
            let known = allowed
                .iter()
                .find(|k| **k == key)
                .ok_or_else(|| ParseError::UnknownKey(key.to_string()))?;
            if values.insert(*known, value.trim()).is_some() {
                return Err(ParseError::DuplicateKey(key.to_string()));
            }
        }

        Ok(Self { values })
    }

    fn take(&mut self, key: &'static str) -> Result<&'a str, ParseError> {
        self.values
            .remove(key)
            .ok_or(ParseError::MissingParameter(key))
    }

    fn int(&mut self, key: &'static str) -> Result<i64, ParseError> {
        let value = self.take(key)?;
        value.parse().map_err(|_| ParseError::InvalidInteger {
            key,
            value: value.to_string(),
        })
    }

    fn metric_type(&mut self) -> Result<MetricType, ParseError> {
        let value = unquote(self.take("metric_type")?);
        value
            .parse()
            .map_err(|_| ParseError::UnknownMetricType(value.to_string()))
    }

    fn index_type(&mut self) -> Result<IndexType, ParseError> {
        let value = unquote(self.take("index_type")?);
        value
            .parse()
            .map_err(|_| ParseError::UnknownIndexType(value.to_string()))
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '\'' || c == '"')
}
