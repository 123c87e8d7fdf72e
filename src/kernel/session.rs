//! Kernel session
//!
//! Owns the connection and the execution counter, and runs submissions
//! statement by statement: split, parse, dispatch, render.

use std::sync::Arc;

use crate::client::{Connection, MilvusClient};
use crate::core::{Result, ShellError};
use crate::dialect::{self, Batch, Statement, Verb};
use crate::kernel::display::{DisplayData, DisplaySink};
use crate::kernel::render::{self, Output};
use crate::kernel::reply::{ExecuteReply, KernelInfo};

/// Shown instead of dispatching when no connection is open
pub const NOT_CONNECTED: &str =
    "Unable to connect to Milvus server. Check that the server is running.";

/// What a dispatched statement produced
#[derive(Debug, Clone)]
enum Outcome {
    /// A result that replaces the submission's pending output
    Output(Output),
    /// Nothing to show
    Silent,
    /// Display a message now and go on with the next statement
    Advisory(String),
    /// Display a message now and stop the submission successfully
    Halt(String),
}

/// A notebook-style session against one Milvus server at a time
pub struct Kernel {
    /// Database client used to open connections
    client: Arc<dyn MilvusClient>,
    /// Host display channel
    display: Arc<dyn DisplaySink>,
    /// Current connection, replaced by each successful `connect`
    connection: Option<Box<dyn Connection>>,
    execution_count: u32,
}

impl Kernel {
    /// Create a kernel with no connection
    pub fn new(client: Arc<dyn MilvusClient>, display: Arc<dyn DisplaySink>) -> Self {
        Self {
            client,
            display,
            connection: None,
            execution_count: 0,
        }
    }

    /// Kernel identity for hosts
    pub fn info(&self) -> KernelInfo {
        KernelInfo::default()
    }

    /// Number of non-silent submissions executed so far
    pub fn execution_count(&self) -> u32 {
        self.execution_count
    }

    /// Whether a connection is open
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Address of the open connection
    pub fn connection_address(&self) -> Option<&str> {
        self.connection.as_deref().map(|c| c.address())
    }

    /// Connect outside of a submission, as a host does at startup
    pub async fn open(&mut self, address: &str) -> Result<()> {
        match self.connect(address.to_string()).await? {
            Outcome::Advisory(message) => Err(ShellError::client(message)),
            _ => Ok(()),
        }
    }

    /// Execute a submission of `;`-separated statements.
    ///
    /// Statements run in order. The first parse or client error aborts the
    /// rest of the submission and is reported in the reply; it never
    /// escapes this call.
    pub async fn execute(&mut self, code: &str, silent: bool) -> ExecuteReply {
        if !silent {
            self.execution_count += 1;
        }

        let batch = dialect::split(code);
        if batch.is_empty() {
            return ExecuteReply::ok(self.execution_count);
        }

        match self.run(&batch, silent).await {
            Ok(Some(output)) => {
                self.emit(&output, silent);
                ExecuteReply::ok(self.execution_count)
            }
            Ok(None) => ExecuteReply::ok(self.execution_count),
            Err(e) => {
                if e.is_parse() {
                    tracing::debug!("Submission rejected: {}", e);
                } else {
                    tracing::warn!("Submission failed: {}", e);
                }
                self.emit(&Output::text(e.to_string()), silent);
                ExecuteReply::error(
                    self.execution_count,
                    format!("Error executing code {}", batch.source),
                )
            }
        }
    }

    /// Run every statement of a batch, returning the last output
    async fn run(&mut self, batch: &Batch, silent: bool) -> Result<Option<Output>> {
        let mut output = None;

        for text in &batch.statements {
            let (verb, _) = Verb::recognize(text);
            if verb.requires_connection() && self.connection.is_none() {
                tracing::warn!(%verb, "Statement needs a connection");
                return Ok(Some(Output::text(NOT_CONNECTED)));
            }

            let statement = dialect::parse(text)?;
            match self.dispatch(statement).await? {
                Outcome::Output(o) => output = Some(o),
                Outcome::Silent => {}
                Outcome::Advisory(message) => self.emit(&Output::text(message), silent),
                Outcome::Halt(message) => return Ok(Some(Output::text(message))),
            }
        }

        Ok(output)
    }

    /// Invoke the operation a statement names
    async fn dispatch(&mut self, statement: Statement) -> Result<Outcome> {
        let verb = statement.verb();
        tracing::debug!(%verb, params = ?statement.params(), "Dispatching statement");

        match statement {
            Statement::Connect { address } => return self.connect(address).await,
            Statement::Help => return Ok(Outcome::Output(render::help())),
            Statement::Unknown => return Ok(Outcome::Silent),
            _ => {}
        }

        let Some(connection) = self.connection.as_deref() else {
            return Ok(Outcome::Halt(NOT_CONNECTED.to_string()));
        };

        let output = call(connection, statement).await?;
        Ok(output.map_or(Outcome::Silent, Outcome::Output))
    }

    async fn connect(&mut self, address: String) -> Result<Outcome> {
        if address.matches('@').count() > 1 {
            tracing::warn!(%address, "Rejected Milvus address");
            return Ok(Outcome::Advisory(format!(
                "Invalid Milvus address '{}': expected at most one '@'.",
                address
            )));
        }

        let connection = self.client.connect(&address).await?;
        tracing::info!(%address, client = self.client.name(), "Connected");
        self.connection = Some(connection);
        Ok(Outcome::Silent)
    }

    fn emit(&self, output: &Output, silent: bool) {
        if silent {
            return;
        }
        self.display.display(DisplayData::from_output(output));
    }
}

/// Forward a statement to its client operation
async fn call(connection: &dyn Connection, statement: Statement) -> Result<Option<Output>> {
    let status = match statement {
        Statement::ListCollections => {
            return Ok(Some(render::names(&connection.list_collections().await?)));
        }
        Statement::ListPartitions { collection_name } => {
            return Ok(Some(render::names(
                &connection.list_partitions(&collection_name).await?,
            )));
        }
        Statement::CreateCollection(spec) => {
            connection
                .create_collection(
                    &spec.collection_name,
                    spec.dimension,
                    spec.index_file_size,
                    spec.metric_type,
                )
                .await?
        }
        Statement::DropCollection { collection_name } => {
            connection.drop_collection(&collection_name).await?
        }
        Statement::CreatePartition {
            collection_name,
            partition_tag,
        } => {
            connection
                .create_partition(&collection_name, &partition_tag)
                .await?
        }
        Statement::DropPartition {
            collection_name,
            partition_tag,
        } => {
            connection
                .drop_partition(&collection_name, &partition_tag)
                .await?
        }
        Statement::CreateIndex(spec) => {
            connection
                .create_index(&spec.collection_name, spec.index_type, spec.nlist)
                .await?
        }
        Statement::DropIndex { collection_name } => connection.drop_index(&collection_name).await?,
        Statement::Compact { collection_name } => connection.compact(&collection_name).await?,
        Statement::Flush { collection_names } => connection.flush(&collection_names).await?,
        // Handled by the kernel before a connection is required
        Statement::Connect { .. } | Statement::Help | Statement::Unknown => return Ok(None),
    };

    if !status.is_ok() {
        tracing::warn!(code = status.code, message = %status.message, "Milvus reported failure");
    }
    Ok(Some(render::status(&status)))
}
