//! Interactive REPL for milvus-shell
//!
//! Collects lines until a statement is terminated with `;`, then submits
//! the whole buffer to the kernel.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::cli::commands::{handle_command, CommandResult};
use crate::client::HttpMilvusClient;
use crate::core::{Config, Result};
use crate::kernel::{ExecuteReply, Kernel, StdoutDisplay};

/// Interactive REPL (Read-Eval-Print Loop)
pub struct Repl {
    kernel: Kernel,
    config: Config,
    /// Print execute replies as JSON
    json: bool,
    /// Suppress display output
    silent: bool,
}

impl Repl {
    /// Create a REPL backed by the HTTP client and stdout display
    pub fn with_config(config: Config) -> Result<Self> {
        let client = HttpMilvusClient::from_config(&config)?;
        let kernel = Kernel::new(Arc::new(client), Arc::new(StdoutDisplay));
        Ok(Self::with_kernel(kernel, config))
    }

    /// Create a REPL around an existing kernel
    pub fn with_kernel(kernel: Kernel, config: Config) -> Self {
        Self {
            kernel,
            config,
            json: false,
            silent: false,
        }
    }

    pub fn set_json(&mut self, json: bool) {
        self.json = json;
    }

    pub fn set_silent(&mut self, silent: bool) {
        self.silent = silent;
    }

    /// Connect to the configured default address, if any
    pub async fn connect_default(&mut self) -> Result<()> {
        if let Some(address) = self.config.milvus.default_address.clone() {
            self.kernel.open(&address).await?;
        }
        Ok(())
    }

    /// Execute one submission and report its reply
    pub async fn submit(&mut self, code: &str) -> Result<ExecuteReply> {
        let reply = self.kernel.execute(code, self.silent).await;
        self.report(&reply)?;
        Ok(reply)
    }

    fn report(&self, reply: &ExecuteReply) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(reply)?);
        } else if let Some(ref error) = reply.error {
            eprintln!("{}", error);
        }
        Ok(())
    }

    /// Run the REPL
    pub async fn run(&mut self) -> Result<()> {
        self.print_banner();

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut buffer = String::new();

        loop {
            if buffer.is_empty() {
                print!("{}", self.config.shell.prompt);
            } else {
                print!("{}", self.config.shell.continuation_prompt);
            }
            stdout.flush()?;

            let mut line = String::new();
            let read = stdin.lock().read_line(&mut line);
            match read {
                Ok(0) => {
                    // EOF (Ctrl+D)
                    if !buffer.trim().is_empty() {
                        self.submit(&buffer).await?;
                    }
                    println!("\nGoodbye!");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    continue;
                }
            }

            match handle_command(&line, &self.kernel, buffer.trim().is_empty()) {
                CommandResult::Exit => {
                    println!("Goodbye!");
                    break;
                }
                CommandResult::Clear => {
                    buffer.clear();
                    continue;
                }
                CommandResult::Handled(output) => {
                    println!("{}\n", output);
                    continue;
                }
                CommandResult::Continue(line) => {
                    if buffer.trim().is_empty() && line.trim().is_empty() {
                        buffer.clear();
                        continue;
                    }
                    buffer.push_str(&line);
                }
            }

            if buffer.trim_end().ends_with(';') {
                let code = std::mem::take(&mut buffer);
                self.submit(&code).await?;
            }
        }

        Ok(())
    }

    /// Print the startup banner
    fn print_banner(&self) {
        let info = self.kernel.info();
        println!("{} {}", info.banner, info.implementation_version);
        match self.kernel.connection_address() {
            Some(address) => println!("Connected to {}", address),
            None => println!("Not connected. Connect with: milvus://host:port;"),
        }
        println!("Type 'help;' for statements, '\\?' for shell commands.");
        println!("─────────────────────────────────────────────");
    }
}
