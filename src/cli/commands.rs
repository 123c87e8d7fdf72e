//! CLI commands
//!
//! Shell commands handled by the REPL itself, outside the statement dialect.

use crate::kernel::Kernel;

/// Result of parsing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Not a shell command, feed the line to the statement buffer
    Continue(String),
    /// Command was handled, show output
    Handled(String),
    /// Drop the pending statement buffer
    Clear,
    /// Exit the REPL
    Exit,
}

/// Parse and handle shell commands.
///
/// Commands are only recognized at the start of a statement, so a line
/// inside a multi-line statement is never mistaken for one.
pub fn handle_command(input: &str, kernel: &Kernel, buffer_empty: bool) -> CommandResult {
    let trimmed = input.trim();
    if !buffer_empty && trimmed != "\\c" {
        return CommandResult::Continue(input.to_string());
    }

    match trimmed.to_lowercase().as_str() {
        "exit" | "quit" | "\\q" => CommandResult::Exit,
        "\\c" => CommandResult::Clear,
        "\\?" => CommandResult::Handled(help_text()),
        "status" => CommandResult::Handled(status_text(kernel)),
        _ => CommandResult::Continue(input.to_string()),
    }
}

fn status_text(kernel: &Kernel) -> String {
    format!(
        "milvus-shell Status:\n\
         ─────────────────────────────\n\
         Connection:  {}\n\
         Executions:  {}",
        kernel.connection_address().unwrap_or("not connected"),
        kernel.execution_count()
    )
}

/// Generate help text
fn help_text() -> String {
    r#"milvus-shell Commands:
─────────────────────────────────────────────
  \?               Show this help message
  \c               Discard the statement being typed
  status           Show connection and execution count
  exit, quit, \q   Exit milvus-shell

Statements end with ';' and may span several lines.
Type 'help;' for the statement reference.

Keyboard Shortcuts:
  Ctrl+D           Exit milvus-shell
─────────────────────────────────────────────"#
        .to_string()
}
