//! Kernel module - statement execution
//!
//! Hosts the session that dispatches parsed statements to a Milvus
//! connection, renders results and reports completion status.

pub mod display;
pub mod render;
pub mod reply;
pub mod session;

pub use display::{DisplayData, DisplaySink, StdoutDisplay};
pub use render::Output;
pub use reply::{ExecuteReply, KernelInfo, ReplyStatus};
pub use session::{Kernel, NOT_CONNECTED};
