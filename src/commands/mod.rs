//! Contact book commands and the layers that drive them.
//!
//! - **command**: the closed set of operations and their replies
//! - **dispatcher**: name lookup, error replies, save after every command
//! - **session**: line parsing and the reserved session words

pub mod command;
pub mod dispatcher;
pub mod session;

pub use command::Command;
pub use dispatcher::{Dispatcher, INVALID_COMMAND};
pub use session::{parse_input, Reply, Session};
