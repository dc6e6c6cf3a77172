//! I/O module
//!
//! Handles stream redirection and the line relay.
//!
//! # Components
//!
//! - `streams` - Input/output handles, optionally redirected to files
//! - `relay` - Line-by-line passthrough from input to output

pub mod relay;
pub mod streams;

pub use relay::{relay, LineReader};
pub use streams::{InputStream, OutputStream, Streams};
