//! Output writing for cleaned tables.

mod writer;

pub use writer::{Writer, WriterConfig};
