//! Parsing of already-fetched feed bytes into raw entries.
//!
//! Network retrieval is the caller's concern; this module only consumes
//! in-memory RSS, Atom, or JSON Feed content.

pub mod parser;
pub mod types;
pub mod util;

pub use parser::parse_feed;
pub use types::RawEntry;
