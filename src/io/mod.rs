//! Reading and writing `.snippet` files
//!
//! The parser and writer are inverses for every snippet the editor can
//! produce: parsing the output of `write_snippet(s)` gives back `s`.

mod file_manager;
mod parser;
mod writer;
pub mod xml;

pub use file_manager::{FileError, FileManager};
pub use parser::{parse_snippet, ParseError};
pub use writer::{write_snippet, SNIPPET_SCHEMA};
pub use xml::WriteError;
