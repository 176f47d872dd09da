//! Snippet template language
//!
//! ```text
//! code ──tokenize──> [Token] ──┬──> extract_placeholder_names (session sync)
//!                              └──> evaluate (preview)
//! ```

mod evaluator;
mod lexer;
mod placeholders;

pub use evaluator::{evaluate, format_imports, PreviewError};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use placeholders::extract_placeholder_names;
