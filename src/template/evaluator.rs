//! Preview rendering
//!
//! Produces the code as it would look once inserted with every placeholder
//! left at its default value. The result is for display only.

use std::fmt;

use super::lexer::{Token, TokenKind};
use crate::model::{is_reserved_placeholder, Language, Snippet};

/// Error rendering a preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// Namespaces are set but the language has no import statements.
    /// The editor clears namespaces when the language changes, so reaching this
    /// means the model was put into an inconsistent state.
    ImportsNotSupported(Language),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImportsNotSupported(language) => {
                write!(f, "{} does not support imports/namespaces", language)
            }
        }
    }
}

impl std::error::Error for PreviewError {}

/// Render `tokens` (lexed from `snippet.code`) into a preview string
pub fn evaluate(snippet: &Snippet, tokens: &[Token]) -> Result<String, PreviewError> {
    let imports = match snippet.language {
        Some(language) => format_imports(&snippet.namespaces, language)?,
        None => String::new(),
    };
    let code = format_code_block(snippet, tokens);

    let parts: Vec<&str> = [imports.as_str(), code.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    Ok(parts.join("\n\n"))
}

/// One import statement per non-empty namespace, newline separated
pub fn format_imports(namespaces: &[String], language: Language) -> Result<String, PreviewError> {
    let namespaces: Vec<&str> = namespaces
        .iter()
        .map(String::as_str)
        .filter(|ns| !ns.is_empty())
        .collect();

    if namespaces.is_empty() {
        return Ok(String::new());
    }

    namespaces
        .into_iter()
        .map(|ns| {
            language
                .format_import(ns)
                .ok_or(PreviewError::ImportsNotSupported(language))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|lines| lines.join("\n"))
}

fn format_code_block(snippet: &Snippet, tokens: &[Token]) -> String {
    let mut code = String::new();

    for token in tokens {
        match token.kind {
            TokenKind::Literal => code.push_str(token.value.as_deref().unwrap_or_default()),
            TokenKind::Placeholder => {
                let Some(name) = token.value.as_deref() else {
                    continue;
                };
                if is_reserved_placeholder(name) {
                    continue;
                }
                match snippet.placeholder(name) {
                    Some(placeholder) => code.push_str(placeholder.preview_text()),
                    None => code.push_str(name),
                }
            }
            // Keep malformed delimiters visible
            TokenKind::Bad => code.push_str(&token.source_text),
            TokenKind::EndOfFile => {}
        }
    }

    code
}
