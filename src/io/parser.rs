//! `.snippet` file parser
//!
//! Element lookup is by local name, so the schema namespace (or its absence)
//! does not matter. Unknown elements and attributes are ignored and unknown
//! enum values fall back to their defaults.

use std::collections::BTreeSet;
use std::fmt;

use roxmltree::{Document, Node};

use crate::model::{Language, Placeholder, Snippet, SnippetKind, SnippetType};

/// Error returned when a file can't be turned into a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `CodeSnippet` element
    MissingSnippet,
    /// More than one `CodeSnippet` element
    MultipleSnippets,
    /// Not well-formed XML
    Xml(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSnippet => write!(f, "File does not contain a code snippet"),
            Self::MultipleSnippets => write!(f, "Files with multiple snippets are not supported"),
            Self::Xml(msg) => write!(f, "File is not valid XML: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse the text of a `.snippet` file
pub fn parse_snippet(xml: &str) -> Result<Snippet, ParseError> {
    let doc = Document::parse(xml).map_err(|e| ParseError::Xml(e.to_string()))?;

    let mut snippets = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "CodeSnippet");

    let element = snippets.next().ok_or(ParseError::MissingSnippet)?;
    if snippets.next().is_some() {
        return Err(ParseError::MultipleSnippets);
    }

    Ok(parse_code_snippet(element))
}

fn parse_code_snippet(element: Node<'_, '_>) -> Snippet {
    let mut snippet = Snippet {
        format: element.attribute("Format").unwrap_or_default().to_string(),
        ..Default::default()
    };

    if let Some(header) = find_element(element, "Header") {
        snippet.title = find_text(header, "Title").unwrap_or_default();
        snippet.shortcut = find_text(header, "Shortcut").unwrap_or_default();
        snippet.description = find_text(header, "Description").unwrap_or_default();
        snippet.author = find_text(header, "Author").unwrap_or_default();
        snippet.help_url = find_text(header, "HelpUrl").unwrap_or_default();

        if let Some(types) = find_element(header, "SnippetTypes") {
            snippet.types = parse_types(types);
        }
    }

    if let Some(body) = find_element(element, "Snippet") {
        if let Some(code) = find_element(body, "Code") {
            snippet.code = text_content(code);
            snippet.language = code.attribute("Language").and_then(|id| {
                let language = Language::from_id(id);
                if language.is_none() {
                    tracing::debug!(language = id, "unknown snippet language, leaving unset");
                }
                language
            });
            snippet.kind = code
                .attribute("Kind")
                .and_then(SnippetKind::from_value)
                .unwrap_or_default();
            snippet.delimiter = code.attribute("Delimiter").and_then(parse_delimiter);
        }

        if let Some(declarations) = find_element(body, "Declarations") {
            snippet.placeholders = parse_declarations(declarations);
        }

        if let Some(imports) = find_element(body, "Imports") {
            snippet.namespaces = parse_imports(imports);
        }
    }

    snippet
}

fn parse_types(types: Node<'_, '_>) -> BTreeSet<SnippetType> {
    elements_named(types, "SnippetType")
        .filter_map(|n| {
            let value = text_content(n);
            let parsed = SnippetType::from_value(value.trim());
            if parsed.is_none() {
                tracing::debug!(value = %value, "ignoring unknown snippet type");
            }
            parsed
        })
        .collect()
}

fn parse_declarations(declarations: Node<'_, '_>) -> Vec<Placeholder> {
    let mut placeholders: Vec<Placeholder> = elements_named(declarations, "Literal")
        .filter_map(|literal| {
            // A literal without an ID can't be referenced from code
            let name = find_text(literal, "ID")?;

            // Editable unless explicitly "false"
            let is_editable = !literal
                .attribute("Editable")
                .is_some_and(|v| v.eq_ignore_ascii_case("false"));

            Some(Placeholder {
                name,
                default_value: find_text(literal, "Default").unwrap_or_default(),
                function: find_text(literal, "Function").unwrap_or_default(),
                tooltip: find_text(literal, "ToolTip").unwrap_or_default(),
                is_editable,
            })
        })
        .collect();

    placeholders.sort_by(|a, b| a.name.cmp(&b.name));
    placeholders.dedup_by(|a, b| a.name == b.name);
    placeholders
}

fn parse_imports(imports: Node<'_, '_>) -> Vec<String> {
    elements_named(imports, "Import")
        .filter_map(|import| find_text(import, "Namespace"))
        .collect()
}

/// A delimiter must be a single non-whitespace character
fn parse_delimiter(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(c),
        (None, _) => None,
        _ => {
            tracing::warn!(delimiter = value, "ignoring invalid delimiter, using default");
            None
        }
    }
}

/// Descendant elements of `node` (excluding `node`) with local name `name`, in document order
fn elements_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn find_element<'a, 'input: 'a>(node: Node<'a, 'input>, name: &'a str) -> Option<Node<'a, 'input>> {
    elements_named(node, name).next()
}

fn find_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    find_element(node, name).map(text_content)
}

/// Concatenated text and CDATA of all descendants
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
