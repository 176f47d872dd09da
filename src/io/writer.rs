//! `.snippet` file writer
//!
//! Optional values that are empty or whitespace are left out of the file
//! entirely rather than written as empty elements. Code is the exception:
//! whitespace is meaningful in a template, so any non-empty code is written
//! as-is and reads back unchanged.

use super::xml::{format_document, WriteError, XmlElement};
use crate::model::{Placeholder, Snippet};

/// Namespace of the Visual Studio code snippet schema
pub const SNIPPET_SCHEMA: &str = "http://schemas.microsoft.com/VisualStudio/2005/CodeSnippet";

/// Serialize `snippet` to a complete `.snippet` document
pub fn write_snippet(snippet: &Snippet) -> Result<String, WriteError> {
    let mut root = XmlElement::new("CodeSnippets");
    root.set_attribute("xmlns", SNIPPET_SCHEMA);

    let code_snippet = root.append("CodeSnippet");
    if is_present(&snippet.format) {
        code_snippet.set_attribute("Format", snippet.format.as_str());
    }

    append_header(code_snippet, snippet);
    append_snippet(code_snippet, snippet);

    format_document(&root)
}

fn append_header(parent: &mut XmlElement, snippet: &Snippet) {
    let header = parent.append("Header");

    append_optional(header, "Title", &snippet.title);
    append_optional(header, "Shortcut", &snippet.shortcut);
    append_optional(header, "Description", &snippet.description);
    append_optional(header, "Author", &snippet.author);
    append_optional(header, "HelpUrl", &snippet.help_url);

    if !snippet.types.is_empty() {
        let types = header.append("SnippetTypes");
        let mut values: Vec<&str> = snippet.types.iter().map(|t| t.value()).collect();
        values.sort_unstable();
        for value in values {
            types.append_text("SnippetType", value);
        }
    }
}

fn append_snippet(parent: &mut XmlElement, snippet: &Snippet) {
    let element = parent.append("Snippet");

    if !snippet.placeholders.is_empty() {
        let declarations = element.append("Declarations");
        let mut placeholders: Vec<&Placeholder> = snippet.placeholders.iter().collect();
        placeholders.sort_by(|a, b| a.name.cmp(&b.name));
        for placeholder in placeholders {
            append_placeholder(declarations, placeholder);
        }
    }

    if has_code_element(snippet) {
        let code = element.append("Code");
        if let Some(language) = snippet.language {
            code.set_attribute("Language", language.id());
        }
        code.set_attribute("Kind", snippet.kind.value());
        if let Some(delimiter) = snippet.delimiter.filter(|c| !c.is_whitespace()) {
            code.set_attribute("Delimiter", delimiter.to_string());
        }
        code.push_cdata(&snippet.code);
    }

    let namespaces: Vec<&str> = snippet
        .namespaces
        .iter()
        .map(String::as_str)
        .filter(|ns| !ns.is_empty())
        .collect();
    if !namespaces.is_empty() {
        let imports = element.append("Imports");
        for namespace in namespaces {
            imports.append("Import").append_text("Namespace", namespace);
        }
    }
}

/// The `Code` element also carries language, kind and delimiter, so it is kept
/// whenever any of them would be lost by leaving it out.
fn has_code_element(snippet: &Snippet) -> bool {
    !snippet.code.is_empty()
        || snippet.language.is_some()
        || snippet.delimiter.is_some()
        || snippet.kind != Default::default()
}

fn append_placeholder(parent: &mut XmlElement, placeholder: &Placeholder) {
    let literal = parent.append("Literal");
    literal.set_attribute("Editable", placeholder.is_editable.to_string());

    literal.append_text("ID", &placeholder.name);
    literal.append_text("Default", &placeholder.default_value);
    append_optional(literal, "Function", &placeholder.function);
    append_optional(literal, "ToolTip", &placeholder.tooltip);
}

fn append_optional(parent: &mut XmlElement, name: &'static str, value: &str) {
    if is_present(value) {
        parent.append_text(name, value);
    }
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
