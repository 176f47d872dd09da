//! Snippet data model
//!
//! A `Snippet` mirrors one `<CodeSnippet>` element of a `.snippet` file.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::language::Language;

/// Delimiter used when a snippet doesn't declare one
pub const DEFAULT_DELIMITER: char = '$';

/// Placeholder names with a fixed meaning in Visual Studio.
/// `end` marks the cursor position after insertion, `selected` the surrounded text.
pub const RESERVED_PLACEHOLDERS: [&str; 2] = ["end", "selected"];

/// Version written to new snippets
pub const DEFAULT_FORMAT: &str = "1.0.0";

/// Returns true for `end` and `selected`
pub fn is_reserved_placeholder(name: &str) -> bool {
    RESERVED_PLACEHOLDERS.contains(&name)
}

/// One declared literal of a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub default_value: String,
    /// Name of a Visual Studio snippet function, passed through as-is
    pub function: String,
    pub tooltip: String,
    pub is_editable: bool,
}

impl Placeholder {
    /// A fresh placeholder with empty metadata
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: String::new(),
            function: String::new(),
            tooltip: String::new(),
            is_editable: true,
        }
    }

    /// Text shown in the preview: the default value, or the name when there is none
    pub fn preview_text(&self) -> &str {
        if self.default_value.is_empty() {
            &self.name
        } else {
            &self.default_value
        }
    }
}

/// How a snippet can be inserted
///
/// Variant order matches the lexicographic order of the ids, so a `BTreeSet`
/// iterates in the order the writer emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SnippetType {
    Expansion,
    Refactoring,
    SurroundsWith,
}

impl SnippetType {
    pub const ALL: [SnippetType; 3] = [
        SnippetType::Expansion,
        SnippetType::SurroundsWith,
        SnippetType::Refactoring,
    ];

    /// Case-insensitive lookup; unknown values resolve to `None`
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.value().eq_ignore_ascii_case(value))
    }

    pub fn value(self) -> &'static str {
        match self {
            SnippetType::Expansion => "Expansion",
            SnippetType::SurroundsWith => "SurroundsWith",
            SnippetType::Refactoring => "Refactoring",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SnippetType::Expansion => "Expansion",
            SnippetType::SurroundsWith => "Surrounds With",
            SnippetType::Refactoring => "Refactoring",
        }
    }
}

impl fmt::Display for SnippetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Where in the code a snippet may be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnippetKind {
    #[default]
    Any,
    File,
    TypeDeclaration,
    MethodDeclaration,
    MethodBody,
}

impl SnippetKind {
    pub const ALL: [SnippetKind; 5] = [
        SnippetKind::Any,
        SnippetKind::File,
        SnippetKind::TypeDeclaration,
        SnippetKind::MethodDeclaration,
        SnippetKind::MethodBody,
    ];

    /// Case-insensitive lookup; unknown values resolve to `None`
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.value().eq_ignore_ascii_case(value))
    }

    /// Value of the `Kind` attribute
    pub fn value(self) -> &'static str {
        match self {
            SnippetKind::Any => "any",
            SnippetKind::File => "file",
            SnippetKind::TypeDeclaration => "type decl",
            SnippetKind::MethodDeclaration => "method decl",
            SnippetKind::MethodBody => "method body",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SnippetKind::Any => "Any",
            SnippetKind::File => "File",
            SnippetKind::TypeDeclaration => "Type Declaration",
            SnippetKind::MethodDeclaration => "Method Declaration",
            SnippetKind::MethodBody => "Method Body",
        }
    }
}

impl fmt::Display for SnippetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A complete code snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub format: String,
    pub title: String,
    pub shortcut: String,
    pub description: String,
    pub author: String,
    pub help_url: String,
    pub language: Option<Language>,
    /// Template text with embedded placeholders
    pub code: String,
    /// `None` means the default `$`
    pub delimiter: Option<char>,
    /// Sorted by name, unique
    pub placeholders: Vec<Placeholder>,
    /// May contain empty entries the user hasn't filled in yet
    pub namespaces: Vec<String>,
    pub types: BTreeSet<SnippetType>,
    pub kind: SnippetKind,
}

impl Default for Snippet {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            title: String::new(),
            shortcut: String::new(),
            description: String::new(),
            author: String::new(),
            help_url: String::new(),
            language: None,
            code: String::new(),
            delimiter: None,
            placeholders: Vec::new(),
            namespaces: Vec::new(),
            types: BTreeSet::new(),
            kind: SnippetKind::Any,
        }
    }
}

impl Snippet {
    /// The delimiter used to lex `code`
    pub fn effective_delimiter(&self) -> char {
        self.delimiter.unwrap_or(DEFAULT_DELIMITER)
    }

    pub fn can_have_namespaces(&self) -> bool {
        self.language.is_some_and(Language::can_have_namespaces)
    }

    pub fn placeholder(&self, name: &str) -> Option<&Placeholder> {
        self.placeholders
            .binary_search_by(|p| p.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.placeholders[idx])
    }

    /// Whether the shortcut is accepted for the current language.
    /// An empty shortcut is valid: the snippet is still reachable from the context menu.
    pub fn is_valid_shortcut(&self) -> bool {
        static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();

        let patterns = PATTERNS.get_or_init(|| {
            [None, Some(Language::Css), Some(Language::Cpp)]
                .into_iter()
                .map(Language::shortcut_pattern)
                .filter_map(|pattern| {
                    Regex::new(&format!("^(?:{})$", pattern))
                        .ok()
                        .map(|re| (pattern, re))
                })
                .collect()
        });

        let wanted = Language::shortcut_pattern(self.language);

        patterns
            .iter()
            .find(|(pattern, _)| *pattern == wanted)
            .map_or(true, |(_, re)| re.is_match(&self.shortcut))
    }

    /// File name used when saving a snippet that has never been saved
    pub fn default_file_name(&self) -> String {
        let base = if self.shortcut.trim().is_empty() {
            &self.title
        } else {
            &self.shortcut
        };

        let cleaned: String = base
            .trim()
            .chars()
            .filter(|c| !is_invalid_file_name_char(*c))
            .collect();

        if cleaned.is_empty() {
            "untitled.snippet".to_string()
        } else {
            format!("{}.snippet", cleaned)
        }
    }
}

fn is_invalid_file_name_char(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || c.is_control()
}
