//! Languages supported by Visual Studio code snippets
//!
//! Lookup is table driven: the canonical file ids are matched case-insensitively,
//! followed by a small alias table for ids other tools write.

use std::fmt;

/// Target language of a snippet's code block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Cpp,
    CSharp,
    Css,
    Html,
    JavaScript,
    Sql,
    TypeScript,
    VisualBasic,
    Xaml,
    Xml,
}

/// Canonical id (as written to the `Language` attribute) for every language
const LANGUAGE_IDS: &[(Language, &str)] = &[
    (Language::Cpp, "CPP"),
    (Language::CSharp, "CSharp"),
    (Language::Css, "CSS"),
    (Language::Html, "HTML"),
    (Language::JavaScript, "JavaScript"),
    (Language::Sql, "SQL"),
    (Language::TypeScript, "TypeScript"),
    (Language::VisualBasic, "VB"),
    (Language::Xaml, "XAML"),
    (Language::Xml, "XML"),
];

/// Alternative ids, matched after the canonical ones. Upper case.
const LANGUAGE_ALIASES: &[(&str, Language)] = &[
    ("C++", Language::Cpp),
    ("C", Language::Cpp),
    ("SQL_SSDT", Language::Sql),
];

impl Language {
    /// All languages, in the order the editor lists them
    pub const ALL: [Language; 10] = [
        Language::CSharp,
        Language::Cpp,
        Language::Css,
        Language::Html,
        Language::JavaScript,
        Language::Sql,
        Language::TypeScript,
        Language::VisualBasic,
        Language::Xaml,
        Language::Xml,
    ];

    /// Resolve a `Language` attribute value. Unknown or empty ids resolve to `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        if id.is_empty() {
            return None;
        }

        let upper = id.to_uppercase();

        LANGUAGE_IDS
            .iter()
            .find(|(_, canonical)| canonical.to_uppercase() == upper)
            .map(|(language, _)| *language)
            .or_else(|| {
                LANGUAGE_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == upper)
                    .map(|(_, language)| *language)
            })
    }

    /// The id written to `.snippet` files
    pub fn id(self) -> &'static str {
        LANGUAGE_IDS
            .iter()
            .find(|(language, _)| *language == self)
            .map(|(_, id)| *id)
            .unwrap_or_default()
    }

    /// Human readable name
    pub fn description(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Css => "CSS",
            Language::Html => "HTML",
            Language::JavaScript => "JavaScript",
            Language::Sql => "SQL",
            Language::TypeScript => "TypeScript",
            Language::VisualBasic => "Visual Basic",
            Language::Xaml => "XAML",
            Language::Xml => "XML",
        }
    }

    /// Only C# and Visual Basic snippets carry an `Imports` section
    pub fn can_have_namespaces(self) -> bool {
        matches!(self, Language::CSharp | Language::VisualBasic)
    }

    /// Format one import statement, or `None` if the language has no imports
    pub fn format_import(self, namespace: &str) -> Option<String> {
        match self {
            Language::CSharp => Some(format!("using {};", namespace)),
            Language::VisualBasic => Some(format!("Imports {}", namespace)),
            _ => None,
        }
    }

    /// Pattern a shortcut must fully match to be accepted by Visual Studio
    pub fn shortcut_pattern(language: Option<Language>) -> &'static str {
        match language {
            // The @ char followed by alphanumeric and underscore chars
            Some(Language::Css) => "@[A-Za-z0-9_]*",
            // Alphanumeric chars only
            Some(Language::Cpp) => "[A-Za-z0-9]*",
            _ => "[A-Za-z0-9_]*",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
