//! Command-line argument parsing for the snippet editor
//!
//! Every edit the CLI makes goes through `update()` as a message, the same
//! path an interactive front end would take.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::messages::{Msg, NamespaceMsg, PlaceholderMsg, SnippetMsg, TypeMsg};
use crate::model::{Language, SnippetKind, SnippetSession, SnippetType};
use crate::update::update;

/// Editor for Visual Studio code snippet files
#[derive(Parser, Debug)]
#[command(name = "snippet", version, about = "Edit Visual Studio .snippet files")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new snippet file
    New {
        /// Output path (defaults to a name derived from the title)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(long)]
        title: Option<String>,
        /// Language id (CSharp, VB, CPP, ...)
        #[arg(long, value_parser = parse_language)]
        language: Option<Language>,
    },
    /// Print the code with placeholders filled in
    Preview {
        file: PathBuf,
    },
    /// Validate a snippet file
    Check {
        file: PathBuf,
    },
    /// Rewrite a snippet file in canonical form
    Format {
        file: PathBuf,
        /// Overwrite the file instead of printing to stdout
        #[arg(short, long)]
        write: bool,
    },
    /// Show snippet metadata and placeholders
    Show {
        file: PathBuf,
    },
    /// Change fields of a snippet file
    Edit(EditArgs),
    /// List recently used snippet files
    Recent,
}

/// Field edits applied in order: scalars, code and delimiter first, then
/// placeholder metadata against the reconciled placeholder list.
#[derive(Args, Debug, Default)]
pub struct EditArgs {
    pub file: PathBuf,

    /// Save to this path instead of the input file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub format: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub shortcut: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub help_url: Option<String>,

    /// Language id
    #[arg(long, value_parser = parse_language)]
    pub language: Option<Language>,
    /// Unset the language
    #[arg(long, conflicts_with = "language")]
    pub no_language: bool,

    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<SnippetKind>,

    /// New code text
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,
    /// Read new code text from a file
    #[arg(long, value_name = "PATH")]
    pub code_file: Option<PathBuf>,

    /// Single non-whitespace delimiter character
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<char>,
    /// Go back to the default `$` delimiter
    #[arg(long, conflicts_with = "delimiter")]
    pub default_delimiter: bool,

    #[arg(long = "add-type", value_parser = parse_type)]
    pub add_types: Vec<SnippetType>,
    #[arg(long = "remove-type", value_parser = parse_type)]
    pub remove_types: Vec<SnippetType>,

    /// Append an import
    #[arg(long = "add-namespace", value_name = "NAMESPACE")]
    pub add_namespaces: Vec<String>,
    /// Remove every import
    #[arg(long)]
    pub clear_namespaces: bool,

    /// Set a placeholder default value
    #[arg(long = "default", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub defaults: Vec<(String, String)>,
    #[arg(long = "tooltip", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub tooltips: Vec<(String, String)>,
    #[arg(long = "function", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub functions: Vec<(String, String)>,
    /// Mark placeholders as not editable
    #[arg(long = "readonly", value_name = "NAME")]
    pub readonly: Vec<String>,
    /// Mark placeholders as editable
    #[arg(long = "editable", value_name = "NAME")]
    pub editable: Vec<String>,
}

impl EditArgs {
    /// Apply the edits to `session`. `code` is the text read from `--code-file`, if any.
    ///
    /// Returns the number of messages that changed the snippet.
    pub fn apply(&self, session: &mut SnippetSession, code: Option<String>) -> Result<usize, String> {
        let mut changes = 0;
        let mut dispatch = |session: &mut SnippetSession, msg: Msg| {
            if update(session, msg).is_some() {
                changes += 1;
            }
        };

        let scalars: [(&Option<String>, fn(String) -> SnippetMsg); 6] = [
            (&self.format, SnippetMsg::SetFormat),
            (&self.title, SnippetMsg::SetTitle),
            (&self.shortcut, SnippetMsg::SetShortcut),
            (&self.description, SnippetMsg::SetDescription),
            (&self.author, SnippetMsg::SetAuthor),
            (&self.help_url, SnippetMsg::SetHelpUrl),
        ];
        for (value, msg) in scalars {
            if let Some(value) = value {
                dispatch(session, msg(value.clone()).into());
            }
        }

        if self.language.is_some() || self.no_language {
            dispatch(session, SnippetMsg::SetLanguage(self.language).into());
        }
        if let Some(kind) = self.kind {
            dispatch(session, SnippetMsg::SetKind(kind).into());
        }
        if self.delimiter.is_some() || self.default_delimiter {
            dispatch(session, SnippetMsg::SetDelimiter(self.delimiter).into());
        }
        if let Some(code) = code.or_else(|| self.code.clone()) {
            dispatch(session, SnippetMsg::SetCode(code).into());
        }

        for kind in &self.add_types {
            dispatch(session, TypeMsg::Add(*kind).into());
        }
        for kind in &self.remove_types {
            dispatch(session, TypeMsg::Remove(*kind).into());
        }

        if self.clear_namespaces {
            for index in (0..session.snippet().namespaces.len()).rev() {
                dispatch(session, NamespaceMsg::Remove(index).into());
            }
        }
        for namespace in &self.add_namespaces {
            dispatch(session, NamespaceMsg::Add.into());
            let index = session.snippet().namespaces.len() - 1;
            dispatch(
                session,
                NamespaceMsg::Update {
                    index,
                    value: namespace.clone(),
                }
                .into(),
            );
        }

        for (name, value) in &self.defaults {
            let index = placeholder_index(session, name)?;
            dispatch(
                session,
                PlaceholderMsg::SetDefaultValue {
                    index,
                    value: value.clone(),
                }
                .into(),
            );
        }
        for (name, value) in &self.tooltips {
            let index = placeholder_index(session, name)?;
            dispatch(
                session,
                PlaceholderMsg::SetTooltip {
                    index,
                    value: value.clone(),
                }
                .into(),
            );
        }
        for (name, value) in &self.functions {
            let index = placeholder_index(session, name)?;
            dispatch(
                session,
                PlaceholderMsg::SetFunction {
                    index,
                    value: value.clone(),
                }
                .into(),
            );
        }
        for (names, is_editable) in [(&self.readonly, false), (&self.editable, true)] {
            for name in names {
                let index = placeholder_index(session, name)?;
                dispatch(
                    session,
                    PlaceholderMsg::SetEditable { index, is_editable }.into(),
                );
            }
        }

        Ok(changes)
    }
}

fn placeholder_index(session: &SnippetSession, name: &str) -> Result<usize, String> {
    session
        .placeholder_index(name)
        .ok_or_else(|| format!("No placeholder named '{}' in the code", name))
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::from_id(value).ok_or_else(|| {
        let known: Vec<_> = Language::ALL.iter().map(|l| l.id()).collect();
        format!("unknown language '{}' (expected one of {})", value, known.join(", "))
    })
}

fn parse_kind(value: &str) -> Result<SnippetKind, String> {
    SnippetKind::from_value(value).ok_or_else(|| {
        let known: Vec<_> = SnippetKind::ALL.iter().map(|k| k.value()).collect();
        format!("unknown kind '{}' (expected one of {})", value, known.join(", "))
    })
}

fn parse_type(value: &str) -> Result<SnippetType, String> {
    SnippetType::from_value(value).ok_or_else(|| format!("unknown snippet type '{}'", value))
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        _ => Err("delimiter must be a single non-whitespace character".to_string()),
    }
}

fn parse_assignment(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", value))
}
