//! Scalar field, code and delimiter updates

use super::placeholders::sync_placeholders;
use crate::commands::Cmd;
use crate::messages::SnippetMsg;
use crate::model::{Snippet, SnippetSession};

/// Handle snippet field messages
pub fn update_snippet(session: &mut SnippetSession, msg: SnippetMsg) -> Option<Cmd> {
    match msg {
        SnippetMsg::SetFormat(value) => set_text(session, value, |s| &mut s.format),
        SnippetMsg::SetTitle(value) => set_text(session, value, |s| &mut s.title),
        SnippetMsg::SetShortcut(value) => set_text(session, value, |s| &mut s.shortcut),
        SnippetMsg::SetDescription(value) => set_text(session, value, |s| &mut s.description),
        SnippetMsg::SetAuthor(value) => set_text(session, value, |s| &mut s.author),
        SnippetMsg::SetHelpUrl(value) => set_text(session, value, |s| &mut s.help_url),

        SnippetMsg::SetLanguage(language) => {
            if session.snippet().language == language {
                return None;
            }
            session.edit(|s| {
                s.language = language;
                if !s.can_have_namespaces() && !s.namespaces.is_empty() {
                    tracing::debug!(
                        count = s.namespaces.len(),
                        "clearing namespaces unsupported by new language"
                    );
                    s.namespaces.clear();
                }
            });
            Some(Cmd::Redraw)
        }

        SnippetMsg::SetKind(kind) => {
            if session.snippet().kind == kind {
                return None;
            }
            session.edit(|s| s.kind = kind);
            Some(Cmd::Redraw)
        }

        SnippetMsg::SetCode(code) => {
            if session.snippet().code == code {
                return None;
            }
            session.batch(|session| {
                session.edit(|s| s.code = code);
                sync_placeholders(session);
            });
            Some(Cmd::Redraw)
        }

        SnippetMsg::SetDelimiter(delimiter) => {
            if let Some(c) = delimiter.filter(|c| c.is_whitespace()) {
                tracing::warn!(delimiter = ?c, "rejecting whitespace delimiter");
                return None;
            }
            if session.snippet().delimiter == delimiter {
                return None;
            }
            session.batch(|session| {
                session.edit(|s| s.delimiter = delimiter);
                sync_placeholders(session);
            });
            Some(Cmd::Redraw)
        }
    }
}

fn set_text(
    session: &mut SnippetSession,
    value: String,
    field: fn(&mut Snippet) -> &mut String,
) -> Option<Cmd> {
    if *field(&mut session.snippet) == value {
        return None;
    }
    session.edit(|s| *field(s) = value);
    Some(Cmd::Redraw)
}
