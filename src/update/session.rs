//! Whole-snippet session operations

use crate::commands::Cmd;
use crate::io::write_snippet;
use crate::messages::SessionMsg;
use crate::model::{Snippet, SnippetSession};

/// Handle session messages
pub fn update_session(session: &mut SnippetSession, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::New => {
            session.replace(Snippet::default());
            Some(Cmd::Redraw)
        }
        SessionMsg::Replace(snippet) => {
            session.replace(*snippet);
            Some(Cmd::Redraw)
        }
        SessionMsg::Save { path } => {
            let content = match write_snippet(session.snippet()) {
                Ok(content) => content,
                Err(e) => {
                    tracing::error!("Failed to serialize snippet: {}", e);
                    return None;
                }
            };
            tracing::debug!(bytes = content.len(), ?path, "serialized snippet");
            Some(Cmd::SaveFile { path, content })
        }
        SessionMsg::MarkClean => {
            if !session.is_dirty() {
                return None;
            }
            session.mark_clean();
            Some(Cmd::Redraw)
        }
    }
}
