//! Namespace list and snippet type set updates

use crate::commands::Cmd;
use crate::messages::{NamespaceMsg, TypeMsg};
use crate::model::SnippetSession;

/// Handle import list messages
pub fn update_namespace(session: &mut SnippetSession, msg: NamespaceMsg) -> Option<Cmd> {
    let count = session.snippet().namespaces.len();

    match msg {
        // Permitted for any language; SetLanguage is what clears the list
        NamespaceMsg::Add => session.edit(|s| s.namespaces.push(String::new())),
        NamespaceMsg::Update { index, value } => {
            let Some(current) = session.snippet().namespaces.get(index) else {
                tracing::warn!(index, count, "namespace index out of range");
                return None;
            };
            if *current == value {
                return None;
            }
            session.edit(|s| s.namespaces[index] = value);
        }
        NamespaceMsg::Remove(index) => {
            if index >= count {
                tracing::warn!(index, count, "namespace index out of range");
                return None;
            }
            session.edit(|s| s.namespaces.remove(index));
        }
    }

    Some(Cmd::Redraw)
}

/// Handle snippet type messages
pub fn update_type(session: &mut SnippetSession, msg: TypeMsg) -> Option<Cmd> {
    let changed = match msg {
        TypeMsg::Add(kind) if !session.snippet().types.contains(&kind) => {
            session.edit(|s| s.types.insert(kind))
        }
        TypeMsg::Remove(kind) if session.snippet().types.contains(&kind) => {
            session.edit(|s| s.types.remove(&kind))
        }
        _ => false,
    };

    changed.then_some(Cmd::Redraw)
}
