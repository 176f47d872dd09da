//! Placeholder reconciliation and per-placeholder edits

use crate::commands::Cmd;
use crate::messages::PlaceholderMsg;
use crate::model::{Placeholder, SnippetSession};
use crate::template::extract_placeholder_names;

/// Bring the declared placeholders in line with the names used in the code.
///
/// Removed placeholders go to the session's recycle bin and come back with
/// their metadata if the name reappears. Returns true if the list changed.
pub fn sync_placeholders(session: &mut SnippetSession) -> bool {
    let names = extract_placeholder_names(session.tokens());

    let removed: Vec<usize> = session
        .snippet()
        .placeholders
        .iter()
        .enumerate()
        .filter(|(_, p)| !names.contains(&p.name))
        .map(|(idx, _)| idx)
        .collect();

    let mut added: Vec<&String> = names
        .iter()
        .filter(|name| session.snippet().placeholder(name).is_none())
        .collect();

    if added.is_empty() && removed.is_empty() {
        return false;
    }
    added.sort();

    let mut placeholders = session.snippet().placeholders.clone();
    for idx in removed.into_iter().rev() {
        let placeholder = placeholders.remove(idx);
        tracing::trace!(name = %placeholder.name, "recycling placeholder");
        session
            .recycle_bin
            .insert(placeholder.name.clone(), placeholder);
    }

    for name in added {
        let placeholder = match session.recycle_bin.remove(name.as_str()) {
            Some(recycled) => {
                tracing::trace!(%name, "restoring placeholder");
                recycled
            }
            None => Placeholder::new(name.as_str()),
        };
        placeholders.push(placeholder);
    }
    placeholders.sort_by(|a, b| a.name.cmp(&b.name));

    session.edit(|s| s.placeholders = placeholders);
    true
}

/// Handle placeholder metadata messages
pub fn update_placeholder(session: &mut SnippetSession, msg: PlaceholderMsg) -> Option<Cmd> {
    let index = match &msg {
        PlaceholderMsg::SetDefaultValue { index, .. }
        | PlaceholderMsg::SetFunction { index, .. }
        | PlaceholderMsg::SetTooltip { index, .. }
        | PlaceholderMsg::SetEditable { index, .. } => *index,
    };

    let Some(current) = session.snippet().placeholders.get(index) else {
        tracing::warn!(
            index,
            count = session.snippet().placeholders.len(),
            "placeholder index out of range"
        );
        return None;
    };

    let unchanged = match &msg {
        PlaceholderMsg::SetDefaultValue { value, .. } => current.default_value == *value,
        PlaceholderMsg::SetFunction { value, .. } => current.function == *value,
        PlaceholderMsg::SetTooltip { value, .. } => current.tooltip == *value,
        PlaceholderMsg::SetEditable { is_editable, .. } => current.is_editable == *is_editable,
    };
    if unchanged {
        return None;
    }

    session.edit(|s| {
        let placeholder = &mut s.placeholders[index];
        match msg {
            PlaceholderMsg::SetDefaultValue { value, .. } => placeholder.default_value = value,
            PlaceholderMsg::SetFunction { value, .. } => placeholder.function = value,
            PlaceholderMsg::SetTooltip { value, .. } => placeholder.tooltip = value,
            PlaceholderMsg::SetEditable { is_editable, .. } => placeholder.is_editable = is_editable,
        }
    });
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{Msg, SnippetMsg};
    use crate::update::update;

    fn set_code(session: &mut SnippetSession, code: &str) {
        update(session, Msg::Snippet(SnippetMsg::SetCode(code.to_string())));
    }

    fn names(session: &SnippetSession) -> Vec<&str> {
        session
            .snippet()
            .placeholders
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn test_placeholders_follow_code() {
        let mut session = SnippetSession::default();
        set_code(&mut session, "$b$ $a$ $b$");
        assert_eq!(names(&session), vec!["a", "b"]);

        set_code(&mut session, "$a$");
        assert_eq!(names(&session), vec!["a"]);
    }

    #[test]
    fn test_reserved_names_are_not_declared() {
        let mut session = SnippetSession::default();
        set_code(&mut session, "$selected$ $x$ $end$");
        assert_eq!(names(&session), vec!["x"]);
    }

    #[test]
    fn test_bad_token_declares_nothing() {
        let mut session = SnippetSession::default();
        set_code(&mut session, "$unterminated");
        assert!(session.snippet().placeholders.is_empty());
        assert!(!session.is_valid_code());
    }

    #[test]
    fn test_metadata_survives_remove_and_readd() {
        let mut session = SnippetSession::default();
        set_code(&mut session, "$name$");
        update(
            &mut session,
            Msg::Placeholder(PlaceholderMsg::SetDefaultValue {
                index: 0,
                value: "World".to_string(),
            }),
        );

        set_code(&mut session, "");
        assert!(session.snippet().placeholders.is_empty());
        assert_eq!(
            session.recycled("name").map(|p| p.default_value.as_str()),
            Some("World")
        );

        set_code(&mut session, "Hello $name$");
        assert_eq!(session.snippet().placeholders[0].default_value, "World");
        assert!(session.recycled("name").is_none());
    }

    #[test]
    fn test_sync_without_changes_returns_false() {
        let mut session = SnippetSession::default();
        set_code(&mut session, "$a$");
        assert!(!sync_placeholders(&mut session));
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut session = SnippetSession::default();
        let cmd = update(
            &mut session,
            Msg::Placeholder(PlaceholderMsg::SetTooltip {
                index: 3,
                value: "tip".to_string(),
            }),
        );
        assert_eq!(cmd, None);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_set_editable() {
        let mut session = SnippetSession::default();
        set_code(&mut session, "$a$");
        let cmd = update(
            &mut session,
            Msg::Placeholder(PlaceholderMsg::SetEditable {
                index: 0,
                is_editable: false,
            }),
        );
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert!(!session.snippet().placeholders[0].is_editable);
    }
}
