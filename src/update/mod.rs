//! Update functions for the Elm-style architecture
//!
//! All snippet transformations flow through these functions.

mod collections;
mod placeholders;
mod session;
mod snippet;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::SnippetSession;

#[cfg(debug_assertions)]
use crate::tracing::PlaceholderSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use collections::{update_namespace, update_type};
pub use placeholders::{sync_placeholders, update_placeholder};
pub use session::update_session;
pub use snippet::update_snippet;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(session: &mut SnippetSession, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(session, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(session, msg)
    }
}

/// Inner update logic (no tracing)
///
/// The whole message runs in one update scope so observers are notified once.
fn update_inner(session: &mut SnippetSession, msg: Msg) -> Option<Cmd> {
    session.batch(|session| match msg {
        Msg::Snippet(m) => update_snippet(session, m),
        Msg::Placeholder(m) => update_placeholder(session, m),
        Msg::Namespace(m) => update_namespace(session, m),
        Msg::Type(m) => update_type(session, m),
        Msg::Session(m) => update_session(session, m),
    })
}

/// Traced update (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(session: &mut SnippetSession, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    debug!(target: "message", msg = %msg_name, "processing");

    let before = PlaceholderSnapshot::from_session(session);
    let result = update_inner(session, msg);
    let after = PlaceholderSnapshot::from_session(session);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "placeholders", %diff, "state changed");
    }

    result
}

#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{SessionMsg, SnippetMsg};

    match msg {
        // Code and whole snippets are too large to log on every keystroke
        Msg::Snippet(SnippetMsg::SetCode(code)) => format!("Snippet::SetCode({} bytes)", code.len()),
        Msg::Session(SessionMsg::Replace(_)) => "Session::Replace".to_string(),
        Msg::Snippet(m) => format!("Snippet::{:?}", m),
        Msg::Placeholder(m) => format!("Placeholder::{:?}", m),
        Msg::Namespace(m) => format!("Namespace::{:?}", m),
        Msg::Type(m) => format!("Type::{:?}", m),
        Msg::Session(m) => format!("Session::{:?}", m),
    }
}
