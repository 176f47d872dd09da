//! Editing session for a single snippet
//!
//! The session owns the snippet being edited together with the state that only
//! makes sense for one continuous edit of it: the lexed code, the placeholder
//! recycle bin, the last saved snapshot and the change observers.
//!
//! Mutations happen inside `begin_update()` / `end_update()` scopes. Observers
//! are called once, when the outermost scope closes, so compound edits (code
//! plus the placeholders reconciled from it) are seen as one change.

use std::collections::HashMap;
use std::fmt;

use super::snippet::{Placeholder, Snippet};
use crate::template::{self, PreviewError, Token};

/// Handle returned by [`SnippetSession::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Snippet)>;

pub struct SnippetSession {
    pub(crate) snippet: Snippet,
    lexed: LexCache,
    /// Placeholders removed from the code, keyed by name, until re-added or replaced
    pub(crate) recycle_bin: HashMap<String, Placeholder>,
    /// Snapshot taken at the last open/save
    clean: Snippet,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    batch_depth: usize,
    changed: bool,
}

impl fmt::Debug for SnippetSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnippetSession")
            .field("snippet", &self.snippet)
            .field("recycle_bin", &self.recycle_bin.keys().collect::<Vec<_>>())
            .field("observers", &self.observers.len())
            .field("batch_depth", &self.batch_depth)
            .finish()
    }
}

impl Default for SnippetSession {
    fn default() -> Self {
        Self::new(Snippet::default())
    }
}

impl SnippetSession {
    pub fn new(snippet: Snippet) -> Self {
        Self {
            clean: snippet.clone(),
            lexed: LexCache::lex(&snippet),
            snippet,
            recycle_bin: HashMap::new(),
            observers: Vec::new(),
            next_subscription: 0,
            batch_depth: 0,
            changed: false,
        }
    }

    pub fn snippet(&self) -> &Snippet {
        &self.snippet
    }

    /// Tokens of the current code, without the trailing end-of-file token
    pub fn tokens(&self) -> &[Token] {
        &self.lexed.tokens
    }

    /// False if any opening delimiter lacks a closing one
    pub fn is_valid_code(&self) -> bool {
        !self.lexed.tokens.iter().any(Token::is_bad)
    }

    pub fn preview(&self) -> Result<String, PreviewError> {
        template::evaluate(&self.snippet, &self.lexed.tokens)
    }

    pub fn can_have_namespaces(&self) -> bool {
        self.snippet.can_have_namespaces()
    }

    /// Index of the placeholder called `name`, for the index based messages
    pub fn placeholder_index(&self, name: &str) -> Option<usize> {
        self.snippet
            .placeholders
            .iter()
            .position(|p| p.name == name)
    }

    /// A placeholder waiting in the recycle bin
    pub fn recycled(&self, name: &str) -> Option<&Placeholder> {
        self.recycle_bin.get(name)
    }

    /// True if the snippet differs from the last opened or saved state
    pub fn is_dirty(&self) -> bool {
        self.snippet != self.clean
    }

    pub fn mark_clean(&mut self) {
        self.clean = self.snippet.clone();
    }

    /// Replace the whole snippet (file opened, "New"). Ends the recycle bin's session.
    pub fn replace(&mut self, snippet: Snippet) {
        self.begin_update();
        self.snippet = snippet;
        self.lexed = LexCache::lex(&self.snippet);
        self.recycle_bin.clear();
        self.clean = self.snippet.clone();
        self.changed = true;
        self.end_update();
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Register a callback run after every completed change
    pub fn subscribe(&mut self, observer: impl FnMut(&Snippet) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    // ------------------------------------------------------------------
    // Batching
    // ------------------------------------------------------------------

    pub fn begin_update(&mut self) {
        self.batch_depth += 1;
    }

    /// Close a scope. Observers run when the outermost scope closes with changes.
    pub fn end_update(&mut self) {
        debug_assert!(self.batch_depth > 0, "end_update without begin_update");
        self.batch_depth = self.batch_depth.saturating_sub(1);

        if self.batch_depth == 0 && self.changed {
            self.changed = false;
            for (_, observer) in self.observers.iter_mut() {
                observer(&self.snippet);
            }
        }
    }

    /// Run `f` inside one update scope
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_update();
        let result = f(self);
        self.end_update();
        result
    }

    /// Mutate the snippet. Re-lexes if the code or delimiter changed.
    pub(crate) fn edit<R>(&mut self, f: impl FnOnce(&mut Snippet) -> R) -> R {
        self.begin_update();

        let result = f(&mut self.snippet);
        if !self.lexed.is_current(&self.snippet) {
            self.lexed = LexCache::lex(&self.snippet);
        }

        self.changed = true;
        self.end_update();
        result
    }
}

/// Tokens for one (code, delimiter) pair. Lexing is pure, so a hit is
/// indistinguishable from re-lexing.
struct LexCache {
    code: String,
    delimiter: char,
    tokens: Vec<Token>,
}

impl LexCache {
    fn lex(snippet: &Snippet) -> Self {
        let delimiter = snippet.effective_delimiter();
        Self {
            code: snippet.code.clone(),
            delimiter,
            tokens: template::tokenize(&snippet.code, delimiter),
        }
    }

    fn is_current(&self, snippet: &Snippet) -> bool {
        self.delimiter == snippet.effective_delimiter() && self.code == snippet.code
    }
}
