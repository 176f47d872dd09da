//! Lexer for the snippet placeholder syntax
//!
//! `$name$` is a placeholder, `$$` an escaped delimiter. Everything else is
//! literal text. Lexing never fails: an opening delimiter without a closing one
//! on the same line becomes a `Bad` token and scanning resumes right after it.

/// Kind of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Literal,
    Placeholder,
    Bad,
    EndOfFile,
}

/// A lexed span of snippet code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Exact text consumed from the input
    pub source_text: String,
    pub kind: TokenKind,
    /// Unescaped literal text or placeholder name; `None` for `Bad` and `EndOfFile`
    pub value: Option<String>,
}

impl Token {
    fn new(kind: TokenKind, source_text: &str, value: Option<String>) -> Self {
        Self {
            source_text: source_text.to_string(),
            kind,
            value,
        }
    }

    pub fn is_bad(&self) -> bool {
        self.kind == TokenKind::Bad
    }

    /// Placeholder name, if this is a placeholder token
    pub fn placeholder_name(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Placeholder => self.value.as_deref(),
            _ => None,
        }
    }
}

/// Lex `text` into tokens, excluding the trailing `EndOfFile`
pub fn tokenize(text: &str, delimiter: char) -> Vec<Token> {
    Lexer::new(text, delimiter)
        .take_while(|token| token.kind != TokenKind::EndOfFile)
        .collect()
}

/// Streaming lexer. Yields exactly one `EndOfFile` token, then `None`.
pub struct Lexer<'a> {
    text: &'a str,
    delimiter: char,
    /// Byte offset of the next unread char
    pos: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, delimiter: char) -> Self {
        Self {
            text,
            delimiter,
            pos: 0,
            finished: false,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.text[self.pos..].chars().nth(offset)
    }

    fn current(&self) -> Option<char> {
        self.peek(0)
    }

    fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    fn next_token(&mut self) -> Token {
        let start = self.pos;

        let (kind, value) = match self.current() {
            None => (TokenKind::EndOfFile, None),
            Some(ch) if ch == self.delimiter && self.peek(1) != Some(self.delimiter) => {
                self.read_placeholder()
            }
            Some(_) => self.read_literal(),
        };

        Token::new(kind, &self.text[start..self.pos], value)
    }

    fn read_literal(&mut self) -> (TokenKind, Option<String>) {
        let mut value = String::new();

        while let Some(ch) = self.current() {
            if ch == self.delimiter {
                if self.peek(1) != Some(self.delimiter) {
                    // Start of a placeholder; leave the delimiter for the next token
                    break;
                }
                // Escaped delimiter: consume both, keep one
                value.push(ch);
                self.advance(ch);
                self.advance(ch);
            } else {
                value.push(ch);
                self.advance(ch);
            }
        }

        (TokenKind::Literal, Some(value))
    }

    fn read_placeholder(&mut self) -> (TokenKind, Option<String>) {
        // Opening delimiter
        self.advance(self.delimiter);

        let mut name = String::new();

        loop {
            match self.current() {
                None | Some('\n') | Some('\r') => return (TokenKind::Bad, None),
                Some(ch) if ch == self.delimiter => {
                    self.advance(ch);
                    return (TokenKind::Placeholder, Some(name));
                }
                Some(ch) => {
                    name.push(ch);
                    self.advance(ch);
                }
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EndOfFile {
            self.finished = true;
        }
        Some(token)
    }
}
