//! Template language tests: lexing, placeholder extraction and preview

use snippet_editor::model::{Language, Placeholder, Snippet};
use snippet_editor::template::{
    evaluate, extract_placeholder_names, tokenize, Lexer, PreviewError, Token, TokenKind,
};

fn token(kind: TokenKind, source: &str, value: Option<&str>) -> Token {
    Token {
        source_text: source.to_string(),
        kind,
        value: value.map(str::to_string),
    }
}

fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.source_text.as_str()).collect()
}

// ========================================================================
// Lexer
// ========================================================================

#[test]
fn test_literal() {
    assert_eq!(
        tokenize("let x = 1;", '$'),
        vec![token(TokenKind::Literal, "let x = 1;", Some("let x = 1;"))]
    );
}

#[test]
fn test_escaped_delimiter_folds_into_literal() {
    assert_eq!(
        tokenize("$$", '$'),
        vec![token(TokenKind::Literal, "$$", Some("$"))]
    );
    assert_eq!(
        tokenize("let x = 'the price is $$10.';", '$'),
        vec![token(
            TokenKind::Literal,
            "let x = 'the price is $$10.';",
            Some("let x = 'the price is $10.';")
        )]
    );
}

#[test]
fn test_unterminated_placeholder() {
    assert_eq!(
        tokenize("$incomplete", '$'),
        vec![token(TokenKind::Bad, "$incomplete", None)]
    );
}

#[test]
fn test_placeholder_with_space() {
    assert_eq!(
        tokenize("$example one$", '$'),
        vec![token(TokenKind::Placeholder, "$example one$", Some("example one"))]
    );
}

#[test]
fn test_custom_delimiter() {
    assert_eq!(
        tokenize(":example: costs $5", ':'),
        vec![
            token(TokenKind::Placeholder, ":example:", Some("example")),
            token(TokenKind::Literal, " costs $5", Some(" costs $5")),
        ]
    );
}

#[test]
fn test_placeholder_cannot_span_lines() {
    assert_eq!(
        tokenize("$exam\nple$", '$'),
        vec![
            token(TokenKind::Bad, "$exam", None),
            token(TokenKind::Literal, "\nple", Some("\nple")),
            token(TokenKind::Bad, "$", None),
        ]
    );
}

#[test]
fn test_carriage_return_ends_placeholder() {
    let tokens = tokenize("$a\r\n$b$", '$');
    assert_eq!(tokens[0], token(TokenKind::Bad, "$a", None));
    assert_eq!(tokens.last().and_then(|t| t.placeholder_name()), Some("b"));
}

#[test]
fn test_mixed_code() {
    let tokens = tokenize("for (int $i$ = 0; $i$ < $$len; $i$++) {$end$}", '$');
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Literal,
            TokenKind::Placeholder,
            TokenKind::Literal,
            TokenKind::Placeholder,
            TokenKind::Literal,
            TokenKind::Placeholder,
            TokenKind::Literal,
            TokenKind::Placeholder,
            TokenKind::Literal,
        ]
    );
    assert_eq!(tokens[4].value.as_deref(), Some(" < $len; "));
}

#[test]
fn test_source_text_reconstructs_input() {
    let inputs = [
        "",
        "plain",
        "$a$$b$",
        "$$$",
        "$$$$",
        "$",
        "a$\n$b",
        "héllo $wörld$ ✓ $",
        "\r\n$x\r$y$",
    ];
    for delimiter in ['$', ':', '%', 'é'] {
        for input in inputs {
            let tokens = tokenize(input, delimiter);
            assert_eq!(reconstruct(&tokens), input, "input {:?} delimiter {:?}", input, delimiter);
        }
    }
}

#[test]
fn test_lexer_ends_with_single_end_of_file() {
    let mut lexer = Lexer::new("$a$", '$');
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Placeholder));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::EndOfFile));
    assert!(lexer.next().is_none());

    let tokens: Vec<_> = Lexer::new("", '$').collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    assert_eq!(tokens[0].source_text, "");
}

// ========================================================================
// Placeholder extraction
// ========================================================================

#[test]
fn test_reserved_names_are_not_extracted() {
    let tokens = tokenize("$selected$ and $end$ plus $name$", '$');
    let names = extract_placeholder_names(&tokens);
    assert_eq!(names.len(), 1);
    assert!(names.contains("name"));
}

// ========================================================================
// Preview
// ========================================================================

fn preview(snippet: &Snippet) -> Result<String, PreviewError> {
    evaluate(snippet, &tokenize(&snippet.code, snippet.effective_delimiter()))
}

#[test]
fn test_preview_uses_defaults_then_names() {
    let mut with_default = Placeholder::new("greeting");
    with_default.default_value = "Hello".to_string();

    let snippet = Snippet {
        code: "$greeting$, $name$!$end$".to_string(),
        placeholders: vec![with_default, Placeholder::new("name")],
        ..Default::default()
    };

    assert_eq!(preview(&snippet).unwrap(), "Hello, name!");
}

#[test]
fn test_preview_shows_bad_tokens_verbatim() {
    let snippet = Snippet {
        code: "x = $broken".to_string(),
        ..Default::default()
    };
    assert_eq!(preview(&snippet).unwrap(), "x = $broken");
}

#[test]
fn test_preview_csharp_imports() {
    let snippet = Snippet {
        language: Some(Language::CSharp),
        namespaces: vec!["System".to_string(), String::new(), "System.IO".to_string()],
        code: "File.Exists(path);".to_string(),
        ..Default::default()
    };
    assert_eq!(
        preview(&snippet).unwrap(),
        "using System;\nusing System.IO;\n\nFile.Exists(path);"
    );
}

#[test]
fn test_preview_visual_basic_imports() {
    let snippet = Snippet {
        language: Some(Language::VisualBasic),
        namespaces: vec!["System.Text".to_string()],
        code: "Dim sb As New StringBuilder()".to_string(),
        ..Default::default()
    };
    assert_eq!(
        preview(&snippet).unwrap(),
        "Imports System.Text\n\nDim sb As New StringBuilder()"
    );
}

#[test]
fn test_preview_without_language_omits_imports() {
    let snippet = Snippet {
        namespaces: vec!["System".to_string()],
        code: "x".to_string(),
        ..Default::default()
    };
    assert_eq!(preview(&snippet).unwrap(), "x");
}

#[test]
fn test_preview_imports_for_unsupported_language_fail() {
    let snippet = Snippet {
        language: Some(Language::JavaScript),
        namespaces: vec!["fs".to_string()],
        code: "x".to_string(),
        ..Default::default()
    };
    assert_eq!(
        preview(&snippet),
        Err(PreviewError::ImportsNotSupported(Language::JavaScript))
    );
}
