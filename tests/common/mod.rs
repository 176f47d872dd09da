//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::BTreeSet;

use snippet_editor::messages::{Msg, SnippetMsg};
use snippet_editor::model::{Language, Placeholder, Snippet, SnippetKind, SnippetSession, SnippetType};
use snippet_editor::update::update;

/// A snippet with every field set to a non-default value
pub fn full_snippet() -> Snippet {
    Snippet {
        format: "1.0.0".to_string(),
        title: "Example title".to_string(),
        shortcut: "example".to_string(),
        description: "Example description".to_string(),
        author: "Example author".to_string(),
        help_url: "https://example.com/help".to_string(),
        language: Some(Language::CSharp),
        code: "var x = :number:;".to_string(),
        delimiter: Some(':'),
        placeholders: vec![Placeholder {
            name: "number".to_string(),
            default_value: "10".to_string(),
            function: "SimpleTypeName(global::System.Int32)".to_string(),
            tooltip: "A number".to_string(),
            is_editable: false,
        }],
        namespaces: vec!["System".to_string()],
        types: BTreeSet::from([SnippetType::Expansion, SnippetType::SurroundsWith]),
        kind: SnippetKind::MethodBody,
    }
}

/// Canonical writer output with CRLF line endings
pub fn canonical_xml() -> String {
    r#"<?xml version="1.0" encoding="utf-8"?>
<CodeSnippets xmlns="http://schemas.microsoft.com/VisualStudio/2005/CodeSnippet">
    <CodeSnippet Format="1.0.0">
        <Header>
            <Title>Example title</Title>
            <Shortcut>example</Shortcut>
            <Description>Example description</Description>
            <Author>Example author</Author>
            <SnippetTypes>
                <SnippetType>Expansion</SnippetType>
            </SnippetTypes>
        </Header>
        <Snippet>
            <Declarations>
                <Literal Editable="true">
                    <ID>number</ID>
                    <Default>10</Default>
                    <ToolTip>A number</ToolTip>
                </Literal>
            </Declarations>
            <Code Language="CSharp" Kind="method body" Delimiter=":"><![CDATA[var x = :number:;]]></Code>
            <Imports>
                <Import>
                    <Namespace>System</Namespace>
                </Import>
            </Imports>
        </Snippet>
    </CodeSnippet>
</CodeSnippets>"#
        .replace('\n', "\r\n")
}

/// A session whose code has been set through `update`
pub fn session_with_code(code: &str) -> SnippetSession {
    let mut session = SnippetSession::default();
    set_code(&mut session, code);
    session
}

pub fn set_code(session: &mut SnippetSession, code: &str) {
    update(session, Msg::Snippet(SnippetMsg::SetCode(code.to_string())));
}

/// Placeholder names in declaration order
pub fn placeholder_names(session: &SnippetSession) -> Vec<String> {
    session
        .snippet()
        .placeholders
        .iter()
        .map(|p| p.name.clone())
        .collect()
}
