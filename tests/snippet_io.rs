//! `.snippet` reading and writing tests

mod common;

use common::{canonical_xml, full_snippet};
use snippet_editor::io::{parse_snippet, write_snippet, FileError, FileManager, ParseError};
use snippet_editor::messages::{Msg, NamespaceMsg, PlaceholderMsg, SnippetMsg, TypeMsg};
use snippet_editor::model::{Language, Snippet, SnippetKind, SnippetSession, SnippetType};
use snippet_editor::update::update;
use snippet_editor::util::FileOpenError;

// ========================================================================
// Round trips
// ========================================================================

#[test]
fn test_round_trip_from_model() {
    let snippet = full_snippet();
    let parsed = parse_snippet(&write_snippet(&snippet).unwrap()).unwrap();
    assert_eq!(parsed, snippet);
}

#[test]
fn test_round_trip_from_xml_is_byte_identical() {
    let xml = canonical_xml();
    let snippet = parse_snippet(&xml).unwrap();
    assert_eq!(write_snippet(&snippet).unwrap(), xml);
}

#[test]
fn test_round_trip_of_session_edits() {
    let mut session = SnippetSession::default();
    let messages: Vec<Msg> = vec![
        SnippetMsg::SetTitle("Property".to_string()).into(),
        SnippetMsg::SetShortcut("prop".to_string()).into(),
        SnippetMsg::SetLanguage(Some(Language::VisualBasic)).into(),
        SnippetMsg::SetKind(SnippetKind::TypeDeclaration).into(),
        SnippetMsg::SetDelimiter(Some('%')).into(),
        SnippetMsg::SetCode("Property %name% As %type%%end%".to_string()).into(),
        PlaceholderMsg::SetDefaultValue {
            index: 0,
            value: "Value".to_string(),
        }
        .into(),
        PlaceholderMsg::SetTooltip {
            index: 1,
            value: "Type <of> & \"value\"".to_string(),
        }
        .into(),
        NamespaceMsg::Add.into(),
        NamespaceMsg::Update {
            index: 0,
            value: "System.ComponentModel".to_string(),
        }
        .into(),
        TypeMsg::Add(SnippetType::Expansion).into(),
    ];
    for msg in messages {
        update(&mut session, msg);
    }

    let snippet = session.snippet();
    assert_eq!(parse_snippet(&write_snippet(snippet).unwrap()).unwrap(), *snippet);
}

#[test]
fn test_round_trip_of_language_without_code() {
    let snippet = Snippet {
        language: Some(Language::Sql),
        ..Default::default()
    };
    assert_eq!(parse_snippet(&write_snippet(&snippet).unwrap()).unwrap(), snippet);
}

#[test]
fn test_code_with_cdata_terminator_round_trips() {
    let snippet = Snippet {
        code: "var s = \"]]>\"; // $x$".to_string(),
        ..Default::default()
    };
    let xml = write_snippet(&snippet).unwrap();
    assert!(!xml.contains("<![CDATA[var s = \"]]>\""));
    assert_eq!(parse_snippet(&xml).unwrap().code, snippet.code);
}

#[test]
fn test_multiline_code_keeps_indentation() {
    let snippet = Snippet {
        code: "if (x)\n{\n\t$end$\n}\n".to_string(),
        ..Default::default()
    };
    assert_eq!(
        parse_snippet(&write_snippet(&snippet).unwrap()).unwrap().code,
        snippet.code
    );
}

#[test]
fn test_crlf_code_round_trips() {
    let mut session = SnippetSession::default();
    update(
        &mut session,
        SnippetMsg::SetCode("int $x$;\r\nreturn $x$;\r\n".to_string()).into(),
    );

    let snippet = session.snippet();
    let xml = write_snippet(snippet).unwrap();
    assert!(xml.contains("&#xD;"));
    assert_eq!(parse_snippet(&xml).unwrap(), *snippet);
}

#[test]
fn test_lone_carriage_return_round_trips() {
    let snippet = Snippet {
        code: "\r".to_string(),
        ..Default::default()
    };
    assert_eq!(parse_snippet(&write_snippet(&snippet).unwrap()).unwrap(), snippet);
}

#[test]
fn test_formatting_sample_is_byte_identical() {
    let sample = include_str!("../samples/property.snippet");
    let snippet = parse_snippet(sample).unwrap();
    assert_eq!(snippet.placeholders.len(), 3);
    assert_eq!(write_snippet(&snippet).unwrap(), sample);
}

#[test]
fn test_saving_opened_sample_keeps_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("property.snippet");
    let sample = include_str!("../samples/property.snippet");
    std::fs::write(&path, sample).unwrap();

    let mut files = FileManager::new(dir.path());
    let snippet = files.open(&path).unwrap();
    files.save(&snippet).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), sample);
}

// ========================================================================
// Writer rules
// ========================================================================

#[test]
fn test_empty_help_url_is_omitted() {
    let snippet = Snippet {
        help_url: String::new(),
        ..full_snippet()
    };
    let xml = write_snippet(&snippet).unwrap();
    assert!(!xml.contains("HelpUrl"));
    assert!(xml.contains("<Title>Example title</Title>"));
}

#[test]
fn test_editable_is_always_written() {
    let xml = write_snippet(&full_snippet()).unwrap();
    assert!(xml.contains("<Literal Editable=\"false\">"));
}

#[test]
fn test_code_is_cdata() {
    let snippet = Snippet {
        code: "a < b && c > d".to_string(),
        ..Default::default()
    };
    assert!(write_snippet(&snippet).unwrap().contains("<![CDATA[a < b && c > d]]>"));
}

// ========================================================================
// Parser errors
// ========================================================================

#[test]
fn test_parse_errors() {
    assert_eq!(
        parse_snippet("<CodeSnippets/>"),
        Err(ParseError::MissingSnippet)
    );
    assert_eq!(
        parse_snippet("<CodeSnippets><CodeSnippet/><CodeSnippet/></CodeSnippets>"),
        Err(ParseError::MultipleSnippets)
    );
    assert!(matches!(parse_snippet("<unclosed"), Err(ParseError::Xml(_))));
}

// ========================================================================
// File manager
// ========================================================================

#[test]
fn test_save_then_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("example.snippet");

    let mut files = FileManager::new(dir.path());
    files.save_as(&full_snippet(), &path).unwrap();

    let mut reopened = FileManager::default();
    assert_eq!(reopened.open(&path).unwrap(), full_snippet());
    assert_eq!(reopened.current_path(), Some(path.as_path()));
}

#[test]
fn test_open_rejects_directories_and_binaries() {
    let dir = tempfile::tempdir().unwrap();
    let mut files = FileManager::default();

    let err = files.open(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        FileError::Open {
            source: FileOpenError::IsDirectory,
            ..
        }
    ));

    let binary = dir.path().join("binary.snippet");
    std::fs::write(&binary, [0u8, 159, 146, 150, 0, 1]).unwrap();
    let err = files.open(&binary).unwrap_err();
    assert!(matches!(
        err,
        FileError::Open {
            source: FileOpenError::BinaryFile,
            ..
        }
    ));
    assert!(files.current_path().is_none());
}

#[test]
fn test_open_reports_parse_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two.snippet");
    std::fs::write(
        &path,
        "<CodeSnippets><CodeSnippet/><CodeSnippet/></CodeSnippets>",
    )
    .unwrap();

    let err = FileManager::default().open(&path).unwrap_err();
    assert_eq!(err.path(), path.as_path());
    assert!(err
        .to_string()
        .ends_with("Files with multiple snippets are not supported"));
}
