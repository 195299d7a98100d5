//! End-to-end tests over the definition files in `tests/fixtures`.

use std::fs;
use std::path::PathBuf;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use ludwieg::cli::parse_file;
use ludwieg::{
    parse_document, parse_document_with, render_source, render_tree, LudError, ParseOptions,
    SyntaxErrorKind,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name)).unwrap()
}

#[test]
fn test_fixture_tree() {
    let doc = parse_document(&load_fixture("user.lud")).unwrap();

    assert_snapshot!(render_tree(&doc), @r"
    user (0x1F)
    ├── Fields
    │   ├── [0] uint64 user_id
    │   ├── [1] string name
    │   ├── [2] string nickname [Deprecated]
    │   ├── [3] uint8[*] avatar
    │   ├── [4] bool[4] flags
    │   └── [5] @profile profile
    └── Structures
        └── profile
            ├── Fields
            │   ├── [0] string bio
            │   └── [1] string[*] tags
            └── Structures
                └── location
                    └── Fields
                        ├── [0] double lat
                        └── [1] double lng

    empty
    └── (Empty Package)
    ");
}

#[test]
fn test_fixture_canonical_source() {
    let doc = parse_document(&load_fixture("user.lud")).unwrap();

    assert_snapshot!(render_source(&doc), @r"
    package user {
        id 0x1F
        uint64 user_id
        string name
        string nickname !deprecated
        uint8[*] avatar
        bool[4] flags
        @profile profile
        struct profile {
            string bio
            struct location {
                double lat
                double lng
            }
            string[*] tags
        }
    }

    package empty {
        // empty
    }
    ");
}

#[test]
fn test_canonical_source_reparses_to_same_document() {
    let doc = parse_document(&load_fixture("user.lud")).unwrap();
    let reparsed = parse_document(&render_source(&doc)).unwrap();

    assert_eq!(reparsed, doc);
}

#[test]
fn test_comments_do_not_change_the_document() {
    let source = load_fixture("user.lud");
    let stripped: String = source
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .map(|line| format!("{}\n", line))
        .collect();

    // The empty package needs its comment to stay valid.
    let stripped = stripped.replace("package empty {\n}", "package empty {\n    // kept\n}");

    assert_eq!(
        parse_document(&stripped).unwrap(),
        parse_document(&source).unwrap()
    );
}

#[test]
fn test_fixture_package_queries() {
    let doc = parse_document(&load_fixture("user.lud")).unwrap();

    let user = doc.package("user").unwrap();
    assert_eq!(user.identifier(), Some("0x1F"));
    assert_eq!(user.fields().count(), 6);
    assert_eq!(user.structs().count(), 1);

    let empty = doc.package("empty").unwrap();
    assert_eq!(empty.identifier(), None);
    assert!(empty.contents.is_empty());
}

#[test]
fn test_invalid_fixture_points_at_bad_name() {
    let error = parse_document(&load_fixture("invalid.lud")).unwrap_err();

    assert_eq!(error.location.line, 4);
    assert_eq!(error.location.column, 12);
    assert!(error.expected().contains(&"identifier"));
}

#[test]
fn test_invalid_fixture_through_cli_helper() {
    let error = parse_file(&fixture("invalid.lud"), &ParseOptions::default()).unwrap_err();

    match &error {
        LudError::SyntaxInFile { path, .. } => assert!(path.ends_with("invalid.lud")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(error.syntax_error().unwrap().location.line, 4);
}

#[test]
fn test_depth_limit_on_fixture() {
    let source = load_fixture("user.lud");

    let error = parse_document_with(&source, &ParseOptions::new().with_max_depth(1)).unwrap_err();
    assert!(matches!(error.kind, SyntaxErrorKind::TooDeep { limit: 1 }));

    assert!(parse_document_with(&source, &ParseOptions::new().with_max_depth(2)).is_ok());
}
