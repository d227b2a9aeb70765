//! Integration tests for the parser
//!
//! All AST checks go through the fluent `assert_ast` API.

use artefact::artefact::parsing::parse_with_diagnostics;
use artefact::artefact::testing::assert_ast;
use artefact::{lex, parse};
use rstest::rstest;
use std::fs;

fn read_sample(name: &str) -> String {
    let path = format!("{}/docs/samples/{}", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(path).expect("Failed to read sample document")
}

#[test]
fn test_simple_heading() {
    let doc = parse("* Simple Heading");
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_kind("Heading").level(1).content("Simple Heading");
    });
}

#[test]
fn test_multiple_headings() {
    let doc = parse("* Heading 1\n** Heading 2\n*** Heading 3");
    assert_ast(&doc)
        .kinds(&["Heading", "Heading", "Heading"])
        .item(0, |item| {
            item.level(1).at(1, 1);
        })
        .item(1, |item| {
            item.level(2).at(2, 1);
        })
        .item(2, |item| {
            item.level(3).at(3, 1);
        });
}

#[test]
fn test_mixed_content() {
    let doc = parse(
        "* Heading\nSome text with an @/inline link(https://example.com) and more text.\n** Subheading",
    );
    assert_ast(&doc)
        .kinds(&["Heading", "Text", "Link", "Text", "Heading"])
        .item(1, |item| {
            item.content("Some text with an ");
        })
        .item(2, |item| {
            item.content("inline link")
                .url("https://example.com")
                .inline(true)
                .at(2, 19);
        })
        .item(3, |item| {
            item.content(" and more text.");
        })
        .item(4, |item| {
            item.level(2).content("Subheading");
        });
}

#[test]
fn test_image_and_meta() {
    let doc = parse("& -- Image Alt text (https://example.com/image.jpg)\n/ -(author) John Doe");
    assert_ast(&doc)
        .item(0, |item| {
            item.assert_kind("Image")
                .source("https://example.com/image.jpg")
                .content("Image Alt text");
        })
        .item(1, |item| {
            item.assert_kind("Meta").name("author").content("John Doe");
        });
}

#[rstest]
#[case("\" -- This is a citation\n\" -> Author Name", Some("Author Name"))]
#[case("\" -- This is a citation", None)]
fn test_citation_author_is_optional(#[case] source: &str, #[case] author: Option<&str>) {
    let doc = parse(source);
    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_kind("Citation")
            .content("This is a citation")
            .author(author);
    });
}

#[test]
fn test_two_quotes_stay_separate() {
    let doc = parse("\" -- First\n\" -- Second");
    assert_ast(&doc).kinds(&["Citation", "Citation"]);
}

#[test]
fn test_declared_variable_use() {
    let doc = parse("$ myVar = Some content\nText with a $/myVar variable");
    assert_ast(&doc)
        .kinds(&["VariableDeclaration", "Text", "VariableUse", "Text"])
        .item(0, |item| {
            item.name("myVar").content("Some content");
        })
        .item(2, |item| {
            item.content("myVar").at(2, 13);
        });
}

#[test]
fn test_undeclared_variable_is_a_parser_error() {
    let output = parse_with_diagnostics("Text with a $/myVar variable");
    assert_eq!(output.parser_errors.len(), 1);
    assert_eq!(output.parser_errors[0].message, "Undeclared variable: myVar");
    assert_eq!(
        output.parser_errors[0].to_string(),
        "ParserError at line 1, column 13: Undeclared variable: myVar"
    );
    assert_ast(&output.document).kinds(&["Text"]);
}

#[test]
fn test_malformed_sample_recovers() {
    let output = parse_with_diagnostics(&read_sample("malformed.art"));
    assert_eq!(output.lexer_errors.len(), 1);
    assert_eq!(
        output.lexer_errors[0].message,
        "Expected space after heading stars"
    );
    assert_eq!(output.parser_errors.len(), 1);
    assert_ast(&output.document)
        .kinds(&["Heading", "Comment"])
        .item(0, |item| {
            item.content("Valid heading").at(2, 1);
        })
        .item(1, |item| {
            item.content("still here");
        });
}

#[test]
fn test_token_input_matches_text_input() {
    let source = read_sample("overview.art");
    assert_eq!(parse(lex(&source)), parse(source.as_str()));
}

#[test]
fn test_overview_metadata() {
    let doc = parse(&read_sample("overview.art"));
    let metadata = doc.metadata();
    assert_eq!(metadata.get("title").map(String::as_str), Some("Artefact Overview"));
}

#[test]
fn test_snapshot_view() {
    let doc = parse(&read_sample("anchors.art"));
    let json = serde_json::to_string_pretty(&doc.snapshot()).unwrap();
    insta::assert_snapshot!(json, @r###"
    {
      "type": "Document",
      "line": 1,
      "column": 1,
      "children": [
        {
          "type": "Heading",
          "line": 1,
          "column": 1,
          "content": "Test Heading",
          "attributes": {
            "level": "2"
          }
        },
        {
          "type": "Anchor",
          "line": 2,
          "column": 1,
          "content": "section 1",
          "attributes": {
            "is_inset": "true"
          }
        },
        {
          "type": "Text",
          "line": 3,
          "column": 1,
          "content": "Go to "
        },
        {
          "type": "Link",
          "line": 3,
          "column": 7,
          "content": "Section 1",
          "attributes": {
            "is_inline": "true",
            "url": "section 1"
          }
        }
      ]
    }
    "###);
}
