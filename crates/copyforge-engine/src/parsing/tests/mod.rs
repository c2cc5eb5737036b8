//! Behavioural tests for the whole render pass: frontmatter, block state
//! machine and inline formatting together.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    RenderOptions,
    blocks::{Block, ListKind},
    invariants, parse_document, reading_time, render,
};

fn ul(items: &[&str]) -> Block {
    Block::List {
        kind: ListKind::Unordered,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn ol(items: &[&str]) -> Block {
    Block::List {
        kind: ListKind::Ordered,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn p(text: &str) -> Block {
    Block::Paragraph(text.to_string())
}

fn checked(body: &str) -> Vec<Block> {
    let blocks = render(body);
    invariants::check(&blocks);
    blocks
}

#[rstest]
#[case("text\n\n")]
#[case("- a\n- b\n")]
#[case("1. a\n\n")]
#[case("# h\npara\n")]
#[case("> q\n- a\nmore\n")]
fn trailing_blank_line_changes_nothing(#[case] body: &str) {
    let trimmed = body.trim_end_matches('\n');
    assert_eq!(checked(body), checked(trimmed));
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n\n")]
#[case("   \n\t\n  ")]
fn blank_input_renders_nothing(#[case] body: &str) {
    assert!(checked(body).is_empty());
}

#[test]
fn heading_levels_one_to_four() {
    let blocks = checked("# A\n\n## B\n\n### C\n\n#### D\n\n");
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                text: "A".into()
            },
            Block::Heading {
                level: 2,
                text: "B".into()
            },
            Block::Heading {
                level: 3,
                text: "C".into()
            },
            Block::Heading {
                level: 4,
                text: "D".into()
            },
        ]
    );
}

#[test]
fn lists_group_by_kind() {
    let blocks = checked("- a\n- b\n\n1. c\n2. d");
    assert_eq!(blocks, vec![ul(&["a", "b"]), ol(&["c", "d"])]);
}

#[test]
fn ordered_numbering_is_ignored() {
    let blocks = checked("7. first\n7. second\n1. third");
    assert_eq!(blocks, vec![ol(&["first", "second", "third"])]);
}

#[test]
fn paragraph_does_not_resume_across_list() {
    let blocks = checked("text\n- item\nmore text");
    assert_eq!(blocks, vec![p("text"), ul(&["item"]), p("more text")]);
}

#[test]
fn paragraph_lines_join_until_blank() {
    let blocks = checked("first line\n  second line\n\nnext para");
    assert_eq!(blocks, vec![p("first line second line"), p("next para")]);
}

#[test]
fn blank_line_splits_a_list() {
    let blocks = checked("- a\n\n- b");
    assert_eq!(blocks, vec![ul(&["a"]), ul(&["b"])]);
}

#[test]
fn heading_closes_open_list_and_paragraph() {
    let blocks = checked("- a\n## Next\ntext\n### Again");
    assert_eq!(
        blocks,
        vec![
            ul(&["a"]),
            Block::Heading {
                level: 2,
                text: "Next".into()
            },
            p("text"),
            Block::Heading {
                level: 3,
                text: "Again".into()
            },
        ]
    );
}

#[test]
fn quotes_and_rules_are_single_line_blocks() {
    let blocks = checked("> one\n> two\n***\npara");
    assert_eq!(
        blocks,
        vec![
            Block::Blockquote("one".into()),
            Block::Blockquote("two".into()),
            Block::HorizontalRule,
            p("para"),
        ]
    );
}

#[test]
fn inline_formatting_applies_inside_blocks() {
    let blocks = checked("## **Big** idea\n- use `x`\n> *quiet*\nplain ***loud***");
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 2,
                text: "<strong>Big</strong> idea".into()
            },
            ul(&["use <code>x</code>"]),
            Block::Blockquote("<em>quiet</em>".into()),
            p("plain <strong><em>loud</em></strong>"),
        ]
    );
}

#[test]
fn inline_spans_do_not_cross_lines() {
    let blocks = checked("**start\nend**");
    assert_eq!(blocks, vec![p("**start end**")]);
}

#[test]
fn bold_with_inner_asterisks() {
    let blocks = checked("**a * b * c**");
    assert_eq!(blocks, vec![p("<strong>a <em> b </em> c</strong>")]);
}

#[test]
fn frontmatter_round_trip() {
    let doc = parse_document("---\ntitle: \"X\"\n---\nBody text", RenderOptions::default());
    assert_eq!(doc.header.get("title"), Some("X"));
    assert_eq!(doc.body, "Body text");
    assert_eq!(doc.blocks, vec![p("Body text")]);
}

#[test]
fn rule_after_start_is_not_frontmatter() {
    let doc = parse_document("Intro\n---\nOutro", RenderOptions::default());
    assert!(doc.header.is_empty());
    assert_eq!(doc.blocks, vec![p("Intro"), Block::HorizontalRule, p("Outro")]);
}

#[test]
fn rule_inside_body_after_frontmatter() {
    let doc = parse_document("---\na: b\n---\nx\n\n---\ny", RenderOptions::default());
    assert_eq!(doc.header.get("a"), Some("b"));
    assert_eq!(doc.blocks, vec![p("x"), Block::HorizontalRule, p("y")]);
}

#[test]
fn reading_time_floor_for_one_word() {
    assert_eq!(reading_time::estimate("word"), 1);
}

#[test]
fn html_in_source_passes_through_by_default() {
    let blocks = checked("<script>alert(1)</script>");
    assert_eq!(blocks, vec![p("<script>alert(1)</script>")]);
}

#[test]
fn escaping_is_opt_in() {
    let doc = parse_document(
        "<i>x</i> **y**",
        RenderOptions { escape_html: true },
    );
    assert_eq!(doc.blocks, vec![p("&lt;i&gt;x&lt;/i&gt; <strong>y</strong>")]);
}
