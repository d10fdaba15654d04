//! Tests for the markdown-subset parser.

use super::ast::{Block, Inline, Table, join_lines, plain_text};
use super::{parse, parse_inline, to_source};

fn text(s: &str) -> Inline {
    Inline::Text(s.to_owned())
}

fn bold(s: &str) -> Inline {
    Inline::Bold(s.to_owned())
}

fn para(lines: Vec<Vec<Inline>>) -> Block {
    Block::Paragraph { lines }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_owned()).collect()
}

// =============================================================================
// BASIC SHAPES
// =============================================================================

#[test]
fn empty_content_yields_no_blocks() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n   \n").is_empty());
}

#[test]
fn bold_prefix_paragraph() {
    let blocks = parse("**Bold** and normal");
    assert_eq!(
        blocks,
        vec![para(vec![vec![bold("Bold"), text(" and normal ")]])]
    );
}

#[test]
fn heading2_then_paragraph() {
    let blocks = parse("## **Intro**\nSome text");
    assert_eq!(
        blocks,
        vec![
            Block::Heading2 { text: "Intro".to_owned() },
            para(vec![vec![text("Some text ")]]),
        ]
    );
}

#[test]
fn numbered_items_keep_their_numbers() {
    let blocks = parse("1. First\n2. Second");
    assert_eq!(
        blocks,
        vec![
            Block::NumberedItem {
                number: "1".to_owned(),
                runs: vec![text("First")]
            },
            Block::NumberedItem {
                number: "2".to_owned(),
                runs: vec![text("Second")]
            },
        ]
    );
}

#[test]
fn malformed_numbering_is_preserved() {
    let numbers: Vec<String> = parse("1. a\n1. b\n3. c")
        .into_iter()
        .filter_map(|b| match b {
            Block::NumberedItem { number, .. } => Some(number),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec!["1", "1", "3"]);
}

#[test]
fn pipe_table_drops_separator_row() {
    let blocks = parse("A|B\n-|-\n1|2\n3|4");
    assert_eq!(
        blocks,
        vec![Block::Table(Table {
            header: row(&["A", "B"]),
            rows: vec![row(&["1", "2"]), row(&["3", "4"])],
        })]
    );
}

// =============================================================================
// HEADINGS
// =============================================================================

#[test]
fn heading2_strips_trailing_colon_and_keeps_tail() {
    assert_eq!(
        parse("## **Overview**:"),
        vec![Block::Heading2 { text: "Overview".to_owned() }]
    );
    assert_eq!(
        parse("## **Part 1** extra"),
        vec![Block::Heading2 { text: "Part 1 extra".to_owned() }]
    );
}

#[test]
fn heading2_without_closing_marker_keeps_line() {
    assert_eq!(
        parse("## **Dangling"),
        vec![Block::Heading2 { text: "## **Dangling".to_owned() }]
    );
}

#[test]
fn plain_hash_heading_is_paragraph_text() {
    assert_eq!(
        parse("## Intro"),
        vec![para(vec![vec![text("## Intro ")]])]
    );
}

#[test]
fn heading3_requires_single_trailing_colon() {
    assert_eq!(
        parse("**Key Points:**"),
        vec![Block::Heading3 { text: "Key Points".to_owned() }]
    );
    // A second colon disqualifies the line; it reads as inline bold instead.
    assert_eq!(
        parse("**Time: 10:30:**"),
        vec![para(vec![vec![bold("Time: 10:30:"), text(" ")]])]
    );
    // Text after the marker makes it an inline bold.
    assert_eq!(
        parse("**Note:** read this"),
        vec![para(vec![vec![bold("Note:"), text(" read this ")]])]
    );
}

// =============================================================================
// LISTS
// =============================================================================

#[test]
fn bullets_accept_all_three_markers() {
    let blocks = parse("• one\n* two\n- three");
    let texts: Vec<String> = blocks.iter().map(Block::plain_text).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
    assert!(blocks.iter().all(|b| matches!(b, Block::BulletItem { .. })));
}

#[test]
fn marker_without_space_is_not_a_bullet() {
    assert_eq!(
        parse("-dash"),
        vec![para(vec![vec![text("-dash ")]])]
    );
}

#[test]
fn nested_bullet_indent_is_half_the_whitespace() {
    let blocks = parse("- top\n  - two\n    * four\n   • three\n\t- tab");
    let indents: Vec<usize> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::NestedBulletItem { indent, .. } => Some(*indent),
            _ => None,
        })
        .collect();
    assert_eq!(indents, vec![1, 2, 1, 0]);
}

#[test]
fn bold_runs_inside_list_items() {
    assert_eq!(
        parse("1. **Q:** What is Rust?"),
        vec![Block::NumberedItem {
            number: "1".to_owned(),
            runs: vec![bold("Q:"), text(" What is Rust?")]
        }]
    );
}

#[test]
fn blank_line_after_list_emits_spacer() {
    let blocks = parse("- a\n- b\n\nafter");
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[2], Block::Spacer);
    assert!(matches!(blocks[3], Block::Paragraph { .. }));
}

#[test]
fn text_directly_after_list_emits_spacer() {
    let blocks = parse("1. a\nfollow-up");
    assert_eq!(
        blocks,
        vec![
            Block::NumberedItem {
                number: "1".to_owned(),
                runs: vec![text("a")]
            },
            Block::Spacer,
            para(vec![vec![text("follow-up ")]]),
        ]
    );
}

#[test]
fn blank_lines_outside_lists_emit_nothing() {
    let blocks = parse("one\n\n\ntwo");
    assert_eq!(
        blocks,
        vec![
            para(vec![vec![text("one ")]]),
            para(vec![vec![text("two ")]]),
        ]
    );
}

#[test]
fn only_one_spacer_per_list_run() {
    let blocks = parse("- a\n\n\n\ntext");
    let spacers = blocks.iter().filter(|b| **b == Block::Spacer).count();
    assert_eq!(spacers, 1);
}

#[test]
fn heading_closes_list_without_spacer() {
    let blocks = parse("- a\n## **Next**\n\nbody");
    assert!(!blocks.contains(&Block::Spacer));
}

#[test]
fn nested_bullets_do_not_open_a_list_run() {
    let blocks = parse("  - nested\n\ntext");
    assert!(!blocks.contains(&Block::Spacer));
}

// =============================================================================
// PARAGRAPHS
// =============================================================================

#[test]
fn consecutive_lines_collapse_into_one_paragraph() {
    let blocks = parse("  first line  \nsecond **line**\nthird");
    assert_eq!(
        blocks,
        vec![para(vec![
            vec![text("first line ")],
            vec![text("second "), bold("line"), text(" ")],
            vec![text("third ")],
        ])]
    );
    assert_eq!(
        join_lines(&[vec![text("first line ")], vec![text("second "), bold("line"), text(" ")], vec![text("third ")]]),
        vec![text("first line second "), bold("line"), text(" third ")]
    );
    assert_eq!(blocks[0].plain_text(), "first line second line third ");
}

#[test]
fn bold_never_spans_source_lines() {
    let blocks = parse("**open\nclose**");
    assert_eq!(
        blocks,
        vec![para(vec![vec![text("**open ")], vec![text("close** ")]])]
    );
}

#[test]
fn crlf_line_endings_are_tolerated() {
    let blocks = parse("## **Intro**\r\n**Part:**\r\n- item\r\n");
    assert_eq!(blocks[0], Block::Heading2 { text: "Intro".to_owned() });
    assert_eq!(blocks[1], Block::Heading3 { text: "Part".to_owned() });
    assert_eq!(blocks[2], Block::BulletItem { runs: vec![text("item")] });
    assert_eq!(blocks[3], Block::Spacer);
}

// =============================================================================
// TABLES
// =============================================================================

#[test]
fn single_pipe_line_is_plain_text() {
    assert_eq!(
        parse("a | b"),
        vec![para(vec![vec![text("a | b ")]])]
    );
}

#[test]
fn single_pipe_line_falls_through_to_list_rules() {
    assert_eq!(
        parse("- left | right"),
        vec![Block::BulletItem {
            runs: vec![text("left | right")]
        }]
    );
}

#[test]
fn table_with_outer_pipes_trims_edge_cells_only() {
    let blocks = parse("| Term | | Notes |\n|---|---|---|\n| a | b | c |");
    assert_eq!(
        blocks,
        vec![Block::Table(Table {
            header: row(&["Term", "", "Notes"]),
            rows: vec![row(&["a", "b", "c"])],
        })]
    );
}

#[test]
fn table_flushes_pending_paragraph_and_list() {
    let blocks = parse("Intro text\n| A | B |\n|---|---|\n| 1 | 2 |\n- after");
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
    assert!(matches!(blocks[1], Block::Table(_)));
    assert!(matches!(blocks[2], Block::BulletItem { .. }));
}

#[test]
fn header_and_separator_only_table_has_no_rows() {
    let blocks = parse("| A | B |\n|---|---|");
    assert_eq!(
        blocks,
        vec![Block::Table(Table {
            header: row(&["A", "B"]),
            rows: Vec::new(),
        })]
    );
}

#[test]
fn data_row_count_is_pipe_lines_minus_two() {
    for data_rows in 0..6 {
        let mut input = String::from("| H1 | H2 | H3 |\n|---|---|---|");
        for i in 0..data_rows {
            input.push_str(&format!("\n| {i} | x | y |"));
        }
        let blocks = parse(&input);
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table");
        };
        assert_eq!(table.rows.len(), data_rows);
        assert_eq!(table.header.len(), 3);
        assert_eq!(table.column_count(), 3);
    }
}

// =============================================================================
// INLINE
// =============================================================================

#[test]
fn inline_without_markers_is_single_text_run() {
    assert_eq!(parse_inline("plain"), vec![text("plain")]);
    assert!(parse_inline("").is_empty());
}

#[test]
fn inline_keeps_unmatched_asterisks() {
    assert_eq!(parse_inline("a ** b"), vec![text("a ** b")]);
    assert_eq!(parse_inline("****"), vec![text("****")]);
    assert_eq!(parse_inline("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
}

#[test]
fn inline_bold_is_non_greedy() {
    assert_eq!(
        parse_inline("**a** mid **b**"),
        vec![bold("a"), text(" mid "), bold("b")]
    );
    assert_eq!(parse_inline("***x**"), vec![bold("*x")]);
    assert_eq!(parse_inline("*****"), vec![bold("*")]);
}

#[test]
fn inline_handles_multibyte_content() {
    assert_eq!(
        parse_inline("**é** — **日本**"),
        vec![bold("é"), text(" — "), bold("日本")]
    );
    assert_eq!(plain_text(&parse_inline("x **ü** y")), "x ü y");
}

// =============================================================================
// PROPERTIES
// =============================================================================

const ADVERSARIAL: &[&str] = &[
    "",
    "|",
    "||\n||",
    "**",
    "***",
    "## **",
    "##**x**",
    "**:**",
    "1.",
    "1. ",
    "12345678901234567890. big",
    "-",
    "- ",
    "  -",
    "\t\t• deep",
    "\r\n\r\n",
    "| a |\n\n| b |",
    "• **unterminated",
    "**a** **b** **c",
    "ééé|ü\n-|-\n日|本",
    "\u{2028}**x\u{2028}y**",
];

#[test]
fn parse_is_total_on_adversarial_input() {
    for input in ADVERSARIAL {
        let blocks = parse(input);
        assert!(blocks.len() <= 2 * input.split('\n').count(), "input {input:?}");
    }
}

#[test]
fn reconstructed_source_parses_to_same_blocks() {
    let inputs = [
        "## **Summary**\nThe document covers **three** topics.\n\n**Details:**\n1. First\n2. **Second** point\n  - nested a\n    - nested b\n\nClosing remarks.",
        "| Term | Meaning |\n|---|---|\n| RAG | retrieval |\n| LLM | model |\n\nAfter the table.",
        "- a\n- b\nplain after list\n\n• c",
        "Intro | with pipe\n\nOther | pipe line",
        "1. a\n1. b\n3. c",
        "-\nfoo",
        "12.\nfoo",
        "##\n**b** c",
        "**a\nb:**",
        "  **a:**\nx",
        "  1. x",
        "lead\n  ## **Not a heading**",
    ];
    for input in inputs {
        let first = parse(input);
        let second = parse(&to_source(&first));
        assert_eq!(first, second, "input {input:?}");
    }
}

#[test]
fn reconstructed_paragraph_keeps_line_breaks() {
    let blocks = parse("-\nfoo");
    assert_eq!(blocks, vec![para(vec![vec![text("- ")], vec![text("foo ")]])]);
    assert_eq!(to_source(&blocks), "-\nfoo\n");
}

#[test]
fn reconstructed_indented_paragraph_line_is_not_promoted() {
    let blocks = parse("  **a:**\n  1. x");
    assert_eq!(
        blocks,
        vec![para(vec![vec![bold("a:"), text(" ")], vec![text("1. x ")]])]
    );
    assert_eq!(to_source(&blocks), " **a:**\n 1. x\n");
}

#[test]
fn plain_text_drops_markers() {
    let blocks = parse("**Key:** value\n\n| A | B |\n|-|-|\n| 1 | 2 |");
    assert_eq!(blocks[0].plain_text(), "Key: value ");
    assert_eq!(blocks[1].plain_text(), "A | B\n1 | 2");
}
