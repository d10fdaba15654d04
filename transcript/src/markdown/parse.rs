//! Line-oriented parser for the markdown subset.
//!
//! Each line is tested against the rules below in order; the first match wins:
//!
//! 1. table (a run of two or more pipe-containing lines)
//! 2. `## **heading**`
//! 3. `**section:**`
//! 4. `N. numbered item`
//! 5. indented bullet
//! 6. bullet
//! 7. blank line
//! 8. paragraph text

use super::ast::{Block, Inline, Table, push_run};

const BULLET_MARKERS: [char; 3] = ['•', '*', '-'];

/// Parse a message body into blocks, in source order.
///
/// Never fails; unrecognized syntax becomes paragraph text.
#[must_use]
pub fn parse(content: &str) -> Vec<Block> {
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut state = ParseState::default();
    let mut pos = 0;

    while pos < lines.len() {
        let line = lines[pos];

        if line.contains('|') {
            let end = table_run_end(&lines, pos);
            if end - pos >= 2 {
                state.flush_paragraph();
                state.in_list = false;
                state.blocks.push(Block::Table(build_table(&lines[pos..end])));
                pos = end;
                continue;
            }
        }

        state.push_line(line);
        pos += 1;
    }

    state.flush_paragraph();
    state.blocks
}

#[derive(Default)]
struct ParseState {
    blocks: Vec<Block>,
    paragraph: Vec<Vec<Inline>>,
    in_list: bool,
}

impl ParseState {
    fn push_line(&mut self, line: &str) {
        if let Some(text) = heading2_text(line) {
            self.flush_paragraph();
            self.in_list = false;
            self.blocks.push(Block::Heading2 { text });
        } else if let Some(text) = heading3_text(line) {
            self.flush_paragraph();
            self.in_list = false;
            self.blocks.push(Block::Heading3 { text: text.to_owned() });
        } else if let Some((number, text)) = numbered_item(line) {
            self.flush_paragraph();
            self.in_list = true;
            self.blocks.push(Block::NumberedItem {
                number: number.to_owned(),
                runs: parse_inline(text),
            });
        } else if let Some((indent, text)) = nested_bullet(line) {
            self.flush_paragraph();
            self.blocks.push(Block::NestedBulletItem {
                indent,
                runs: parse_inline(text),
            });
        } else if let Some(text) = bullet_body(line) {
            self.flush_paragraph();
            self.in_list = true;
            self.blocks.push(Block::BulletItem { runs: parse_inline(text) });
        } else if line.trim().is_empty() {
            self.flush_paragraph();
            self.close_list();
        } else {
            self.close_list();
            let mut text = line.trim().to_owned();
            text.push(' ');
            self.paragraph.push(parse_inline(&text));
        }
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.blocks.push(Block::Spacer);
            self.in_list = false;
        }
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let lines = std::mem::take(&mut self.paragraph);
            self.blocks.push(Block::Paragraph { lines });
        }
    }
}

// =============================================================================
// TABLES
// =============================================================================

fn table_run_end(lines: &[&str], start: usize) -> usize {
    lines[start..]
        .iter()
        .position(|line| !line.contains('|'))
        .map_or(lines.len(), |offset| start + offset)
}

/// Row 0 is the header, row 1 the separator (dropped), the rest are data.
fn build_table(lines: &[&str]) -> Table {
    let mut rows = lines.iter().map(|line| split_cells(line));
    let header = rows.next().unwrap_or_default();
    let _separator = rows.next();
    Table {
        header,
        rows: rows.collect(),
    }
}

fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|cell| cell.trim().to_owned()).collect();
    if cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    if cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    cells
}

// =============================================================================
// LINE RULES
// =============================================================================

/// `## **text**` with an optional colon after the closing marker.
fn heading2_text(line: &str) -> Option<String> {
    let rest = line.strip_prefix("##")?;
    let after_space = rest.trim_start();
    if after_space.len() == rest.len() {
        return None;
    }
    let inner = after_space.strip_prefix("**")?;

    // Without a closing marker the line is shown as written.
    let Some((text, tail)) = closing_marker(inner) else {
        return Some(line.to_owned());
    };
    let tail = tail.strip_prefix(':').unwrap_or(tail);
    Some(format!("{text}{tail}"))
}

/// `**text:**` where `text` holds no other colon.
fn heading3_text(line: &str) -> Option<&str> {
    let inner = line.strip_prefix("**")?.strip_suffix(":**")?;
    if inner.is_empty() || inner.contains(':') {
        return None;
    }
    Some(inner)
}

fn numbered_item(line: &str) -> Option<(&str, &str)> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }
    let rest = line[digits_end..].strip_prefix('.')?;
    let text = rest.trim_start();
    if text.len() == rest.len() {
        return None;
    }
    Some((&line[..digits_end], text))
}

fn nested_bullet(line: &str) -> Option<(usize, &str)> {
    let body = line.trim_start();
    let leading = line[..line.len() - body.len()].chars().count();
    if leading == 0 {
        return None;
    }
    bullet_body(body).map(|text| (leading / 2, text))
}

/// Marker followed by at least one whitespace character.
fn bullet_body(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(BULLET_MARKERS)?;
    let text = rest.trim_start();
    if text.len() == rest.len() {
        return None;
    }
    Some(text)
}

// =============================================================================
// INLINE
// =============================================================================

/// Split `text` into plain and `**bold**` runs.
///
/// Bold spans are the shortest non-empty content between two markers and never
/// cross a line break. Unmatched asterisks stay in the plain text.
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut runs = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find("**") {
        let open = cursor + offset;
        if let Some((content, _)) = closing_marker(&text[open + 2..]) {
            push_run(&mut runs, Inline::Text(text[plain_start..open].to_owned()));
            runs.push(Inline::Bold(content.to_owned()));
            cursor = open + 2 + content.len() + 2;
            plain_start = cursor;
        } else {
            cursor = open + 1;
        }
    }

    push_run(&mut runs, Inline::Text(text[plain_start..].to_owned()));
    runs
}

/// Find the shortest non-empty prefix of `s` followed by `**`.
///
/// Returns the prefix and whatever follows the closing marker.
fn closing_marker(s: &str) -> Option<(&str, &str)> {
    let first = s.chars().next()?;
    let from = first.len_utf8();
    let close = s[from..].find("**")? + from;
    let content = &s[..close];
    if content.chars().any(is_line_break) {
        return None;
    }
    Some((content, &s[close + 2..]))
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

// =============================================================================
// RECONSTRUCTION
// =============================================================================

/// Rebuild dialect text that parses back to an equivalent block sequence.
///
/// Each paragraph line is written on its own line, followed by a blank line
/// after the paragraph.
#[must_use]
pub fn to_source(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for block in blocks {
        let written = match block {
            Block::Paragraph { lines: text } => text.iter().map(|runs| paragraph_line(runs)).collect(),
            Block::Heading2 { text } => vec![format!("## **{text}**")],
            Block::Heading3 { text } => vec![format!("**{text}:**")],
            Block::NumberedItem { number, runs } => vec![format!("{number}. {}", inline_source(runs))],
            Block::BulletItem { runs } => vec![format!("- {}", inline_source(runs))],
            Block::NestedBulletItem { indent, runs } => {
                let pad = " ".repeat((indent * 2).max(1));
                vec![format!("{pad}- {}", inline_source(runs))]
            }
            Block::Table(table) => vec![row_source(&table.header)],
            Block::Spacer => vec![String::new()],
        };

        // Two adjacent pipe lines would read back as a table.
        let opens_with_pipe = written.first().is_some_and(|first| first.contains('|'));
        if opens_with_pipe && lines.last().is_some_and(|prev| prev.contains('|')) {
            lines.push(String::new());
        }
        lines.extend(written);

        match block {
            Block::Paragraph { .. } => lines.push(String::new()),
            Block::Table(table) => {
                lines.push(row_source(&vec!["---".to_owned(); table.header.len().max(1)]));
                lines.extend(table.rows.iter().map(|row| row_source(row)));
                lines.push(String::new());
            }
            _ => {}
        }
    }
    lines.join("\n")
}

/// One paragraph line, indented by a space when its trimmed text would
/// otherwise match a heading or list rule.
fn paragraph_line(runs: &[Inline]) -> String {
    let text = inline_source(runs);
    let text = text.trim_end();
    let claimed = heading2_text(text).is_some()
        || heading3_text(text).is_some()
        || numbered_item(text).is_some()
        || bullet_body(text).is_some();
    if claimed {
        format!(" {text}")
    } else {
        text.to_owned()
    }
}

fn inline_source(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text(text) => text.clone(),
            Inline::Bold(text) => format!("**{text}**"),
        })
        .collect()
}

fn row_source(cells: &[String]) -> String {
    if cells.is_empty() {
        return "|".to_owned();
    }
    format!("| {} |", cells.join(" | "))
}
