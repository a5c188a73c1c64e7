use crate::models::{Span, TitleBlock};

/// Words ignored when scoring a line's capitalization; "REPORT" appears
/// uppercased inside otherwise lowercase prose and would skew the ratio
const SKIP_WORDS: &[&str] = &["report"];

/// Courtesy titles that mark a block as a speaker turn rather than a
/// debate title
const COURTESY_PREFIXES: &[&str] = &["Mr.", "Ms.", "Mrs."];

/// Punctuation trimmed from token edges before the all-caps check
const EDGE_PUNCT: &[char] = &[
    ',', '.', ';', ':', '!', '?', '\u{2014}', '\u{2013}', '-', '(', ')', '[', ']', '{', '}', '<',
    '>', '"', '\'', '`',
];

fn normalize_token(token: &str) -> &str {
    token.trim_matches(|c: char| EDGE_PUNCT.contains(&c))
}

fn alpha_char_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

/// An all-caps word with at least two letters
fn is_allcaps_alpha_word(token: &str) -> bool {
    let cleaned = normalize_token(token);
    if alpha_char_count(cleaned) < 2 {
        return false;
    }
    if cleaned.chars().any(|c| c.is_ascii_lowercase()) {
        return false;
    }
    cleaned.chars().any(|c| c.is_ascii_uppercase())
}

/// Fraction of alphabetic characters that are uppercase, ignoring
/// skip-listed words
fn percent_uppercase_alpha(line: &str) -> f64 {
    let mut letters = 0usize;
    let mut upper = 0usize;

    for token in line.split_whitespace() {
        let base: String = token.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        if SKIP_WORDS.contains(&base.to_lowercase().as_str()) {
            continue;
        }
        for ch in base.chars() {
            letters += 1;
            if ch.is_ascii_uppercase() {
                upper += 1;
            }
        }
    }

    if letters == 0 {
        0.0
    } else {
        upper as f64 / letters as f64
    }
}

/// Organizational boilerplate that closes and discards the current block
fn is_excluded_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    let cleaned: String = lower.chars().filter(|c| c.is_ascii_lowercase()).collect();

    if cleaned.contains("congressionalrecord") {
        return true;
    }
    // The OCR frequently drops the "n" from "government"
    if cleaned == "usgovernment" || cleaned == "usgoverment" {
        return true;
    }

    let words: Vec<String> = lower
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect();
    const KEYWORDS: &[&str] = &["gpo", "authenticated", "authentication", "authentic", "information"];
    !words.is_empty() && words.iter().all(|w| KEYWORDS.contains(&w.as_str()))
}

fn is_heading_like(stripped: &str) -> bool {
    alpha_char_count(stripped) >= 8 && percent_uppercase_alpha(stripped) >= 0.60
}

/// Scan a transcript for heading-like line blocks naming debate topics.
///
/// Consecutive lines that are mostly uppercase accumulate into a block; a
/// single all-caps word may continue an open block; blank lines are kept
/// inside the block when the next non-blank line is also heading-like.
/// Blocks beginning with a courtesy title are speaker turns that happened
/// to satisfy the capitalization heuristic and are discarded.
pub fn find_title_blocks(text: &str) -> Vec<TitleBlock> {
    let lines: Vec<(usize, usize, &str)> = {
        let mut offset = 0;
        text.split_inclusive('\n')
            .map(|line| {
                let start = offset;
                offset += line.len();
                (start, offset, line)
            })
            .collect()
    };

    let mut blocks: Vec<TitleBlock> = Vec::new();
    let mut block: Vec<(usize, usize, &str)> = Vec::new();
    let mut block_start = 0usize;

    for i in 0..lines.len() {
        let (line_start, line_end, line) = lines[i];
        let stripped = line.trim();

        if stripped.is_empty() && !block.is_empty() {
            // Look past further blank lines: a blank inside a heading run
            // stays inside the block
            let mut j = i + 1;
            while j < lines.len() && lines[j].2.trim().is_empty() {
                j += 1;
            }
            if j < lines.len() && is_heading_like(lines[j].2.trim()) {
                block.push((line_start, line_end, line));
                continue;
            }
            close_block(&mut blocks, &block, block_start);
            block.clear();
            continue;
        }

        if is_excluded_line(line) {
            // Scan furniture bleeding into a heading run poisons the whole
            // candidate, so the open block is dropped rather than emitted
            block.clear();
            continue;
        }

        let alpha_words = stripped
            .split_whitespace()
            .filter(|w| w.chars().any(|c| c.is_ascii_alphabetic()))
            .count();
        let cap_words = stripped
            .split_whitespace()
            .filter(|w| is_allcaps_alpha_word(w))
            .count();

        let is_strong = alpha_words >= 2 && is_heading_like(stripped);
        let is_short_continuation = alpha_words == 1 && cap_words >= 1;

        if is_strong {
            if block.is_empty() {
                block_start = line_start;
            }
            block.push((line_start, line_end, line));
        } else if !block.is_empty() && is_short_continuation {
            block.push((line_start, line_end, line));
        } else if !block.is_empty() {
            close_block(&mut blocks, &block, block_start);
            block.clear();
        }
    }

    if !block.is_empty() {
        close_block(&mut blocks, &block, block_start);
    }

    blocks
}

/// Emit a closed block unless it is a courtesy-title speaker turn
fn close_block(blocks: &mut Vec<TitleBlock>, block: &[(usize, usize, &str)], block_start: usize) {
    let text: String = block.iter().map(|(_, _, line)| *line).collect();
    let lead = text.trim_start();
    if COURTESY_PREFIXES.iter().any(|p| lead.starts_with(p)) {
        return;
    }
    let last_end = block.last().map(|(_, end, _)| *end).unwrap_or(block_start);
    blocks.push(TitleBlock {
        text,
        span: Span::new(block_start, last_end),
    });
}
