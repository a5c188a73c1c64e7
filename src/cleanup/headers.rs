use strsim::normalized_levenshtein;

use super::echo::normalize_ocr;

/// Publication years of the bound record; a bare year line is a page
/// header, not speech
const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1873..=1994;

const AUTH_KEYWORDS: &[&str] = &[
    "AUTHENTICATED",
    "AUTHENTICATE",
    "AUTHENTICATION",
    "AUTHENTIC",
    "INFORMATION",
    "GPO",
];

/// Blank out scan-page furniture lines before title detection.
///
/// The returned string has exactly the same byte length as the input:
/// dropped lines are overwritten with spaces rather than deleted, so turn
/// spans and title spans keep referring to the same offsets. Chamber
/// headers arm a one-line lookahead flag that also blanks the following
/// continuation line when it is heading-shaped.
pub fn scrub_page_headers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut skip_next = false;

    for line in text.split_inclusive('\n') {
        if should_drop(line, &mut skip_next) {
            blank_line(&mut out, line);
        } else {
            out.push_str(line);
        }
    }

    out
}

fn should_drop(line: &str, skip_next: &mut bool) -> bool {
    let normalized = normalize_ocr(line);
    let stripped = normalized.trim();
    let upper = stripped.to_uppercase();

    if is_header_year(stripped) {
        return true;
    }
    if upper.contains("CONGRESSIONAL RECORD") {
        return true;
    }
    if normalized_levenshtein(&upper, "HOUSE OF REPRESENTATIVES") >= 0.90 {
        *skip_next = true;
        return true;
    }
    if normalized_levenshtein(&upper, "SENATE") >= 0.83 {
        *skip_next = true;
        return true;
    }
    if normalized_levenshtein(&upper, "CONGRESSIONAL RECORD") >= 0.90 {
        return true;
    }
    if is_authentication_line(&upper) {
        return true;
    }

    if *skip_next {
        *skip_next = false;
        // A chamber header's continuation line starts with a heading-shaped
        // word: all caps, or long with at most one lowercase OCR slip
        if let Some(word) = first_alpha_word(&normalized) {
            let lowercase = word.chars().filter(|c| c.is_ascii_lowercase()).count();
            if (lowercase == 0 && word.len() >= 3) || (word.len() >= 6 && lowercase <= 1) {
                return true;
            }
        }
    }

    false
}

fn is_header_year(stripped: &str) -> bool {
    if stripped.len() != 4 || !stripped.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    stripped.parse::<u32>().is_ok_and(|year| YEAR_RANGE.contains(&year))
}

fn is_authentication_line(upper: &str) -> bool {
    let words: Vec<&str> = upper
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();
    !words.is_empty() && words.iter().all(|w| AUTH_KEYWORDS.contains(w))
}

fn first_alpha_word(line: &str) -> Option<String> {
    line.split(|c: char| !c.is_ascii_alphabetic())
        .find(|w| !w.is_empty())
        .map(|w| w.to_string())
}

/// Overwrite a line's content with spaces, preserving its byte length and
/// any trailing newline
fn blank_line(out: &mut String, line: &str) {
    let content_len = line.len() - usize::from(line.ends_with('\n'));
    for _ in 0..content_len {
        out.push(' ');
    }
    if line.ends_with('\n') {
        out.push('\n');
    }
}
