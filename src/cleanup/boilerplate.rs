/// The running head that reappears throughout the scanned record, often
/// with a single OCR-corrupted character
pub const TARGET_PHRASE: &str = "CONGRESSIONAL RECORD";

/// Whether the Levenshtein distance between `a` and `b` is at most one.
///
/// Equal lengths allow one substitution; lengths differing by one allow a
/// single insertion or deletion; anything further apart is rejected.
fn levenshtein_leq1(a: &[char], b: &[char]) -> bool {
    if a == b {
        return true;
    }

    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    match long.len() - short.len() {
        0 => {
            let diffs = short.iter().zip(long.iter()).filter(|(x, y)| x != y).count();
            diffs <= 1
        }
        1 => {
            // One skip allowed in the longer sequence
            let mut i = 0;
            let mut j = 0;
            let mut skipped = false;
            while i < short.len() && j < long.len() {
                if short[i] == long[j] {
                    i += 1;
                    j += 1;
                } else if skipped {
                    return false;
                } else {
                    skipped = true;
                    j += 1;
                }
            }
            true
        }
        _ => false,
    }
}

/// Whether any window of the line fuzzily matches the target phrase.
///
/// Windows of the target length and one character either side slide over
/// the uppercased line; each window is reduced to letters and spaces
/// before the distance check.
pub fn line_contains_fuzzy_target(line: &str) -> bool {
    let target: Vec<char> = TARGET_PHRASE.chars().collect();
    let upper: Vec<char> = line.to_uppercase().chars().collect();

    for window_len in [target.len() - 1, target.len(), target.len() + 1] {
        if window_len == 0 || window_len > upper.len() {
            continue;
        }
        for window in upper.windows(window_len) {
            let cleaned: Vec<char> = window
                .iter()
                .copied()
                .filter(|c| c.is_ascii_uppercase() || *c == ' ')
                .collect();
            if levenshtein_leq1(&cleaned, &target) {
                return true;
            }
        }
    }

    false
}

/// Remove every line that fuzzily contains the target phrase. Lines are
/// removed whole; partial matches never truncate a line.
pub fn filter_boilerplate(text: &str) -> String {
    text.lines()
        .filter(|line| !line_contains_fuzzy_target(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_distance_zero() {
        assert!(levenshtein_leq1(&chars("SENATE"), &chars("SENATE")));
    }

    #[test]
    fn test_single_substitution() {
        assert!(levenshtein_leq1(&chars("CONGRESSIOVAL RECORD"), &chars(TARGET_PHRASE)));
    }

    #[test]
    fn test_single_deletion() {
        assert!(levenshtein_leq1(&chars("CONGRESSIONAL RECOR"), &chars(TARGET_PHRASE)));
    }

    #[test]
    fn test_single_insertion() {
        assert!(levenshtein_leq1(&chars("CONGRESSIONAAL RECORD"), &chars(TARGET_PHRASE)));
    }

    #[test]
    fn test_two_edits_rejected() {
        assert!(!levenshtein_leq1(&chars("CONGRESSIOVAL RECORT"), &chars(TARGET_PHRASE)));
        assert!(!levenshtein_leq1(&chars("CONGRESSIONAL REC"), &chars(TARGET_PHRASE)));
    }

    #[test]
    fn test_exact_phrase_line_removed() {
        let text = "speech line one\nCONGRESSIONAL RECORD\nspeech line two";
        assert_eq!(filter_boilerplate(text), "speech line one\nspeech line two");
    }

    #[test]
    fn test_ocr_flipped_character_removed() {
        let text = "before\nCONGRESSIOVAL RECORD\nafter";
        assert_eq!(filter_boilerplate(text), "before\nafter");
    }

    #[test]
    fn test_phrase_embedded_in_longer_line_removes_whole_line() {
        let text = "page 4 CONGRESSIONAL RECORD January 25\nkept line";
        assert_eq!(filter_boilerplate(text), "kept line");
    }

    #[test]
    fn test_punctuation_inside_window_ignored() {
        let text = "CONGRESSIONAL-RECORD, page 4\nkept";
        assert_eq!(filter_boilerplate(text), "kept");
    }

    #[test]
    fn test_clean_lines_untouched() {
        let text = "the record of this congress\nspeaks for itself";
        assert_eq!(filter_boilerplate(text), text);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let text = "a\nCONGRESSIONAL RECORD\nb\nCONGRESSIOVAL RECORD\nc";
        let once = filter_boilerplate(text);
        assert_eq!(filter_boilerplate(&once), once);
    }
}
