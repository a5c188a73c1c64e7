use once_cell::sync::Lazy;
use regex::Regex;

static HOUSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*HOUSE[ \t]*$").expect("house pattern must compile"));
static SENATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*SENATE[ \t]*$").expect("senate pattern must compile"));

/// Find every standalone chamber marker line, as (offset, tag) pairs
/// sorted by offset. Tags are "H" and "S".
pub fn chamber_markers(text: &str) -> Vec<(usize, &'static str)> {
    let mut markers: Vec<(usize, &'static str)> = HOUSE_RE
        .find_iter(text)
        .map(|m| (m.start(), "H"))
        .chain(SENATE_RE.find_iter(text).map(|m| (m.start(), "S")))
        .collect();
    markers.sort_by_key(|(offset, _)| *offset);
    markers
}

/// Chamber in effect at an offset: the last marker at or before it, or
/// empty before the first marker
pub fn chamber_for_offset(markers: &[(usize, &'static str)], offset: usize) -> &'static str {
    let mut chamber = "";
    for (marker_offset, tag) in markers {
        if *marker_offset <= offset {
            chamber = tag;
        } else {
            break;
        }
    }
    chamber
}

/// Gender tag read off the speaker label's courtesy title
pub fn infer_gender(speaker: &str) -> &'static str {
    if speaker.starts_with("Ms.") || speaker.starts_with("Mrs.") {
        "F"
    } else if speaker.starts_with("Mr.") {
        "M"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chamber_markers_sorted() {
        let text = "preface\nSENATE\nsenate business\nHOUSE\nhouse business\n";
        let markers = chamber_markers(text);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].1, "S");
        assert_eq!(markers[1].1, "H");
        assert!(markers[0].0 < markers[1].0);
    }

    #[test]
    fn test_chamber_for_offset() {
        let text = "preface\nSENATE\nsenate business\nHOUSE\nhouse business\n";
        let markers = chamber_markers(text);
        let house_at = text.find("HOUSE").unwrap();

        assert_eq!(chamber_for_offset(&markers, 0), "");
        assert_eq!(chamber_for_offset(&markers, text.find("senate business").unwrap()), "S");
        assert_eq!(chamber_for_offset(&markers, house_at), "H");
        assert_eq!(chamber_for_offset(&markers, text.len()), "H");
    }

    #[test]
    fn test_embedded_chamber_word_is_not_a_marker() {
        assert!(chamber_markers("the HOUSE resumed business\n").is_empty());
    }

    #[test]
    fn test_infer_gender() {
        assert_eq!(infer_gender("Mr. SMITH"), "M");
        assert_eq!(infer_gender("Ms. WATERS of California"), "F");
        assert_eq!(infer_gender("Mrs. JOHNSON"), "F");
        assert_eq!(infer_gender("The SPEAKER pro tempore"), "");
    }
}
