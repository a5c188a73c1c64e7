use once_cell::sync::Lazy;
use regex::Regex;

/// Inline noise removed from an assembled turn's text: procedural
/// permission asides, leftover rule fragments, time stamps, roll-call and
/// page-break annotations, and any markup tags.
static ARTIFACT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\([^)]*asked and was given permission[^)]*\)\s*",
        r"[-_]{3,}",
        r"\{time\}\s*\d{2,4}",
        r"\[Roll[^\]\r\n]*\]",
        r"\[\[Page [A-Za-z0-9]{1,10}\]\]",
        r"(?is)<title>.*?</title>",
        r"(?i)</?[^>]+>",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("artifact pattern must compile"))
    .collect()
});

/// Remove every artifact occurrence from a turn's text, keeping the
/// surrounding prose intact.
pub fn strip_artifacts(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in ARTIFACT_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_aside_removed() {
        let text = "(Mr. SMITH asked and was given permission to address the House.) I rise today.";
        assert_eq!(strip_artifacts(text), "I rise today.");
    }

    #[test]
    fn test_rule_fragments_removed() {
        assert_eq!(strip_artifacts("before ----- after"), "before  after");
    }

    #[test]
    fn test_time_marker_removed() {
        assert_eq!(strip_artifacts("I yield. {time} 1430 The vote."), "I yield.  The vote.");
    }

    #[test]
    fn test_roll_call_annotation_removed() {
        assert_eq!(strip_artifacts("The yeas [Roll No. 12] prevailed."), "The yeas  prevailed.");
    }

    #[test]
    fn test_repeated_page_breaks_removed() {
        let text = "start [[Page H123]] middle [[Page H124]] end";
        assert_eq!(strip_artifacts(text), "start  middle  end");
    }

    #[test]
    fn test_title_tag_and_content_removed() {
        let text = "before <title>THE CLIMATE EMERGENCY ACT</title> after";
        assert_eq!(strip_artifacts(text), "before  after");
    }

    #[test]
    fn test_markup_tags_removed() {
        assert_eq!(strip_artifacts("a <bullet> b </bullet> c"), "a  b  c");
    }
}
