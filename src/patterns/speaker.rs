use once_cell::sync::Lazy;
use regex::Regex;

use super::{PatternFamily, ScanConfig};
use crate::models::Event;

/// Matches the line prefix that opens a new speaker turn: 1-2 leading
/// spaces, an honorific or institutional role, a name-shaped token
/// sequence, and a terminating period.
///
/// Covers both member lines ("  Mr. SMITH of Ohio.") and fixed role
/// phrases ("  The SPEAKER pro tempore (Mr. Foley).").
static SPEAKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?m)^[ ]{1,2}",
        r"(?:",
        r"(?:M(?:r|rs|s)\.|Miss|Chairman|Chairwoman|HON\.|Dr\.)\s(?:Counsel\s)?",
        r"(?:[A-Z]\.\s)*",
        r"[A-Z][a-z]{0,3}[A-Za-z']+",
        r"(?:\s[A-Z]\.)*",
        r"(?:-[A-Za-z']+)*",
        r"(?:\s[A-Z][a-z]{0,3}[A-Za-z']+(?:-[A-Za-z']+)*)*",
        r"(?:\s(?:of\s[A-Z][a-zA-Z]+(?:\s[A-Z][a-zA-Z]+)*))?",
        r"(?:\s\[continuing\])?",
        r"(?:\s\([^)]*\))?\.",
        r"|",
        r"(?:",
        r"The\s(?:",
        r"CLERK",
        r"|Acting\sCHAIR",
        r"|ACTING\sCHAIR",
        r"|CHAIR",
        r"|CHAIRMAN(?:\spro\stempore)?",
        r"|PRESIDING\sOFFICER",
        r"|SPEAKER(?:\spro\stempore)?",
        r"|VICE\sPRESIDENT",
        r"|PRESIDENT\spro\stempore",
        r"|ACTING\sPRESIDENT\spro\stempore",
        r"|CHIEF\sJUSTICE",
        r")",
        r"(?:\s\([^)]*\))?",
        r"\.",
        r")",
        r")",
    ))
    .expect("speaker pattern must compile")
});

/// Turn-start family: honorific + name lines and institutional role lines
pub struct SpeakerStart;

impl PatternFamily for SpeakerStart {
    fn name(&self) -> &'static str {
        "speaker-start"
    }

    fn scan(&self, text: &str, _config: &ScanConfig) -> Vec<Event> {
        SPEAKER_RE
            .find_iter(text)
            .map(|m| {
                let label = strip_label(m.as_str());
                Event::start_of(label, m.start(), m.end())
            })
            .collect()
    }
}

/// Trim the matched text and drop the trailing period to get the label
fn strip_label(matched: &str) -> String {
    let trimmed = matched.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}
