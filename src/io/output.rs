use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Turn;
use crate::pipeline::SegmentResult;

/// Machine-readable output for one segmented document
#[derive(Debug, Clone, Serialize)]
pub struct MachineDocument {
    /// Source file name the transcript came from
    pub source: String,
    /// ISO proceeding date, when derivable from the file name
    pub date: Option<String>,
    /// Decade label, e.g. "1990s"
    pub decade: Option<String>,
    /// Ordered speech turns
    pub turns: Vec<MachineTurn>,
    /// Titles of the detected debate-title blocks, in order
    pub titles: Vec<String>,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineTurn {
    pub turn_id: String,
    pub speaker: String,
    pub gender: String,
    pub chamber: String,
    pub title: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentMetadata {
    pub total_turns: usize,
    pub total_titles: usize,
    pub turns_with_titles: usize,
    pub transcript_len: usize,
}

impl MachineDocument {
    pub fn from_result(
        source: &str,
        date: Option<(String, String)>,
        result: &SegmentResult,
    ) -> Self {
        let turns: Vec<MachineTurn> = result
            .turns
            .iter()
            .map(|t| MachineTurn {
                turn_id: t.turn_id.clone(),
                speaker: t.speaker.clone(),
                gender: t.gender.clone(),
                chamber: t.chamber.clone(),
                title: t.title.clone(),
                start: t.span.start,
                end: t.span.end,
                text: t.text.clone(),
            })
            .collect();

        let (date, decade) = match date {
            Some((d, dec)) => (Some(d), Some(dec)),
            None => (None, None),
        };

        Self {
            source: source.to_string(),
            date,
            decade,
            metadata: DocumentMetadata {
                total_turns: turns.len(),
                total_titles: result.title_blocks.len(),
                turns_with_titles: turns.iter().filter(|t| !t.title.is_empty()).count(),
                transcript_len: result.prepared_len,
            },
            turns,
            titles: result.title_blocks.iter().map(|b| b.title().to_string()).collect(),
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable rendering of segmented turns
pub struct HumanDocument<'a> {
    turns: &'a [Turn],
}

impl<'a> HumanDocument<'a> {
    pub fn new(turns: &'a [Turn]) -> Self {
        Self { turns }
    }

    /// Format the turns as readable text, one header line per turn
    pub fn format(&self) -> String {
        let mut output = String::new();
        let mut current_title = "";

        for turn in self.turns {
            if !turn.title.is_empty() && turn.title != current_title {
                output.push_str(&format!("=== {} ===\n\n", turn.title));
                current_title = &turn.title;
            }

            output.push_str(&format!("{}:\n", turn.speaker));
            output.push_str(&wrap_text(&turn.text, 80));
            output.push_str("\n\n");
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        if line_len + word.len() + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word.len();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Span;
    use crate::pipeline::{segment, SegmentConfig};

    fn sample_result() -> SegmentResult {
        segment(
            "  Mr. SMITH. This is a test.\n  Mr. JONES. A reply.\n",
            &SegmentConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_machine_document_counts() {
        let result = sample_result();
        let doc = MachineDocument::from_result("test.txt", None, &result);
        assert_eq!(doc.metadata.total_turns, 2);
        assert_eq!(doc.metadata.turns_with_titles, 0);
        assert!(doc.date.is_none());
    }

    #[test]
    fn test_write_json_roundtrip() {
        let result = sample_result();
        let doc = MachineDocument::from_result(
            "Senate January 25, 1994.txt",
            Some(("1994-01-25".to_string(), "1990s".to_string())),
            &result,
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        doc.write_json(&path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["date"], "1994-01-25");
        assert_eq!(parsed["turns"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["turns"][0]["speaker"], "Mr. SMITH");
    }

    #[test]
    fn test_human_format_groups_by_title() {
        let turns = vec![
            {
                let mut t = Turn::new("Mr. SMITH".to_string(), Span::new(0, 10), "First.".to_string());
                t.title = "THE CLIMATE ACT".to_string();
                t
            },
            {
                let mut t = Turn::new("Ms. DOE".to_string(), Span::new(20, 30), "Second.".to_string());
                t.title = "THE CLIMATE ACT".to_string();
                t
            },
        ];
        let formatted = HumanDocument::new(&turns).format();
        assert_eq!(formatted.matches("=== THE CLIMATE ACT ===").count(), 1);
        assert!(formatted.contains("Mr. SMITH:\nFirst."));
    }

    #[test]
    fn test_wrap_text() {
        let text = "this line has quite a few words and should wrap at the configured width";
        let wrapped = wrap_text(text, 20);
        for line in wrapped.lines() {
            assert!(line.len() <= 25);
        }
    }
}
