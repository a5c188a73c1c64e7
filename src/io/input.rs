use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// "<Month> <D>, <YYYY>" anywhere in a file name
static FILENAME_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z]+)\s+(\d{1,2}),\s*(\d{4})").expect("date pattern must compile"));

/// Read a raw transcript text file
pub fn read_transcript(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read transcript: {:?}", path))
}

/// Date parsed out of a source file name, with its decade label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDate {
    pub date: NaiveDate,
    /// e.g. "1990s"
    pub decade: String,
}

impl FileDate {
    /// ISO formatted date string
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Extract the proceeding date embedded in a source file name, e.g.
/// "Senate January 25, 1994.txt"
pub fn extract_date_from_filename(filename: &str) -> Result<FileDate> {
    let caps = FILENAME_DATE_RE
        .captures(filename)
        .ok_or_else(|| anyhow!("No date found in filename: {filename}"))?;

    let composed = format!("{} {}, {}", &caps[1], &caps[2], &caps[3]);
    let date = NaiveDate::parse_from_str(&composed, "%B %d, %Y")
        .with_context(|| format!("Unparseable date in filename: {filename}"))?;

    let decade = format!("{}s", (date.year() / 10) * 10);
    Ok(FileDate { date, decade })
}
