use crate::models::{Section, SectionError, Span, TitleBlock, Turn};

/// Derive sections from the ordered title blocks: each section runs from
/// the end of its title block to the start of the next one; the last
/// section extends to the end of the transcript.
pub fn extract_sections(blocks: &[TitleBlock], transcript_len: usize) -> Vec<Section> {
    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            let end = blocks
                .get(i + 1)
                .map(|next| next.span.start)
                .unwrap_or(transcript_len);
            Section {
                title: block.title().to_string(),
                span: Span::new(block.span.end, end),
            }
        })
        .collect()
}

/// Title of the section whose span contains the offset, or empty when no
/// section does
pub fn title_for_offset(sections: &[Section], offset: usize) -> &str {
    sections
        .iter()
        .find(|s| s.span.contains(offset))
        .map(|s| s.title.as_str())
        .unwrap_or("")
}

/// Assign each turn the title of its enclosing section.
///
/// Fails only on caller misuse: a turn whose span lies beyond the mapped
/// transcript was produced from a different text than the sections.
pub fn assign_titles(
    turns: &mut [Turn],
    sections: &[Section],
    transcript_len: usize,
) -> Result<(), SectionError> {
    for turn in turns.iter_mut() {
        if turn.span.start > transcript_len || turn.span.end > transcript_len {
            return Err(SectionError::SpanOutOfBounds {
                start: turn.span.start,
                end: turn.span.end,
                len: transcript_len,
            });
        }
        turn.title = title_for_offset(sections, turn.span.start).to_string();
    }
    Ok(())
}
