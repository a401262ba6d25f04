//! Caption highlighting
//!
//! Finds the substrings the model flagged inside the original caption and
//! wraps them for display. Spans come from two places: the flag's own
//! `span` field and any quoted fragments inside its issue lines.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::models::CaptionFlag;

// Fragments wrapped in curly or straight quotes inside issue text.
static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\u{201C}\u{201D}\"']([^\u{201C}\u{201D}\"']+)[\u{201C}\u{201D}\"']").unwrap());

/// Collect highlight candidates from flags: explicit spans plus quoted
/// substrings in issues, deduplicated in encounter order, at least two
/// characters long, longest first.
pub fn extract_candidate_spans(flags: &[CaptionFlag]) -> Vec<String> {
    let mut spans: Vec<String> = Vec::new();
    let push_unique = |candidate: &str, spans: &mut Vec<String>| {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() && !spans.iter().any(|s| s == trimmed) {
            spans.push(trimmed.to_string());
        }
    };

    for flag in flags {
        push_unique(&flag.span, &mut spans);
        for issue in &flag.issues {
            for caps in QUOTED_SPAN.captures_iter(issue) {
                if let Some(m) = caps.get(1) {
                    push_unique(m.as_str(), &mut spans);
                }
            }
        }
    }

    spans.retain(|s| s.chars().count() >= 2);
    spans.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    spans
}

/// All case-insensitive literal occurrences of `needle` as byte ranges.
pub fn find_all_ranges(text: &str, needle: &str) -> Result<Vec<(usize, usize)>> {
    if needle.is_empty() {
        return Ok(Vec::new());
    }
    let pattern = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .context("Failed to compile caption span pattern")?;
    Ok(pattern
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect())
}

/// Sort ranges and fold overlapping or touching ones together.
pub fn merge_ranges(mut ranges: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    if ranges.is_empty() {
        return Vec::new();
    }
    ranges.sort();
    let mut merged = vec![ranges[0]];
    for (start, end) in ranges.into_iter().skip(1) {
        let last = merged.len() - 1;
        let (_, last_end) = merged[last];
        if start <= last_end {
            merged[last].1 = last_end.max(end);
        } else {
            merged.push((start, end));
        }
    }
    merged
}

/// Render the caption with every flagged region wrapped in a
/// `caption-flag` span, everything HTML-escaped.
pub fn highlight_caption(text: &str, flags: &[CaptionFlag]) -> Result<String> {
    let spans = extract_candidate_spans(flags);
    let mut all_ranges: Vec<(usize, usize)> = Vec::new();
    for span in &spans {
        all_ranges.extend(find_all_ranges(text, span)?);
    }
    let ranges = merge_ranges(all_ranges);

    if ranges.is_empty() {
        return Ok(format!(
            "<div class='caption-strong'>{}</div>",
            escape_text(text)
        ));
    }

    let mut parts = String::new();
    let mut last = 0usize;
    for (start, end) in ranges {
        if last < start {
            parts.push_str(&escape_text(&text[last..start]));
        }
        parts.push_str(&format!(
            "<span class='caption-flag'>{}</span>",
            escape_text(&text[start..end])
        ));
        last = end;
    }
    if last < text.len() {
        parts.push_str(&escape_text(&text[last..]));
    }

    Ok(format!("<div class='caption-strong'>{}</div>", parts))
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
