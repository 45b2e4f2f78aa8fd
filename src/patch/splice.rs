// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use thiserror::Error as TeError;

#[derive(TeError, Debug, PartialEq)]
pub enum SpliceError {
    #[error("Start marker {0:?} not found in source text")]
    StartMarkerNotFound(String),
    #[error("End marker {0:?} not found after the start marker")]
    EndMarkerNotFound(String),
    #[error("Old block not found in source text")]
    BlockNotFound,
    #[error("Marker line {marker:?} found {found} time(s), expected at least 2")]
    HeaderMarkerNotFound { marker: String, found: usize },
}

/// Replace the region between two markers with `replacement`.
///
/// The region starts at the start marker's first byte (the start marker itself
/// is consumed) and ends right before the end marker's first byte (the end
/// marker is preserved). The end marker is searched at or after the start
/// marker, so an earlier occurrence of it does not shrink the region.
pub fn replace_between_markers(
    text: &str,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<String, SpliceError> {
    let start = text
        .find(start_marker)
        .ok_or_else(|| SpliceError::StartMarkerNotFound(start_marker.to_string()))?;
    let end = text[start..]
        .find(end_marker)
        .map(|offset| start + offset)
        .ok_or_else(|| SpliceError::EndMarkerNotFound(end_marker.to_string()))?;

    let mut result = String::with_capacity(start + replacement.len() + (text.len() - end));
    result.push_str(&text[..start]);
    result.push_str(replacement);
    result.push_str(&text[end..]);
    Ok(result)
}

/// Replace every occurrence of an exact literal block.
///
/// Presence is checked up front so an absent block is reported instead of
/// silently producing unchanged output.
pub fn replace_literal_block(
    text: &str,
    old_block: &str,
    new_block: &str,
) -> Result<(String, usize), SpliceError> {
    let occurrences = text.matches(old_block).count();
    if occurrences == 0 {
        return Err(SpliceError::BlockNotFound);
    }
    Ok((text.replace(old_block, new_block), occurrences))
}

/// Drop everything from the first line equal to `marker_line` through the
/// second such line inclusive, then prepend `replacement_lines`.
///
/// Lines are compared for exact equality, not containment. With fewer than
/// two marker lines the input is rejected, so re-splicing already-spliced
/// output fails cleanly instead of eating further into the file.
pub fn splice_header_lines(
    text: &str,
    marker_line: &str,
    replacement_lines: &[&str],
) -> Result<String, SpliceError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut markers = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| **line == marker_line)
        .map(|(index, _)| index);

    let first = markers.next();
    let second = markers.next();
    let second = match (first, second) {
        (Some(_), Some(second)) => second,
        _ => {
            return Err(SpliceError::HeaderMarkerNotFound {
                marker: marker_line.to_string(),
                found: first.map_or(0, |_| 1),
            });
        },
    };

    let mut result_lines: Vec<&str> = Vec::with_capacity(replacement_lines.len() + lines.len() - second);
    result_lines.extend_from_slice(replacement_lines);
    result_lines.extend_from_slice(&lines[second + 1..]);
    Ok(result_lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tst_replace_between_markers() {
        let result = replace_between_markers("A start X middle end B", "start", "end", "NEW");
        assert_eq!(result, Ok("A NEW end B".to_string()));
    }

    #[test]
    fn tst_replace_between_markers_keeps_surroundings() {
        let text = "prefix\nexport function translate() { old }\nexport function registerTranslation() {}\n";
        let result = replace_between_markers(
            text,
            "export function translate",
            "export function registerTranslation",
            "export function translate() { new }\n",
        ).unwrap();
        assert!(result.starts_with("prefix\n"));
        assert!(result.contains("{ new }"));
        assert!(!result.contains("{ old }"));
        assert!(result.ends_with("export function registerTranslation() {}\n"));
    }

    #[test]
    fn tst_replace_between_markers_missing_start() {
        let result = replace_between_markers("no markers here", "start", "end", "NEW");
        assert_eq!(result, Err(SpliceError::StartMarkerNotFound("start".to_string())));
    }

    #[test]
    fn tst_replace_between_markers_missing_end() {
        let result = replace_between_markers("A start X", "start", "end", "NEW");
        assert_eq!(result, Err(SpliceError::EndMarkerNotFound("end".to_string())));
    }

    #[test]
    fn tst_replace_between_markers_end_before_start_ignored() {
        // The "end" occurring before "start" must not bound the region.
        let result = replace_between_markers("end A start X end B", "start", "end", "NEW");
        assert_eq!(result, Ok("end A NEW end B".to_string()));
    }

    #[test]
    fn tst_replace_literal_block_every_occurrence() {
        let (result, count) = replace_literal_block("a OLD b OLD c", "OLD", "NEW").unwrap();
        assert_eq!(result, "a NEW b NEW c");
        assert_eq!(count, 2);
    }

    #[test]
    fn tst_replace_literal_block_not_found() {
        let result = replace_literal_block("a b c", "OLD", "NEW");
        assert_eq!(result, Err(SpliceError::BlockNotFound));
    }

    #[test]
    fn tst_splice_header_lines() {
        let text = "keep?\nMARK\nstale import\nMARK\nbody line 1\nbody line 2";
        let result = splice_header_lines(text, "MARK", &["new import 1", "new import 2"]).unwrap();
        assert_eq!(result, "new import 1\nnew import 2\nbody line 1\nbody line 2");
    }

    #[test]
    fn tst_splice_header_lines_exact_match_only() {
        // A line merely containing the marker is not a boundary.
        let text = "MARK\nMARK trailing\nMARK\nrest";
        let result = splice_header_lines(text, "MARK", &["header"]).unwrap();
        assert_eq!(result, "header\nrest");
    }

    #[test]
    fn tst_splice_header_lines_single_marker() {
        let result = splice_header_lines("MARK\nrest", "MARK", &["header"]);
        assert_eq!(result, Err(SpliceError::HeaderMarkerNotFound {
            marker: "MARK".to_string(),
            found: 1,
        }));
    }

    #[test]
    fn tst_splice_header_lines_no_marker() {
        let result = splice_header_lines("just\nlines", "MARK", &["header"]);
        assert_eq!(result, Err(SpliceError::HeaderMarkerNotFound {
            marker: "MARK".to_string(),
            found: 0,
        }));
    }

    #[test]
    fn tst_splice_header_lines_rerun_fails() {
        let text = "MARK\nstale\nMARK\nbody";
        let patched = splice_header_lines(text, "MARK", &["header"]).unwrap();
        // The marker is gone from the patched output, so a rerun must refuse.
        let rerun = splice_header_lines(&patched, "MARK", &["header"]);
        assert_eq!(rerun, Err(SpliceError::HeaderMarkerNotFound {
            marker: "MARK".to_string(),
            found: 0,
        }));
    }
}
