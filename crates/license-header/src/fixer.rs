//! Applying fixes to source text

use shared_types::Fix;

/// Result of one fix pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub output: String,
    pub applied: usize,
    /// Fixes that overlapped an earlier one and were left for a later pass
    pub skipped: usize,
}

/// Apply non-overlapping fixes in a single pass.
///
/// Fixes are applied in order of their start offset. A fix that starts at or
/// before the end of an already applied fix is skipped, as is a fix whose
/// span does not fit the text.
pub fn apply_fixes(text: &str, fixes: &[Fix]) -> FixOutcome {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|fix| {
        let span = fix.span();
        (span.start, span.end)
    });

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut last_end: Option<usize> = None;
    let mut applied = 0;
    let mut skipped = 0;

    for fix in ordered {
        let span = fix.span();
        let overlaps = last_end.is_some_and(|end| span.start <= end);
        let in_bounds = span.end <= text.len()
            && text.is_char_boundary(span.start)
            && text.is_char_boundary(span.end);
        if overlaps || !in_bounds {
            skipped += 1;
            continue;
        }

        output.push_str(&text[cursor..span.start]);
        output.push_str(fix.replacement());
        cursor = span.end;
        last_end = Some(span.end);
        applied += 1;
    }
    output.push_str(&text[cursor..]);

    FixOutcome {
        output,
        applied,
        skipped,
    }
}
