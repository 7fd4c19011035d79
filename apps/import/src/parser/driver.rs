//! Parser driver — folds the line classifier over the input text.

use crate::parser::classifier::ScanState;
use crate::parser::models::ParsedResume;

/// Parses raw extracted résumé text into a [`ParsedResume`].
///
/// Single pass, linear in the input length, no I/O and no backtracking. Total
/// over any string: unrecognized lines are ignored and the empty string yields
/// an all-empty value. Safe to call concurrently on different inputs.
pub fn parse_resume_text(text: &str) -> ParsedResume {
    let mut out = ParsedResume::default();
    let mut state = ScanState::default();

    for raw in text.lines() {
        let line = raw.trim();
        // Blank lines carry no signal: no section change, no flush.
        if line.is_empty() {
            continue;
        }
        state.step(line, &mut out);
    }
    state.finish(&mut out);

    out
}
