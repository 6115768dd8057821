//! Rendering scan and tokenizer results for display.

use crate::OutputFormat;
use parley_error::{OutputError, OutputErrorKind, ParleyResult};
use parley_lexer::ScanResult;

/// Render scan results in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use parley::{ContentScanner, OutputFormat, PatternKind, render_scans};
///
/// let results = ContentScanner::new().scan_many([PatternKind::MentionRole], "<@&5>", false);
/// let text = render_scans(&results, OutputFormat::Human).unwrap();
/// assert!(text.contains("MENTION_ROLE: 1 match"));
/// ```
pub fn render_scans(results: &[ScanResult], format: OutputFormat) -> ParleyResult<String> {
    match format {
        OutputFormat::Json => to_json(results),
        OutputFormat::Human => {
            let mut out = String::new();
            for result in results {
                let noun = if result.len() == 1 { "match" } else { "matches" };
                out.push_str(&format!("{}: {} {}\n", result.kind(), result.len(), noun));
                for m in result.matches() {
                    let fields = serde_json::to_string(m.fields()).map_err(serialize_error)?;
                    let span = m.span();
                    out.push_str(&format!(
                        "  [{}..{}] {:?} {}\n",
                        span.start,
                        span.end,
                        m.matched_text(),
                        fields
                    ));
                }
            }
            Ok(out)
        }
    }
}

/// Render tokens in the requested format, one per line for humans.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_tokens(tokens: &[&str], format: OutputFormat) -> ParleyResult<String> {
    match format {
        OutputFormat::Json => to_json(tokens),
        OutputFormat::Human => {
            let mut out = String::new();
            for (i, token) in tokens.iter().enumerate() {
                out.push_str(&format!("{}: {:?}\n", i, token));
            }
            Ok(out)
        }
    }
}

fn serialize_error(err: serde_json::Error) -> OutputError {
    OutputError::new(OutputErrorKind::Serialize(err.to_string()))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> ParleyResult<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(serialize_error)?;
    json.push('\n');
    Ok(json)
}
