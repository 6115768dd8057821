//! `parley scan` handler.

use parley::{ContentScanner, OutputFormat, ParleyConfig, ParleyResult, PatternKind, render_scans};
use tracing::{debug, instrument};

/// Scan `content` and print the results.
#[instrument(skip(content, config), fields(content_len = content.len()))]
pub fn handle_scan(
    kinds: &[String],
    first: bool,
    format: Option<OutputFormat>,
    content: &str,
    config: &ParleyConfig,
) -> ParleyResult<()> {
    let kinds = if kinds.is_empty() {
        config.scan.kinds.clone()
    } else {
        kinds
            .iter()
            .map(|kind| PatternKind::parse(kind))
            .collect::<Result<Vec<_>, _>>()?
    };
    let first_only = first || config.scan.first_only;
    debug!(?kinds, first_only, "Scanning");

    let results = ContentScanner::new().scan_many(kinds, content, first_only);
    print!("{}", render_scans(&results, format.unwrap_or(config.output.format))?);
    Ok(())
}
