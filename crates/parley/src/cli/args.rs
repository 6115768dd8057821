//! `parley args` handler.

use parley::{OutputFormat, ParleyConfig, ParleyResult, render_tokens, require_arguments};
use tracing::{debug, instrument};

/// Tokenize `content` and print each argument.
///
/// Empty input is reported as an error rather than printing nothing.
#[instrument(skip(content, config), fields(content_len = content.len()))]
pub fn handle_args(
    format: Option<OutputFormat>,
    content: &str,
    config: &ParleyConfig,
) -> ParleyResult<()> {
    let tokens = require_arguments(content)?;
    debug!(token_count = tokens.len(), "Tokenized arguments");

    print!("{}", render_tokens(&tokens, format.unwrap_or(config.output.format))?);
    Ok(())
}
