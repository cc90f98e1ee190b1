//! Output formatting for scan results.

mod json;
mod text;

use frisk_core::prelude::*;

/// Writes findings to stdout in the requested format.
pub fn write(findings: &[Finding], as_json: bool) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();

    if as_json {
        json::write(findings, &mut stdout)
    } else {
        text::write(findings, &mut stdout)
    }
}
