//! Scan command - walks a tree and reports leaked secrets.

mod output;

use anyhow::Context as _;
use frisk_core::prelude::*;

use crate::ScanArgs;
use crate::ui::exit;

/// Executes the `frisk scan` command.
///
/// Exit code is 0 on normal completion; 1 when findings exist and
/// `--fail-on-detect` was given.
pub fn run(args: &ScanArgs) -> super::Result {
    let ignores = IgnoreList::load().context("loading ignore list")?;
    let registry = RuleRegistry::builtin().context("compiling built-in rules")?;
    let scanner = Scanner::new(registry);

    let findings = scan_tree(&args.path, &scanner, &ignores);

    output::write(&findings, args.json)?;

    if args.fail_on_detect && !findings.is_empty() {
        std::process::exit(exit::FINDINGS);
    }

    Ok(())
}
