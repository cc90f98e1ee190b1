//! Rules command - lists available detection rules.

use std::str::FromStr;

use console::style;
use frisk_core::prelude::*;

use crate::ui::{colors, print_command_header, severity_indicator, severity_style};

/// Lists built-in detection rules, optionally filtered by group or
/// severity.
pub fn run(group_filter: Option<&str>, severity_filter: Option<&str>, verbose: bool) -> super::Result {
    print_command_header("rules");

    let registry = RuleRegistry::builtin()?;
    let severity = severity_filter.map(Severity::from_str).transpose()?;
    let rules = filter_rules(registry.rules(), group_filter, severity);

    if rules.is_empty() {
        print_no_matches(group_filter, severity_filter);
        return Ok(());
    }

    print_count(rules.len());

    for rule in rules {
        if verbose {
            print_rule_detail(rule);
        } else {
            print_rule_row(rule);
        }
    }

    Ok(())
}

fn filter_rules<'a>(rules: &'a [Rule], group: Option<&str>, severity: Option<Severity>) -> Vec<&'a Rule> {
    rules
        .iter()
        .filter(|r| matches_group(r, group) && matches_severity(r, severity))
        .collect()
}

fn matches_group(rule: &Rule, filter: Option<&str>) -> bool {
    filter.is_none_or(|g| rule.group.as_str().eq_ignore_ascii_case(g))
}

fn matches_severity(rule: &Rule, filter: Option<Severity>) -> bool {
    filter.is_none_or(|s| rule.severity == s)
}

fn print_count(count: usize) {
    println!("{}", colors::muted().apply_to(format!("{count} rules")));
}

fn print_no_matches(group: Option<&str>, severity: Option<&str>) {
    let mut filters = Vec::new();
    if let Some(g) = group {
        filters.push(format!("--group {g}"));
    }
    if let Some(s) = severity {
        filters.push(format!("--severity {s}"));
    }

    println!(
        "{} {} {}",
        colors::muted().apply_to("○"),
        colors::secondary().apply_to("no rules match"),
        style(filters.join(" ")).bold()
    );
}

fn print_rule_row(rule: &Rule) {
    println!(
        "  {}  {}",
        colors::accent().apply_to(&rule.id),
        colors::secondary().apply_to(&rule.label)
    );
}

fn print_rule_detail(rule: &Rule) {
    let sev_style = severity_style(rule.severity);
    let severity_label = rule.severity.to_string();

    println!();
    println!(
        "{} {} {} {} {} {}",
        severity_indicator(rule.severity),
        style(&rule.id).bold(),
        colors::muted().apply_to("·"),
        sev_style.apply_to(&severity_label),
        colors::muted().apply_to("·"),
        colors::muted().apply_to(rule.group.as_str())
    );
    println!("  {}", colors::secondary().apply_to(&rule.description));
    println!("  {}", colors::muted().apply_to(rule.regex.as_str()));
}
