pub mod query;
pub mod scan;

use console::style;
use lame_delegation_domain::ScanResult;

/// One coloured line per verdict.
pub fn verdict_line(result: &ScanResult) -> String {
    if result.contains_lame_delegation {
        let reason = result
            .error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default();
        format!("{} {} {}", style("LAME").red().bold(), result.hostname, reason)
    } else {
        format!("{} {}", style("OK").green().bold(), result.hostname)
    }
}
