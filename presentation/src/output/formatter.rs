//! Output formatter trait

use callerid_domain::LookupResult;

/// Trait for formatting lookup results
pub trait OutputFormatter {
    /// Format the complete result
    fn format(&self, result: &LookupResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &LookupResult) -> String;
}
