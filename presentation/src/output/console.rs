//! Console output formatter for lookup results

use crate::output::formatter::OutputFormatter;
use callerid_domain::{Address, CountryDetails, LookupResult};
use colored::Colorize;

/// Formats lookup results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete lookup result
    pub fn format(result: &LookupResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Lookup Result"));
        output.push('\n');

        // Personal information
        output.push_str(&Self::section_header("Personal Information"));
        output.push_str(&Self::field("Name", result.name.as_deref().unwrap_or("")));
        output.push_str(&Self::field(
            "Alternate Name",
            result.alternate_name.as_deref().unwrap_or("N/A"),
        ));
        output.push_str(&Self::field(
            "Email",
            result.email.as_deref().unwrap_or("Unknown"),
        ));

        // Addresses
        output.push_str(&Self::section_header("Addresses"));
        if result.addresses.is_empty() {
            output.push_str(&format!("  {}\n", "None".dimmed()));
        }
        for address in &result.addresses {
            output.push_str(&format!("  {}\n", Self::address_line(address)));
        }

        // Country details
        output.push_str(&Self::section_header("Country Details"));
        match &result.country_details {
            Some(details) => output.push_str(&Self::country_block(details)),
            None => output.push_str(&format!("  {}\n", "Unknown".dimmed())),
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &LookupResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a failed lookup
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Format a rejected submission
    pub fn format_validation(message: &str) -> String {
        format!("{} {}", "!".yellow().bold(), message.yellow())
    }

    /// `city, countryCode (timeZone)`
    pub fn address_line(address: &Address) -> String {
        format!(
            "{}, {} ({})",
            address.city().unwrap_or(""),
            address.country_code().unwrap_or(""),
            address.time_zone().unwrap_or("")
        )
    }

    fn country_block(details: &CountryDetails) -> String {
        let phone_code = details
            .primary_phone_code()
            .map(|code| format!("+{}", code))
            .unwrap_or_default();

        let mut block = String::new();
        block.push_str(&Self::field("Name", details.name().unwrap_or("")));
        block.push_str(&Self::field(
            "Native Name",
            details.native().unwrap_or(""),
        ));
        block.push_str(&Self::field("Phone Code", &phone_code));
        block.push_str(&Self::field(
            "Continent",
            details.continent().unwrap_or(""),
        ));
        block.push_str(&Self::field(
            "Capital",
            details.capital().unwrap_or(""),
        ));
        block.push_str(&Self::field("Currency", &details.currencies().join(", ")));
        block.push_str(&Self::field("Languages", &details.languages().join(", ")));
        block.push_str(&Self::field("Flag", details.flag().unwrap_or("")));
        block
    }

    fn field(label: &str, value: &str) -> String {
        format!("  {} {}\n", format!("{}:", label).cyan(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &LookupResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &LookupResult) -> String {
        Self::format_json(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane_doe() -> LookupResult {
        serde_json::from_value(json!({
            "name": "Jane Doe",
            "alternateName": null,
            "addresses": [
                {"city": "Mumbai", "countryCode": "IN", "timeZone": "Asia/Kolkata"}
            ],
            "email": null,
            "countryDetails": {
                "name": "India",
                "native": "भारत",
                "phone": [91],
                "continent": "AS",
                "capital": "New Delhi",
                "currency": ["INR"],
                "languages": ["hi", "en"],
                "flag": "🇮🇳"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_full_output_sections() {
        let output = ConsoleFormatter::format(&jane_doe());

        assert!(output.contains("Personal Information"));
        assert!(output.contains("Jane Doe"));
        assert!(output.contains("N/A"));
        assert!(output.contains("Unknown"));
        assert!(output.contains("Mumbai, IN (Asia/Kolkata)"));
        assert!(output.contains("+91"));
        assert!(output.contains("New Delhi"));
        assert!(output.contains("hi, en"));
        assert!(output.contains("🇮🇳"));
    }

    #[test]
    fn test_present_optional_fields_replace_fallbacks() {
        let mut result = jane_doe();
        result.alternate_name = Some("JD".to_string());
        result.email = Some("jane@example.com".to_string());

        let output = ConsoleFormatter::format(&result);
        assert!(output.contains("JD"));
        assert!(output.contains("jane@example.com"));
        assert!(!output.contains("N/A"));
    }

    #[test]
    fn test_missing_country_details() {
        let output = ConsoleFormatter::format(&LookupResult::default());
        assert!(output.contains("Country Details"));
        assert!(output.contains("Unknown"));
        assert!(!output.contains("Phone Code"));
    }

    #[test]
    fn test_address_line_with_missing_parts() {
        let mut fields = serde_json::Map::new();
        fields.insert("city".to_string(), json!("Pune"));
        let address = Address::from(fields);
        assert_eq!(ConsoleFormatter::address_line(&address), "Pune,  ()");
    }

    #[test]
    fn test_json_output_is_the_wire_form() {
        let output = ConsoleFormatter::format_json(&jane_doe());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["countryDetails"]["capital"], json!("New Delhi"));
        assert!(value["email"].is_null());
    }

    #[test]
    fn test_error_and_validation_messages() {
        assert!(ConsoleFormatter::format_error("An error occurred").contains("An error occurred"));
        assert!(
            ConsoleFormatter::format_validation("Please make sure the number is 10 digits long")
                .contains("10 digits")
        );
    }
}
