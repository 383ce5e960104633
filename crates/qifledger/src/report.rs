//! Text and JSON rendering of a parse result.

use qifledger_core::{format_account, FormatConfig, NameSet};
use qifledger_parser::ParseResult;
use std::io::Write;

/// Write every account with its register, then the category, payee and class
/// listings.
pub fn write_text_report<W: Write>(
    result: &ParseResult,
    config: &FormatConfig,
    writer: &mut W,
) -> std::io::Result<()> {
    for account in &result.accounts {
        write!(writer, "{}", format_account(account, config))?;
        writeln!(writer)?;
    }

    if !result.categories.is_empty() {
        writeln!(writer, "Categories:")?;
        for category in result.categories.iter() {
            let origin = if category.explicit { "" } else { " (referenced)" };
            let kind = if category.income { " [income]" } else { "" };
            writeln!(writer, "{}{}{kind}{origin}", config.indent, category.name)?;
        }
        writeln!(writer)?;
    }

    write_names(writer, "Payees", &result.payees, config)?;
    write_names(writer, "Classes", &result.classes, config)?;
    Ok(())
}

fn write_names<W: Write>(
    writer: &mut W,
    title: &str,
    names: &NameSet,
    config: &FormatConfig,
) -> std::io::Result<()> {
    if names.is_empty() {
        return Ok(());
    }
    writeln!(writer, "{title}:")?;
    for name in names.iter() {
        writeln!(writer, "{}{name}", config.indent)?;
    }
    writeln!(writer)
}

/// Render the result as pretty-printed JSON.
pub fn to_json(result: &ParseResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Print a one-line count summary.
pub fn print_summary<W: Write>(result: &ParseResult, writer: &mut W) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {}, {} {}, {} {}, {} {}, {} {}",
        result.accounts.len(),
        plural(result.accounts.len(), "account", "accounts"),
        result.transaction_count(),
        plural(result.transaction_count(), "transaction", "transactions"),
        result.categories.len(),
        plural(result.categories.len(), "category", "categories"),
        result.payees.len(),
        plural(result.payees.len(), "payee", "payees"),
        result.classes.len(),
        plural(result.classes.len(), "class", "classes"),
    )?;
    if result.truncated {
        writeln!(
            writer,
            "\x1b[33m\u{26A0}\x1b[0m input ended inside an auto-switch region"
        )?;
    }
    Ok(())
}

const fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qifledger_parser::{parse, ParserConfig};

    const SOURCE: &str = "\
!Type:Cat
NSalary
I
^
!Account
NChecking
TBank
^
!Type:Bank
D01/15/2024
T-42.00
PGrocer
LFood/Home
^
D01/31/2024
T1,500.00
PEmployer
LSalary
^
";

    fn result() -> ParseResult {
        parse(SOURCE, &ParserConfig::default()).unwrap()
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        write_text_report(&result(), &FormatConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Checking (Bank)\n"));
        assert!(text.contains("2024-01-15"));
        assert!(text.contains("Grocer (Food/Home)"));
        assert!(text.contains("-42.00 USD"));
        assert!(text.contains("Categories:\n  Salary [income]\n  Food (referenced)\n"));
        assert!(text.contains("Payees:\n  Grocer\n  Employer\n"));
        assert!(text.contains("Classes:\n  Home\n"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&result()).unwrap()).unwrap();

        assert_eq!(json["accounts"][0]["name"], "Checking");
        assert_eq!(json["accounts"][0]["transactions"].as_array().unwrap().len(), 2);
        assert_eq!(json["categories"][1]["name"], "Food");
        assert_eq!(json["categories"][1]["explicit"], false);
        assert_eq!(json["payees"], serde_json::json!(["Grocer", "Employer"]));
        assert_eq!(json["truncated"], false);
    }

    #[test]
    fn test_summary() {
        let mut out = Vec::new();
        print_summary(&result(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 account, 2 transactions, 2 categories, 2 payees, 1 class\n"
        );
    }
}
