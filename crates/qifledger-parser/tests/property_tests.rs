//! Property-based tests for qifledger-parser.
//!
//! Run with: cargo test -p qifledger-parser --test `property_tests`

use proptest::prelude::*;
use qifledger_parser::{parse, ParserConfig};

// ============================================================================
// Arbitrary generators
// ============================================================================

/// A line that is never a header.
fn arb_data_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("^".to_string()),
        Just(String::new()),
        "[A-Z][A-Za-z0-9 ,./:-]{0,20}",
    ]
}

fn arb_payee() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Grocer".to_string()),
        Just("Bakery".to_string()),
        Just("Landlord".to_string()),
        "[A-Z][a-z]{2,8}",
    ]
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Food".to_string()),
        Just("Food:Groceries".to_string()),
        Just("Rent".to_string()),
        "[A-Z][a-z]{2,8}(:[A-Z][a-z]{2,8})?",
    ]
}

fn register(entries: &[(String, String)]) -> String {
    let mut source = String::from("!Type:Bank\n");
    for (i, (payee, category)) in entries.iter().enumerate() {
        source.push_str(&format!("D1/{}/2024\nT-{}.00\nP{payee}\nL{category}\n^\n", i % 28 + 1, i + 1));
    }
    source
}

// ============================================================================
// Parser Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Input without any header line yields an empty result.
    #[test]
    fn prop_header_free_input_is_empty(lines in prop::collection::vec(arb_data_line(), 0..40)) {
        let source = lines.join("\n");
        let result = parse(&source, &ParserConfig::default()).unwrap();
        prop_assert!(result.is_empty());
    }

    /// Every referenced category ends up in the category set, once.
    #[test]
    fn prop_referenced_categories_are_present(
        entries in prop::collection::vec((arb_payee(), arb_category()), 1..30)
    ) {
        let result = parse(&register(&entries), &ParserConfig::default()).unwrap();

        prop_assert_eq!(result.transaction_count(), entries.len());
        for (payee, category) in &entries {
            prop_assert!(result.categories.contains(category));
            prop_assert!(result.payees.contains(payee));
        }
        let mut names: Vec<&str> = result.categories.iter().map(|c| c.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), total);
    }

    /// Set sizes do not depend on the order transactions appear in.
    #[test]
    fn prop_set_sizes_order_insensitive(
        entries in prop::collection::vec((arb_payee(), arb_category()), 1..30)
    ) {
        let mut reversed = entries.clone();
        reversed.reverse();

        let config = ParserConfig::default();
        let forward = parse(&register(&entries), &config).unwrap();
        let backward = parse(&register(&reversed), &config).unwrap();

        prop_assert_eq!(forward.payees.len(), backward.payees.len());
        prop_assert_eq!(forward.categories.len(), backward.categories.len());
    }
}
