//! Property-based tests for qifledger-core.
//!
//! These tests verify invariants hold for arbitrary inputs using proptest.
//!
//! Run with: cargo test -p qifledger-core --test `property_tests`

use proptest::prelude::*;
use qifledger_core::{Amount, Category, CategorySet, Currency, NameSet};
use rust_decimal::Decimal;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_decimal() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Food".to_string()),
        Just("Food:Groceries".to_string()),
        Just("Auto:Fuel".to_string()),
        Just("Salary".to_string()),
        Just("Utilities:Electric".to_string()),
        "[A-Za-z][A-Za-z :]{0,12}",
    ]
}

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_name(), 0..30)
}

// ============================================================================
// NameSet Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Inserting a name twice has no additional effect
    #[test]
    fn prop_name_set_idempotent(names in arb_names()) {
        let mut once = NameSet::new();
        let mut twice = NameSet::new();
        for name in &names {
            once.insert(name);
            twice.insert(name);
            twice.insert(name);
        }
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.iter().collect::<Vec<_>>(), twice.iter().collect::<Vec<_>>());
    }

    /// Set contents do not depend on insertion order
    #[test]
    fn prop_name_set_order_insensitive(names in arb_names()) {
        let forward: NameSet = names.iter().map(String::as_str).collect();
        let backward: NameSet = names.iter().rev().map(String::as_str).collect();

        prop_assert_eq!(forward.len(), backward.len());
        for name in forward.iter() {
            prop_assert!(backward.contains(name));
        }
    }

    /// Every non-blank inserted name is present exactly once
    #[test]
    fn prop_name_set_contains_every_name(names in arb_names()) {
        let set: NameSet = names.iter().map(String::as_str).collect();
        for name in &names {
            prop_assert!(set.contains(name));
            prop_assert_eq!(set.iter().filter(|n| *n == name.as_str()).count(), 1);
        }
    }
}

// ============================================================================
// CategorySet Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// After merging, the set is the union of declared and referenced names
    #[test]
    fn prop_category_merge_is_union(declared in arb_names(), referenced in arb_names()) {
        let mut set = CategorySet::new();
        for name in &declared {
            set.insert_explicit(Category::explicit(name.as_str()));
        }
        let implicit: NameSet = referenced.iter().map(String::as_str).collect();
        set.merge_implicit(&implicit);

        for name in declared.iter().chain(referenced.iter()) {
            prop_assert!(set.contains(name));
        }
        for name in &declared {
            prop_assert!(set.get(name).unwrap().explicit);
        }

        let union: NameSet = declared
            .iter()
            .chain(referenced.iter())
            .map(String::as_str)
            .collect();
        prop_assert_eq!(set.len(), union.len());
    }
}

// ============================================================================
// Amount Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Rescaling to a currency always yields its minor-unit scale
    #[test]
    fn prop_amount_in_currency_scale(n in arb_decimal()) {
        let usd = Currency::new("USD").unwrap();
        let amount = Amount::in_currency(n, &usd);
        prop_assert_eq!(amount.scale(), 2);
        prop_assert_eq!(amount.number, n);
    }

    /// Adding then negating is consistent
    #[test]
    fn prop_amount_add_neg(a in arb_decimal(), b in arb_decimal()) {
        let x = Amount::new(a, "USD");
        let y = Amount::new(b, "USD");
        let sum = &x + &y;
        prop_assert_eq!((&sum - &y).number, a);
        prop_assert_eq!((-&sum).number, -(a + b));
    }
}
