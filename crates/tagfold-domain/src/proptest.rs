//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - payload defaulting and preservation at construction
//! - handler-set merging
//! - verification failures naming exactly the offending cases
//! - the optional-value combinators

use crate::cases::Handlers;
use crate::engine::fold;
use crate::error::FoldError;
use crate::maybe::{contains, just, map, nothing, unless};
use crate::registry::TypeRegistry;
use crate::union::{CheckedUnion, Union};
use crate::verify::{fold_checked, fold_strict};
use crate::test_support::data_handlers;
use proptest::prelude::*;
use serde_json::{json, Value};
use tagfold_types::{CaseId, Variant};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for a case identifier (capitalized word).
fn arb_case_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{0,7}").unwrap()
}

/// Strategy for a non-empty list of distinct case identifiers, in random order.
fn arb_case_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(arb_case_id(), 1..6)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Strategy for non-null payloads, falsy ones included.
fn arb_payload() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        Just(json!([])),
        Just(json!({})),
    ];
    leaf.prop_recursive(2, 8, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..3)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for an optional value: either `N` or `Y`, with an integer payload.
fn arb_maybe() -> impl Strategy<Value = Variant> {
    (any::<bool>(), any::<i32>()).prop_map(|(present, n)| {
        if present {
            just(Some(json!(n)))
        } else {
            nothing(Some(json!(n)))
        }
    })
}

fn names(cases: &[CaseId]) -> Vec<String> {
    cases.iter().map(|c| c.to_string()).collect()
}

// ============================================================================
// Construction
// ============================================================================

proptest! {
    /// A non-null payload comes back exactly as given.
    #[test]
    fn constructed_payload_is_identity(cases in arb_case_ids(), payload in arb_payload(), pick in any::<prop::sample::Index>()) {
        let union = Union::define(cases.iter().map(String::as_str));
        let case = pick.get(&cases);
        let variant = union.make(case, Some(payload.clone())).expect("declared case");

        prop_assert_eq!(variant.id.as_str(), case.as_str());
        prop_assert_eq!(variant.payload, payload);
    }

    /// Absent and null payloads both become `{}`.
    #[test]
    fn empty_payload_is_empty_object(cases in arb_case_ids(), pick in any::<prop::sample::Index>()) {
        let union = Union::define(cases.iter().map(String::as_str));
        let ctor = union.get(pick.get(&cases).as_str()).expect("declared case");

        prop_assert_eq!(ctor.empty().payload, json!({}));
        prop_assert_eq!(ctor.call(Some(Value::Null)).payload, json!({}));
    }
}

// ============================================================================
// Fold engine
// ============================================================================

proptest! {
    /// For a repeated key, only the rightmost handler is ever invoked.
    #[test]
    fn rightmost_handler_wins(case in arb_case_id(), groups in 2usize..5) {
        let sets: Vec<Handlers<'_, usize>> = (0..groups)
            .map(|i| Handlers::new().on(case.as_str(), move |_| i))
            .collect();
        let f = fold(sets);
        let value = Variant::new(case.as_str(), None);

        prop_assert_eq!(f.apply(&value), Some(groups - 1));
    }

    /// Without a wildcard, absent values and unknown tags both yield nothing.
    #[test]
    fn unmatched_without_wildcard_is_absent(cases in arb_case_ids()) {
        let keys: Vec<&str> = cases.iter().map(String::as_str).collect();
        let f = fold([data_handlers(&keys)]);

        prop_assert_eq!(f.apply_opt(None::<&Value>), None);
        prop_assert_eq!(f.apply(&Value::Null), None);
        prop_assert_eq!(f.apply(&Variant::new("not-a-case", None)), None);
    }
}

// ============================================================================
// Verification layer
// ============================================================================

proptest! {
    /// A strict fold over a strict subset lists exactly the missing cases, in declaration order.
    #[test]
    fn strict_fold_reports_exactly_the_missing_cases(
        cases in arb_case_ids(),
        mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let registry = TypeRegistry::new();
        let union = CheckedUnion::define(&registry, "T", cases.iter().map(String::as_str));

        let handled: Vec<&str> = cases
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(c, _)| c.as_str())
            .collect();
        let missing: Vec<String> = cases
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| !**keep)
            .map(|(c, _)| c.clone())
            .collect();

        let value = union.make(&cases[0], None).expect("declared case");
        let result = fold_strict(&registry, [data_handlers(&handled)]).apply(&value);

        if missing.is_empty() {
            prop_assert_eq!(result, Ok(Some(cases[0].clone())));
        } else {
            match result {
                Err(FoldError::IncompleteHandler { type_name, unhandled }) => {
                    prop_assert_eq!(type_name.as_str(), "T");
                    prop_assert_eq!(names(&unhandled), missing);
                }
                other => prop_assert!(false, "expected IncompleteHandler, got {:?}", other),
            }
        }
    }

    /// A single foreign key is named, together with the full declared list.
    #[test]
    fn checked_fold_names_the_foreign_key(cases in arb_case_ids()) {
        let registry = TypeRegistry::new();
        let union = CheckedUnion::define(&registry, "T", cases.iter().map(String::as_str));
        let mut keys: Vec<&str> = cases.iter().map(String::as_str).collect();
        keys.push("zzz");

        let value = union.make(&cases[0], None).expect("declared case");
        let err = fold_checked(&registry, [data_handlers(&keys)])
            .apply(&value)
            .expect_err("foreign key");

        prop_assert_eq!(
            err.to_string(),
            format!("Invalid handler zzz for T {}", cases.join(","))
        );
    }
}

// ============================================================================
// Optional-value combinators
// ============================================================================

proptest! {
    /// Exactly one of `map` and `unless` changes the payload, decided by the tag.
    #[test]
    fn map_and_unless_are_complementary(mb in arb_maybe()) {
        let bump = |p: &Value| json!(p.as_i64().unwrap_or_default() + 1);
        let mapped = map(&mb, bump).expect("N or Y");
        let unlessed = unless(&mb, bump).expect("N or Y");

        let mapped_changed = mapped != mb;
        let unless_changed = unlessed != mb;
        prop_assert!(mapped_changed != unless_changed);
        prop_assert_eq!(mapped_changed, mb.id == "Y");
        prop_assert_eq!(&mapped.id, &mb.id);
        prop_assert_eq!(&unlessed.id, &mb.id);
    }

    /// `contains` ignores the target payload and returns the first match's payload.
    #[test]
    fn contains_compares_tags_only(
        payloads in prop::collection::vec(arb_payload(), 1..5),
        target_payload in arb_payload(),
    ) {
        let route = Union::define(["Home", "Profile"]);
        let mut list: Vec<Variant> = vec![route.make("Home", None).unwrap()];
        list.extend(payloads.iter().map(|p| route.make("Profile", Some(p.clone())).unwrap()));
        let target = route.make("Profile", Some(target_payload)).unwrap();

        prop_assert_eq!(
            contains(&target, Some(list.as_slice())),
            just(Some(payloads[0].clone()))
        );
    }
}
