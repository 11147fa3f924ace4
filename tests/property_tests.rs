//! Property-based tests for the flag algebra and the definition contract.

use proptest::prelude::*;

use filterset::prelude::*;

const ALL_KINDS: [FilterKind; 19] = [
    FilterKind::ValidateBool,
    FilterKind::ValidateDomain,
    FilterKind::ValidateEmail,
    FilterKind::ValidateFloat,
    FilterKind::ValidateInt,
    FilterKind::ValidateIp,
    FilterKind::ValidateMac,
    FilterKind::ValidateRegexp,
    FilterKind::SanitizeAddSlashes,
    FilterKind::SanitizeEmail,
    FilterKind::SanitizeEncoded,
    FilterKind::SanitizeNumberFloat,
    FilterKind::SanitizeFullSpecialChars,
    FilterKind::SanitizeNumberInt,
    FilterKind::SanitizeSpecialChars,
    FilterKind::SanitizeString,
    FilterKind::SanitizeUnsafeRaw,
    FilterKind::SanitizeUrl,
    FilterKind::Callback,
];

fn any_flags() -> impl Strategy<Value = FilterFlags> {
    (0u32..(1 << 19)).prop_map(FilterFlags::from_bits_truncate)
}

fn any_flag() -> impl Strategy<Value = FilterFlags> {
    (0u32..19).prop_map(|i| FilterFlags::from_bits_truncate(1 << i))
}

fn any_kind() -> impl Strategy<Value = FilterKind> {
    (0usize..ALL_KINDS.len()).prop_map(|i| ALL_KINDS[i])
}

// ============================================================================
// FLAG ALGEBRA: remove is the true inverse of add
// ============================================================================

proptest! {
    #[test]
    fn remove_flag_inverts_add_flag(initial in any_flags(), flag in any_flag()) {
        let mut rule = Rule::new(FilterKind::SanitizeString);
        rule.add_flag(initial);

        rule.add_flag(flag).remove_flag(flag);
        prop_assert!(!rule.has_flag(flag));
    }

    #[test]
    fn remove_flag_leaves_unrelated_bits_intact(initial in any_flags(), flag in any_flag()) {
        let mut rule = Rule::new(FilterKind::SanitizeString);
        rule.add_flag(initial);

        rule.remove_flag(flag);
        prop_assert_eq!(rule.flags(), initial & !flag);
    }

    #[test]
    fn remove_unset_flag_is_noop(initial in any_flags(), flag in any_flag()) {
        prop_assume!(!initial.contains(flag));

        let mut rule = Rule::new(FilterKind::SanitizeString);
        rule.add_flag(initial);

        rule.remove_flag(flag);
        prop_assert_eq!(rule.flags(), initial);
    }
}

// ============================================================================
// FLAG-BUILDING HELPERS
// ============================================================================

proptest! {
    #[test]
    fn add_flag_if_false_is_identity(flags in any_flags(), flag in any_flag()) {
        prop_assert_eq!(add_flag_if(flags, false, flag), flags);
    }

    #[test]
    fn add_flag_if_true_is_union(flags in any_flags(), flag in any_flag()) {
        prop_assert_eq!(add_flag_if(flags, true, flag), flags | flag);
    }

    #[test]
    fn add_flags_if_agrees_with_folded_add_flag_if(
        flags in any_flags(),
        a in any_flag(),
        b in any_flag(),
        cond_a in any::<bool>(),
        cond_b in any::<bool>(),
    ) {
        let folded = add_flag_if(add_flag_if(flags, cond_a, a), cond_b, b);
        let batched = add_flags_if(flags, &[(a, cond_a), (b, cond_b)]);
        prop_assert_eq!(batched, folded);
    }
}

// ============================================================================
// DEFINITION CONTRACT
// ============================================================================

proptest! {
    #[test]
    fn definition_filter_always_equals_kind(kind in any_kind(), flags in any_flags()) {
        let mut rule = Rule::new(kind);
        rule.add_flag(flags);
        prop_assert_eq!(rule.to_definition().filter, kind);
    }

    #[test]
    fn definition_flags_key_present_iff_nonzero(kind in any_kind(), flags in any_flags()) {
        let mut rule = Rule::new(kind);
        rule.add_flag(flags);

        let definition = rule.to_definition();
        if flags.is_empty() {
            prop_assert_eq!(definition.flags, None);
        } else {
            prop_assert_eq!(definition.flags, Some(flags));
        }
    }

    #[test]
    fn definition_options_key_present_iff_options_nonempty(
        kind in any_kind(),
        names in proptest::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let mut rule = Rule::new(kind);
        for name in &names {
            rule.set_option(name.clone(), serde_json::Value::Bool(true));
        }

        let definition = rule.to_definition();
        if rule.options().is_empty() {
            prop_assert!(definition.options.is_none());
        } else {
            prop_assert_eq!(
                definition.options_map().map(indexmap::IndexMap::len),
                Some(rule.options().len())
            );
        }
    }

    #[test]
    fn callback_always_wins_the_options_slot(
        kind in any_kind(),
        names in proptest::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let mut rule = Rule::new(kind);
        for name in &names {
            rule.set_option(name.clone(), serde_json::Value::Bool(true));
        }
        rule.set_callback(Some(Callback::new(|value| value.clone())));

        let definition = rule.to_definition();
        prop_assert!(definition.callback().is_some());
        prop_assert!(definition.options_map().is_none());
    }
}
