//! Macros for declaring rule sets with minimal boilerplate.

/// Builds a [`RuleSetSpec`](crate::filter_factory::RuleSetSpec) map from
/// `"field" => rule` entries.
///
/// Entries accept anything convertible into a
/// [`RuleEntry`](crate::filter_factory::RuleEntry), normally a
/// [`Rule`](crate::rule::Rule); a `serde_json::Value` is also accepted so
/// misdeclared sets stay representable in tests. Insertion order is
/// preserved.
///
/// # Examples
///
/// ```
/// use filterset::factory::RuleFactory;
/// use filterset::rule_set;
///
/// let rules = RuleFactory::new();
///
/// let spec = rule_set! {
///     "age" => rules.valid().integer(Some(0), Some(130), false, false, None),
///     "website" => rules.clean().url(),
/// };
/// ```
#[macro_export]
macro_rules! rule_set {
    () => {
        $crate::filter_factory::RuleSetSpec::Map($crate::__private::IndexMap::new())
    };
    ($($field:expr => $rule:expr),+ $(,)?) => {{
        let mut entries = $crate::__private::IndexMap::new();
        $(
            entries.insert(
                ::std::string::String::from($field),
                $crate::filter_factory::RuleEntry::from($rule),
            );
        )+
        $crate::filter_factory::RuleSetSpec::Map(entries)
    }};
}
