//! The named bit-flag vocabulary and flag-building helpers.
//!
//! Flags are boolean toggles OR'd into a single bit set on a rule. Which
//! flags a given kind honors is the engine's business; rules carry whatever
//! the caller set without compatibility checks.

use bitflags::bitflags;

bitflags! {
    /// Boolean toggles modifying how an engine applies a filter kind.
    ///
    /// Engines receive the whole set and honor the bits they understand.
    /// The serde representation is the human-readable flag-name form
    /// provided by `bitflags` (e.g. `"IPV4 | IPV6"`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FilterFlags: u32 {
        /// Validation failure yields null instead of the failure sentinel.
        const NULL_ON_FAILURE = 1 << 0;
        /// Domain validation requires hostname shape.
        const HOSTNAME = 1 << 1;
        /// E-mail validation accepts unicode local parts.
        const EMAIL_UNICODE = 1 << 2;
        /// Numeric parsing accepts thousand separators.
        const ALLOW_THOUSAND = 1 << 3;
        /// Integer parsing accepts octal notation.
        const ALLOW_OCTAL = 1 << 4;
        /// Integer parsing accepts hexadecimal notation.
        const ALLOW_HEX = 1 << 5;
        /// IP validation accepts IPv4 addresses.
        const IPV4 = 1 << 6;
        /// IP validation accepts IPv6 addresses.
        const IPV6 = 1 << 7;
        /// IP validation rejects private ranges.
        const NO_PRIV_RANGE = 1 << 8;
        /// IP validation rejects reserved ranges.
        const NO_RES_RANGE = 1 << 9;
        /// Strip characters below ASCII 32.
        const STRIP_LOW = 1 << 10;
        /// Strip characters above ASCII 127.
        const STRIP_HIGH = 1 << 11;
        /// Strip backticks.
        const STRIP_BACKTICK = 1 << 12;
        /// Encode characters below ASCII 32.
        const ENCODE_LOW = 1 << 13;
        /// Encode characters above ASCII 127.
        const ENCODE_HIGH = 1 << 14;
        /// Encode ampersands.
        const ENCODE_AMP = 1 << 15;
        /// Leave single and double quotes unencoded.
        const NO_ENCODE_QUOTES = 1 << 16;
        /// Number sanitization keeps fraction separators.
        const ALLOW_FRACTION = 1 << 17;
        /// Number sanitization keeps scientific notation.
        const ALLOW_SCIENTIFIC = 1 << 18;
    }
}

// ============================================================================
// FLAG-BUILDING HELPERS
// ============================================================================

/// Returns `flags | flag` when `condition` holds, `flags` unchanged otherwise.
#[must_use]
pub fn add_flag_if(flags: FilterFlags, condition: bool, flag: FilterFlags) -> FilterFlags {
    if condition { flags | flag } else { flags }
}

/// Folds a set of `(flag, condition)` pairs through [`add_flag_if`].
///
/// Entries carrying bits outside the defined vocabulary are skipped
/// silently; a malformed entry is never an error.
#[must_use]
pub fn add_flags_if(flags: FilterFlags, conditions: &[(FilterFlags, bool)]) -> FilterFlags {
    conditions
        .iter()
        .filter(|(flag, _)| FilterFlags::all().contains(*flag))
        .fold(flags, |acc, (flag, condition)| {
            add_flag_if(acc, *condition, *flag)
        })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(FilterFlags::default(), FilterFlags::empty());
        assert!(FilterFlags::default().is_empty());
    }

    #[test]
    fn test_add_flag_if() {
        let flags = FilterFlags::empty();
        assert_eq!(
            add_flag_if(flags, true, FilterFlags::IPV4),
            FilterFlags::IPV4
        );
        assert_eq!(add_flag_if(flags, false, FilterFlags::IPV4), flags);

        // Adding on top of existing bits keeps them.
        let flags = FilterFlags::IPV6;
        assert_eq!(
            add_flag_if(flags, true, FilterFlags::IPV4),
            FilterFlags::IPV4 | FilterFlags::IPV6
        );
    }

    #[test]
    fn test_add_flags_if() {
        let flags = add_flags_if(
            FilterFlags::empty(),
            &[
                (FilterFlags::STRIP_LOW, true),
                (FilterFlags::STRIP_HIGH, false),
                (FilterFlags::ENCODE_AMP, true),
            ],
        );
        assert_eq!(flags, FilterFlags::STRIP_LOW | FilterFlags::ENCODE_AMP);
    }

    #[test]
    fn test_add_flags_if_skips_unknown_bits() {
        let bogus = FilterFlags::from_bits_retain(1 << 30);
        let flags = add_flags_if(
            FilterFlags::empty(),
            &[(bogus, true), (FilterFlags::HOSTNAME, true)],
        );
        assert_eq!(flags, FilterFlags::HOSTNAME);
    }
}
