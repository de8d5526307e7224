//! Price descriptor parsing and budget compatibility.
//!
//! Price descriptors are human-entered strings ("$500 - $1000", "€3000",
//! "Negotiable"). These functions turn them into numeric ranges and decide
//! whether an event budget and an artist price can meet. They are pure
//! domain logic — no I/O, just text scanning and interval arithmetic.

use serde::{Deserialize, Serialize};

/// A closed numeric price interval (Value Object)
///
/// Invariant: `min <= max`, enforced by [`parse_price_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// Closed-interval overlap: touching endpoints count as compatible.
    pub fn overlaps(&self, other: &PriceRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Check for the "negotiable" sentinel (trimmed, case-insensitive).
///
/// Negotiable descriptors carry no numeric constraint and are compatible
/// with any counter-range, including another negotiable.
pub fn is_negotiable(descriptor: &str) -> bool {
    descriptor.trim().eq_ignore_ascii_case("negotiable")
}

/// Parse a human-entered range string into a numeric `[min, max]` pair.
///
/// Extracts every decimal integer substring. A single number yields the
/// degenerate range `[n, n]`; with several numbers the range spans the
/// first and last, reordered so `min <= max`. Strings with no digits
/// (including the "negotiable" sentinel) yield `None`.
///
/// # Examples
///
/// ```
/// use gigmatch_domain::artist::price::{PriceRange, parse_price_range};
///
/// assert_eq!(parse_price_range("$500 - $1000"), Some(PriceRange { min: 500, max: 1000 }));
/// assert_eq!(parse_price_range("€3000"), Some(PriceRange { min: 3000, max: 3000 }));
/// assert_eq!(parse_price_range("Negotiable"), None);
/// assert_eq!(parse_price_range("call us"), None);
/// ```
pub fn parse_price_range(descriptor: &str) -> Option<PriceRange> {
    let mut numbers: Vec<u64> = Vec::new();
    let mut current = String::new();

    for c in descriptor.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if !current.is_empty() {
            if let Ok(n) = current.parse::<u64>() {
                numbers.push(n);
            }
            current.clear();
        }
    }
    if !current.is_empty()
        && let Ok(n) = current.parse::<u64>()
    {
        numbers.push(n);
    }

    let first = *numbers.first()?;
    let last = *numbers.last()?;
    Some(PriceRange {
        min: first.min(last),
        max: first.max(last),
    })
}

/// Decide whether an event budget and an artist price descriptor can meet.
///
/// - Either side negotiable → compatible.
/// - Both sides parse to numeric ranges → compatible iff the closed
///   intervals overlap.
/// - A side with no parseable numbers that is not the negotiable sentinel
///   is ambiguous input and fails the check.
///
/// Symmetric: `budget_compatible(a, b) == budget_compatible(b, a)`.
pub fn budget_compatible(event_budget: &str, artist_price: &str) -> bool {
    if is_negotiable(event_budget) || is_negotiable(artist_price) {
        return true;
    }

    match (parse_price_range(event_budget), parse_price_range(artist_price)) {
        (Some(event), Some(artist)) => event.overlaps(&artist),
        // Ambiguous input is non-matching, not permissive
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dollar_range() {
        assert_eq!(
            parse_price_range("$500 - $1000"),
            Some(PriceRange { min: 500, max: 1000 })
        );
    }

    #[test]
    fn parses_single_number_as_degenerate_range() {
        assert_eq!(
            parse_price_range("€3000"),
            Some(PriceRange { min: 3000, max: 3000 })
        );
    }

    #[test]
    fn negotiable_parses_to_none() {
        assert_eq!(parse_price_range("Negotiable"), None);
        assert_eq!(parse_price_range("negotiable"), None);
        assert_eq!(parse_price_range("  NEGOTIABLE  "), None);
    }

    #[test]
    fn digit_free_strings_parse_to_none() {
        for s in ["", "call us", "depends on the gig", "$$$"] {
            assert_eq!(parse_price_range(s), None, "input: {:?}", s);
        }
    }

    #[test]
    fn inverted_input_is_reordered() {
        // min <= max must hold after parsing, whatever the entry order
        assert_eq!(
            parse_price_range("between 1000 and 500"),
            Some(PriceRange { min: 500, max: 1000 })
        );
    }

    #[test]
    fn multi_number_range_spans_first_and_last() {
        assert_eq!(
            parse_price_range("$500 - $750 - $2000"),
            Some(PriceRange { min: 500, max: 2000 })
        );
    }

    #[test]
    fn negotiable_is_always_compatible() {
        assert!(budget_compatible("Negotiable", "$10000"));
        assert!(budget_compatible("$100", "negotiable"));
        assert!(budget_compatible("negotiable", "NEGOTIABLE"));
    }

    #[test]
    fn overlapping_ranges_are_compatible() {
        assert!(budget_compatible("$500 - $1000", "$700"));
        assert!(budget_compatible("$500 - $1000", "$900 - $2000"));
        // Touching endpoints count
        assert!(budget_compatible("$500 - $1000", "$1000 - $1500"));
    }

    #[test]
    fn disjoint_ranges_are_incompatible() {
        assert!(!budget_compatible("$500 - $1000", "$1500 - $2000"));
        assert!(!budget_compatible("$100", "$200"));
    }

    #[test]
    fn ambiguous_side_fails_the_check() {
        assert!(!budget_compatible("call us", "$500"));
        assert!(!budget_compatible("$500", "depends"));
        assert!(!budget_compatible("whatever", "no idea"));
    }

    #[test]
    fn compatibility_is_symmetric() {
        let cases = [
            ("$500 - $1000", "$700"),
            ("$500 - $1000", "$1500 - $2000"),
            ("negotiable", "$700"),
            ("call us", "$500"),
            ("", "negotiable"),
        ];
        for (a, b) in cases {
            assert_eq!(
                budget_compatible(a, b),
                budget_compatible(b, a),
                "asymmetric for ({:?}, {:?})",
                a,
                b
            );
        }
    }
}
