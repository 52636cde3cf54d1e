use std::ops::Range;

use super::money_codec::normalize_separators;
use crate::constants::{ALTERNATE_DECIMAL_SEPARATOR, DECIMAL_SEPARATOR};

/// Result of running one keystroke through [`DecimalInputFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit is admitted and the host field applies it itself.
    Accepted,
    /// The edit is refused; the field text must not change.
    Rejected,
    /// The filter already produced the field text (a `,` was rewritten as
    /// `.`). The host replaces its text with this value and must not apply
    /// the requested edit on top.
    ManuallyApplied(String),
}

impl EditOutcome {
    /// True only for [`EditOutcome::Accepted`], the host-applies path.
    pub fn is_auto_applied(&self) -> bool {
        matches!(self, EditOutcome::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, EditOutcome::Rejected)
    }
}

/// Keystroke admission policy for decimal amount fields.
///
/// Ranges are expressed in characters of the current text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalInputFilter;

impl DecimalInputFilter {
    pub fn new() -> Self {
        Self
    }

    /// Decides whether replacing `range` of `current` with `replacement` is
    /// admissible.
    ///
    /// Deletions are always accepted. Otherwise the replacement may only hold
    /// ASCII digits, `.` and `,`, the range must lie inside `current`, and the
    /// text after the edit may hold at most one decimal separator.
    pub fn evaluate(&self, current: &str, range: Range<usize>, replacement: &str) -> EditOutcome {
        if replacement.is_empty() {
            return EditOutcome::Accepted;
        }

        if !replacement.chars().all(Self::is_allowed) {
            return EditOutcome::Rejected;
        }

        let normalized = normalize_separators(replacement);
        let Some(updated) = splice_chars(current, range, &normalized) else {
            return EditOutcome::Rejected;
        };

        let separators = normalize_separators(&updated)
            .chars()
            .filter(|c| *c == DECIMAL_SEPARATOR)
            .count();
        if separators > 1 {
            return EditOutcome::Rejected;
        }

        if replacement.contains(ALTERNATE_DECIMAL_SEPARATOR) {
            return EditOutcome::ManuallyApplied(updated);
        }

        EditOutcome::Accepted
    }

    /// Runs [`Self::evaluate`] against `field` and updates it the way a text
    /// field host would: splice on `Accepted`, overwrite on
    /// `ManuallyApplied`, leave untouched on `Rejected`.
    pub fn apply(&self, field: &mut String, range: Range<usize>, replacement: &str) -> EditOutcome {
        let outcome = self.evaluate(field, range.clone(), replacement);
        match &outcome {
            EditOutcome::Accepted => {
                // only a deletion can be accepted with a range outside the text
                if let Some(updated) = splice_chars(field, range, replacement) {
                    *field = updated;
                }
            }
            EditOutcome::ManuallyApplied(text) => {
                *field = text.clone();
            }
            EditOutcome::Rejected => {}
        }
        outcome
    }

    fn is_allowed(c: char) -> bool {
        c.is_ascii_digit() || c == DECIMAL_SEPARATOR || c == ALTERNATE_DECIMAL_SEPARATOR
    }
}

/// Replaces the characters in `range` with `replacement`; `None` when the
/// range is inverted or runs past the end of `text`.
fn splice_chars(text: &str, range: Range<usize>, replacement: &str) -> Option<String> {
    let len = text.chars().count();
    if range.start > range.end || range.end > len {
        return None;
    }

    let mut spliced = String::with_capacity(text.len() + replacement.len());
    spliced.extend(text.chars().take(range.start));
    spliced.push_str(replacement);
    spliced.extend(text.chars().skip(range.end));
    Some(spliced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end(text: &str) -> Range<usize> {
        let len = text.chars().count();
        len..len
    }

    #[test]
    fn test_second_point_rejected() {
        let filter = DecimalInputFilter::new();
        assert_eq!(filter.evaluate("12.5", end("12.5"), "."), EditOutcome::Rejected);
    }

    #[test]
    fn test_second_separator_counted_after_normalization() {
        let filter = DecimalInputFilter::new();
        assert_eq!(filter.evaluate("12.5", end("12.5"), ","), EditOutcome::Rejected);
        assert_eq!(filter.evaluate("1", end("1"), ",,"), EditOutcome::Rejected);
    }

    #[test]
    fn test_comma_into_empty_field_is_manually_applied() {
        let filter = DecimalInputFilter::new();
        let mut field = String::new();

        let outcome = filter.apply(&mut field, 0..0, ",");

        assert_eq!(outcome, EditOutcome::ManuallyApplied(".".to_string()));
        assert!(!outcome.is_auto_applied());
        assert_eq!(field, ".");
    }

    #[test]
    fn test_comma_in_middle_is_normalized() {
        let filter = DecimalInputFilter::new();
        let mut field = "125".to_string();

        let outcome = filter.apply(&mut field, 2..2, ",");

        assert_eq!(outcome, EditOutcome::ManuallyApplied("12.5".to_string()));
        assert_eq!(field, "12.5");
    }

    #[test]
    fn test_digits_are_auto_applied() {
        let filter = DecimalInputFilter::new();
        let mut field = "12".to_string();

        let outcome = filter.apply(&mut field, 2..2, "3");

        assert!(outcome.is_auto_applied());
        assert_eq!(field, "123");
    }

    #[test]
    fn test_replacing_the_only_point_with_a_point_is_fine() {
        let filter = DecimalInputFilter::new();
        assert_eq!(filter.evaluate("12.5", 2..3, "."), EditOutcome::Accepted);
    }

    #[test]
    fn test_disallowed_characters_rejected() {
        let filter = DecimalInputFilter::new();
        let mut field = "12".to_string();

        for replacement in ["a", "-", " ", "1a", "\u{0663}"] {
            let outcome = filter.apply(&mut field, 2..2, replacement);
            assert!(outcome.is_rejected(), "{:?} should be rejected", replacement);
        }
        assert_eq!(field, "12");
    }

    #[test]
    fn test_deletion_always_admitted() {
        let filter = DecimalInputFilter::new();
        let mut field = "12.5".to_string();

        assert!(filter.apply(&mut field, 3..4, "").is_auto_applied());
        assert_eq!(field, "12.");

        // even with a range the field cannot satisfy
        assert!(filter.apply(&mut field, 10..12, "").is_auto_applied());
        assert_eq!(field, "12.");
    }

    #[test]
    fn test_out_of_bounds_insert_rejected() {
        let filter = DecimalInputFilter::new();
        assert_eq!(filter.evaluate("12", 5..5, "3"), EditOutcome::Rejected);
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 2..1;
        assert_eq!(filter.evaluate("12", inverted, "3"), EditOutcome::Rejected);
    }

    #[test]
    fn test_pasted_value_checked_as_a_whole() {
        let filter = DecimalInputFilter::new();
        assert_eq!(filter.evaluate("", 0..0, "12.50"), EditOutcome::Accepted);
        assert_eq!(filter.evaluate("", 0..0, "1.2.3"), EditOutcome::Rejected);
        assert_eq!(
            filter.evaluate("", 0..0, "184,065.59"),
            EditOutcome::Rejected
        );
    }
}
