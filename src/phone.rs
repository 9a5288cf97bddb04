//! Phone number masking
//!
//! Turns whatever the user typed into the display mask `(DD) DDDDD-DDDD`.
//! The mask is purely positional: no country codes, no locale rules.

/// Maximum number of digits kept (area code + 9-digit mobile number)
pub const MAX_DIGITS: usize = 11;

/// Minimum number of digits for a number to be accepted on submit
pub const MIN_DIGITS: usize = 10;

/// Extract the ASCII digits of `input`, in order
pub fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format raw input as a masked phone number
///
/// | digits | output            |
/// |--------|-------------------|
/// | 0-2    | `DD`              |
/// | 3-6    | `(DD) DDDD`       |
/// | 7-10   | `(DD) DDDD-DDDD`  |
/// | 11+    | `(DD) DDDDD-DDDD` |
///
/// Digits past the eleventh are dropped.
pub fn format(input: &str) -> String {
    let mut numbers = digits(input);
    numbers.truncate(MAX_DIGITS);

    // Only ASCII digits remain, so byte slicing is safe
    match numbers.len() {
        0..=2 => numbers,
        3..=6 => format!("({}) {}", &numbers[..2], &numbers[2..]),
        7..=10 => format!("({}) {}-{}", &numbers[..2], &numbers[2..6], &numbers[6..]),
        _ => format!("({}) {}-{}", &numbers[..2], &numbers[2..7], &numbers[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_mobile_number() {
        assert_eq!(format("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_digit_count_boundaries() {
        assert_eq!(format(""), "");
        assert_eq!(format("1"), "1");
        assert_eq!(format("11"), "11");
        assert_eq!(format("119"), "(11) 9");
        assert_eq!(format("119876"), "(11) 9876");
        assert_eq!(format("1198765"), "(11) 9876-5");
        assert_eq!(format("1198765432"), "(11) 9876-5432");
        assert_eq!(format("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_extra_digits_truncated() {
        assert_eq!(format("119876543210000"), "(11) 98765-4321");
    }

    #[test]
    fn test_non_digits_stripped() {
        assert_eq!(format("+55 (11) 9a8b7c"), "(55) 1198-7");
        assert_eq!(format("abc"), "");
        // Non-ASCII digits are not phone digits
        assert_eq!(format("١٢٣"), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "1", "119", "119876", "1198765", "1198765432", "11987654321", "9999999999999"] {
            let once = format(input);
            assert_eq!(format(&once), once, "input {:?}", input);
        }
    }

    #[test]
    fn test_output_keeps_digits_in_order() {
        let inputs = ["(21) 3456-7890", "21 34567 8901 23", "x2y1z", "0-0-0-0"];
        for input in inputs {
            let mut expected = digits(input);
            expected.truncate(MAX_DIGITS);
            assert_eq!(digits(&format(input)), expected);
        }
    }

    #[test]
    fn test_backspace_over_punctuation() {
        // Deleting the trailing digit of a complete number drops back to the 10-digit mask
        let shown = format("11987654321");
        let edited = &shown[..shown.len() - 1];
        assert_eq!(format(edited), "(11) 9876-5432");
    }
}
