//! Input masks for the digit-only fields.
//!
//! The presentation layer calls [`format_masked`] on every keystroke of a
//! masked field; the validator reuses [`digits_of`] as the canonical
//! digit-stripped form for comparisons. Formatting is progressive: below
//! the first punctuation threshold the output is just the digits, and each
//! separator appears only once enough digits exist to its right.

/// Which mask to apply. `Age` has no punctuation, only a digit cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    /// `XXX.XXX.XXX-XX`, 11 digits.
    IdNumber,
    /// `XXXXX-XXX`, 8 digits.
    PostalCode,
    /// Up to 3 digits, no separators.
    Age,
}

impl MaskKind {
    fn max_digits(self) -> usize {
        match self {
            MaskKind::IdNumber => 11,
            MaskKind::PostalCode => 8,
            MaskKind::Age => 3,
        }
    }
}

/// Strip everything that is not an ASCII digit.
pub fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize raw input into the canonical display string for a masked
/// field. Pure and idempotent: feeding the output back in reproduces it.
/// Empty input degenerates to an empty string.
pub fn format_masked(raw: &str, kind: MaskKind) -> String {
    let mut digits = digits_of(raw);
    digits.truncate(kind.max_digits());

    match kind {
        MaskKind::Age => digits,
        MaskKind::PostalCode => {
            if digits.len() <= 5 {
                digits
            } else {
                format!("{}-{}", &digits[..5], &digits[5..])
            }
        }
        MaskKind::IdNumber => match digits.len() {
            0..=3 => digits,
            4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
            7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
            _ => format!(
                "{}.{}.{}-{}",
                &digits[..3],
                &digits[3..6],
                &digits[6..9],
                &digits[9..]
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_number_formats_progressively() {
        assert_eq!(format_masked("123", MaskKind::IdNumber), "123");
        assert_eq!(format_masked("1234", MaskKind::IdNumber), "123.4");
        assert_eq!(format_masked("123456", MaskKind::IdNumber), "123.456");
        assert_eq!(format_masked("1234567", MaskKind::IdNumber), "123.456.7");
        assert_eq!(format_masked("123456789", MaskKind::IdNumber), "123.456.789");
        assert_eq!(
            format_masked("12345678901", MaskKind::IdNumber),
            "123.456.789-01"
        );
    }

    #[test]
    fn id_number_truncates_past_eleven_digits() {
        assert_eq!(
            format_masked("123456789012345", MaskKind::IdNumber),
            "123.456.789-01"
        );
    }

    #[test]
    fn postal_code_inserts_dash_after_five() {
        assert_eq!(format_masked("01001", MaskKind::PostalCode), "01001");
        assert_eq!(format_masked("010010", MaskKind::PostalCode), "01001-0");
        assert_eq!(format_masked("01001000", MaskKind::PostalCode), "01001-000");
    }

    #[test]
    fn age_is_digits_capped_at_three() {
        assert_eq!(format_masked("30", MaskKind::Age), "30");
        assert_eq!(format_masked("1a5b0c9", MaskKind::Age), "150");
    }

    #[test]
    fn non_digits_are_stripped() {
        assert_eq!(
            format_masked("111.444.777-35", MaskKind::IdNumber),
            "111.444.777-35"
        );
        assert_eq!(format_masked("abc12-3.45xy", MaskKind::PostalCode), "12345");
    }

    #[test]
    fn empty_input_degenerates_to_empty() {
        assert_eq!(format_masked("", MaskKind::IdNumber), "");
        assert_eq!(format_masked("no digits here", MaskKind::PostalCode), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in ["", "1", "12345", "111444777", "11144477735", "x9y8z7"] {
            for kind in [MaskKind::IdNumber, MaskKind::PostalCode, MaskKind::Age] {
                let once = format_masked(raw, kind);
                assert_eq!(format_masked(&once, kind), once, "raw={raw:?}");
            }
        }
    }
}
