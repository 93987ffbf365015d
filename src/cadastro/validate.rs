//! Record validation.
//!
//! [`validate`] runs the field checks in a fixed order and stops at the
//! first failure, so a caller only ever gets one reason per submission.
//! The duplicate check comes last and excludes the edit target's own
//! position, which is what makes resubmitting a record's unchanged ID and
//! email during an edit legal.

use crate::mask::digits_of;
use crate::model::{Record, RecordDraft, ValidRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const NAME_MIN_LEN: usize = 2;
const ID_NUMBER_DIGITS: usize = 11;
const POSTAL_CODE_DIGITS: usize = 8;
const AGE_MIN: u8 = 1;
const AGE_MAX: u8 = 150;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

/// The form field a validation failure points at, so the presentation
/// layer knows where to put focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    IdNumber,
    Age,
    Email,
    PostalCode,
}

/// One stable reason per way a submission can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    NameEmpty,
    #[error("Name must be at least {NAME_MIN_LEN} characters")]
    NameTooShort,
    #[error("ID number cannot be empty")]
    IdNumberEmpty,
    #[error("ID number must have exactly {ID_NUMBER_DIGITS} digits")]
    IdNumberLength,
    #[error("ID number cannot be a single repeated digit")]
    IdNumberRepeatedDigits,
    #[error("Age cannot be empty")]
    AgeEmpty,
    #[error("Age must be a valid number")]
    AgeNotANumber,
    #[error("Age must be between {AGE_MIN} and {AGE_MAX}")]
    AgeOutOfRange,
    #[error("E-mail cannot be empty")]
    EmailEmpty,
    #[error("E-mail format is invalid")]
    EmailInvalid,
    #[error("Postal code cannot be empty")]
    PostalCodeEmpty,
    #[error("Postal code must have exactly {POSTAL_CODE_DIGITS} digits")]
    PostalCodeLength,
    #[error("This ID number is already registered")]
    DuplicateIdNumber,
    #[error("This e-mail is already registered")]
    DuplicateEmail,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        use ValidationError::*;
        match self {
            NameEmpty | NameTooShort => Field::Name,
            IdNumberEmpty | IdNumberLength | IdNumberRepeatedDigits | DuplicateIdNumber => {
                Field::IdNumber
            }
            AgeEmpty | AgeNotANumber | AgeOutOfRange => Field::Age,
            EmailEmpty | EmailInvalid | DuplicateEmail => Field::Email,
            PostalCodeEmpty | PostalCodeLength => Field::PostalCode,
        }
    }
}

/// Validate a submitted draft against the field rules and the existing
/// collection. `edit_target` is the position being edited, or `None` when
/// creating; that position is skipped by the duplicate check.
pub fn validate(
    draft: &RecordDraft,
    records: &[Record],
    edit_target: Option<usize>,
) -> Result<ValidRecord, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    if name.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }

    let id_number = draft.id_number.trim();
    if id_number.is_empty() {
        return Err(ValidationError::IdNumberEmpty);
    }
    let id_digits = digits_of(id_number);
    if id_digits.len() != ID_NUMBER_DIGITS {
        return Err(ValidationError::IdNumberLength);
    }
    let first = id_digits.as_bytes()[0];
    if id_digits.bytes().all(|b| b == first) {
        return Err(ValidationError::IdNumberRepeatedDigits);
    }

    let age_raw = draft.age.trim();
    if age_raw.is_empty() {
        return Err(ValidationError::AgeEmpty);
    }
    // Parse wide first: "300" and "-5" are numbers out of range, not
    // non-numbers.
    let age: i64 = age_raw.parse().map_err(|_| ValidationError::AgeNotANumber)?;
    if !(AGE_MIN as i64..=AGE_MAX as i64).contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }
    let age = age as u8;

    let email = draft.email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailEmpty);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }

    let postal_code = draft.postal_code.trim();
    if postal_code.is_empty() {
        return Err(ValidationError::PostalCodeEmpty);
    }
    if digits_of(postal_code).len() != POSTAL_CODE_DIGITS {
        return Err(ValidationError::PostalCodeLength);
    }

    // Duplicate check, in store order. ID number wins over e-mail when a
    // record collides on both.
    for (position, existing) in records.iter().enumerate() {
        if edit_target == Some(position) {
            continue;
        }
        if digits_of(&existing.id_number) == id_digits {
            return Err(ValidationError::DuplicateIdNumber);
        }
        if existing.email.eq_ignore_ascii_case(email) {
            return Err(ValidationError::DuplicateEmail);
        }
    }

    Ok(ValidRecord {
        name: name.to_string(),
        id_number: id_number.to_string(),
        age,
        email: email.to_string(),
        postal_code: postal_code.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn draft() -> RecordDraft {
        RecordDraft::new(
            "Ana Silva",
            "111.444.777-35",
            "30",
            "ana@ex.com",
            "01001-000",
        )
    }

    fn stored(id_number: &str, email: &str) -> Record {
        Record {
            name: "Someone Else".into(),
            id_number: id_number.into(),
            age: 40,
            email: email.into(),
            postal_code: "22041-001".into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn accepts_a_well_formed_draft() {
        let valid = validate(&draft(), &[], None).unwrap();
        assert_eq!(valid.name, "Ana Silva");
        assert_eq!(valid.age, 30);
    }

    #[test]
    fn name_rules() {
        let mut d = draft();
        d.name = "   ".into();
        assert_eq!(validate(&d, &[], None), Err(ValidationError::NameEmpty));
        d.name = "A".into();
        assert_eq!(validate(&d, &[], None), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn id_number_must_have_eleven_digits() {
        let mut d = draft();
        d.id_number = "123.456.789".into();
        assert_eq!(
            validate(&d, &[], None),
            Err(ValidationError::IdNumberLength)
        );
    }

    #[test]
    fn id_number_rejects_repeated_digit_sequences() {
        let mut d = draft();
        d.id_number = "11111111111".into();
        assert_eq!(
            validate(&d, &[], None),
            Err(ValidationError::IdNumberRepeatedDigits)
        );
        d.id_number = "111.111.111-11".into();
        assert_eq!(
            validate(&d, &[], None),
            Err(ValidationError::IdNumberRepeatedDigits)
        );
    }

    #[test]
    fn id_number_accepts_bare_digits() {
        let mut d = draft();
        d.id_number = "12345678901".into();
        assert!(validate(&d, &[], None).is_ok());
    }

    #[test]
    fn age_bounds_are_one_to_one_fifty() {
        for (raw, expected) in [
            ("0", Some(ValidationError::AgeOutOfRange)),
            ("151", Some(ValidationError::AgeOutOfRange)),
            ("300", Some(ValidationError::AgeOutOfRange)),
            ("-5", Some(ValidationError::AgeOutOfRange)),
            ("abc", Some(ValidationError::AgeNotANumber)),
            ("", Some(ValidationError::AgeEmpty)),
            ("1", None),
            ("150", None),
        ] {
            let mut d = draft();
            d.age = raw.into();
            let result = validate(&d, &[], None);
            match expected {
                Some(err) => assert_eq!(result, Err(err), "age={raw:?}"),
                None => assert!(result.is_ok(), "age={raw:?}"),
            }
        }
    }

    #[test]
    fn email_pattern() {
        for (raw, ok) in [("a@b.co", true), ("a@b", false), ("a.b.com", false)] {
            let mut d = draft();
            d.email = raw.into();
            assert_eq!(validate(&d, &[], None).is_ok(), ok, "email={raw:?}");
        }
    }

    #[test]
    fn postal_code_must_have_eight_digits() {
        let mut d = draft();
        d.postal_code = "01001-00".into();
        assert_eq!(
            validate(&d, &[], None),
            Err(ValidationError::PostalCodeLength)
        );
    }

    #[test]
    fn checks_stop_at_the_first_failure() {
        let mut d = draft();
        d.name = "".into();
        d.age = "abc".into();
        assert_eq!(validate(&d, &[], None), Err(ValidationError::NameEmpty));
    }

    #[test]
    fn duplicate_id_is_caught_across_punctuation_forms() {
        let existing = vec![stored("111.444.777-35", "other@ex.com")];
        let mut d = draft();
        d.id_number = "11144477735".into();
        assert_eq!(
            validate(&d, &existing, None),
            Err(ValidationError::DuplicateIdNumber)
        );
    }

    #[test]
    fn duplicate_email_is_case_insensitive() {
        let existing = vec![stored("987.654.321-00", "ANA@EX.COM")];
        assert_eq!(
            validate(&draft(), &existing, None),
            Err(ValidationError::DuplicateEmail)
        );
    }

    #[test]
    fn duplicate_id_reported_before_duplicate_email() {
        let existing = vec![stored("111.444.777-35", "ana@ex.com")];
        assert_eq!(
            validate(&draft(), &existing, None),
            Err(ValidationError::DuplicateIdNumber)
        );
    }

    #[test]
    fn edit_target_is_excluded_from_duplicate_check() {
        let existing = vec![stored("111.444.777-35", "ana@ex.com")];
        assert!(validate(&draft(), &existing, Some(0)).is_ok());
    }

    #[test]
    fn edit_still_collides_with_other_records() {
        let existing = vec![
            stored("987.654.321-00", "other@ex.com"),
            stored("111.444.777-35", "ana@ex.com"),
        ];
        assert_eq!(
            validate(&draft(), &existing, Some(0)),
            Err(ValidationError::DuplicateIdNumber)
        );
    }

    #[test]
    fn failures_point_at_their_field() {
        assert_eq!(ValidationError::NameTooShort.field(), Field::Name);
        assert_eq!(ValidationError::DuplicateIdNumber.field(), Field::IdNumber);
        assert_eq!(ValidationError::DuplicateEmail.field(), Field::Email);
        assert_eq!(ValidationError::PostalCodeLength.field(), Field::PostalCode);
        assert_eq!(ValidationError::AgeOutOfRange.field(), Field::Age);
    }
}
