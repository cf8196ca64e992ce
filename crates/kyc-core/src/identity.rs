//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the identifiers a screening touches.
//! Each identifier is a distinct type, and string-based ones validate their
//! format at construction time.
//!
//! ## Validation
//!
//! - [`CountryCode`]: two ASCII letters, stored uppercase.
//! - [`NationalId`]: 14 digits, century code `2` (1900s) or `3` (2000s),
//!   followed by a valid `YYMMDD` birth date.
//! - [`PassportNumber`]: at least 6 characters, a leading letter followed by
//!   letters or digits, stored uppercase.
//! - Any other [`IdentifierKind`]: at least 4 characters.
//!
//! Identifier values that appear in errors are masked with
//! [`mask_identifier`]; raw document numbers never reach logs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classification::IdentifierKind;
use crate::error::ValidationError;

/// Implement `Deserialize` for string newtypes by routing through `new()`,
/// so invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Minimum length for identifiers without a dedicated rule.
pub const MIN_GENERIC_ID_LEN: usize = 4;

/// Minimum passport number length.
pub const MIN_PASSPORT_LEN: usize = 6;

/// Mask sensitive text for logging: the first four characters followed by
/// `***`, or just `***` when the value is four characters or shorter.
pub fn mask_identifier(text: &str) -> String {
    const VISIBLE: usize = 4;
    if text.chars().count() <= VISIBLE {
        return "***".to_string();
    }
    let prefix: String = text.chars().take(VISIBLE).collect();
    format!("{prefix}***")
}

// ---------------------------------------------------------------------------
// Run identifier
// ---------------------------------------------------------------------------

/// Unique identifier of one screening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreeningRunId(Uuid);

impl ScreeningRunId {
    /// Generate a new random run identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ScreeningRunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScreeningRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "screening:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Country code
// ---------------------------------------------------------------------------

/// ISO 3166-1 alpha-2 country code.
///
/// Input is trimmed and uppercased before validation, so `" eg"` and `"EG"`
/// produce the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountryCode(String);

impl_validating_deserialize!(CountryCode);

impl CountryCode {
    /// Create a country code, validating the two-letter format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] unless the trimmed
    /// input is exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let code = raw.trim().to_ascii_uppercase();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode(raw));
        }
        Ok(Self(code))
    }

    /// Access the uppercase code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// Identity documents
// ---------------------------------------------------------------------------

/// Century-coded 14-digit national identity number.
///
/// Layout: `C YY MM DD ...` where `C` is `2` for births in the 1900s and `3`
/// for births in the 2000s. The embedded date must be a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId {
    value: String,
    birth_date: NaiveDate,
}

impl_validating_deserialize!(NationalId);

impl Serialize for NationalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl NationalId {
    /// Parse and validate a national identity number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNationalId`] naming the first rule
    /// that failed: length/digits, century code, or embedded birth date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let s = raw.trim();
        let invalid = |reason| ValidationError::InvalidNationalId {
            value: mask_identifier(s),
            reason,
        };

        if s.len() != 14 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be exactly 14 digits"));
        }

        let digit = |range: std::ops::Range<usize>| s[range].parse::<u32>().unwrap_or(0);
        let century = match &s[..1] {
            "2" => 1900,
            "3" => 2000,
            _ => return Err(invalid("invalid century code")),
        };
        let year = century + digit(1..3) as i32;
        let birth_date = NaiveDate::from_ymd_opt(year, digit(3..5), digit(5..7))
            .ok_or_else(|| invalid("invalid embedded birth date"))?;

        Ok(Self {
            value: s.to_string(),
            birth_date,
        })
    }

    /// Access the 14-digit value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Birth date encoded in digits 2–7.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Passport number: a letter followed by letters or digits, 6+ characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PassportNumber(String);

impl_validating_deserialize!(PassportNumber);

impl PassportNumber {
    /// Create a passport number, validating format. Stored uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPassportNumber`] if the value is
    /// too short or not letter-prefixed alphanumeric.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let s = raw.trim();
        let invalid = |reason| ValidationError::InvalidPassportNumber {
            value: mask_identifier(s),
            reason,
        };

        if s.chars().count() < MIN_PASSPORT_LEN {
            return Err(invalid("must be at least 6 characters"));
        }
        let mut chars = s.chars();
        let leads_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if !leads_with_letter || !chars.all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("must be a letter followed by letters or digits"));
        }

        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Access the uppercase passport number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PassportNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate an identifier value against the rule for its kind.
pub fn validate_identifier(value: &str, kind: IdentifierKind) -> Result<(), ValidationError> {
    match kind {
        IdentifierKind::NationalId => NationalId::new(value).map(|_| ()),
        IdentifierKind::Passport => PassportNumber::new(value).map(|_| ()),
        IdentifierKind::DriversLicense
        | IdentifierKind::ResidencePermit
        | IdentifierKind::Other => {
            if value.trim().chars().count() < MIN_GENERIC_ID_LEN {
                Err(ValidationError::IdentifierTooShort(mask_identifier(value)))
            } else {
                Ok(())
            }
        }
    }
}
