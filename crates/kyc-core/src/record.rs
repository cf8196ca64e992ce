//! # Records — Customer and Watchlist Inputs
//!
//! The two inputs of a screening run. Both are plain data owned by the
//! caller; the engine only borrows them.
//!
//! Free-text fields (names, birth dates, occupation) are kept exactly as
//! supplied. Normalization and date parsing happen in the scoring stages,
//! which degrade to "no contribution" when a field is unusable.
//! [`CustomerRecord::validate`] is the intake check a caller runs before
//! screening.

use serde::{Deserialize, Serialize};

use crate::classification::{CustomerType, EntryRiskLevel, IdentifierKind, ListSource, ListType};
use crate::config::ScreeningConfig;
use crate::error::ValidationError;
use crate::identity::{mask_identifier, validate_identifier, CountryCode};
use crate::temporal::parse_birth_date;

/// Self-declared gender on a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    #[serde(rename = "M")]
    Male,
    /// Female.
    #[serde(rename = "F")]
    Female,
    /// Other.
    #[serde(rename = "O")]
    Other,
}

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

/// A customer submitted for screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Caller-assigned customer code.
    #[serde(default)]
    pub customer_code: String,
    /// Full name in the primary (Latin) script.
    #[serde(alias = "full_name_en")]
    pub full_name: String,
    /// Full name in the secondary (Arabic) script.
    #[serde(default, alias = "full_name_ar", skip_serializing_if = "Option::is_none")]
    pub secondary_name: Option<String>,
    /// Date of birth as supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Two-letter nationality code as supplied.
    #[serde(default, alias = "nationality_code")]
    pub nationality: String,
    /// Occupation or title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Identity document number.
    #[serde(default, alias = "id_number")]
    pub identifier: String,
    /// Identity document kind.
    #[serde(default, alias = "id_type")]
    pub identifier_kind: IdentifierKind,
    /// Legal form.
    #[serde(default)]
    pub customer_type: CustomerType,
    /// Gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Pass/fail signal from an external identity check, when one ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_verified: Option<bool>,
}

impl CustomerRecord {
    /// Create a record with the mandatory fields; everything else is empty.
    pub fn new(
        customer_code: impl Into<String>,
        full_name: impl Into<String>,
        nationality: impl Into<String>,
    ) -> Self {
        Self {
            customer_code: customer_code.into(),
            full_name: full_name.into(),
            secondary_name: None,
            date_of_birth: None,
            nationality: nationality.into(),
            occupation: None,
            identifier: String::new(),
            identifier_kind: IdentifierKind::default(),
            customer_type: CustomerType::default(),
            gender: None,
            identifier_verified: None,
        }
    }

    /// Set the date of birth.
    pub fn with_date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.date_of_birth = Some(dob.into());
        self
    }

    /// Set the occupation.
    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    /// Set the identity document.
    pub fn with_identifier(mut self, value: impl Into<String>, kind: IdentifierKind) -> Self {
        self.identifier = value.into();
        self.identifier_kind = kind;
        self
    }

    /// Set the secondary-script name.
    pub fn with_secondary_name(mut self, name: impl Into<String>) -> Self {
        self.secondary_name = Some(name.into());
        self
    }

    /// Identifier masked for display and logging.
    pub fn masked_identifier(&self) -> String {
        mask_identifier(&self.identifier)
    }

    /// Intake validation.
    ///
    /// Missing mandatory fields, identifier rule failures and malformed
    /// nationality codes are errors. An unparseable birth date, a high-risk
    /// nationality and a PEP occupation are warnings.
    pub fn validate(&self, config: &ScreeningConfig) -> CustomerValidation {
        let mut result = CustomerValidation::default();

        let required = [
            ("customer_code", &self.customer_code),
            ("full_name", &self.full_name),
            ("nationality", &self.nationality),
            ("identifier", &self.identifier),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                result.errors.push(ValidationError::MissingField(field));
            }
        }

        if !self.identifier.trim().is_empty() {
            if let Err(e) = validate_identifier(&self.identifier, self.identifier_kind) {
                result.errors.push(e);
            }
        }

        if !self.nationality.trim().is_empty() {
            if let Err(e) = CountryCode::new(self.nationality.as_str()) {
                result.errors.push(e);
            }
        }

        if let Some(dob) = self.date_of_birth.as_deref().filter(|d| !d.trim().is_empty()) {
            if parse_birth_date(dob).is_none() {
                result
                    .warnings
                    .push(format!("Date of birth is not a recognized date: {dob:?}"));
            }
        }

        if config.is_high_risk_country(&self.nationality) {
            result.warnings.push(format!(
                "Customer from high-risk country: {}",
                self.nationality.trim().to_ascii_uppercase()
            ));
        }

        if let Some(occupation) = &self.occupation {
            if config.pep_indicator_in(occupation).is_some() {
                result
                    .warnings
                    .push("Customer may be a Politically Exposed Person (PEP)".to_string());
            }
        }

        result
    }
}

/// Outcome of [`CustomerRecord::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerValidation {
    /// Failures that block screening.
    pub errors: Vec<ValidationError>,
    /// Data-quality notes that do not block screening.
    pub warnings: Vec<String>,
}

impl CustomerValidation {
    /// True when there are no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Watchlist entry
// ---------------------------------------------------------------------------

/// A sanctioned party as published by an issuing authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    /// Stable identifier within the watchlist.
    pub entry_id: String,
    /// Issuing authority.
    pub list_source: ListSource,
    /// Kind of listed party.
    #[serde(default)]
    pub list_type: ListType,
    /// Authority's own reference number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Primary name in the Latin script.
    #[serde(alias = "full_name_en")]
    pub name: String,
    /// Primary name in the secondary script.
    #[serde(default, alias = "full_name_ar", skip_serializing_if = "Option::is_none")]
    pub secondary_name: Option<String>,
    /// Latin-script aliases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Secondary-script aliases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_aliases: Vec<String>,
    /// Two-letter nationality code.
    #[serde(default, alias = "nationality_code", skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Date of birth as published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Risk level declared by the authority.
    #[serde(default)]
    pub risk_level: EntryRiskLevel,
    /// Designation category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    /// Reason for listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl WatchlistEntry {
    /// Create an entry with the mandatory fields; everything else is empty.
    pub fn new(
        entry_id: impl Into<String>,
        list_source: ListSource,
        name: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            list_source,
            list_type: ListType::default(),
            reference_id: None,
            name: name.into(),
            secondary_name: None,
            aliases: Vec::new(),
            secondary_aliases: Vec::new(),
            nationality: None,
            date_of_birth: None,
            risk_level: EntryRiskLevel::default(),
            designation: None,
            reason: None,
        }
    }

    /// Add a Latin-script alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the nationality.
    pub fn with_nationality(mut self, code: impl Into<String>) -> Self {
        self.nationality = Some(code.into());
        self
    }

    /// Set the date of birth.
    pub fn with_date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.date_of_birth = Some(dob.into());
        self
    }

    /// Set the declared risk level.
    pub fn with_risk_level(mut self, level: EntryRiskLevel) -> Self {
        self.risk_level = level;
        self
    }

    /// Primary name followed by non-blank aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .filter(|n| !n.trim().is_empty())
    }

    /// Secondary-script primary name followed by non-blank secondary aliases.
    pub fn secondary_names(&self) -> impl Iterator<Item = &str> {
        self.secondary_name
            .iter()
            .chain(self.secondary_aliases.iter())
            .map(String::as_str)
            .filter(|n| !n.trim().is_empty())
    }
}
