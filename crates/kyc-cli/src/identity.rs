//! # Identifier validation — `kyc validate-id`

use anyhow::Result;
use clap::{Args, ValueEnum};

use kyc_core::{mask_identifier, validate_identifier, IdentifierKind, NationalId};

use crate::{EXIT_INVALID, EXIT_OK};

/// Document kind accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    /// 14-digit century-coded national identity number.
    NationalId,
    Passport,
    DriversLicense,
    ResidencePermit,
    Other,
}

impl From<KindArg> for IdentifierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::NationalId => IdentifierKind::NationalId,
            KindArg::Passport => IdentifierKind::Passport,
            KindArg::DriversLicense => IdentifierKind::DriversLicense,
            KindArg::ResidencePermit => IdentifierKind::ResidencePermit,
            KindArg::Other => IdentifierKind::Other,
        }
    }
}

/// Arguments for `kyc validate-id`.
#[derive(Args, Debug)]
pub struct ValidateIdArgs {
    /// Identifier value.
    pub value: String,

    /// Document kind.
    #[arg(long, value_enum, default_value_t = KindArg::Passport)]
    pub kind: KindArg,
}

/// Execute `kyc validate-id`. Invalid identifiers exit with [`EXIT_INVALID`].
pub fn run_validate_id(args: &ValidateIdArgs) -> Result<u8> {
    let kind = IdentifierKind::from(args.kind);
    let masked = mask_identifier(&args.value);

    let result = match kind {
        IdentifierKind::NationalId => NationalId::new(args.value.as_str()).map(Some),
        _ => validate_identifier(&args.value, kind).map(|()| None),
    };

    match result {
        Ok(national_id) => {
            println!("  VALID   {kind} {masked}");
            if let Some(id) = national_id {
                println!("  birth date: {}", id.birth_date());
            }
            Ok(EXIT_OK)
        }
        Err(e) => {
            println!("  INVALID {kind} {masked}: {e}");
            Ok(EXIT_INVALID)
        }
    }
}
