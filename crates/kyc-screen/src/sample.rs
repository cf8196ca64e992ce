//! Demonstration watchlist used when no watchlist file is supplied.

use kyc_core::{EntryRiskLevel, ListSource, ListType, WatchlistEntry};

struct SampleEntry {
    source: ListSource,
    list_type: ListType,
    reference: &'static str,
    name: &'static str,
    secondary_name: &'static str,
    alias: &'static str,
    secondary_alias: &'static str,
    nationality: &'static str,
    dob: Option<&'static str>,
    designation: &'static str,
    reason: &'static str,
}

const SAMPLES: &[SampleEntry] = &[
    SampleEntry {
        source: ListSource::Ofac,
        list_type: ListType::Individual,
        reference: "SDN12345",
        name: "Ahmed Ali Al-Masri",
        secondary_name: "أحمد علي المصري",
        alias: "Ahmed Al-Masri",
        secondary_alias: "أحمد المصري",
        nationality: "EG",
        dob: Some("1980-05-15"),
        designation: "Terrorism Financing",
        reason: "Involved in terrorism financing activities",
    },
    SampleEntry {
        source: ListSource::Ofac,
        list_type: ListType::Individual,
        reference: "SDN12346",
        name: "Mohamed Hassan",
        secondary_name: "محمد حسن",
        alias: "",
        secondary_alias: "",
        nationality: "SY",
        dob: Some("1975-11-22"),
        designation: "Supporting Regime",
        reason: "Supporting human rights violations",
    },
    SampleEntry {
        source: ListSource::Un,
        list_type: ListType::Individual,
        reference: "UN12345",
        name: "Ivan Petrov",
        secondary_name: "إيفان بتروف",
        alias: "Ivan the Russian",
        secondary_alias: "إيفان الروسي",
        nationality: "RU",
        dob: Some("1970-08-30"),
        designation: "Arms Trafficking",
        reason: "Illegal arms trade",
    },
    SampleEntry {
        source: ListSource::Eu,
        list_type: ListType::Entity,
        reference: "EU12345",
        name: "Terror Group A",
        secondary_name: "مجموعة الإرهاب أ",
        alias: "Group A",
        secondary_alias: "تنظيم أ",
        nationality: "SY",
        dob: None,
        designation: "Terrorist Organization",
        reason: "Terrorism activities",
    },
    SampleEntry {
        source: ListSource::Eu,
        list_type: ListType::Individual,
        reference: "EU12346",
        name: "Juan Carlos",
        secondary_name: "خوان كارلوس",
        alias: "",
        secondary_alias: "",
        nationality: "MX",
        dob: Some("1965-04-12"),
        designation: "Drug Trafficking",
        reason: "Narcotics distribution network",
    },
];

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Five demonstration entries across the OFAC, UN and EU lists, all
/// declared HIGH risk.
pub fn sample_watchlist() -> Vec<WatchlistEntry> {
    SAMPLES
        .iter()
        .map(|s| WatchlistEntry {
            entry_id: s.reference.to_string(),
            list_source: s.source,
            list_type: s.list_type,
            reference_id: Some(s.reference.to_string()),
            name: s.name.to_string(),
            secondary_name: non_empty(s.secondary_name),
            aliases: non_empty(s.alias).into_iter().collect(),
            secondary_aliases: non_empty(s.secondary_alias).into_iter().collect(),
            nationality: non_empty(s.nationality),
            date_of_birth: s.dob.map(str::to_string),
            risk_level: EntryRiskLevel::High,
            designation: non_empty(s.designation),
            reason: non_empty(s.reason),
        })
        .collect()
}
