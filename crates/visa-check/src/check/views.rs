use serde::{Deserialize, Serialize};

use crate::catalog::DocumentRequirement;
use crate::code::CountryCode;
use crate::country::CountryMetadata;
use crate::visa::{StayDuration, VisaRules};

const NOT_AVAILABLE: &str = "N/A";

/// Request body. Absent or `null` codes are treated as empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckVisaRequest {
    #[serde(default)]
    pub passport: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

impl CheckVisaRequest {
    pub fn new(passport: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            passport: Some(passport.into()),
            destination: Some(destination.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisaCheckResponse {
    pub status: &'static str,
    pub passport: PassportView,
    pub destination: DestinationView,
    pub visa: VisaView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassportView {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationView {
    pub name: String,
    pub code: String,
    pub capital: String,
    pub region: String,
    pub currency: String,
    pub language: String,
    pub population: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisaView {
    pub status: String,
    #[serde(rename = "type")]
    pub visa_type: &'static str,
    pub stay_duration: StayDuration,
    pub documents: &'static [&'static str],
    pub last_updated: String,
}

impl VisaCheckResponse {
    pub(crate) fn assemble(
        passport: &CountryCode,
        destination: &CountryCode,
        rules: &VisaRules,
        metadata: &CountryMetadata,
        requirement: DocumentRequirement,
    ) -> Self {
        // A fallback record only knows the code; prefer the provider's name then.
        let destination_name = if metadata.is_fallback() {
            rules
                .destination_name()
                .unwrap_or(destination.as_str())
                .to_string()
        } else {
            metadata.name.clone()
        };

        Self {
            status: "success",
            passport: PassportView {
                code: passport.as_str().to_string(),
                name: rules
                    .passport_name()
                    .unwrap_or(passport.as_str())
                    .to_string(),
            },
            destination: DestinationView {
                name: destination_name,
                code: destination.as_str().to_string(),
                capital: or_not_available(metadata.capital.as_deref()),
                region: or_not_available(metadata.region.as_deref()),
                currency: join_or_not_available(&metadata.currencies),
                language: join_or_not_available(&metadata.languages),
                population: format_population(metadata.population),
            },
            visa: VisaView {
                status: rules.status_label().to_string(),
                visa_type: requirement.visa_type,
                stay_duration: rules.stay_duration(),
                documents: requirement.documents,
                last_updated: rules.last_updated().to_string(),
            },
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

fn join_or_not_available(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

/// Thousands-separated population, `"N/A"` when unknown.
pub fn format_population(population: Option<u64>) -> String {
    let Some(value) = population else {
        return NOT_AVAILABLE.to_string();
    };

    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
