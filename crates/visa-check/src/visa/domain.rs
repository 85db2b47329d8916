use serde::{Deserialize, Serialize};

/// Answer from the rules provider for one passport/destination pair.
///
/// Every field is optional upstream; accessors apply the defaults the
/// response assembly relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaRules {
    #[serde(default)]
    pub passport: Option<CountryRef>,
    #[serde(default)]
    pub destination: Option<CountryRef>,
    #[serde(default)]
    pub category: Option<VisaCategory>,
    #[serde(default)]
    pub dur: Option<StayDuration>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRef {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaCategory {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Permitted stay as reported upstream: a day count or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StayDuration {
    Days(u64),
    Text(String),
}

impl Default for StayDuration {
    fn default() -> Self {
        StayDuration::Text("Varies".to_string())
    }
}

impl VisaRules {
    /// Category label, `"N/A"` when the provider omitted it.
    pub fn status_label(&self) -> &str {
        self.category
            .as_ref()
            .and_then(|category| category.name.as_deref())
            .unwrap_or("N/A")
    }

    pub fn passport_name(&self) -> Option<&str> {
        self.passport.as_ref().and_then(|country| country.name.as_deref())
    }

    pub fn destination_name(&self) -> Option<&str> {
        self.destination
            .as_ref()
            .and_then(|country| country.name.as_deref())
    }

    /// Permitted stay, `"Varies"` when the provider omitted `dur` or sent
    /// `null`. An explicit `null` is not passed through as `null`.
    pub fn stay_duration(&self) -> StayDuration {
        self.dur.clone().unwrap_or_default()
    }

    pub fn last_updated(&self) -> &str {
        self.last_updated.as_deref().unwrap_or("N/A")
    }
}
