//! Visa category lookups against the remote rules provider, memoized per
//! passport/destination pair for the life of the process.

mod cache;
mod domain;
mod service;
mod source;

pub use cache::{CacheError, MemoCache};
pub use domain::{CountryRef, StayDuration, VisaCategory, VisaRules};
pub use service::{VisaQueryError, VisaQueryService};
pub use source::{PassportVisaClient, RulesSourceError, VisaRulesSource};
