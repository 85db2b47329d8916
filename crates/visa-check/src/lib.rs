//! Visa requirement lookups for a passport/destination pair.
//!
//! The crate joins three collaborators: a remote visa-rules provider (memoized
//! per code pair), a remote country registry (degrades to a name-only record),
//! and a static catalog of advisory travel documents.

pub mod catalog;
pub mod check;
pub mod code;
pub mod config;
pub mod country;
pub mod error;
pub mod telemetry;
pub mod visa;

pub use check::{
    visa_router, CheckVisaRequest, VisaCheckError, VisaCheckResponse, VisaCheckService,
};
pub use code::CountryCode;
