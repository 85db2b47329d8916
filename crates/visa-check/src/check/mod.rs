//! `POST /api/check-visa`: validates the code pair, consults the rules
//! provider and the country registry, and assembles the unified answer.

pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use router::visa_router;
pub use service::{VisaCheckError, VisaCheckService};
pub use views::{
    format_population, CheckVisaRequest, DestinationView, PassportView, VisaCheckResponse,
    VisaView,
};
