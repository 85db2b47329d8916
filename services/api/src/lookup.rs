use crate::infra::build_visa_service;
use clap::Args;
use serde_json::json;
use visa_check::config::AppConfig;
use visa_check::error::AppError;
use visa_check::telemetry;
use visa_check::CheckVisaRequest;

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Passport country (ISO 3166-1 alpha-2, e.g. US)
    pub(crate) passport: String,
    /// Destination country (ISO 3166-1 alpha-2, e.g. JP)
    pub(crate) destination: String,
}

pub(crate) async fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let service = build_visa_service(&config.upstream)?;
    let request = CheckVisaRequest::new(args.passport, args.destination);

    match service.check(request).await {
        Ok(answer) => {
            println!("{}", serde_json::to_string_pretty(&answer)?);
            Ok(())
        }
        Err(err) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "error": err.to_string() }))?
            );
            Err(err.into())
        }
    }
}
