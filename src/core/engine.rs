use crate::domain::ports::{LoadOutcome, Pipeline};
use crate::utils::error::Result;
use crate::utils::format::format_rate;

/// Runs one extract → transform → load pass. Nothing is kept between runs.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadOutcome> {
        tracing::info!("Starting dashboard build...");

        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded reference data for {} ({} sq ft)",
            data.community.name,
            data.community.total_sqft
        );

        let report = self.pipeline.transform(data).await?;
        tracing::info!(
            "Total maintenance: ₹{} / sq ft / month (additional provision ₹{}, {} months)",
            format_rate(report.metrics.total_maintenance_per_area_per_month),
            report.inputs.additional_provision,
            report.inputs.amortization_months
        );

        let outcome = self.pipeline.load(report).await?;
        if let Some(path) = &outcome.export_path {
            tracing::info!("📁 Export saved to: {}", path);
        }

        Ok(outcome)
    }
}
