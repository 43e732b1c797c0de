use crate::config::data_file::load_reference_data;
use crate::core::render::render_dashboard;
use crate::core::report::{build_report, DashboardReport};
use crate::domain::model::{DashboardInputs, OutputFormat, ReferenceData};
use crate::domain::ports::{ConfigProvider, LoadOutcome, Pipeline, Storage};
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::validate_additional_provision;
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const EXPORT_FILE_NAME: &str = "gbm_dashboard.zip";

pub struct DashboardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DashboardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DashboardPipeline<S, C> {
    async fn extract(&self) -> Result<ReferenceData> {
        let data = match self.config.data_file() {
            Some(path) => load_reference_data(path)?,
            None => {
                tracing::debug!("Using built-in reference data");
                ReferenceData::builtin()
            }
        };

        let totals = data.verify()?;
        tracing::debug!(
            running_cost = totals.running_cost,
            provisions = totals.provisions,
            "Reference data totals verified"
        );
        Ok(data)
    }

    async fn transform(&self, data: ReferenceData) -> Result<DashboardReport> {
        let additional_provision =
            validate_additional_provision(self.config.additional_provision())?;
        let amortization_months = self
            .config
            .amortization_months()
            .unwrap_or(data.meeting.amortization_months);
        let inputs = DashboardInputs::new(additional_provision, amortization_months);

        build_report(&data, &inputs, self.config.new_role_policy())
    }

    async fn load(&self, report: DashboardReport) -> Result<LoadOutcome> {
        let rendered = render_dashboard(&report, self.config.sections());

        let formats = self.config.export_formats();
        if formats.is_empty() {
            return Ok(LoadOutcome {
                rendered,
                export_path: None,
            });
        }

        let zip_data = build_export_bundle(&report, formats)?;
        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(EXPORT_FILE_NAME, &zip_data).await?;

        Ok(LoadOutcome {
            rendered,
            export_path: Some(format!("{}/{}", self.config.output_path(), EXPORT_FILE_NAME)),
        })
    }
}

#[derive(Debug, Serialize)]
struct ExportManifest<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    community: &'a str,
    inputs: DashboardInputs,
    formats: &'a [OutputFormat],
    files: Vec<String>,
}

/// Zip archive with the requested formats plus `manifest.json`.
pub fn build_export_bundle(report: &DashboardReport, formats: &[OutputFormat]) -> Result<Vec<u8>> {
    let mut files: Vec<(String, Vec<u8>)> = Vec::new();

    if formats.contains(&OutputFormat::Text) {
        files.push((
            "dashboard.txt".to_string(),
            render_dashboard(report, &[]).into_bytes(),
        ));
    }
    if formats.contains(&OutputFormat::Csv) {
        files.extend(csv_files(report)?);
    }
    if formats.contains(&OutputFormat::Json) {
        files.push((
            "report.json".to_string(),
            serde_json::to_vec_pretty(report)?,
        ));
    }

    let manifest = ExportManifest {
        generated_at: chrono::Utc::now(),
        community: &report.community,
        inputs: report.inputs,
        formats,
        files: files.iter().map(|(name, _)| name.clone()).collect(),
    };

    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in &files {
        zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
        zip.write_all(data)?;
    }
    zip.start_file::<_, ()>("manifest.json", FileOptions::default())?;
    zip.write_all(&serde_json::to_vec_pretty(&manifest)?)?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn csv_files(report: &DashboardReport) -> Result<Vec<(String, Vec<u8>)>> {
    let metrics = &report.metrics;
    let metric_rows = [
        ("total_sqft", report.total_sqft.to_string()),
        ("total_running_cost", report.running_cost.total.to_string()),
        ("base_provisions", report.provisions.total.to_string()),
        (
            "additional_provision",
            report.inputs.additional_provision.to_string(),
        ),
        (
            "amortization_months",
            report.inputs.amortization_months.to_string(),
        ),
        (
            "running_cost_per_sqft_per_month",
            metrics.running_cost_per_area_per_month.to_string(),
        ),
        (
            "effective_total_provisions",
            metrics.effective_total_provisions.to_string(),
        ),
        ("provision_per_month", metrics.provision_per_month.to_string()),
        (
            "provision_per_sqft_per_month",
            metrics.provision_per_area_per_month.to_string(),
        ),
        (
            "total_maintenance_per_sqft_per_month",
            metrics.total_maintenance_per_area_per_month.to_string(),
        ),
    ];

    let mut metrics_writer = csv::Writer::from_writer(Vec::new());
    metrics_writer.write_record(["metric", "value"])?;
    for (name, value) in &metric_rows {
        metrics_writer.write_record([*name, value.as_str()])?;
    }

    Ok(vec![
        ("staff.csv".to_string(), serialize_rows(&report.facility.staff)?),
        ("manpower.csv".to_string(), serialize_rows(&report.manpower.rows)?),
        (
            "running_cost.csv".to_string(),
            serialize_rows(&report.running_cost.rows)?,
        ),
        (
            "provisions.csv".to_string(),
            serialize_rows(&report.provisions.rows)?,
        ),
        ("metrics.csv".to_string(), finish_csv(metrics_writer)?),
    ])
}

fn serialize_rows<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| DashboardError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })
}
