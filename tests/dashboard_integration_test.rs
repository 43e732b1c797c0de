use anyhow::Result;
use rwa_dashboard::domain::model::{OutputFormat, Section};
use rwa_dashboard::{CliConfig, DashboardError, DashboardPipeline, LocalStorage, ReportEngine};
use std::io::Read;
use tempfile::TempDir;

fn cli_config(output_path: &str) -> CliConfig {
    CliConfig {
        additional_provision: 0,
        amortization_months: None,
        data: None,
        section: vec![],
        include_new_roles: true,
        output_path: output_path.to_string(),
        export: vec![],
        print_data_template: false,
        verbose: false,
        json_logs: false,
    }
}

fn read_zip_entry(path: &std::path::Path, name: &str) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))?;
    let mut content = String::new();
    archive.by_name(name)?.read_to_string(&mut content)?;
    Ok(content)
}

#[tokio::test]
async fn test_end_to_end_with_builtin_data() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(&output_path);
    config.additional_provision = 9_000;
    config.export = vec![OutputFormat::Text, OutputFormat::Csv, OutputFormat::Json];

    let storage = LocalStorage::new(output_path.clone());
    let engine = ReportEngine::new(DashboardPipeline::new(storage, config));
    let outcome = engine.run().await?;

    assert!(outcome.rendered.contains("Candeur Sunshine Residents Welfare Association"));
    assert!(outcome.rendered.contains("Effective Provisions (₹): 2,306,178"));
    assert!(outcome.export_path.unwrap().ends_with("gbm_dashboard.zip"));

    let zip_path = temp_dir.path().join("gbm_dashboard.zip");
    assert!(zip_path.exists());

    let report: serde_json::Value =
        serde_json::from_str(&read_zip_entry(&zip_path, "report.json")?)?;
    assert_eq!(report["inputs"]["additional_provision"], 9_000);
    assert_eq!(report["metrics"]["effective_total_provisions"], 2_306_178);
    assert_eq!(report["provisions"]["rows"][0]["head"], "Lift AMC");

    let manifest: serde_json::Value =
        serde_json::from_str(&read_zip_entry(&zip_path, "manifest.json")?)?;
    assert_eq!(manifest["formats"], serde_json::json!(["text", "csv", "json"]));
    assert!(manifest["generated_at"].as_str().is_some());

    let manpower = read_zip_entry(&zip_path, "manpower.csv")?;
    assert!(manpower.starts_with("role,previous,current,change,trend"));
    assert!(manpower.contains("Housekeeping Staff,8,10,2,increase"));

    let text = read_zip_entry(&zip_path, "dashboard.txt")?;
    assert!(text.contains("Total Maintenance / sq ft / month (₹)"));

    Ok(())
}

#[tokio::test]
async fn test_custom_data_file_and_section_filter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let data_content = r#"
executive_committee = ["A. Member", "B. Member"]

[community]
name = "Test Residency"
total_sqft = 100000
facility_manager = "Ravi"
facility_partner = "Acme FM"

[meeting]
title = "Special General Body Meeting"
subtitle = "Budget Review"
amortization_months = 10

[[support_staff]]
role = "Plumber"
name = "Kiran"

[[manpower]]
month = "March"
counts = { "Security Guards" = 4 }

[[manpower]]
month = "April"
counts = { "Security Guards" = 3, "Lift Operator" = 1 }

[running_cost]
declared_total = 200000
items = { "Water" = 150000, "Diesel" = 50000 }

[provisions]
declared_total = 100000
items = { "Lift AMC" = 100000 }
"#;
    let data_path = temp_dir.path().join("data.toml");
    tokio::fs::write(&data_path, data_content).await?;

    let mut config = cli_config(&output_path);
    config.data = Some(data_path.to_str().unwrap().to_string());
    config.section = vec![Section::Manpower, Section::Revision];

    let storage = LocalStorage::new(output_path);
    let engine = ReportEngine::new(DashboardPipeline::new(storage, config));
    let outcome = engine.run().await?;

    // 2.00 running + 100000 / 10 / 100000 = 0.10 provisions
    assert!(outcome.rendered.contains("Running Cost / sq ft / month (₹): 2.00"));
    assert!(outcome.rendered.contains("Provisions / sq ft / month (₹): 0.10"));
    assert!(outcome.rendered.contains("Total Maintenance / sq ft / month (₹): 2.10"));
    assert!(outcome.rendered.contains("Security Guards decreased from 4 → 3 (-1)"));
    assert!(outcome.rendered.contains("Lift Operator increased from 0 → 1 (+1)"));
    assert!(!outcome.rendered.contains("Agenda"));
    assert!(outcome.export_path.is_none());

    Ok(())
}

#[tokio::test]
async fn test_mismatched_totals_stop_the_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_path = temp_dir.path().join("data.toml");
    let template = rwa_dashboard::config::data_file::to_toml_string(
        &rwa_dashboard::ReferenceData::builtin(),
    )?;
    let broken = template.replace("declared_total = 1343600", "declared_total = 1343000");
    assert_ne!(template, broken);
    tokio::fs::write(&data_path, broken).await?;

    let mut config = cli_config(temp_dir.path().to_str().unwrap());
    config.data = Some(data_path.to_str().unwrap().to_string());

    let engine = ReportEngine::new(DashboardPipeline::new(
        LocalStorage::new(temp_dir.path().to_str().unwrap().to_string()),
        config,
    ));

    match engine.run().await {
        Err(DashboardError::TotalMismatchError {
            declared, computed, ..
        }) => {
            assert_eq!(declared, 1_343_000);
            assert_eq!(computed, 1_343_600);
        }
        other => panic!("expected a total mismatch, got {:?}", other.map(|_| ())),
    }

    Ok(())
}

#[tokio::test]
async fn test_negative_provision_is_rejected_before_calculation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = cli_config(temp_dir.path().to_str().unwrap());
    config.additional_provision = -1;

    let engine = ReportEngine::new(DashboardPipeline::new(
        LocalStorage::new(temp_dir.path().to_str().unwrap().to_string()),
        config,
    ));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, DashboardError::InvalidInputError { .. }));

    Ok(())
}
