pub mod cli;
pub mod data_file;

use crate::core::manpower::NewRolePolicy;
use crate::domain::model::{OutputFormat, Section};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_additional_provision, validate_path, validate_positive_number, Validate,
};
use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rwa-dashboard")]
#[command(about = "Maintenance & cost overview for the RWA general body meeting")]
pub struct CliConfig {
    /// Extra provision in rupees to simulate (new projects, buffers)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub additional_provision: i64,

    /// Months over which provisions are spread; defaults to the data file's value
    #[arg(long)]
    pub amortization_months: Option<u32>,

    /// TOML reference data file; the built-in data is used when omitted
    #[arg(long)]
    pub data: Option<String>,

    /// Sections to render (comma separated); all when omitted
    #[arg(long, value_delimiter = ',')]
    pub section: Vec<Section>,

    /// Report roles that only appear in the later manpower snapshot
    #[arg(long, default_value = "true", action = ArgAction::Set)]
    pub include_new_roles: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Export formats (text, csv, json) bundled into a zip under --output-path
    #[arg(long, value_delimiter = ',')]
    pub export: Vec<OutputFormat>,

    /// Print the reference data as TOML and exit
    #[arg(long)]
    pub print_data_template: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_additional_provision(self.additional_provision)?;

        if let Some(months) = self.amortization_months {
            validate_positive_number("amortization_months", u64::from(months), 1)?;
        }

        if let Some(data) = &self.data {
            validate_path("data", data)?;
        }

        if !self.export.is_empty() {
            validate_path("output_path", &self.output_path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn additional_provision(&self) -> i64 {
        self.additional_provision
    }

    fn amortization_months(&self) -> Option<u32> {
        self.amortization_months
    }

    fn data_file(&self) -> Option<&str> {
        self.data.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn export_formats(&self) -> &[OutputFormat] {
        &self.export
    }

    fn sections(&self) -> &[Section] {
        &self.section
    }

    fn new_role_policy(&self) -> NewRolePolicy {
        if self.include_new_roles {
            NewRolePolicy::Include
        } else {
            NewRolePolicy::Exclude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["rwa-dashboard"]);
        assert_eq!(config.additional_provision, 0);
        assert_eq!(config.amortization_months, None);
        assert!(config.section.is_empty());
        assert!(config.export.is_empty());
        assert_eq!(config.new_role_policy(), NewRolePolicy::Include);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sections_and_exports() {
        let config = CliConfig::parse_from([
            "rwa-dashboard",
            "--additional-provision",
            "9000",
            "--section",
            "provisions,revision",
            "--export",
            "csv,json",
            "--include-new-roles",
            "false",
        ]);
        assert_eq!(config.additional_provision, 9_000);
        assert_eq!(config.sections(), &[Section::Provisions, Section::Revision]);
        assert_eq!(
            config.export_formats(),
            &[OutputFormat::Csv, OutputFormat::Json]
        );
        assert_eq!(config.new_role_policy(), NewRolePolicy::Exclude);
    }

    #[test]
    fn test_negative_provision_fails_validation() {
        let config = CliConfig::parse_from(["rwa-dashboard", "--additional-provision", "-1000"]);
        assert_eq!(config.additional_provision, -1_000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_amortization_fails_validation() {
        let config = CliConfig::parse_from(["rwa-dashboard", "--amortization-months", "0"]);
        assert!(config.validate().is_err());
    }
}
