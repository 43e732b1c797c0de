//! TOML reference data files.
//!
//! A data file has the same shape as [`ReferenceData`] and replaces the
//! built-in tables wholesale. `${VAR}` placeholders are substituted from the
//! environment before parsing.

use crate::domain::model::ReferenceData;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use std::path::Path;

/// Loads reference data from a TOML file.
pub fn load_reference_data<P: AsRef<Path>>(path: P) -> Result<ReferenceData> {
    tracing::info!("📁 Loading reference data from {}", path.as_ref().display());
    let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
    parse_reference_data(&content)
}

/// Parses reference data from TOML text.
pub fn parse_reference_data(content: &str) -> Result<ReferenceData> {
    let processed_content = substitute_env_vars(content)?;

    toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigValidationError {
        field: "toml_parsing".to_string(),
        message: format!("TOML parsing error: {}", e),
    })
}

/// Renders reference data as an editable TOML data file.
pub fn to_toml_string(data: &ReferenceData) -> Result<String> {
    Ok(toml::to_string_pretty(data)?)
}

// Unset variables are left as-is so the parse error names them.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashboardError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for ReferenceData {
    fn validate(&self) -> Result<()> {
        self.verify().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_DATA: &str = r#"
executive_committee = ["A. Member", "B. Member", "C. Member"]

[community]
name = "Test Residency"
total_sqft = 100000
facility_manager = "Ravi"
facility_partner = "Acme FM"

[meeting]
title = "Annual General Body Meeting"
subtitle = "Cost Overview"
amortization_months = 12

[[support_staff]]
role = "Plumber"
name = "Kiran"

[[manpower]]
month = "January"
counts = { "Security Guards" = 4, "Plumber" = 1 }

[[manpower]]
month = "February"
counts = { "Security Guards" = 3, "Plumber" = 1 }

[running_cost]
declared_total = 150000
items = { "Water" = 100000, "R&M" = 50000 }

[provisions]
items = { "Lift AMC" = 120000 }
"#;

    #[test]
    fn test_parse_small_data_file() {
        let data = parse_reference_data(SMALL_DATA).unwrap();

        assert_eq!(data.community.total_sqft, 100_000);
        assert_eq!(data.meeting.amortization_months, 12);
        assert!(data.meeting.agenda.is_empty());
        assert_eq!(data.manpower[1].get("Security Guards"), Some(3));
        assert_eq!(
            data.running_cost.items.keys().collect::<Vec<_>>(),
            vec!["Water", "R&M"]
        );
        assert_eq!(data.provisions.declared_total(), None);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_amortization_defaults_to_nine_months() {
        let content = SMALL_DATA.replace("amortization_months = 12\n", "");
        let data = parse_reference_data(&content).unwrap();
        assert_eq!(data.meeting.amortization_months, 9);
    }

    #[test]
    fn test_declared_total_mismatch_fails_validation() {
        let content = SMALL_DATA.replace("declared_total = 150000", "declared_total = 140000");
        let data = parse_reference_data(&content).unwrap();
        assert!(matches!(
            data.validate(),
            Err(DashboardError::TotalMismatchError { computed: 150_000, .. })
        ));
    }

    #[test]
    fn test_zero_amortization_period_fails_validation() {
        let content = SMALL_DATA.replace("amortization_months = 12", "amortization_months = 0");
        let data = parse_reference_data(&content).unwrap();
        assert!(matches!(
            data.validate(),
            Err(DashboardError::DegenerateConfigError { ref field, .. })
                if field == "meeting.amortization_months"
        ));
    }

    #[test]
    fn test_single_manpower_snapshot_fails_validation() {
        let content = SMALL_DATA.replace(
            "[[manpower]]\nmonth = \"February\"\ncounts = { \"Security Guards\" = 3, \"Plumber\" = 1 }\n",
            "",
        );
        let data = parse_reference_data(&content).unwrap();
        assert_eq!(data.manpower.len(), 1);
        assert!(matches!(
            data.validate(),
            Err(DashboardError::ConfigValidationError { ref field, .. }) if field == "manpower"
        ));
    }

    #[test]
    fn test_oversized_line_items_fail_validation() {
        let content = SMALL_DATA
            .replace(
                r#"items = { "Water" = 100000, "R&M" = 50000 }"#,
                r#"items = { "A" = 9000000000000000000, "B" = 9000000000000000000, "C" = 9000000000000000000 }"#,
            )
            .replace("declared_total = 150000", "declared_total = 1");
        let data = parse_reference_data(&content).unwrap();
        assert!(matches!(
            data.validate(),
            Err(DashboardError::InvalidConfigValueError { ref field, .. })
                if field == "running_cost.items"
        ));
    }

    #[test]
    fn test_oversized_headcount_fails_validation() {
        let content = SMALL_DATA.replace(
            r#"counts = { "Security Guards" = 3, "Plumber" = 1 }"#,
            r#"counts = { "Guards" = 3000000000, "Cooks" = 3000000000 }"#,
        );
        let data = parse_reference_data(&content).unwrap();
        assert!(matches!(
            data.validate(),
            Err(DashboardError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RWA_TEST_TOTAL_SQFT", "250000");

        let content = SMALL_DATA.replace("total_sqft = 100000", "total_sqft = ${RWA_TEST_TOTAL_SQFT}");
        let data = parse_reference_data(&content).unwrap();
        assert_eq!(data.community.total_sqft, 250_000);

        std::env::remove_var("RWA_TEST_TOTAL_SQFT");
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = parse_reference_data("[community\nname = 1").unwrap_err();
        assert!(matches!(err, DashboardError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SMALL_DATA.as_bytes()).unwrap();

        let data = load_reference_data(temp_file.path()).unwrap();
        assert_eq!(data.community.name, "Test Residency");
    }

    #[test]
    fn test_builtin_template_parses_back() {
        let builtin = ReferenceData::builtin();
        let text = to_toml_string(&builtin).unwrap();
        assert_eq!(parse_reference_data(&text).unwrap(), builtin);
    }
}
