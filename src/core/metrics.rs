//! Per-area, per-month maintenance metrics.
//!
//! Every value is recomputed from scratch on each call; nothing is cached or
//! carried between calls.

use crate::domain::model::{DashboardInputs, DerivedMetrics, ReferenceData, VerifiedTotals};
use crate::utils::error::{DashboardError, Result};

/// Inputs of [`compute_common`]. Amounts are whole rupees, area is sq ft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsInput {
    pub total_running_cost: u64,
    pub total_area: u64,
    pub base_provisions: u64,
    pub additional_provision: u64,
    pub amortization_months: u32,
}

impl MetricsInput {
    pub fn new(totals: VerifiedTotals, total_area: u64, inputs: &DashboardInputs) -> Self {
        Self {
            total_running_cost: totals.running_cost,
            total_area,
            base_provisions: totals.provisions,
            additional_provision: inputs.additional_provision,
            amortization_months: inputs.amortization_months,
        }
    }
}

pub fn compute_common(input: &MetricsInput) -> Result<DerivedMetrics> {
    if input.total_area == 0 {
        return Err(DashboardError::DegenerateConfigError {
            field: "total_area".to_string(),
            reason: "per-area metrics are undefined for a zero area".to_string(),
        });
    }
    if input.amortization_months == 0 {
        return Err(DashboardError::DegenerateConfigError {
            field: "amortization_months".to_string(),
            reason: "provisions cannot be spread over zero months".to_string(),
        });
    }

    let effective_total_provisions = input
        .base_provisions
        .checked_add(input.additional_provision)
        .ok_or_else(|| DashboardError::InvalidInputError {
            field: "additional_provision".to_string(),
            value: input.additional_provision.to_string(),
            reason: "effective provisions overflow".to_string(),
        })?;

    let area = input.total_area as f64;
    let running_cost_per_area_per_month = input.total_running_cost as f64 / area;
    let provision_per_month =
        effective_total_provisions as f64 / f64::from(input.amortization_months);
    let provision_per_area_per_month = provision_per_month / area;

    Ok(DerivedMetrics {
        running_cost_per_area_per_month,
        effective_total_provisions,
        provision_per_month,
        provision_per_area_per_month,
        total_maintenance_per_area_per_month: running_cost_per_area_per_month
            + provision_per_area_per_month,
    })
}

/// Verifies the reference data and computes its metrics for one set of inputs.
pub fn derive_metrics(data: &ReferenceData, inputs: &DashboardInputs) -> Result<DerivedMetrics> {
    let totals = data.verify()?;
    let input = MetricsInput::new(totals, data.community.total_sqft, inputs);
    tracing::debug!(
        additional_provision = input.additional_provision,
        amortization_months = input.amortization_months,
        "Computing derived metrics"
    );
    compute_common(&input)
}
