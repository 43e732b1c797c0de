use crate::domain::model::{checked_sum, ManpowerChange, ManpowerSnapshot, Trend};
use crate::utils::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};

/// What to do with roles that only appear in the later snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewRolePolicy {
    /// Report them with an implied previous count of zero.
    #[default]
    Include,
    /// Leave them out; only roles of the earlier snapshot are compared.
    Exclude,
}

/// Month-over-month headcount change per role.
///
/// Roles follow the earlier snapshot's order. A role missing from the later
/// snapshot keeps its earlier count (reported as unchanged). Roles that only
/// exist in the later snapshot are handled according to `policy` and listed
/// after the others.
pub fn compare_manpower(
    previous: &ManpowerSnapshot,
    current: &ManpowerSnapshot,
    policy: NewRolePolicy,
) -> Vec<ManpowerChange> {
    let mut rows: Vec<ManpowerChange> = previous
        .counts
        .iter()
        .map(|(role, &before)| {
            let after = current.get(role);
            change_row(role, before, after.unwrap_or(before), true, after.is_some())
        })
        .collect();

    let new_roles: Vec<&String> = current
        .counts
        .keys()
        .filter(|role| !previous.counts.contains_key(role.as_str()))
        .collect();

    if !new_roles.is_empty() {
        match policy {
            NewRolePolicy::Include => {
                for role in new_roles {
                    let after = current.get(role).unwrap_or(0);
                    rows.push(change_row(role, 0, after, false, true));
                }
            }
            NewRolePolicy::Exclude => {
                tracing::debug!(
                    "Excluding {} role(s) only present in {}",
                    new_roles.len(),
                    current.month
                );
            }
        }
    }

    rows
}

fn change_row(
    role: &str,
    previous: u32,
    current: u32,
    previous_present: bool,
    current_present: bool,
) -> ManpowerChange {
    let change = i64::from(current) - i64::from(previous);
    ManpowerChange {
        role: role.to_string(),
        previous,
        current,
        change,
        trend: Trend::from_change(change),
        previous_present,
        current_present,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManpowerSummary {
    pub previous_month: String,
    pub current_month: String,
    pub previous_total: u32,
    pub current_total: u32,
    pub increased: Vec<String>,
    pub decreased: Vec<String>,
    pub unchanged: usize,
}

/// Totals and changed roles over the rows of [`compare_manpower`].
///
/// Totals are column sums of the table, not [`ManpowerSnapshot::headcount`]:
/// carried-over counts and the new-role policy make the two differ.
pub fn summarize(
    previous: &ManpowerSnapshot,
    current: &ManpowerSnapshot,
    rows: &[ManpowerChange],
) -> Result<ManpowerSummary> {
    let by_trend = |trend: Trend| -> Vec<String> {
        rows.iter()
            .filter(|row| row.trend == trend)
            .map(|row| row.role.clone())
            .collect()
    };

    let overflow = |month: &str| DashboardError::ProcessingError {
        message: format!("{} headcount total exceeds the supported range", month),
    };
    let previous_total = checked_sum(rows.iter().map(|row| row.previous))
        .ok_or_else(|| overflow(&previous.month))?;
    let current_total = checked_sum(rows.iter().map(|row| row.current))
        .ok_or_else(|| overflow(&current.month))?;

    Ok(ManpowerSummary {
        previous_month: previous.month.clone(),
        current_month: current.month.clone(),
        previous_total,
        current_total,
        increased: by_trend(Trend::Increase),
        decreased: by_trend(Trend::Decrease),
        unchanged: rows.iter().filter(|row| row.trend == Trend::Unchanged).count(),
    })
}
