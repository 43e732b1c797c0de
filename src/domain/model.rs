use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::validate_non_empty_string;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Months over which provisions are spread when nothing else is configured.
pub const DEFAULT_AMORTIZATION_MONTHS: u32 = 9;

fn default_amortization_months() -> u32 {
    DEFAULT_AMORTIZATION_MONTHS
}

/// Unsigned counters summed without wrapping.
pub(crate) trait Tally: Copy {
    const ZERO: Self;
    fn checked_add(self, other: Self) -> Option<Self>;
}

impl Tally for u32 {
    const ZERO: Self = 0;
    fn checked_add(self, other: Self) -> Option<Self> {
        u32::checked_add(self, other)
    }
}

impl Tally for u64 {
    const ZERO: Self = 0;
    fn checked_add(self, other: Self) -> Option<Self> {
        u64::checked_add(self, other)
    }
}

/// `None` on overflow.
pub(crate) fn checked_sum<T, I>(values: I) -> Option<T>
where
    T: Tally,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .try_fold(T::ZERO, |acc, value| acc.checked_add(value))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub role: String,
    pub name: String,
}

impl StaffRecord {
    pub fn new(role: &str, name: &str) -> Self {
        Self {
            role: role.to_string(),
            name: name.to_string(),
        }
    }
}

/// Headcount per role for one observed month. Role order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManpowerSnapshot {
    pub month: String,
    pub counts: IndexMap<String, u32>,
}

impl ManpowerSnapshot {
    pub fn new(month: &str, counts: &[(&str, u32)]) -> Self {
        Self {
            month: month.to_string(),
            counts: counts
                .iter()
                .map(|(role, count)| (role.to_string(), *count))
                .collect(),
        }
    }

    pub fn get(&self, role: &str) -> Option<u32> {
        self.counts.get(role).copied()
    }

    /// Sum of the counts recorded for this month.
    pub fn headcount(&self) -> Result<u32> {
        checked_sum(self.counts.values().copied()).ok_or_else(|| {
            DashboardError::InvalidConfigValueError {
                field: format!("manpower.{}", self.month),
                value: format!("{} roles", self.counts.len()),
                reason: "headcount exceeds the supported range".to_string(),
            }
        })
    }
}

/// Cost heads with amounts in whole rupees, plus the total the data source
/// claims for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_total: Option<u64>,
    pub items: IndexMap<String, u64>,
}

impl CostTable {
    pub fn new(items: &[(&str, u64)], declared_total: Option<u64>) -> Self {
        Self {
            declared_total,
            items: items
                .iter()
                .map(|(head, amount)| (head.to_string(), *amount))
                .collect(),
        }
    }

    /// Sum of the line items.
    pub fn total(&self, table: &str) -> Result<u64> {
        checked_sum(self.items.values().copied()).ok_or_else(|| {
            DashboardError::InvalidConfigValueError {
                field: format!("{}.items", table),
                value: format!("{} line items", self.items.len()),
                reason: "sum exceeds the supported range".to_string(),
            }
        })
    }

    pub fn declared_total(&self) -> Option<u64> {
        self.declared_total
    }

    /// Line items by amount, largest first. Ties keep their table order.
    pub fn sorted_desc(&self) -> Vec<(&str, u64)> {
        let mut rows: Vec<(&str, u64)> = self
            .items
            .iter()
            .map(|(head, amount)| (head.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    /// Derives the total and checks it against the declared one, if any.
    pub fn verify(&self, table: &str) -> Result<u64> {
        let computed = self.total(table)?;
        match self.declared_total {
            Some(declared) if declared != computed => Err(DashboardError::TotalMismatchError {
                table: table.to_string(),
                declared,
                computed,
            }),
            _ => Ok(computed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub name: String,
    /// Total built-up area in square feet.
    pub total_sqft: u64,
    pub facility_manager: String,
    pub facility_partner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub title: String,
    pub subtitle: String,
    #[serde(default = "default_amortization_months")]
    pub amortization_months: u32,
    #[serde(default)]
    pub agenda: Vec<String>,
    #[serde(default)]
    pub overview_notes: Vec<String>,
}

/// Everything the dashboard displays before any user input is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub executive_committee: Vec<String>,
    pub community: Community,
    pub meeting: Meeting,
    pub support_staff: Vec<StaffRecord>,
    pub manpower: Vec<ManpowerSnapshot>,
    pub running_cost: CostTable,
    pub provisions: CostTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedTotals {
    pub running_cost: u64,
    pub provisions: u64,
}

impl ReferenceData {
    /// Checks the structural assumptions the calculations rely on and returns
    /// totals derived from the line items.
    pub fn verify(&self) -> Result<VerifiedTotals> {
        validate_non_empty_string("community.name", &self.community.name)?;

        if self.community.total_sqft == 0 {
            return Err(DashboardError::DegenerateConfigError {
                field: "community.total_sqft".to_string(),
                reason: "built-up area must be positive".to_string(),
            });
        }
        if self.meeting.amortization_months == 0 {
            return Err(DashboardError::DegenerateConfigError {
                field: "meeting.amortization_months".to_string(),
                reason: "amortization period must be at least one month".to_string(),
            });
        }
        if self.manpower.len() < 2 {
            return Err(DashboardError::ConfigValidationError {
                field: "manpower".to_string(),
                message: format!(
                    "two monthly snapshots are needed for the comparison, found {}",
                    self.manpower.len()
                ),
            });
        }

        for snapshot in &self.manpower {
            snapshot.headcount()?;
        }

        Ok(VerifiedTotals {
            running_cost: self.running_cost.verify("running_cost")?,
            provisions: self.provisions.verify("provisions")?,
        })
    }

    /// Roster split into two display columns; the right one takes the odd name.
    pub fn committee_columns(&self) -> (&[String], &[String]) {
        let half = self.executive_committee.len() / 2;
        self.executive_committee.split_at(half)
    }

    /// The two most recent snapshots, oldest first.
    pub fn manpower_pair(&self) -> Result<(&ManpowerSnapshot, &ManpowerSnapshot)> {
        match self.manpower.as_slice() {
            [.., previous, current] => Ok((previous, current)),
            _ => Err(DashboardError::MissingConfigError {
                field: "manpower".to_string(),
            }),
        }
    }
}

/// Request-scoped inputs of one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardInputs {
    pub additional_provision: u64,
    pub amortization_months: u32,
}

impl DashboardInputs {
    pub fn new(additional_provision: u64, amortization_months: u32) -> Self {
        Self {
            additional_provision,
            amortization_months,
        }
    }
}

impl Default for DashboardInputs {
    fn default() -> Self {
        Self::new(0, DEFAULT_AMORTIZATION_MONTHS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub running_cost_per_area_per_month: f64,
    pub effective_total_provisions: u64,
    pub provision_per_month: f64,
    pub provision_per_area_per_month: f64,
    pub total_maintenance_per_area_per_month: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increase,
    Decrease,
    Unchanged,
}

impl Trend {
    pub fn from_change(change: i64) -> Self {
        match change {
            c if c > 0 => Trend::Increase,
            c if c < 0 => Trend::Decrease,
            _ => Trend::Unchanged,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManpowerChange {
    pub role: String,
    pub previous: u32,
    pub current: u32,
    pub change: i64,
    pub trend: Trend,
    /// False when the role only exists in the later snapshot.
    pub previous_present: bool,
    /// False when the later snapshot omits the role and the earlier count was carried over.
    pub current_present: bool,
}

impl ManpowerChange {
    pub fn indicator(&self) -> String {
        match self.trend {
            Trend::Increase => format!("⬆️ +{}", self.change),
            Trend::Decrease => format!("⬇️ {}", self.change),
            Trend::Unchanged => "➖ 0".to_string(),
        }
    }
}

/// The eight views of the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Agenda,
    Committee,
    MaintenanceOverview,
    Staff,
    Manpower,
    RunningCost,
    Provisions,
    Revision,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Agenda,
        Section::Committee,
        Section::MaintenanceOverview,
        Section::Staff,
        Section::Manpower,
        Section::RunningCost,
        Section::Provisions,
        Section::Revision,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Agenda => "agenda",
            Section::Committee => "committee",
            Section::MaintenanceOverview => "maintenance-overview",
            Section::Staff => "staff",
            Section::Manpower => "manpower",
            Section::RunningCost => "running-cost",
            Section::Provisions => "provisions",
            Section::Revision => "revision",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Agenda => "📋 Agenda",
            Section::Committee => "👥 Executive Committee",
            Section::MaintenanceOverview => "🛠️ Maintenance Overview",
            Section::Staff => "🏗️ Facility Management & Staff",
            Section::Manpower => "👨‍🔧 Manpower",
            Section::RunningCost => "💰 Running Cost",
            Section::Provisions => "📦 Provisions / Capex",
            Section::Revision => "📊 Maintenance Revision",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.key() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = Section::ALL.iter().map(|s| s.key()).collect();
                format!("unknown section '{}', expected one of: {}", s, valid.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn key(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported format '{}', expected one of: text, csv, json",
                other
            )),
        }
    }
}
