use crate::core::manpower::{compare_manpower, summarize, ManpowerSummary, NewRolePolicy};
use crate::core::metrics::derive_metrics;
use crate::domain::model::{
    CostTable, DashboardInputs, DerivedMetrics, ManpowerChange, ReferenceData, StaffRecord,
};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRow {
    pub head: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostView {
    pub rows: Vec<CostRow>,
    pub total: u64,
}

impl CostView {
    fn in_table_order(table: &CostTable, name: &str) -> Result<Self> {
        Ok(Self {
            rows: table
                .items
                .iter()
                .map(|(head, amount)| CostRow {
                    head: head.clone(),
                    amount: *amount,
                })
                .collect(),
            total: table.total(name)?,
        })
    }

    fn largest_first(table: &CostTable, name: &str) -> Result<Self> {
        Ok(Self {
            rows: table
                .sorted_desc()
                .into_iter()
                .map(|(head, amount)| CostRow {
                    head: head.to_string(),
                    amount,
                })
                .collect(),
            total: table.total(name)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeView {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityView {
    pub manager: String,
    pub partner: String,
    pub staff: Vec<StaffRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManpowerView {
    pub rows: Vec<ManpowerChange>,
    pub summary: ManpowerSummary,
}

/// Everything the dashboard shows for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub community: String,
    pub title: String,
    pub subtitle: String,
    pub total_sqft: u64,
    pub inputs: DashboardInputs,
    pub agenda: Vec<String>,
    pub committee: CommitteeView,
    pub maintenance_overview: Vec<String>,
    pub facility: FacilityView,
    pub manpower: ManpowerView,
    pub running_cost: CostView,
    /// Sorted by amount, largest first.
    pub provisions: CostView,
    pub metrics: DerivedMetrics,
}

pub fn build_report(
    data: &ReferenceData,
    inputs: &DashboardInputs,
    policy: NewRolePolicy,
) -> Result<DashboardReport> {
    let metrics = derive_metrics(data, inputs)?;

    let (previous, current) = data.manpower_pair()?;
    let rows = compare_manpower(previous, current, policy);
    let summary = summarize(previous, current, &rows)?;

    let (left, right) = data.committee_columns();

    Ok(DashboardReport {
        community: data.community.name.clone(),
        title: data.meeting.title.clone(),
        subtitle: data.meeting.subtitle.clone(),
        total_sqft: data.community.total_sqft,
        inputs: *inputs,
        agenda: data.meeting.agenda.clone(),
        committee: CommitteeView {
            left: left.to_vec(),
            right: right.to_vec(),
        },
        maintenance_overview: data.meeting.overview_notes.clone(),
        facility: FacilityView {
            manager: data.community.facility_manager.clone(),
            partner: data.community.facility_partner.clone(),
            staff: data.support_staff.clone(),
        },
        manpower: ManpowerView { rows, summary },
        running_cost: CostView::in_table_order(&data.running_cost, "running_cost")?,
        provisions: CostView::largest_first(&data.provisions, "provisions")?,
        metrics,
    })
}
