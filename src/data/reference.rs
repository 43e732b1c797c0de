//! Compiled-in reference data for the Candeur Sunshine introductory GBM.
//!
//! The tables are exposed as constants for direct reads and gathered into a
//! [`ReferenceData`] value by [`ReferenceData::builtin`]. Totals are declared
//! alongside their line items and checked by [`ReferenceData::verify`].

use crate::domain::model::{
    Community, CostTable, ManpowerSnapshot, Meeting, ReferenceData, StaffRecord,
    DEFAULT_AMORTIZATION_MONTHS,
};

pub const COMMUNITY_NAME: &str = "Candeur Sunshine Residents Welfare Association";

/// Total built-up area in sq ft.
pub const TOTAL_SQFT: u64 = 405_770;

pub const FACILITY_MANAGER: &str = "Hemanth";
pub const FACILITY_PARTNER: &str = "Idencies Facility Management Services";

pub const MEETING_TITLE: &str = "Introductory General Body Meeting";
pub const MEETING_SUBTITLE: &str = "Maintenance & Cost Overview Dashboard";

pub const AGENDA: [&str; 5] = [
    "Welcome & Introduction to the Residents Welfare Association",
    "Overview of the Ongoing Maintenance Processes",
    "Clarification of Inclusions and Exclusions under Maintenance",
    "Discussion on Current Resident Issues and Proposed Resolutions",
    "Open Forum for Questions, Feedback, and Suggestions",
];

pub const OVERVIEW_NOTES: [&str; 5] = [
    "Maintenance operations were officially handed over on 1st November.",
    "Evaluation of the current system is still in progress: reviewing existing processes, identifying areas for improvement and implementing necessary process changes.",
    "Partnered with Idencies Facility Management Services for day-to-day operations.",
    "Facility Manager role was restructured after initial transition challenges.",
    "Goal: build a predictable, efficient, and resident-centric maintenance system.",
];

pub const EXEC_MEMBERS: [&str; 12] = [
    "Harish Siddareddy",
    "Guru Prasad Barik",
    "Sangram Sarkar",
    "Siddharth Maheshwari",
    "M. V. S. R. Raviteja",
    "M. Rupesh Kumar",
    "Jayanthi Venkata Ravisankar",
    "Alok Kumar Sahu",
    "Nilesh Arvind Panchal",
    "Prajesh T O",
    "Nagesh Babu Kattamuri",
    "Pavan Praneshrao Joshi",
];

/// (role, name)
pub const SUPPORT_STAFF: [(&str, &str); 9] = [
    ("Electrician", "Ishwar"),
    ("Plumber", "Sushant"),
    ("MST Technician", "Chandra"),
    ("STP/WTP Operator", "Nazim"),
    ("Gardener", "Subharau"),
    ("Gardener", "Nagaraj"),
    ("Housekeeping Supervisor", "Parkash"),
    ("Security Supervisor (Day)", "Rajesh"),
    ("Security Supervisor (Night)", "Atul"),
];

pub const MANPOWER_NOV: [(&str, u32); 10] = [
    ("Facility Manager", 1),
    ("Security Guards", 5),
    ("Security Supervisors", 2),
    ("Housekeeping Staff", 8),
    ("Housekeeping Supervisor", 1),
    ("Electrician", 1),
    ("Plumber", 1),
    ("Multi Technician (Night)", 1),
    ("Gardener", 1),
    ("STP/WTP Operator", 1),
];

pub const MANPOWER_DEC: [(&str, u32); 10] = [
    ("Facility Manager", 1),
    ("Security Guards", 5),
    ("Security Supervisors", 2),
    ("Housekeeping Staff", 10),
    ("Housekeeping Supervisor", 1),
    ("Electrician", 1),
    ("Plumber", 1),
    ("Multi Technician (Night)", 1),
    ("Gardener", 2),
    ("STP/WTP Operator", 1),
];

/// Monthly running cost heads.
pub const RUNNING_COST: [(&str, u64); 7] = [
    ("Water", 525_000),
    ("Idencies FM", 550_000),
    ("Diesel", 46_000),
    ("Electricity", 170_000),
    ("Garbage", 36_400),
    ("R&M", 15_000),
    ("Drinking Water", 1_200),
];

pub const TOTAL_RUNNING: u64 = 1_343_600;

/// Provisions / capex heads.
pub const PROVISIONS: [(&str, u64); 13] = [
    ("DG panel", 138_178),
    ("WTP motors", 60_000),
    ("Lift AMC", 1_288_000),
    ("DG AMC", 88_000),
    ("Fire AMC", 75_000),
    ("Audit + renewal", 44_000),
    ("Fire license", 90_000),
    ("Security cameras", 300_000),
    ("OHT cleaning", 39_000),
    ("Lift cameras", 140_000),
    ("Speed breakers", 10_000),
    ("Lights", 13_000),
    ("Ladder", 12_000),
];

pub const TOTAL_PROVISIONS: u64 = 2_297_178;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            executive_committee: owned(&EXEC_MEMBERS),
            community: Community {
                name: COMMUNITY_NAME.to_string(),
                total_sqft: TOTAL_SQFT,
                facility_manager: FACILITY_MANAGER.to_string(),
                facility_partner: FACILITY_PARTNER.to_string(),
            },
            meeting: Meeting {
                title: MEETING_TITLE.to_string(),
                subtitle: MEETING_SUBTITLE.to_string(),
                amortization_months: DEFAULT_AMORTIZATION_MONTHS,
                agenda: owned(&AGENDA),
                overview_notes: owned(&OVERVIEW_NOTES),
            },
            support_staff: SUPPORT_STAFF
                .iter()
                .map(|(role, name)| StaffRecord::new(role, name))
                .collect(),
            manpower: vec![
                ManpowerSnapshot::new("November", &MANPOWER_NOV),
                ManpowerSnapshot::new("December", &MANPOWER_DEC),
            ],
            running_cost: CostTable::new(&RUNNING_COST, Some(TOTAL_RUNNING)),
            provisions: CostTable::new(&PROVISIONS, Some(TOTAL_PROVISIONS)),
        }
    }
}
