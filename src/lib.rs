pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{
    engine::ReportEngine,
    manpower::{compare_manpower, NewRolePolicy},
    metrics::{compute_common, MetricsInput},
    pipeline::DashboardPipeline,
    report::{build_report, DashboardReport},
};
pub use domain::model::{DashboardInputs, DerivedMetrics, ReferenceData};
pub use utils::error::{DashboardError, Result};
