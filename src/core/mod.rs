pub mod engine;
pub mod manpower;
pub mod metrics;
pub mod pipeline;
pub mod render;
pub mod report;

pub use crate::domain::model::{DashboardInputs, DerivedMetrics, ReferenceData};
pub use crate::domain::ports::{ConfigProvider, LoadOutcome, Pipeline, Storage};
pub use crate::utils::error::Result;
