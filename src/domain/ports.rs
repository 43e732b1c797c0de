use crate::core::manpower::NewRolePolicy;
use crate::core::report::DashboardReport;
use crate::domain::model::{OutputFormat, ReferenceData, Section};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Raw user input; negative values are rejected before any calculation.
    fn additional_provision(&self) -> i64;
    fn amortization_months(&self) -> Option<u32>;
    fn data_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn export_formats(&self) -> &[OutputFormat];
    /// Empty means every section.
    fn sections(&self) -> &[Section];
    fn new_role_policy(&self) -> NewRolePolicy;
}

/// Outcome of the load stage.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub rendered: String,
    pub export_path: Option<String>,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ReferenceData>;
    async fn transform(&self, data: ReferenceData) -> Result<DashboardReport>;
    async fn load(&self, report: DashboardReport) -> Result<LoadOutcome>;
}
