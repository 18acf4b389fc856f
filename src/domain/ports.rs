use crate::domain::model::{Team, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn roster_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn formats(&self) -> &[String];
    fn seed(&self) -> Option<u64>;
    fn export_invalid(&self) -> bool;
}

/// The load stage returns `None` when export was withheld because the schedule
/// failed validation and the configuration does not allow exporting it anyway.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Team>>;
    async fn transform(&self, roster: Vec<Team>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<Option<String>>;
}
