use crate::domain::model::{InputRecord, InvalidInputPolicy, OutputFormat, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Where `path` ends up, for reporting.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn numbers(&self) -> Vec<String>;
    fn input_file(&self) -> Option<&str>;
    fn output_formats(&self) -> Result<Vec<OutputFormat>>;
    fn invalid_input_policy(&self) -> InvalidInputPolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<InputRecord>>;
    async fn transform(&self, records: Vec<InputRecord>) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<Vec<String>>;
}
