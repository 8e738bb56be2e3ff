use crate::domain::model::{FilteredSet, Record};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_file(&self) -> &str;
    fn brand(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn quote_fields(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<FilteredSet>;
    async fn load(&self, result: FilteredSet) -> Result<String>;
}
