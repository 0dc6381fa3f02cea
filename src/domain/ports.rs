use crate::domain::model::{ConfigurationPropertyRecord, PropertyId};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
}

/// Persistence port for configuration property records.
///
/// Records are unique on their [`PropertyId`]; `save` replaces the value of an
/// existing record with the same id.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<Vec<ConfigurationPropertyRecord>>;
    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<ConfigurationPropertyRecord>>;
    async fn find_all(&self) -> Result<Vec<ConfigurationPropertyRecord>>;
    async fn save(&self, record: ConfigurationPropertyRecord)
        -> Result<ConfigurationPropertyRecord>;
    async fn save_all(
        &self,
        records: Vec<ConfigurationPropertyRecord>,
    ) -> Result<Vec<ConfigurationPropertyRecord>>;
    async fn delete(&self, id: &PropertyId) -> Result<bool>;
    async fn delete_all(&self, application: &str, profile: &str, label: &str) -> Result<usize>;
}
