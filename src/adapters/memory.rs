use crate::core::{ConfigurationPropertyRecord, PropertyId, PropertyRepository};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Repository backed by an ordered map keyed on the composite identity.
#[derive(Debug, Default)]
pub struct InMemoryPropertyRepository {
    table: RwLock<BTreeMap<PropertyId, String>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ConfigurationPropertyRecord>,
    {
        let table = records
            .into_iter()
            .map(|record| (record.id, record.value))
            .collect();
        Self {
            table: RwLock::new(table),
        }
    }

    /// Copy of the current table, for callers that stage a change before applying it.
    pub(crate) async fn snapshot(&self) -> BTreeMap<PropertyId, String> {
        self.table.read().await.clone()
    }

    pub(crate) async fn replace(&self, table: BTreeMap<PropertyId, String>) {
        *self.table.write().await = table;
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}

fn to_record(id: &PropertyId, value: &str) -> ConfigurationPropertyRecord {
    ConfigurationPropertyRecord {
        id: id.clone(),
        value: value.to_string(),
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<Vec<ConfigurationPropertyRecord>> {
        let table = self.table.read().await;
        Ok(table
            .iter()
            .filter(|(id, _)| id.in_context(application, profile, label))
            .map(|(id, value)| to_record(id, value))
            .collect())
    }

    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<ConfigurationPropertyRecord>> {
        let table = self.table.read().await;
        Ok(table.get(id).map(|value| to_record(id, value)))
    }

    async fn find_all(&self) -> Result<Vec<ConfigurationPropertyRecord>> {
        let table = self.table.read().await;
        Ok(table.iter().map(|(id, value)| to_record(id, value)).collect())
    }

    async fn save(
        &self,
        record: ConfigurationPropertyRecord,
    ) -> Result<ConfigurationPropertyRecord> {
        let mut table = self.table.write().await;
        table.insert(record.id.clone(), record.value.clone());
        Ok(record)
    }

    async fn save_all(
        &self,
        records: Vec<ConfigurationPropertyRecord>,
    ) -> Result<Vec<ConfigurationPropertyRecord>> {
        let mut table = self.table.write().await;
        for record in &records {
            table.insert(record.id.clone(), record.value.clone());
        }
        Ok(records)
    }

    async fn delete(&self, id: &PropertyId) -> Result<bool> {
        let mut table = self.table.write().await;
        Ok(table.remove(id).is_some())
    }

    async fn delete_all(&self, application: &str, profile: &str, label: &str) -> Result<usize> {
        let mut table = self.table.write().await;
        let before = table.len();
        table.retain(|id, _| !id.in_context(application, profile, label));
        Ok(before - table.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(profile: &str, key: &str, value: &str) -> ConfigurationPropertyRecord {
        ConfigurationPropertyRecord {
            id: PropertyId::new("svc", profile, "main", key),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_save_is_upsert_on_identity() {
        tokio_test::block_on(async {
            let repo = InMemoryPropertyRepository::new();
            repo.save(record("dev", "timeout", "30")).await.unwrap();
            repo.save(record("dev", "timeout", "60")).await.unwrap();
            repo.save(record("prod", "timeout", "90")).await.unwrap();

            assert_eq!(repo.len().await, 2);
            let found = repo
                .find_by_id(&PropertyId::new("svc", "dev", "main", "timeout"))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.value, "60");
        });
    }

    #[tokio::test]
    async fn test_find_returns_context_sorted_by_key() {
        let repo = InMemoryPropertyRepository::from_records(vec![
            record("dev", "z", "1"),
            record("prod", "a", "2"),
            record("dev", "a", "3"),
        ]);

        let keys: Vec<String> = repo
            .find("svc", "dev", "main")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id.key)
            .collect();
        assert_eq!(keys, vec!["a", "z"]);
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryPropertyRepository::from_records(vec![record("dev", "a", "1")]);
        let id = PropertyId::new("svc", "dev", "main", "a");

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_all_counts_removed() {
        let repo = InMemoryPropertyRepository::from_records(vec![
            record("dev", "a", "1"),
            record("dev", "b", "2"),
            record("prod", "a", "3"),
        ]);

        assert_eq!(repo.delete_all("svc", "dev", "main").await.unwrap(), 2);
        assert_eq!(repo.delete_all("svc", "dev", "main").await.unwrap(), 0);
        assert_eq!(repo.len().await, 1);
    }
}
