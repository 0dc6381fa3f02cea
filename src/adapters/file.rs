use crate::adapters::memory::InMemoryPropertyRepository;
use crate::core::mapper::PropertiesMapper;
use crate::core::{
    ConfigurationProperty, ConfigurationPropertyRecord, PropertyId, PropertyRepository, Storage,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

pub const DEFAULT_FILE_NAME: &str = "properties.json";

/// On-disk layout of the property store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub updated_at: DateTime<Utc>,
    pub properties: Vec<ConfigurationProperty>,
}

/// Repository that keeps every record in memory and rewrites a JSON snapshot
/// through [`Storage`] after each mutation.
///
/// A mutation reaches the in-memory table only after its snapshot was written.
pub struct FilePropertyRepository<S: Storage> {
    storage: S,
    file_name: String,
    table: InMemoryPropertyRepository,
    // Serialises stage-persist-apply so snapshots are written in order.
    write_lock: Mutex<()>,
}

impl<S: Storage> FilePropertyRepository<S> {
    /// Opens the store, loading the snapshot if one exists.
    pub async fn open(storage: S, file_name: impl Into<String>) -> Result<Self> {
        let file_name = file_name.into();

        let records = if storage.exists(&file_name).await? {
            let data = storage.read_file(&file_name).await?;
            let snapshot: StoreSnapshot = serde_json::from_slice(&data)?;
            tracing::debug!(
                "Loaded {} properties from {} (updated {})",
                snapshot.properties.len(),
                file_name,
                snapshot.updated_at
            );
            snapshot
                .properties
                .iter()
                .map(|dto| PropertiesMapper.to_record(dto))
                .collect()
        } else {
            tracing::info!("No property store at {}, starting empty", file_name);
            Vec::new()
        };

        Ok(Self {
            storage,
            file_name,
            table: InMemoryPropertyRepository::from_records(records),
            write_lock: Mutex::new(()),
        })
    }

    /// Writes `table` to storage and, once that succeeded, makes it current.
    async fn commit(&self, table: BTreeMap<PropertyId, String>) -> Result<()> {
        let properties: Vec<ConfigurationProperty> = table
            .iter()
            .map(|(id, value)| {
                ConfigurationPropertyRecord {
                    id: id.clone(),
                    value: value.clone(),
                }
                .into()
            })
            .collect();
        let snapshot = StoreSnapshot {
            updated_at: Utc::now(),
            properties,
        };
        let data = serde_json::to_vec_pretty(&snapshot)?;
        self.storage.write_file(&self.file_name, &data).await?;
        tracing::debug!(
            "Wrote {} properties to {}",
            snapshot.properties.len(),
            self.file_name
        );

        self.table.replace(table).await;
        Ok(())
    }
}

#[async_trait]
impl<S: Storage> PropertyRepository for FilePropertyRepository<S> {
    async fn find(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<Vec<ConfigurationPropertyRecord>> {
        self.table.find(application, profile, label).await
    }

    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<ConfigurationPropertyRecord>> {
        self.table.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<ConfigurationPropertyRecord>> {
        self.table.find_all().await
    }

    async fn save(
        &self,
        record: ConfigurationPropertyRecord,
    ) -> Result<ConfigurationPropertyRecord> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.table.snapshot().await;
        table.insert(record.id.clone(), record.value.clone());
        self.commit(table).await?;
        Ok(record)
    }

    async fn save_all(
        &self,
        records: Vec<ConfigurationPropertyRecord>,
    ) -> Result<Vec<ConfigurationPropertyRecord>> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.table.snapshot().await;
        for record in &records {
            table.insert(record.id.clone(), record.value.clone());
        }
        self.commit(table).await?;
        Ok(records)
    }

    async fn delete(&self, id: &PropertyId) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.table.snapshot().await;
        if table.remove(id).is_none() {
            return Ok(false);
        }
        self.commit(table).await?;
        Ok(true)
    }

    async fn delete_all(&self, application: &str, profile: &str, label: &str) -> Result<usize> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.table.snapshot().await;
        let before = table.len();
        table.retain(|id, _| !id.in_context(application, profile, label));
        let removed = before - table.len();
        if removed > 0 {
            self.commit(table).await?;
        }
        Ok(removed)
    }
}
