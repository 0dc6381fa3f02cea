use crate::core::mapper::PropertiesMapper;
use crate::core::{
    ConfigurationProperty, NewConfigurationProperties, PropertyId, PropertyRepository,
};
use crate::utils::error::{PropertiesError, Result};
use crate::utils::validation::Validate;

/// Use-case layer over a [`PropertyRepository`], speaking DTOs.
pub struct PropertiesService<R: PropertyRepository> {
    repository: R,
    mapper: PropertiesMapper,
}

impl<R: PropertyRepository> PropertiesService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            mapper: PropertiesMapper,
        }
    }

    pub async fn get_properties(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<Vec<ConfigurationProperty>> {
        let records = self.repository.find(application, profile, label).await?;
        tracing::debug!(
            "Found {} properties for {}/{}/{}",
            records.len(),
            application,
            profile,
            label
        );
        Ok(self.mapper.to_dto_list(&records))
    }

    pub async fn get_property(&self, id: &PropertyId) -> Result<ConfigurationProperty> {
        match self.repository.find_by_id(id).await? {
            Some(record) => Ok(self.mapper.to_dto(&record)),
            None => {
                tracing::warn!("Property {} not found", id);
                Err(PropertiesError::not_found(id))
            }
        }
    }

    pub async fn all_properties(&self) -> Result<Vec<ConfigurationProperty>> {
        let records = self.repository.find_all().await?;
        Ok(self.mapper.to_dto_list(&records))
    }

    /// Upserts every entry of the batch and returns the stored properties.
    pub async fn create_properties(
        &self,
        batch: &NewConfigurationProperties,
    ) -> Result<Vec<ConfigurationProperty>> {
        batch.validate()?;

        let records: Vec<_> = self
            .mapper
            .batch_to_dto_list(batch)
            .iter()
            .map(|dto| self.mapper.to_record(dto))
            .collect();
        let saved = self.repository.save_all(records).await?;

        tracing::info!(
            "Saved {} properties for {}/{}/{}",
            saved.len(),
            batch.application,
            batch.profile,
            batch.label
        );
        Ok(self.mapper.to_dto_list(&saved))
    }

    /// Replaces the value of an existing property.
    pub async fn update_property(
        &self,
        property: &ConfigurationProperty,
    ) -> Result<ConfigurationProperty> {
        property.validate()?;

        let id = property.id();
        if self.repository.find_by_id(&id).await?.is_none() {
            tracing::warn!("Cannot update missing property {}", id);
            return Err(PropertiesError::not_found(&id));
        }

        let saved = self.repository.save(self.mapper.to_record(property)).await?;
        tracing::info!("Updated property {}", id);
        Ok(self.mapper.to_dto(&saved))
    }

    pub async fn delete_property(&self, id: &PropertyId) -> Result<()> {
        if self.repository.delete(id).await? {
            tracing::info!("Deleted property {}", id);
            Ok(())
        } else {
            tracing::warn!("Cannot delete missing property {}", id);
            Err(PropertiesError::not_found(id))
        }
    }

    pub async fn delete_properties(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<usize> {
        let removed = self
            .repository
            .delete_all(application, profile, label)
            .await?;
        tracing::info!(
            "Deleted {} properties for {}/{}/{}",
            removed,
            application,
            profile,
            label
        );
        Ok(removed)
    }
}
