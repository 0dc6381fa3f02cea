//! Conversions between persisted property records and property DTOs.

use crate::core::{
    ConfigurationProperty, ConfigurationPropertyRecord, NewConfigurationProperties, PropertyId,
};

/// Stateless converter between [`ConfigurationPropertyRecord`] and
/// [`ConfigurationProperty`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesMapper;

impl PropertiesMapper {
    pub fn to_dto(&self, record: &ConfigurationPropertyRecord) -> ConfigurationProperty {
        ConfigurationProperty {
            application: record.id.application.clone(),
            profile: record.id.profile.clone(),
            label: record.id.label.clone(),
            key: record.id.key.clone(),
            value: record.value.clone(),
        }
    }

    /// Converts records in order.
    pub fn to_dto_list<'a, I>(&self, records: I) -> Vec<ConfigurationProperty>
    where
        I: IntoIterator<Item = &'a ConfigurationPropertyRecord>,
    {
        records.into_iter().map(|record| self.to_dto(record)).collect()
    }

    /// Expands a batch into one DTO per key, ordered by key.
    pub fn batch_to_dto_list(
        &self,
        batch: &NewConfigurationProperties,
    ) -> Vec<ConfigurationProperty> {
        batch
            .keys_values
            .iter()
            .map(|(key, value)| ConfigurationProperty {
                application: batch.application.clone(),
                profile: batch.profile.clone(),
                label: batch.label.clone(),
                key: key.clone(),
                value: value.clone(),
            })
            .collect()
    }

    pub fn to_record(&self, dto: &ConfigurationProperty) -> ConfigurationPropertyRecord {
        ConfigurationPropertyRecord {
            id: PropertyId {
                application: dto.application.clone(),
                profile: dto.profile.clone(),
                label: dto.label.clone(),
                key: dto.key.clone(),
            },
            value: dto.value.clone(),
        }
    }
}

impl From<ConfigurationPropertyRecord> for ConfigurationProperty {
    fn from(record: ConfigurationPropertyRecord) -> Self {
        let ConfigurationPropertyRecord { id, value } = record;
        Self {
            application: id.application,
            profile: id.profile,
            label: id.label,
            key: id.key,
            value,
        }
    }
}

impl From<&ConfigurationPropertyRecord> for ConfigurationProperty {
    fn from(record: &ConfigurationPropertyRecord) -> Self {
        PropertiesMapper.to_dto(record)
    }
}

impl From<ConfigurationProperty> for ConfigurationPropertyRecord {
    fn from(dto: ConfigurationProperty) -> Self {
        Self {
            id: PropertyId {
                application: dto.application,
                profile: dto.profile,
                label: dto.label,
                key: dto.key,
            },
            value: dto.value,
        }
    }
}

impl From<&ConfigurationProperty> for ConfigurationPropertyRecord {
    fn from(dto: &ConfigurationProperty) -> Self {
        PropertiesMapper.to_record(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, value: &str) -> ConfigurationPropertyRecord {
        ConfigurationPropertyRecord {
            id: PropertyId::new("svc", "dev", "main", key),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_to_dto_flattens_identity() {
        let dto = PropertiesMapper.to_dto(&record("timeout", "30"));

        assert_eq!(
            dto,
            ConfigurationProperty {
                application: "svc".to_string(),
                profile: "dev".to_string(),
                label: "main".to_string(),
                key: "timeout".to_string(),
                value: "30".to_string(),
            }
        );
    }

    #[test]
    fn test_record_round_trip() {
        let mapper = PropertiesMapper;
        let original = record("url", "jdbc:postgresql://db/app?ssl=true");

        assert_eq!(mapper.to_record(&mapper.to_dto(&original)), original);
    }

    #[test]
    fn test_dto_round_trip_through_from() {
        let dto = ConfigurationProperty {
            application: "billing".to_string(),
            profile: "prod".to_string(),
            label: "v2".to_string(),
            key: "retries".to_string(),
            value: String::new(),
        };

        let record: ConfigurationPropertyRecord = dto.clone().into();
        assert_eq!(record.id.label, "v2");
        assert_eq!(ConfigurationProperty::from(record), dto);
    }

    #[test]
    fn test_to_dto_list_preserves_order() {
        let records = vec![record("z", "1"), record("a", "2"), record("m", "3")];
        let keys: Vec<String> = PropertiesMapper
            .to_dto_list(&records)
            .into_iter()
            .map(|dto| dto.key)
            .collect();

        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_to_dto_list_empty() {
        let records: Vec<ConfigurationPropertyRecord> = Vec::new();
        assert!(PropertiesMapper.to_dto_list(&records).is_empty());
    }

    #[test]
    fn test_batch_expansion_shares_context() {
        let batch = NewConfigurationProperties::new("svc", "dev", "main")
            .with("b", "2")
            .with("a", "1");

        let dtos = PropertiesMapper.batch_to_dto_list(&batch);

        assert_eq!(dtos.len(), 2);
        assert!(dtos
            .iter()
            .all(|dto| dto.application == "svc" && dto.profile == "dev" && dto.label == "main"));
        let pairs: Vec<(&str, &str)> = dtos
            .iter()
            .map(|dto| (dto.key.as_str(), dto.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_empty_batch_expands_to_nothing() {
        let batch = NewConfigurationProperties::new("svc", "dev", "main");
        assert!(PropertiesMapper.batch_to_dto_list(&batch).is_empty());
    }
}
