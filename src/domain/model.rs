use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Composite identity of a stored property.
///
/// Field order matters: the derived `Ord` sorts by application, profile,
/// label and then key, which is the order repositories return records in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId {
    pub application: String,
    pub profile: String,
    pub label: String,
    pub key: String,
}

impl PropertyId {
    pub fn new(
        application: impl Into<String>,
        profile: impl Into<String>,
        label: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            application: application.into(),
            profile: profile.into(),
            label: label.into(),
            key: key.into(),
        }
    }

    /// True when the id belongs to the given application/profile/label context.
    pub fn in_context(&self, application: &str, profile: &str, label: &str) -> bool {
        self.application == application && self.profile == profile && self.label == label
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}:{}",
            self.application, self.profile, self.label, self.key
        )
    }
}

/// Persisted form of a configuration property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationPropertyRecord {
    pub id: PropertyId,
    pub value: String,
}

/// Transfer form of a configuration property, identity fields flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationProperty {
    pub application: String,
    pub profile: String,
    pub label: String,
    pub key: String,
    pub value: String,
}

impl ConfigurationProperty {
    pub fn id(&self) -> PropertyId {
        PropertyId::new(&self.application, &self.profile, &self.label, &self.key)
    }
}

/// Bulk submission sharing one application/profile/label context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConfigurationProperties {
    pub application: String,
    pub profile: String,
    pub label: String,
    #[serde(default)]
    pub keys_values: BTreeMap<String, String>,
}

impl NewConfigurationProperties {
    pub fn new(
        application: impl Into<String>,
        profile: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            application: application.into(),
            profile: profile.into(),
            label: label.into(),
            keys_values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keys_values.insert(key.into(), value.into());
        self
    }
}
