use crate::domain::model::{ConfigurationProperty, NewConfigurationProperties};
use crate::utils::error::{PropertiesError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PropertiesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PropertiesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PropertiesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(PropertiesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Identity fields of a property must carry a visible value.
fn validate_identity_field(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PropertiesError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

fn validate_context(application: &str, profile: &str, label: &str) -> Result<()> {
    validate_identity_field("application", application)?;
    validate_identity_field("profile", profile)?;
    validate_identity_field("label", label)
}

impl Validate for ConfigurationProperty {
    fn validate(&self) -> Result<()> {
        validate_context(&self.application, &self.profile, &self.label)?;
        validate_identity_field("key", &self.key)
    }
}

impl Validate for NewConfigurationProperties {
    fn validate(&self) -> Result<()> {
        validate_context(&self.application, &self.profile, &self.label)?;

        if self.keys_values.is_empty() {
            return Err(PropertiesError::ValidationError {
                message: "keysValues must contain at least one entry".to_string(),
            });
        }

        for key in self.keys_values.keys() {
            validate_identity_field("key", key)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(key: &str) -> ConfigurationProperty {
        ConfigurationProperty {
            application: "svc".to_string(),
            profile: "dev".to_string(),
            label: "main".to_string(),
            key: key.to_string(),
            value: String::new(),
        }
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.base_path", "./data").is_ok());
        assert!(validate_path("storage.base_path", "").is_err());
        assert!(validate_path("storage.base_path", "da\0ta").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "csv", &["csv", "json"]).is_ok());
        assert!(validate_one_of("format", "xml", &["csv", "json"]).is_err());
    }

    #[test]
    fn test_property_with_empty_value_is_valid() {
        assert!(property("timeout").validate().is_ok());
    }

    #[test]
    fn test_property_with_blank_key_is_rejected() {
        let err = property("  ").validate().unwrap_err();
        assert!(matches!(err, PropertiesError::ValidationError { .. }));
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let batch = NewConfigurationProperties::new("svc", "dev", "main");
        assert!(batch.validate().is_err());

        let batch = batch.with("timeout", "30");
        assert!(batch.validate().is_ok());
    }

    #[test]
    fn test_batch_with_blank_label_is_rejected() {
        let batch = NewConfigurationProperties::new("svc", "dev", "").with("a", "1");
        assert!(batch.validate().is_err());
    }
}
