pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{FilePropertyRepository, InMemoryPropertyRepository, LocalStorage};
pub use crate::config::ServiceConfig;
pub use crate::core::{export::ExportFormat, mapper::PropertiesMapper, service::PropertiesService};
pub use crate::domain::model::{
    ConfigurationProperty, ConfigurationPropertyRecord, NewConfigurationProperties, PropertyId,
};
pub use crate::utils::error::{PropertiesError, Result};
