pub mod export;
pub mod mapper;
pub mod service;

pub use crate::domain::model::{
    ConfigurationProperty, ConfigurationPropertyRecord, NewConfigurationProperties, PropertyId,
};
pub use crate::domain::ports::{PropertyRepository, Storage};
pub use crate::utils::error::Result;
