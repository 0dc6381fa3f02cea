use crate::core::ConfigurationProperty;
use crate::utils::error::{PropertiesError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub const NAMES: [&'static str; 3] = ["csv", "tsv", "json"];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = PropertiesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(PropertiesError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

pub fn render(properties: &[ConfigurationProperty], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => render_delimited(properties, b','),
        ExportFormat::Tsv => render_delimited(properties, b'\t'),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(properties)?),
    }
}

fn render_delimited(properties: &[ConfigurationProperty], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["application", "profile", "label", "key", "value"])?;
    for property in properties {
        writer.write_record([
            &property.application,
            &property.profile,
            &property.label,
            &property.key,
            &property.value,
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PropertiesError::StorageError {
            message: format!("Failed to flush export buffer: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| PropertiesError::StorageError {
        message: format!("Export produced invalid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties() -> Vec<ConfigurationProperty> {
        vec![
            ConfigurationProperty {
                application: "svc".to_string(),
                profile: "dev".to_string(),
                label: "main".to_string(),
                key: "greeting".to_string(),
                value: "hello, world".to_string(),
            },
            ConfigurationProperty {
                application: "svc".to_string(),
                profile: "dev".to_string(),
                label: "main".to_string(),
                key: "timeout".to_string(),
                value: "30".to_string(),
            },
        ]
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("tsv".parse::<ExportFormat>().unwrap(), ExportFormat::Tsv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_render_csv_quotes_commas() {
        let output = render(&properties(), ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "application,profile,label,key,value");
        assert_eq!(lines[1], "svc,dev,main,greeting,\"hello, world\"");
        assert_eq!(lines[2], "svc,dev,main,timeout,30");
    }

    #[test]
    fn test_render_tsv() {
        let output = render(&properties(), ExportFormat::Tsv).unwrap();
        assert!(output.starts_with("application\tprofile\tlabel\tkey\tvalue\n"));
        assert!(output.contains("svc\tdev\tmain\tgreeting\thello, world"));
    }

    #[test]
    fn test_render_json() {
        let output = render(&properties(), ExportFormat::Json).unwrap();
        let parsed: Vec<ConfigurationProperty> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, properties());
    }

    #[test]
    fn test_render_empty_csv_has_header_only() {
        let output = render(&[], ExportFormat::Csv).unwrap();
        assert_eq!(output, "application,profile,label,key,value\n");
    }
}
