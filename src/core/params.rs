use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Resolution parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveParams {
    pub format: OutputFormat,
    /// Records read from each imagery file: the file descriptor plus enough
    /// data records to check the record size. None reads the whole file.
    pub imagery_record_limit: Option<usize>,
    /// Only try the named recipe instead of the whole catalog
    pub recipe: Option<String>,
}

impl Default for ResolveParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            imagery_record_limit: Some(2),
            recipe: None,
        }
    }
}

impl ResolveParams {
    /// Load parameters from a JSON file; missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.imagery_record_limit == Some(0) {
            return Err(Error::InvalidArgument {
                arg: "imagery_record_limit",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "format": "Json", "recipe": "Jers" }}"#).unwrap();

        let params = ResolveParams::from_json_file(file.path()).unwrap();
        assert_eq!(params.format, OutputFormat::Json);
        assert_eq!(params.recipe.as_deref(), Some("Jers"));
        assert_eq!(params.imagery_record_limit, Some(2));
    }

    #[test]
    fn malformed_config_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ResolveParams::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn zero_record_limit_is_rejected() {
        let params = ResolveParams {
            imagery_record_limit: Some(0),
            ..ResolveParams::default()
        };
        assert!(params.validate().is_err());
        assert!(ResolveParams::default().validate().is_ok());
    }
}
