//! Property source service: loads raw key/value pairs and generates template files.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::{default_config_dir, PropertyInput};
use crate::domain::schema::SETTINGS;
use crate::domain::PropsError;
use toml::de::{DeTable, DeValue};

/// Property source service.
pub struct SourceService;

impl SourceService {
    /// Get the default property file path (~/.config/mid-props/machineid.toml).
    pub fn default_path() -> PathBuf {
        default_config_dir().join("machineid.toml")
    }

    /// Load the raw string mapping for `input`.
    pub fn load(input: &PropertyInput) -> Result<HashMap<String, String>> {
        match input {
            PropertyInput::File(path) => Self::load_file(path),
            PropertyInput::Definitions(defs) => Ok(Self::parse_definitions(defs)?),
        }
    }

    /// Load a TOML property file and flatten it to dotted keys.
    pub fn load_file(path: &Path) -> Result<HashMap<String, String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read property file: {}", path.display()))?;

        let properties = flatten_document(&content)
            .with_context(|| format!("Failed to load property file: {}", path.display()))?;

        debug!(
            path = %path.display(),
            count = properties.len(),
            "Loaded property file"
        );
        Ok(properties)
    }

    /// Parse `KEY=VALUE` definitions. The value runs from the first `=` to the end.
    pub fn parse_definitions(defs: &[String]) -> Result<HashMap<String, String>, PropsError> {
        let mut properties = HashMap::with_capacity(defs.len());
        for def in defs {
            let (key, value) = def.split_once('=').ok_or_else(|| {
                PropsError::Source(format!("definition '{}' is not of the form KEY=VALUE", def))
            })?;
            if key.is_empty() {
                return Err(PropsError::Source(format!(
                    "definition '{}' has an empty key",
                    def
                )));
            }
            properties.insert(key.to_string(), value.to_string());
        }
        Ok(properties)
    }

    /// Generate the template file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate the template file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::template_content())
            .with_context(|| format!("Failed to write property file: {}", path.display()))?;

        Ok(())
    }

    /// Template listing every recognized key with its default, all commented out.
    pub fn template_content() -> String {
        let mut content = String::from(
            "# mid-props property file\n\
             #\n\
             # Dotted keys and [tables] are flattened to dotted property names.\n\
             # Unrecognized keys are passed through to the machine ID processor.\n",
        );

        for setting in &SETTINGS {
            content.push('\n');
            content.push_str(&format!("# {} ({})\n", setting.key, setting.type_name()));
            match (setting.default, setting.type_name()) {
                (None, _) => content.push_str(&format!("# {} = \"\"\n", setting.key)),
                (Some(default), "bool") => {
                    content.push_str(&format!("# {} = {}\n", setting.key, default))
                }
                (Some(default), _) => {
                    content.push_str(&format!("# {} = \"{}\"\n", setting.key, default))
                }
            }
        }

        content
    }
}

/// Flatten a TOML document into dotted keys with string values.
///
/// Scalars other than strings keep the exact text written in `source`, so
/// `1.0`, `0x10` or `1_000` reach the pass-through bucket unchanged.
fn flatten_document(source: &str) -> Result<HashMap<String, String>, PropsError> {
    let document = DeTable::parse(source)?;
    let mut out = HashMap::new();
    flatten_into(&mut out, source, None, document.get_ref())?;
    Ok(out)
}

fn flatten_into(
    out: &mut HashMap<String, String>,
    source: &str,
    prefix: Option<&str>,
    table: &DeTable<'_>,
) -> Result<(), PropsError> {
    for (key, value) in table {
        let full_key = match prefix {
            Some(p) => format!("{}.{}", p, key.get_ref()),
            None => key.get_ref().to_string(),
        };

        let text = match value.get_ref() {
            DeValue::Table(inner) => {
                flatten_into(out, source, Some(&full_key), inner)?;
                continue;
            }
            DeValue::String(s) => s.to_string(),
            DeValue::Integer(_) | DeValue::Float(_) | DeValue::Boolean(_) | DeValue::Datetime(_) => {
                source
                    .get(value.span())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        PropsError::Source(format!("key '{}' has no source text", full_key))
                    })?
            }
            DeValue::Array(_) => {
                return Err(PropsError::Source(format!(
                    "key '{}' holds an array; only scalar values are supported",
                    full_key
                )));
            }
        };

        if out.insert(full_key.clone(), text).is_some() {
            return Err(PropsError::Source(format!(
                "key '{}' is defined more than once",
                full_key
            )));
        }
    }
    Ok(())
}
