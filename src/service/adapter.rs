//! Output adapters for the resolved properties.
//!
//! - JSON (default), using the record's camelCase field names
//! - Text, one `name = value` line per field

use anyhow::Result;
use std::fmt::{self, Write};

use crate::cli::Format;
use crate::domain::MachineIdProperties;

/// Marker printed for absent values in text output.
const ABSENT: &str = "<absent>";

/// Adapter for rendering properties in the selected format.
pub struct FormatAdapter {
    format: Format,
}

impl FormatAdapter {
    /// Create a new adapter for the specified format.
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Render the properties.
    pub fn format_output(&self, props: &MachineIdProperties) -> Result<String> {
        match self.format {
            Format::Json => Ok(serde_json::to_string_pretty(props)?),
            Format::Text => {
                let mut out = String::new();
                self.write_text(&mut out, props)?;
                Ok(out)
            }
        }
    }

    fn write_text(&self, out: &mut String, props: &MachineIdProperties) -> fmt::Result {
        writeln!(out, "machineId = {}", props.machine_id().unwrap_or(ABSENT))?;
        writeln!(out, "eventFieldName = {}", props.event_field_name())?;
        writeln!(out, "machineIdFromEnv = {}", props.machine_id_from_env())?;
        writeln!(
            out,
            "machineIdEnvName = {}",
            props.machine_id_env_name().unwrap_or(ABSENT)
        )?;
        writeln!(
            out,
            "machineIdFromHostname = {}",
            props.machine_id_from_hostname()
        )?;
        writeln!(out, "additionalProperties:")?;
        for (key, value) in props.additional_properties() {
            writeln!(out, "  {} = {}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MapBasedPropsBuilder, KEY_MACHINE_ID_ENV_NAME};
    use std::collections::HashMap;

    #[test]
    fn test_json_output() {
        let adapter = FormatAdapter::new(Format::Json);
        let output = adapter
            .format_output(&MapBasedPropsBuilder::build_default())
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["machineIdFromHostname"], false);
        assert!(json["machineIdEnvName"].is_null());
    }

    #[test]
    fn test_text_output() {
        let mut input = HashMap::new();
        input.insert(KEY_MACHINE_ID_ENV_NAME.to_string(), "HOSTID".to_string());
        let props = MapBasedPropsBuilder::build(Some(&input)).unwrap();

        let output = FormatAdapter::new(Format::Text)
            .format_output(&props)
            .unwrap();

        assert!(output.contains("machineId = <absent>"));
        assert!(output.contains("machineIdEnvName = HOSTID"));
        assert!(output.contains("  audit.processor.mid.envVarName = HOSTID"));
    }

    #[test]
    fn test_text_output_has_line_per_field_and_property() {
        let mut input = HashMap::new();
        input.insert("b.key".to_string(), "2".to_string());
        input.insert("a.key".to_string(), "1".to_string());
        let props = MapBasedPropsBuilder::build(Some(&input)).unwrap();

        let output = FormatAdapter::new(Format::Text)
            .format_output(&props)
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[5], "additionalProperties:");
        assert_eq!(lines[6], "  a.key = 1");
        assert_eq!(lines[7], "  b.key = 2");
    }
}
