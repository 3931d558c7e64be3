//! Properties build service.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::Format;
use crate::config::{PropertyInput, SourceService};
use crate::domain::{MachineIdProperties, MapBasedPropsBuilder};
use crate::service::adapter::FormatAdapter;

/// Service that turns one property source into rendered machine ID properties.
pub struct BuildService {
    adapter: FormatAdapter,
}

impl BuildService {
    /// Create a new BuildService with the specified output format.
    pub fn new(format: Format) -> Self {
        Self {
            adapter: FormatAdapter::new(format),
        }
    }

    /// Load the source, build the properties and write them to stdout.
    pub fn run(&self, input: &PropertyInput) -> Result<()> {
        let props = self.resolve(input)?;
        let output = self.adapter.format_output(&props)?;

        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        writeln!(stdout, "{}", output.trim_end())?;
        Ok(())
    }

    /// Load the source and build the properties.
    pub fn resolve(&self, input: &PropertyInput) -> Result<MachineIdProperties> {
        debug!("Loading properties from {:?}", input);
        let raw = SourceService::load(input)?;

        let props = MapBasedPropsBuilder::build(Some(&raw))?;
        info!(
            additional = props.additional_properties().len(),
            "Machine ID properties resolved"
        );
        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::DEFAULT_EVENT_FIELD_NAME;

    #[test]
    fn test_resolve_definitions() {
        let service = BuildService::new(Format::Json);
        let input = PropertyInput::Definitions(vec![
            "audit.processor.mid.fromHostname=true".to_string(),
            "custom.key=custom.value".to_string(),
        ]);

        let props = service.resolve(&input).unwrap();

        assert!(props.machine_id_from_hostname());
        assert_eq!(props.event_field_name(), DEFAULT_EVENT_FIELD_NAME);
        assert_eq!(props.additional_property("custom.key"), Some("custom.value"));
    }

    #[test]
    fn test_resolve_empty_definitions_is_default() {
        let service = BuildService::new(Format::Text);
        let props = service
            .resolve(&PropertyInput::Definitions(Vec::new()))
            .unwrap();
        assert_eq!(props, MapBasedPropsBuilder::build_default());
    }

    #[test]
    fn test_resolve_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("machineid.toml");
        std::fs::write(
            &path,
            "[audit.processor.mid]\nmachineid = \"host-7\"\neventFieldName = \"mid\"\n",
        )
        .unwrap();

        let props = BuildService::new(Format::Json)
            .resolve(&PropertyInput::File(path))
            .unwrap();

        assert_eq!(props.machine_id(), Some("host-7"));
        assert_eq!(props.event_field_name(), "mid");
    }
}
