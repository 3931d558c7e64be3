//! Builds [`MachineIdProperties`] from a string-keyed mapping.
//!
//! Populate the mapping with the `KEY_*` constants from [`schema`](super::schema)
//! before calling [`MapBasedPropsBuilder::build`]. Unrecognized keys are kept
//! in the record's pass-through bucket.

use std::collections::BTreeMap;

use tracing::{debug, info, Level};

use super::schema::SETTINGS;
use super::{MachineIdProperties, PropertySource, PropsError};

/// Marker written in logs for absent values.
const NULL_MARKER: &str = "null";

/// Stateless builder for machine ID properties.
pub struct MapBasedPropsBuilder;

impl MapBasedPropsBuilder {
    /// Build a record that uses only the defaults.
    pub fn build_default() -> MachineIdProperties {
        Self::build_from(&BTreeMap::<String, String>::new())
    }

    /// Build a record from `properties`.
    ///
    /// Fails with [`PropsError::InvalidArgument`] when `properties` is `None`.
    /// No other input is an error: missing, empty or unparseable values fall
    /// back to defaults.
    pub fn build<P>(properties: Option<&P>) -> Result<MachineIdProperties, PropsError>
    where
        P: PropertySource + ?Sized,
    {
        let properties = properties.ok_or_else(|| {
            PropsError::InvalidArgument("the properties mapping must not be absent".to_string())
        })?;

        Ok(Self::build_from(properties))
    }

    fn build_from<P>(properties: &P) -> MachineIdProperties
    where
        P: PropertySource + ?Sized,
    {
        let mut props = MachineIdProperties::default();

        for setting in &SETTINGS {
            match properties.lookup(setting.key).filter(|v| !v.is_empty()) {
                Some(value) => {
                    setting.apply(&mut props, Some(value));
                    log_value(setting.key, Some(value));
                }
                None => {
                    setting.apply(&mut props, setting.default);
                    log_default(setting.key, setting.default);
                }
            }
        }

        // Null values are filtered explicitly; the record owns its copy.
        let additional: BTreeMap<String, String> = properties
            .entries()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.to_string())))
            .collect();
        props.set_additional_properties(additional);

        props
    }
}

/// Log that a key was configured.
///
/// INFO names only the key. Values may be confidential and only appear at
/// DEBUG, which must stay off in production.
fn log_value(key: &str, value: Option<&str>) {
    if tracing::enabled!(Level::INFO) {
        info!(
            "Key found in configuration ('{}'), using configured value (not disclosed here for security reasons)",
            key
        );
    }

    if tracing::enabled!(Level::DEBUG) {
        debug!(
            "Key found in configuration ('{}'), using configured value ('{}')",
            key,
            value.unwrap_or(NULL_MARKER)
        );
    }
}

/// Log that a key was not configured and its default is used.
fn log_default(key: &str, default: Option<&str>) {
    if tracing::enabled!(Level::INFO) {
        info!(
            "Key is not configured ('{}'), using default value ('{}')",
            key,
            default.unwrap_or(NULL_MARKER)
        );
    }
}
