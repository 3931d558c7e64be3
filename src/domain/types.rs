//! Typed machine ID configuration record.

use serde::Serialize;
use std::collections::BTreeMap;

use super::schema::DEFAULT_EVENT_FIELD_NAME;

/// Resolved configuration for the machine ID audit processor.
///
/// Instances are produced by [`MapBasedPropsBuilder`](super::MapBasedPropsBuilder);
/// callers only read from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineIdProperties {
    /// Explicit machine ID override
    machine_id: Option<String>,

    /// Audit event field that receives the machine ID
    event_field_name: String,

    /// Derive the machine ID from an environment variable
    machine_id_from_env: bool,

    /// Name of that environment variable
    machine_id_env_name: Option<String>,

    /// Derive the machine ID from the host name
    machine_id_from_hostname: bool,

    /// Every non-null entry of the input mapping
    additional_properties: BTreeMap<String, String>,
}

impl Default for MachineIdProperties {
    fn default() -> Self {
        Self {
            machine_id: None,
            event_field_name: DEFAULT_EVENT_FIELD_NAME.to_string(),
            machine_id_from_env: false,
            machine_id_env_name: None,
            machine_id_from_hostname: false,
            additional_properties: BTreeMap::new(),
        }
    }
}

impl MachineIdProperties {
    pub fn machine_id(&self) -> Option<&str> {
        self.machine_id.as_deref()
    }

    pub fn event_field_name(&self) -> &str {
        &self.event_field_name
    }

    pub fn machine_id_from_env(&self) -> bool {
        self.machine_id_from_env
    }

    pub fn machine_id_env_name(&self) -> Option<&str> {
        self.machine_id_env_name.as_deref()
    }

    pub fn machine_id_from_hostname(&self) -> bool {
        self.machine_id_from_hostname
    }

    /// All pass-through properties, recognized keys included.
    pub fn additional_properties(&self) -> &BTreeMap<String, String> {
        &self.additional_properties
    }

    /// Look up a single pass-through property.
    pub fn additional_property(&self, key: &str) -> Option<&str> {
        self.additional_properties.get(key).map(String::as_str)
    }

    pub(crate) fn set_machine_id(&mut self, value: Option<String>) {
        self.machine_id = value;
    }

    pub(crate) fn set_event_field_name(&mut self, value: String) {
        self.event_field_name = value;
    }

    pub(crate) fn set_machine_id_from_env(&mut self, value: bool) {
        self.machine_id_from_env = value;
    }

    pub(crate) fn set_machine_id_env_name(&mut self, value: Option<String>) {
        self.machine_id_env_name = value;
    }

    pub(crate) fn set_machine_id_from_hostname(&mut self, value: bool) {
        self.machine_id_from_hostname = value;
    }

    pub(crate) fn set_additional_properties(&mut self, value: BTreeMap<String, String>) {
        self.additional_properties = value;
    }
}
