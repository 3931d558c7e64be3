//! Recognized configuration keys, their defaults and coercions.

use super::MachineIdProperties;

// Configuration keys. These strings are a public contract; renaming one is a breaking change.

/// See [`MachineIdProperties::machine_id`]
pub const KEY_MACHINE_ID: &str = "audit.processor.mid.machineid";

/// See [`MachineIdProperties::event_field_name`]
pub const KEY_EVENT_FIELD_NAME: &str = "audit.processor.mid.eventFieldName";

/// See [`MachineIdProperties::machine_id_from_env`]
pub const KEY_MACHINE_ID_FROM_ENV: &str = "audit.processor.mid.fromEnv";

/// See [`MachineIdProperties::machine_id_env_name`]
pub const KEY_MACHINE_ID_ENV_NAME: &str = "audit.processor.mid.envVarName";

/// See [`MachineIdProperties::machine_id_from_hostname`]
pub const KEY_MACHINE_ID_FROM_HOSTNAME: &str = "audit.processor.mid.fromHostname";

// Default values

pub const DEFAULT_MACHINE_ID: Option<&str> = None;
pub const DEFAULT_EVENT_FIELD_NAME: &str = "org.beiter.michael.eaudit4j.processors.machineid";
pub const DEFAULT_MACHINE_ID_FROM_ENV: bool = false;
pub const DEFAULT_MACHINE_ID_ENV_NAME: Option<&str> = None;
pub const DEFAULT_MACHINE_ID_FROM_HOSTNAME: bool = false;

/// Lenient boolean parse: only a case-insensitive "true" is true.
///
/// Anything else, including "yes", "1" and "TRUE!", yields `false` without an error.
pub fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// How a raw string is coerced and where the result is stored.
#[derive(Clone, Copy)]
enum Field {
    /// String field that may stay absent
    OptionalText(fn(&mut MachineIdProperties, Option<String>)),
    /// String field that always carries a value
    Text(fn(&mut MachineIdProperties, String)),
    /// Boolean field, parsed with [`parse_bool`]
    Flag(fn(&mut MachineIdProperties, bool)),
}

/// One row of the schema table.
#[derive(Clone, Copy)]
pub struct Setting {
    /// Configuration key, matched exactly
    pub key: &'static str,

    /// Default in its textual form, `None` when the field stays absent
    pub default: Option<&'static str>,

    field: Field,
}

impl Setting {
    /// Human readable type name of the target field.
    pub fn type_name(&self) -> &'static str {
        match self.field {
            Field::OptionalText(_) | Field::Text(_) => "string",
            Field::Flag(_) => "bool",
        }
    }

    /// Coerce `value` and assign it to the target field of `props`.
    pub(crate) fn apply(&self, props: &mut MachineIdProperties, value: Option<&str>) {
        match self.field {
            Field::OptionalText(assign) => assign(props, value.map(str::to_string)),
            Field::Text(assign) => assign(props, value.unwrap_or_default().to_string()),
            Field::Flag(assign) => assign(props, value.is_some_and(parse_bool)),
        }
    }
}

/// All recognized settings, in processing order.
pub static SETTINGS: [Setting; 5] = [
    Setting {
        key: KEY_MACHINE_ID,
        default: DEFAULT_MACHINE_ID,
        field: Field::OptionalText(MachineIdProperties::set_machine_id),
    },
    Setting {
        key: KEY_EVENT_FIELD_NAME,
        default: Some(DEFAULT_EVENT_FIELD_NAME),
        field: Field::Text(MachineIdProperties::set_event_field_name),
    },
    Setting {
        key: KEY_MACHINE_ID_FROM_ENV,
        default: Some(bool_text(DEFAULT_MACHINE_ID_FROM_ENV)),
        field: Field::Flag(MachineIdProperties::set_machine_id_from_env),
    },
    Setting {
        key: KEY_MACHINE_ID_ENV_NAME,
        default: DEFAULT_MACHINE_ID_ENV_NAME,
        field: Field::OptionalText(MachineIdProperties::set_machine_id_env_name),
    },
    Setting {
        key: KEY_MACHINE_ID_FROM_HOSTNAME,
        default: Some(bool_text(DEFAULT_MACHINE_ID_FROM_HOSTNAME)),
        field: Field::Flag(MachineIdProperties::set_machine_id_from_hostname),
    },
];

const fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_lenient() {
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("TrUe"));

        assert!(!parse_bool("false"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool("1"));
        assert!(!parse_bool("TRUE!"));
        assert!(!parse_bool(" true"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_settings_order() {
        let keys: Vec<_> = SETTINGS.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![
                KEY_MACHINE_ID,
                KEY_EVENT_FIELD_NAME,
                KEY_MACHINE_ID_FROM_ENV,
                KEY_MACHINE_ID_ENV_NAME,
                KEY_MACHINE_ID_FROM_HOSTNAME,
            ]
        );
    }

    #[test]
    fn test_defaults_produce_default_record() {
        let mut props = MachineIdProperties::default();
        props.set_machine_id(Some("x".to_string()));
        props.set_machine_id_from_env(true);
        props.set_machine_id_from_hostname(true);

        for setting in &SETTINGS {
            setting.apply(&mut props, setting.default);
        }

        assert_eq!(props, MachineIdProperties::default());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SETTINGS[0].type_name(), "string");
        assert_eq!(SETTINGS[2].type_name(), "bool");
    }
}
