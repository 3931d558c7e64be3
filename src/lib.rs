//! mid-props: typed machine ID properties for audit event enrichment.
//!
//! Turns a string-keyed configuration mapping into [`MachineIdProperties`],
//! applying defaults for missing keys and keeping every other entry for
//! downstream processors.
//!
//! ```
//! use std::collections::HashMap;
//! use mid_props::{MapBasedPropsBuilder, KEY_MACHINE_ID_FROM_ENV};
//!
//! let mut raw = HashMap::new();
//! raw.insert(KEY_MACHINE_ID_FROM_ENV.to_string(), "true".to_string());
//!
//! let props = MapBasedPropsBuilder::build(Some(&raw)).unwrap();
//! assert!(props.machine_id_from_env());
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod service;

pub use domain::{
    MachineIdProperties, MapBasedPropsBuilder, PropertySource, PropsError, KEY_EVENT_FIELD_NAME,
    KEY_MACHINE_ID, KEY_MACHINE_ID_ENV_NAME, KEY_MACHINE_ID_FROM_ENV, KEY_MACHINE_ID_FROM_HOSTNAME,
};
