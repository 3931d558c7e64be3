//! Domain layer containing the properties building logic.
//!
//! This module contains:
//! - The typed machine ID properties record
//! - The input mapping contract
//! - The key schema with defaults and coercions
//! - The map based builder and its audit logging
//! - Logger initialization

mod builder;
mod error;
pub mod logger;
pub mod schema;
mod source;
mod types;

pub use builder::MapBasedPropsBuilder;
pub use error::PropsError;
pub use schema::{
    KEY_EVENT_FIELD_NAME, KEY_MACHINE_ID, KEY_MACHINE_ID_ENV_NAME, KEY_MACHINE_ID_FROM_ENV,
    KEY_MACHINE_ID_FROM_HOSTNAME,
};
pub use source::PropertySource;
pub use types::MachineIdProperties;
