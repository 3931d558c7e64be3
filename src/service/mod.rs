//! Service layer orchestrating source loading, building and output.

mod adapter;
mod build_service;

pub use adapter::FormatAdapter;
pub use build_service::BuildService;
