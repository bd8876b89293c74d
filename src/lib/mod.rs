//! Shared frontend utilities: configuration, the validation error taxonomy,
//! theme constants, and build metadata. Routes and features import from here
//! so view code stays focused on rendering.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod theme;

pub(crate) use errors::ValidationError;
