//! Shared data model for cutscene events.

pub mod defs;
pub mod params;
pub mod registry;
pub mod validate;

pub use defs::*;
pub use params::{
    ParamError, ParamValue, decode_values, default_instance, encode_values, normalize_events, normalize_params,
};
pub use registry::PreconditionRegistry;
pub use validate::{ValidationError, validate_events};
