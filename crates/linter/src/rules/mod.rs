//! Blaze lint rules
//!
//! Rules ported from eslint-plugin-meteor

pub mod eventmap_params;

// Re-export rule structs
pub use eventmap_params::{EventmapParams, EventmapParamsConfig};
