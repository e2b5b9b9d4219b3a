//! Domain Services
//!
//! Pure transformations used by the use cases.

pub mod result_mapper;

pub use result_mapper::{map_hit, map_hits};
