//! Host probing: OS classification, GPU detection, memory and disk.

pub mod gpu;
pub mod probe;
pub mod resources;

pub use probe::{probe, probe_with_override};
