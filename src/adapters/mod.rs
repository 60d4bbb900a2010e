//! Adapters - default implementations of the engine's ports.

pub mod classification;
pub mod rendering;
