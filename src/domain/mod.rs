//! Domain layer: pure engine logic with no I/O.
//!
//! Everything in this layer is synchronous and side-effect free.
//! The only async boundary in the system is the rendering port.

pub mod extraction;
pub mod foundation;
pub mod goals;
pub mod tactics;
