//! Ports - interfaces the engine needs from the outside world.
//!
//! The engine core is pure; these traits are its only seams. Adapters
//! implement them, the application layer wires them together.

mod classifier;
mod renderer;

pub use classifier::UserActClassifier;
pub use renderer::{RenderError, ResponseRenderer};
