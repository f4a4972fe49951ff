//! Test helpers shared across Eventive crates.

pub mod model;
pub mod recorder;

pub use model::{Model, ON_ERROR, ON_UPDATE};
pub use recorder::{CallRecorder, RecordedCall};
