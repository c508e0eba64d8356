pub mod config;
pub mod design;
pub mod error;
pub mod hit;
pub mod id;
pub mod model;

pub use config::{CanvasConfig, DEFAULT_HISTORY_LIMIT, TextDefaults};
pub use design::Design;
pub use error::CanvasError;
pub use id::ElementId;
pub use model::*;
