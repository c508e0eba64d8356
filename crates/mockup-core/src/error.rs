use crate::id::ElementId;
use crate::model::ViewKey;
use thiserror::Error;

/// Every reportable failure of the canvas engine and its codecs.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("element {0} is not a text element")]
    NotText(ElementId),

    #[error("element {0} is not an image element")]
    NotImage(ElementId),

    #[error("duplicate element id {0}")]
    DuplicateId(ElementId),

    #[error("element {id} in view {view} has invalid geometry")]
    InvalidGeometry { id: ElementId, view: ViewKey },

    #[error("unknown view `{0}` (expected front, back, left or right)")]
    UnknownView(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode design: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("failed to decode design: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
