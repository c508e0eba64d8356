//! Persisted form of a multi-view design.
//!
//! A complete design is the four view → element list pairs. The storage
//! collaborator owns where the bytes go; this module only owns their shape,
//! with a JSON codec for the web API and a compact MessagePack codec for
//! drafts.

use crate::error::CanvasError;
use crate::model::{DesignElement, ViewKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Design {
    pub front: Vec<DesignElement>,
    pub back: Vec<DesignElement>,
    pub left: Vec<DesignElement>,
    pub right: Vec<DesignElement>,
}

impl Design {
    pub fn get(&self, view: ViewKey) -> &[DesignElement] {
        match view {
            ViewKey::Front => &self.front,
            ViewKey::Back => &self.back,
            ViewKey::Left => &self.left,
            ViewKey::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, view: ViewKey) -> &mut Vec<DesignElement> {
        match view {
            ViewKey::Front => &mut self.front,
            ViewKey::Back => &mut self.back,
            ViewKey::Left => &mut self.left,
            ViewKey::Right => &mut self.right,
        }
    }

    /// Views in canonical order with their element lists.
    pub fn iter(&self) -> impl Iterator<Item = (ViewKey, &[DesignElement])> {
        ViewKey::ALL.into_iter().map(move |v| (v, self.get(v)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, elements)| elements.is_empty())
    }

    /// Total elements across all views.
    pub fn element_count(&self) -> usize {
        self.iter().map(|(_, elements)| elements.len()).sum()
    }

    /// Check what the canvas engine assumes but never verifies itself:
    /// ids are unique within each view and geometry is finite and non-negative.
    ///
    /// # Errors
    /// Returns the first violation found, scanning views in canonical order.
    pub fn validate(&self) -> Result<(), CanvasError> {
        for (view, elements) in self.iter() {
            let mut seen = HashSet::with_capacity(elements.len());
            for el in elements {
                if !seen.insert(el.id) {
                    return Err(CanvasError::DuplicateId(el.id));
                }
                if !el.has_valid_geometry() {
                    return Err(CanvasError::InvalidGeometry { id: el.id, view });
                }
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a JSON design.
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        let design: Design = serde_json::from_str(json)?;
        design.validate()?;
        log::debug!("decoded JSON design, {} element(s)", design.element_count());
        Ok(design)
    }

    pub fn to_msgpack(&self) -> Result<Vec<u8>, CanvasError> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    /// Decode and validate a MessagePack design.
    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, CanvasError> {
        let design: Design = rmp_serde::from_slice(bytes)?;
        design.validate()?;
        log::debug!(
            "decoded MessagePack design ({} bytes), {} element(s)",
            bytes.len(),
            design.element_count()
        );
        Ok(design)
    }
}
