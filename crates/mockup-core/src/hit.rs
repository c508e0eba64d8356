//! Hit testing: point → element lookup.
//!
//! Elements are rotated about their centre, so containment is tested in the
//! element's local frame by inverting its rotation.

use crate::id::ElementId;
use crate::model::DesignElement;
use kurbo::{Affine, Point, Rect};

/// Unrotated rectangle of an element.
pub fn local_rect(el: &DesignElement) -> Rect {
    Rect::from_origin_size(
        (el.x as f64, el.y as f64),
        (el.width as f64, el.height as f64),
    )
}

/// Rotation of an element about its centre.
pub fn transform(el: &DesignElement) -> Affine {
    let rect = local_rect(el);
    Affine::rotate_about((el.rotation as f64).to_radians(), rect.center())
}

/// Axis-aligned bounding box of the rotated element.
pub fn bounding_box(el: &DesignElement) -> Rect {
    transform(el).transform_rect_bbox(local_rect(el))
}

/// Whether `(px, py)` lies inside the rotated element.
pub fn contains(el: &DesignElement, px: f32, py: f32) -> bool {
    let local = transform(el).inverse() * Point::new(px as f64, py as f64);
    local_rect(el).contains(local)
}

/// Find the topmost element at position (px, py).
/// Walks the list in reverse — last painted is topmost.
pub fn element_at(elements: &[DesignElement], px: f32, py: f32) -> Option<ElementId> {
    elements
        .iter()
        .rev()
        .find(|el| el.has_valid_geometry() && contains(el, px, py))
        .map(|el| el.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topmost_element_wins() {
        let below = DesignElement::image(0.0, 0.0, "a", 100.0, 100.0);
        let above = DesignElement::image(50.0, 50.0, "b", 100.0, 100.0);
        let list = vec![below.clone(), above.clone()];
        assert_eq!(element_at(&list, 75.0, 75.0), Some(above.id));
        assert_eq!(element_at(&list, 10.0, 10.0), Some(below.id));
        assert_eq!(element_at(&list, 300.0, 300.0), None);
    }

    #[test]
    fn rotation_moves_the_corners() {
        // 100×20 bar centred at (50, 10); rotated 90° it spans y ∈ [-40, 60].
        let mut bar = DesignElement::image(0.0, 0.0, "bar", 100.0, 20.0);
        assert!(contains(&bar, 95.0, 10.0));
        bar.rotate_to(90.0);
        assert!(!contains(&bar, 95.0, 10.0));
        assert!(contains(&bar, 50.0, 55.0));

        let bbox = bounding_box(&bar);
        assert!((bbox.y0 + 40.0).abs() < 1e-3);
        assert!((bbox.y1 - 60.0).abs() < 1e-3);
        assert!((bbox.width() - 20.0).abs() < 1e-3);
    }
}
