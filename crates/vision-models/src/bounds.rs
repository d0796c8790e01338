//! Pixel-space bounding boxes.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in pixel coordinates.
///
/// The detection endpoints return the corners as flat `x_min`/`y_min`/
/// `x_max`/`y_max` fields on each prediction; prediction structs embed this
/// type with `#[serde(flatten)]` to match that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// X coordinate of the left edge
    pub x_min: u32,
    /// Y coordinate of the top edge
    pub y_min: u32,
    /// X coordinate of the right edge
    pub x_max: u32,
    /// Y coordinate of the bottom edge
    pub y_max: u32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Self {
        Self { x_min, y_min, x_max, y_max }
    }

    /// Box width in pixels.
    pub fn width(&self) -> u32 {
        self.x_max.saturating_sub(self.x_min)
    }

    /// Box height in pixels.
    pub fn height(&self) -> u32 {
        self.y_max.saturating_sub(self.y_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let bounds = BoundingBox::new(258, 0, 485, 676);
        assert_eq!(bounds.width(), 227);
        assert_eq!(bounds.height(), 676);
    }

    #[test]
    fn test_flat_wire_shape() {
        let bounds: BoundingBox =
            serde_json::from_str(r#"{"x_min":258,"y_min":0,"x_max":485,"y_max":676}"#).unwrap();
        assert_eq!(bounds, BoundingBox::new(258, 0, 485, 676));
    }
}
