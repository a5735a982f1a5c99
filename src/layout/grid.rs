//! Grid-to-pixel coordinate resolution.
//!
//! The screen is divided into a fixed 12x12 logical grid. An element is
//! placed by naming a grid cell, an anchor, and a pixel offset; the resolver
//! returns absolute top-left coordinates such that the element's anchor point
//! lands on the cell's reference point.

use kurbo::Point;

use crate::foundation::error::{ReelgridError, ReelgridResult};

/// Number of rows and columns in the logical grid.
pub const GRID_DIVISIONS: f64 = 12.0;

/// Named reference point used to align an element within a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Element centered in the cell. The pixel offset is ignored.
    Center,
    /// Element's vertical center on the cell's left edge.
    Left,
    /// Element's vertical center on the cell's right edge.
    Right,
    /// Element's horizontal center on the cell's top edge.
    Top,
    /// Element's horizontal center on the cell's bottom edge.
    Bottom,
    /// Element's top-left corner on the cell's top-left corner.
    #[default]
    TopLeft,
    /// Element's top-right corner on the cell's top-right corner.
    TopRight,
    /// Element's bottom-left corner on the cell's bottom-left corner.
    BottomLeft,
    /// Element's bottom-right corner on the cell's bottom-right corner.
    BottomRight,
}

impl Anchor {
    /// Parse an anchor name. Matching is case-insensitive and ignores
    /// surrounding whitespace; an unknown name is rejected, never defaulted.
    pub fn parse(name: &str) -> ReelgridResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" => Ok(Self::Center),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "topleft" => Ok(Self::TopLeft),
            "topright" => Ok(Self::TopRight),
            "bottomleft" => Ok(Self::BottomLeft),
            "bottomright" => Ok(Self::BottomRight),
            other => Err(ReelgridError::invalid_argument(format!(
                "unknown anchor '{other}'; use center, left, right, top, bottom, \
                 topleft, topright, bottomleft or bottomright"
            ))),
        }
    }
}

impl std::str::FromStr for Anchor {
    type Err = ReelgridError;

    fn from_str(s: &str) -> ReelgridResult<Self> {
        Self::parse(s)
    }
}

/// Resolver from logical grid coordinates to absolute pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridSystem {
    /// Screen dimensions (width, height) in pixels.
    pub screen_size: (f64, f64),
    /// Width of one grid column.
    pub column_gap: f64,
    /// Height of one grid row.
    pub row_gap: f64,
}

impl GridSystem {
    /// Create a grid resolver for the given screen size.
    pub fn new(screen_size: (f64, f64)) -> Self {
        Self {
            screen_size,
            column_gap: screen_size.0 / GRID_DIVISIONS,
            row_gap: screen_size.1 / GRID_DIVISIONS,
        }
    }

    /// Resolve absolute top-left pixel coordinates for an element.
    ///
    /// * `size` — the element's intrinsic pixel size `(w, h)`.
    /// * `cell` — the target grid cell as `(row, col)`.
    /// * `offset` — pixel offset scaled by half the element dimension, with a
    ///   sign and axis that depend on the anchor (edge anchors push outward on
    ///   their own axis and center the other one).
    pub fn coords(self, size: (f64, f64), cell: (f64, f64), anchor: Anchor, offset: (f64, f64)) -> Point {
        let (w, h) = size;
        let (row, col) = cell;
        let (ox, oy) = offset;
        let cg = self.column_gap;
        let rg = self.row_gap;

        let base_x = col * cg;
        let base_y = row * rg;

        match anchor {
            Anchor::Center => Point::new(base_x + cg / 2.0 - w / 2.0, base_y + rg / 2.0 - h / 2.0),
            Anchor::Left => Point::new(base_x - ox * (w / 2.0), base_y + rg / 2.0 - h / 2.0),
            Anchor::Top => Point::new(base_x + cg / 2.0 - w / 2.0, base_y - oy * (h / 2.0)),
            Anchor::Right => {
                Point::new(base_x + cg - w + ox * (w / 2.0), base_y + rg / 2.0 - h / 2.0)
            }
            Anchor::Bottom => {
                Point::new(base_x + cg / 2.0 - w / 2.0, base_y + rg - h + oy * (h / 2.0))
            }
            Anchor::TopLeft => Point::new(base_x - ox * (w / 2.0), base_y - oy * (h / 2.0)),
            Anchor::TopRight => {
                Point::new(base_x + cg - w + ox * (w / 2.0), base_y - oy * (h / 2.0))
            }
            Anchor::BottomLeft => {
                Point::new(base_x - ox * (w / 2.0), base_y + rg - h + oy * (h / 2.0))
            }
            Anchor::BottomRight => {
                Point::new(base_x + cg - w + ox * (w / 2.0), base_y + rg - h + oy * (h / 2.0))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
