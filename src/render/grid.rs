//! Static cell tables for the two chart conventions.
//!
//! Both tables live on a 400x400 unit surface with the origin at the top-left
//! corner and `y` growing downwards. Callers scale positions to their own
//! surface size.
//!
//! North Indian cells are keyed by house: the square is cut by both
//! diagonals and by the diamond joining the side midpoints, house 1 is the
//! top diamond and houses run counter-clockwise. South Indian cells are keyed
//! by sign number: the 12 perimeter cells of a 4x4 grid, Pisces top-left and
//! the rest clockwise in zodiacal order, with the centre 2x2 block unused.

use serde::Serialize;

use crate::core::{Ascendant, DisplayConvention, Point, ZodiacSign};
use crate::error::{LayoutError, LayoutResult};

/// Side length of the reference drawing surface.
pub const SURFACE_SIZE: f64 = 400.0;

/// One drawable region of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    /// House number (North Indian) or sign number (South Indian).
    pub cell: u8,
    /// Where stacked body labels are centred.
    pub center: Point,
    /// Where the sign glyph is drawn.
    pub label_anchor: Point,
    /// Region outline in drawing order.
    pub outline: &'static [Point],
}

const fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

static NORTH_INDIAN_CELLS: [GridCell; 12] = [
    GridCell {
        cell: 1,
        center: pt(200.0, 100.0),
        label_anchor: pt(200.0, 175.0),
        outline: &[pt(200.0, 0.0), pt(100.0, 100.0), pt(200.0, 200.0), pt(300.0, 100.0)],
    },
    GridCell {
        cell: 2,
        center: pt(100.0, 40.0),
        label_anchor: pt(100.0, 85.0),
        outline: &[pt(0.0, 0.0), pt(200.0, 0.0), pt(100.0, 100.0)],
    },
    GridCell {
        cell: 3,
        center: pt(40.0, 100.0),
        label_anchor: pt(85.0, 100.0),
        outline: &[pt(0.0, 0.0), pt(100.0, 100.0), pt(0.0, 200.0)],
    },
    GridCell {
        cell: 4,
        center: pt(100.0, 200.0),
        label_anchor: pt(175.0, 200.0),
        outline: &[pt(0.0, 200.0), pt(100.0, 100.0), pt(200.0, 200.0), pt(100.0, 300.0)],
    },
    GridCell {
        cell: 5,
        center: pt(40.0, 300.0),
        label_anchor: pt(85.0, 300.0),
        outline: &[pt(0.0, 200.0), pt(100.0, 300.0), pt(0.0, 400.0)],
    },
    GridCell {
        cell: 6,
        center: pt(100.0, 360.0),
        label_anchor: pt(100.0, 315.0),
        outline: &[pt(0.0, 400.0), pt(100.0, 300.0), pt(200.0, 400.0)],
    },
    GridCell {
        cell: 7,
        center: pt(200.0, 300.0),
        label_anchor: pt(200.0, 225.0),
        outline: &[pt(200.0, 400.0), pt(100.0, 300.0), pt(200.0, 200.0), pt(300.0, 300.0)],
    },
    GridCell {
        cell: 8,
        center: pt(300.0, 360.0),
        label_anchor: pt(300.0, 315.0),
        outline: &[pt(200.0, 400.0), pt(300.0, 300.0), pt(400.0, 400.0)],
    },
    GridCell {
        cell: 9,
        center: pt(360.0, 300.0),
        label_anchor: pt(315.0, 300.0),
        outline: &[pt(400.0, 400.0), pt(300.0, 300.0), pt(400.0, 200.0)],
    },
    GridCell {
        cell: 10,
        center: pt(300.0, 200.0),
        label_anchor: pt(225.0, 200.0),
        outline: &[pt(400.0, 200.0), pt(300.0, 300.0), pt(200.0, 200.0), pt(300.0, 100.0)],
    },
    GridCell {
        cell: 11,
        center: pt(360.0, 100.0),
        label_anchor: pt(315.0, 100.0),
        outline: &[pt(400.0, 200.0), pt(300.0, 100.0), pt(400.0, 0.0)],
    },
    GridCell {
        cell: 12,
        center: pt(300.0, 40.0),
        label_anchor: pt(300.0, 85.0),
        outline: &[pt(400.0, 0.0), pt(300.0, 100.0), pt(200.0, 0.0)],
    },
];

static SOUTH_INDIAN_CELLS: [GridCell; 12] = [
    // Aries
    GridCell {
        cell: 1,
        center: pt(150.0, 50.0),
        label_anchor: pt(115.0, 15.0),
        outline: &[pt(100.0, 0.0), pt(200.0, 0.0), pt(200.0, 100.0), pt(100.0, 100.0)],
    },
    GridCell {
        cell: 2,
        center: pt(250.0, 50.0),
        label_anchor: pt(215.0, 15.0),
        outline: &[pt(200.0, 0.0), pt(300.0, 0.0), pt(300.0, 100.0), pt(200.0, 100.0)],
    },
    GridCell {
        cell: 3,
        center: pt(350.0, 50.0),
        label_anchor: pt(315.0, 15.0),
        outline: &[pt(300.0, 0.0), pt(400.0, 0.0), pt(400.0, 100.0), pt(300.0, 100.0)],
    },
    GridCell {
        cell: 4,
        center: pt(350.0, 150.0),
        label_anchor: pt(315.0, 115.0),
        outline: &[pt(300.0, 100.0), pt(400.0, 100.0), pt(400.0, 200.0), pt(300.0, 200.0)],
    },
    GridCell {
        cell: 5,
        center: pt(350.0, 250.0),
        label_anchor: pt(315.0, 215.0),
        outline: &[pt(300.0, 200.0), pt(400.0, 200.0), pt(400.0, 300.0), pt(300.0, 300.0)],
    },
    GridCell {
        cell: 6,
        center: pt(350.0, 350.0),
        label_anchor: pt(315.0, 315.0),
        outline: &[pt(300.0, 300.0), pt(400.0, 300.0), pt(400.0, 400.0), pt(300.0, 400.0)],
    },
    GridCell {
        cell: 7,
        center: pt(250.0, 350.0),
        label_anchor: pt(215.0, 315.0),
        outline: &[pt(200.0, 300.0), pt(300.0, 300.0), pt(300.0, 400.0), pt(200.0, 400.0)],
    },
    GridCell {
        cell: 8,
        center: pt(150.0, 350.0),
        label_anchor: pt(115.0, 315.0),
        outline: &[pt(100.0, 300.0), pt(200.0, 300.0), pt(200.0, 400.0), pt(100.0, 400.0)],
    },
    GridCell {
        cell: 9,
        center: pt(50.0, 350.0),
        label_anchor: pt(15.0, 315.0),
        outline: &[pt(0.0, 300.0), pt(100.0, 300.0), pt(100.0, 400.0), pt(0.0, 400.0)],
    },
    GridCell {
        cell: 10,
        center: pt(50.0, 250.0),
        label_anchor: pt(15.0, 215.0),
        outline: &[pt(0.0, 200.0), pt(100.0, 200.0), pt(100.0, 300.0), pt(0.0, 300.0)],
    },
    GridCell {
        cell: 11,
        center: pt(50.0, 150.0),
        label_anchor: pt(15.0, 115.0),
        outline: &[pt(0.0, 100.0), pt(100.0, 100.0), pt(100.0, 200.0), pt(0.0, 200.0)],
    },
    // Pisces
    GridCell {
        cell: 12,
        center: pt(50.0, 50.0),
        label_anchor: pt(15.0, 15.0),
        outline: &[pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 100.0), pt(0.0, 100.0)],
    },
];

static NORTH_INDIAN_OUTLINE: [(Point, Point); 10] = [
    (pt(0.0, 0.0), pt(400.0, 0.0)),
    (pt(400.0, 0.0), pt(400.0, 400.0)),
    (pt(400.0, 400.0), pt(0.0, 400.0)),
    (pt(0.0, 400.0), pt(0.0, 0.0)),
    (pt(0.0, 0.0), pt(400.0, 400.0)),
    (pt(400.0, 0.0), pt(0.0, 400.0)),
    (pt(200.0, 0.0), pt(400.0, 200.0)),
    (pt(400.0, 200.0), pt(200.0, 400.0)),
    (pt(200.0, 400.0), pt(0.0, 200.0)),
    (pt(0.0, 200.0), pt(200.0, 0.0)),
];

static SOUTH_INDIAN_OUTLINE: [(Point, Point); 12] = [
    (pt(0.0, 0.0), pt(400.0, 0.0)),
    (pt(400.0, 0.0), pt(400.0, 400.0)),
    (pt(400.0, 400.0), pt(0.0, 400.0)),
    (pt(0.0, 400.0), pt(0.0, 0.0)),
    (pt(100.0, 0.0), pt(100.0, 400.0)),
    (pt(300.0, 0.0), pt(300.0, 400.0)),
    (pt(0.0, 100.0), pt(400.0, 100.0)),
    (pt(0.0, 300.0), pt(400.0, 300.0)),
    (pt(200.0, 0.0), pt(200.0, 100.0)),
    (pt(200.0, 300.0), pt(200.0, 400.0)),
    (pt(0.0, 200.0), pt(100.0, 200.0)),
    (pt(300.0, 200.0), pt(400.0, 200.0)),
];

impl DisplayConvention {
    /// The convention's 12 cells, indexed by `cell - 1`.
    #[must_use]
    pub fn cells(self) -> &'static [GridCell; 12] {
        match self {
            Self::NorthIndian => &NORTH_INDIAN_CELLS,
            Self::SouthIndian => &SOUTH_INDIAN_CELLS,
        }
    }

    pub fn cell(self, cell: u8) -> LayoutResult<&'static GridCell> {
        if !(1..=12).contains(&cell) {
            return Err(LayoutError::CellOutOfRange { cell });
        }
        Ok(&self.cells()[usize::from(cell - 1)])
    }

    /// Cell hosting a body resolved to `house` whose display sign is `sign`.
    #[must_use]
    pub fn cell_for(self, house: u8, sign: ZodiacSign) -> u8 {
        match self {
            Self::NorthIndian => house,
            Self::SouthIndian => sign.number(),
        }
    }

    pub fn cell_center(self, cell: u8) -> LayoutResult<Point> {
        Ok(self.cell(cell)?.center)
    }

    pub fn label_anchor(self, cell: u8) -> LayoutResult<Point> {
        Ok(self.cell(cell)?.label_anchor)
    }

    /// Cell occupied by `sign` once `ascendant` rises.
    ///
    /// Only the North Indian answer depends on the ascendant.
    #[must_use]
    pub fn cell_of_sign(self, ascendant: Ascendant, sign: ZodiacSign) -> u8 {
        self.cell_for(ascendant.sign.house_of(sign), sign)
    }

    /// Cell carrying the ascendant marker.
    #[must_use]
    pub fn ascendant_cell(self, ascendant: Ascendant) -> u8 {
        self.cell_of_sign(ascendant, ascendant.sign)
    }

    /// Sign drawn in `cell` for the given ascendant.
    pub fn sign_in_cell(self, ascendant: Ascendant, cell: u8) -> LayoutResult<ZodiacSign> {
        self.cell(cell)?;
        match self {
            Self::NorthIndian => ascendant.sign.for_house(cell),
            Self::SouthIndian => ZodiacSign::from_number(cell),
        }
    }

    /// Which cell contains `point`, if any. Points on shared edges resolve to
    /// the lower cell number.
    #[must_use]
    pub fn locate(self, point: Point) -> Option<u8> {
        self.cells()
            .iter()
            .find(|cell| polygon_contains(cell.outline, point))
            .map(|cell| cell.cell)
    }

    /// Line segments drawing the chart frame.
    #[must_use]
    pub fn outline_segments(self) -> &'static [(Point, Point)] {
        match self {
            Self::NorthIndian => &NORTH_INDIAN_OUTLINE,
            Self::SouthIndian => &SOUTH_INDIAN_OUTLINE,
        }
    }
}

/// Even-odd containment test; boundary points count as inside.
#[must_use]
pub fn polygon_contains(polygon: &[Point], point: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if on_segment(a, b, point) {
            return true;
        }
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace area of a simple polygon.
#[must_use]
pub fn polygon_area(polygon: &[Point]) -> f64 {
    let mut twice = 0.0;
    let mut j = polygon.len().saturating_sub(1);
    for i in 0..polygon.len() {
        twice += polygon[j].x * polygon[i].y - polygon[i].x * polygon[j].y;
        j = i;
    }
    (twice * 0.5).abs()
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    const EPS: f64 = 1e-9;
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross.abs() > EPS {
        return false;
    }
    p.x >= a.x.min(b.x) - EPS
        && p.x <= a.x.max(b.x) + EPS
        && p.y >= a.y.min(b.y) - EPS
        && p.y <= a.y.max(b.y) + EPS
}
