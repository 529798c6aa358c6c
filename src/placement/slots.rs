use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{LayoutError, LayoutResult};

/// Hands out stacking slots per cell in arrival order.
///
/// Slots are never revisited: once a body holds slot `n` in a cell, later
/// bodies in that cell receive `n + 1` and up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotAllocator {
    next: [usize; 12],
}

impl SlotAllocator {
    /// Resumes allocation after slots already taken in each cell.
    pub fn resume(cells: impl IntoIterator<Item = (u8, usize)>) -> LayoutResult<Self> {
        let mut allocator = Self::default();
        for (cell, slot_index) in cells {
            let counter = allocator.counter_mut(cell)?;
            *counter = (*counter).max(slot_index + 1);
        }
        Ok(allocator)
    }

    pub fn allocate(&mut self, cell: u8) -> LayoutResult<usize> {
        let counter = self.counter_mut(cell)?;
        let slot = *counter;
        *counter += 1;
        Ok(slot)
    }

    /// Number of slots handed out in `cell`.
    pub fn occupied(&self, cell: u8) -> LayoutResult<usize> {
        if !(1..=12).contains(&cell) {
            return Err(LayoutError::CellOutOfRange { cell });
        }
        Ok(self.next[usize::from(cell - 1)])
    }

    fn counter_mut(&mut self, cell: u8) -> LayoutResult<&mut usize> {
        if !(1..=12).contains(&cell) {
            return Err(LayoutError::CellOutOfRange { cell });
        }
        Ok(&mut self.next[usize::from(cell - 1)])
    }
}

/// Geometry for stacked labels inside one cell, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotLayoutConfig {
    pub line_height: f64,
    pub max_per_column: usize,
    pub column_width: f64,
}

impl Default for SlotLayoutConfig {
    fn default() -> Self {
        Self {
            line_height: 14.0,
            max_per_column: 4,
            column_width: 38.0,
        }
    }
}

impl SlotLayoutConfig {
    pub(crate) fn validate(self) -> LayoutResult<Self> {
        for (value, name) in [
            (self.line_height, "line_height"),
            (self.column_width, "column_width"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidData(format!(
                    "slot layout `{name}` must be finite and > 0"
                )));
            }
        }
        if self.max_per_column == 0 {
            return Err(LayoutError::InvalidData(
                "slot layout `max_per_column` must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Position of label `slot_index` among `slot_count` labels stacked around
/// `center`.
///
/// Labels fill a column top to bottom; a cell holding more than
/// `max_per_column` labels spills into further columns, and the whole block
/// stays centred on `center`.
pub fn slot_position(
    center: Point,
    slot_index: usize,
    slot_count: usize,
    config: SlotLayoutConfig,
) -> LayoutResult<Point> {
    let config = config.validate()?;
    if slot_index >= slot_count {
        return Err(LayoutError::InvalidData(format!(
            "slot index {slot_index} outside {slot_count} stacked labels"
        )));
    }

    let per_column = config.max_per_column;
    let columns = slot_count.div_ceil(per_column);
    let column = slot_index / per_column;
    let row = slot_index % per_column;
    let rows_in_column = (slot_count - column * per_column).min(per_column);

    let x_offset = (column as f64 - (columns as f64 - 1.0) * 0.5) * config.column_width;
    let y_offset = (row as f64 - (rows_in_column as f64 - 1.0) * 0.5) * config.line_height;
    Ok(Point::new(center.x + x_offset, center.y + y_offset))
}
