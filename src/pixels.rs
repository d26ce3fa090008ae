use crate::grid::{GridCell, GRID_SIDE};


pub const CELL_SIZE: u32 = 50;
pub const CANVAS_SIZE: u32 = CELL_SIZE * GRID_SIDE as u32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32
}

/// Half-open pixel rectangle: `bottom_right` is exclusive on both
/// axes, so adjacent cells share no pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    pub top_left: Point,
    pub bottom_right: Point
}

pub fn map_to_rects(cells: &[GridCell]) -> Vec<PixelRect> {
    cells.iter()
        .map(|cell| rect_for_index(cell.index))
        .collect()
}

pub fn rect_for_index(index: usize) -> PixelRect {
    let column = (index % GRID_SIDE) as u32;
    let row = (index / GRID_SIDE) as u32;

    PixelRect {
        top_left: Point {
            x: column * CELL_SIZE,
            y: row * CELL_SIZE
        },
        bottom_right: Point {
            x: column * CELL_SIZE + CELL_SIZE,
            y: row * CELL_SIZE + CELL_SIZE
        }
    }
}
