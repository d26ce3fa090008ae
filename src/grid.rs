use crate::hash::HashedInput;

#[cfg(test)]
mod test {
    use super::*;
    use crate::hash::HASH_LEN;

    const HASHED_BYTES: [u8; HASH_LEN] = [
        // chunk 0 -> row 0
        148, 180, 14,

        // chunk 1 -> row 1
        255, 245, 194,

        // chunk 2 -> row 2
        211, 91, 98,

        // chunk 3 -> row 3
        67, 120, 76,

        // chunk 4 -> row 4
        136, 175, 232
    ];

    const EXPECTED_VALUES: [u8; GRID_CELLS] = [
        148, 180, 14, 180, 148,
        255, 245, 194, 245, 255,
        211, 91, 98, 91, 211,
        67, 120, 76, 120, 67,
        136, 175, 232, 175, 136
    ];

    const EXPECTED_FILLED_INDICES: [usize; 13] =
        [0, 1, 2, 3, 4, 7, 12, 16, 17, 18, 20, 22, 24];

    fn hashed() -> HashedInput {
        HashedInput::new(HASHED_BYTES)
    }

    #[test]
    fn test_build_grid_matches_reference() {
        let grid = build_grid(&hashed());

        assert_eq!(grid.len(), GRID_CELLS);
        for (position, cell) in grid.iter().enumerate() {
            assert_eq!(cell.index, position);
            assert_eq!(cell.value, EXPECTED_VALUES[position]);
        }
    }

    #[test]
    fn test_rows_are_palindromes() {
        let grid = build_grid(&hashed());

        for row in 0..GRID_SIDE {
            let row = &grid[row * GRID_SIDE..(row + 1) * GRID_SIDE];
            assert_eq!(row[0].value, row[4].value);
            assert_eq!(row[1].value, row[3].value);
        }
    }

    #[test]
    fn test_indices_are_row_major() {
        for cell in build_grid(&hashed()) {
            let row = cell.index / GRID_SIDE;
            let column = cell.index % GRID_SIDE;
            assert_eq!(cell.index, row * GRID_SIDE + column);
            assert!(row < GRID_SIDE && column < GRID_SIDE);
        }
    }

    #[test]
    fn test_filter_retains_even_values_only() {
        let filled = filter_even(build_grid(&hashed()));

        let indices: Vec<usize> = filled.iter().map(|cell| cell.index).collect();
        assert_eq!(indices, EXPECTED_FILLED_INDICES);

        for cell in &filled {
            assert_eq!(cell.value % 2, 0);
        }
    }

    #[test]
    fn test_filter_drops_odd_values_only() {
        let grid = build_grid(&hashed());
        let filled = filter_even(grid.clone());

        for cell in grid {
            let retained = filled.contains(&cell);
            assert_eq!(retained, cell.value % 2 == 0);
        }
    }

    #[test]
    fn test_filter_keeps_nothing_for_all_odd_grid() {
        let all_odd = HashedInput::new([1; HASH_LEN]);
        assert!(filter_even(build_grid(&all_odd)).is_empty());
    }
}

pub const GRID_SIDE: usize = 5;
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

const CHUNK_LEN: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub value: u8,
    pub index: usize
}

/// Expands the hashed bytes into the 25-cell pattern grid. Every
/// 3-byte chunk `[a, b, c]` becomes the palindromic row
/// `[a, b, c, b, a]`, which makes each row band of the final image
/// left-right symmetric. Cell indices are assigned row-major over the
/// flattened grid.
pub fn build_grid(hashed: &HashedInput) -> Vec<GridCell> {
    let mut cells = Vec::with_capacity(GRID_CELLS);

    for (row, chunk) in hashed.bytes().chunks_exact(CHUNK_LEN).enumerate() {
        for (column, value) in mirror_chunk(chunk).into_iter().enumerate() {
            cells.push(GridCell {
                value,
                index: row * GRID_SIDE + column
            });
        }
    }

    cells
}

fn mirror_chunk(chunk: &[u8]) -> [u8; GRID_SIDE] {
    [chunk[0], chunk[1], chunk[2], chunk[1], chunk[0]]
}

/// Even values render as filled cells, odd values as background.
/// Relative order is preserved.
pub fn filter_even(cells: Vec<GridCell>) -> Vec<GridCell> {
    cells.into_iter()
        .filter(|cell| cell.value % 2 == 0)
        .collect()
}
