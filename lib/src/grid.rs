//! Rectangular row-major grids shared by the pipeline stages

/// A `width × height` grid stored row by row.
///
/// The cell count always equals `width * height`, so every row has the same
/// length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(x, y)` for every cell, top row first
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Wrap an existing row-major cell vector.
    ///
    /// Returns `None` if `cells.len()` is not `width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<T>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }

        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Cell at image coordinate `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact panics on a zero chunk size; an empty-width grid has
        // no cells, so yield `height` empty rows instead.
        let width = (self.width as usize).max(1);
        let empty_rows = if self.width == 0 { self.height as usize } else { 0 };

        self.cells
            .chunks_exact(width)
            .chain(std::iter::repeat_n(&[][..], empty_rows))
    }

    /// Apply `f` to every cell, keeping the shape
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_row_major() {
        let grid = Grid::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.get(2, 1), Some(&(2, 1)));
        assert_eq!(grid.get(0, 1), Some(&(0, 1)));
    }

    #[test]
    fn test_from_cells_rejects_ragged() {
        assert!(Grid::from_cells(2, 2, vec![0u8; 3]).is_none());
        assert!(Grid::from_cells(2, 2, vec![0u8; 4]).is_some());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::from_fn(2, 2, |_, _| 0u8);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_rows() {
        let grid = Grid::from_cells(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[i32]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }

    #[test]
    fn test_rows_zero_width() {
        let grid: Grid<u8> = Grid::from_fn(0, 3, |_, _| 0);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.is_empty()));
    }

    #[test]
    fn test_map_keeps_shape() {
        let grid = Grid::from_fn(4, 3, |x, y| x + y);
        let doubled = grid.map(|v| v * 2);
        assert_eq!(doubled.dimensions(), (4, 3));
        assert_eq!(doubled.get(3, 2), Some(&10));
    }
}
