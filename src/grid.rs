/// A rectangular 2D field of values with fixed dimensions.
///
/// Unlike a wrapping world map, coordinates outside the field are simply
/// absent: neighbor probes use [`Grid::try_get`] and treat a miss as
/// "no cell there", never as zero.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

/// An (x, y) cell coordinate.
pub type Point = (usize, usize);

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build a grid from a row-major value buffer.
    /// The buffer length must equal `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), width * height, "row-major buffer size mismatch");
        Self { width, height, data }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Bounds-safe access for neighbor probing. Accepts signed coordinates
    /// so callers can offset from the edge without pre-checks; returns
    /// `None` for any out-of-range cell.
    pub fn try_get(&self, x: i64, y: i64) -> Option<&T> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(&self.data[y as usize * self.width + x as usize])
    }

    /// Fill the entire grid with a value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    /// Row-major view of the raw values.
    pub fn raw(&self) -> &[T] {
        &self.data
    }
}

/// Offsets of the 8-neighborhood around a cell (dx, dy).
pub const NEIGHBOR_OFFSETS_8: [(i64, i64); 8] = [
    (0, -1),  // up
    (1, -1),  // up-right
    (1, 0),   // right
    (1, 1),   // down-right
    (0, 1),   // down
    (-1, 1),  // down-left
    (-1, 0),  // left
    (-1, -1), // up-left
];

/// Offsets of the 4-connected neighborhood around a cell (dx, dy).
pub const NEIGHBOR_OFFSETS_4: [(i64, i64); 4] = [
    (0, -1), // up
    (-1, 0), // left
    (0, 1),  // down
    (1, 0),  // right
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(*grid.get(0, 0), 0);
        grid.set(3, 2, 200);
        assert_eq!(*grid.get(3, 2), 200);
        assert_eq!(grid.width, 4);
        assert_eq!(grid.height, 3);
    }

    #[test]
    fn test_try_get_in_bounds() {
        let mut grid: Grid<u8> = Grid::new(2, 2);
        grid.set(1, 0, 42);
        assert_eq!(grid.try_get(1, 0), Some(&42));
    }

    #[test]
    fn test_try_get_out_of_bounds() {
        let grid: Grid<u8> = Grid::new(2, 2);
        assert_eq!(grid.try_get(-1, 0), None);
        assert_eq!(grid.try_get(0, -1), None);
        assert_eq!(grid.try_get(2, 0), None);
        assert_eq!(grid.try_get(0, 2), None);
    }

    #[test]
    fn test_from_raw_row_major() {
        let grid = Grid::from_raw(2, 2, vec![1u8, 2, 3, 4]);
        assert_eq!(*grid.get(0, 0), 1);
        assert_eq!(*grid.get(1, 0), 2);
        assert_eq!(*grid.get(0, 1), 3);
        assert_eq!(*grid.get(1, 1), 4);
    }

    #[test]
    fn test_iter_coordinates() {
        let grid = Grid::from_raw(3, 2, vec![0u8, 1, 2, 3, 4, 5]);
        let cells: Vec<_> = grid.iter().map(|(x, y, &v)| (x, y, v)).collect();
        assert_eq!(cells[0], (0, 0, 0));
        assert_eq!(cells[4], (1, 1, 4));
        assert_eq!(cells.len(), 6);
    }
}
