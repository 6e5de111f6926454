//! The N-by-N percolation grid.
//!
//! Sites are addressed by 1-indexed `(row, col)` pairs, `1 <= row, col <= N`.
//! Internally a site is the offset `(row - 1) * N + (col - 1)`, and two virtual
//! sites are appended: `N*N` is the top of the grid and `N*N + 1` is the bottom.
//! # Example
//! ```rust
//! use percolation::grid::Percolation;
//! let mut grid = Percolation::new(3).unwrap();
//! for row in 1..=3 {
//!     grid.open(row, 2).unwrap();
//! }
//! assert!(grid.percolates());
//! assert!(grid.is_full(3, 2).unwrap());
//! ```
use crate::error::{PercolationError, Result};
use crate::find_union::FindUnion;
use definitions::Site;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

#[derive(Debug, Clone)]
pub struct Percolation {
    size: usize,
    // sites[i] is true iff the i-th site is open.
    sites: Vec<bool>,
    open_sites: usize,
    // Sites + top + bottom. Answers `percolates`.
    connection: FindUnion,
    // Sites + top only. Answers `is_full`, so that a bottom row site
    // never becomes full through the bottom node.
    fullness: FindUnion,
}

impl Percolation {
    /// Create an N-by-N grid, with all sites blocked.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size should be positive",
            ));
        }
        let cells = size
            .checked_mul(size)
            .filter(|cells| cells.checked_add(2).is_some())
            .ok_or(PercolationError::InvalidArgument("grid size is too large"))?;
        Ok(Self {
            size,
            sites: vec![false; cells],
            open_sites: 0,
            connection: FindUnion::new(cells + 2)?,
            fullness: FindUnion::new(cells + 1)?,
        })
    }
    /// The length of a side of the grid.
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }
    /// The open sites in row-major order.
    pub fn open_sites(&self) -> Vec<Site> {
        self.sites
            .iter()
            .enumerate()
            .filter(|&(_, &open)| open)
            .map(|(index, _)| Site::new(index / self.size + 1, index % self.size + 1))
            .collect()
    }
    fn top(&self) -> usize {
        self.sites.len()
    }
    fn bottom(&self) -> usize {
        self.sites.len() + 1
    }
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || col == 0 || self.size < row || self.size < col {
            Err(PercolationError::OutOfRange {
                row,
                col,
                size: self.size,
            })
        } else {
            Ok((row - 1) * self.size + (col - 1))
        }
    }
    fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let (row, col) = (index / self.size, index % self.size);
        match direction {
            Direction::Up if 0 < row => Some(index - self.size),
            Direction::Right if col + 1 < self.size => Some(index + 1),
            Direction::Down if row + 1 < self.size => Some(index + self.size),
            Direction::Left if 0 < col => Some(index - 1),
            _ => None,
        }
    }
    /// Open site (row, col) if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.index(row, col)?;
        if self.sites[index] {
            return Ok(());
        }
        self.sites[index] = true;
        self.open_sites += 1;
        let (top, bottom) = (self.top(), self.bottom());
        if row == 1 {
            self.connection.union(index, top)?;
            self.fullness.union(index, top)?;
        }
        // Only a site in the last row reaches the bottom.
        if row == self.size {
            self.connection.union(index, bottom)?;
        }
        for &direction in DIRECTIONS.iter() {
            if let Some(next) = self.neighbor(index, direction) {
                if self.sites[next] {
                    self.connection.union(index, next)?;
                    self.fullness.union(index, next)?;
                }
            }
        }
        trace!("OPEN\t{}\t{}\t{}", row, col, self.open_sites);
        Ok(())
    }
    /// Is site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let index = self.index(row, col)?;
        Ok(self.sites[index])
    }
    /// Is site (row, col) full? A full site is an open site connected to the top row
    /// through a chain of open neighboring sites.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let index = self.index(row, col)?;
        let top = self.top();
        Ok(self.sites[index] && self.fullness.same(index, top))
    }
    /// Does the system percolate?
    pub fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.top(), self.bottom());
        self.connection.same(top, bottom)
    }
}

// X: blocked, .: open, #: full.
impl std::fmt::Display for Percolation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let top = self.top();
        for (offset, sites) in self.sites.chunks_exact(self.size).enumerate() {
            let line: String = sites
                .iter()
                .enumerate()
                .map(|(col, &open)| {
                    let index = offset * self.size + col;
                    match open {
                        false => 'X',
                        true if self.fullness.same_no_compress(index, top) => '#',
                        true => '.',
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        let percolates = self.connection.same_no_compress(top, self.bottom());
        write!(f, "Percolates:{}", percolates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;
    #[test]
    fn empty_grid() {
        assert_eq!(
            Percolation::new(0).unwrap_err(),
            PercolationError::InvalidArgument("grid size should be positive")
        );
        for size in 1..6 {
            let mut grid = Percolation::new(size).unwrap();
            assert_eq!(grid.size(), size);
            assert_eq!(grid.number_of_open_sites(), 0);
            assert!(!grid.percolates());
            for row in 1..=size {
                for col in 1..=size {
                    assert_eq!(grid.is_open(row, col), Ok(false));
                    assert_eq!(grid.is_full(row, col), Ok(false));
                }
            }
        }
    }

    #[test]
    fn out_of_range() {
        let mut grid = Percolation::new(3).unwrap();
        for &(row, col) in [(0, 1), (1, 0), (4, 1), (1, 4), (0, 0), (4, 4)].iter() {
            let err = PercolationError::OutOfRange { row, col, size: 3 };
            assert_eq!(grid.open(row, col), Err(err.clone()));
            assert_eq!(grid.is_open(row, col), Err(err.clone()));
            assert_eq!(grid.is_full(row, col), Err(err));
        }
        assert_eq!(grid.number_of_open_sites(), 0);
        assert!(!grid.percolates());
    }

    #[test]
    fn open_is_idempotent() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 2).unwrap();
        assert_eq!(grid.is_open(2, 2), Ok(true));
        for _ in 0..3 {
            grid.open(2, 2).unwrap();
        }
        assert_eq!(grid.is_open(2, 2), Ok(true));
        assert_eq!(grid.number_of_open_sites(), 1);
        assert_eq!(grid.is_full(2, 2), Ok(false));
    }

    #[test]
    fn single_site() {
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 1).unwrap();
        assert!(grid.percolates());
        assert_eq!(grid.is_full(1, 1), Ok(true));
    }

    #[test]
    fn top_row_is_full() {
        let mut grid = Percolation::new(4).unwrap();
        grid.open(1, 3).unwrap();
        assert_eq!(grid.is_full(1, 3), Ok(true));
        grid.open(4, 3).unwrap();
        assert_eq!(grid.is_full(4, 3), Ok(false));
        assert!(!grid.percolates());
    }

    #[test]
    fn staircase() {
        let mut grid = Percolation::new(4).unwrap();
        let path = [(1, 1), (2, 1), (2, 2), (3, 2), (3, 3), (4, 3)];
        for (i, &(row, col)) in path.iter().enumerate() {
            assert!(!grid.percolates());
            grid.open(row, col).unwrap();
            if i == 3 {
                assert_eq!(grid.is_full(3, 2), Ok(true));
            }
            assert_eq!(grid.percolates(), i == path.len() - 1);
        }
        for &(row, col) in path.iter() {
            assert_eq!(grid.is_full(row, col), Ok(true));
        }
        assert_eq!(grid.is_full(4, 4), Ok(false));
    }

    #[test]
    fn no_backwash() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(3, 1).unwrap();
        assert!(grid.percolates());
        grid.open(3, 3).unwrap();
        assert_eq!(grid.is_open(3, 3), Ok(true));
        assert_eq!(grid.is_full(3, 3), Ok(false));
        assert_eq!(grid.is_full(3, 1), Ok(true));
        // Connecting (3,3) to the filled column makes it full.
        grid.open(3, 2).unwrap();
        assert_eq!(grid.is_full(3, 3), Ok(true));
    }

    #[test]
    fn edges_do_not_wrap() {
        // (1,3) and (2,1) are adjacent in memory but not on the grid.
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 3).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(3, 1).unwrap();
        assert!(!grid.percolates());
        assert_eq!(grid.is_full(2, 1), Ok(false));
    }

    #[test]
    fn full_implies_open_and_monotone() {
        let size = 12;
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(32_049);
        let mut grid = Percolation::new(size).unwrap();
        let mut percolated = false;
        for _ in 0..size * size * 2 {
            let (row, col) = (rng.gen_range(1..=size), rng.gen_range(1..=size));
            grid.open(row, col).unwrap();
            if percolated {
                assert!(grid.percolates());
            }
            percolated = grid.percolates();
            for row in 1..=size {
                for col in 1..=size {
                    if grid.is_full(row, col).unwrap() {
                        assert!(grid.is_open(row, col).unwrap());
                    }
                }
            }
        }
        let opened = (1..=size)
            .flat_map(|row| (1..=size).map(move |col| (row, col)))
            .filter(|&(row, col)| grid.is_open(row, col).unwrap())
            .count();
        assert_eq!(opened, grid.number_of_open_sites());
    }

    #[test]
    fn open_sites_are_one_indexed() {
        let mut grid = Percolation::new(3).unwrap();
        assert!(grid.open_sites().is_empty());
        grid.open(3, 3).unwrap();
        grid.open(1, 2).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(1, 2).unwrap();
        let expected = vec![Site::new(1, 2), Site::new(2, 1), Site::new(3, 3)];
        assert_eq!(grid.open_sites(), expected);
        for site in grid.open_sites() {
            assert_eq!(grid.is_open(site.row, site.col), Ok(true));
        }
    }

    #[test]
    fn display() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(3, 3).unwrap();
        assert_eq!(format!("{}", grid), "#XX\n#XX\nXX.\nPercolates:false");
        grid.open(3, 1).unwrap();
        assert_eq!(format!("{}", grid), "#XX\n#XX\n#X.\nPercolates:true");
    }
}
