mod components;
mod config;

pub use components::{Area, Point};
pub use config::GridConfig;

use crate::{
    grid_like::{clamp_total, GridLike},
    grid_region::GridRegion, Brightness, LightGridError,
    DEFAULT_PARALLEL_THRESHOLD,
};
use rayon::prelude::*;
use std::{fmt, str::FromStr};
use tracing::*;

/// A fixed-size grid of lights, each holding an integer brightness.
///
/// Cells are stored row by row in one contiguous buffer: row `x` holds the
/// `height` cells `(x, 0) ..= (x, height - 1)`.
///
/// # Example
/// ```
/// use lightgrid::{GridLike, LightGrid};
///
/// let mut grid = LightGrid::new(10, 10).unwrap();
/// grid.increase_in_range(0, 0, 4, 4, 1).unwrap();
/// assert_eq!(grid.total_light_value(), 25);
/// assert_eq!(grid.lights_off(), 75);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LightGrid {
    width: u32,
    height: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    config: GridConfig,
    cells: Vec<Brightness>,
}

impl LightGrid {
    /// Creates a grid with every light at zero and the default configuration.
    ///
    /// # Errors
    /// [`LightGridError::InvalidDimensions`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, LightGridError> {
        Self::with_config(width, height, GridConfig::default())
    }

    /// Creates a zeroed grid with a custom configuration.
    ///
    /// # Example
    /// ```
    /// use lightgrid::{GridConfig, GridLike, LightGrid};
    ///
    /// let grid = LightGrid::with_config(1000, 1000, GridConfig::new(true, 4096)).unwrap();
    /// assert_eq!(grid.size(), 1_000_000);
    /// ```
    pub fn with_config(
        width: u32,
        height: u32,
        config: GridConfig,
    ) -> Result<Self, LightGridError> {
        trace!("Creating {}x{} light grid with config: {:?}", width, height, config);
        if width == 0 || height == 0 {
            error!("Invalid grid size: width={}, height={}", width, height);
            return Err(LightGridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            config,
            cells: vec![0; width as usize * height as usize],
        })
    }

    /// Builds a grid from explicit rows, where `rows[x][y]` is the light at `(x, y)`.
    ///
    /// # Example
    /// ```
    /// use lightgrid::{GridLike, LightGrid};
    ///
    /// let grid = LightGrid::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
    /// assert_eq!(grid.dimensions(), (2, 3));
    /// assert_eq!(grid.light_value(1, 2).unwrap(), 5);
    /// ```
    ///
    /// # Errors
    /// [`LightGridError::InvalidDimensions`] for no rows or empty rows, and
    /// [`LightGridError::RaggedRows`] for rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<Brightness>>) -> Result<Self, LightGridError> {
        let height = rows.first().map_or(0, Vec::len);
        let invalid = || LightGridError::InvalidDimensions {
            width: u32::try_from(rows.len()).unwrap_or(u32::MAX),
            height: u32::try_from(height).unwrap_or(u32::MAX),
        };
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != height)
        {
            error!("Ragged rows passed to LightGrid::from_rows: row {} has {} lights", row, found);
            return Err(LightGridError::RaggedRows {
                row,
                expected: height,
                found,
            });
        }
        let width = u32::try_from(rows.len()).map_err(|_| invalid())?;
        let height = u32::try_from(height).map_err(|_| invalid())?;

        let mut grid = Self::new(width, height)?;
        grid.cells = rows.into_iter().flatten().collect();
        Ok(grid)
    }

    /// Assembles a grid from already validated parts.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        config: GridConfig,
        cells: Vec<Brightness>,
    ) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            config,
            cells,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
    }

    /// Sets a light to `value` as is; no clamping is applied.
    pub fn set_light_value(
        &mut self,
        x: u32,
        y: u32,
        value: Brightness,
    ) -> Result<(), LightGridError> {
        let index = self.index(x, y)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Adds `delta` to a light. A negative delta may take the value below zero.
    pub fn increase(&mut self, x: u32, y: u32, delta: Brightness) -> Result<(), LightGridError> {
        let index = self.index(x, y)?;
        self.cells[index] = raised(self.cells[index], delta);
        Ok(())
    }

    /// Subtracts `delta` from a light, clamping the result at zero.
    pub fn decrease(&mut self, x: u32, y: u32, delta: Brightness) -> Result<(), LightGridError> {
        let index = self.index(x, y)?;
        self.cells[index] = lowered(self.cells[index], delta);
        Ok(())
    }

    /// Adds `delta` to every light in the closed rectangle `[x1, x2] × [y1, y2]`.
    ///
    /// An inverted rectangle (`x1 > x2` or `y1 > y2`) touches nothing and succeeds.
    /// The rectangle is validated before any light changes, so a failed call
    /// leaves the grid as it was.
    ///
    /// # Example
    /// ```
    /// use lightgrid::{GridLike, LightGrid, LightGridError};
    ///
    /// let mut grid = LightGrid::new(10, 10).unwrap();
    /// grid.increase_in_range(9, 0, 0, 9, 1).unwrap(); // inverted: no-op
    /// assert_eq!(grid.total_light_value(), 0);
    ///
    /// let err = grid.increase_in_range(5, 5, 10, 10, 1).unwrap_err();
    /// assert!(matches!(err, LightGridError::OutOfBounds { x: 10, y: 10, .. }));
    /// assert_eq!(grid.total_light_value(), 0);
    /// ```
    pub fn increase_in_range(
        &mut self,
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        delta: Brightness,
    ) -> Result<(), LightGridError> {
        trace!("Increasing ({}, {})..=({}, {}) by {}", x1, y1, x2, y2, delta);
        self.apply_to_area(Area::from_corners(x1, y1, x2, y2), |value| {
            *value = raised(*value, delta)
        })
    }

    /// Subtracts `delta` from every light in the closed rectangle, each light
    /// clamping at zero on its own. Same range rules as [`Self::increase_in_range`].
    pub fn decrease_in_range(
        &mut self,
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        delta: Brightness,
    ) -> Result<(), LightGridError> {
        trace!("Decreasing ({}, {})..=({}, {}) by {}", x1, y1, x2, y2, delta);
        self.apply_to_area(Area::from_corners(x1, y1, x2, y2), |value| {
            *value = lowered(*value, delta)
        })
    }

    /// Borrows a read-only view over the closed rectangle `[x1, x2] × [y1, y2]`.
    ///
    /// # Example
    /// ```
    /// use lightgrid::{GridLike, LightGrid};
    ///
    /// let mut grid = LightGrid::new(10, 10).unwrap();
    /// grid.increase_in_range(0, 0, 9, 9, 1).unwrap();
    /// let region = grid.region(2, 2, 4, 5).unwrap();
    /// assert_eq!(region.dimensions(), (3, 4));
    /// assert_eq!(region.total_light_value(), 12);
    /// ```
    ///
    /// # Errors
    /// [`LightGridError::InvalidDimensions`] for an inverted rectangle and
    /// [`LightGridError::OutOfBounds`] when it reaches past the grid.
    pub fn region(
        &self,
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
    ) -> Result<GridRegion<'_>, LightGridError> {
        let area = Area::from_corners(x1, y1, x2, y2);
        if area.is_empty() {
            return Err(LightGridError::InvalidDimensions {
                width: area.row_count(),
                height: area.row_len(),
            });
        }
        self.index(x2, y2)?;
        Ok(GridRegion::new(self, area))
    }

    /// Cells of row `x`. Callers guarantee `x < width`.
    pub(crate) fn row(&self, x: u32) -> &[Brightness] {
        let start = x as usize * self.height as usize;
        &self.cells[start..start + self.height as usize]
    }

    /// Runs `op` on every cell of `area` after checking the whole area fits.
    fn apply_to_area<F>(&mut self, area: Area, op: F) -> Result<(), LightGridError>
    where
        F: Fn(&mut Brightness) + Sync,
    {
        if area.is_empty() {
            debug!("Skipping inverted range {:?}", area);
            return Ok(());
        }
        // from <= to on both axes, so the far corner bounds the whole area
        self.index(area.to.x, area.to.y)?;

        let height = self.height as usize;
        let (first_row, row_count) = (area.from.x as usize, area.row_count() as usize);
        let (y1, y2) = (area.from.y as usize, area.to.y as usize);

        if self.config.runs_parallel(area.cell_count()) {
            debug!("Applying range over {} cells in parallel", area.cell_count());
            self.cells
                .par_chunks_mut(height)
                .skip(first_row)
                .take(row_count)
                .for_each(|row| row[y1..=y2].iter_mut().for_each(&op));
        } else {
            self.cells
                .chunks_mut(height)
                .skip(first_row)
                .take(row_count)
                .for_each(|row| row[y1..=y2].iter_mut().for_each(&op));
        }
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, LightGridError> {
        if x >= self.width || y >= self.height {
            return Err(LightGridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x as usize * self.height as usize + y as usize)
    }
}

fn raised(value: Brightness, delta: Brightness) -> Brightness {
    value.saturating_add(delta)
}

fn lowered(value: Brightness, delta: Brightness) -> Brightness {
    value.saturating_sub(delta).max(0)
}

impl GridLike for LightGrid {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn light_value(&self, x: u32, y: u32) -> Result<Brightness, LightGridError> {
        Ok(self.cells[self.index(x, y)?])
    }

    fn values(&self) -> impl Iterator<Item = Brightness> + '_ {
        self.cells.iter().copied()
    }

    fn total_light_value(&self) -> Brightness {
        if self.config.runs_parallel(self.cells.len()) {
            clamp_total(self.cells.par_iter().map(|&value| i128::from(value)).sum())
        } else {
            clamp_total(self.cells.iter().map(|&value| i128::from(value)).sum())
        }
    }
}

/// Grids compare by dimensions and lights; configuration is ignored.
impl PartialEq for LightGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for LightGrid {}

/// Textual dump: one line per row `x`, the values of `(x, 0..height)`
/// concatenated without separators. Meant for eyeballing, not parsing.
impl fmt::Display for LightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.height as usize) {
            for value in row {
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
