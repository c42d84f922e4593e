use crate::{
    grid::{Area, LightGrid},
    grid_like::GridLike,
    Brightness, LightGridError,
};

/// A borrowed, read-only rectangle of a [`LightGrid`].
///
/// Coordinates passed to a region are relative to its top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct GridRegion<'a> {
    grid: &'a LightGrid,
    area: Area,
}

impl<'a> GridRegion<'a> {
    /// Callers guarantee `area` is non-empty and inside `grid`.
    pub(crate) fn new(grid: &'a LightGrid, area: Area) -> Self {
        Self { grid, area }
    }

    /// The covered rectangle in grid coordinates.
    pub fn area(&self) -> Area {
        self.area
    }
}

impl GridLike for GridRegion<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (self.area.row_count(), self.area.row_len())
    }

    fn light_value(&self, x: u32, y: u32) -> Result<Brightness, LightGridError> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(LightGridError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.grid
            .light_value(self.area.from.x + x, self.area.from.y + y)
    }

    fn values(&self) -> impl Iterator<Item = Brightness> + '_ {
        let (y1, y2) = (self.area.from.y as usize, self.area.to.y as usize);
        (self.area.from.x..=self.area.to.x)
            .flat_map(move |x| self.grid.row(x)[y1..=y2].iter().copied())
    }
}

/// Regions compare by shape and covered lights, wherever they sit.
impl PartialEq for GridRegion<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.values().eq(other.values())
    }
}

/// Creates a region spanning a whole grid.
impl<'a> From<&'a LightGrid> for GridRegion<'a> {
    fn from(grid: &'a LightGrid) -> Self {
        let (width, height) = grid.dimensions();
        Self::new(grid, Area::from_corners(0, 0, width - 1, height - 1))
    }
}

/// Copies a region out into a standalone grid with the parent's configuration.
impl<'a> From<GridRegion<'a>> for LightGrid {
    fn from(region: GridRegion<'a>) -> Self {
        let (width, height) = region.dimensions();
        LightGrid::from_parts(width, height, *region.grid.config(), region.values().collect())
    }
}
