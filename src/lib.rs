//! A fixed-size grid of integer "lights" that can be raised or lowered over
//! rectangular ranges, with aggregate brightness queries.
//!
//! Range mutations and the brightness sum can run on the `rayon` pool; see
//! [`GridConfig`].

/// Textual dumps of a grid for manual inspection.
///
/// # Example
/// ```
/// use lightgrid::{debug, LightGrid};
///
/// let grid = LightGrid::new(3, 3).unwrap();
/// debug::write_dump(&grid, std::io::stdout().lock()).unwrap();
/// ```
pub mod debug;
/// The grid itself, its configuration and coordinate types.
pub mod grid;
/// The read-only query trait shared by grids and regions.
pub mod grid_like;
/// Borrowed rectangular views of a grid.
pub mod grid_region;
/// Parsing and applying santa's `turn on` / `turn off` / `toggle` instructions.
pub mod instruction;

pub use grid::{Area, GridConfig, LightGrid, Point};
pub use grid_like::GridLike;
pub use grid_region::GridRegion;
pub use instruction::{parse_instructions, Action, Instruction, SANTA_INSTRUCTIONS};
use thiserror::Error;

/// Brightness of a single light.
pub type Brightness = i64;

// Below this many cells the rayon fork/join overhead outweighs the work
const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LightGridError {
    #[error("Invalid grid size: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid light position: x={x}, y={y} (grid is {width}x{height})")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Ragged rows: row {row} has {found} lights, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Failed to parse instruction: {0}")]
    InstructionParseError(String),

    #[error("Failed to write grid dump: {0}")]
    DumpError(String),
}

/// Creates a [`LightGrid`] from literal rows, `light_grid![[row x = 0], [row x = 1], ...]`.
///
/// Expands to [`LightGrid::from_rows`], so the result is a `Result` that
/// fails on empty or ragged rows.
///
/// # Examples
///
/// ```rust
/// use lightgrid::{light_grid, GridLike};
///
/// let grid = light_grid![
///     [0, 1, 0],
///     [2, 0, 3],
/// ]
/// .unwrap();
///
/// assert_eq!(grid.dimensions(), (2, 3));
/// assert_eq!(grid.light_value(1, 2).unwrap(), 3);
/// assert_eq!(grid.total_light_value(), 6);
/// ```
#[macro_export]
macro_rules! light_grid {
    ($([$($value:expr),* $(,)?]),+ $(,)?) => {
        $crate::LightGrid::from_rows(vec![$(vec![$($value),*]),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_size_of_large_grid() {
        let grid = LightGrid::new(1000, 1000).unwrap();
        assert_eq!(grid.size(), 1_000_000);
    }

    #[test]
    fn test_increases_the_correct_amount_of_lights() {
        let mut grid = LightGrid::new(1000, 1000).unwrap();
        grid.increase_in_range(0, 0, 0, 0, 1).unwrap();
        assert_eq!(grid.total_light_value(), 1);

        let mut grid = LightGrid::new(1000, 1000).unwrap();
        grid.increase_in_range(0, 0, 999, 999, 2).unwrap();
        assert_eq!(grid.total_light_value(), 2_000_000);
    }

    #[test]
    fn test_increase_between_coordinate_pairs() {
        let mut grid = LightGrid::new(100, 100).unwrap();
        grid.increase_in_range(0, 0, 50, 50, 1).unwrap();
        for x in 0..51 {
            for y in 0..51 {
                assert_eq!(grid.light_value(x, y).unwrap(), 1);
            }
        }
        for x in 51..100 {
            for y in 51..100 {
                assert_eq!(grid.light_value(x, y).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_lights_off_counts_binary_grid() {
        let mut grid = LightGrid::new(10, 10).unwrap();
        grid.increase_in_range(0, 0, 2, 9, 1).unwrap();
        assert_eq!(grid.lights_off(), 70);
        assert_eq!(grid.lights_on(), 30);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LightGridError::InvalidDimensions {
                width: 0,
                height: 3
            }
            .to_string(),
            "Invalid grid size: width=0, height=3"
        );
        assert_eq!(
            LightGridError::OutOfBounds {
                x: 10,
                y: 10,
                width: 10,
                height: 10
            }
            .to_string(),
            "Invalid light position: x=10, y=10 (grid is 10x10)"
        );
    }

    proptest! {
        #[test]
        fn test_fresh_grid_proptest(width in 1..64u32, height in 1..64u32) {
            let grid = LightGrid::new(width, height).unwrap();
            prop_assert_eq!(grid.size(), (width * height) as usize);
            prop_assert!(grid.values().all(|value| value == 0));
            prop_assert_eq!(grid.lights_off(), (width * height) as Brightness);
        }

        #[test]
        fn test_boundary_is_out_of_bounds_proptest(width in 1..64u32, height in 1..64u32, other in 0..128u32) {
            let mut grid = LightGrid::new(width, height).unwrap();
            let is_out_of_bounds = |result: Result<(), LightGridError>| {
                matches!(result, Err(LightGridError::OutOfBounds { .. }))
            };
            prop_assert!(is_out_of_bounds(grid.increase(width, other % height, 1)));
            prop_assert!(is_out_of_bounds(grid.decrease(other % width, height, 1)));
            prop_assert!(grid.light_value(width, height).is_err());
            prop_assert!(grid.light_value(width - 1, height - 1).is_ok());
        }

        #[test]
        fn test_increase_decrease_round_trip_proptest(
            start in 0..1_000i64,
            delta in 0..1_000i64,
            x in 0..8u32,
            y in 0..8u32,
        ) {
            let mut grid = LightGrid::new(8, 8).unwrap();
            grid.set_light_value(x, y, start).unwrap();
            grid.increase(x, y, delta).unwrap();
            grid.decrease(x, y, delta).unwrap();
            prop_assert_eq!(grid.light_value(x, y).unwrap(), start);
        }

        #[test]
        fn test_decrease_past_zero_clamps_proptest(start in 0..100i64, extra in 1..100i64) {
            let mut grid = LightGrid::new(2, 2).unwrap();
            grid.set_light_value(1, 1, start).unwrap();
            grid.decrease(1, 1, start + extra).unwrap();
            prop_assert_eq!(grid.light_value(1, 1).unwrap(), 0);
        }

        #[test]
        fn test_increase_in_range_proptest(
            (x1, x2) in (0..20u32, 0..20u32).prop_map(|(a, b)| (a.min(b), a.max(b))),
            (y1, y2) in (0..20u32, 0..20u32).prop_map(|(a, b)| (a.min(b), a.max(b))),
            delta in 1..10i64,
        ) {
            let mut grid = LightGrid::new(20, 20).unwrap();
            grid.increase_in_range(x1, y1, x2, y2, delta).unwrap();
            let area = Area::from_corners(x1, y1, x2, y2);
            for x in 0..20 {
                for y in 0..20 {
                    let expected = if area.contains(Point::new(x, y)) { delta } else { 0 };
                    prop_assert_eq!(grid.light_value(x, y).unwrap(), expected);
                }
            }
            prop_assert_eq!(grid.total_light_value(), area.cell_count() as Brightness * delta);
        }

        #[test]
        fn test_parallel_and_sequential_agree_proptest(
            ops in prop::collection::vec((0..32u32, 0..32u32, 0..32u32, 0..32u32, -3..4i64), 1..20),
            writes in prop::collection::vec(
                (
                    0..32u32,
                    0..32u32,
                    prop_oneof![
                        Just(Brightness::MAX),
                        Just(Brightness::MIN),
                        Just(Brightness::MAX - 1),
                        Just(Brightness::MIN + 1),
                        any::<Brightness>(),
                    ],
                ),
                0..8,
            ),
        ) {
            let mut sequential = LightGrid::new(32, 32).unwrap();
            let mut parallel = LightGrid::with_config(32, 32, GridConfig::new(true, 1)).unwrap();
            for (x, y, value) in writes {
                sequential.set_light_value(x, y, value).unwrap();
                parallel.set_light_value(x, y, value).unwrap();
            }
            for (x1, y1, x2, y2, delta) in ops {
                for grid in [&mut sequential, &mut parallel] {
                    if delta >= 0 {
                        grid.increase_in_range(x1, y1, x2, y2, delta).unwrap();
                    } else {
                        grid.decrease_in_range(x1, y1, x2, y2, -delta).unwrap();
                    }
                }
            }
            prop_assert_eq!(parallel.total_light_value(), sequential.total_light_value());
            prop_assert_eq!(parallel, sequential);
        }
    }
}
