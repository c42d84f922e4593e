use std::io::Write;

use super::*;
/// Writes the textual dump of `grid` to `writer`, one row per line.
///
/// # Arguments
/// * `grid` - The grid to dump.
/// * `writer` - Any byte sink, e.g. `std::io::stdout().lock()`.
///
/// # Errors
/// Returns [`LightGridError::DumpError`] if writing fails.
///
/// # Examples
///
/// ```rust
/// use lightgrid::{debug, LightGrid};
///
/// let mut grid = LightGrid::new(2, 3).unwrap();
/// grid.increase(1, 2, 4).unwrap();
///
/// let mut out = Vec::new();
/// debug::write_dump(&grid, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "000\n004\n");
/// ```
pub fn write_dump<W: Write>(grid: &LightGrid, mut writer: W) -> Result<(), LightGridError> {
    let (width, height) = grid.dimensions();
    tracing::debug!("Dumping {}x{} grid", width, height);
    write!(writer, "{grid}")
        .and_then(|()| writer.flush())
        .map_err(|e| LightGridError::DumpError(e.to_string()))
}
