use crate::{Brightness, LightGridError};

/// Read-only access to a rectangle of lights.
///
/// Implementors supply the dimensions, point lookup and a value iterator;
/// the aggregate queries come for free.
pub trait GridLike {
    /// Returns `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Returns the light at `(x, y)`, or [`LightGridError::OutOfBounds`].
    fn light_value(&self, x: u32, y: u32) -> Result<Brightness, LightGridError>;

    /// Iterates over every light, row by row.
    fn values(&self) -> impl Iterator<Item = Brightness> + '_;

    /// Returns the number of lights, `width * height`.
    fn size(&self) -> usize {
        let (width, height) = self.dimensions();
        width as usize * height as usize
    }

    /// Returns the exact sum of every light, clamped once to the `Brightness` range.
    fn total_light_value(&self) -> Brightness {
        clamp_total(self.values().map(i128::from).sum())
    }

    /// Returns `size() - total_light_value()`.
    ///
    /// This counts the lights that are off only while every light is 0 or 1.
    fn lights_off(&self) -> Brightness {
        Brightness::try_from(self.size())
            .unwrap_or(Brightness::MAX)
            .saturating_sub(self.total_light_value())
    }

    /// Returns the number of lights with a positive value.
    fn lights_on(&self) -> usize {
        self.values().filter(|value| *value > 0).count()
    }
}

/// Narrows an `i128` sum of lights to `Brightness`, saturating at its limits.
///
/// Sums are taken in `i128` so intermediate overflow cannot make the result
/// depend on summation order.
pub(crate) fn clamp_total(sum: i128) -> Brightness {
    Brightness::try_from(sum).unwrap_or(if sum < 0 {
        Brightness::MIN
    } else {
        Brightness::MAX
    })
}
