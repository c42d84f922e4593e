use super::*;

/// A coordinate pair on the grid. `x` selects the row, `y` the cell within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl FromStr for Point {
    type Err = LightGridError;

    /// Parses `"x,y"`, tolerating whitespace around either number.
    ///
    /// # Example
    /// ```
    /// use lightgrid::Point;
    ///
    /// let point: Point = "887, 9".parse().unwrap();
    /// assert_eq!(point, Point::new(887, 9));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or_else(|| {
            LightGridError::InstructionParseError(format!("expected `x,y`, got `{s}`"))
        })?;
        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|e| {
                LightGridError::InstructionParseError(format!("bad coordinate `{part}`: {e}"))
            })
        };
        Ok(Point::new(parse(x)?, parse(y)?))
    }
}

/// An inclusive rectangle `[from.x, to.x] × [from.y, to.y]`.
///
/// An area whose `from` lies past its `to` on either axis is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Area {
    pub from: Point,
    pub to: Point,
}

impl Area {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Builds an area from the two corner coordinates of a range call.
    pub fn from_corners(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn is_empty(&self) -> bool {
        self.from.x > self.to.x || self.from.y > self.to.y
    }

    /// Number of rows covered, zero for an empty area.
    pub fn row_count(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.to.x - self.from.x + 1
        }
    }

    /// Number of cells per covered row, zero for an empty area.
    pub fn row_len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.to.y - self.from.y + 1
        }
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() as usize * self.row_len() as usize
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.from.x..=self.to.x).contains(&point.x) && (self.from.y..=self.to.y).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("0,0", Point::new(0, 0) ; "origin")]
    #[test_case("959,629", Point::new(959, 629) ; "plain")]
    #[test_case(" 12 , 7 ", Point::new(12, 7) ; "padded")]
    fn parses_points(input: &str, expected: Point) {
        assert_eq!(input.parse::<Point>().unwrap(), expected);
    }

    #[test_case("12" ; "missing comma")]
    #[test_case("-1,3" ; "negative")]
    #[test_case("a,b" ; "not numbers")]
    fn rejects_malformed_points(input: &str) {
        assert!(matches!(
            input.parse::<Point>(),
            Err(LightGridError::InstructionParseError(_))
        ));
    }

    #[test]
    fn inverted_areas_are_empty() {
        let area = Area::from_corners(5, 0, 4, 9);
        assert!(area.is_empty());
        assert_eq!(area.cell_count(), 0);
        assert_eq!(Area::from_corners(0, 5, 9, 4).row_count(), 0);
    }

    #[test]
    fn counts_cells_inclusively() {
        let area = Area::from_corners(0, 0, 50, 50);
        assert_eq!(area.row_count(), 51);
        assert_eq!(area.row_len(), 51);
        assert_eq!(area.cell_count(), 51 * 51);
        assert!(area.contains(Point::new(50, 0)));
        assert!(!area.contains(Point::new(51, 0)));
    }
}
