//! Santa's light instructions, e.g. `turn on 0,0 through 999,999`.
//!
//! On a brightness grid `turn on` raises each light by one, `turn off`
//! lowers it by one (never below zero) and `toggle` raises it by two.

use crate::{
    grid::{Area, LightGrid, Point},
    Brightness, LightGridError,
};
use std::{fmt, str::FromStr};
use tracing::*;

/// The nine-step instruction list used as the demo scenario.
pub const SANTA_INSTRUCTIONS: [&str; 9] = [
    "turn on 887,9 through 959,629",
    "turn on 454,398 through 844,448",
    "turn off 539,243 through 559,965",
    "turn off 370,819 through 676,868",
    "turn off 145,40 through 370,997",
    "turn off 301,3 through 808,453",
    "turn on 351,678 through 951,908",
    "toggle 720,196 through 897,994",
    "toggle 831,394 through 904,860",
];

/// What an instruction does to each light in its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

impl Action {
    const ALL: [Action; 3] = [Action::TurnOn, Action::TurnOff, Action::Toggle];

    pub fn keyword(self) -> &'static str {
        match self {
            Action::TurnOn => "turn on",
            Action::TurnOff => "turn off",
            Action::Toggle => "toggle",
        }
    }

    /// Brightness change applied per light.
    pub fn delta(self) -> Brightness {
        match self {
            Action::TurnOn | Action::TurnOff => 1,
            Action::Toggle => 2,
        }
    }
}

/// One parsed line of santa's instructions.
///
/// # Example
/// ```
/// use lightgrid::{Action, GridLike, Instruction, LightGrid};
///
/// let instruction: Instruction = "toggle 0,0 through 1,1".parse().unwrap();
/// assert_eq!(instruction.action, Action::Toggle);
///
/// let mut grid = LightGrid::new(10, 10).unwrap();
/// instruction.apply_to(&mut grid).unwrap();
/// assert_eq!(grid.total_light_value(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instruction {
    pub action: Action,
    pub area: Area,
}

impl Instruction {
    pub fn new(action: Action, area: Area) -> Self {
        Self { action, area }
    }

    /// Applies this instruction to `grid` as a single range operation.
    pub fn apply_to(&self, grid: &mut LightGrid) -> Result<(), LightGridError> {
        let Area { from, to } = self.area;
        match self.action {
            Action::TurnOn | Action::Toggle => {
                grid.increase_in_range(from.x, from.y, to.x, to.y, self.action.delta())
            }
            Action::TurnOff => {
                grid.decrease_in_range(from.x, from.y, to.x, to.y, self.action.delta())
            }
        }
    }
}

impl FromStr for Instruction {
    type Err = LightGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (action, rest) = Action::ALL
            .into_iter()
            .find_map(|action| {
                line.strip_prefix(action.keyword())
                    .filter(|rest| rest.starts_with(char::is_whitespace))
                    .map(|rest| (action, rest))
            })
            .ok_or_else(|| {
                LightGridError::InstructionParseError(format!("unknown action in `{line}`"))
            })?;

        let (from, to) = rest.split_once(" through ").ok_or_else(|| {
            LightGridError::InstructionParseError(format!("missing `through` in `{line}`"))
        })?;
        let area = Area::new(from.parse::<Point>()?, to.parse::<Point>()?);
        trace!("Parsed {:?} over {:?}", action, area);
        Ok(Instruction::new(action, area))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Area { from, to } = self.area;
        write!(
            f,
            "{} {},{} through {},{}",
            self.action.keyword(),
            from.x,
            from.y,
            to.x,
            to.y
        )
    }
}

impl LightGrid {
    /// Applies `instructions` in order, stopping at the first failure.
    ///
    /// Instructions before the failing one stay applied.
    pub fn apply_all<'a, I>(&mut self, instructions: I) -> Result<(), LightGridError>
    where
        I: IntoIterator<Item = &'a Instruction>,
    {
        for (step, instruction) in instructions.into_iter().enumerate() {
            instruction.apply_to(self).inspect_err(|e| {
                warn!("Instruction #{} `{}` failed: {}", step, instruction, e);
            })?;
        }
        Ok(())
    }
}

/// Parses every line of `lines`, skipping blank ones.
pub fn parse_instructions<'a, I>(lines: I) -> Result<Vec<Instruction>, LightGridError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}
