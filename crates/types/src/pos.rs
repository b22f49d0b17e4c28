//! Block positions addressed by block-NBT components.

use crate::parsers::{self, ParseError, coordinate_prefix, run_parser};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    Absolute,
    /// Offset from the command source, written with a `~` prefix.
    Relative,
}

/// One axis of a world position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub kind: CoordinateKind,
    pub value: i32,
}

impl Coordinate {
    pub const fn absolute(value: i32) -> Self {
        Self { kind: CoordinateKind::Absolute, value }
    }

    pub const fn relative(value: i32) -> Self {
        Self { kind: CoordinateKind::Relative, value }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.value) {
            (CoordinateKind::Relative, 0) => f.write_str("~"),
            (kind, value) => write!(f, "{}{}", coordinate_prefix(kind), value),
        }
    }
}

/// The position of the block whose NBT is displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockPos {
    /// Relative to the command source's rotation, written `^left ^up ^forwards`.
    Local { left: f64, up: f64, forwards: f64 },
    /// World coordinates, written `x y z`.
    World { x: Coordinate, y: Coordinate, z: Coordinate },
}

impl BlockPos {
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        run_parser(parsers::parse_block_pos, s)
            .map_err(|_| ParseError::InvalidPosition(s.to_string()))
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockPos::Local { left, up, forwards } => write!(f, "^{} ^{} ^{}", left, up, forwards),
            BlockPos::World { x, y, z } => write!(f, "{} {} {}", x, y, z),
        }
    }
}

impl FromStr for BlockPos {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
