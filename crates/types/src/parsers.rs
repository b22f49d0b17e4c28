//! Low-level nom parser functions for the textual forms of leaf values.
//!
//! This module provides composable parsers for hex colors, resource keys and
//! block positions. The high-level `from_*`/`parse` constructors on each type
//! run these through [`run_parser`] so that trailing input is rejected.

use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{take_while, take_while_m_n};
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{map, map_res, opt, recognize};
use nom::sequence::{pair, preceded};
use thiserror::Error;

use crate::pos::{BlockPos, Coordinate, CoordinateKind};

/// Errors that can occur while parsing a leaf value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid block position '{0}'")]
    InvalidPosition(String),
}

// --- Helper Parsers ---

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |s: &str| {
        u8::from_str_radix(s, 16)
    })
    .parse(input)
}

/// A single hex digit expanded to a full byte (`f` -> `ff`).
fn hex_nibble(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, is_hex_digit), |s: &str| {
        u8::from_str_radix(s, 16).map(|n| n * 0x11)
    })
    .parse(input)
}

fn signed_integer(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i32>()
    })
    .parse(input)
}

fn signed_decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((opt(char('-')), digit1, opt(pair(char('.'), digit1)))),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

// --- Color Parsers ---

/// Parses an RGB hex color (`#RRGGBB` or `#RGB`).
pub fn parse_rgb(input: &str) -> IResult<&str, (u8, u8, u8)> {
    preceded(
        char('#'),
        alt((
            (hex_byte, hex_byte, hex_byte),
            (hex_nibble, hex_nibble, hex_nibble),
        )),
    )
    .parse(input)
}

/// Parses an ARGB hex color written as `#RRGGBBAA`. Returns `(a, r, g, b)`.
pub fn parse_rgba(input: &str) -> IResult<&str, (u8, u8, u8, u8)> {
    map(
        preceded(char('#'), (hex_byte, hex_byte, hex_byte, hex_byte)),
        |(r, g, b, a)| (a, r, g, b),
    )
    .parse(input)
}

// --- Key Parsers ---

pub fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

pub fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

/// Parses `namespace:value` or a bare `value`. The namespace is `None` when
/// no separator is present or when it is empty (`:value`).
pub fn parse_key<'a>(input: &'a str) -> IResult<&'a str, (Option<&'a str>, &'a str)> {
    alt((
        map(
            (take_while(is_namespace_char), char(':'), take_while(is_value_char)),
            |(namespace, _, value): (&'a str, char, &'a str)| {
                let namespace = (!namespace.is_empty()).then_some(namespace);
                (namespace, value)
            },
        ),
        map(take_while(is_value_char), |value: &'a str| (None, value)),
    ))
    .parse(input)
}

// --- Position Parsers ---

fn local_component(input: &str) -> IResult<&str, f64> {
    preceded(char('^'), signed_decimal).parse(input)
}

fn world_coordinate(input: &str) -> IResult<&str, Coordinate> {
    alt((
        map(preceded(char('~'), opt(signed_integer)), |value| {
            Coordinate::relative(value.unwrap_or(0))
        }),
        map(signed_integer, Coordinate::absolute),
    ))
    .parse(input)
}

/// Parses a local (`^l ^u ^f`) or world (`x y z`, `~` for relative) position.
pub fn parse_block_pos(input: &str) -> IResult<&str, BlockPos> {
    alt((
        map(
            (
                local_component,
                preceded(space1, local_component),
                preceded(space1, local_component),
            ),
            |(left, up, forwards)| BlockPos::Local { left, up, forwards },
        ),
        map(
            (
                world_coordinate,
                preceded(space1, world_coordinate),
                preceded(space1, world_coordinate),
            ),
            |(x, y, z)| BlockPos::World { x, y, z },
        ),
    ))
    .parse(input)
}

pub(crate) fn coordinate_prefix(kind: CoordinateKind) -> &'static str {
    match kind {
        CoordinateKind::Absolute => "",
        CoordinateKind::Relative => "~",
    }
}

/// Helper to run a nom parser and convert its result to a `Result<T, ParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, ParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(ParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(ParseError::Parse(e.to_string())),
    }
}
