//! Axis codec - the three 2-bit axes every archetype is built from.
//!
//! Each axis has four members with fixed, hand-assigned codes:
//!
//! | Axis  | `10`   | `11`   | `01`   | `00`   |
//! |-------|--------|--------|--------|--------|
//! | WHO   | ME     | WE     | YOU    | THEY   |
//! | WHERE | EAST   | SOUTH  | WEST   | NORTH  |
//! | WHEN  | SPRING | SUMMER | AUTUMN | WINTER |
//!
//! The canonical names and the verified formulas depend on this exact table.

mod set;

pub use set::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AlgebraError, Result};

/// The three axes of an archetype, in bit order (WHO high, WHEN low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Axis {
    Who,
    Where,
    When,
}

impl Axis {
    /// All axes, highest bits first.
    pub const ALL: [Axis; 3] = [Axis::Who, Axis::Where, Axis::When];

    /// Upper-case label of the axis.
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Who => "WHO",
            Axis::Where => "WHERE",
            Axis::When => "WHEN",
        }
    }

    /// Bit offset of this axis inside the 6-bit archetype value.
    pub fn shift(&self) -> u8 {
        match self {
            Axis::Who => 4,
            Axis::Where => 2,
            Axis::When => 0,
        }
    }

    /// Extract this axis' 2-bit code from a 6-bit value.
    pub fn code_of(&self, value: u8) -> u8 {
        (value >> self.shift()) & 0b11
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A member of one of the three axes.
pub trait AxisValue: Copy + Eq + Sized + 'static {
    /// The axis this value belongs to.
    const AXIS: Axis;

    /// All four members, in code order `10, 11, 01, 00`.
    const ALL: [Self; 4];

    /// The member's 2-bit code.
    fn code(self) -> u8;

    /// Decode a 2-bit code.
    fn from_code(code: u8) -> Result<Self>;

    /// Upper-case label (e.g. `"ME"`).
    fn label(self) -> &'static str;

    /// Short keyword phrase describing the member.
    fn qualities(self) -> &'static str;
}

macro_rules! axis_value {
    (
        $(#[$meta:meta])*
        $name:ident: $axis:expr => {
            $($variant:ident = $code:literal, $label:literal, $qualities:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum $name {
            $($variant),+
        }

        impl AxisValue for $name {
            const AXIS: Axis = $axis;
            const ALL: [Self; 4] = [$($name::$variant),+];

            fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            fn from_code(code: u8) -> Result<Self> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(AlgebraError::InvalidCode {
                        axis: $axis,
                        code: format!("{:b}", code),
                    }),
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn qualities(self) -> &'static str {
                match self {
                    $($name::$variant => $qualities),+
                }
            }
        }

        impl FromStr for $name {
            type Err = AlgebraError;

            fn from_str(s: &str) -> Result<Self> {
                let upper = s.trim().to_uppercase();
                match upper.as_str() {
                    $($label => Ok($name::$variant),)+
                    _ => Err(AlgebraError::InvalidAxisValue {
                        axis: $axis,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

axis_value! {
    /// WHO - the subject of experience.
    Who: Axis::Who => {
        Me = 0b10, "ME", "individual, personal";
        We = 0b11, "WE", "collective, shared";
        You = 0b01, "YOU", "relational, dialogic";
        They = 0b00, "THEY", "impersonal, systemic";
    }
}

axis_value! {
    /// WHERE - the space of experience.
    Where: Axis::Where => {
        East = 0b10, "EAST", "beginning, initiation";
        South = 0b11, "SOUTH", "passion, emotion";
        West = 0b01, "WEST", "structure, order";
        North = 0b00, "NORTH", "reflection, wisdom";
    }
}

axis_value! {
    /// WHEN - the time of experience.
    When: Axis::When => {
        Spring = 0b10, "SPRING", "hope, birth";
        Summer = 0b11, "SUMMER", "peak, action";
        Autumn = 0b01, "AUTUMN", "harvest, decline";
        Winter = 0b00, "WINTER", "end, potential";
    }
}

/// Encode an axis label into its 2-bit code.
pub fn encode(axis: Axis, label: &str) -> Result<u8> {
    match axis {
        Axis::Who => label.parse::<Who>().map(Who::code),
        Axis::Where => label.parse::<Where>().map(Where::code),
        Axis::When => label.parse::<When>().map(When::code),
    }
}

/// Decode a 2-bit code into the axis label.
pub fn decode(axis: Axis, code: u8) -> Result<&'static str> {
    match axis {
        Axis::Who => Who::from_code(code).map(Who::label),
        Axis::Where => Where::from_code(code).map(Where::label),
        Axis::When => When::from_code(code).map(When::label),
    }
}

/// Encode an axis label as a two-character bit string (e.g. `"10"`).
pub fn encode_bits(axis: Axis, label: &str) -> Result<String> {
    encode(axis, label).map(|code| format!("{:02b}", code))
}

/// Decode a two-character bit string into the axis label.
pub fn decode_bits(axis: Axis, bits: &str) -> Result<&'static str> {
    let code = parse_code(axis, bits)?;
    decode(axis, code)
}

/// Parse a two-character `0`/`1` group into a code.
pub(crate) fn parse_code(axis: Axis, bits: &str) -> Result<u8> {
    let invalid = || AlgebraError::InvalidCode {
        axis,
        code: bits.to_string(),
    };

    if bits.len() != 2 {
        return Err(invalid());
    }

    bits.chars().try_fold(0u8, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        _ => Err(invalid()),
    })
}
