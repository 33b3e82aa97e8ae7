// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte order identifier.
//!
//! [`Endianness`] is the byte order a buffer is configured with. Comparing it
//! against the host order decides whether multi-byte values must be swapped.
//! `Unspecified` makes no claim about the data: it never requires a swap and
//! only compares equal to itself.

use serde::{Deserialize, Serialize};

/// Byte order of the data held in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Endianness {
    /// Most significant byte first
    Big = 0x0,
    /// Least significant byte first
    Little = 0x1,
    /// No byte order claimed
    Unspecified = 0xF,
}

impl Endianness {
    /// Byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endianness = Endianness::Little;

    /// Byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endianness = Endianness::Big;

    /// Byte order of the host.
    #[inline]
    #[must_use]
    pub const fn native() -> Self {
        Self::NATIVE
    }

    /// Check if data in this byte order must be swapped on the host.
    ///
    /// `Unspecified` never requires a swap.
    #[must_use]
    pub const fn swap_required(self) -> bool {
        match self {
            Endianness::Big | Endianness::Little => self as u8 != Self::NATIVE as u8,
            Endianness::Unspecified => false,
        }
    }

    /// Check if this is big endian.
    pub fn is_big(&self) -> bool {
        matches!(self, Endianness::Big)
    }

    /// Check if this is little endian.
    pub fn is_little(&self) -> bool {
        matches!(self, Endianness::Little)
    }

    /// Check if no byte order is claimed.
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Endianness::Unspecified)
    }

    /// Wire value (`0x0` big, `0x1` little, `0xF` unspecified).
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse a wire value.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x0 => Some(Endianness::Big),
            0x1 => Some(Endianness::Little),
            0xF => Some(Endianness::Unspecified),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
            Endianness::Unspecified => "unspecified",
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an `Endianness` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEndiannessError {
    _private: (),
}

impl std::fmt::Display for ParseEndiannessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid endianness name, expected 'big', 'little', 'unspecified', or 'native'"
        )
    }
}

impl std::error::Error for ParseEndiannessError {}

impl std::str::FromStr for Endianness {
    type Err = ParseEndiannessError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "big" | "be" | "big_endian" => Ok(Endianness::Big),
            "little" | "le" | "little_endian" => Ok(Endianness::Little),
            "unspecified" | "none" | "no_endian" => Ok(Endianness::Unspecified),
            "native" => Ok(Endianness::NATIVE),
            _ => Err(ParseEndiannessError { _private: () }),
        }
    }
}
