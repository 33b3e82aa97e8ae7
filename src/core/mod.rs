// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout cdrbuffer.
//!
//! - [`CodecError`] - Error signal
//! - [`Endianness`] - Byte order identifier

pub mod endian;
pub mod error;

pub use endian::{Endianness, ParseEndiannessError};
pub use error::{CodecError, Result};
