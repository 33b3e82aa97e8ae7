// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # cdrbuffer
//!
//! Buffer cursor layer for CDR (Common Data Representation) codecs.
//!
//! The crate does not encode or decode any data type itself. It provides the
//! bookkeeping a codec builds on:
//! - [`CdrBuffer`] - a bounded cursor over a caller-owned byte region
//! - [`Checkpoint`] - a token capturing a position, redeemable only against
//!   the buffer that issued it
//! - [`Endianness`] - the configured byte order and the derived swap decision
//! - [`CodecError`] - the error signal returned by every fallible operation
//!
//! ## Example: reserving a length prefix
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cdrbuffer::{CdrBuffer, Endianness};
//!
//! let mut region = [0u8; 16];
//! let mut buffer = CdrBuffer::with_endianness(&mut region, Endianness::Little)?;
//!
//! let prefix = buffer.checkpoint();
//! buffer.advance(4)?;
//! buffer.reserve(3)?.copy_from_slice(b"abc");
//! let end = buffer.checkpoint();
//!
//! buffer.restore(prefix)?;
//! buffer.reserve(4)?.copy_from_slice(&3u32.to_le_bytes());
//! buffer.restore(end)?;
//!
//! assert_eq!(buffer.consumed(), &[3, 0, 0, 0, b'a', b'b', b'c']);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use crate::core::{CodecError, Endianness, ParseEndiannessError, Result};

// Buffer cursor
pub mod encoding;

pub use encoding::cdr::{BufferId, CdrBuffer, Checkpoint};
