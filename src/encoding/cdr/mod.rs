// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR (Common Data Representation) buffer module.
//!
//! Provides the position-tracking cursor a CDR codec reads and writes
//! through, and the checkpoint tokens used to rewind it.

pub mod buffer;
pub mod checkpoint;

pub use buffer::CdrBuffer;
pub use checkpoint::{BufferId, Checkpoint};
