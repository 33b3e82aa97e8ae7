// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Buffer primitives for message encoding/decoding.
//!
//! - [`cdr`] - CDR buffer cursor and checkpoints

pub mod cdr;

pub use cdr::{BufferId, CdrBuffer, Checkpoint};
