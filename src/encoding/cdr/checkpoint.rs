// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Checkpoint tokens for rewinding a [`CdrBuffer`](super::CdrBuffer).
//!
//! A [`Checkpoint`] records a position together with the [`BufferId`] of the
//! buffer that issued it. Restoring checks the id, so a token taken on one
//! buffer is rejected by every other buffer, even one built over the same
//! region later on.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of buffer identities. Never reused within a process.
static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

impl BufferId {
    /// Allocate a fresh identity.
    pub(crate) fn next() -> Self {
        BufferId(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Saved buffer position.
///
/// Created by [`CdrBuffer::checkpoint`](super::CdrBuffer::checkpoint) and
/// consumed by [`CdrBuffer::restore`](super::CdrBuffer::restore). Tokens are
/// neither `Clone` nor `Copy`, so each one is redeemed at most once.
///
/// A token holds no lock on the buffer. If the caller reuses the region for
/// new content, an older token may point past what is now meaningful.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a checkpoint does nothing unless it is restored"]
pub struct Checkpoint {
    position: usize,
    owner: BufferId,
}

impl Checkpoint {
    pub(crate) fn new(position: usize, owner: BufferId) -> Self {
        Self { position, owner }
    }

    /// Position captured when the checkpoint was taken.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Identity of the issuing buffer.
    #[inline]
    pub fn owner(&self) -> BufferId {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_ids_are_unique() {
        let a = BufferId::next();
        let b = BufferId::next();
        let c = BufferId::next();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_checkpoint_accessors() {
        let owner = BufferId::next();
        let checkpoint = Checkpoint::new(12, owner);
        assert_eq!(checkpoint.position(), 12);
        assert_eq!(checkpoint.owner(), owner);
    }
}
