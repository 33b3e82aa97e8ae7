// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR buffer cursor.
//!
//! [`CdrBuffer`] wraps a caller-owned byte region and keeps the bookkeeping a
//! CDR codec needs on top of it:
//! - `position`: current read/write offset, always within `[0, capacity]`
//! - `endianness`: configured byte order, fixed at construction
//! - `swap_bytes`: whether that byte order differs from the host's
//!
//! The buffer never allocates, copies or grows the region. The codec asks for
//! room with [`advance`](CdrBuffer::advance) or [`reserve`](CdrBuffer::reserve)
//! and reads or writes the bytes it was handed.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cdrbuffer::{CdrBuffer, Endianness};
//!
//! let mut region = [0u8; 16];
//! let mut buffer = CdrBuffer::with_endianness(&mut region, Endianness::Big)?;
//!
//! assert_eq!(buffer.advance(4)?, 0);
//! let saved = buffer.checkpoint();
//! buffer.advance(8)?;
//! buffer.restore(saved)?;
//! assert_eq!(buffer.position(), 4);
//! assert!(buffer.advance(20).is_err());
//! assert_eq!(buffer.position(), 4);
//! # Ok(())
//! # }
//! ```

use tracing::{debug, trace, warn};

use super::checkpoint::{BufferId, Checkpoint};
use crate::core::{CodecError, Endianness, Result};

/// Bounded cursor over an externally owned byte region.
pub struct CdrBuffer<'a> {
    /// The caller's region
    region: &'a mut [u8],
    // Invariant: position <= region.len().
    position: usize,
    /// Configured byte order
    endianness: Endianness,
    /// Derived from `endianness` at construction
    swap_bytes: bool,
    /// Identity checked when restoring checkpoints
    id: BufferId,
}

impl<'a> CdrBuffer<'a> {
    /// Create a buffer over `region` using the host byte order.
    pub fn new(region: &'a mut [u8]) -> Result<Self> {
        Self::with_endianness(region, Endianness::native())
    }

    /// Create a buffer over `region` using the given byte order.
    ///
    /// # Errors
    ///
    /// Returns an invalid construction error if `region` is empty.
    pub fn with_endianness(region: &'a mut [u8], endianness: Endianness) -> Result<Self> {
        if region.is_empty() {
            warn!("rejected empty buffer region");
            return Err(CodecError::invalid_construction());
        }

        let swap_bytes = endianness.swap_required();
        let id = BufferId::next();
        debug!(
            capacity = region.len(),
            endianness = endianness.as_str(),
            swap_bytes,
            "created CDR buffer"
        );

        Ok(Self {
            region,
            position: 0,
            endianness,
            swap_bytes,
            id,
        })
    }

    /// Get the current position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the length of the region.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    /// Get the number of bytes between the position and the end of the region.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.region.len() - self.position
    }

    /// Check if at end of buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position == self.region.len()
    }

    /// Get the configured byte order.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Check if multi-byte values must be byte-swapped on this host.
    #[inline]
    pub fn swap_bytes(&self) -> bool {
        self.swap_bytes
    }

    /// Check if the configured byte order is `endianness`.
    ///
    /// Only the configured value is compared. `Unspecified` matches only
    /// `Unspecified`, not the host order.
    #[inline]
    pub fn is_endianness(&self, endianness: Endianness) -> bool {
        self.endianness == endianness
    }

    /// Get the identity of this buffer.
    #[inline]
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Move the position forward by `count` bytes.
    ///
    /// Returns the position before the move, i.e. the offset of the `count`
    /// bytes the caller may now read or write.
    ///
    /// # Errors
    ///
    /// Returns a capacity exceeded error if fewer than `count` bytes remain.
    /// The position is left unchanged.
    pub fn advance(&mut self, count: usize) -> Result<usize> {
        if count > self.remaining() {
            return Err(CodecError::capacity_exceeded(
                count,
                self.remaining(),
                self.position,
            ));
        }
        let start = self.position;
        self.position += count;
        trace!(from = start, to = self.position, "advanced CDR buffer");
        Ok(start)
    }

    /// Move the position forward by `count` bytes and return those bytes.
    ///
    /// Fails the same way as [`advance`](Self::advance).
    pub fn reserve(&mut self, count: usize) -> Result<&mut [u8]> {
        let start = self.advance(count)?;
        Ok(&mut self.region[start..start + count])
    }

    /// The whole region.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &*self.region
    }

    /// The whole region, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut *self.region
    }

    /// The bytes before the current position.
    #[inline]
    pub fn consumed(&self) -> &[u8] {
        &self.region[..self.position]
    }

    /// Capture the current position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.position, self.id)
    }

    /// Return to the position captured by `checkpoint`.
    ///
    /// # Errors
    ///
    /// Returns an invalid restore error if `checkpoint` was issued by another
    /// buffer or points past the end of the region. The position is left
    /// unchanged.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<()> {
        if checkpoint.owner() != self.id {
            warn!(
                buffer = ?self.id,
                owner = ?checkpoint.owner(),
                "rejected checkpoint from another buffer"
            );
            return Err(CodecError::invalid_restore(
                "checkpoint was issued by another buffer",
            ));
        }
        if checkpoint.position() > self.capacity() {
            warn!(
                position = checkpoint.position(),
                capacity = self.capacity(),
                "rejected checkpoint past end of buffer"
            );
            return Err(CodecError::invalid_restore(format!(
                "checkpoint position {} exceeds capacity {}",
                checkpoint.position(),
                self.capacity()
            )));
        }
        trace!(
            from = self.position,
            to = checkpoint.position(),
            "restored CDR buffer"
        );
        self.position = checkpoint.position();
        Ok(())
    }
}

impl PartialEq<Endianness> for CdrBuffer<'_> {
    fn eq(&self, other: &Endianness) -> bool {
        self.is_endianness(*other)
    }
}

impl std::fmt::Debug for CdrBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdrBuffer")
            .field("capacity", &self.capacity())
            .field("position", &self.position)
            .field("endianness", &self.endianness)
            .field("swap_bytes", &self.swap_bytes)
            .field("id", &self.id)
            .finish()
    }
}
