//! Fixed block size buffering for streaming hash functions.
//!
//! A block-oriented hash algorithm implements the [`BlockHash`] trait,
//! which exposes its compression function over whole blocks together with
//! the final padding step. [`BlockHasher`] wraps such a core and provides
//! the [`digest`] traits on top of it: it splits arbitrarily chunked input
//! into whole blocks, keeps the unprocessed tail between calls and hands
//! the tail to the core exactly once during finalization, so the digest
//! never depends on how callers slice their input.
//!
//! The crate also carries the shared helpers used by the block hash
//! implementations in this repository: [`bits`] (rotates), [`counter`]
//! (message length counters wider than a machine word) and [`endian`]
//! (byte/word packing in both byte orders).
//!
//! Also see [RustCrypto/hashes][1] readme.
//!
//! [1]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod bits;
pub mod counter;
pub mod endian;

pub use digest;

use core::fmt;
use digest::generic_array::typenum::Unsigned;
use digest::generic_array::{ArrayLength, GenericArray};
use digest::{BlockInput, FixedOutputDirty, Reset, Update};

/// Input block of a [`BlockHash`] implementation.
pub type Block<D> = GenericArray<u8, <D as BlockHash>::BlockSize>;

/// Digest produced by a [`BlockHash`] implementation.
pub type Output<D> = GenericArray<u8, <D as BlockHash>::OutputSize>;

/// Compression core of a block-oriented hash function.
///
/// Implementations only see whole blocks plus one final tail; all input
/// buffering is handled by [`BlockHasher`].
pub trait BlockHash: Clone + Default {
    /// Block size in bytes accepted by `process_block`. Must be non-zero.
    type BlockSize: ArrayLength<u8>;

    /// Digest size in bytes.
    type OutputSize: ArrayLength<u8>;

    /// Updates the running state with one whole input block.
    fn process_block(&mut self, block: &Block<Self>);

    /// Consumes the final partial block, applies the algorithm's padding
    /// rule and writes the digest to `out`.
    ///
    /// `tail` is always strictly shorter than the block size.
    fn process_final_block(&mut self, tail: &[u8], out: &mut Output<Self>);

    /// Returns the state to its initial values.
    fn reset(&mut self);
}

/// Streaming wrapper around a [`BlockHash`] core.
///
/// Accumulates input into block-sized chunks and dispatches them to the
/// core. Between calls the buffer holds strictly less than one block.
#[derive(Clone, Default)]
pub struct BlockHasher<D: BlockHash> {
    core: D,
    buffer: Block<D>,
    pos: usize,
}

impl<D: BlockHash> BlockHasher<D> {
    fn update_inner(&mut self, mut input: &[u8]) {
        let bs = D::BlockSize::to_usize();

        if self.pos != 0 {
            let need = bs - self.pos;
            if input.len() < need {
                let new_pos = self.pos + input.len();
                self.buffer[self.pos..new_pos].copy_from_slice(input);
                self.pos = new_pos;
                return;
            }
            self.buffer[self.pos..].copy_from_slice(&input[..need]);
            input = &input[need..];
            self.pos = 0;
            self.core.process_block(&self.buffer);
        }

        let mut chunks = input.chunks_exact(bs);
        for block in chunks.by_ref() {
            self.core.process_block(Block::<D>::from_slice(block));
        }

        let tail = chunks.remainder();
        if !tail.is_empty() {
            self.buffer[..tail.len()].copy_from_slice(tail);
            self.pos = tail.len();
        }
    }
}

impl<D: BlockHash> Update for BlockHasher<D> {
    fn update(&mut self, input: impl AsRef<[u8]>) {
        self.update_inner(input.as_ref());
    }
}

impl<D: BlockHash> BlockInput for BlockHasher<D> {
    type BlockSize = D::BlockSize;
}

impl<D: BlockHash> FixedOutputDirty for BlockHasher<D> {
    type OutputSize = D::OutputSize;

    fn finalize_into_dirty(&mut self, out: &mut GenericArray<u8, D::OutputSize>) {
        let bs = D::BlockSize::to_usize();
        assert!(self.pos < bs, "block buffer position exceeds the block size");
        self.core.process_final_block(&self.buffer[..self.pos], out);
    }
}

impl<D: BlockHash> Reset for BlockHasher<D> {
    fn reset(&mut self) {
        self.core.reset();
        self.buffer = Default::default();
        self.pos = 0;
    }
}

impl<D: BlockHash> fmt::Debug for BlockHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlockHasher { ... }")
    }
}

#[cfg(feature = "std")]
impl<D: BlockHash> std::io::Write for BlockHasher<D> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Update::update(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
