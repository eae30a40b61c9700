//! An implementation of the [MD5][1] cryptographic hash algorithm.
//!
//! # Usage
//!
//! ```rust
//! use md5::{Md5, Digest};
//! use hex_literal::hex;
//!
//! // create a Md5 hasher instance
//! let mut hasher = Md5::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("5eb63bbbe01eeed093cb22bb8f5acdc3"));
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/MD5
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use block_hash::counter::BigCounter;
use block_hash::endian::write_u32v_le;
use block_hash::{Block, BlockHash, BlockHasher, Output};
use digest::consts::{U16, U64};

mod consts;
mod utils;

use crate::utils::compress;

const BLOCK_SIZE: usize = 64;

/// Core MD5 hasher state.
#[derive(Clone)]
pub struct Md5Core {
    state: [u32; 4],
    length: BigCounter,
}

impl BlockHash for Md5Core {
    type BlockSize = U64;
    type OutputSize = U16;

    fn process_block(&mut self, block: &Block<Self>) {
        self.length.add_u32(8 * BLOCK_SIZE as u32);
        compress(&mut self.state, block);
    }

    fn process_final_block(&mut self, tail: &[u8], out: &mut Output<Self>) {
        self.length.add_u32(8 * tail.len() as u32);

        let mut block = [0u8; BLOCK_SIZE];
        block[..tail.len()].copy_from_slice(tail);
        block[tail.len()] = 0x80;
        if tail.len() + 1 > BLOCK_SIZE - 8 {
            // no room left for the bit length, flush and restart
            compress(&mut self.state, &block);
            block = [0u8; BLOCK_SIZE];
        }
        block[BLOCK_SIZE - 8..].copy_from_slice(&self.length.to_le_bytes());
        compress(&mut self.state, &block);

        write_u32v_le(out, &self.state);
    }

    fn reset(&mut self) {
        self.state = consts::S0;
        self.length.clear();
    }
}

impl Default for Md5Core {
    #[inline]
    fn default() -> Self {
        Self {
            state: consts::S0,
            length: BigCounter::new(8),
        }
    }
}

opaque_debug::implement!(Md5Core);

/// MD5 hasher state.
pub type Md5 = BlockHasher<Md5Core>;
