//! An implementation of the [MD2][1] cryptographic hash algorithm.
//!
//! # Usage
//!
//! ```rust
//! use md2::{Md2, Digest};
//! use hex_literal::hex;
//!
//! // create a Md2 hasher instance
//! let mut hasher = Md2::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("d9cce882ee690a5c1ce70beff3a78c77"));
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/MD2_(hash_function)
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use block_hash::{Block, BlockHash, BlockHasher, Output};
use digest::consts::U16;

mod consts;

const BLOCK_SIZE: usize = 16;

/// Core MD2 hasher state.
#[derive(Clone)]
pub struct Md2Core {
    x: [u8; 3 * BLOCK_SIZE],
    checksum: [u8; BLOCK_SIZE],
}

impl Md2Core {
    fn compress(&mut self, block: &[u8]) {
        // Update state
        for j in 0..BLOCK_SIZE {
            self.x[BLOCK_SIZE + j] = block[j];
            self.x[2 * BLOCK_SIZE + j] = self.x[BLOCK_SIZE + j] ^ self.x[j];
        }

        let mut t = 0u8;
        for round in 0..18u8 {
            for k in 0..3 * BLOCK_SIZE {
                self.x[k] ^= consts::S[t as usize];
                t = self.x[k];
            }
            t = t.wrapping_add(round);
        }

        // Update checksum
        let mut l = self.checksum[BLOCK_SIZE - 1];
        for j in 0..BLOCK_SIZE {
            self.checksum[j] ^= consts::S[(block[j] ^ l) as usize];
            l = self.checksum[j];
        }
    }
}

impl Default for Md2Core {
    #[inline]
    fn default() -> Self {
        Self {
            x: [0; 3 * BLOCK_SIZE],
            checksum: [0; BLOCK_SIZE],
        }
    }
}

impl BlockHash for Md2Core {
    type BlockSize = U16;
    type OutputSize = U16;

    fn process_block(&mut self, block: &Block<Self>) {
        self.compress(block);
    }

    fn process_final_block(&mut self, tail: &[u8], out: &mut Output<Self>) {
        // Pad with `16 - len` bytes of that same value, a whole block of
        // 16s when the message length is a block multiple (RFC 1319)
        let pad = (BLOCK_SIZE - tail.len()) as u8;
        let mut block = [pad; BLOCK_SIZE];
        block[..tail.len()].copy_from_slice(tail);
        self.compress(&block);

        let checksum = self.checksum;
        self.compress(&checksum);

        out.copy_from_slice(&self.x[..BLOCK_SIZE]);
    }

    fn reset(&mut self) {
        *self = Default::default();
    }
}

opaque_debug::implement!(Md2Core);

/// MD2 hasher state.
pub type Md2 = BlockHasher<Md2Core>;
