//! An implementation of the [MD4][1] cryptographic hash algorithm.
//!
//! # Usage
//!
//! ```rust
//! use md4::{Md4, Digest};
//! use hex_literal::hex;
//!
//! // create a Md4 hasher instance
//! let mut hasher = Md4::new();
//!
//! // process input message
//! hasher.update(b"abc");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("a448017aaf21d8525fc10ae87aa6729d"));
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/MD4
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use block_hash::bits::rotl32;
use block_hash::counter::BigCounter;
use block_hash::endian::{read_u32v_le, write_u32v_le};
use block_hash::{Block, BlockHash, BlockHasher, Output};
use digest::consts::{U16, U64};

mod consts;

const BLOCK_SIZE: usize = 64;

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

fn compress(state: &mut [u32; 4], block: &[u8]) {
    let mut data = [0u32; 16];
    read_u32v_le(&mut data, block);

    let [mut a, mut b, mut c, mut d] = *state;

    // round 1
    for &i in &[0usize, 4, 8, 12] {
        a = rotl32(a.wrapping_add(f(b, c, d)).wrapping_add(data[i]), 3);
        d = rotl32(d.wrapping_add(f(a, b, c)).wrapping_add(data[i + 1]), 7);
        c = rotl32(c.wrapping_add(f(d, a, b)).wrapping_add(data[i + 2]), 11);
        b = rotl32(b.wrapping_add(f(c, d, a)).wrapping_add(data[i + 3]), 19);
    }

    // round 2
    for i in 0..4 {
        a = rotl32(
            a.wrapping_add(g(b, c, d))
                .wrapping_add(data[i])
                .wrapping_add(consts::K2),
            3,
        );
        d = rotl32(
            d.wrapping_add(g(a, b, c))
                .wrapping_add(data[i + 4])
                .wrapping_add(consts::K2),
            5,
        );
        c = rotl32(
            c.wrapping_add(g(d, a, b))
                .wrapping_add(data[i + 8])
                .wrapping_add(consts::K2),
            9,
        );
        b = rotl32(
            b.wrapping_add(g(c, d, a))
                .wrapping_add(data[i + 12])
                .wrapping_add(consts::K2),
            13,
        );
    }

    // round 3
    for &i in &[0usize, 2, 1, 3] {
        a = rotl32(
            a.wrapping_add(h(b, c, d))
                .wrapping_add(data[i])
                .wrapping_add(consts::K3),
            3,
        );
        d = rotl32(
            d.wrapping_add(h(a, b, c))
                .wrapping_add(data[i + 8])
                .wrapping_add(consts::K3),
            9,
        );
        c = rotl32(
            c.wrapping_add(h(d, a, b))
                .wrapping_add(data[i + 4])
                .wrapping_add(consts::K3),
            11,
        );
        b = rotl32(
            b.wrapping_add(h(c, d, a))
                .wrapping_add(data[i + 12])
                .wrapping_add(consts::K3),
            15,
        );
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Core MD4 hasher state.
#[derive(Clone)]
pub struct Md4Core {
    state: [u32; 4],
    length: BigCounter,
}

impl BlockHash for Md4Core {
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

impl Default for Md4Core {
    #[inline]
    fn default() -> Self {
        Self {
            state: consts::S0,
            length: BigCounter::new(8),
        }
    }
}

opaque_debug::implement!(Md4Core);

/// MD4 hasher state.
pub type Md4 = BlockHasher<Md4Core>;
