//! # GOST R 34.11-94 hash implementation
//!
//! Streaming absorb-then-finalize pipeline over 256-bit blocks.
//!
//! Each complete message block is byte-reversed, added into the modular
//! 2^256 checksum, and folded into the chaining value by the compression
//! step. Finalization pushes the zero-padded tail, a block carrying the
//! message bit length, and a block carrying the checksum through the same
//! step, then byte-reverses the chaining value into the digest.
//!
//! # Usage
//!
//! ```
//! use gosthash94::{Hasher, TEST_PARAM_SET, hash};
//!
//! // One-shot hashing.
//! let digest = hash(&TEST_PARAM_SET, b"Hello, World!");
//!
//! // Incremental hashing.
//! let mut hasher = Hasher::new(&TEST_PARAM_SET);
//! hasher.write(b"Hello, ");
//! hasher.write(b"World!");
//! let digest2 = hasher.finalize();
//!
//! assert_eq!(digest, digest2);
//! ```

use crate::block::{self, Block};
use crate::gost28147::Gost28147;
use crate::params::Sbox;
use crate::{BLOCK_SIZE, HASH_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

const C2: Block = [0; BLOCK_SIZE];

/// The only non-zero key-schedule constant.
const C3: Block = [
    0xff, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0xff, 0x00, 0xff, 0xff,
    0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00,
    0xff, 0x00,
];

const C4: Block = [0; BLOCK_SIZE];

/// Key-schedule constants applied before rounds 2, 3 and 4.
const ROUND_CONSTANTS: [&Block; 3] = [&C2, &C3, &C4];

/// Hash arbitrary-length input under the given parameter set.
///
/// # Example
///
/// ```
/// use gosthash94::{TEST_PARAM_SET, hash};
///
/// let digest = hash(&TEST_PARAM_SET, b"message digest");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn hash(sbox: &Sbox, input: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = Hasher::new(sbox);
    hasher.write(input);
    hasher.finalize()
}

/// Streaming GOST R 34.11-94 hasher.
///
/// Buffers input into 32-byte blocks and folds each one through the
/// compression step while maintaining the message bit counter and the
/// modular checksum. [`finalize`](Hasher::finalize) does not change the
/// hasher, so digests of a stream's prefixes can be taken while it
/// continues.
///
/// A hasher borrows its parameter set; any number of hashers (on any number
/// of threads) may share one.
///
/// # Example
///
/// ```
/// use gosthash94::{Hasher, TEST_PARAM_SET};
///
/// let mut hasher = Hasher::new(&TEST_PARAM_SET);
/// hasher.write(b"The quick brown fox ");
/// hasher.write(b"jumps over the lazy dog");
/// let digest = hasher.finalize();
/// assert_eq!(digest.len(), 32);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hasher<'s> {
    #[zeroize(skip)]
    sbox: &'s Sbox,
    /// Chaining value.
    h: Block,
    /// Total bits absorbed; wraps at 2^64, which the standard leaves open.
    len_bits: u64,
    /// Modular 2^256 checksum, least significant limb first.
    sigma: [u64; 4],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
}

impl<'s> Hasher<'s> {
    /// Create a hasher borrowing the given parameter set.
    pub const fn new(sbox: &'s Sbox) -> Self {
        Self {
            sbox,
            h: [0; BLOCK_SIZE],
            len_bits: 0,
            sigma: [0; 4],
            buffer: [0; BLOCK_SIZE],
            buffer_len: 0,
        }
    }

    /// Restore the freshly-constructed state, keeping the parameter set.
    pub fn reset(&mut self) {
        self.h = [0; BLOCK_SIZE];
        self.len_bits = 0;
        self.sigma = [0; 4];
        self.buffer = [0; BLOCK_SIZE];
        self.buffer_len = 0;
    }

    /// Absorb `data` into the message.
    ///
    /// Cannot fail; the returned count is always `data.len()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        let mut pos = 0;

        while pos < data.len() {
            let take = (data.len() - pos).min(BLOCK_SIZE - self.buffer_len);
            self.buffer[self.buffer_len..self.buffer_len + take]
                .copy_from_slice(&data[pos..pos + take]);
            self.buffer_len += take;
            pos += take;

            if self.buffer_len == BLOCK_SIZE {
                // Blocks enter the compression step and the checksum in
                // reverse byte order.
                let mut m = self.buffer;
                m.reverse();
                self.sigma = checksum_add(self.sigma, &m);
                self.h = self.step(&self.h, &m);
                self.len_bits = self.len_bits.wrapping_add((BLOCK_SIZE as u64) * 8);
                self.buffer_len = 0;
            }
        }

        data.len()
    }

    /// Compute the digest of everything written so far.
    ///
    /// Works on a snapshot of the state: calling it repeatedly yields the
    /// same digest, and a later [`write`](Hasher::write) continues the
    /// stream as if `finalize` had not been called.
    pub fn finalize(&self) -> [u8; HASH_SIZE] {
        let mut h = self.h;
        let mut sigma = self.sigma;
        let mut len_bits = self.len_bits;

        // A short tail is zero-extended before the reversal, so the padding
        // lands in the high bytes of the reversed block.
        if self.buffer_len != 0 {
            let mut m = [0u8; BLOCK_SIZE];
            m[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
            m.reverse();
            sigma = checksum_add(sigma, &m);
            h = self.step(&h, &m);
            len_bits = len_bits.wrapping_add(8 * self.buffer_len as u64);
        }

        // Length block: the bit count, big-endian, in the last eight bytes.
        let mut m = [0u8; BLOCK_SIZE];
        m[BLOCK_SIZE - 8..].copy_from_slice(&len_bits.to_be_bytes());
        h = self.step(&h, &m);

        // Checksum block: Σ as a big-endian 256-bit integer.
        let mut m = [0u8; BLOCK_SIZE];
        for (i, limb) in sigma.iter().enumerate() {
            m[24 - 8 * i..32 - 8 * i].copy_from_slice(&limb.to_be_bytes());
        }
        h = self.step(&h, &m);

        // The digest is the byte-reversed final chaining value.
        h.reverse();
        h
    }

    /// Message block size in bytes.
    pub const fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Digest size in bytes.
    pub const fn output_size(&self) -> usize {
        HASH_SIZE
    }

    /// Compression step: `(H, M) -> H'`.
    ///
    /// Four key-schedule rounds each key the cipher to encrypt one 64-bit
    /// quarter of `h`, round `j` consuming the `j`-th quarter counted from
    /// the high end of the block; the assembled intermediate then runs
    /// through the 12 + 1 + 61 = 74 χ iterations interleaved with `m` and
    /// `h`.
    fn step(&self, h: &Block, m: &Block) -> Block {
        let mut u = *h;
        let mut v = *m;
        let mut s = [0u8; BLOCK_SIZE];

        for round in 0..4 {
            if round > 0 {
                u = block::xor(&block::transform_a(&u), ROUND_CONSTANTS[round - 1]);
                v = block::transform_a(&block::transform_a(&v));
            }

            // Key and quarter are both presented to the cipher byte-reversed.
            let mut key = block::transform_p(&block::xor(&u, &v));
            key.reverse();
            let cipher = Gost28147::new(&key, self.sbox);

            let hi = BLOCK_SIZE - 1 - 8 * round;
            let mut quarter = [0u8; 8];
            for i in 0..8 {
                quarter[i] = h[hi - i];
            }
            let ct = cipher.encrypt(quarter);
            for (i, &byte) in ct.iter().enumerate() {
                s[hi - i] = byte;
            }
        }

        for _ in 0..12 {
            block::chi(&mut s);
        }
        block::xor_assign(&mut s, m);
        block::chi(&mut s);
        block::xor_assign(&mut s, h);
        for _ in 0..61 {
            block::chi(&mut s);
        }
        s
    }
}

/// `Σ + m mod 2^256`, with `m` read as a big-endian 256-bit integer.
fn checksum_add(sigma: [u64; 4], m: &Block) -> [u64; 4] {
    let mut out = sigma;
    let mut carry = 0;
    for (i, limb) in out.iter_mut().enumerate() {
        let chunk = u64::from_be_bytes(m[24 - 8 * i..32 - 8 * i].try_into().unwrap());
        adc(limb, chunk, &mut carry);
    }
    // The discarded final carry is the reduction mod 2^256.
    out
}

#[inline(always)]
fn adc(a: &mut u64, b: u64, carry: &mut u64) {
    let full = (*a as u128) + (b as u128) + (*carry as u128);
    *a = full as u64;
    *carry = (full >> 64) as u64;
}

#[cfg(test)]
mod tests;
