//! GOST 28147-89 block encryption, the keyed 64-bit permutation driving the
//! compression function.
//!
//! Only the forward direction exists here: the hash never decrypts. The
//! cipher is little-endian oriented: the 256-bit key is read as eight
//! little-endian u32 subkeys and a block as two little-endian u32 halves.
//! The compression function byte-reverses its operands before presenting
//! them, see [`crate::hash_impl`].

use crate::params::Sbox;

/// GOST 28147-89 in ECB mode: 32 rounds under a 256-bit key schedule.
pub(crate) struct Gost28147<'s> {
    keys: [u32; 8],
    sbox: &'s Sbox,
}

impl<'s> Gost28147<'s> {
    pub(crate) fn new(key: &[u8; 32], sbox: &'s Sbox) -> Self {
        let mut keys = [0u32; 8];
        for (k, chunk) in keys.iter_mut().zip(key.chunks_exact(4)) {
            *k = u32::from_le_bytes(chunk.try_into().unwrap());
        }
        Self { keys, sbox }
    }

    /// Round function: modular add, nibble substitution, rotate left 11.
    #[inline]
    fn g(&self, a: u32, k: u32) -> u32 {
        self.sbox.substitute(a.wrapping_add(k)).rotate_left(11)
    }

    /// Encrypt one 64-bit block: subkeys k1..k8 three times forward, then
    /// once in reverse order.
    pub(crate) fn encrypt(&self, block: [u8; 8]) -> [u8; 8] {
        let mut a = u32::from_le_bytes(block[0..4].try_into().unwrap());
        let mut b = u32::from_le_bytes(block[4..8].try_into().unwrap());

        for _ in 0..3 {
            for &k in &self.keys {
                let t = b ^ self.g(a, k);
                b = a;
                a = t;
            }
        }
        for &k in self.keys.iter().rev() {
            let t = b ^ self.g(a, k);
            b = a;
            a = t;
        }

        let mut out = [0u8; 8];
        out[0..4].copy_from_slice(&b.to_le_bytes());
        out[4..8].copy_from_slice(&a.to_le_bytes());
        out
    }
}
