#![no_std]
#![doc = include_str!("../README.md")]

mod block;
mod gost28147;
mod hash_impl;
mod params;

mod rustcrypto_hash;

pub use hash_impl::{Hasher, hash};
pub use params::{CRYPTO_PRO_PARAM_SET, Sbox, TEST_PARAM_SET};
pub use rustcrypto_hash::{Gost94CryptoPro, Gost94Test};

pub use digest::{self, Digest, Update}; // For `Gost94Test`/`Gost94CryptoPro` users

/// Message block size in bytes (256 bits).
pub const BLOCK_SIZE: usize = 32;

/// Hash output size in bytes (256 bits).
pub const HASH_SIZE: usize = 32;
