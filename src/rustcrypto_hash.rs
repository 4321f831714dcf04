//! # RustCrypto Digest trait implementation
//!
//! This module provides implementations of the RustCrypto `digest` traits
//! for the hash, one named type per built-in parameter set.

use crate::hash_impl::Hasher;
use crate::params::{CRYPTO_PRO_PARAM_SET, Sbox, TEST_PARAM_SET};
use core::fmt;
use core::marker::PhantomData;
use digest::{
    HashMarker, Output, OutputSizeUser, Reset,
    block_buffer::Eager,
    consts::U32,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        UpdateCore,
    },
};

/// Parameter-set binding for the [`digest`] adapter types.
pub trait Gost94Params {
    /// Name reported through [`AlgorithmName`].
    const NAME: &'static str;
    /// The substitution boxes driving the cipher rounds.
    const SBOX: &'static Sbox;
}

/// id-GostR3411-94-TestParamSet binding.
#[derive(Clone, Copy, Debug, Default)]
pub struct TestParams;

impl Gost94Params for TestParams {
    const NAME: &'static str = "Gost94Test";
    const SBOX: &'static Sbox = &TEST_PARAM_SET;
}

/// id-GostR3411-94-CryptoProParamSet binding.
#[derive(Clone, Copy, Debug, Default)]
pub struct CryptoProParams;

impl Gost94Params for CryptoProParams {
    const NAME: &'static str = "Gost94CryptoPro";
    const SBOX: &'static Sbox = &CRYPTO_PRO_PARAM_SET;
}

/// GOST R 34.11-94 core implementing the RustCrypto digest traits.
#[derive(Clone)]
pub struct Gost94Core<P: Gost94Params> {
    hasher: Hasher<'static>,
    _params: PhantomData<P>,
}

impl<P: Gost94Params> Default for Gost94Core<P> {
    fn default() -> Self {
        Self {
            hasher: Hasher::new(P::SBOX),
            _params: PhantomData,
        }
    }
}

impl<P: Gost94Params> HashMarker for Gost94Core<P> {}

impl<P: Gost94Params> OutputSizeUser for Gost94Core<P> {
    type OutputSize = U32;
}

impl<P: Gost94Params> BlockSizeUser for Gost94Core<P> {
    type BlockSize = U32;
}

impl<P: Gost94Params> BufferKindUser for Gost94Core<P> {
    type BufferKind = Eager;
}

impl<P: Gost94Params> UpdateCore for Gost94Core<P> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.hasher.write(block.as_slice());
        }
    }
}

impl<P: Gost94Params> FixedOutputCore for Gost94Core<P> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        // Feed the partial tail still sitting in the outer block buffer.
        let pos = buffer.get_pos();
        if pos > 0 {
            let data = buffer.get_data();
            self.hasher.write(&data[..pos]);
        }

        out.copy_from_slice(&self.hasher.finalize());
    }
}

impl<P: Gost94Params> Reset for Gost94Core<P> {
    #[inline]
    fn reset(&mut self) {
        self.hasher.reset();
    }
}

impl<P: Gost94Params> AlgorithmName for Gost94Core<P> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(P::NAME)
    }
}

impl<P: Gost94Params> fmt::Debug for Gost94Core<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(P::NAME)?;
        f.write_str("Core { .. }")
    }
}

/// GOST R 34.11-94 with the test parameter set, as a [`digest::Digest`].
pub type Gost94Test = CoreWrapper<Gost94Core<TestParams>>;

/// GOST R 34.11-94 with the CryptoPro parameter set, as a [`digest::Digest`].
pub type Gost94CryptoPro = CoreWrapper<Gost94Core<CryptoProParams>>;
