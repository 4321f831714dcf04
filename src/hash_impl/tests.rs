extern crate std;
use super::*;
use crate::params::{CRYPTO_PRO_PARAM_SET, TEST_PARAM_SET};
use std::vec::Vec;

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

// Vectors from GOST R 34.11-94 and RFC 5831, test parameter set.

#[test]
fn test_vector_empty() {
    let digest = hash(&TEST_PARAM_SET, b"");
    let expected = hex_to_bytes("ce85b99cc46752fffee35cab9a7b0278abb4c2d2055cff685af4912c49490f8d");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_vector_a() {
    let digest = hash(&TEST_PARAM_SET, b"a");
    let expected = hex_to_bytes("d42c539e367c66e9c88a801f6649349c21871b4344c6a573f849fdce62f314dd");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_vector_abc() {
    let digest = hash(&TEST_PARAM_SET, b"abc");
    let expected = hex_to_bytes("f3134348c44fb1b2a277729e2285ebb5cb5e0f29c975bc753b70497c06a4d51d");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_vector_message_digest() {
    let digest = hash(&TEST_PARAM_SET, b"message digest");
    let expected = hex_to_bytes("ad4434ecb18f2c99b60cbe59ec3d2469582b65273f48de72db2fde16a4889a4d");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_vector_exactly_one_block() {
    // 32 bytes: finalization runs with no tail block.
    let digest = hash(&TEST_PARAM_SET, b"This is message, length=32 bytes");
    let expected = hex_to_bytes("b1c466d37519b82e8319819ff32595e047a28cb6f83eff1c6916a815a637fffa");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_vector_50_bytes() {
    // One full block plus an 18-byte tail.
    let digest = hash(
        &TEST_PARAM_SET,
        b"Suppose the original message has length = 50 bytes",
    );
    let expected = hex_to_bytes("471aba57a60a770d3a76130635c1fbea4ef14de51f78b4ae57dd893b62f55208");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_vector_quick_brown_fox() {
    let digest = hash(&TEST_PARAM_SET, b"The quick brown fox jumps over the lazy dog");
    let expected = hex_to_bytes("77b7fa410c9ac58a25f49bca7d0468c9296529315eaca76bd1a10f376d1f4294");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_vector_128_u() {
    let digest = hash(&TEST_PARAM_SET, &[b'U'; 128]);
    let expected = hex_to_bytes("53a3a3ed25180cef0c1d85a074273e551c25660a87062a52d926a9e8fe5733a4");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn test_vector_crypto_pro_empty() {
    let digest = hash(&CRYPTO_PRO_PARAM_SET, b"");
    let expected = hex_to_bytes("981e5f3ca30c841487830f84fb433e13ac1101569b9c13584ac483234cd656c0");
    assert_eq!(digest.as_slice(), expected.as_slice());
}

#[test]
fn one_byte_writes_match_one_shot() {
    let message = b"Suppose the original message has length = 50 bytes";
    let oneshot = hash(&TEST_PARAM_SET, message);

    let mut hasher = Hasher::new(&TEST_PARAM_SET);
    for byte in message {
        assert_eq!(hasher.write(core::slice::from_ref(byte)), 1);
    }
    assert_eq!(hasher.finalize(), oneshot);
}

#[test]
fn split_writes_match_one_shot() {
    let message: Vec<u8> = (0u8..64).map(|i| i.wrapping_mul(37)).collect();

    // No-tail, tail-with-padding and block-plus-small-tail lengths.
    for len in [0usize, 1, 31, 32, 33, 63, 64] {
        let oneshot = hash(&TEST_PARAM_SET, &message[..len]);
        for split in 0..=len {
            let mut hasher = Hasher::new(&TEST_PARAM_SET);
            hasher.write(&message[..split]);
            hasher.write(&message[split..len]);
            assert_eq!(hasher.finalize(), oneshot, "len {len} split {split}");
        }
    }
}

#[test]
fn finalize_is_pure() {
    let mut hasher = Hasher::new(&TEST_PARAM_SET);
    hasher.write(b"This is message");
    let first = hasher.finalize();
    assert_eq!(hasher.finalize(), first);

    // Writing after finalize continues the stream unchanged.
    hasher.write(b", length=32 bytes");
    assert_eq!(
        hasher.finalize(),
        hash(&TEST_PARAM_SET, b"This is message, length=32 bytes"),
    );
}

#[test]
fn reset_restores_initial_state() {
    let mut hasher = Hasher::new(&TEST_PARAM_SET);
    hasher.write(b"some other message first");
    hasher.reset();
    hasher.write(b"abc");
    assert_eq!(hasher.finalize(), hash(&TEST_PARAM_SET, b"abc"));
}

#[test]
fn write_returns_input_length() {
    let mut hasher = Hasher::new(&TEST_PARAM_SET);
    assert_eq!(hasher.write(&[]), 0);
    assert_eq!(hasher.write(&[0u8; 33]), 33);
    assert_eq!(hasher.write(&[0u8; 100]), 100);
}

#[test]
fn parameter_sets_disagree() {
    assert_ne!(
        hash(&TEST_PARAM_SET, b"abc"),
        hash(&CRYPTO_PRO_PARAM_SET, b"abc"),
    );
}

#[test]
fn different_messages() {
    assert_ne!(
        hash(&TEST_PARAM_SET, b"message1"),
        hash(&TEST_PARAM_SET, b"message2"),
    );
}
