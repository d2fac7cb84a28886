//! Public event handle generation.

use rand::Rng;

/// Length of a generated event handle.
pub const HASH_ID_LENGTH: usize = 16;

/// URL-safe alphabet used for event handles.
const HASH_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates an opaque, URL-safe event handle.
///
/// 16 symbols from a 64-character alphabet give 96 bits of entropy, so no
/// uniqueness check against storage is made.
pub fn generate_hash_id() -> String {
    let mut rng = rand::thread_rng();
    (0..HASH_ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..HASH_ID_ALPHABET.len());
            HASH_ID_ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if the value has the shape of a generated event handle.
pub fn is_valid_hash_id(value: &str) -> bool {
    value.len() == HASH_ID_LENGTH && value.bytes().all(|b| HASH_ID_ALPHABET.contains(&b))
}
