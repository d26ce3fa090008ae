use md5::{Digest, Md5};


pub const HASH_LEN: usize = 15;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HashedInput {
    bytes: [u8; HASH_LEN]
}

impl HashedInput {
    pub fn new(bytes: [u8; HASH_LEN]) -> Self {
        HashedInput { bytes }
    }

    pub fn bytes(&self) -> &[u8; HASH_LEN] {
        &self.bytes
    }
}

/// Digests the input with MD5 and keeps the first 15 of the 16 output
/// bytes. The hash is used only as a deterministic byte source, never
/// for authentication.
pub fn hash_input(input: &str) -> HashedInput {
    let digest = Md5::digest(input.as_bytes());

    let mut bytes = [0; HASH_LEN];
    bytes.copy_from_slice(&digest[..HASH_LEN]);
    HashedInput::new(bytes)
}
