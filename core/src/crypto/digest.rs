use num_enum::TryFromPrimitive;
use sha2::{Digest as _, Sha256, Sha512};

/// Incremental hash state fed over many calls.
///
/// Finalization belongs to whoever owns the accumulator; stream wrappers only
/// ever call `update`.
pub trait Accumulator {
    fn update(&mut self, bytes: &[u8]);
}

impl Accumulator for Sha256 {
    #[inline]
    fn update(&mut self, bytes: &[u8]) {
        sha2::Digest::update(self, bytes);
    }
}

impl Accumulator for Sha512 {
    #[inline]
    fn update(&mut self, bytes: &[u8]) {
        sha2::Digest::update(self, bytes);
    }
}

impl Accumulator for blake3::Hasher {
    #[inline]
    fn update(&mut self, bytes: &[u8]) {
        // returns &mut Hasher for chaining, not needed here
        blake3::Hasher::update(self, bytes);
    }
}

impl Accumulator for crc32fast::Hasher {
    #[inline]
    fn update(&mut self, bytes: &[u8]) {
        crc32fast::Hasher::update(self, bytes);
    }
}

/// Supported digest algorithms (extensible).
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum DigestAlg {
    Sha256 = 0x0001,
    Sha512 = 0x0002,
    Blake3 = 0x0003, // unkeyed
    Crc32 = 0x0004,
}

/// Algorithm-selectable accumulator.
#[derive(Clone)]
pub enum DigestState {
    Sha256(Sha256),
    Sha512(Sha512),
    Blake3(blake3::Hasher),
    Crc32(crc32fast::Hasher),
}

impl DigestState {
    pub fn new(alg: DigestAlg) -> Self {
        match alg {
            DigestAlg::Sha256 => DigestState::Sha256(Sha256::new()),
            DigestAlg::Sha512 => DigestState::Sha512(Sha512::new()),
            DigestAlg::Blake3 => DigestState::Blake3(blake3::Hasher::new()),
            DigestAlg::Crc32 => DigestState::Crc32(crc32fast::Hasher::new()),
        }
    }

    pub fn alg(&self) -> DigestAlg {
        match self {
            DigestState::Sha256(_) => DigestAlg::Sha256,
            DigestState::Sha512(_) => DigestAlg::Sha512,
            DigestState::Blake3(_) => DigestAlg::Blake3,
            DigestState::Crc32(_) => DigestAlg::Crc32,
        }
    }

    /// Finalize and return digest bytes (CRC32 as big-endian `u32`).
    pub fn finalize(self) -> Vec<u8> {
        match self {
            DigestState::Sha256(h) => h.finalize().to_vec(),
            DigestState::Sha512(h) => h.finalize().to_vec(),
            DigestState::Blake3(h) => h.finalize().as_bytes().to_vec(),
            DigestState::Crc32(h) => h.finalize().to_be_bytes().to_vec(),
        }
    }

    pub fn finalize_hex(self) -> String {
        hex::encode(self.finalize())
    }
}

impl Accumulator for DigestState {
    fn update(&mut self, bytes: &[u8]) {
        match self {
            DigestState::Sha256(h) => Accumulator::update(h, bytes),
            DigestState::Sha512(h) => Accumulator::update(h, bytes),
            DigestState::Blake3(h) => Accumulator::update(h, bytes),
            DigestState::Crc32(h) => Accumulator::update(h, bytes),
        }
    }
}

impl std::fmt::Debug for DigestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DigestState").field(&self.alg()).finish()
    }
}
