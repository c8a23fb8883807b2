use anyhow::Result;
use digest::Digest;
use rand::RngCore;
use std::fmt;
use std::marker::PhantomData;

/// Reports the digest size the surrounding signature scheme expects.
///
/// A length of 0 means the hash has no fixed output size and any digest
/// length is accepted.
pub trait DigestLength {
    /// Expected digest size in bytes (0 = accept any length).
    fn digest_length(&self) -> usize;
}

/// Fixed digest size in bytes.
#[derive(Clone, Copy, Debug)]
pub struct FixedLength(pub usize);

impl DigestLength for FixedLength {
    fn digest_length(&self) -> usize {
        self.0
    }
}

/// Accepts digests of any length.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyLength;

impl DigestLength for AnyLength {
    fn digest_length(&self) -> usize {
        0
    }
}

/// Digest size taken from a hash type implementing the `digest` traits
/// (e.g. `sha3::Sha3_256`).
pub struct HashLength<D>(PhantomData<D>);

impl<D> HashLength<D> {
    pub fn new() -> Self {
        HashLength(PhantomData)
    }
}

impl<D> Default for HashLength<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for HashLength<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for HashLength<D> {}

impl<D> fmt::Debug for HashLength<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashLength")
    }
}

impl<D: Digest> DigestLength for HashLength<D> {
    fn digest_length(&self) -> usize {
        <D as Digest>::output_size()
    }
}

/// Message encoding scheme for signatures with appendix (EMSA).
///
/// The trait is object safe so a verification pipeline can select among
/// schemes at runtime.
pub trait EncodingScheme {
    /// Prepares `digest` for the signing primitive and returns the encoded
    /// representative. `rng` is part of the shared signature because some
    /// schemes salt the representative; schemes that do not need randomness
    /// ignore it.
    fn encode(&self, digest: &[u8], rng: &mut dyn RngCore) -> Result<Vec<u8>>;

    /// Checks the representative recovered from a signature (`coded`)
    /// against a freshly computed digest (`raw`). `key_bits` is advisory
    /// and not used by every scheme. All rejections are reported as
    /// `false`, never as an error.
    fn verify(&self, coded: &[u8], raw: &[u8], key_bits: usize) -> bool;
}
