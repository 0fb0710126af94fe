use crate::digest::Digest;

/// Canonical byte serialization for hashing.
///
/// Downstream verification re-derives every hash from re-parsed wire data,
/// so the bytes fed to the hash function must be byte-identical across
/// implementations and runs. Raw strings hash as their UTF-8 bytes,
/// unquoted. Structured entities hash as one-line JSON with the field list
/// written out explicitly in lexicographic key order — never reflective
/// field iteration, so the byte stream is pinned by the declared list.
pub trait Canonical {
    /// The exact bytes this value contributes to the hash function.
    fn canonical_bytes(&self) -> Vec<u8>;
}

impl Canonical for str {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Canonical for String {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl<T: Canonical + ?Sized> Canonical for &T {
    fn canonical_bytes(&self) -> Vec<u8> {
        (**self).canonical_bytes()
    }
}

/// Digest of a value's canonical bytes.
pub fn object_hash<T: Canonical + ?Sized>(value: &T) -> Digest {
    Digest::of_bytes(&value.canonical_bytes())
}
