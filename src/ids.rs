//! Id generation
//!
//! Fresh item ids come from an injected capability so tests can pin the
//! sequence. The default source emits UUIDv4-format strings from `rand`;
//! the seeded variant uses a deterministic PCG stream.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Id capability injected into the store.
pub trait IdSource {
    /// Produce a fresh id, collision-free within the session.
    fn next_id(&mut self) -> String;
}

/// UUIDv4-format id generator over any RNG.
#[derive(Debug, Clone)]
pub struct UuidIds<R> {
    rng: R,
}

impl UuidIds<ThreadRng> {
    /// OS-seeded generator, the production source.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for UuidIds<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidIds<Pcg64> {
    /// Deterministic generator for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> IdSource for UuidIds<R> {
    fn next_id(&mut self) -> String {
        format_uuid(self.rng.random())
    }
}

/// Format 128 random bits as a UUIDv4 string (8-4-4-4-12 hex).
fn format_uuid(bits: u128) -> String {
    // Version nibble (4) and RFC 4122 variant bits (10)
    let bits = (bits & !(0xf_u128 << 76)) | (0x4_u128 << 76);
    let bits = (bits & !(0x3_u128 << 62)) | (0x2_u128 << 62);
    let hex = format!("{bits:032x}");
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_format() {
        let mut ids = UuidIds::seeded(42);
        let id = ids.next_id();
        assert_eq!(id.len(), 36);
        let bytes = id.as_bytes();
        assert_eq!(bytes[8], b'-');
        assert_eq!(bytes[13], b'-');
        assert_eq!(bytes[18], b'-');
        assert_eq!(bytes[23], b'-');
        // Version and variant markers
        assert_eq!(bytes[14], b'4');
        assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b'));
    }

    #[test]
    fn test_ids_unique_within_session() {
        let mut ids = UuidIds::seeded(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_id()));
        }
    }

    #[test]
    fn test_seeded_ids_deterministic() {
        let mut a = UuidIds::seeded(99);
        let mut b = UuidIds::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
        let mut c = UuidIds::seeded(100);
        assert_ne!(UuidIds::seeded(99).next_id(), c.next_id());
    }
}
