//! Short code generation.
//!
//! Codes are fixed-length sequences drawn uniformly from a 62-symbol
//! alphanumeric alphabet. The production generator samples the OS-seeded
//! thread RNG, so code sequences differ across process runs.

use rand::Rng;

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Alphabet the codes are drawn from: `a-z`, `A-Z`, `0-9`.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of candidate short codes.
///
/// Implementations are pure generators that don't interact with storage;
/// uniqueness is confirmed by the allocator against the repository. Tests
/// substitute a mock to drive collisions deterministically.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Draws one candidate code.
    fn generate(&self) -> String;
}

/// Uniform random generator over [`CODE_ALPHABET`].
#[derive(Debug, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_unique_symbols() {
        assert_eq!(CODE_ALPHABET.len(), 62);

        let unique: HashSet<_> = CODE_ALPHABET.iter().collect();
        assert_eq!(unique.len(), CODE_ALPHABET.len());
    }

    #[test]
    fn test_generate_has_fixed_length() {
        let code = RandomCodeGenerator::new().generate();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_stays_in_alphabet() {
        let code = RandomCodeGenerator::new().generate();
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generate_produces_distinct_codes() {
        let generator = RandomCodeGenerator::new();
        let mut codes = HashSet::new();

        // 1000 draws out of a 62^6 keyspace; a collision here would point
        // at a broken randomness source.
        for _ in 0..1000 {
            codes.insert(generator.generate());
        }

        assert_eq!(codes.len(), 1000);
    }
}
