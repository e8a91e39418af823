use uuid::Uuid;

/// Length of the random part of a generator seed
const SEED_LEN: usize = 12;

/// Sequential ID generator for page sections
///
/// IDs look like `<prefix>_<seed>_<n>`, where the seed is cut from a v4 UUID
/// so sections from separate sessions do not collide.
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String,
    count: u64,
}

impl IDGenerator {
    pub fn new(prefix: &str) -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self::from_seed(format!("{}_{}", prefix, &uuid[..SEED_LEN]))
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}_{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IDGenerator {
    fn default() -> Self {
        Self::new("s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = IDGenerator::from_seed("s_test");

        assert_eq!(gen.new_id(), "s_test_1");
        assert_eq!(gen.new_id(), "s_test_2");

        for _ in 0..7 {
            gen.new_id();
        }
        assert_eq!(gen.new_id(), "s_test_10");
    }

    #[test]
    fn test_prefix_is_kept() {
        let mut gen = IDGenerator::new("sec");
        assert!(gen.seed().starts_with("sec_"));
        assert!(gen.new_id().starts_with(gen.seed()));
    }

    #[test]
    fn test_seed_is_random_hex() {
        let a = IDGenerator::new("s");
        let b = IDGenerator::new("s");

        let random = a.seed().strip_prefix("s_").unwrap();
        assert_eq!(random.len(), SEED_LEN);
        assert!(random.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a.seed(), b.seed());
    }
}
