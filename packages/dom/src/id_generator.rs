use crc32fast::Hasher;

/// Generate a document seed from a document name using CRC32
pub fn get_document_seed(name: &str) -> String {
    let mut buff = String::from(name);
    if !name.starts_with("doc://") {
        buff = format!("doc://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for nodes within a document
#[derive(Debug, Clone, PartialEq)]
pub struct IdGenerator {
    seed: String, // Document seed (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            seed: get_document_seed(name),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get document seed
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_seed_generation() {
        let id1 = get_document_seed("landing-page");
        let id2 = get_document_seed("landing-page");

        // Same name always generates same seed
        assert_eq!(id1, id2);

        // Different names generate different seeds
        let id3 = get_document_seed("pricing-page");
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new("test-page");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        // IDs are sequential
        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        // All share same seed
        let seed = gen.seed();
        assert!(id1.starts_with(seed));
        assert!(id2.starts_with(seed));
        assert!(id3.starts_with(seed));
    }
}
