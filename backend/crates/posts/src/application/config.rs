//! Application Configuration

/// Posts application configuration
#[derive(Debug, Clone)]
pub struct PostsConfig {
    /// Maximum post/comment text length in characters
    pub max_text_length: usize,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            max_text_length: 10_000,
        }
    }
}

impl PostsConfig {
    /// Reject text longer than `max_text_length`
    pub fn check_text(&self, text: &str) -> crate::error::PostResult<()> {
        if text.chars().count() > self.max_text_length {
            return Err(crate::error::PostError::TextTooLong {
                max: self.max_text_length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text_counts_characters() {
        let config = PostsConfig { max_text_length: 3 };
        assert!(config.check_text("äöü").is_ok());
        assert!(config.check_text("abcd").is_err());
    }
}
