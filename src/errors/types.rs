use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttackTreeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid attack tree: {0}")]
    InvalidTree(String),

    #[error("Unknown attack tree: {0}")]
    UnknownTree(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AttackTreeError {
    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AttackTreeError::Config(_) => 2,
            AttackTreeError::InvalidTree(_) => 3,
            AttackTreeError::UnknownTree(_) => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AttackTreeError::Config("x".into()).exit_code(), 2);
        assert_eq!(AttackTreeError::InvalidTree("x".into()).exit_code(), 3);
        assert_eq!(AttackTreeError::UnknownTree("x".into()).exit_code(), 4);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(AttackTreeError::from(io).exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = AttackTreeError::UnknownTree("Ransomware".to_string());
        assert_eq!(err.to_string(), "Unknown attack tree: Ransomware");
    }
}
