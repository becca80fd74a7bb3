use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised by the simulation core and its collaborators.
///
/// None of these are fatal to the tick loop: callers either substitute a
/// default, log and continue, or report the message back to the console.
#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected particle parameters (non-positive mass, non-finite values).
    #[error("invalid particle: {0}")]
    InvalidParticle(String),

    /// A rigid-body or renderable handle that the backend does not know.
    #[error("unknown handle {0}")]
    UnknownHandle(u64),

    /// A backend refused to destroy one of its resources.
    #[error("failed to destroy handle {handle}: {reason}")]
    DestroyFailed { handle: u64, reason: String },

    /// Console input that could not be turned into a command.
    #[error("bad command: {0}")]
    Command(String),

    /// Semantically invalid configuration values.
    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = SimError::InvalidParticle("mass must be > 0".to_string());
        let msg = e.to_string();
        assert!(msg.contains("invalid particle"));
        assert!(msg.contains("mass"));
    }

    #[test]
    fn destroy_failure_names_the_handle() {
        let e = SimError::DestroyFailed {
            handle: 7,
            reason: "busy".into(),
        };
        assert_eq!(e.to_string(), "failed to destroy handle 7: busy");
    }
}
