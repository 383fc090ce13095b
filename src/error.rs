use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command '{0}' failed with exit code {1}")]
    CommandFailed(String, i32),

    #[error("Command '{0}' not found — is it installed?")]
    CommandNotFound(String),

    #[error("Command '{0}' did not finish within {1}s")]
    TimedOut(String, u64),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("The wizard needs an interactive terminal; do not redirect its output")]
    NotInteractive,
}

impl WizardError {
    /// True when the user hit Ctrl-C while a key or prompt was being read.
    pub fn is_interrupt(&self) -> bool {
        match self {
            WizardError::Io(e) => e.kind() == std::io::ErrorKind::Interrupted,
            WizardError::Prompt(dialoguer::Error::IO(e)) => {
                e.kind() == std::io::ErrorKind::Interrupted
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn interrupted_reads_are_recognised() {
        let read = WizardError::from(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"));
        assert!(read.is_interrupt());

        let prompt = WizardError::from(dialoguer::Error::IO(io::Error::from(
            io::ErrorKind::Interrupted,
        )));
        assert!(prompt.is_interrupt());
    }

    #[test]
    fn other_failures_are_not_interrupts() {
        assert!(!WizardError::from(io::Error::from(io::ErrorKind::NotFound)).is_interrupt());
        assert!(!WizardError::NotInteractive.is_interrupt());
        assert!(!WizardError::TimedOut("vim".into(), 600).is_interrupt());
    }
}
