//! Random secret generation.

use super::Secret;
use crate::error::SynthesisError;
use base64::Engine;

/// Bytes of entropy drawn per generated secret
pub const SECRET_ENTROPY_BYTES: usize = 20;

/// Source of fresh secret values.
///
/// Implementations must be safe to call from concurrent syntheses.
pub trait SecretGenerator: Send + Sync + std::fmt::Debug {
    fn generate(&self) -> Result<Secret, SynthesisError>;
}

/// Draws secrets from the operating system CSPRNG and base64-encodes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecretGenerator;

impl SecretGenerator for OsSecretGenerator {
    fn generate(&self) -> Result<Secret, SynthesisError> {
        let mut bytes = [0u8; SECRET_ENTROPY_BYTES];
        getrandom::getrandom(&mut bytes).map_err(|err| {
            tracing::error!(error = %err, "failed to draw random bytes for secret");
            SynthesisError::EntropyUnavailable(err)
        })?;
        Ok(Secret::new(
            base64::engine::general_purpose::STANDARD.encode(bytes),
        ))
    }
}
