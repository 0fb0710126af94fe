use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// Bounds on a proof-of-work search.
///
/// The search itself has no upper bound on the nonce; with an adversarial
/// difficulty it runs forever. Callers that need liveness attach a
/// wall-clock timeout, a shared cancel flag, or both. The default is
/// unbounded.
#[derive(Clone, Debug, Default)]
pub struct SealLimits {
    /// Abort with [`SealTimeout`](crate::ChainError::SealTimeout) once this
    /// much wall-clock time has elapsed.
    pub timeout: Option<Duration>,
    /// Abort with [`SealCancelled`](crate::ChainError::SealCancelled) when
    /// this flag is raised, e.g. on shutdown or on learning of a taller
    /// chain.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SealLimits {
    /// No bounds; the search runs until a valid nonce is found.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            cancel: None,
        }
    }

    pub fn with_cancel(cancel: Arc<AtomicBool>) -> Self {
        Self {
            timeout: None,
            cancel: Some(cancel),
        }
    }
}
