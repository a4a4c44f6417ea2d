/// Errors raised by preference stores and their providers
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// A store was accessed before its provider was mounted or after it was
    /// unmounted. This is an integration bug, not a user-facing condition.
    #[error("{store} must be used within its provider")]
    OutsideProvider { store: &'static str },
}

pub type Result<T> = std::result::Result<T, PrefsError>;
