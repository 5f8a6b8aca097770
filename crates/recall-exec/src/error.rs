/// Failure produced by a job body.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// The body returned an error. The source error is carried verbatim
    /// and can be downcast by the failure continuation.
    #[error("{0}")]
    Failed(Box<dyn std::error::Error + Send + Sync>),

    /// The body panicked. The panic payload's message, when it had one.
    #[error("job body panicked: {0}")]
    Panicked(String),
}

impl JobError {
    /// Wrap any error as a job failure.
    pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Failed(err.into())
    }

    /// Downcast the carried source error, if this is a [`JobError::Failed`]
    /// of that type.
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Failed(err) => err.downcast_ref(),
            Self::Panicked(_) => None,
        }
    }
}
