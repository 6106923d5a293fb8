use thiserror::Error;

/// Errors raised by carousel descendants.
///
/// Engine readiness is never an error: calls made before the engine exists are silent no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A component that reads the shared carousel context was rendered without a
    /// [`Carousel`](crate::carousel::Carousel) ancestor.
    #[error("{component} must be used within a Carousel")]
    ContextMissing { component: &'static str },
}

impl CarouselError {
    pub fn context_missing(component: &'static str) -> Self {
        Self::ContextMissing { component }
    }
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
