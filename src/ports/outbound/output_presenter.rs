use crate::shared::Result;

/// OutputPresenter port for presenting the formatted report locally
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the formatted report content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
