//! Errors for the selection component.
//!
//! Controller operations never fail; unknown identities are absorbed. The only
//! fallible surface is turning host-supplied text into a [`BarAction`].
//!
//! [`BarAction`]: super::BarAction

/// Error returned when parsing a [`BarAction`](super::BarAction) fails.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseBarActionError {
    /// The name does not correspond to any bar action.
    #[error("unknown bar action '{0}'")]
    UnknownAction(String),
}
