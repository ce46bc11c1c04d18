//! Error types for network construction and configuration.
//!
//! Retrieval never fails with an error: an empty network, an unknown seed or
//! a seed that spreads nowhere all come back as `None` or an empty [`Mind`].
//! These errors only guard the boundary where networks and configs are built.
//!
//! [`Mind`]: crate::mind::Mind

/// Errors raised while building a network or validating configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
	/// A cue word was empty or only whitespace.
	#[error("Cue word must not be empty")]
	EmptyWord,

	/// An edge weight was not a positive finite number.
	#[error("Invalid weight {weight} on connection {from} -> {to}")]
	InvalidWeight {
		/// Source cue word
		from: String,
		/// Target cue word
		to: String,
		/// Rejected weight
		weight: f64,
	},

	/// An activation mode name did not match any known mode.
	#[error("Unknown activation mode: {0} (expected balanced, focused or creative)")]
	UnknownMode(String),

	/// Mode parameters or panorama bounds are out of range.
	#[error("Invalid parameters: {0}")]
	InvalidParams(String),
}

impl NetworkError {
	/// Check if this error came from configuration rather than graph data.
	#[must_use]
	pub const fn is_config_error(&self) -> bool {
		matches!(self, Self::UnknownMode(_) | Self::InvalidParams(_))
	}
}

/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
