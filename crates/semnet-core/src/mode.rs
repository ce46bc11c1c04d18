//! Activation Modes
//!
//! A mode is just a set of traversal parameters. Two axes matter:
//!
//! - **Breadth** - how many outgoing connections each cue spreads to
//!   (strongest first)
//! - **Decay** - how fast strength falls per hop, `s(n+1) = s(n) × d`,
//!   and the threshold below which a branch stops
//!
//! | mode       | breadth | decay | threshold | hops reached |
//! |------------|---------|-------|-----------|--------------|
//! | `focused`  | 3       | 0.6   | 0.35      | 2            |
//! | `balanced` | 5       | 0.8   | 0.30      | 5            |
//! | `creative` | 8       | 0.9   | 0.20      | 15           |
//!
//! New modes are new [`ModeParams`] values; the traversal never branches
//! on the mode itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Named activation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationMode {
	/// Precise recall: few strong, near neighbours
	Focused,
	/// Between focused and creative on both axes
	#[default]
	Balanced,
	/// Broad association: many, distant, weakly connected cues
	Creative,
}

impl ActivationMode {
	/// Every built-in mode.
	pub const ALL: [Self; 3] = [Self::Focused, Self::Balanced, Self::Creative];

	/// Lowercase name, as accepted by [`FromStr`].
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Focused => "focused",
			Self::Balanced => "balanced",
			Self::Creative => "creative",
		}
	}

	/// Built-in traversal parameters for this mode.
	#[must_use]
	pub const fn params(self) -> ModeParams {
		match self {
			Self::Focused => ModeParams {
				breadth_limit: 3,
				decay_factor: 0.6,
				activation_threshold: 0.35,
				max_activations: 100,
			},
			Self::Balanced => ModeParams {
				breadth_limit: 5,
				decay_factor: 0.8,
				activation_threshold: 0.3,
				max_activations: 500,
			},
			Self::Creative => ModeParams {
				breadth_limit: 8,
				decay_factor: 0.9,
				activation_threshold: 0.2,
				max_activations: 1000,
			},
		}
	}
}

impl fmt::Display for ActivationMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ActivationMode {
	type Err = NetworkError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"focused" => Ok(Self::Focused),
			"balanced" => Ok(Self::Balanced),
			"creative" => Ok(Self::Creative),
			_ => Err(NetworkError::UnknownMode(s.to_string())),
		}
	}
}

/// Traversal parameters for one recall pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeParams {
	/// Outgoing connections followed per cue, strongest first
	pub breadth_limit: usize,
	/// Multiplier applied to strength on every hop (0-1]
	pub decay_factor: f64,
	/// Minimum strength for a cue to activate (0-1]
	pub activation_threshold: f64,
	/// Maximum cues one origin may activate
	pub max_activations: usize,
}

impl Default for ModeParams {
	fn default() -> Self {
		ActivationMode::default().params()
	}
}

impl ModeParams {
	/// Check that the parameters describe a terminating traversal.
	///
	/// # Errors
	///
	/// Returns [`NetworkError::InvalidParams`] naming the offending field.
	pub fn validate(&self) -> Result<()> {
		if self.breadth_limit == 0 {
			return Err(NetworkError::InvalidParams(
				"breadth_limit must be at least 1".to_string(),
			));
		}
		if !(self.decay_factor > 0.0 && self.decay_factor <= 1.0) {
			return Err(NetworkError::InvalidParams(format!(
				"decay_factor must be in (0, 1], got {}",
				self.decay_factor
			)));
		}
		if !(self.activation_threshold > 0.0 && self.activation_threshold <= 1.0) {
			return Err(NetworkError::InvalidParams(format!(
				"activation_threshold must be in (0, 1], got {}",
				self.activation_threshold
			)));
		}
		if self.max_activations == 0 {
			return Err(NetworkError::InvalidParams(
				"max_activations must be at least 1".to_string(),
			));
		}
		Ok(())
	}

	/// Deepest hop whose strength still clears the threshold.
	///
	/// `max n such that dⁿ ≥ τ`, capped at `max_activations` for `d = 1`.
	#[must_use]
	pub fn reach(&self) -> usize {
		let mut hops = 0;
		let mut strength = 1.0;
		while hops < self.max_activations {
			strength *= self.decay_factor;
			if strength < self.activation_threshold {
				break;
			}
			hops += 1;
		}
		hops
	}
}
