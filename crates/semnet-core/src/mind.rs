//! Mind
//!
//! The result of one activation pass: which cues lit up, how strongly,
//! and through which connections. A mind holds words only, never
//! references into the network, so it outlives the network borrow and
//! can be handed to any renderer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A connection followed during activation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
	/// Cue the activation spread from
	pub source: String,
	/// Cue the activation spread to
	pub target: String,
	/// Association weight of the edge
	pub weight: f64,
	/// Strength the target reached through this edge
	pub strength: f64,
}

/// Immutable snapshot of an activated network region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mind {
	centers: Vec<String>,
	activations: BTreeMap<String, f64>,
	connections: Vec<Connection>,
}

impl Mind {
	pub(crate) const fn from_parts(
		centers: Vec<String>,
		activations: BTreeMap<String, f64>,
		connections: Vec<Connection>,
	) -> Self {
		Self {
			centers,
			activations,
			connections,
		}
	}

	/// Seed words the activation started from, in request order.
	#[must_use]
	pub fn centers(&self) -> &[String] {
		&self.centers
	}

	/// Every activated cue, each exactly once.
	pub fn activated_cues(&self) -> impl Iterator<Item = &str> + '_ {
		self.activations.keys().map(String::as_str)
	}

	/// Whether `word` was activated.
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.activations.contains_key(word)
	}

	/// Best strength `word` reached across all centers.
	#[must_use]
	pub fn strength(&self, word: &str) -> Option<f64> {
		self.activations.get(word).copied()
	}

	/// Traversed connections, grouped by center in request order.
	#[must_use]
	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	/// Number of activated cues.
	#[must_use]
	pub fn len(&self) -> usize {
		self.activations.len()
	}

	/// Whether nothing was activated.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.activations.is_empty()
	}
}
