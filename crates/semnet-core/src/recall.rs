//! Recall
//!
//! Spreading activation from one or more seed cues.
//!
//! Every seed is an independent origin with strength 1.0. From each
//! origin, activation spreads breadth-first along the strongest
//! outgoing connections:
//!
//! `s(target) = s(source) × d`
//!
//! Where:
//! - `d` = decay factor of the active mode
//! - only the `breadth_limit` heaviest connections of a cue are followed
//! - a branch stops once `s` would fall below the activation threshold
//!
//! A cue keeps the best strength any path gave it. A weaker path never
//! re-activates it; a stronger one replaces the stored strength and
//! expands the cue again.
//!
//! The resulting [`Mind`] is the union of all origins: activated cues
//! carry their best strength, connections are concatenated per origin.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::mind::{Connection, Mind};
use crate::mode::{ActivationMode, ModeParams};
use crate::network::{CueId, Network};

/// Base strength of every origin.
const ORIGIN_STRENGTH: f64 = 1.0;

// ============================================================================
// Seeds
// ============================================================================

/// Where activation starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seed {
	/// A single focal cue
	Word(String),
	/// Several independent centers, activated in order
	Words(Vec<String>),
}

impl Seed {
	/// Parse a keyword query.
	///
	/// Whitespace separates keywords: one keyword is a single seed,
	/// several are a multi-center seed, none means "no seed".
	#[must_use]
	pub fn parse(query: &str) -> Option<Self> {
		let mut words: Vec<String> = query.split_whitespace().map(str::to_string).collect();
		match words.len() {
			0 => None,
			1 => words.pop().map(Self::Word),
			_ => Some(Self::Words(words)),
		}
	}

	/// Seed words in order.
	#[must_use]
	pub fn words(&self) -> &[String] {
		match self {
			Self::Word(word) => std::slice::from_ref(word),
			Self::Words(words) => words,
		}
	}
}

impl From<&str> for Seed {
	fn from(word: &str) -> Self {
		Self::Word(word.to_string())
	}
}

impl From<String> for Seed {
	fn from(word: String) -> Self {
		Self::Word(word)
	}
}

impl From<Vec<String>> for Seed {
	fn from(words: Vec<String>) -> Self {
		Self::Words(words)
	}
}

impl From<Vec<&str>> for Seed {
	fn from(words: Vec<&str>) -> Self {
		Self::Words(words.into_iter().map(str::to_string).collect())
	}
}

impl From<&[&str]> for Seed {
	fn from(words: &[&str]) -> Self {
		Self::Words(words.iter().map(|w| (*w).to_string()).collect())
	}
}

// ============================================================================
// Spreading
// ============================================================================

/// Activation reached from a single origin.
struct Spread {
	/// Cues in first-activation order with their best strength
	activated: Vec<(CueId, f64)>,
	/// (`source`, `target`, weight, strength) in traversal order
	edges: Vec<(CueId, CueId, f64, f64)>,
}

/// Spreading-activation engine over a borrowed network.
#[derive(Clone, Copy, Debug)]
pub struct Recall<'a> {
	network: &'a Network,
	params: ModeParams,
}

impl<'a> Recall<'a> {
	/// Recall in the default (`balanced`) mode.
	#[must_use]
	pub fn new(network: &'a Network) -> Self {
		Self::with_mode(network, ActivationMode::default())
	}

	/// Recall with a built-in mode.
	#[must_use]
	pub const fn with_mode(network: &'a Network, mode: ActivationMode) -> Self {
		Self {
			network,
			params: mode.params(),
		}
	}

	/// Recall with custom traversal parameters.
	///
	/// # Errors
	///
	/// Returns [`crate::NetworkError::InvalidParams`] when `params` fail
	/// [`ModeParams::validate`].
	pub fn with_params(network: &'a Network, params: ModeParams) -> Result<Self> {
		params.validate()?;
		Ok(Self { network, params })
	}

	/// The network this engine reads.
	#[must_use]
	pub const fn network(&self) -> &'a Network {
		self.network
	}

	/// Active traversal parameters.
	#[must_use]
	pub const fn params(&self) -> &ModeParams {
		&self.params
	}

	/// Activate from a single word or a list of words.
	///
	/// Returns `None` when no seed word exists in the network.
	pub fn execute(&self, seed: impl Into<Seed>) -> Option<Mind> {
		match seed.into() {
			Seed::Word(word) => self.execute_word(&word),
			Seed::Words(words) => self.execute_words(&words),
		}
	}

	/// Single-seed path.
	#[instrument(skip_all, fields(word = %word))]
	pub fn execute_word(&self, word: &str) -> Option<Mind> {
		self.activate(&[word])
	}

	/// Multi-seed path: every resolvable word is an independent center.
	#[instrument(skip_all, fields(seeds = words.len()))]
	pub fn execute_words<S: AsRef<str>>(&self, words: &[S]) -> Option<Mind> {
		let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
		self.activate(&words)
	}

	fn activate(&self, words: &[&str]) -> Option<Mind> {
		let mut origins: Vec<CueId> = Vec::with_capacity(words.len());
		let mut seen: HashSet<CueId> = HashSet::with_capacity(words.len());

		for &word in words {
			match self.network.id_of(word) {
				Some(id) => {
					if seen.insert(id) {
						origins.push(id);
					} else {
						debug!(word, "Duplicate seed ignored");
					}
				}
				None => warn!(word, "Seed not found in network, skipping"),
			}
		}

		if origins.is_empty() {
			warn!(requested = words.len(), "No seed resolved to a cue");
			return None;
		}

		let mut activations: BTreeMap<String, f64> = BTreeMap::new();
		let mut connections: Vec<Connection> = Vec::new();

		for &origin in &origins {
			let spread = self.spread_from(origin);

			for (id, strength) in spread.activated {
				let word = self.word(id);
				let best = activations.entry(word.to_string()).or_insert(strength);
				*best = best.max(strength);
			}

			connections.extend(spread.edges.into_iter().map(
				|(source, target, weight, strength)| Connection {
					source: self.word(source).to_string(),
					target: self.word(target).to_string(),
					weight,
					strength,
				},
			));
		}

		let centers: Vec<String> = origins.iter().map(|&id| self.word(id).to_string()).collect();

		debug!(
			centers = centers.len(),
			activated = activations.len(),
			connections = connections.len(),
			"Recall completed"
		);

		Some(Mind::from_parts(centers, activations, connections))
	}

	/// Breadth-first relaxation from one origin.
	fn spread_from(&self, origin: CueId) -> Spread {
		let params = &self.params;

		let mut best: HashMap<CueId, f64> = HashMap::new();
		let mut order: Vec<CueId> = vec![origin];
		let mut edges = Vec::new();
		let mut queue: VecDeque<(CueId, f64)> = VecDeque::new();

		let _ = best.insert(origin, ORIGIN_STRENGTH);
		queue.push_back((origin, ORIGIN_STRENGTH));

		while let Some((current, strength)) = queue.pop_front() {
			// Superseded by a stronger path queued later
			if best.get(&current).is_some_and(|&s| s > strength) {
				continue;
			}

			let next = strength * params.decay_factor;
			if next < params.activation_threshold {
				continue;
			}

			let ranked = self.network.cue_at(current).ranked_connections();
			for (target, weight) in ranked.into_iter().take(params.breadth_limit) {
				let previous = best.get(&target).copied();
				if previous.is_some_and(|s| s >= next) {
					continue;
				}
				if previous.is_none() {
					if best.len() >= params.max_activations {
						continue;
					}
					order.push(target);
				}

				let _ = best.insert(target, next);
				edges.push((current, target, weight, next));
				queue.push_back((target, next));
			}
		}

		let activated = order
			.into_iter()
			.map(|id| (id, best.get(&id).copied().unwrap_or(ORIGIN_STRENGTH)))
			.collect();

		Spread { activated, edges }
	}

	fn word(&self, id: CueId) -> &'a str {
		self.network.cue_at(id).word()
	}
}
