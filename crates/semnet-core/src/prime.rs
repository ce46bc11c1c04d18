//! Prime
//!
//! Choosing where to start when nobody says.
//!
//! The graph structure alone suggests good starting points:
//!
//! - **Root nodes** (in-degree 0) are foundational concepts nothing
//!   else derives; the one with most outgoing connections opens up the
//!   largest part of the network.
//! - **Hub nodes** (highest aggregate in-weight) are concepts many
//!   others reinforce, used when every cue has a parent.
//!
//! `in(w) = Σ weight(s → w)`
//!
//! Single-word priming picks one focal cue. Panoramic priming (the
//! "default mode" overview) takes the top roots plus their strongest
//! children and activates all of them at once through [`Recall`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{NetworkError, Result};
use crate::mind::Mind;
use crate::mode::ActivationMode;
use crate::network::Network;
use crate::recall::Recall;

/// Bounds for panoramic seed selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanoramaConfig {
	/// Roots kept after ranking by out-degree
	pub max_root_nodes: usize,
	/// Strongest children added after each root
	pub children_per_root: usize,
	/// Hard cap on the seed list
	pub max_total_words: usize,
}

impl Default for PanoramaConfig {
	fn default() -> Self {
		Self {
			max_root_nodes: 15,
			children_per_root: 3,
			max_total_words: 50,
		}
	}
}

impl PanoramaConfig {
	/// Check that the bounds can produce at least one seed.
	///
	/// # Errors
	///
	/// Returns [`NetworkError::InvalidParams`] when `max_total_words` or
	/// `max_root_nodes` is zero.
	pub fn validate(&self) -> Result<()> {
		if self.max_total_words == 0 {
			return Err(NetworkError::InvalidParams(
				"max_total_words must be at least 1".to_string(),
			));
		}
		if self.max_root_nodes == 0 {
			return Err(NetworkError::InvalidParams(
				"max_root_nodes must be at least 1".to_string(),
			));
		}
		Ok(())
	}
}

// ============================================================================
// Structural heuristics
// ============================================================================

/// Cues no connection points at, in insertion order.
#[must_use]
pub fn find_root_nodes(network: &Network) -> Vec<&str> {
	let has_incoming = network.incoming_flags();
	let roots: Vec<&str> = network
		.cues()
		.zip(has_incoming)
		.filter(|(_, incoming)| !incoming)
		.map(|((word, _), _)| word)
		.collect();

	debug!(count = roots.len(), "Found root nodes");
	roots
}

/// Up to `limit` cues ranked by aggregate in-weight, heaviest first.
///
/// Equal weights keep in-weight order. Without any connections the
/// first `limit` cues are returned instead.
#[must_use]
pub fn top_hub_nodes(network: &Network, limit: usize) -> Vec<&str> {
	let mut in_weights = network.calculate_in_weights();

	if in_weights.is_empty() {
		warn!("No cue has incoming weight, using first cues");
		return network.cues().take(limit).map(|(word, _)| word).collect();
	}

	in_weights.sort_by(|a, b| b.1.total_cmp(&a.1));
	let hubs: Vec<&str> = in_weights
		.into_iter()
		.take(limit)
		.map(|(word, _)| word)
		.collect();

	info!(selected = hubs.len(), top = ?&hubs[..hubs.len().min(10)], "Selected hub nodes");
	hubs
}

// ============================================================================
// Prime
// ============================================================================

/// Seed selection on top of a [`Recall`] engine.
#[derive(Clone, Copy, Debug)]
pub struct Prime<'a> {
	recall: Recall<'a>,
}

impl<'a> Prime<'a> {
	/// Prime in the default (`balanced`) mode.
	#[must_use]
	pub fn new(network: &'a Network) -> Self {
		Self::from_recall(Recall::new(network))
	}

	/// Prime with a built-in activation mode.
	#[must_use]
	pub const fn with_mode(network: &'a Network, mode: ActivationMode) -> Self {
		Self::from_recall(Recall::with_mode(network, mode))
	}

	/// Prime through an existing recall engine.
	#[must_use]
	pub const fn from_recall(recall: Recall<'a>) -> Self {
		Self { recall }
	}

	/// The underlying recall engine.
	#[must_use]
	pub const fn recall(&self) -> &Recall<'a> {
		&self.recall
	}

	fn network(&self) -> &'a Network {
		self.recall.network()
	}

	/// Pick a single focal cue.
	///
	/// In priority order:
	/// 1. the root with the largest out-degree
	/// 2. the cue with the strictly largest in-weight
	/// 3. the first cue
	///
	/// Ties go to whichever candidate came first. `None` only for an
	/// empty network.
	#[must_use]
	pub fn prime_word(&self) -> Option<&'a str> {
		let network = self.network();
		if network.is_empty() {
			warn!("Network is empty, no word to prime");
			return None;
		}

		debug!(cues = network.len(), "Calculating prime word");

		let roots = find_root_nodes(network);
		let mut best_root: Option<(&str, usize)> = None;
		for root in roots {
			let degree = network.out_degree(root);
			if best_root.map_or(true, |(_, best)| degree > best) {
				best_root = Some((root, degree));
			}
		}
		if let Some((word, out_degree)) = best_root {
			info!(word, out_degree, "Selected root node as prime word");
			return Some(word);
		}

		let mut best_hub: Option<(&str, f64)> = None;
		for (word, weight) in network.calculate_in_weights() {
			if weight > best_hub.map_or(0.0, |(_, best)| best) {
				best_hub = Some((word, weight));
			}
		}
		if let Some((word, in_weight)) = best_hub {
			info!(word, in_weight, "Selected high in-weight node as prime word");
			return Some(word);
		}

		let first = network.cues().next().map(|(word, _)| word);
		debug!(word = ?first, "Using first cue as fallback");
		first
	}

	/// Build a panoramic seed list: top roots, each followed by its
	/// strongest children.
	///
	/// Without roots, the top hubs by in-weight are returned instead.
	/// The list never exceeds `max_total_words` and holds no duplicates.
	#[must_use]
	pub fn prime_words(&self, config: &PanoramaConfig) -> Vec<&'a str> {
		let network = self.network();

		debug!(
			max_root_nodes = config.max_root_nodes,
			children_per_root = config.children_per_root,
			max_total_words = config.max_total_words,
			cues = network.len(),
			"Selecting panorama words"
		);

		let roots = find_root_nodes(network);
		if roots.is_empty() {
			info!("No root nodes found, using hub nodes");
			return top_hub_nodes(network, config.max_total_words);
		}

		let total_roots = roots.len();
		let mut ranked: Vec<(&str, usize)> = roots
			.into_iter()
			.map(|word| (word, network.out_degree(word)))
			.collect();
		ranked.sort_by(|a, b| b.1.cmp(&a.1));
		ranked.truncate(config.max_root_nodes);

		info!(total_roots, selected = ranked.len(), "Selected root nodes");

		let mut words: Vec<&'a str> = Vec::new();
		for &(root, _) in &ranked {
			words.push(root);

			if let Some(cue) = network.get(root) {
				// Only the top children are candidates; ones already listed are dropped
				let children = cue
					.ranked_connections()
					.into_iter()
					.take(config.children_per_root)
					.map(|(id, _)| network.cue_at(id).word())
					.filter(|child| !words.contains(child))
					.collect::<Vec<_>>();
				words.extend(children);
			}

			if words.len() >= config.max_total_words {
				break;
			}
		}
		words.truncate(config.max_total_words);

		info!(
			words = words.len(),
			sample = ?&words[..words.len().min(10)],
			"Panorama words prepared"
		);
		words
	}

	/// Prime from `word`, or from the default panorama when omitted.
	///
	/// An explicit word that is not in the network yields `None`; there
	/// is no fallback to automatic selection.
	#[instrument(skip_all, fields(word = word.unwrap_or("<auto>")))]
	pub fn execute(&self, word: Option<&str>) -> Option<Mind> {
		let Some(word) = word else {
			return self.panorama(&PanoramaConfig::default());
		};

		if !self.network().has_cue(word) {
			warn!(word, "Prime word not found in network");
			return None;
		}

		let mind = self.recall.execute_word(word);
		if let Some(mind) = &mind {
			info!(
				activated = mind.len(),
				connections = mind.connections().len(),
				"Prime completed"
			);
		}
		mind
	}

	/// Panoramic overview: activate every panorama word at once.
	pub fn panorama(&self, config: &PanoramaConfig) -> Option<Mind> {
		let words = self.prime_words(config);
		if words.is_empty() {
			warn!("No prime words available, network may be empty");
			return None;
		}
		self.execute_multiple(&words)
	}

	/// Multi-center priming, straight through to [`Recall::execute_words`].
	pub fn execute_multiple<S: AsRef<str>>(&self, words: &[S]) -> Option<Mind> {
		let mind = self.recall.execute_words(words);
		match &mind {
			Some(mind) => info!(
				requested = words.len(),
				activated = mind.len(),
				connections = mind.connections().len(),
				"Multi-center prime completed"
			),
			None => warn!(requested = words.len(), "Multi-center prime failed"),
		}
		mind
	}
}
