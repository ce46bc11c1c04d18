//! Cue Network
//!
//! The associative graph everything else reads from. Each cue is a
//! concept word owning its outgoing weighted connections:
//!
//! `cue(w) = { w, { target → weight } }`
//!
//! Cues live in an arena indexed by [`CueId`]; words are interned once
//! so traversals work on plain indices. Iteration order is insertion
//! order everywhere (cues by first insertion, connections of a cue by
//! first connection), which keeps every tie-break reproducible.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::error::{NetworkError, Result};

/// Outgoing edges of a cue: (`target`, weight) pairs in insertion order.
type Connections = SmallVec<[(CueId, f64); 4]>;

/// Interned identifier of a cue within one [`Network`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CueId(u32);

impl CueId {
	/// Arena slot of this cue.
	#[inline]
	#[must_use]
	pub const fn index(self) -> usize {
		self.0 as usize
	}
}

/// A concept node and its outgoing associations.
#[derive(Clone, Debug)]
pub struct Cue {
	word: String,
	connections: Connections,
}

impl Cue {
	fn new(word: &str) -> Self {
		Self {
			word: word.to_string(),
			connections: SmallVec::new(),
		}
	}

	/// The concept word.
	#[must_use]
	pub fn word(&self) -> &str {
		&self.word
	}

	/// Outgoing connections as (`target`, weight) pairs, in insertion order.
	#[must_use]
	pub fn connections(&self) -> &[(CueId, f64)] {
		&self.connections
	}

	/// Number of distinct outgoing connections.
	#[inline]
	#[must_use]
	pub fn out_degree(&self) -> usize {
		self.connections.len()
	}

	/// Weight of the connection to `target`, if any.
	#[must_use]
	pub fn weight_to(&self, target: CueId) -> Option<f64> {
		self.connections
			.iter()
			.find(|(id, _)| *id == target)
			.map(|&(_, weight)| weight)
	}

	/// Connections ordered by descending weight.
	///
	/// The sort is stable, so equal weights keep insertion order.
	pub(crate) fn ranked_connections(&self) -> Connections {
		let mut ranked = self.connections.clone();
		ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
		ranked
	}
}

/// Weighted directed graph of cues.
///
/// Every connection target is itself a cue: [`Network::connect`] creates
/// missing endpoints, so the closure invariant holds by construction.
#[derive(Clone, Debug, Default)]
pub struct Network {
	cues: Vec<Cue>,
	index: HashMap<String, CueId>,
}

impl Network {
	/// Create an empty network.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a network from `(source, target, weight)` triples.
	///
	/// # Errors
	///
	/// Fails on the first empty word or non-positive weight.
	pub fn from_edges<I, S>(edges: I) -> Result<Self>
	where
		I: IntoIterator<Item = (S, S, f64)>,
		S: AsRef<str>,
	{
		let mut network = Self::new();
		for (source, target, weight) in edges {
			network.connect(source.as_ref(), target.as_ref(), weight)?;
		}
		Ok(network)
	}

	/// Insert a cue if it does not exist yet and return its id.
	///
	/// # Errors
	///
	/// Returns [`NetworkError::EmptyWord`] for an empty or blank word.
	pub fn add_cue(&mut self, word: &str) -> Result<CueId> {
		if word.trim().is_empty() {
			return Err(NetworkError::EmptyWord);
		}
		if let Some(&id) = self.index.get(word) {
			return Ok(id);
		}

		let slot = u32::try_from(self.cues.len())
			.map_err(|_| NetworkError::InvalidParams("network exceeds u32::MAX cues".to_string()))?;
		let id = CueId(slot);
		self.cues.push(Cue::new(word));
		let _ = self.index.insert(word.to_string(), id);
		Ok(id)
	}

	/// Set the weight of `source → target`, creating either cue if needed.
	///
	/// An existing connection keeps its position and takes the new weight.
	///
	/// # Errors
	///
	/// Returns [`NetworkError::InvalidWeight`] unless `weight` is finite and
	/// positive, or [`NetworkError::EmptyWord`] for a blank endpoint.
	pub fn connect(&mut self, source: &str, target: &str, weight: f64) -> Result<()> {
		if !weight.is_finite() || weight <= 0.0 {
			return Err(NetworkError::InvalidWeight {
				from: source.to_string(),
				to: target.to_string(),
				weight,
			});
		}

		let source_id = self.add_cue(source)?;
		let target_id = self.add_cue(target)?;
		let connections = &mut self.cues[source_id.index()].connections;

		let existing = connections.iter().position(|(id, _)| *id == target_id);
		match existing {
			Some(pos) => connections[pos].1 = weight,
			None => connections.push((target_id, weight)),
		}
		Ok(())
	}

	/// Whether `word` exists as a cue.
	#[must_use]
	pub fn has_cue(&self, word: &str) -> bool {
		self.index.contains_key(word)
	}

	/// Interned id of `word`.
	#[must_use]
	pub fn id_of(&self, word: &str) -> Option<CueId> {
		self.index.get(word).copied()
	}

	/// Cue stored under `id`.
	#[must_use]
	pub fn cue(&self, id: CueId) -> Option<&Cue> {
		self.cues.get(id.index())
	}

	/// Cue stored under `word`.
	#[must_use]
	pub fn get(&self, word: &str) -> Option<&Cue> {
		self.id_of(word).and_then(|id| self.cue(id))
	}

	/// Word of the cue stored under `id`.
	#[must_use]
	pub fn word(&self, id: CueId) -> Option<&str> {
		self.cue(id).map(Cue::word)
	}

	/// All cues in insertion order.
	pub fn cues(&self) -> impl Iterator<Item = (&str, &Cue)> + '_ {
		self.cues.iter().map(|cue| (cue.word(), cue))
	}

	/// All cue ids in insertion order.
	pub fn ids(&self) -> impl Iterator<Item = CueId> + '_ {
		(0..self.cues.len())
			.filter_map(|slot| u32::try_from(slot).ok())
			.map(CueId)
	}

	/// Number of cues.
	#[must_use]
	pub fn len(&self) -> usize {
		self.cues.len()
	}

	/// Whether the network has no cues.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cues.is_empty()
	}

	/// Total number of connections.
	#[must_use]
	pub fn edge_count(&self) -> usize {
		self.cues.iter().map(Cue::out_degree).sum()
	}

	/// Out-degree of `word`, 0 for unknown words.
	#[must_use]
	pub fn out_degree(&self, word: &str) -> usize {
		self.get(word).map_or(0, Cue::out_degree)
	}

	/// Sum the weights of every connection pointing at each word.
	///
	/// `in(w) = Σ weight(s → w)` over all sources `s`
	///
	/// Only words that are the target of at least one connection appear.
	/// Entries are ordered by first appearance as a target while walking
	/// cues and their connections in insertion order.
	#[must_use]
	pub fn calculate_in_weights(&self) -> Vec<(&str, f64)> {
		let mut slots: Vec<Option<usize>> = vec![None; self.cues.len()];
		let mut totals: Vec<(CueId, f64)> = Vec::new();

		for cue in &self.cues {
			for &(target, weight) in &cue.connections {
				let slot = slots[target.index()];
				match slot {
					Some(slot) => totals[slot].1 += weight,
					None => {
						slots[target.index()] = Some(totals.len());
						totals.push((target, weight));
					}
				}
			}
		}

		totals
			.into_iter()
			.map(|(id, total)| (self.cues[id.index()].word(), total))
			.collect()
	}

	/// Aggregate incoming weight of `word`, 0.0 when nothing points at it.
	#[must_use]
	pub fn in_weight(&self, word: &str) -> f64 {
		let Some(target) = self.id_of(word) else {
			return 0.0;
		};
		self.cues
			.iter()
			.filter_map(|cue| cue.weight_to(target))
			.sum()
	}

	/// Outgoing connections of `word` as (`target`, weight), strongest first.
	#[must_use]
	pub fn connections_of(&self, word: &str) -> Vec<(&str, f64)> {
		self.get(word).map_or_else(Vec::new, |cue| {
			cue.ranked_connections()
				.into_iter()
				.map(|(id, weight)| (self.cues[id.index()].word(), weight))
				.collect()
		})
	}

	/// Flags for every cue: `true` when at least one connection targets it.
	pub(crate) fn incoming_flags(&self) -> Vec<bool> {
		let mut flags = vec![false; self.cues.len()];
		for cue in &self.cues {
			for &(target, _) in &cue.connections {
				flags[target.index()] = true;
			}
		}
		flags
	}

	/// Arena access for ids this network handed out.
	#[inline]
	pub(crate) fn cue_at(&self, id: CueId) -> &Cue {
		&self.cues[id.index()]
	}
}
