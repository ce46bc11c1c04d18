//! Retrieval Entry Points
//!
//! The two calls a presentation layer makes:
//!
//! 1. `recall(seed?, mode?)` - spread from the given seed, or fall back
//!    to the panoramic overview when there is none
//! 2. `prime(seed?)` - the same overview by default, a focal prime for
//!    one word, a multi-center prime for several
//!
//! Both return `None` instead of failing; callers render an empty state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::mind::Mind;
use crate::mode::{ActivationMode, ModeParams};
use crate::network::Network;
use crate::prime::{PanoramaConfig, Prime};
use crate::recall::{Recall, Seed};

/// Retrieval defaults for a cognition layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CognitionConfig {
	/// Mode used when a request names none
	pub default_mode: ActivationMode,
	/// Bounds for the panoramic overview
	pub panorama: PanoramaConfig,
	/// Per-mode parameter overrides
	pub overrides: HashMap<ActivationMode, ModeParams>,
}

impl CognitionConfig {
	/// Check overrides and panorama bounds.
	///
	/// # Errors
	///
	/// Returns the first [`crate::NetworkError::InvalidParams`] found.
	pub fn validate(&self) -> Result<()> {
		self.panorama.validate()?;
		for params in self.overrides.values() {
			params.validate()?;
		}
		Ok(())
	}

	/// Parameters for `mode`, honouring overrides.
	#[must_use]
	pub fn params(&self, mode: ActivationMode) -> ModeParams {
		self.overrides
			.get(&mode)
			.copied()
			.unwrap_or_else(|| mode.params())
	}

	/// Recall engine for `mode` (or the default mode) over `network`.
	///
	/// # Errors
	///
	/// Fails when the override for the chosen mode is invalid.
	pub fn recall<'a>(
		&self,
		network: &'a Network,
		mode: Option<ActivationMode>,
	) -> Result<Recall<'a>> {
		let mode = mode.unwrap_or(self.default_mode);
		Recall::with_params(network, self.params(mode))
	}
}

/// Recall from `seed` in `mode`; without a seed, prime the panorama.
#[instrument(skip_all, fields(mode = %mode.unwrap_or_default()))]
pub fn recall(
	network: &Network,
	seed: Option<Seed>,
	mode: Option<ActivationMode>,
) -> Option<Mind> {
	let engine = Recall::with_mode(network, mode.unwrap_or_default());

	match seed {
		Some(seed) => engine.execute(seed),
		None => {
			debug!("No seed given, priming panorama");
			Prime::from_recall(engine).panorama(&PanoramaConfig::default())
		}
	}
}

/// Prime the network: panorama, a single focal word, or several centers.
#[instrument(skip_all)]
pub fn prime(network: &Network, seed: Option<Seed>) -> Option<Mind> {
	let prime = Prime::new(network);

	match seed {
		None => prime.execute(None),
		Some(Seed::Word(word)) => prime.execute(Some(word.as_str())),
		Some(Seed::Words(words)) => prime.execute_multiple(&words),
	}
}

/// Like [`recall`], with modes and panorama bounds taken from `config`.
///
/// # Errors
///
/// Fails only when `config` holds invalid parameters for the mode used.
pub fn recall_with(
	config: &CognitionConfig,
	network: &Network,
	seed: Option<Seed>,
	mode: Option<ActivationMode>,
) -> Result<Option<Mind>> {
	config.panorama.validate()?;
	let engine = config.recall(network, mode)?;

	Ok(match seed {
		Some(seed) => engine.execute(seed),
		None => Prime::from_recall(engine).panorama(&config.panorama),
	})
}
