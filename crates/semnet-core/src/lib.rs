//! # Semnet Core
//!
//! Associative semantic memory for agent cognition: a weighted directed
//! graph of concept cues, searched by spreading activation.
//!
//! ## Why a Cue Network?
//!
//! Agents remember concepts by what they connect to, not by exact
//! lookup. A cue network stores each concept once and lets associations
//! carry the structure:
//!
//! - **Connections are directed** - `coffee → morning` says nothing
//!   about `morning → coffee`
//! - **Weights are association strength** - reinforced links weigh more
//! - **Structure suggests entry points** - roots are foundations, hubs
//!   are what everything else points to
//!
//! ## Core Concepts
//!
//! ### Recall
//!
//! Activation starts at seed cues with strength 1.0 and spreads along
//! the strongest outgoing connections, decaying on every hop:
//!
//! ```text
//! s(target) = s(source) × d
//! ```
//!
//! The [`ActivationMode`] picks breadth, decay and threshold:
//! `focused` stays close, `creative` wanders far, `balanced` sits between.
//!
//! ### Prime
//!
//! Without a seed, [`Prime`] reads the graph structure to choose one:
//!
//! 1. **Roots** (nothing points at them), widest first
//! 2. **Hubs** (largest aggregate in-weight) when every cue has a parent
//!
//! The panoramic overview takes the top roots plus their strongest
//! children and activates them all at once.
//!
//! ## Example
//!
//! ```rust
//! use semnet_core::{ActivationMode, Network, Prime, Recall};
//!
//! let network = Network::from_edges([
//!     ("rust", "ownership", 0.9),
//!     ("rust", "cargo", 0.4),
//!     ("ownership", "borrowing", 0.8),
//! ])?;
//!
//! // Focal recall from a known cue
//! let mind = Recall::with_mode(&network, ActivationMode::Balanced)
//!     .execute("rust")
//!     .expect("rust is in the network");
//! assert!(mind.contains("borrowing"));
//!
//! // Overview when nothing is asked for
//! let overview = Prime::new(&network).execute(None).expect("network is not empty");
//! assert_eq!(overview.centers(), ["rust", "ownership", "cargo"]);
//! # Ok::<(), semnet_core::NetworkError>(())
//! ```
//!
//! ## Failure Model
//!
//! Retrieval never errors. An empty network, unknown seeds or seeds
//! that spread nowhere give `None` or a small [`Mind`]; only building a
//! network or a config can fail, with [`NetworkError`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cognition;
pub mod error;
pub mod mind;
pub mod mode;
pub mod network;
pub mod prime;
pub mod recall;

pub use cognition::{prime, recall, recall_with, CognitionConfig};
pub use error::{NetworkError, Result};
pub use mind::{Connection, Mind};
pub use mode::{ActivationMode, ModeParams};
pub use network::{Cue, CueId, Network};
pub use prime::{find_root_nodes, top_hub_nodes, PanoramaConfig, Prime};
pub use recall::{Recall, Seed};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;

	#[test]
	fn test_overview_then_focus() {
		let network = Network::from_edges([
			("memory", "recall", 0.9),
			("memory", "prime", 0.7),
			("recall", "activation", 0.8),
			("prime", "roots", 0.6),
		])
		.unwrap();

		let overview = prime(&network, None).unwrap();
		assert_eq!(overview.centers()[0], "memory");

		// Pick a word seen in the overview and dig into it
		let focus = recall(&network, Seed::parse("recall"), Some(ActivationMode::Focused)).unwrap();
		assert!(focus.contains("activation"));
		assert!(!focus.contains("memory"));
	}
}
