//! Property tests for priming and recall invariants on random graphs.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use semnet_core::{find_root_nodes, ActivationMode, Network, PanoramaConfig, Prime, Recall};

/// Build a network with cues `n0..n{size}` and the given edges.
fn build_network(size: usize, edges: &[(usize, usize, f64)]) -> Network {
	let mut network = Network::new();
	for i in 0..size {
		let _ = network.add_cue(&format!("n{i}")).unwrap();
	}
	for &(source, target, weight) in edges {
		if source < size && target < size {
			network
				.connect(&format!("n{source}"), &format!("n{target}"), weight)
				.unwrap();
		}
	}
	network
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
	prop::collection::vec((0..n, 0..n, 0.05_f64..5.0_f64), 0..n * 3)
}

fn mode_strategy() -> impl Strategy<Value = ActivationMode> {
	prop::sample::select(ActivationMode::ALL.to_vec())
}

// =============================================================================
// Prime word selection
// =============================================================================
proptest! {
	#[test]
	fn prime_word_exists_and_prefers_roots(
		size in 0_usize..20,
		edges in edge_strategy(20)
	) {
		let network = build_network(size, &edges);
		let word = Prime::new(&network).prime_word();

		if network.is_empty() {
			prop_assert!(word.is_none());
		} else {
			let word = word.unwrap();
			prop_assert!(network.has_cue(word));

			let roots = find_root_nodes(&network);
			if !roots.is_empty() {
				prop_assert!(roots.contains(&word), "{} is not a root", word);
				let best = roots.iter().map(|r| network.out_degree(r)).max().unwrap();
				prop_assert_eq!(network.out_degree(word), best);
			}
		}
	}
}

// =============================================================================
// Panorama bounds
// =============================================================================
proptest! {
	#[test]
	fn prime_words_bounded_and_known(
		size in 0_usize..30,
		edges in edge_strategy(30),
		max_root_nodes in 1_usize..10,
		children_per_root in 0_usize..5,
		max_total_words in 1_usize..25
	) {
		let network = build_network(size, &edges);
		let config = PanoramaConfig { max_root_nodes, children_per_root, max_total_words };
		let words = Prime::new(&network).prime_words(&config);

		prop_assert!(words.len() <= max_total_words);
		for word in &words {
			prop_assert!(network.has_cue(word));
		}
		prop_assert_eq!(words.is_empty(), network.is_empty());
	}
}

// =============================================================================
// Recall idempotence
// =============================================================================
proptest! {
	#[test]
	fn recall_is_idempotent(
		edges in edge_strategy(15),
		seed in 0_usize..15,
		mode in mode_strategy()
	) {
		let network = build_network(15, &edges);
		let recall = Recall::with_mode(&network, mode);
		let seed = format!("n{seed}");

		let first = recall.execute(seed.as_str()).unwrap();
		let second = recall.execute(seed.as_str()).unwrap();
		prop_assert_eq!(
			first.activated_cues().collect::<Vec<_>>(),
			second.activated_cues().collect::<Vec<_>>()
		);
		prop_assert_eq!(first, second);
	}
}

// =============================================================================
// Strength never grows along a path and never drops below threshold
// =============================================================================
proptest! {
	#[test]
	fn strength_monotone_and_above_threshold(
		edges in edge_strategy(20),
		seeds in prop::collection::vec(0_usize..20, 1..4),
		mode in mode_strategy()
	) {
		let network = build_network(20, &edges);
		let params = mode.params();
		let seeds: Vec<String> = seeds.into_iter().map(|i| format!("n{i}")).collect();
		let mind = Recall::with_mode(&network, mode).execute(seeds).unwrap();

		for word in mind.activated_cues() {
			prop_assert!(network.has_cue(word));
			prop_assert!(mind.strength(word).unwrap() >= params.activation_threshold);
		}

		for connection in mind.connections() {
			let source = mind.strength(&connection.source).unwrap();
			prop_assert!(connection.strength <= source);
			prop_assert!(connection.strength >= params.activation_threshold);

			let cue = network.get(&connection.source).unwrap();
			let target = network.id_of(&connection.target).unwrap();
			prop_assert_eq!(cue.weight_to(target), Some(connection.weight));
		}
	}
}

// =============================================================================
// Unknown seeds are skipped
// =============================================================================
proptest! {
	#[test]
	fn unknown_seeds_do_not_change_result(
		edges in edge_strategy(15),
		seed in 0_usize..15,
		mode in mode_strategy()
	) {
		let network = build_network(15, &edges);
		let recall = Recall::with_mode(&network, mode);
		let seed = format!("n{seed}");

		let plain = recall.execute(vec![seed.as_str()]).unwrap();
		let noisy = recall.execute(vec!["ghost", seed.as_str(), "phantom"]).unwrap();
		prop_assert_eq!(plain, noisy);
		prop_assert!(recall.execute(vec!["ghost", "phantom"]).is_none());
	}
}
