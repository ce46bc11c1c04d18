//! End-to-end retrieval scenarios: overview first, then focused recall.

#![allow(clippy::unwrap_used)]

use semnet_core::{
	find_root_nodes, prime, recall, ActivationMode, Network, PanoramaConfig, Prime, Recall, Seed,
};

/// A → B(0.9), A → C(0.4), B → D(0.8)
fn scenario() -> Network {
	Network::from_edges([("A", "B", 0.9), ("A", "C", 0.4), ("B", "D", 0.8)]).unwrap()
}

fn words(mind: &semnet_core::Mind) -> Vec<&str> {
	mind.activated_cues().collect()
}

#[test]
fn sole_root_panorama_reaches_grandchild() {
	let network = scenario();
	assert_eq!(find_root_nodes(&network), vec!["A"]);

	let prime = Prime::new(&network);
	let config = PanoramaConfig {
		max_root_nodes: 1,
		children_per_root: 2,
		..PanoramaConfig::default()
	};
	let seeds = prime.prime_words(&config);
	assert_eq!(seeds, vec!["A", "B", "C"]);

	let mind = Recall::with_mode(&network, ActivationMode::Balanced)
		.execute_words(&seeds)
		.unwrap();
	for word in ["A", "B", "C", "D"] {
		assert!(mind.contains(word), "{word} should be active");
	}
}

#[test]
fn empty_network_yields_nothing() {
	let network = Network::new();
	assert!(prime(&network, None).is_none());
	assert!(recall(&network, Some(Seed::from("x")), None).is_none());
	assert!(Prime::new(&network).prime_word().is_none());
	assert!(Prime::new(&network)
		.prime_words(&PanoramaConfig::default())
		.is_empty());
}

#[test]
fn rootless_network_primes_heaviest_hub() {
	// Cycle a → b → c → a plus extra weight into b
	let network = Network::from_edges([
		("a", "b", 0.6),
		("b", "c", 0.3),
		("c", "a", 0.2),
		("c", "b", 0.7),
	])
	.unwrap();

	assert!(find_root_nodes(&network).is_empty());
	assert_eq!(Prime::new(&network).prime_word(), Some("b"));
}

#[test]
fn roots_with_out_degrees_one_three_two() {
	let network = Network::from_edges([
		("one", "o1", 1.0),
		("three", "t1", 0.1),
		("three", "t2", 0.1),
		("three", "t3", 0.1),
		("two", "w1", 1.0),
		("two", "w2", 1.0),
	])
	.unwrap();

	assert_eq!(Prime::new(&network).prime_word(), Some("three"));
}

#[test]
fn unknown_seed_is_skipped_not_fatal() {
	let network = scenario();

	assert!(recall(&network, Seed::parse("nowhere"), None).is_none());

	let mind = recall(&network, Seed::parse("nowhere C"), None).unwrap();
	assert_eq!(words(&mind), vec!["C"]);
}

#[test]
fn explicit_prime_word_has_no_fallback() {
	let network = scenario();
	assert!(Prime::new(&network).execute(Some("nowhere")).is_none());
	assert!(prime(&network, Seed::parse("nowhere")).is_none());
}

#[test]
fn modes_trade_breadth_for_depth() {
	// Wide fan at the hub, long tail behind the strongest leaf
	let mut network = Network::new();
	for i in 0..8 {
		network
			.connect("hub", &format!("leaf{i}"), f64::from(8 - i))
			.unwrap();
	}
	for i in 0..6 {
		let from = if i == 0 { "leaf0".to_string() } else { format!("tail{}", i - 1) };
		network.connect(&from, &format!("tail{i}"), 1.0).unwrap();
	}

	let focused = recall(&network, Seed::parse("hub"), Some(ActivationMode::Focused)).unwrap();
	let balanced = recall(&network, Seed::parse("hub"), Some(ActivationMode::Balanced)).unwrap();
	let creative = recall(&network, Seed::parse("hub"), Some(ActivationMode::Creative)).unwrap();

	assert!(focused.len() < balanced.len());
	assert!(balanced.len() < creative.len());
	assert!(!focused.contains("tail1"));
	assert!(creative.contains("tail5"));
	assert!(creative.contains("leaf7"));
}

#[test]
fn connections_follow_activation_paths() {
	let network = scenario();
	let mind = Recall::new(&network).execute(vec!["B", "A"]).unwrap();

	// B's traversal comes first, then A's
	let first = &mind.connections()[0];
	assert_eq!((first.source.as_str(), first.target.as_str()), ("B", "D"));
	assert!(mind
		.connections()
		.iter()
		.all(|c| mind.contains(&c.source) && mind.contains(&c.target)));
}
