//! Overview and Focus Example
//!
//! This example walks the recall workflow an agent follows on a new
//! task: look at the panoramic overview first, pick a word that is
//! actually in the network, then recall around it in different modes.
//!
//! Run with: `cargo run --example overview_and_focus`

use semnet_core::{prime, recall, ActivationMode, Mind, Network, NetworkError, Seed};
use tracing_subscriber::EnvFilter;

fn print_mind(mind: &Mind) {
	println!("  centers: {}", mind.centers().join(", "));
	for word in mind.activated_cues() {
		let strength = mind.strength(word).unwrap_or_default();
		println!("    {word:<12} {strength:.3}");
	}
	println!("  paths:");
	for connection in mind.connections() {
		println!(
			"    {} -> {} (weight {:.2}, strength {:.3})",
			connection.source, connection.target, connection.weight, connection.strength
		);
	}
}

fn main() -> Result<(), NetworkError> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	println!("=== Overview and Focus ===\n");

	// A small network about a software project:
	//
	// project → testing → fixtures → golden files
	//    ↓         ↓
	//  release   flaky CI → retries
	//
	// "project" and "oncall" are roots; nothing points at them.
	let network = Network::from_edges([
		("project", "testing", 0.9),
		("project", "release", 0.6),
		("testing", "fixtures", 0.7),
		("testing", "flaky-ci", 0.8),
		("fixtures", "golden", 0.5),
		("flaky-ci", "retries", 0.9),
		("oncall", "flaky-ci", 0.4),
	])?;

	// Step 1: no seed, so prime builds the panorama
	println!("--- Panorama (no seed) ---\n");
	if let Some(mind) = prime(&network, None) {
		print_mind(&mind);
	}

	// Step 2: focus on a word seen in the panorama
	for mode in ActivationMode::ALL {
		println!("\n--- Recall \"testing\" ({mode}) ---\n");
		match recall(&network, Seed::parse("testing"), Some(mode)) {
			Some(mind) => print_mind(&mind),
			None => println!("  nothing activated"),
		}
	}

	// Step 3: a word that is not in the network
	println!("\n--- Recall \"deploy\" ---\n");
	if recall(&network, Seed::parse("deploy"), None).is_none() {
		println!("  'deploy' is not a cue; pick words from the panorama instead");
	}

	Ok(())
}
