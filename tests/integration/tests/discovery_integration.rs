//! End-to-end discovery and printing

use brandtag::{Renderer, Settings, TaggedTypeRegistry, describe_all, print_tagged_types};
use brandtag_integration_tests::EXPECTED_LINES;
use rstest::{fixture, rstest};
use std::collections::HashMap;

#[fixture]
fn registry() -> TaggedTypeRegistry {
	TaggedTypeRegistry::builtin()
}

fn multiset(lines: &[String]) -> HashMap<&str, usize> {
	let mut counts = HashMap::new();
	for line in lines {
		*counts.entry(line.as_str()).or_insert(0) += 1;
	}
	counts
}

#[rstest]
fn test_every_concrete_type_is_described(registry: TaggedTypeRegistry) {
	// Act
	let lines = describe_all(&registry, &Renderer::default()).unwrap();

	// Assert
	assert_eq!(lines.len(), EXPECTED_LINES.len());
	for expected in EXPECTED_LINES {
		assert!(lines.iter().any(|line| line == expected), "missing {expected}");
	}
	assert!(!lines.iter().any(|line| line.starts_with("null=")));
}

#[rstest]
fn test_repeated_passes_yield_the_same_multiset(registry: TaggedTypeRegistry) {
	// Act
	let first = describe_all(&registry, &Renderer::default()).unwrap();
	let second = describe_all(&registry, &Renderer::default()).unwrap();

	// Assert
	assert_eq!(multiset(&first), multiset(&second));
}

#[rstest]
fn test_settings_do_not_change_tagged_output(registry: TaggedTypeRegistry) {
	// Arrange
	let settings = Settings::from_toml_str("absent_category = \"None\"").unwrap();
	let renderer = Renderer::new(settings.absent_category);
	let mut out = Vec::new();

	// Act
	print_tagged_types(&registry, &renderer, &mut out).unwrap();

	// Assert
	let text = String::from_utf8(out).unwrap();
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines, EXPECTED_LINES);
}
