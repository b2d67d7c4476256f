//! Discovery and instantiation of tagged types
//!
//! Discovery is a one-shot pass over a [`TaggedTypeRegistry`]: the registry is
//! validated, abstract types are dropped, and every remaining type is built
//! with its zero-argument constructor. Nothing is cached between passes.
//!
//! # Examples
//!
//! ```rust
//! use brandtag_core::Renderer;
//! use brandtag_registry::{TaggedTypeRegistry, describe_all};
//!
//! let lines = describe_all(&TaggedTypeRegistry::builtin(), &Renderer::default()).unwrap();
//! assert_eq!(lines.len(), 4);
//! ```

use crate::descriptor::TypeDescriptor;
use crate::registry::TaggedTypeRegistry;
use crate::validation::validate_registry;
use crate::variants::PhoneUser;
use brandtag_core::{Renderer, TagError, TagResult, Taggable};

/// Return every tagged type, abstract ones included, after validating the
/// registry
///
/// # Errors
///
/// Returns [`TagError::Introspection`] when validation reports any problem.
pub fn scan(registry: &TaggedTypeRegistry) -> TagResult<Vec<&'static TypeDescriptor>> {
	validate_registry(registry).map_err(|errors| {
		let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
		TagError::Introspection(messages.join("; "))
	})?;

	for descriptor in registry.all() {
		tracing::debug!(
			type_name = descriptor.type_name,
			is_abstract = descriptor.is_abstract,
			user_tags = descriptor.users.len(),
			"scanned tagged type"
		);
	}

	Ok(registry.all().to_vec())
}

/// Return the tagged types that can be instantiated
///
/// Abstract types are excluded here, before any constructor runs.
pub fn discover(registry: &TaggedTypeRegistry) -> TagResult<Vec<&'static TypeDescriptor>> {
	let scanned = scan(registry)?;
	let total = scanned.len();

	let concrete: Vec<_> = scanned
		.into_iter()
		.filter(|descriptor| {
			if descriptor.is_abstract {
				tracing::debug!(type_name = descriptor.type_name, "skipping abstract type");
			}
			!descriptor.is_abstract
		})
		.collect();

	tracing::info!(
		scanned = total,
		concrete = concrete.len(),
		"discovered tagged types"
	);
	Ok(concrete)
}

/// Instantiate one descriptor through its zero-argument constructor
pub fn instantiate(descriptor: &TypeDescriptor) -> TagResult<PhoneUser> {
	tracing::trace!(type_name = descriptor.type_name, "instantiating");
	descriptor.instantiate()
}

/// Discover and instantiate every concrete tagged type
pub fn instantiate_all(registry: &TaggedTypeRegistry) -> TagResult<Vec<PhoneUser>> {
	discover(registry)?
		.into_iter()
		.map(instantiate)
		.collect()
}

/// Discover, instantiate and render every concrete tagged type
///
/// Each instance is dropped right after it is rendered.
pub fn describe_all(
	registry: &TaggedTypeRegistry,
	renderer: &Renderer,
) -> TagResult<Vec<String>> {
	discover(registry)?
		.into_iter()
		.map(|descriptor| {
			let user = instantiate(descriptor)?;
			Ok(user.describe_with(renderer))
		})
		.collect()
}
