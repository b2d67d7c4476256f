//! Registry validation
//!
//! Detects metadata that would make discovery or instantiation misbehave:
//! duplicate type names, concrete types without a constructor, abstract types
//! with one, and constructors that build a different type than the one they
//! are registered under.

use crate::registry::TaggedTypeRegistry;
use std::collections::HashMap;

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	/// The same type name is registered more than once
	DuplicateTypeName { type_name: String, count: usize },
	/// A concrete type has no zero-argument constructor
	MissingConstructor { type_name: String },
	/// An abstract type carries a constructor
	AbstractWithConstructor { type_name: String },
	/// A constructor builds an instance of another type
	ConstructorMismatch {
		type_name: String,
		constructed: String,
	},
}

impl std::fmt::Display for ValidationError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ValidationError::DuplicateTypeName { type_name, count } => {
				write!(
					f,
					"Duplicate type name '{type_name}' ({count} occurrences)"
				)
			}
			ValidationError::MissingConstructor { type_name } => {
				write!(f, "Concrete type '{type_name}' has no constructor")
			}
			ValidationError::AbstractWithConstructor { type_name } => {
				write!(f, "Abstract type '{type_name}' must not have a constructor")
			}
			ValidationError::ConstructorMismatch {
				type_name,
				constructed,
			} => {
				write!(
					f,
					"Constructor of '{type_name}' builds '{constructed}' instead"
				)
			}
		}
	}
}

impl std::error::Error for ValidationError {}

/// Validation result type
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// Check for type names registered more than once
pub fn check_duplicate_type_names(registry: &TaggedTypeRegistry) -> Vec<ValidationError> {
	let mut counts: HashMap<&str, usize> = HashMap::new();
	for descriptor in registry.all() {
		*counts.entry(descriptor.type_name).or_default() += 1;
	}

	// Report in declaration order so messages are stable
	let mut errors = Vec::new();
	for descriptor in registry.all() {
		match counts.remove(descriptor.type_name) {
			Some(count) if count > 1 => errors.push(ValidationError::DuplicateTypeName {
				type_name: descriptor.type_name.to_string(),
				count,
			}),
			_ => {}
		}
	}

	errors
}

/// Check that constructors are present exactly on concrete types and build
/// the type they are registered under
///
/// Calls every concrete constructor exactly once.
pub fn check_constructors(registry: &TaggedTypeRegistry) -> Vec<ValidationError> {
	let mut errors = Vec::new();

	for descriptor in registry.all() {
		match (descriptor.is_abstract, descriptor.constructor) {
			(true, Some(_)) => errors.push(ValidationError::AbstractWithConstructor {
				type_name: descriptor.type_name.to_string(),
			}),
			(false, None) => errors.push(ValidationError::MissingConstructor {
				type_name: descriptor.type_name.to_string(),
			}),
			(false, Some(constructor)) => {
				let constructed = constructor().descriptor().type_name;
				if constructed != descriptor.type_name {
					errors.push(ValidationError::ConstructorMismatch {
						type_name: descriptor.type_name.to_string(),
						constructed: constructed.to_string(),
					});
				}
			}
			(true, None) => {}
		}
	}

	errors
}

/// Run every registry check
///
/// [`check_constructors`] calls each concrete constructor once to compare the
/// built type with its descriptor, so a validated type is constructed one
/// extra time per pass. The instance is dropped immediately.
///
/// # Examples
///
/// ```rust
/// use brandtag_registry::{TaggedTypeRegistry, validate_registry};
///
/// assert!(validate_registry(&TaggedTypeRegistry::builtin()).is_ok());
/// ```
pub fn validate_registry(registry: &TaggedTypeRegistry) -> ValidationResult<()> {
	let mut errors = check_duplicate_type_names(registry);
	errors.extend(check_constructors(registry));

	if errors.is_empty() {
		Ok(())
	} else {
		Err(errors)
	}
}
