//! Registry of tagged types
//!
//! The registry is an explicit, statically-constructed list of
//! [`TypeDescriptor`]s. It replaces scanning a namespace for implementors: the
//! set of tagged types is fixed at compile time and iterated in declaration
//! order.
//!
//! # Examples
//!
//! ```rust
//! use brandtag_registry::TaggedTypeRegistry;
//!
//! let registry = TaggedTypeRegistry::builtin();
//! assert_eq!(registry.len(), 5);
//! assert_eq!(registry.concrete().count(), 4);
//! ```

use crate::descriptor::TypeDescriptor;
use crate::variants::{ABSTRACT_PHONE_USER, APPLE_USER, HUAWEI_USER, OTHER_USER, XIAOMI_USER};

/// Every built-in tagged type, abstract base included
pub static BUILTIN_TYPES: [&TypeDescriptor; 5] = [
	&ABSTRACT_PHONE_USER,
	&APPLE_USER,
	&HUAWEI_USER,
	&XIAOMI_USER,
	&OTHER_USER,
];

/// An ordered collection of tagged type descriptors
#[derive(Debug, Clone)]
pub struct TaggedTypeRegistry {
	types: Vec<&'static TypeDescriptor>,
}

impl TaggedTypeRegistry {
	/// The registry of built-in phone user types
	pub fn builtin() -> Self {
		Self::from_descriptors(BUILTIN_TYPES)
	}

	/// Build a registry from arbitrary descriptors, keeping their order
	///
	/// No validation happens here; see [`crate::validation::validate_registry`].
	pub fn from_descriptors(types: impl IntoIterator<Item = &'static TypeDescriptor>) -> Self {
		Self {
			types: types.into_iter().collect(),
		}
	}

	/// Every registered descriptor, in declaration order
	pub fn all(&self) -> &[&'static TypeDescriptor] {
		&self.types
	}

	/// Find a descriptor by type name
	///
	/// # Examples
	///
	/// ```rust
	/// use brandtag_registry::TaggedTypeRegistry;
	///
	/// let registry = TaggedTypeRegistry::builtin();
	/// assert!(registry.find("XiaomiUser").is_some());
	/// assert!(registry.find("NokiaUser").is_none());
	/// ```
	pub fn find(&self, type_name: &str) -> Option<&'static TypeDescriptor> {
		self.types
			.iter()
			.copied()
			.find(|descriptor| descriptor.type_name == type_name)
	}

	/// Descriptors of the types that may be instantiated
	pub fn concrete(&self) -> impl Iterator<Item = &'static TypeDescriptor> + '_ {
		self.types
			.iter()
			.copied()
			.filter(|descriptor| !descriptor.is_abstract)
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

impl Default for TaggedTypeRegistry {
	fn default() -> Self {
		Self::builtin()
	}
}
