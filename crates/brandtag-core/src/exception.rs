//! Error taxonomy for tag discovery and instantiation

/// Errors raised while scanning, validating or instantiating tagged types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
	/// A discovered type cannot be constructed with zero arguments
	#[error("Cannot instantiate '{type_name}': {reason}")]
	Instantiation { type_name: String, reason: String },

	/// The metadata scan itself failed (inconsistent or invalid registry)
	#[error("Metadata introspection failed: {0}")]
	Introspection(String),

	/// A phone brand name did not match any known brand
	#[error("Unknown phone brand: {0}")]
	UnknownBrand(String),
}

impl TagError {
	/// Build a [`TagError::Instantiation`] for the given type
	pub fn instantiation(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::Instantiation {
			type_name: type_name.into(),
			reason: reason.into(),
		}
	}
}

pub type TagResult<T> = Result<T, TagError>;
