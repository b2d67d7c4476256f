//! # brandtag registry
//!
//! The fixed set of tagged phone user types and the machinery that finds and
//! builds them.
//!
//! ## Modules
//!
//! - [`descriptor`]: [`TypeDescriptor`], the static metadata of one type
//! - [`variants`]: the built-in descriptors and the closed [`PhoneUser`] union
//! - [`registry`]: [`TaggedTypeRegistry`], declaration-ordered and static
//! - [`validation`]: consistency checks run before discovery
//! - [`discovery`]: scan, discover, instantiate and describe
//!
//! ## Lifecycle
//!
//! 1. **Scan**: the registry is validated and listed
//! 2. **Discover**: abstract types are dropped
//! 3. **Instantiate**: each concrete type is built with its constructor
//! 4. **Describe**: each instance is rendered and dropped

pub mod descriptor;
pub mod discovery;
pub mod registry;
pub mod validation;
pub mod variants;

pub use descriptor::{Constructor, TypeDescriptor};
pub use discovery::{describe_all, discover, instantiate, instantiate_all, scan};
pub use registry::{BUILTIN_TYPES, TaggedTypeRegistry};
pub use validation::{
	ValidationError, ValidationResult, check_constructors, check_duplicate_type_names,
	validate_registry,
};
pub use variants::{
	ABSTRACT_PHONE_USER, APPLE_USER, HUAWEI_USER, OTHER_USER, PhoneUser, XIAOMI_USER,
};
