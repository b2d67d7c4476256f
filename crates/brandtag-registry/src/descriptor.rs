//! Static type descriptors
//!
//! A [`TypeDescriptor`] is the explicit stand-in for a tagged type: its name,
//! whether it is abstract, the tags attached to it and the zero-argument
//! constructor producing an instance.

use crate::variants::PhoneUser;
use brandtag_core::{PhoneTag, TagError, TagResult, UserTag};

/// Zero-argument constructor of a concrete tagged type
pub type Constructor = fn() -> PhoneUser;

/// Declaration-time metadata of one tagged type
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
	/// Name of the type (e.g. "AppleUser")
	pub type_name: &'static str,

	/// Abstract types are registered but never instantiated
	pub is_abstract: bool,

	/// The phone tag, if one is attached
	pub phone: Option<PhoneTag>,

	/// Attached user tags, in declaration order
	pub users: &'static [UserTag],

	/// Zero-argument constructor; `None` for abstract types
	pub constructor: Option<Constructor>,
}

impl TypeDescriptor {
	/// Describe a concrete type
	///
	/// # Examples
	///
	/// ```rust
	/// use brandtag_core::{PhoneBrand, PhoneTag, UserTag};
	/// use brandtag_registry::{PhoneUser, TypeDescriptor};
	///
	/// const USERS: &[UserTag] = &[UserTag::new("乔布斯")];
	///
	/// static APPLE: TypeDescriptor = TypeDescriptor::concrete(
	///     "AppleUser",
	///     Some(PhoneTag::new(PhoneBrand::IphoneX)),
	///     USERS,
	///     || PhoneUser::Apple,
	/// );
	/// assert!(!APPLE.is_abstract);
	/// assert!(APPLE.instantiate().is_ok());
	/// ```
	pub const fn concrete(
		type_name: &'static str,
		phone: Option<PhoneTag>,
		users: &'static [UserTag],
		constructor: Constructor,
	) -> Self {
		Self {
			type_name,
			is_abstract: false,
			phone,
			users,
			constructor: Some(constructor),
		}
	}

	/// Describe an abstract base type: no tags, no constructor
	pub const fn abstract_base(type_name: &'static str) -> Self {
		Self {
			type_name,
			is_abstract: true,
			phone: None,
			users: &[],
			constructor: None,
		}
	}

	/// Construct an instance through the zero-argument constructor
	///
	/// # Errors
	///
	/// Returns [`TagError::Instantiation`] if the type is abstract or has no
	/// constructor. The abstract check runs first.
	pub fn instantiate(&self) -> TagResult<PhoneUser> {
		if self.is_abstract {
			return Err(TagError::instantiation(self.type_name, "type is abstract"));
		}
		let constructor = self.constructor.ok_or_else(|| {
			TagError::instantiation(self.type_name, "no zero-argument constructor")
		})?;
		Ok(constructor())
	}
}
