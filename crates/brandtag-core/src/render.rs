//! Shared rendering of tag data
//!
//! The rendered form is `<brand>=[<user>...]` where each user tag renders as
//! `@User(name=<name>)`. A type without a phone tag renders the absent-category
//! stand-in in place of the brand.

use crate::tags::{PhoneTag, UserTag};
use std::fmt::Write as _;

/// Stand-in printed when a type carries no phone tag
pub const ABSENT_CATEGORY: &str = "null";

/// Formats tag data into a one-line description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
	absent_category: String,
}

impl Renderer {
	/// Create a renderer with a custom absent-category stand-in
	///
	/// # Examples
	///
	/// ```rust
	/// use brandtag_core::Renderer;
	///
	/// let renderer = Renderer::new("None");
	/// assert_eq!(renderer.render(None, &[]), "None=[]");
	/// ```
	pub fn new(absent_category: impl Into<String>) -> Self {
		Self {
			absent_category: absent_category.into(),
		}
	}

	pub fn absent_category(&self) -> &str {
		&self.absent_category
	}

	/// Render the given tag data
	///
	/// Nothing about the tagged type is assumed: any combination of a present
	/// or missing phone tag and any number of user tags is accepted.
	pub fn render(&self, phone: Option<PhoneTag>, users: &[UserTag]) -> String {
		let category = match phone {
			Some(tag) => tag.brand().as_str(),
			None => self.absent_category.as_str(),
		};

		let mut out = String::with_capacity(category.len() + 3 + users.len() * 16);
		out.push_str(category);
		out.push_str("=[");
		for user in users {
			// Writing into a String cannot fail
			let _ = write!(out, "{user}");
		}
		out.push(']');
		out
	}
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new(ABSENT_CATEGORY)
	}
}

/// Render tag data with the default [`Renderer`]
pub fn render(phone: Option<PhoneTag>, users: &[UserTag]) -> String {
	Renderer::default().render(phone, users)
}
