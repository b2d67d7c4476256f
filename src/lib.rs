//! # brandtag
//!
//! Tags attached at declaration time to a fixed set of phone user types,
//! discovered and printed at startup.
//!
//! ## Overview
//!
//! Each phone user type carries a repeatable user tag and at most one phone
//! brand tag. The registry lists every type, including the abstract base they
//! share; discovery drops the abstract base, builds every other type with its
//! zero-argument constructor and renders one line per instance:
//!
//! ```text
//! Iphone_X=[@User(name=乔布斯)@User(name=库克)]
//! Huawei_P20=[@User(name=任正非)@User(name=孟晚舟)]
//! Xiaomi_9=[@User(name=雷军)@User(name=林斌)]
//! OtherPhone=[@User(name=张三)@User(name=air)]
//! ```
//!
//! ## Crates
//!
//! - `brandtag-core`: tags, [`Taggable`], [`Renderer`], [`TagError`]
//! - `brandtag-registry`: descriptors, [`PhoneUser`], [`TaggedTypeRegistry`],
//!   validation and discovery
//! - `brandtag-conf`: [`Settings`]
//!
//! ## Quick Start
//!
//! ```rust
//! use brandtag::{Renderer, TaggedTypeRegistry, print_tagged_types};
//!
//! let mut out = Vec::new();
//! print_tagged_types(&TaggedTypeRegistry::builtin(), &Renderer::default(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
//! ```

pub mod cli;
pub mod logging;

pub use brandtag_conf::{ConfError, Settings};
pub use brandtag_core::{
	ABSENT_CATEGORY, PhoneBrand, PhoneTag, Renderer, TagError, TagResult, Taggable, UserTag,
	render,
};
pub use brandtag_registry::{
	PhoneUser, TaggedTypeRegistry, TypeDescriptor, ValidationError, describe_all, discover,
	instantiate, instantiate_all, scan, validate_registry,
};

use anyhow::Context as _;
use std::io::Write;

/// Discover every concrete tagged type and write one rendered line per
/// instance to `out`
pub fn print_tagged_types(
	registry: &TaggedTypeRegistry,
	renderer: &Renderer,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let lines = describe_all(registry, renderer).context("Failed to describe tagged types")?;
	for line in &lines {
		writeln!(out, "{line}").context("Failed to write output")?;
	}
	out.flush().context("Failed to flush output")?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_print_tagged_types_one_line_per_type() {
		// Arrange
		let mut out = Vec::new();

		// Act
		print_tagged_types(&TaggedTypeRegistry::builtin(), &Renderer::default(), &mut out)
			.unwrap();

		// Assert
		let text = String::from_utf8(out).unwrap();
		assert_eq!(
			text,
			"Iphone_X=[@User(name=乔布斯)@User(name=库克)]\n\
			 Huawei_P20=[@User(name=任正非)@User(name=孟晚舟)]\n\
			 Xiaomi_9=[@User(name=雷军)@User(name=林斌)]\n\
			 OtherPhone=[@User(name=张三)@User(name=air)]\n"
		);
	}

	#[rstest]
	fn test_print_tagged_types_writes_nothing_on_failure() {
		// Arrange
		let registry = TaggedTypeRegistry::from_descriptors([
			&brandtag_registry::APPLE_USER,
			&brandtag_registry::APPLE_USER,
		]);
		let mut out = Vec::new();

		// Act
		let result = print_tagged_types(&registry, &Renderer::default(), &mut out);

		// Assert
		let err = result.unwrap_err();
		assert!(matches!(
			err.downcast_ref::<TagError>(),
			Some(TagError::Introspection(_))
		));
		assert!(out.is_empty());
	}
}
