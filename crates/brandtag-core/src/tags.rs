//! Tag definitions
//!
//! Two tags exist. [`UserTag`] names a user and may be attached to the same
//! type any number of times, keeping declaration order. [`PhoneTag`] classifies
//! a type by [`PhoneBrand`] and is attached at most once.

use crate::exception::TagError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phone brand carried by a [`PhoneTag`]
///
/// The display name of each brand is the exact string printed by the
/// renderer, and is also its serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PhoneBrand {
	#[serde(rename = "Iphone_X")]
	IphoneX,
	#[serde(rename = "Huawei_P20")]
	HuaweiP20,
	#[serde(rename = "Xiaomi_9")]
	Xiaomi9,
	#[default]
	OtherPhone,
}

impl PhoneBrand {
	/// Every brand, in declaration order
	pub const ALL: [PhoneBrand; 4] = [
		PhoneBrand::IphoneX,
		PhoneBrand::HuaweiP20,
		PhoneBrand::Xiaomi9,
		PhoneBrand::OtherPhone,
	];

	/// Display name of the brand
	///
	/// # Examples
	///
	/// ```rust
	/// use brandtag_core::PhoneBrand;
	///
	/// assert_eq!(PhoneBrand::IphoneX.as_str(), "Iphone_X");
	/// assert_eq!(PhoneBrand::default().as_str(), "OtherPhone");
	/// ```
	pub const fn as_str(self) -> &'static str {
		match self {
			PhoneBrand::IphoneX => "Iphone_X",
			PhoneBrand::HuaweiP20 => "Huawei_P20",
			PhoneBrand::Xiaomi9 => "Xiaomi_9",
			PhoneBrand::OtherPhone => "OtherPhone",
		}
	}
}

impl fmt::Display for PhoneBrand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PhoneBrand {
	type Err = TagError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		PhoneBrand::ALL
			.into_iter()
			.find(|brand| brand.as_str() == s)
			.ok_or_else(|| TagError::UnknownBrand(s.to_string()))
	}
}

/// Repeatable user tag
///
/// A tag declared without a name falls back to [`UserTag::DEFAULT_NAME`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserTag {
	name: &'static str,
}

impl UserTag {
	/// Name used when a tag is declared without one
	pub const DEFAULT_NAME: &'static str = "air";

	/// Create a tag with an explicit name
	pub const fn new(name: &'static str) -> Self {
		Self { name }
	}

	/// Create a tag that keeps the default name
	pub const fn unnamed() -> Self {
		Self::new(Self::DEFAULT_NAME)
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}
}

impl Default for UserTag {
	fn default() -> Self {
		Self::unnamed()
	}
}

impl fmt::Display for UserTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "@User(name={})", self.name)
	}
}

/// Single-valued category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhoneTag {
	brand: PhoneBrand,
}

impl PhoneTag {
	pub const fn new(brand: PhoneBrand) -> Self {
		Self { brand }
	}

	/// Create a tag that keeps the default brand ([`PhoneBrand::OtherPhone`])
	pub const fn unspecified() -> Self {
		Self::new(PhoneBrand::OtherPhone)
	}

	pub const fn brand(&self) -> PhoneBrand {
		self.brand
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(PhoneBrand::IphoneX, "Iphone_X")]
	#[case(PhoneBrand::HuaweiP20, "Huawei_P20")]
	#[case(PhoneBrand::Xiaomi9, "Xiaomi_9")]
	#[case(PhoneBrand::OtherPhone, "OtherPhone")]
	fn test_brand_display_and_parse(#[case] brand: PhoneBrand, #[case] name: &str) {
		// Act
		let displayed = brand.to_string();
		let parsed: PhoneBrand = name.parse().unwrap();

		// Assert
		assert_eq!(displayed, name);
		assert_eq!(parsed, brand);
	}

	#[rstest]
	#[case(PhoneBrand::IphoneX, "\"Iphone_X\"")]
	#[case(PhoneBrand::HuaweiP20, "\"Huawei_P20\"")]
	#[case(PhoneBrand::Xiaomi9, "\"Xiaomi_9\"")]
	#[case(PhoneBrand::OtherPhone, "\"OtherPhone\"")]
	fn test_brand_serde_uses_display_name(#[case] brand: PhoneBrand, #[case] json: &str) {
		// Act
		let serialized = serde_json::to_string(&brand).unwrap();
		let deserialized: PhoneBrand = serde_json::from_str(json).unwrap();

		// Assert
		assert_eq!(serialized, json);
		assert_eq!(deserialized, brand);
		assert_eq!(serialized.trim_matches('"'), brand.as_str());
	}

	#[rstest]
	#[case("\"Nokia_3310\"")]
	#[case("\"IphoneX\"")]
	fn test_brand_serde_rejects_unknown_name(#[case] json: &str) {
		// Act
		let result = serde_json::from_str::<PhoneBrand>(json);

		// Assert
		assert!(result.is_err());
	}

	#[rstest]
	fn test_unknown_brand_is_rejected() {
		// Act
		let result = "Nokia_3310".parse::<PhoneBrand>();

		// Assert
		assert_eq!(result, Err(TagError::UnknownBrand("Nokia_3310".to_string())));
	}

	#[rstest]
	fn test_defaults() {
		// Assert
		assert_eq!(PhoneBrand::default(), PhoneBrand::OtherPhone);
		assert_eq!(PhoneTag::default(), PhoneTag::unspecified());
		assert_eq!(PhoneTag::unspecified().brand(), PhoneBrand::OtherPhone);
		assert_eq!(UserTag::default().name(), "air");
		assert_eq!(UserTag::unnamed(), UserTag::new(UserTag::DEFAULT_NAME));
	}

	#[rstest]
	fn test_user_tag_display() {
		// Arrange
		let tag = UserTag::new("库克");

		// Act & Assert
		assert_eq!(tag.to_string(), "@User(name=库克)");
		assert_eq!(UserTag::unnamed().to_string(), "@User(name=air)");
	}
}
