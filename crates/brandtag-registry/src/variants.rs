//! The fixed set of tagged phone user types

use crate::descriptor::TypeDescriptor;
use brandtag_core::{PhoneBrand, PhoneTag, Taggable, UserTag};
use std::fmt;

const APPLE_USERS: &[UserTag] = &[UserTag::new("乔布斯"), UserTag::new("库克")];
const HUAWEI_USERS: &[UserTag] = &[UserTag::new("任正非"), UserTag::new("孟晚舟")];
const XIAOMI_USERS: &[UserTag] = &[UserTag::new("雷军"), UserTag::new("林斌")];
const OTHER_USERS: &[UserTag] = &[UserTag::new("张三"), UserTag::unnamed()];

/// Shared base of every phone user type; never instantiated
pub static ABSTRACT_PHONE_USER: TypeDescriptor =
	TypeDescriptor::abstract_base("AbstractPhoneUser");

pub static APPLE_USER: TypeDescriptor = TypeDescriptor::concrete(
	"AppleUser",
	Some(PhoneTag::new(PhoneBrand::IphoneX)),
	APPLE_USERS,
	|| PhoneUser::Apple,
);

pub static HUAWEI_USER: TypeDescriptor = TypeDescriptor::concrete(
	"HuaweiUser",
	Some(PhoneTag::new(PhoneBrand::HuaweiP20)),
	HUAWEI_USERS,
	|| PhoneUser::Huawei,
);

pub static XIAOMI_USER: TypeDescriptor = TypeDescriptor::concrete(
	"XiaomiUser",
	Some(PhoneTag::new(PhoneBrand::Xiaomi9)),
	XIAOMI_USERS,
	|| PhoneUser::Xiaomi,
);

/// Uses every default: an unspecified phone tag and one unnamed user tag
pub static OTHER_USER: TypeDescriptor = TypeDescriptor::concrete(
	"OtherUser",
	Some(PhoneTag::unspecified()),
	OTHER_USERS,
	|| PhoneUser::Other,
);

/// A constructed phone user
///
/// Each variant reads its tags from its own static descriptor, so the tag data
/// of a type is declared exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneUser {
	Apple,
	Huawei,
	Xiaomi,
	Other,
}

impl PhoneUser {
	pub fn descriptor(&self) -> &'static TypeDescriptor {
		match self {
			PhoneUser::Apple => &APPLE_USER,
			PhoneUser::Huawei => &HUAWEI_USER,
			PhoneUser::Xiaomi => &XIAOMI_USER,
			PhoneUser::Other => &OTHER_USER,
		}
	}
}

impl Taggable for PhoneUser {
	fn type_name(&self) -> &'static str {
		self.descriptor().type_name
	}

	fn phone_tag(&self) -> Option<PhoneTag> {
		self.descriptor().phone
	}

	fn user_tags(&self) -> &[UserTag] {
		self.descriptor().users
	}
}

impl fmt::Display for PhoneUser {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe())
	}
}
