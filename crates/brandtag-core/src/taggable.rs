//! The `Taggable` capability

use crate::render::Renderer;
use crate::tags::{PhoneTag, UserTag};

/// Marker capability for types that carry tags
///
/// Implementors only expose their tag data; the description is built by the
/// shared [`Renderer`], so no implementor formats its own output.
pub trait Taggable {
	/// Name of the tagged type (e.g. `"AppleUser"`)
	fn type_name(&self) -> &'static str;

	/// The phone tag attached to the type, if any
	fn phone_tag(&self) -> Option<PhoneTag>;

	/// The user tags attached to the type, in declaration order
	fn user_tags(&self) -> &[UserTag];

	/// Render this value with the default renderer
	fn describe(&self) -> String {
		self.describe_with(&Renderer::default())
	}

	/// Render this value with a caller-supplied renderer
	fn describe_with(&self, renderer: &Renderer) -> String {
		renderer.render(self.phone_tag(), self.user_tags())
	}
}
