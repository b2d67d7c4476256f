//! # brandtag core
//!
//! Tag data model shared by every brandtag crate.
//!
//! ## Overview
//!
//! Types opt into tagging through the [`Taggable`] capability. A taggable type
//! carries zero or more repeatable [`UserTag`]s and at most one [`PhoneTag`].
//! Tags are `'static` constants, so reading them never fails and never
//! allocates; only [`render`] builds a string.
//!
//! ## Modules
//!
//! - [`tags`]: [`UserTag`], [`PhoneTag`] and [`PhoneBrand`]
//! - [`taggable`]: the [`Taggable`] capability
//! - [`render`]: the [`Renderer`] shared by every taggable type
//! - [`exception`]: [`TagError`] and [`TagResult`]
//!
//! ## Quick Start
//!
//! ```rust
//! use brandtag_core::{PhoneBrand, PhoneTag, UserTag, render};
//!
//! const USERS: &[UserTag] = &[UserTag::new("乔布斯"), UserTag::new("库克")];
//!
//! let line = render(Some(PhoneTag::new(PhoneBrand::IphoneX)), USERS);
//! assert_eq!(line, "Iphone_X=[@User(name=乔布斯)@User(name=库克)]");
//! ```

pub mod exception;
pub mod render;
pub mod taggable;
pub mod tags;

pub use exception::{TagError, TagResult};
pub use render::{ABSENT_CATEGORY, Renderer, render};
pub use taggable::Taggable;
pub use tags::{PhoneBrand, PhoneTag, UserTag};
