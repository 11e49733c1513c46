pub mod error;

pub mod charset;
pub mod decode;
pub mod normalize;
pub mod tag;
pub mod audit;
pub mod profile;

pub use crate::charset::DisallowedSet;
pub use crate::decode::InvalidUtf8;
pub use crate::normalize::{normalize_instance_tag, normalize_tag, normalize_tag_legacy, Normalizer};
pub use crate::profile::RuleProfile;
pub use crate::tag::Tag;
