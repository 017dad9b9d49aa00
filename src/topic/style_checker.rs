//! Best-practice style rules for topic names
//!
//! Stricter than protocol legality, after the HiveMQ topic naming
//! recommendations
//! (<https://www.hivemq.com/blog/mqtt-essentials-part-5-mqtt-topics-best-practices/>):
//! no empty topics, no leading slash, no spaces, ASCII only.

use super::error::StyleViolation;

/// Checks a topic against the best-practice naming rules.
///
/// Checks run in a fixed order and the first violation found is returned:
/// [`Empty`](StyleViolation::Empty),
/// [`LeadingSlash`](StyleViolation::LeadingSlash),
/// [`ContainsSpace`](StyleViolation::ContainsSpace),
/// [`NonAscii`](StyleViolation::NonAscii).
///
/// Style is independent of protocol legality: `"+"` would pass this scan
/// but is illegal to publish. Run
/// [`publish_topic_check`](crate::publish_topic_check) first.
///
/// ```rust
/// use mqtt_topic_tools::{style_check, StyleViolation};
///
/// assert_eq!(style_check("home/kitchen/temp"), StyleViolation::None);
/// assert_eq!(style_check("home 1/temp"), StyleViolation::ContainsSpace);
/// ```
pub fn style_check(topic: &str) -> StyleViolation {
	if topic.is_empty() {
		return StyleViolation::Empty;
	}

	if topic.starts_with('/') {
		return StyleViolation::LeadingSlash;
	}

	if topic.contains(' ') {
		return StyleViolation::ContainsSpace;
	}

	if !topic.is_ascii() {
		return StyleViolation::NonAscii;
	}

	StyleViolation::None
}
