//! Validation of publish topics and subscription filters
//!
//! Linear scans enforcing the wildcard and size rules of MQTT v5.0 §4.7.
//! Both checks report through [`ErrorKind`] rather than `Result`;
//! see the module docs in [`crate::topic::error`].

use super::error::{limits, ErrorKind};

/// Returns true if the string contains a `+` or `#` wildcard character.
pub fn has_wildcards(s: impl AsRef<str>) -> bool {
	s.as_ref().contains(['+', '#'])
}

/// Checks that a topic used for publishing is valid.
///
/// Publish topics must be concrete: any `+` or `#` anywhere in the string
/// is rejected, as is a string longer than
/// [`limits::MAX_TOPIC_LENGTH`] bytes.
///
/// ```rust
/// use mqtt_topic_tools::{publish_topic_check, ErrorKind};
///
/// assert_eq!(publish_topic_check("sensors/kitchen"), ErrorKind::Success);
/// assert_eq!(publish_topic_check("sensors/#"), ErrorKind::Invalid);
/// ```
pub fn publish_topic_check(topic: &str) -> ErrorKind {
	if has_wildcards(topic) {
		return ErrorKind::Invalid;
	}

	if topic.len() > limits::MAX_TOPIC_LENGTH {
		return ErrorKind::Invalid;
	}

	ErrorKind::Success
}

/// Checks that a subscription filter is valid.
///
/// Wildcards must occupy whole levels: `+` needs a `/` (or the string
/// boundary) on both sides, and `#` must be the final character, preceded
/// by `/` unless it is also the first. The filters `+` and `#` on their
/// own are valid; `foo/#/bar`, `foo/+bar` and `foo/bar#` are not.
///
/// The scan runs left to right and reports the first violation found. The
/// [`limits::MAX_TOPIC_LENGTH`] check runs after the scan, so an oversize
/// filter with a misplaced wildcard reports the wildcard violation.
pub fn subscription_filter_check(filter: &str) -> ErrorKind {
	// Wildcards are ASCII, so the scan can run over raw bytes with
	// index arithmetic for the neighbor checks.
	let bytes = filter.as_bytes();
	let len = bytes.len();

	for i in 0 .. len {
		match bytes[i] {
			| b'+' => {
				if (i > 0 && bytes[i - 1] != b'/')
					|| (i + 1 < len && bytes[i + 1] != b'/')
				{
					tracing::trace!(
						filter,
						position = i,
						"'+' wildcard does not occupy a whole level"
					);
					return ErrorKind::Invalid;
				}
			}
			| b'#' => {
				if (i > 0 && bytes[i - 1] != b'/') || i + 1 != len {
					tracing::trace!(
						filter,
						position = i,
						"'#' wildcard is not the final level"
					);
					return ErrorKind::Invalid;
				}
			}
			| _ => {}
		}
	}

	if len > limits::MAX_TOPIC_LENGTH {
		return ErrorKind::Invalid;
	}

	ErrorKind::Success
}
