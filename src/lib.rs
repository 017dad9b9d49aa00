//! # MQTT Topic Tools
//!
//! Validation and matching for MQTT topic names and subscription filters,
//! implementing the topic semantics of
//! [MQTT v5.0 §4.7](https://docs.oasis-open.org/mqtt/mqtt/v5.0/os/mqtt-v5.0-os.html#_Toc3901241).
//!
//! ## Features
//!
//! - **Publish topic validation**: reject wildcards and oversize topics
//! - **Subscription filter validation**: enforce `+`/`#` placement rules
//! - **Topic matching**: match concrete topics against wildcard filters,
//!   including the `$`-prefix isolation rule for system topics
//! - **Style checking**: an optional, stricter naming convention check
//!
//! All operations are pure functions over `&str` inputs; results are
//! reported through the [`ErrorKind`] and [`StyleViolation`] enumerations
//! rather than `Result`, because callers are expected to branch on the
//! code (a rejected publish is a protocol outcome, not a fault).
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_tools::{
//!     publish_topic_check, style_check, subscription_filter_check,
//!     topic_matches, ErrorKind, StyleViolation,
//! };
//!
//! // Publish topics must not contain wildcards
//! assert_eq!(publish_topic_check("sensors/kitchen/temp"), ErrorKind::Success);
//! assert_eq!(publish_topic_check("sensors/#"), ErrorKind::Invalid);
//!
//! // Subscription filters may, in the right positions
//! assert_eq!(subscription_filter_check("sensors/+/temp"), ErrorKind::Success);
//! assert_eq!(subscription_filter_check("sensors/#/temp"), ErrorKind::Invalid);
//!
//! // Matching follows MQTT v5 semantics
//! assert!(topic_matches("sensors/#", "sensors/kitchen/temp"));
//! assert!(topic_matches("sensors/#", "sensors"));
//! assert!(!topic_matches("#", "$SYS/broker/uptime"));
//!
//! // Style rules are independent of protocol legality
//! assert_eq!(style_check("sensors/kitchen"), StyleViolation::None);
//! assert_eq!(style_check("/sensors"), StyleViolation::LeadingSlash);
//! ```
//!
//! ## Wildcard Semantics
//!
//! - `+` matches exactly one topic level (e.g. `sensors/+/temp`)
//! - `#` matches zero or more trailing levels (e.g. `sensors/#`), and is
//!   only legal as a filter's final level
//! - A filter `foo/#` also matches the bare parent topic `foo`
//! - Topics starting with `$` (e.g. `$SYS/...`) never match filters that
//!   do not, and vice versa

#![warn(missing_docs)]

pub mod topic;

pub use topic::style_checker::style_check;
pub use topic::topic_matcher::{topic_matches, topic_matches_filter};
pub use topic::topic_validator::{
	has_wildcards, publish_topic_check, subscription_filter_check,
};
pub use topic::{limits, ErrorKind, StyleViolation};

/// Commonly used types and functions
///
/// ```rust
/// use mqtt_topic_tools::prelude::*;
/// ```
pub mod prelude {
	pub use crate::topic::style_checker::style_check;
	pub use crate::topic::topic_matcher::{
		topic_matches, topic_matches_filter,
	};
	pub use crate::topic::topic_validator::{
		has_wildcards, publish_topic_check, subscription_filter_check,
	};
	pub use crate::topic::{ErrorKind, StyleViolation};
}
