//! Matching of concrete topics against subscription filters
//!
//! The matcher is a single two-pointer scan over the filter and the topic,
//! ported from libmosquitto's `mosquitto_topic_matches_sub`. Several
//! special cases interact inside the loop (the bare-parent `/#` rule, the
//! trailing-`+` empty-level rule, the defensive mid-string `#` failure),
//! so it is deliberately kept as one explicit state-walk rather than
//! decomposed into per-wildcard helpers.

use super::error::ErrorKind;

/// Decides whether a concrete topic matches a subscription filter.
///
/// Returns `(Invalid, false)` if either string is empty. Otherwise the
/// result code is always `Success` and the boolean carries the decision:
///
/// - `+` consumes exactly one topic level, `#` consumes all remaining
///   levels and must be the filter's last character;
/// - a filter ending in `/#` also matches its bare parent, so `foo/#`
///   matches the topic `foo`;
/// - a topic and a filter of which exactly one starts with `$` never
///   match, isolating system topics like `$SYS/...` from ordinary
///   filters ([MQTT-4.7.2-1]).
///
/// The filter is not validated here; a misplaced `#` simply never
/// matches. Run [`subscription_filter_check`] first to reject it
/// outright.
///
/// ```rust
/// use mqtt_topic_tools::{topic_matches_filter, ErrorKind};
///
/// assert_eq!(
///     topic_matches_filter("sensors/+/temp", "sensors/kitchen/temp"),
///     (ErrorKind::Success, true)
/// );
/// assert_eq!(
///     topic_matches_filter("#", "$SYS/broker/uptime"),
///     (ErrorKind::Success, false)
/// );
/// ```
///
/// [`subscription_filter_check`]: crate::subscription_filter_check
pub fn topic_matches_filter(filter: &str, topic: &str) -> (ErrorKind, bool) {
	if filter.is_empty() || topic.is_empty() {
		tracing::trace!(
			filter,
			topic,
			"cannot match an empty filter or topic"
		);
		return (ErrorKind::Invalid, false);
	}

	let sub = filter.as_bytes();
	let top = topic.as_bytes();

	// System topics only match filters that also start with '$'.
	if (sub[0] == b'$') != (top[0] == b'$') {
		return (ErrorKind::Success, false);
	}

	let slen = sub.len();
	let tlen = top.len();
	let mut spos = 0;
	let mut tpos = 0;

	while spos < slen && tpos < tlen {
		if sub[spos] == top[tpos] {
			if tpos == tlen - 1
				&& spos + 3 == slen
				&& sub[spos + 1] == b'/'
				&& sub[spos + 2] == b'#'
			{
				// The topic is exhausted and the rest of the filter
				// is "/#": a filter like "foo/#" matches the bare
				// parent topic "foo".
				return (ErrorKind::Success, true);
			}
			spos += 1;
			tpos += 1;
			if spos == slen && tpos == tlen {
				return (ErrorKind::Success, true);
			}
			if tpos == tlen && spos == slen - 1 && sub[spos] == b'+' {
				// A trailing lone '+' matches an empty final level,
				// e.g. filter "foo/+" and topic "foo/".
				return (ErrorKind::Success, true);
			}
		} else if sub[spos] == b'+' {
			// '+' consumes exactly one topic level: skip to the next
			// '/' in the topic, or to its end.
			spos += 1;
			while tpos < tlen && top[tpos] != b'/' {
				tpos += 1;
			}
			if tpos == tlen && spos == slen {
				return (ErrorKind::Success, true);
			}
		} else if sub[spos] == b'#' {
			// Only legal as the last character of the filter. A '#'
			// mid-string cannot appear in a validated filter, but an
			// unvalidated one must still fail safely.
			return (ErrorKind::Success, spos + 1 == slen);
		} else {
			return (ErrorKind::Success, false);
		}
	}

	// One side was exhausted with no wildcard left to absorb the rest.
	// The C original also tracks a multilevel-wildcard flag down here,
	// but every path that sets it has already returned, so the flag is
	// omitted.
	(ErrorKind::Success, false)
}

/// Boolean-only form of [`topic_matches_filter`].
///
/// Collapses the error channel: any non-`Success` outcome (i.e. an empty
/// filter or topic) is reported as no match.
///
/// ```rust
/// use mqtt_topic_tools::topic_matches;
///
/// assert!(topic_matches("sensors/#", "sensors/kitchen/temp"));
/// assert!(!topic_matches("", "sensors/kitchen/temp"));
/// ```
pub fn topic_matches(filter: &str, topic: &str) -> bool {
	let (kind, matched) = topic_matches_filter(filter, topic);
	kind.is_success() && matched
}
