//! Tests for publish topic and subscription filter validation

use super::error::{limits, ErrorKind};
use super::topic_validator::{
	has_wildcards, publish_topic_check, subscription_filter_check,
};

// Helper to run a batch of cases against one validator
fn check_all(check: fn(&str) -> ErrorKind, cases: &[(&str, ErrorKind)]) {
	for (input, expected) in cases {
		assert_eq!(
			check(input),
			*expected,
			"input '{}' expected {:?}",
			input,
			expected
		);
	}
}

#[test]
fn test_publish_topic_accepts_concrete_topics() {
	check_all(publish_topic_check, &[
		("foo", ErrorKind::Success),
		("foo/bar", ErrorKind::Success),
		("foo/", ErrorKind::Success),
		("/foo/", ErrorKind::Success),
		("a//b", ErrorKind::Success),
		("/", ErrorKind::Success),
		("$SYS/broker/uptime", ErrorKind::Success),
		("with spaces/ärger", ErrorKind::Success),
	]);
}

#[test]
fn test_publish_topic_rejects_wildcards() {
	check_all(publish_topic_check, &[
		("foo/#", ErrorKind::Invalid),
		("/+/foo", ErrorKind::Invalid),
		("+", ErrorKind::Invalid),
		("#", ErrorKind::Invalid),
		("foo/bar#", ErrorKind::Invalid),
		("foo+bar", ErrorKind::Invalid),
	]);
}

#[test]
fn test_publish_topic_length_limit() {
	let max = "a".repeat(limits::MAX_TOPIC_LENGTH);
	assert_eq!(publish_topic_check(&max), ErrorKind::Success);

	let oversize = "a".repeat(limits::MAX_TOPIC_LENGTH + 1);
	assert_eq!(publish_topic_check(&oversize), ErrorKind::Invalid);
}

#[test]
fn test_publish_topic_accepts_empty_string() {
	// An empty topic is not rejected by this check; it carries no
	// wildcard and no excess length.
	assert_eq!(publish_topic_check(""), ErrorKind::Success);
}

#[test]
fn test_filter_accepts_whole_level_wildcards() {
	check_all(subscription_filter_check, &[
		("foo/#", ErrorKind::Success),
		("+/foo", ErrorKind::Success),
		("+", ErrorKind::Success),
		("#", ErrorKind::Success),
		("foo/+", ErrorKind::Success),
		("+/+/+", ErrorKind::Success),
		("foo/+/#", ErrorKind::Success),
		("/#", ErrorKind::Success),
		("foo/bar", ErrorKind::Success),
		("", ErrorKind::Success),
	]);
}

#[test]
fn test_filter_rejects_misplaced_wildcards() {
	check_all(subscription_filter_check, &[
		// '#' must be the final character
		("foo/#/bar", ErrorKind::Invalid),
		("#/foo", ErrorKind::Invalid),
		// '#' not preceded by '/'
		("foo/bar#", ErrorKind::Invalid),
		("foo#", ErrorKind::Invalid),
		// '+' must occupy a whole level
		("foo/+bar", ErrorKind::Invalid),
		("foo/bar+", ErrorKind::Invalid),
		("fo+o/bar", ErrorKind::Invalid),
		("++", ErrorKind::Invalid),
	]);
}

#[test]
fn test_filter_length_limit() {
	let max = "a".repeat(limits::MAX_TOPIC_LENGTH);
	assert_eq!(subscription_filter_check(&max), ErrorKind::Success);

	let oversize = "a".repeat(limits::MAX_TOPIC_LENGTH + 1);
	assert_eq!(subscription_filter_check(&oversize), ErrorKind::Invalid);

	// A wildcard violation is still found in an oversize filter; both
	// report Invalid.
	let oversize_bad = format!("{oversize}#");
	assert_eq!(subscription_filter_check(&oversize_bad), ErrorKind::Invalid);
}

#[test]
fn test_has_wildcards() {
	assert!(has_wildcards("foo/+"));
	assert!(has_wildcards("foo/#"));
	assert!(has_wildcards("fo#o"));
	assert!(!has_wildcards("foo/bar"));
	assert!(!has_wildcards(""));
}

#[test]
fn test_error_kind_codes() {
	assert_eq!(ErrorKind::Success.code(), 0);
	assert_eq!(ErrorKind::Invalid.code(), 3);
	assert_eq!(u8::from(ErrorKind::Unknown), 13);
	assert!(ErrorKind::Success.is_success());
	assert!(!ErrorKind::Invalid.is_success());
}
