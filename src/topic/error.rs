//! Result codes and shared constants for the topic module
//!
//! The validators and the matcher all report through [`ErrorKind`], the
//! mosquitto-compatible result taxonomy. The full set of codes is kept for
//! forward compatibility even though only [`ErrorKind::Success`] and
//! [`ErrorKind::Invalid`] are produced by this crate.

use thiserror::Error;

/// Result code for topic validation and matching operations
///
/// Mirrors the `mosq_err_t` codes of libmosquitto, including their numeric
/// discriminants, so results can be compared with or forwarded to code that
/// speaks that taxonomy. Only `Success` and `Invalid` are reachable from
/// the functions in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
	/// Operation completed successfully
	#[error("no error")]
	Success = 0,

	/// Out of memory
	#[error("out of memory")]
	OutOfMemory = 1,

	/// A network protocol error occurred
	#[error("a network protocol error occurred")]
	ProtocolError = 2,

	/// Invalid input provided, e.g. a misplaced wildcard or an oversize
	/// topic string
	#[error("invalid input provided")]
	Invalid = 3,

	/// The client is not currently connected
	#[error("not currently connected")]
	NoConnection = 4,

	/// The connection was refused
	#[error("the connection was refused")]
	ConnectionRefused = 5,

	/// Message not found
	#[error("message not found")]
	NotFound = 6,

	/// The connection was lost
	#[error("the connection was lost")]
	ConnectionLost = 7,

	/// A TLS error occurred
	#[error("a TLS error occurred")]
	TlsError = 8,

	/// Payload too large
	#[error("payload too large")]
	PayloadTooLarge = 9,

	/// This feature is not supported
	#[error("this feature is not supported")]
	NotSupported = 10,

	/// Authentication failed
	#[error("authentication failed")]
	AuthFailed = 11,

	/// Access denied by ACL
	#[error("access denied by ACL")]
	AclDenied = 12,

	/// Unknown error
	#[error("unknown error")]
	Unknown = 13,
}

impl ErrorKind {
	/// Returns true if this code reports success.
	pub fn is_success(self) -> bool {
		self == ErrorKind::Success
	}

	/// Returns the numeric result code.
	pub fn code(self) -> u8 {
		self as u8
	}
}

impl From<ErrorKind> for u8 {
	fn from(kind: ErrorKind) -> Self {
		kind.code()
	}
}

/// Violation of the topic naming best-practice rules
///
/// Produced only by [`style_check`](crate::style_check). Independent of
/// [`ErrorKind`]: a topic can be protocol-legal yet fail style, and vice
/// versa.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleViolation {
	/// No violation found
	#[error("no style violation")]
	None,

	/// Topic is the empty string
	#[error("topic is empty")]
	Empty,

	/// Topic starts with `/`, creating a needless empty root level
	#[error("topic has a leading slash")]
	LeadingSlash,

	/// Topic contains a literal space character
	#[error("topic contains a space")]
	ContainsSpace,

	/// Topic contains a character outside the ASCII range
	#[error("topic contains a non-ASCII character")]
	NonAscii,
}

/// Topic processing limits and constants
pub mod limits {
	/// Maximum length in bytes of a topic name or subscription filter,
	/// imposed by the u16 length prefix of UTF-8 strings on the wire
	/// ([MQTT-4.7.3-3]).
	pub const MAX_TOPIC_LENGTH: usize = 65535;
}
