use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Errors surfaced while resolving a singleton proxy.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
	/// A persisted type name does not match any registered type.
	#[error("unknown singleton type: {name}")]
	UnknownType { name: String },

	/// The type has no registered canonical-instance accessor.
	#[error("type {type_name} does not expose a canonical instance")]
	MissingSingletonField { type_name: &'static str },

	/// The accessor refused the read even from a privileged context.
	#[error("access to the canonical instance of {type_name} denied: {reason}")]
	FieldAccessDenied { type_name: &'static str, reason: String },

	/// The accessor failed; `source` is the original cause.
	#[error("reading the canonical instance of {type_name} failed: {source}")]
	PrivilegeEscalationFailed {
		type_name: &'static str,
		source: Arc<dyn StdError + Send + Sync>,
	},

	/// The resolved instance is not of the requested type.
	#[error("canonical instance of {found} requested as {expected}")]
	TypeMismatch { expected: &'static str, found: &'static str },
}

/// Result type for singleton resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Failure reported by a canonical-instance accessor.
#[derive(Debug, Error)]
pub enum FieldError {
	/// The accessor's access policy refused the read.
	#[error("access denied: {0}")]
	Denied(String),
	/// Any other failure.
	#[error("{0}")]
	Failed(Box<dyn StdError + Send + Sync>),
}

impl FieldError {
	pub fn denied(reason: impl Into<String>) -> Self {
		Self::Denied(reason.into())
	}

	pub fn failed(cause: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
		Self::Failed(cause.into())
	}

	/// Translates an accessor failure for the type named `type_name`.
	///
	/// A cause that already is a [`ResolveError`] is returned as-is rather than
	/// wrapped a second time.
	pub(crate) fn into_resolve_error(self, type_name: &'static str) -> ResolveError {
		match self {
			Self::Denied(reason) => ResolveError::FieldAccessDenied { type_name, reason },
			Self::Failed(cause) => match cause.downcast::<ResolveError>() {
				Ok(err) => *err,
				Err(cause) => ResolveError::PrivilegeEscalationFailed {
					type_name,
					source: Arc::from(cause),
				},
			},
		}
	}
}

impl From<ResolveError> for FieldError {
	fn from(err: ResolveError) -> Self {
		Self::Failed(Box::new(err))
	}
}
