//! Serde field adapter writing a proxy in place of a canonical instance.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Measurement {
//!     value: f64,
//!     #[serde(with = "canon_singleton::by_proxy")]
//!     unit: &'static Meters,
//! }
//! ```
//!
//! Serializing fails unless the field's type is registered under its own
//! name, so a stream that could not be read back is never written.
//! Deserialization resolves through
//! [`SingletonResolver::global`](crate::SingletonResolver::global), so the
//! field points at the canonical instance again.

use std::any::Any;

use canon_type_cache::TypeHandle;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ResolveError, SingletonProxy, registry};

pub fn serialize<T, S>(_value: &&'static T, serializer: S) -> Result<S::Ok, S::Error>
where
	T: Any,
	S: Serializer,
{
	let handle = TypeHandle::of::<T>();
	if registry::find(handle.name()) != Some(handle) {
		return Err(<S::Error as serde::ser::Error>::custom(ResolveError::UnknownType {
			name: handle.name().to_string(),
		}));
	}
	SingletonProxy::new(handle).serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<&'static T, D::Error>
where
	T: Any + Send + Sync,
	D: Deserializer<'de>,
{
	let proxy = SingletonProxy::deserialize(deserializer)?;
	proxy.resolve_as::<T>().map_err(D::Error::custom)
}
