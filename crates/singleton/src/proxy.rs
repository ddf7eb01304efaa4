use std::any::Any;
use std::fmt;

use canon_type_cache::TypeHandle;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use crate::{Instance, ResolveError, Result, SingletonResolver, registry};

/// Stand-in written to a serialized stream in place of a canonical instance.
///
/// Holds only the type handle and serializes as the type's fully qualified
/// name. Reading it back needs the type to be registered; resolving it yields
/// the canonical instance rather than a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingletonProxy {
	handle: TypeHandle,
}

impl SingletonProxy {
	pub fn new(handle: TypeHandle) -> Self {
		Self { handle }
	}

	pub fn of<T: Any>() -> Self {
		Self::new(TypeHandle::of::<T>())
	}

	pub fn handle(&self) -> TypeHandle {
		self.handle
	}

	/// Resolves through [`SingletonResolver::global`].
	pub fn resolve(&self) -> Result<Instance> {
		SingletonResolver::global().resolve(self)
	}

	/// Resolves through [`SingletonResolver::global`] as a `T`.
	pub fn resolve_as<T: Any + Send + Sync>(&self) -> Result<&'static T> {
		SingletonResolver::global().resolve_as(self)
	}
}

impl Serialize for SingletonProxy {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(self.handle.name())
	}
}

impl<'de> Deserialize<'de> for SingletonProxy {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		deserializer.deserialize_str(ProxyVisitor)
	}
}

struct ProxyVisitor;

impl Visitor<'_> for ProxyVisitor {
	type Value = SingletonProxy;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a registered type name")
	}

	fn visit_str<E: de::Error>(self, name: &str) -> std::result::Result<Self::Value, E> {
		registry::find(name)
			.map(SingletonProxy::new)
			.ok_or_else(|| E::custom(ResolveError::UnknownType { name: name.to_string() }))
	}
}
