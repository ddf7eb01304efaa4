use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a concrete Rust type, usable as a cache key.
///
/// Equality and hashing only consider the [`TypeId`]. The name is the fully
/// qualified type path and is what gets written when a handle is persisted.
#[derive(Clone, Copy)]
pub struct TypeHandle {
	id: TypeId,
	name: &'static str,
}

impl TypeHandle {
	/// Returns the handle for `T`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: type_name::<T>(),
		}
	}

	#[inline]
	pub fn id(self) -> TypeId {
		self.id
	}

	/// Fully qualified type path, e.g. `my_crate::units::Meters`.
	#[inline]
	pub fn name(self) -> &'static str {
		self.name
	}

	/// Returns true if this handle identifies `T`.
	#[inline]
	pub fn is<T: ?Sized + 'static>(self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for TypeHandle {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypeHandle({})", self.name)
	}
}

impl fmt::Display for TypeHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
