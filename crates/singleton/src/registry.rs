//! Link-time registry of types resolvable from their persisted name.
//!
//! Types are registered with [`singleton!`](crate::singleton) (with a
//! canonical-instance accessor) or [`known_type!`](crate::known_type) (name
//! only). Registrations are collected through `inventory` and indexed on first
//! lookup.

use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use canon_type_cache::TypeHandle;
use rustc_hash::FxHashMap;

use crate::FieldError;


/// A resolved canonical instance.
pub type Instance = &'static (dyn Any + Send + Sync);

/// Reads a type's canonical instance.
pub type FieldReader = fn() -> Result<Instance, FieldError>;

/// A registered type.
pub struct SingletonDef {
	/// Handle of the registered type.
	pub handle: fn() -> TypeHandle,
	/// Canonical-instance accessor; `None` for name-only registrations.
	pub field: Option<FieldReader>,
	/// Crate the registration came from.
	pub krate: &'static str,
}

/// Registry wrapper for `inventory` collection.
pub struct SingletonReg(pub &'static SingletonDef);
inventory::collect!(SingletonReg);

#[derive(Default)]
struct Index {
	by_id: FxHashMap<TypeId, &'static SingletonDef>,
	by_name: FxHashMap<&'static str, TypeHandle>,
}

/// Outcome of indexing one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indexed {
	Added,
	/// Replaced a name-only registration of the same type.
	Replaced,
	/// The type already has an accessor; this registration was dropped.
	Ignored,
	/// Another type already owns the name. Reachable by handle, not by name.
	NameTaken,
}

impl Index {
	/// A registration carrying an accessor replaces a name-only one. Between
	/// two accessors, and between two types sharing one name, the first one
	/// indexed stays.
	fn insert(&mut self, def: &'static SingletonDef) -> Indexed {
		let handle = (def.handle)();
		match self.by_id.entry(handle.id()) {
			Entry::Vacant(slot) => {
				slot.insert(def);
			}
			Entry::Occupied(mut slot) => {
				let existing = *slot.get();
				if existing.field.is_none() {
					slot.insert(def);
					return Indexed::Replaced;
				}
				if def.field.is_some() {
					tracing::warn!(
						type_name = handle.name(),
						kept = existing.krate,
						ignored = def.krate,
						"duplicate canonical instance registration"
					);
				}
				return Indexed::Ignored;
			}
		}

		match self.by_name.entry(handle.name()) {
			Entry::Vacant(slot) => {
				slot.insert(handle);
				Indexed::Added
			}
			Entry::Occupied(_) => {
				tracing::warn!(
					type_name = handle.name(),
					ignored = def.krate,
					"type name already registered by another type"
				);
				Indexed::NameTaken
			}
		}
	}
}

static INDEX: LazyLock<Index> = LazyLock::new(|| {
	let mut index = Index::default();
	for reg in inventory::iter::<SingletonReg> {
		index.insert(reg.0);
	}
	tracing::debug!(count = index.by_id.len(), "singleton.registry.indexed");
	index
});

/// Looks up a registered type by its persisted name.
pub fn find(name: &str) -> Option<TypeHandle> {
	INDEX.by_name.get(name).copied()
}

/// Returns the registration for `handle`, if any.
pub fn definition(handle: TypeHandle) -> Option<&'static SingletonDef> {
	INDEX.by_id.get(&handle.id()).copied()
}

/// Returns all registered types, sorted by name.
pub fn all_registered() -> Vec<TypeHandle> {
	let mut handles: Vec<_> = INDEX.by_name.values().copied().collect();
	handles.sort_by_key(|h| h.name());
	handles
}
