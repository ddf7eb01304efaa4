use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;

use crate::{TypeHandle, TypeValue};

/// One lazily filled value.
///
/// `gate` serializes computation so racing first readers wait for the winner
/// instead of computing their own value.
struct Slot<V> {
	value: OnceLock<V>,
	gate: Mutex<()>,
}

impl<V> Default for Slot<V> {
	fn default() -> Self {
		Self {
			value: OnceLock::new(),
			gate: Mutex::new(()),
		}
	}
}

/// Memoizing strategy: computes each type's value at most once.
///
/// Failed computations are not stored, so the next access retries. Entries live
/// until [`evict`](TypeValue::evict)ed; Rust types are never unloaded, so there is
/// nothing to associate them with weakly.
///
/// The computation must not read its own handle from the same cache; the
/// nested call would wait on the slot gate forever.
pub struct MemoizedCache<V, F> {
	slots: RwLock<FxHashMap<TypeHandle, Arc<Slot<V>>>>,
	compute: F,
}

impl<V, F> MemoizedCache<V, F> {
	pub fn new(compute: F) -> Self {
		Self {
			slots: RwLock::new(FxHashMap::default()),
			compute,
		}
	}

	fn slot(&self, handle: TypeHandle) -> Arc<Slot<V>> {
		if let Some(slot) = self.slots.read().get(&handle) {
			return Arc::clone(slot);
		}
		Arc::clone(self.slots.write().entry(handle).or_default())
	}
}

impl<V, E, F> TypeValue<V, E> for MemoizedCache<V, F>
where
	V: Clone + Send + Sync,
	F: Fn(TypeHandle) -> Result<V, E> + Send + Sync,
{
	fn get(&self, handle: TypeHandle) -> Result<V, E> {
		let slot = self.slot(handle);
		if let Some(value) = slot.value.get() {
			return Ok(value.clone());
		}

		let _gate = slot.gate.lock();
		if let Some(value) = slot.value.get() {
			return Ok(value.clone());
		}
		tracing::trace!(type_name = handle.name(), strategy = "memoized", "type_cache.compute");
		let value = (self.compute)(handle)?;
		Ok(slot.value.get_or_init(|| value).clone())
	}

	fn evict(&self, handle: TypeHandle) {
		if self.slots.write().remove(&handle).is_some() {
			tracing::trace!(type_name = handle.name(), "type_cache.evict");
		}
	}

	fn resolved(&self) -> usize {
		self.slots.read().values().filter(|slot| slot.value.get().is_some()).count()
	}
}
