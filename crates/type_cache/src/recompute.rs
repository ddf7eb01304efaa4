use crate::{TypeHandle, TypeValue};

/// Fallback strategy: runs the computation on every access.
///
/// Nothing is stored, so concurrent readers may each compute. Callers must be
/// fine with that; the computation has to be idempotent.
pub struct RecomputeCache<F> {
	compute: F,
}

impl<F> RecomputeCache<F> {
	pub fn new(compute: F) -> Self {
		Self { compute }
	}
}

impl<V, E, F> TypeValue<V, E> for RecomputeCache<F>
where
	F: Fn(TypeHandle) -> Result<V, E> + Send + Sync,
{
	fn get(&self, handle: TypeHandle) -> Result<V, E> {
		tracing::trace!(type_name = handle.name(), strategy = "recompute", "type_cache.compute");
		(self.compute)(handle)
	}

	fn evict(&self, _handle: TypeHandle) {}
}
