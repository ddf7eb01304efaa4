//! Type-keyed lazy values.
//!
//! A [`TypeCache`] associates one value with each Rust type, computing it on
//! first access from a caller-supplied rule. Two strategies back it:
//!
//! - [`MemoizedCache`]: computes once per type, shares the result with every
//!   later and concurrent reader.
//! - [`RecomputeCache`]: computes on every access, stores nothing.
//!
//! The strategy is picked once per process by [`probe`] unless a caller forces
//! one through [`StrategyChoice`]. Callers never branch on it afterwards.

mod handle;
mod memoized;
mod recompute;
mod strategy;


pub use handle::TypeHandle;
pub use memoized::MemoizedCache;
pub use recompute::RecomputeCache;
pub use strategy::{Strategy, StrategyChoice, probe};

/// Lazily computed value per type.
pub trait TypeValue<V, E>: Send + Sync {
	/// Returns the value for `handle`, computing it if no value is stored.
	///
	/// A failed computation is returned to this caller and never stored.
	fn get(&self, handle: TypeHandle) -> Result<V, E>;

	/// Drops any stored value for `handle`. No-op if there is none.
	fn evict(&self, handle: TypeHandle);

	/// Number of types with a stored value.
	fn resolved(&self) -> usize {
		0
	}
}

/// Strategy-erased type cache.
pub struct TypeCache<V, E> {
	inner: Box<dyn TypeValue<V, E>>,
	strategy: Strategy,
}

impl<V, E> TypeCache<V, E>
where
	V: Clone + Send + Sync + 'static,
	E: 'static,
{
	/// Builds a cache around `compute` using the strategy picked by `choice`.
	pub fn new<F>(choice: StrategyChoice, compute: F) -> Self
	where
		F: Fn(TypeHandle) -> Result<V, E> + Send + Sync + 'static,
	{
		let strategy = choice.resolve();
		let inner: Box<dyn TypeValue<V, E>> = match strategy {
			Strategy::Memoized => Box::new(MemoizedCache::new(compute)),
			Strategy::Recompute => Box::new(RecomputeCache::new(compute)),
		};
		Self { inner, strategy }
	}
}

impl<V, E> TypeCache<V, E> {
	pub fn get(&self, handle: TypeHandle) -> Result<V, E> {
		self.inner.get(handle)
	}

	pub fn evict(&self, handle: TypeHandle) {
		self.inner.evict(handle);
	}

	pub fn strategy(&self) -> Strategy {
		self.strategy
	}

	/// Number of types with a stored value. Always zero when recomputing.
	pub fn len(&self) -> usize {
		self.inner.resolved()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<V, E> std::fmt::Debug for TypeCache<V, E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeCache")
			.field("strategy", &self.strategy)
			.field("len", &self.len())
			.finish()
	}
}
