use std::any::{Any, type_name};
use std::sync::OnceLock;

use canon_type_cache::{Strategy, StrategyChoice, TypeCache, TypeHandle};

use crate::{Instance, ResolveError, Result, SingletonProxy, privilege, registry};

/// Resolves proxies to canonical instances, caching per type.
#[derive(Debug)]
pub struct SingletonResolver {
	cache: TypeCache<Instance, ResolveError>,
}

impl Default for SingletonResolver {
	fn default() -> Self {
		Self::new()
	}
}

impl SingletonResolver {
	/// Creates a resolver using the process's probed strategy.
	pub fn new() -> Self {
		Self::with_choice(StrategyChoice::Auto)
	}

	pub fn with_strategy(strategy: Strategy) -> Self {
		Self::with_choice(StrategyChoice::Force(strategy))
	}

	pub fn with_choice(choice: StrategyChoice) -> Self {
		Self {
			cache: TypeCache::new(choice, read_canonical_field),
		}
	}

	/// Process-wide resolver used by [`SingletonProxy::resolve`] and
	/// [`by_proxy`](crate::by_proxy).
	pub fn global() -> &'static SingletonResolver {
		static GLOBAL: OnceLock<SingletonResolver> = OnceLock::new();
		GLOBAL.get_or_init(Self::new)
	}

	/// Returns the canonical instance of the proxy's type.
	pub fn resolve(&self, proxy: &SingletonProxy) -> Result<Instance> {
		self.cache.get(proxy.handle())
	}

	/// Returns the canonical instance of the proxy's type as a `T`.
	pub fn resolve_as<T: Any + Send + Sync>(&self, proxy: &SingletonProxy) -> Result<&'static T> {
		let instance = self.resolve(proxy)?;
		instance.downcast_ref::<T>().ok_or(ResolveError::TypeMismatch {
			expected: type_name::<T>(),
			found: proxy.handle().name(),
		})
	}

	/// Forgets the cached instance for `handle`; the next resolution reads the
	/// field again.
	pub fn evict(&self, handle: TypeHandle) {
		self.cache.evict(handle);
	}

	pub fn strategy(&self) -> Strategy {
		self.cache.strategy()
	}

	/// Number of types with a cached instance.
	pub fn cached(&self) -> usize {
		self.cache.len()
	}
}

/// Reads the registered canonical instance of `handle` from an elevated context.
fn read_canonical_field(handle: TypeHandle) -> Result<Instance> {
	let Some(read) = registry::definition(handle).and_then(|def| def.field) else {
		tracing::debug!(type_name = handle.name(), "singleton.field_missing");
		return Err(ResolveError::MissingSingletonField { type_name: handle.name() });
	};

	privilege::with_privilege(read).map_err(|err| {
		let err = err.into_resolve_error(handle.name());
		tracing::debug!(type_name = handle.name(), error = %err, "singleton.field_read_failed");
		err
	})
}
