//! Scoped privilege for canonical-instance reads.
//!
//! Accessors guarding their instance behind an access policy check
//! [`is_privileged`] (or call [`require_privilege`]). The resolver always reads
//! fields inside [`with_privilege`], so whoever triggers a resolution never
//! needs to hold the privilege themselves.
//!
//! Elevation is per thread and nests. It is released when the guard drops,
//! including during unwinding.

use std::cell::Cell;
use std::marker::PhantomData;

use crate::FieldError;

#[cfg(test)]
mod tests;

thread_local! {
	static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Keeps the current thread elevated while alive.
#[must_use = "privilege is released when the guard drops"]
pub struct PrivilegeGuard {
	_thread_bound: PhantomData<*const ()>,
}

impl PrivilegeGuard {
	pub fn enter() -> Self {
		DEPTH.with(|depth| depth.set(depth.get() + 1));
		Self { _thread_bound: PhantomData }
	}
}

impl Drop for PrivilegeGuard {
	fn drop(&mut self) {
		DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
	}
}

/// Runs `f` with the current thread elevated.
pub fn with_privilege<R>(f: impl FnOnce() -> R) -> R {
	let _guard = PrivilegeGuard::enter();
	f()
}

pub fn is_privileged() -> bool {
	DEPTH.with(|depth| depth.get() > 0)
}

/// Fails with [`FieldError::Denied`] unless the current thread is elevated.
pub fn require_privilege() -> Result<(), FieldError> {
	if is_privileged() { Ok(()) } else { Err(FieldError::denied("caller holds no privilege")) }
}
