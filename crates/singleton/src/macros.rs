/// Registers a type's canonical instance.
///
/// Either name a `static` holding the instance, or pass an accessor returning
/// `Result<&'static T, FieldError>` for instances that are installed later or
/// guarded by an access policy.
///
/// ```ignore
/// pub struct Meters { symbol: &'static str }
/// pub static METERS: Meters = Meters { symbol: "m" };
/// canon_singleton::singleton!(Meters, METERS);
///
/// pub struct Clock { epoch: u64 }
/// static CLOCK: OnceLock<Clock> = OnceLock::new();
/// fn clock() -> Result<&'static Clock, FieldError> {
///     CLOCK.get().ok_or_else(|| FieldError::failed("clock not installed"))
/// }
/// canon_singleton::singleton!(Clock, read = clock);
/// ```
#[macro_export]
macro_rules! singleton {
	($ty:ty, read = $read:path $(,)?) => {
		const _: () = {
			fn __read() -> ::core::result::Result<$crate::Instance, $crate::FieldError> {
				let instance: &'static $ty = $read()?;
				::core::result::Result::Ok(instance)
			}
			$crate::__register_type!($ty, ::core::option::Option::Some(__read));
		};
	};
	($ty:ty, $field:path $(,)?) => {
		const _: () = {
			fn __read() -> ::core::result::Result<$crate::Instance, $crate::FieldError> {
				let instance: &'static $ty = &$field;
				::core::result::Result::Ok(instance)
			}
			$crate::__register_type!($ty, ::core::option::Option::Some(__read));
		};
	};
}

/// Registers a type so proxies naming it can be read back, without giving it
/// a canonical instance. Resolving such a proxy fails with
/// [`ResolveError::MissingSingletonField`](crate::ResolveError::MissingSingletonField).
#[macro_export]
macro_rules! known_type {
	($ty:ty $(,)?) => {
		const _: () = {
			$crate::__register_type!($ty, ::core::option::Option::None);
		};
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __register_type {
	($ty:ty, $field:expr) => {
		fn __handle() -> $crate::TypeHandle {
			$crate::TypeHandle::of::<$ty>()
		}

		static __DEF: $crate::SingletonDef = $crate::SingletonDef {
			handle: __handle,
			field: $field,
			krate: env!("CARGO_PKG_NAME"),
		};

		$crate::__private::inventory::submit! { $crate::SingletonReg(&__DEF) }
	};
}
