//! Serialization proxies for singleton types.
//!
//! A singleton type has exactly one canonical instance. When such a value is
//! written to a serialized stream, a [`SingletonProxy`] naming the type is
//! written instead; reading the proxy back resolves it to the canonical
//! instance, so identity survives the round trip.
//!
//! - [`singleton!`] / [`known_type!`]: register types and their accessors
//! - [`SingletonResolver`]: per-type cached resolution
//! - [`by_proxy`]: serde field adapter for `&'static T` fields
//! - [`privilege`]: scoped elevation for access-controlled accessors
//!
//! ```ignore
//! pub struct Meters { symbol: &'static str }
//! pub static METERS: Meters = Meters { symbol: "m" };
//! canon_singleton::singleton!(Meters, METERS);
//!
//! let proxy = SingletonProxy::of::<Meters>();
//! assert!(std::ptr::eq(proxy.resolve_as::<Meters>()?, &METERS));
//! ```

pub mod by_proxy;
mod error;
mod macros;
pub mod privilege;
mod proxy;
pub mod registry;
mod resolver;


pub use canon_type_cache::{Strategy, StrategyChoice, TypeHandle};
pub use error::{FieldError, ResolveError, Result};
pub use proxy::SingletonProxy;
pub use registry::{FieldReader, Instance, SingletonDef, SingletonReg};
pub use resolver::SingletonResolver;

#[doc(hidden)]
pub mod __private {
	pub use inventory;
}
