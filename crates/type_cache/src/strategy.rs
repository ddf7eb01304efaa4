use std::fmt;
use std::sync::OnceLock;

/// Caching strategy backing a [`TypeCache`](crate::TypeCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Values are computed once per type and kept until evicted.
	Memoized,
	/// Values are recomputed on every access and never stored.
	Recompute,
}

impl Strategy {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Memoized => "memoized",
			Self::Recompute => "recompute",
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// How a cache picks its [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyChoice {
	/// Use whatever [`probe`] reports for this process.
	#[default]
	Auto,
	/// Use the given strategy regardless of the probe.
	Force(Strategy),
}

impl StrategyChoice {
	pub fn resolve(self) -> Strategy {
		match self {
			Self::Auto => probe(),
			Self::Force(strategy) => strategy,
		}
	}
}

/// Returns the strategy this process uses when none is forced.
///
/// The answer is fixed at compile time by the target's atomics support, so on
/// every target with `std` this is [`Strategy::Memoized`] and `Auto` never
/// picks [`Strategy::Recompute`]; that strategy is only reached by forcing it.
/// The result is logged once on first call.
pub fn probe() -> Strategy {
	static PROBED: OnceLock<Strategy> = OnceLock::new();
	*PROBED.get_or_init(|| {
		let strategy = if memoization_available() {
			Strategy::Memoized
		} else {
			Strategy::Recompute
		};
		tracing::debug!(strategy = strategy.as_str(), "type_cache.probe");
		strategy
	})
}

/// Memoized slots publish through pointer-width atomics. This is a `cfg!`
/// check, not a runtime one.
const fn memoization_available() -> bool {
	cfg!(target_has_atomic = "ptr")
}
