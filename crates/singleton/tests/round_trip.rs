use std::any::type_name;

use canon_singleton::{ResolveError, SingletonProxy, SingletonResolver, by_proxy, known_type, singleton};
use serde::{Deserialize, Serialize};
use serial_test::serial;

#[derive(Debug, PartialEq)]
pub struct Celsius {
	symbol: &'static str,
}
pub static CELSIUS: Celsius = Celsius { symbol: "°C" };
singleton!(Celsius, CELSIUS);

#[derive(Debug)]
pub struct Fahrenheit;
known_type!(Fahrenheit);

#[derive(Debug)]
pub struct Kelvin;

#[derive(Debug, Serialize)]
struct Unreadable {
	#[serde(with = "by_proxy")]
	unit: &'static Kelvin,
}

#[derive(Debug, Serialize, Deserialize)]
struct Reading {
	value: f64,
	#[serde(with = "by_proxy")]
	unit: &'static Celsius,
}

#[derive(Debug, Serialize, Deserialize)]
struct Series {
	readings: Vec<Reading>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Labelled {
	#[serde(with = "by_proxy")]
	unit: &'static Fahrenheit,
}

#[test]
#[serial]
fn json_round_trip_restores_canonical_instance() {
	let reading = Reading { value: 21.5, unit: &CELSIUS };
	let json = serde_json::to_string(&reading).unwrap();
	assert_eq!(json, format!(r#"{{"value":21.5,"unit":"{}"}}"#, type_name::<Celsius>()));

	let back: Reading = serde_json::from_str(&json).unwrap();
	assert_eq!(back.value, 21.5);
	assert!(std::ptr::eq(back.unit, &CELSIUS));
	assert_eq!(back.unit.symbol, "°C");
}

#[test]
#[serial]
fn postcard_round_trip_shares_one_instance() {
	let series = Series {
		readings: vec![Reading { value: 1.0, unit: &CELSIUS }, Reading { value: 2.0, unit: &CELSIUS }],
	};
	let bytes = postcard::to_allocvec(&series).unwrap();
	let back: Series = postcard::from_bytes(&bytes).unwrap();

	assert_eq!(back.readings.len(), 2);
	assert!(back.readings.iter().all(|r| std::ptr::eq(r.unit, &CELSIUS)));
}

#[test]
#[serial]
fn round_trip_after_global_eviction() {
	let proxy = SingletonProxy::of::<Celsius>();
	SingletonResolver::global().evict(proxy.handle());

	let back: Reading = serde_json::from_str(&serde_json::to_string(&Reading { value: 0.0, unit: &CELSIUS }).unwrap()).unwrap();
	assert!(std::ptr::eq(back.unit, &CELSIUS));
}

#[test]
fn proxy_serializes_as_type_name() {
	let json = serde_json::to_string(&SingletonProxy::of::<Celsius>()).unwrap();
	assert_eq!(json, format!("\"{}\"", type_name::<Celsius>()));
	let proxy: SingletonProxy = serde_json::from_str(&json).unwrap();
	assert_eq!(proxy, SingletonProxy::of::<Celsius>());
}

#[test]
fn unregistered_type_cannot_be_read_back() {
	let json = serde_json::to_string(&SingletonProxy::of::<Kelvin>()).unwrap();
	let err = serde_json::from_str::<SingletonProxy>(&json).unwrap_err();
	assert!(err.to_string().contains("unknown singleton type"), "{err}");
}

#[test]
#[serial]
fn name_only_type_fails_on_resolution() {
	let json = format!(r#"{{"unit":"{}"}}"#, type_name::<Fahrenheit>());
	let err = serde_json::from_str::<Labelled>(&json).unwrap_err();
	assert!(err.to_string().contains("does not expose a canonical instance"), "{err}");

	let err = SingletonProxy::of::<Fahrenheit>().resolve().unwrap_err();
	assert!(matches!(err, ResolveError::MissingSingletonField { .. }));
}

#[test]
fn unregistered_field_type_fails_on_write() {
	let err = serde_json::to_string(&Unreadable { unit: &Kelvin }).unwrap_err();
	assert!(err.to_string().contains("unknown singleton type"), "{err}");
	assert!(err.to_string().contains(type_name::<Kelvin>()), "{err}");
	assert!(postcard::to_allocvec(&Unreadable { unit: &Kelvin }).is_err());
}

#[test]
fn name_only_field_type_can_be_written() {
	let json = serde_json::to_string(&Labelled { unit: &Fahrenheit }).unwrap();
	assert_eq!(json, format!(r#"{{"unit":"{}"}}"#, type_name::<Fahrenheit>()));
}
