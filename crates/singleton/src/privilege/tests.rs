use std::panic;

use super::*;

#[test]
fn threads_start_unprivileged() {
	assert!(!is_privileged());
	assert!(matches!(require_privilege(), Err(FieldError::Denied(_))));
}

#[test]
fn elevation_nests_and_releases() {
	with_privilege(|| {
		assert!(is_privileged());
		with_privilege(|| assert!(is_privileged()));
		assert!(is_privileged());
		assert!(require_privilege().is_ok());
	});
	assert!(!is_privileged());
}

#[test]
fn elevation_released_on_unwind() {
	let result = panic::catch_unwind(|| {
		let _: () = with_privilege(|| panic!("inside elevated scope"));
	});
	assert!(result.is_err());
	assert!(!is_privileged());
}

#[test]
fn elevation_is_per_thread() {
	with_privilege(|| {
		let other = std::thread::spawn(is_privileged).join().unwrap();
		assert!(!other);
	});
}
