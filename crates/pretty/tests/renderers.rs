use std::any::type_name;

use ornate_pretty::registry::{RegistrySource, registry};
use ornate_pretty::{Inspect, Pretty, renderer};
use pretty_assertions::assert_eq;

#[derive(Inspect)]
struct Money {
	cents: u64,
}

#[derive(Inspect)]
struct Temperature {
	kelvin: f64,
}

#[derive(Inspect)]
struct Reading {
	label: &'static str,
	value: Temperature,
}

#[renderer]
fn money(value: &Money) -> String {
	format!("{} cents", value.cents)
}

#[renderer(priority = 10)]
fn money_dollars(value: &Money) -> String {
	format!("${}.{:02}", value.cents / 100, value.cents % 100)
}

#[renderer]
fn temperature(value: &Temperature) -> String {
	format!("{:.2}K", value.kelvin)
}

#[test]
fn higher_priority_renderer_wins() {
	assert_eq!(Money { cents: 250 }.to_pretty_string(), "$2.50");
}

#[test]
fn collision_is_recorded() {
	let collision = registry()
		.collisions()
		.iter()
		.find(|c| c.target == type_name::<Money>())
		.expect("Money collision");
	assert!(collision.winner.ends_with("money_dollars"));
	assert!(collision.loser.ends_with("money"));
}

#[test]
fn renderer_binding_carries_crate_source() {
	let binding = registry().get_for::<Temperature>().expect("Temperature renderer");
	assert_eq!(binding.party.source, RegistrySource::Crate(env!("CARGO_PKG_NAME")));
	assert!(binding.id.ends_with("temperature"));
}

#[test]
fn registered_renderer_replaces_structural_form() {
	let reading = Reading {
		label: "probe",
		value: Temperature { kelvin: 273.15 },
	};
	let ty = type_name::<Reading>();
	assert_eq!(reading.to_pretty_string(), format!("{ty} {{\n\tlabel = \"probe\", \n\tvalue = 273.15K\n}}"));
}

#[test]
fn renderer_applies_inside_collections() {
	let ty = type_name::<Temperature>();
	let temps = vec![Temperature { kelvin: 1.0 }, Temperature { kelvin: 2.5 }];
	assert_eq!(temps.to_pretty_string(), format!("Vec<{ty}>[2] {{\n\t1.00K, \n\t2.50K\n}}"));
}

#[test]
fn tagged_function_is_still_callable() {
	assert_eq!(money(&Money { cents: 7 }), "7 cents");
}
