use std::any::TypeId;

use super::*;

struct Meters(f64);

fn render_meters(value: &Meters) -> String {
	format!("{}m", value.0)
}

fn render_meters_short(value: &Meters) -> String {
	format!("{:.0}m", value.0)
}

crate::register_renderer!(meters: Meters => render_meters);
crate::register_renderer!(meters_short: Meters => render_meters_short, priority: 5);

#[test]
fn inventory_submissions_are_collected() {
	let registry = registry();
	assert!(registry.contains::<String>());
	assert!(registry.contains::<&'static str>());
	assert!(registry.contains::<crate::TypeDesc>());
	assert!(registry.contains::<Meters>());
}

#[test]
fn higher_priority_wins_in_global_registry() {
	let binding = registry().get_for::<Meters>().expect("meters renderer");
	assert_eq!(binding.id, RENDERER_meters_short.id);
	assert_eq!(binding.render(&Meters(2.4)).as_deref(), Some("2m"));

	let collision = registry()
		.collisions()
		.iter()
		.find(|c| c.winner == RENDERER_meters_short.id)
		.expect("collision recorded");
	assert_eq!(collision.loser, RENDERER_meters.id);
	assert_eq!(collision.policy, DuplicatePolicy::ByPriority);
}

#[test]
fn binding_rejects_wrong_type() {
	let binding = registry().get_for::<Meters>().expect("meters renderer");
	assert_eq!(binding.render(&5_i32), None);
}

#[test]
fn equal_precedence_last_registration_wins() {
	let mut builder = RendererRegistry::builder();
	builder.register::<u8, _>("first", 0, |v| format!("first {v}"));
	builder.register::<u8, _>("second", 0, |v| format!("second {v}"));
	let registry = builder.build().unwrap();

	assert_eq!(registry.len(), 1);
	assert_eq!(registry.get_for::<u8>().unwrap().render(&7_u8).as_deref(), Some("second 7"));
	assert_eq!(registry.collisions().len(), 1);
	assert_eq!(registry.collisions()[0].loser, "first");
}

#[test]
fn runtime_source_outranks_crate_source() {
	let mut builder = RendererRegistry::builder();
	builder.register::<Meters, _>("runtime", 0, |_| "runtime".to_owned());
	builder.push(&RENDERER_meters);
	let registry = builder.build().unwrap();

	let binding = registry.get_for::<Meters>().unwrap();
	assert_eq!(binding.id, "runtime");
	assert_eq!(binding.party.source, RegistrySource::Runtime);
}

#[test]
fn first_wins_policy_keeps_existing() {
	let mut builder = RendererRegistry::builder().duplicate_policy(DuplicatePolicy::FirstWins);
	builder.push(&RENDERER_meters);
	builder.push(&RENDERER_meters_short);
	let registry = builder.build().unwrap();

	assert_eq!(registry.get_for::<Meters>().unwrap().id, RENDERER_meters.id);
	assert_eq!(registry.collisions()[0].loser, RENDERER_meters_short.id);
}

#[test]
fn last_wins_policy_ignores_priority() {
	let mut builder = RendererRegistry::builder().duplicate_policy(DuplicatePolicy::LastWins);
	builder.push(&RENDERER_meters_short);
	builder.push(&RENDERER_meters);
	let registry = builder.build().unwrap();

	assert_eq!(registry.get_for::<Meters>().unwrap().id, RENDERER_meters.id);
}

#[test]
fn reject_policy_fails_the_build() {
	let mut builder = RendererRegistry::builder().duplicate_policy(DuplicatePolicy::Reject);
	builder.extend([&RENDERER_meters, &RENDERER_meters_short]);
	assert_eq!(builder.len(), 2);

	let err = builder.build().unwrap_err();
	let RegistryError::Duplicate { existing, incoming, .. } = &err;
	assert_eq!(existing, RENDERER_meters.id);
	assert_eq!(incoming, RENDERER_meters_short.id);
	assert!(err.to_string().starts_with("duplicate renderer for "));
}

#[test]
fn empty_builder_builds_empty_registry() {
	let builder = RegistryBuilder::new();
	assert!(builder.is_empty());
	let registry = builder.build().unwrap();
	assert!(registry.is_empty());
	assert!(registry.get(TypeId::of::<String>()).is_none());
}

#[test]
fn party_precedence() {
	let low = Party {
		priority: 0,
		source: RegistrySource::Runtime,
		ordinal: 9,
	};
	let high = Party {
		priority: 1,
		source: RegistrySource::Builtin,
		ordinal: 0,
	};
	assert!(collision::incoming_wins(DuplicatePolicy::ByPriority, &low, &high));
	assert!(!collision::incoming_wins(DuplicatePolicy::ByPriority, &high, &low));
	assert_eq!(RegistrySource::Crate("demo").to_string(), "crate:demo");
}
