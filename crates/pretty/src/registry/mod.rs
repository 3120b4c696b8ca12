//! Renderer registry.
//!
//! Renderers are declared statically and collected through `inventory`:
//! [`register_renderer!`](crate::register_renderer), `#[renderer]`,
//! [`printable!`](crate::printable) and `#[inspect(printable)]` all submit a
//! [`RendererReg`]. The first render call that uses the global registry builds
//! it from the collected submissions; after that it is read-only and shared
//! without locking.
//!
//! Submissions are sorted by id before ordinals are assigned, so the outcome
//! of a collision does not depend on link order.

mod builder;
mod collision;
mod macros;

#[cfg(test)]
mod tests;

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

pub use builder::RegistryBuilder;
pub use collision::{Collision, DuplicatePolicy, Party, RegistrySource};
use rustc_hash::FxHashMap as HashMap;
use thiserror::Error;

/// Type-erased render function. Returns `None` if handed a value of the wrong
/// type.
pub type RenderFn = Arc<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;

/// Static renderer registration.
pub struct RendererDef {
	/// Unique identifier, `module::path::name`.
	pub id: &'static str,
	/// Type the renderer is bound to.
	pub target: fn() -> TypeId,
	/// Name of the target type, for diagnostics.
	pub target_name: fn() -> &'static str,
	/// Collision priority (higher wins).
	pub priority: i16,
	/// Where this renderer was declared.
	pub source: RegistrySource,
	/// Downcasts and renders.
	pub render: fn(&dyn Any) -> Option<String>,
}

/// Wrapper for `inventory::collect!`.
pub struct RendererReg(pub &'static RendererDef);

inventory::collect!(RendererReg);

#[derive(Debug, Error)]
pub enum RegistryError {
	#[error("duplicate renderer for {target}: {existing} and {incoming}")]
	Duplicate {
		target: &'static str,
		existing: Cow<'static, str>,
		incoming: Cow<'static, str>,
	},
}

/// A renderer bound to a type.
#[derive(Clone)]
pub struct Binding {
	pub id: Cow<'static, str>,
	pub target_name: &'static str,
	pub party: Party,
	render: RenderFn,
}

impl Binding {
	/// Renders `value`, or returns `None` if it is not of the bound type.
	pub fn render(&self, value: &dyn Any) -> Option<String> {
		(self.render)(value)
	}
}

impl std::fmt::Debug for Binding {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Binding")
			.field("id", &self.id)
			.field("target_name", &self.target_name)
			.field("party", &self.party)
			.finish_non_exhaustive()
	}
}

/// Immutable type → renderer mapping.
#[derive(Debug, Default)]
pub struct RendererRegistry {
	by_type: HashMap<TypeId, Binding>,
	collisions: Vec<Collision>,
}

impl RendererRegistry {
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	/// Builds a registry from every statically submitted renderer.
	pub fn from_inventory() -> Result<Self, RegistryError> {
		RegistryBuilder::new().extend_inventory().build()
	}

	pub fn get(&self, target: TypeId) -> Option<&Binding> {
		self.by_type.get(&target)
	}

	pub fn get_for<T: Any>(&self) -> Option<&Binding> {
		self.get(TypeId::of::<T>())
	}

	pub fn contains<T: Any>(&self) -> bool {
		self.by_type.contains_key(&TypeId::of::<T>())
	}

	pub fn len(&self) -> usize {
		self.by_type.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_type.is_empty()
	}

	/// Registrations that lost a collision, in the order they were resolved.
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Effective bindings, in no particular order.
	pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
		self.by_type.values()
	}
}

static REGISTRY: LazyLock<RendererRegistry> = LazyLock::new(|| match RendererRegistry::from_inventory() {
	Ok(registry) => registry,
	Err(e) => panic!("renderer registry: {e}"),
});

/// The process-wide registry, built on first use.
pub fn registry() -> &'static RendererRegistry {
	&REGISTRY
}
