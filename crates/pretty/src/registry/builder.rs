use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use super::collision::{Collision, DuplicatePolicy, Party, RegistrySource, incoming_wins};
use super::{Binding, RegistryError, RendererDef, RendererReg, RendererRegistry};

struct Pending {
	target: TypeId,
	binding: Binding,
}

/// Builder for constructing a [`RendererRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
	pending: Vec<Pending>,
	policy: DuplicatePolicy,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of registrations added so far.
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Returns true if nothing has been registered yet.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Sets the duplicate handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a single static registration.
	pub fn push(&mut self, def: &'static RendererDef) {
		let party = self.next_party(def.priority, def.source);
		self.pending.push(Pending {
			target: (def.target)(),
			binding: Binding {
				id: Cow::Borrowed(def.id),
				target_name: (def.target_name)(),
				party,
				render: Arc::new(def.render),
			},
		});
	}

	/// Adds multiple static registrations in iteration order.
	pub fn extend<I: IntoIterator<Item = &'static RendererDef>>(&mut self, defs: I) {
		for def in defs {
			self.push(def);
		}
	}

	/// Adds every registration submitted through `inventory`, ordered by id.
	pub fn extend_inventory(mut self) -> Self {
		let mut defs: Vec<&'static RendererDef> = inventory::iter::<RendererReg>.into_iter().map(|r| r.0).collect();
		defs.sort_by_key(|def| def.id);
		self.extend(defs);
		self
	}

	/// Registers a runtime renderer for `T`.
	pub fn register<T, F>(&mut self, id: impl Into<Cow<'static, str>>, priority: i16, render: F) -> &mut Self
	where
		T: Any,
		F: Fn(&T) -> String + Send + Sync + 'static,
	{
		let party = self.next_party(priority, RegistrySource::Runtime);
		self.pending.push(Pending {
			target: TypeId::of::<T>(),
			binding: Binding {
				id: id.into(),
				target_name: std::any::type_name::<T>(),
				party,
				render: Arc::new(move |value: &dyn Any| value.downcast_ref::<T>().map(&render)),
			},
		});
		self
	}

	fn next_party(&self, priority: i16, source: RegistrySource) -> Party {
		Party {
			priority,
			source,
			ordinal: self.pending.len() as u32,
		}
	}

	/// Resolves collisions and builds the registry.
	pub fn build(self) -> Result<RendererRegistry, RegistryError> {
		let policy = self.policy;
		let mut by_type: HashMap<TypeId, Binding> =
			HashMap::with_capacity_and_hasher(self.pending.len(), Default::default());
		let mut collisions = Vec::new();

		for Pending { target, binding } in self.pending {
			let Some(existing) = by_type.get_mut(&target) else {
				by_type.insert(target, binding);
				continue;
			};

			if policy == DuplicatePolicy::Reject {
				return Err(RegistryError::Duplicate {
					target: binding.target_name,
					existing: existing.id.clone(),
					incoming: binding.id,
				});
			}

			let (winner, loser) = if incoming_wins(policy, &existing.party, &binding.party) {
				let loser = std::mem::replace(existing, binding);
				(existing.id.clone(), loser.id)
			} else {
				(existing.id.clone(), binding.id)
			};

			tracing::debug!(
				target_type = existing.target_name,
				%winner,
				%loser,
				?policy,
				"renderer collision"
			);
			collisions.push(Collision {
				target: existing.target_name,
				winner,
				loser,
				policy,
			});
		}

		tracing::debug!(renderers = by_type.len(), collisions = collisions.len(), "renderer registry built");
		Ok(RendererRegistry { by_type, collisions })
	}
}
