//! Collision types and precedence rules.
//!
//! # Role
//!
//! Several renderers may be registered for the same type. This module defines
//! how the winner is chosen and what is recorded about the loser.

use std::borrow::Cow;
use std::cmp::Ordering;

/// Where a renderer registration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrySource {
	/// Shipped with this crate.
	Builtin,
	/// Declared in a library or application crate.
	Crate(&'static str),
	/// Added to an explicitly built registry at runtime.
	Runtime,
}

impl RegistrySource {
	/// Returns the precedence rank of the source (higher is higher precedence).
	pub const fn rank(self) -> u8 {
		match self {
			Self::Builtin => 0,
			Self::Crate(_) => 1,
			Self::Runtime => 2,
		}
	}
}

impl std::fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
			Self::Runtime => write!(f, "runtime"),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Keep the first registration seen for a type.
	FirstWins,
	/// Overwrite with the last registration seen.
	LastWins,
	/// Select winner by priority (higher wins), then source rank, then ordinal.
	#[default]
	ByPriority,
	/// Fail the build.
	Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Party {
	pub priority: i16,
	pub source: RegistrySource,
	/// Stable ingest ordinal.
	pub ordinal: u32,
}

/// Compares two parties using the precedence rules.
///
/// Precedence hierarchy:
/// 1. Priority (higher wins)
/// 2. Source (Runtime > Crate > Builtin)
/// 3. Ingest ordinal (higher/later wins)
pub(crate) fn cmp_party(a: &Party, b: &Party) -> Ordering {
	a.priority
		.cmp(&b.priority)
		.then_with(|| a.source.rank().cmp(&b.source.rank()))
		.then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Returns true if `incoming` replaces `existing` under `policy`.
///
/// `Reject` is handled by the caller before this is consulted.
pub(crate) fn incoming_wins(policy: DuplicatePolicy, existing: &Party, incoming: &Party) -> bool {
	match policy {
		DuplicatePolicy::FirstWins | DuplicatePolicy::Reject => false,
		DuplicatePolicy::LastWins => true,
		DuplicatePolicy::ByPriority => cmp_party(incoming, existing) == Ordering::Greater,
	}
}

/// A registration that lost against another one for the same type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	/// Type both renderers were registered for.
	pub target: &'static str,
	/// Id of the renderer that stays bound.
	pub winner: Cow<'static, str>,
	/// Id of the renderer that was dropped.
	pub loser: Cow<'static, str>,
	pub policy: DuplicatePolicy,
}
