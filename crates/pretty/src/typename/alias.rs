use std::sync::LazyLock;

use rustc_hash::FxHashMap as HashMap;

/// Fully-qualified standard library paths and their conventional short names.
const ALIASES: &[(&str, &str)] = &[
	("alloc::string::String", "String"),
	("alloc::vec::Vec", "Vec"),
	("alloc::boxed::Box", "Box"),
	("alloc::rc::Rc", "Rc"),
	("alloc::sync::Arc", "Arc"),
	("alloc::borrow::Cow", "Cow"),
	("alloc::collections::vec_deque::VecDeque", "VecDeque"),
	("alloc::collections::linked_list::LinkedList", "LinkedList"),
	("alloc::collections::binary_heap::BinaryHeap", "BinaryHeap"),
	("alloc::collections::btree::map::BTreeMap", "BTreeMap"),
	("alloc::collections::btree::set::BTreeSet", "BTreeSet"),
	("std::collections::hash::map::HashMap", "HashMap"),
	("std::collections::hash::set::HashSet", "HashSet"),
	("std::path::PathBuf", "PathBuf"),
	("std::path::Path", "Path"),
	("core::option::Option", "Option"),
	("core::result::Result", "Result"),
	("core::cell::Cell", "Cell"),
	("core::cell::RefCell", "RefCell"),
	("core::time::Duration", "Duration"),
	("indexmap::map::IndexMap", "IndexMap"),
	("indexmap::set::IndexSet", "IndexSet"),
	("ornate_pretty::typename::TypeDesc", "TypeDesc"),
];

static ALIAS_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| ALIASES.iter().copied().collect());

/// Returns the short name for a fully-qualified path, or the path unchanged.
pub fn alias(path: &str) -> &str {
	ALIAS_INDEX.get(path).copied().unwrap_or(path)
}
