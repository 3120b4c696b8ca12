use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use rstest::rstest;

use super::*;

#[rstest]
#[case::string(TypeDesc::of::<String>(), "String")]
#[case::int(TypeDesc::of::<i32>(), "i32")]
#[case::ulong(TypeDesc::of::<u64>(), "u64")]
#[case::pointer_sized(TypeDesc::of::<usize>(), "usize")]
#[case::vec(TypeDesc::of::<Vec<i32>>(), "Vec<i32>")]
#[case::map(TypeDesc::of::<HashMap<String, i32>>(), "HashMap<String, i32>")]
#[case::set(TypeDesc::of::<HashSet<u8>>(), "HashSet<u8>")]
#[case::nested(TypeDesc::of::<BTreeMap<String, Vec<Option<u64>>>>(), "BTreeMap<String, Vec<Option<u64>>>")]
#[case::deque(TypeDesc::of::<VecDeque<char>>(), "VecDeque<char>")]
#[case::str_ref(TypeDesc::of::<&str>(), "&str")]
#[case::mut_ref(TypeDesc::of::<&mut Vec<u8>>(), "&mut Vec<u8>")]
#[case::tuple(TypeDesc::of::<(i32, String)>(), "(i32, String)")]
#[case::one_tuple(TypeDesc::of::<(i32,)>(), "(i32,)")]
#[case::unit(TypeDesc::of::<()>(), "()")]
#[case::array(TypeDesc::of::<[u8; 4]>(), "u8[]")]
#[case::slice(TypeDesc::of::<[String]>(), "String[]")]
fn formats_std_types(#[case] ty: TypeDesc, #[case] expected: &str) {
	assert_eq!(ty.to_string(), expected);
}

#[test]
fn generic_composes_from_its_arguments() {
	let map = TypeDesc::of::<HashMap<String, i32>>();
	let [key, value] = map.args() else {
		panic!("expected two generic arguments, got {map:?}");
	};
	assert_eq!(map.to_string(), format!("HashMap<{key}, {value}>"));
	assert_eq!(key.to_string(), "String");
	assert_eq!(value.to_string(), "i32");
}

#[test]
fn array_rank_renders_commas() {
	let int = TypeDesc::named("i32");
	assert_eq!(TypeDesc::array(int.clone(), 1).to_string(), "i32[]");
	assert_eq!(TypeDesc::array(int.clone(), 2).to_string(), "i32[,]");
	assert_eq!(TypeDesc::array(int, 3).to_string(), "i32[,,]");
}

#[test]
fn unknown_paths_pass_through() {
	let ty = TypeDesc::parse("my_app::model::Point").unwrap();
	assert_eq!(ty.to_string(), "my_app::model::Point");
	assert_eq!(alias("my_app::model::Point"), "my_app::model::Point");
	assert_eq!(alias("alloc::string::String"), "String");
}

#[test]
fn trailing_default_params_are_elided() {
	let ty = TypeDesc::parse("alloc::vec::Vec<i32, alloc::alloc::Global>").unwrap();
	assert_eq!(ty.to_string(), "Vec<i32>");
	assert_eq!(ty.full_name(), "alloc::vec::Vec<i32, alloc::alloc::Global>");

	let ty = TypeDesc::parse("std::collections::hash::map::HashMap<u8, u8, std::hash::random::RandomState>").unwrap();
	assert_eq!(ty.to_string(), "HashMap<u8, u8>");
}

#[test]
fn full_name_is_unaliased() {
	let ty = TypeDesc::of::<Vec<String>>();
	assert_eq!(ty.base_path(), Some("alloc::vec::Vec"));
	assert!(ty.full_name().starts_with("alloc::vec::Vec<alloc::string::String"));
	assert_eq!(TypeDesc::of::<[u8; 3]>().full_name(), "[u8; 3]");
}

#[test]
fn structure_accessors() {
	let ty = TypeDesc::of::<[u16; 2]>();
	assert!(ty.is_array());
	assert!(!ty.is_generic());
	assert_eq!(ty.element(), Some(&TypeDesc::named("u16")));
	assert!(TypeDesc::of::<Option<u8>>().is_generic());
}

#[rstest]
#[case("dyn core::fmt::Debug")]
#[case("fn(i32) -> i32")]
#[case("*const u8")]
fn opaque_types_are_verbatim(#[case] name: &str) {
	let ty = TypeDesc::parse(name).unwrap();
	assert_eq!(ty, TypeDesc::Opaque(name.to_owned()));
	assert_eq!(ty.to_string(), name);
}

#[test]
fn opaque_inside_generic() {
	let ty = TypeDesc::parse("alloc::boxed::Box<dyn core::ops::function::Fn(i32) -> i32>").unwrap();
	assert_eq!(ty.to_string(), "Box<dyn core::ops::function::Fn(i32) -> i32>");
}

#[test]
fn parse_errors() {
	assert_eq!(TypeDesc::parse("  "), Err(TypeParseError::Empty));
	assert_eq!(TypeDesc::parse("Vec<i32"), Err(TypeParseError::Unterminated { pos: 7 }));
	assert_eq!(TypeDesc::parse("[u8; x]"), Err(TypeParseError::Unexpected { pos: 5, found: 'x' }));
	assert_eq!(TypeDesc::parse("a::B<u8>::C"), Err(TypeParseError::Trailing { pos: 8 }));
}

#[test]
fn function_local_types_keep_their_path() {
	struct Local;
	let ty = TypeDesc::of::<Local>();
	assert!(ty.to_string().ends_with("::function_local_types_keep_their_path::Local"));
}
