use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case(range(5), &[0, 1, 2, 3, 4])]
#[case(range(0), &[])]
#[case(range(-3), &[])]
#[case(range_from(3, 6), &[3, 4, 5])]
#[case(range_from(6, 3), &[])]
fn unit_step(#[case] steps: Steps, #[case] expected: &[i64]) {
	assert_eq!(steps.collect::<Vec<_>>(), expected);
}

#[rstest]
#[case(0, 16, 5, &[0, 5, 10, 15])]
#[case(0, 15, 5, &[0, 5, 10])]
#[case(10, 0, -3, &[10, 7, 4, 1])]
#[case(0, 10, -1, &[])]
#[case(-2, 2, 1, &[-2, -1, 0, 1])]
fn stepped(#[case] start: i64, #[case] end: i64, #[case] step: i64, #[case] expected: &[i64]) {
	assert_eq!(range_step(start, end, step).unwrap().collect::<Vec<_>>(), expected);
}

#[test]
fn zero_step_is_rejected() {
	assert_eq!(range_step(0, 10, 0), Err(SeqError::ZeroStep));
}

#[test]
fn reports_exact_length() {
	let mut steps = range_step(0, 16, 5).unwrap();
	assert_eq!(steps.len(), 4);
	steps.next();
	assert_eq!(steps.len(), 3);
}

#[test]
fn runs_backwards() {
	let steps = range_step(0, 16, 5).unwrap();
	assert_eq!(steps.rev().collect::<Vec<_>>(), [15, 10, 5, 0]);
}

#[test]
fn meets_in_the_middle() {
	let mut steps = range(4);
	assert_eq!(steps.next(), Some(0));
	assert_eq!(steps.next_back(), Some(3));
	assert_eq!(steps.next(), Some(1));
	assert_eq!(steps.next_back(), Some(2));
	assert_eq!(steps.next(), None);
	assert_eq!(steps.next_back(), None);
}

#[test]
fn extreme_bounds_do_not_overflow() {
	let steps = range_from(i64::MAX - 2, i64::MAX);
	assert_eq!(steps.collect::<Vec<_>>(), [i64::MAX - 2, i64::MAX - 1]);
	let steps = range_step(i64::MIN, i64::MAX, i64::MAX).unwrap();
	assert_eq!(steps.collect::<Vec<_>>(), [i64::MIN, -1, i64::MAX - 1]);
}

proptest! {
	#[test]
	fn matches_std_step_by(start in -1000i64..1000, end in -1000i64..1000, step in 1i64..50) {
		let expected: Vec<i64> = (start..end).step_by(step as usize).collect();
		let steps = range_step(start, end, step).unwrap();
		prop_assert_eq!(steps.len(), expected.len());
		prop_assert_eq!(steps.collect::<Vec<_>>(), expected);
	}

	#[test]
	fn negative_step_mirrors_positive(start in -1000i64..1000, end in -1000i64..1000, step in 1i64..50) {
		let up = range_step(-start, -end, step).unwrap().map(|v| -v).collect::<Vec<_>>();
		let down = range_step(start, end, -step).unwrap().collect::<Vec<_>>();
		prop_assert_eq!(down, up);
	}
}
