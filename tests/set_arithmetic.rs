//! Integration tests for the scalar helpers and interval-set arithmetic.

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tonewheel::{
    cartesian_product, value_frequency, wrap, wrap_to_octave, DomainError, IntervalSet,
    OCTAVE_DIVISIONS,
};

const MAJOR_TRIAD: u32 = 0b000010010001;
const MAJOR_SCALE: u32 = 0b101010110101;

#[test]
fn test_wrap_into_bounds() {
    assert_eq!(wrap(13, 0, 12).unwrap(), 1);
    assert_eq!(wrap(-1, 0, 12).unwrap(), 11);
    assert_eq!(wrap(-12, 12, 0).unwrap(), 0);
    assert_eq!(wrap(0, 0, 12).unwrap(), 0);
    assert_eq!(wrap(12, 0, 12).unwrap(), 0);
    // Bounds may come in either order.
    assert_eq!(wrap(2, 8, 3).unwrap(), 7);
    assert_eq!(wrap(2, 3, 8).unwrap(), 7);
}

#[test]
fn test_wrap_rejects_zero_width_bounds() {
    assert!(matches!(
        wrap(5, 4, 4),
        Err(DomainError::ZeroWidthBounds { bound: 4 })
    ));
}

#[test]
fn test_wrap_to_octave() {
    assert_eq!(wrap_to_octave(0), 0);
    assert_eq!(wrap_to_octave(11), 11);
    assert_eq!(wrap_to_octave(12), 0);
    assert_eq!(wrap_to_octave(13), 1);
    assert_eq!(wrap_to_octave(-1), 11);
    assert_eq!(wrap_to_octave(-13), 11);
}

#[test]
fn test_cartesian_product_order() {
    let product = cartesian_product(&[&['a', 'b', 'c'][..], &['d'][..], &['e', 'f'][..]]);
    let expected: Vec<Vec<char>> = vec![
        vec!['a', 'd', 'e'],
        vec!['a', 'd', 'f'],
        vec!['b', 'd', 'e'],
        vec!['b', 'd', 'f'],
        vec!['c', 'd', 'e'],
        vec!['c', 'd', 'f'],
    ];
    assert_eq!(product, expected);
}

#[test]
fn test_cartesian_product_degenerate_inputs() {
    let no_lists: &[&[char]] = &[];
    assert_eq!(cartesian_product(no_lists), vec![Vec::<char>::new()]);

    let with_empty_list: &[&[char]] = &[&['a', 'b'], &[]];
    assert!(cartesian_product(with_empty_list).is_empty());
}

#[test]
fn test_value_frequency() {
    let counts = value_frequency(&['a', 'b', 'a', 'c', 'a', 'b']);
    assert_eq!(counts.get(&'a'), Some(&3));
    assert_eq!(counts.get(&'b'), Some(&2));
    assert_eq!(counts.get(&'c'), Some(&1));
    assert_eq!(counts.get(&'d'), None);
}

#[test]
fn test_from_binary_bounds() {
    assert_eq!(IntervalSet::from_binary(MAJOR_TRIAD).unwrap().binary(), MAJOR_TRIAD);
    assert_eq!(IntervalSet::from_binary(0).unwrap(), IntervalSet::EMPTY);
    assert_eq!(
        IntervalSet::from_binary(0b111111111111).unwrap(),
        IntervalSet::CHROMATIC
    );
    assert!(matches!(
        IntervalSet::from_binary(1 << OCTAVE_DIVISIONS),
        Err(DomainError::BinaryOutOfRange { .. })
    ));
}

#[test]
fn test_ordinal_round_trip() {
    let triad = IntervalSet::from_binary(MAJOR_TRIAD).unwrap();
    assert_eq!(triad.to_ordinals(), vec![0, 4, 7]);
    assert_eq!(IntervalSet::from_ordinals(&[0, 4, 7]), triad);
    // Ordinals past the octave wrap back in.
    assert_eq!(IntervalSet::from_ordinals(&[12, 16, 19]), triad);
    assert_eq!(triad.count(), 3);
    assert!(!triad.is_empty());
    assert!(IntervalSet::EMPTY.is_empty());
}

#[test]
fn test_is_active() {
    let triad = IntervalSet::from_binary(MAJOR_TRIAD).unwrap();
    assert!(triad.is_active(0));
    assert!(triad.is_active(4));
    assert!(triad.is_active(7));
    assert!(!triad.is_active(1));
    assert!(triad.is_active(12));
    assert!(triad.is_active(-5));
}

#[test]
fn test_shift_rotates_upward() {
    let triad = IntervalSet::from_binary(MAJOR_TRIAD).unwrap();
    assert_eq!(triad.shift(1.0).to_ordinals(), vec![1, 5, 8]);
    assert_eq!(triad.shift(-1.0).to_ordinals(), vec![3, 6, 11]);
    assert_eq!(triad.shift(0.0), triad);
    assert_eq!(triad.shift(12.0), triad);
    assert_eq!(triad.shift(-12.0), triad);
}

#[test]
fn test_shift_rounds_fractional_amounts() {
    let triad = IntervalSet::from_binary(MAJOR_TRIAD).unwrap();
    assert_eq!(triad.shift(0.4), triad);
    assert_eq!(triad.shift(0.5), triad.shift(1.0));
    assert_eq!(triad.shift(-0.5), triad.shift(-1.0));
    assert_eq!(triad.shift(1.49), triad.shift(1.0));
}

#[test]
fn test_mode_shift() {
    let major = IntervalSet::from_binary(MAJOR_SCALE).unwrap();
    let dorian = IntervalSet::from_binary(0b011010101101).unwrap();
    let locrian = IntervalSet::from_binary(0b010101101011).unwrap();
    assert_eq!(major.mode_shift(0), major);
    assert_eq!(major.mode_shift(1), dorian);
    assert_eq!(major.mode_shift(-1), locrian);
    // The mode index wraps around the number of active ordinals.
    assert_eq!(major.mode_shift(8), dorian);
    assert_eq!(IntervalSet::EMPTY.mode_shift(3), IntervalSet::EMPTY);
}

#[test]
fn test_toggle_ordinal() {
    let triad = IntervalSet::from_binary(MAJOR_TRIAD).unwrap();
    assert_eq!(triad.toggle_ordinal(2).to_ordinals(), vec![0, 2, 4, 7]);
    assert_eq!(triad.toggle_ordinal(4).to_ordinals(), vec![0, 7]);
    assert_eq!(triad.toggle_ordinal(12), triad.toggle_ordinal(0));
    assert_eq!(triad.toggle_ordinal(-5), triad.toggle_ordinal(7));
}

#[test]
fn test_contains() {
    let scale = IntervalSet::from_binary(MAJOR_SCALE).unwrap();
    let triad = IntervalSet::from_binary(MAJOR_TRIAD).unwrap();
    assert!(scale.contains(triad));
    assert!(!triad.contains(scale));
    assert!(scale.contains(IntervalSet::EMPTY));
    assert!(IntervalSet::CHROMATIC.contains(scale));
    assert!(!scale.contains(triad.shift(1.0)));
}

#[test]
fn test_complement_and_tonal_center() {
    let scale = IntervalSet::from_binary(MAJOR_SCALE).unwrap();
    assert_eq!(scale.complement().to_ordinals(), vec![1, 3, 6, 8, 10]);
    assert_eq!(IntervalSet::EMPTY.complement(), IntervalSet::CHROMATIC);
    assert_eq!(scale.complement().with_tonal_center().to_ordinals(), vec![0, 1, 3, 6, 8, 10]);
    assert_eq!(scale.with_tonal_center(), scale);
}

#[test]
fn test_display_pads_to_octave_width() {
    let triad = IntervalSet::from_binary(MAJOR_TRIAD).unwrap();
    assert_eq!(triad.to_string(), "000010010001");
    assert_eq!(IntervalSet::EMPTY.to_string(), "000000000000");
    assert_eq!(IntervalSet::CHROMATIC.to_string(), "111111111111");
}

#[test]
fn test_laws_hold_across_all_patterns() {
    (0u32..1u32 << OCTAVE_DIVISIONS)
        .into_par_iter()
        .for_each(|binary| {
            let set = IntervalSet::from_binary(binary).unwrap();

            assert_eq!(set.complement().complement(), set);
            assert_eq!(set.count() + set.complement().count(), OCTAVE_DIVISIONS);

            assert_eq!(set.shift(12.0), set);
            assert_eq!(set.shift(5.0).shift(7.0), set);
            assert_eq!(set.shift(3.0).shift(4.0), set.shift(7.0));

            assert_eq!(IntervalSet::from_ordinals(&set.to_ordinals()), set);
            for ordinal in 0..OCTAVE_DIVISIONS {
                assert_eq!(
                    set.is_active(ordinal as i32),
                    set.to_ordinals().contains(&ordinal)
                );
                assert_eq!(set.toggle_ordinal(ordinal as i32).toggle_ordinal(ordinal as i32), set);
            }

            assert!(set.with_tonal_center().is_active(0));
            assert!(IntervalSet::CHROMATIC.contains(set));
        });
}
