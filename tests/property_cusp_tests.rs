use std::collections::BTreeSet;

use kundali_layout::core::{HouseCusps, house_for_longitude};
use proptest::prelude::*;

// Whole-degree cusps keep every comparison exact.
fn cusps_from_cuts(start: u32, cuts: &BTreeSet<u32>) -> (Vec<u32>, Vec<f64>) {
    let offsets: Vec<u32> = std::iter::once(0).chain(cuts.iter().copied()).collect();
    let cusps = offsets
        .iter()
        .map(|offset| f64::from((start + offset) % 360))
        .collect();
    (offsets, cusps)
}

fn expected_house(offsets: &[u32], start: u32, longitude: f64) -> u8 {
    let offset = (longitude - f64::from(start)).rem_euclid(360.0);
    let index = offsets
        .iter()
        .rposition(|cusp_offset| f64::from(*cusp_offset) <= offset)
        .unwrap_or(0);
    index as u8 + 1
}

proptest! {
    #[test]
    fn longitudes_fall_into_the_house_spanning_them(
        start in 0u32..360,
        cuts in prop::collection::btree_set(1u32..360, 11),
        degree in 0u32..360
    ) {
        let (offsets, cusps) = cusps_from_cuts(start, &cuts);
        let longitude = f64::from(degree) + 0.5;
        let house = house_for_longitude(longitude, &cusps).expect("house");
        prop_assert_eq!(house, expected_house(&offsets, start, longitude));
    }

    #[test]
    fn a_longitude_on_a_cusp_opens_that_house(
        start in 0u32..360,
        cuts in prop::collection::btree_set(1u32..360, 11),
        house in 1u8..=12
    ) {
        let (_, cusps) = cusps_from_cuts(start, &cuts);
        let cusps = HouseCusps::new(&cusps).expect("cusps");
        let longitude = cusps.start_of(house).expect("start");
        prop_assert_eq!(cusps.house_for_longitude(longitude).expect("house"), house);
    }

    #[test]
    fn every_house_is_reachable(start in 0.0f64..360.0) {
        let cusps = HouseCusps::equal_from(start).expect("cusps");
        let mut seen = [0usize; 12];
        for step in 0..360 {
            let longitude = (start + f64::from(step) + 0.25).rem_euclid(360.0);
            let house = cusps.house_for_longitude(longitude).expect("house");
            seen[usize::from(house - 1)] += 1;
        }
        prop_assert!(seen.iter().all(|count| *count > 0));
        prop_assert_eq!(seen.iter().sum::<usize>(), 360);
    }

    #[test]
    fn wrong_cusp_counts_are_rejected(len in 0usize..40) {
        prop_assume!(len != 12);
        let cusps = vec![0.0; len];
        prop_assert!(house_for_longitude(10.0, &cusps).is_err());
    }
}
