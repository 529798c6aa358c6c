use kundali_layout::core::{
    ALL_SIGNS, Ascendant, Body, BodyOrigin, DisplayConvention, DisplayMode, HouseCusps,
};
use kundali_layout::placement::{PlacementAssembler, PlacementRequest};
use proptest::prelude::*;

fn convention(south: bool) -> DisplayConvention {
    if south {
        DisplayConvention::SouthIndian
    } else {
        DisplayConvention::NorthIndian
    }
}

fn mode(chalit: bool) -> DisplayMode {
    if chalit {
        DisplayMode::BhavaChalit
    } else {
        DisplayMode::Rashi
    }
}

proptest! {
    #[test]
    fn every_body_gets_one_entry_with_contiguous_slots(
        rising in 0usize..12,
        south in any::<bool>(),
        chalit in any::<bool>(),
        cusp_start in 0.0f64..360.0,
        natal in prop::collection::vec(0.0f64..360.0, 0..24),
        transits in prop::collection::vec(0.0f64..360.0, 0..12)
    ) {
        let natal: Vec<Body> = natal
            .iter()
            .enumerate()
            .map(|(i, lon)| Body::natal(format!("N{i}"), *lon))
            .collect();
        let transits: Vec<Body> = transits
            .iter()
            .enumerate()
            .map(|(i, lon)| Body::transit(format!("T{i}"), *lon))
            .collect();
        let request = PlacementRequest::new(
            Ascendant::new(ALL_SIGNS[rising]),
            convention(south),
            mode(chalit),
            Some(HouseCusps::equal_from(cusp_start).expect("cusps")),
        );

        let placement = PlacementAssembler::new(request)
            .assemble(&natal, &transits)
            .expect("placement");

        prop_assert_eq!(placement.entries().len(), natal.len() + transits.len());
        prop_assert_eq!(placement.natal().count(), natal.len());
        prop_assert_eq!(placement.transits().count(), transits.len());

        for cell in 1..=12u8 {
            let in_cell: Vec<_> = placement.entries_in_cell(cell).collect();
            for (slot, entry) in in_cell.iter().enumerate() {
                prop_assert_eq!(entry.slot_index, slot);
            }
            // Natal bodies stack before transits, each in input order.
            let order: Vec<(bool, usize)> = in_cell
                .iter()
                .map(|entry| (entry.origin == BodyOrigin::Transit, entry.body_index))
                .collect();
            let mut sorted = order.clone();
            sorted.sort_unstable();
            prop_assert_eq!(order, sorted);
        }
    }

    #[test]
    fn rashi_cells_follow_the_convention(
        rising in 0usize..12,
        south in any::<bool>(),
        longitudes in prop::collection::vec(0.0f64..360.0, 1..16)
    ) {
        let ascendant = Ascendant::new(ALL_SIGNS[rising]);
        let bodies: Vec<Body> = longitudes
            .iter()
            .map(|lon| Body::natal("X", *lon))
            .collect();
        let placement = PlacementAssembler::new(PlacementRequest::new(
            ascendant,
            convention(south),
            DisplayMode::Rashi,
            None,
        ))
        .assemble(&bodies, &[])
        .expect("placement");

        for entry in placement.entries() {
            prop_assert_eq!(entry.house, ascendant.sign.house_of(entry.sign));
            let expected_cell = if south { entry.sign.number() } else { entry.house };
            prop_assert_eq!(entry.cell, expected_cell);
        }
    }

    #[test]
    fn overlaying_transits_leaves_natal_slots_alone(
        rising in 0usize..12,
        south in any::<bool>(),
        natal in prop::collection::vec(0.0f64..360.0, 0..16),
        transits in prop::collection::vec(0.0f64..360.0, 1..8)
    ) {
        let natal: Vec<Body> = natal.iter().map(|lon| Body::natal("N", *lon)).collect();
        let transits: Vec<Body> = transits.iter().map(|lon| Body::transit("T", *lon)).collect();
        let assembler = PlacementAssembler::new(PlacementRequest::new(
            Ascendant::new(ALL_SIGNS[rising]),
            convention(south),
            DisplayMode::Rashi,
            None,
        ));

        let natal_only = assembler.assemble(&natal, &[]).expect("natal");
        let combined = assembler.assemble(&natal, &transits).expect("combined");
        let overlaid = natal_only
            .clone()
            .overlay_transits(&transits, None)
            .expect("overlay");

        prop_assert_eq!(&combined, &overlaid);
        prop_assert_eq!(&overlaid.entries()[..natal.len()], natal_only.entries());
    }
}
