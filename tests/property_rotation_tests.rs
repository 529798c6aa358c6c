use kundali_layout::core::{
    ALL_SIGNS, Ascendant, DisplayConvention, Point, ZodiacSign, house_for_sign, sign_for_house,
};
use kundali_layout::render::grid::polygon_contains;
use proptest::prelude::*;

proptest! {
    #[test]
    fn house_and_sign_rotation_are_inverse(
        ascendant_index in 0u8..12,
        house in 1u8..=12
    ) {
        let sign = sign_for_house(ascendant_index, house).expect("sign");
        prop_assert!((1..=12).contains(&sign));
        prop_assert_eq!(house_for_sign(ascendant_index, sign).expect("house"), house);
    }

    #[test]
    fn rotation_visits_every_sign_once(ascendant_index in 0u8..12) {
        let mut seen = [false; 12];
        for house in 1..=12 {
            let sign = sign_for_house(ascendant_index, house).expect("sign");
            prop_assert!(!seen[usize::from(sign - 1)]);
            seen[usize::from(sign - 1)] = true;
        }
        prop_assert_eq!(sign_for_house(ascendant_index, 1).expect("sign"), ascendant_index + 1);
    }

    #[test]
    fn rotation_rejects_out_of_range_arguments(
        ascendant_index in 12u8..=255,
        house in 13u8..=255
    ) {
        prop_assert!(sign_for_house(ascendant_index, 1).is_err());
        prop_assert!(sign_for_house(0, house).is_err());
        prop_assert!(sign_for_house(0, 0).is_err());
        prop_assert!(house_for_sign(0, house).is_err());
    }

    #[test]
    fn sign_cells_carry_the_sign_drawn_in_them(
        rising in 0usize..12,
        sign in 0usize..12,
        south in any::<bool>()
    ) {
        let convention = if south {
            DisplayConvention::SouthIndian
        } else {
            DisplayConvention::NorthIndian
        };
        let ascendant = Ascendant::new(ALL_SIGNS[rising]);
        let sign: ZodiacSign = ALL_SIGNS[sign];
        let cell = convention.cell_of_sign(ascendant, sign);
        prop_assert_eq!(convention.sign_in_cell(ascendant, cell).expect("sign"), sign);
    }

    #[test]
    fn interior_points_locate_to_a_single_cell(
        x in 0.5f64..399.5,
        y in 0.5f64..399.5,
        south in any::<bool>()
    ) {
        let convention = if south {
            DisplayConvention::SouthIndian
        } else {
            DisplayConvention::NorthIndian
        };
        let point = Point::new(x, y);
        let hits = convention
            .cells()
            .iter()
            .filter(|cell| polygon_contains(cell.outline, point))
            .count();
        match convention.locate(point) {
            Some(_) => prop_assert!(hits >= 1),
            None => {
                // The South Indian middle is empty.
                prop_assert!(south);
                prop_assert!(x > 100.0 && x < 300.0 && y > 100.0 && y < 300.0);
            }
        }
    }
}
