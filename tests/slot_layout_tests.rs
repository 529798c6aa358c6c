use approx::assert_relative_eq;
use kundali_layout::LayoutError;
use kundali_layout::core::Point;
use kundali_layout::placement::{SlotAllocator, SlotLayoutConfig, slot_position};

#[test]
fn allocator_numbers_each_cell_independently() {
    let mut allocator = SlotAllocator::default();
    assert_eq!(allocator.allocate(3), Ok(0));
    assert_eq!(allocator.allocate(3), Ok(1));
    assert_eq!(allocator.allocate(7), Ok(0));
    assert_eq!(allocator.allocate(3), Ok(2));
    assert_eq!(allocator.occupied(3), Ok(3));
    assert_eq!(allocator.occupied(12), Ok(0));
    assert_eq!(
        allocator.allocate(0),
        Err(LayoutError::CellOutOfRange { cell: 0 })
    );
}

#[test]
fn resumed_allocator_continues_after_existing_slots() {
    let mut allocator =
        SlotAllocator::resume([(3, 0), (3, 1), (9, 0)]).expect("resume allocator");
    assert_eq!(allocator.allocate(3), Ok(2));
    assert_eq!(allocator.allocate(9), Ok(1));
    assert_eq!(allocator.allocate(1), Ok(0));
    assert!(SlotAllocator::resume([(13, 0)]).is_err());
}

#[test]
fn single_column_stack_is_centred_vertically() {
    let config = SlotLayoutConfig::default();
    let center = Point::new(200.0, 100.0);
    let ys: Vec<f64> = (0..3)
        .map(|slot| slot_position(center, slot, 3, config).expect("slot").y)
        .collect();
    assert_relative_eq!(ys[0], 86.0);
    assert_relative_eq!(ys[1], 100.0);
    assert_relative_eq!(ys[2], 114.0);
    let lone = slot_position(center, 0, 1, config).expect("lone slot");
    assert_eq!(lone, center);
}

#[test]
fn crowded_cells_spill_into_a_second_column() {
    let config = SlotLayoutConfig::default();
    let center = Point::new(200.0, 100.0);
    let first = slot_position(center, 0, 5, config).expect("slot 0");
    let fourth = slot_position(center, 3, 5, config).expect("slot 3");
    let fifth = slot_position(center, 4, 5, config).expect("slot 4");

    assert_relative_eq!(first.x, 181.0);
    assert_relative_eq!(first.y, 79.0);
    assert_relative_eq!(fourth.x, 181.0);
    assert_relative_eq!(fourth.y, 121.0);
    assert_relative_eq!(fifth.x, 219.0);
    assert_relative_eq!(fifth.y, 100.0);
}

#[test]
fn slot_outside_the_stack_is_rejected() {
    let config = SlotLayoutConfig::default();
    assert!(slot_position(Point::new(0.0, 0.0), 2, 2, config).is_err());
}

#[test]
fn invalid_slot_config_is_rejected() {
    let center = Point::new(0.0, 0.0);
    let zero_height = SlotLayoutConfig {
        line_height: 0.0,
        ..SlotLayoutConfig::default()
    };
    assert!(slot_position(center, 0, 1, zero_height).is_err());

    let no_rows = SlotLayoutConfig {
        max_per_column: 0,
        ..SlotLayoutConfig::default()
    };
    assert!(slot_position(center, 0, 1, no_rows).is_err());
}
