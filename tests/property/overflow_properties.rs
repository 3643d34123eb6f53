// Properties of the overflow layout pass

use month_calendar::services::overflow::{layout_overflow, OverflowHost, StackedColumn};
use proptest::prelude::*;

fn column() -> impl Strategy<Value = StackedColumn> {
    (
        prop::collection::vec(1.0f32..40.0, 0..30),
        0.0f32..4.0,
        prop_oneof![Just(0.0f32), 8.0f32..20.0],
        0.0f32..300.0,
    )
        .prop_map(|(extents, gap, indicator, client)| {
            StackedColumn::new(client, gap, indicator).with_items(extents)
        })
}

fn fits(column: &StackedColumn) -> bool {
    column.scroll_extent() <= column.client_extent() + 0.01
}

proptest! {
    /// Property: hidden items form a suffix whose length is the returned count
    #[test]
    fn prop_hidden_items_are_a_suffix(mut column in column()) {
        let overflow = layout_overflow(&mut column);
        let count = column.item_count();
        prop_assert!(overflow <= count);

        for index in 0..count {
            prop_assert_eq!(column.is_hidden(index), index >= count - overflow);
        }
        prop_assert_eq!(column.indicator_visible(), overflow > 0);
    }

    /// Property: the result fits, unless every item had to go
    #[test]
    fn prop_result_fits(mut column in column()) {
        let overflow = layout_overflow(&mut column);
        prop_assert!(overflow == column.item_count() || fits(&column));
    }

    /// Property: no item is hidden that could have stayed
    #[test]
    fn prop_hides_no_more_than_needed(mut column in column()) {
        let overflow = layout_overflow(&mut column);
        if overflow > 0 {
            let mut one_fewer = column.clone();
            one_fewer.set_item_hidden(column.item_count() - overflow, false);
            one_fewer.set_indicator_visible(overflow > 1);
            prop_assert!(!fits(&one_fewer));
        }
    }

    /// Property: running the pass again converges to the same layout
    #[test]
    fn prop_layout_is_idempotent(mut column in column()) {
        let first = layout_overflow(&mut column);
        let snapshot = column.clone();
        prop_assert_eq!(layout_overflow(&mut column), first);
        prop_assert_eq!(column, snapshot);
    }
}
