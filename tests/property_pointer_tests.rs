use enarm_charts::api::{RenderOptions, trend_chart};
use enarm_charts::core::DataPoint;
use enarm_charts::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn nearest_point_minimizes_horizontal_distance(
        count in 1usize..50,
        pointer_x in -100.0f64..1_000.0,
        width in 200u32..1_200
    ) {
        let data: Vec<DataPoint> = (0..count)
            .map(|index| DataPoint::new(index.to_string(), index as f64))
            .collect();
        let view = trend_chart(&data, 0.0, RenderOptions::new().with_width(width))
            .mount(NullRenderer::default(), None)
            .expect("mount");

        let snap = view.snap_at_x(pointer_x).expect("snap");
        for index in 0..count {
            let x = view.map_index_to_pixel(index).expect("x");
            prop_assert!(snap.distance <= (x - pointer_x).abs());
        }
        prop_assert_eq!(snap.x, view.map_index_to_pixel(snap.index).expect("snap x"));
    }

    #[test]
    fn repeated_moves_resolve_the_same_point_and_tooltip(
        count in 1usize..30,
        pointer_x in 0.0f64..640.0,
        pointer_y in 0.0f64..400.0
    ) {
        let data: Vec<DataPoint> = (0..count)
            .map(|index| DataPoint::new(index.to_string(), (index * 7 % 13) as f64))
            .collect();
        let mut view = trend_chart(&data, 5.0, RenderOptions::default())
            .mount(NullRenderer::default(), None)
            .expect("mount");

        view.pointer_move(pointer_x, pointer_y);
        let first = (view.pointer_state().snap(), view.tooltip());
        view.pointer_move(pointer_x, pointer_y);
        let second = (view.pointer_state().snap(), view.tooltip());

        prop_assert_eq!(first, second);
        prop_assert!(view.pointer_state().is_hovering());
    }

    #[test]
    fn leave_always_returns_to_idle(
        moves in prop::collection::vec((0.0f64..640.0, 0.0f64..400.0), 0..10)
    ) {
        let data = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)];
        let mut view = trend_chart(&data, 1.5, RenderOptions::default())
            .mount(NullRenderer::default(), None)
            .expect("mount");

        for (x, y) in moves {
            view.pointer_move(x, y);
        }
        view.pointer_leave();

        prop_assert!(!view.pointer_state().is_hovering());
        prop_assert!(view.pointer_state().snap().is_none());
        prop_assert!(view.tooltip().is_none());
    }
}
