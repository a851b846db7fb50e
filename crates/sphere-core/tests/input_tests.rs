// Host-side tests for the parameter store and the pointer-drag mapper.

use sphere_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn store_starts_at_stock_values() {
    let store = ParameterStore::default();
    assert_eq!(store.get(Param::Bump), 1.0);
    assert_eq!(store.get(Param::Displacement), 0.3);
    assert_eq!(store.label(), "B:1.00/D:0.30");
}

#[test]
fn store_set_clamps_both_ends() {
    let mut store = ParameterStore::default();
    assert_eq!(store.set(Param::Bump, 7.5), 5.0);
    assert_eq!(store.set(Param::Bump, -1.0), 0.0);
    assert_eq!(store.set(Param::Displacement, 2.5), 2.0);
    assert_eq!(store.set(Param::Displacement, -0.1), 0.0);
    assert_eq!(store.revision(), 4);
}

#[test]
fn drag_up_raises_both_parameters() {
    let mut store = ParameterStore::default();
    let mut drag = DragMapper::default();
    drag.pointer_down(200.0);

    assert!(drag.pointer_move(190.0, &mut store));
    assert!(approx(store.get(Param::Bump), 1.05));
    assert!(approx(store.get(Param::Displacement), 0.32));

    assert!(drag.pointer_move(180.0, &mut store));
    assert!(approx(store.get(Param::Bump), 1.10));
    assert!(approx(store.get(Param::Displacement), 0.34));
}

#[test]
fn drag_down_lowers_and_stops_at_zero() {
    let mut store = ParameterStore::default();
    let mut drag = DragMapper::default();
    drag.pointer_down(0.0);
    drag.pointer_move(10_000.0, &mut store);
    assert_eq!(store.get(Param::Bump), 0.0);
    assert_eq!(store.get(Param::Displacement), 0.0);
}

#[test]
fn arbitrary_drag_sequences_stay_in_range() {
    let mut store = ParameterStore::default();
    let mut drag = DragMapper::default();
    // Deterministic zig-zag with growing amplitude, both directions.
    let mut y = 500.0_f32;
    drag.pointer_down(y);
    for i in 0..400 {
        let step = (i as f32 * 7.3) % 900.0 - 450.0;
        y += step;
        drag.pointer_move(y, &mut store);
        let bump = store.get(Param::Bump);
        let disp = store.get(Param::Displacement);
        assert!((0.0..=5.0).contains(&bump), "bump {bump} out of range");
        assert!((0.0..=2.0).contains(&disp), "disp {disp} out of range");
    }
}

#[test]
fn moves_outside_a_drag_are_ignored() {
    let mut store = ParameterStore::default();
    let mut drag = DragMapper::default();
    assert!(!drag.pointer_move(50.0, &mut store));
    assert_eq!(store.revision(), 0);

    drag.pointer_down(100.0);
    drag.pointer_up();
    assert!(!drag.pointer_move(0.0, &mut store));

    drag.pointer_down(100.0);
    drag.pointer_leave();
    assert!(!drag.is_dragging());
    assert!(!drag.pointer_move(0.0, &mut store));
    assert_eq!(store.state(), ParameterState::default());
}

#[test]
fn new_press_resets_the_baseline() {
    let mut store = ParameterStore::default();
    let mut drag = DragMapper::default();
    drag.pointer_down(100.0);
    drag.pointer_up();
    // The jump from 100 to 300 happened while idle and must not count.
    drag.pointer_down(300.0);
    drag.pointer_move(300.0, &mut store);
    assert!(approx(store.get(Param::Bump), 1.0));
    assert_eq!(drag.state(), DragState::Dragging { last_y: 300.0 });
}

#[test]
fn custom_sensitivity_is_respected() {
    let mut store = ParameterStore::default();
    let mut drag = DragMapper::new(DragSensitivity {
        bump_per_px: 0.01,
        displacement_per_px: 0.0,
    });
    drag.pointer_down(0.0);
    drag.pointer_move(-10.0, &mut store);
    assert!(approx(store.get(Param::Bump), 1.1));
    assert!(approx(store.get(Param::Displacement), 0.3));
}
