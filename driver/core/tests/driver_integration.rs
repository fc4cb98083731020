//! End-to-end driver scenarios: full input sequences through the public
//! API, with synthetic instants instead of sleeping.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use yearbook_core::{
    month_index, progress_for_step, step_index, DriverConfig, InputEvent, NavKey, ScrollDriver,
    WheelUnit, MONTHS, STEPS_PER_MONTH, TOTAL_STEPS,
};

fn driver() -> ScrollDriver {
    ScrollDriver::new(DriverConfig::default())
}

/// Run ticks from `start` to `start + total`, every `step_ms` ms.
fn run_frames(d: &mut ScrollDriver, start: Instant, total: Duration, step_ms: u64) {
    let mut at = start;
    let end = start + total;
    while at <= end {
        d.tick(at);
        at += Duration::from_millis(step_ms);
    }
}

#[test]
fn progress_stays_in_range_for_any_input() {
    let mut d = driver();
    let now = Instant::now();
    for value in [-5.0, 0.0, 0.5, 1.0, 1.5, f64::NAN, f64::INFINITY] {
        d.set_progress(value, now);
        let p = d.progress();
        assert!(p.is_finite() && (0.0..1.0).contains(&p), "set({value}) -> {p}");
    }
}

#[test]
fn all_consumers_agree_on_the_current_take() {
    // The consistency property: any consumer deriving through the mapper
    // sees the same take and month for a given progress value.
    let mut d = driver();
    let now = Instant::now();
    d.set_progress(0.37, now);
    let p = d.progress();
    assert_eq!(d.step(), step_index(p, TOTAL_STEPS));
    assert_eq!(d.month(), month_index(d.step(), STEPS_PER_MONTH));
    assert!(d.month() < MONTHS);
}

#[test]
fn wheel_line_deltas_accumulate_like_pixels() {
    let mut a = driver();
    let mut b = driver();
    let now = Instant::now();
    for _ in 0..10 {
        a.handle_event(
            InputEvent::Wheel {
                delta_y: 3.0,
                unit: WheelUnit::Lines,
            },
            now,
        );
        b.handle_event(
            InputEvent::Wheel {
                delta_y: 48.0,
                unit: WheelUnit::Pixels,
            },
            now,
        );
    }
    assert!((a.progress() - b.progress()).abs() < 1e-12);
}

#[test]
fn keyboard_walks_the_whole_sequence() {
    let mut d = driver();
    let now = Instant::now();
    for expected in 1..=10 {
        d.press(NavKey::Down, now);
        assert_eq!(d.step(), expected);
    }
    d.press(NavKey::End, now);
    assert_eq!(d.step(), TOTAL_STEPS - 1);
    d.press(NavKey::Home, now);
    assert_eq!(d.step(), 0);
    d.press(NavKey::Up, now);
    assert_eq!(d.step(), 0, "retreat from the first take clamps");
}

#[test]
fn tap_returns_to_the_origin_take() {
    let mut d = driver();
    let t0 = Instant::now();
    d.set_progress(5.0 / 52.0, t0);

    d.handle_event(InputEvent::TouchStart { y: 300.0 }, t0);
    d.handle_event(InputEvent::TouchMove { y: 295.0 }, t0);
    d.handle_event(InputEvent::TouchEnd, t0);

    run_frames(&mut d, t0, Duration::from_millis(300), 16);
    assert!((d.progress() - 5.0 / 52.0).abs() < 1e-9);
    assert_eq!(d.step(), 5);
}

#[test]
fn drag_past_threshold_always_moves_a_take() {
    let mut d = driver();
    let t0 = Instant::now();
    d.set_progress(10.0 / 52.0, t0);

    // 24px up: above the 16px threshold, but only 0.3 takes of travel.
    d.handle_event(InputEvent::TouchStart { y: 300.0 }, t0);
    d.handle_event(InputEvent::TouchMove { y: 276.0 }, t0);
    d.handle_event(InputEvent::TouchEnd, t0);

    run_frames(&mut d, t0, Duration::from_millis(300), 16);
    assert_eq!(d.step(), 11, "a real drag must be perceptible");
}

#[test]
fn every_settled_gesture_displays_the_take_it_landed_on() {
    // A drag from each take in turn: once the tween completes, the driver
    // must report the step it settled on, including the boundaries whose
    // exact progress scales back to just under the integer (15 and 30).
    let mut d = driver();
    let mut t = Instant::now();
    for k in 0..TOTAL_STEPS - 1 {
        d.set_progress(progress_for_step(k, TOTAL_STEPS), t);
        d.handle_event(InputEvent::TouchStart { y: 300.0 }, t);
        d.handle_event(InputEvent::TouchMove { y: 276.0 }, t);
        d.handle_event(InputEvent::TouchEnd, t);
        run_frames(&mut d, t, Duration::from_millis(300), 16);

        assert_eq!(d.step(), k + 1, "gesture from take {k}");
        assert!((d.progress() - progress_for_step(k + 1, TOTAL_STEPS)).abs() < 1e-15);
        t += Duration::from_secs(1);
    }
}

#[test]
fn idle_snap_converges_to_the_nearest_take() {
    let mut d = driver();
    let t0 = Instant::now();
    d.set_progress(0.1013, t0);

    // Nothing happens before the idle delay.
    d.tick(t0 + Duration::from_millis(219));
    assert!((d.progress() - 0.1013).abs() < 1e-12);

    d.tick(t0 + Duration::from_millis(221));
    let expected = (0.1013f64 * 52.0).round() / 52.0;
    assert!((d.progress() - expected).abs() < 1e-12);
}

#[test]
fn repeated_input_keeps_deferring_the_idle_snap() {
    let mut d = driver();
    let t0 = Instant::now();
    let mut at = t0;
    // Wheel nudges every 100ms, each landing off-boundary.
    for _ in 0..8 {
        d.handle_event(
            InputEvent::Wheel {
                delta_y: 37.0,
                unit: WheelUnit::Pixels,
            },
            at,
        );
        at += Duration::from_millis(100);
        d.tick(at);
        let off_boundary = (d.progress() * 52.0).fract();
        assert!(
            off_boundary > 1e-6 && off_boundary < 1.0 - 1e-6,
            "snap fired while input was still arriving"
        );
    }
    // Silence: the snap finally lands on a boundary.
    d.tick(at + Duration::from_millis(220));
    let fract = (d.progress() * 52.0).fract();
    assert!(fract < 1e-6 || fract > 1.0 - 1e-6);
}

#[test]
fn wheel_input_interrupts_a_snap_animation() {
    let mut d = driver();
    let t0 = Instant::now();
    d.handle_event(InputEvent::TouchStart { y: 400.0 }, t0);
    d.handle_event(InputEvent::TouchMove { y: 250.0 }, t0);
    d.handle_event(InputEvent::TouchEnd, t0);
    assert!(d.is_animating());

    d.tick(t0 + Duration::from_millis(50));
    d.wheel_px(90.0, t0 + Duration::from_millis(60));
    assert!(!d.is_animating(), "new input cancels the tween");

    // The cancelled tween contributes no further frames.
    let frozen = d.progress();
    d.tick(t0 + Duration::from_millis(100));
    assert!((d.progress() - frozen).abs() < 1e-12);
}

#[test]
fn subscribers_fan_out_and_unsubscribe() {
    let mut d = driver();
    let now = Instant::now();
    let seen: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
    let id = {
        let seen = Rc::clone(&seen);
        d.on(move |p| seen.borrow_mut().push(p))
    };
    d.set_progress(0.5, now);
    assert_eq!(&*seen.borrow(), &[0.5]);

    d.off(id);
    d.set_progress(0.25, now);
    assert_eq!(&*seen.borrow(), &[0.5]);
}
