// Host-side tests for the smooth-scroll bridge.

use advitya_core::*;
use std::cell::RefCell;
use std::rc::Rc;

const DT: f64 = 1.0 / 60.0;

fn bridge(limit: f64) -> ScrollBridge {
    ScrollBridge::new(ScrollConfig::default(), limit).unwrap()
}

fn run(b: &mut ScrollBridge, frames: usize) {
    for i in 0..frames {
        b.tick(&FrameTime {
            now: i as f64 * DT,
            delta: DT,
            frame: i as u64,
        });
    }
}

#[test]
fn defaults_match_design_values() {
    let cfg = ScrollConfig::default();
    assert_eq!(cfg.duration, 1.2);
    assert_eq!(cfg.scroll_to_duration, 1.5);
    assert_eq!(cfg.wheel_multiplier, 1.0);
    assert_eq!(cfg.touch_multiplier, 2.0);
    assert_eq!(cfg.easing, Easing::ExpoOut);
    assert!(cfg.validate().is_ok());
}

#[test]
fn invalid_config_is_rejected() {
    let bad = ScrollConfig {
        duration: -1.0,
        ..Default::default()
    };
    assert_eq!(
        ScrollBridge::new(bad, 1000.0).err(),
        Some(MotionError::InvalidDuration(-1.0))
    );
    let bad = ScrollConfig {
        touch_multiplier: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        bad.validate(),
        Err(MotionError::InvalidMultiplier { field: "touch", .. })
    ));
}

#[test]
fn wheel_eases_toward_target() {
    let mut b = bridge(5000.0);
    assert!(b.on_wheel(300.0));
    assert_eq!(b.state().target_position, 300.0);
    run(&mut b, 5);
    let early = b.position();
    assert!(early > 0.0 && early < 300.0);
    run(&mut b, 120);
    assert_eq!(b.position(), 300.0);
    assert!(!b.is_scrolling());
}

#[test]
fn touch_uses_its_multiplier() {
    let mut b = bridge(5000.0);
    b.on_touch(50.0);
    assert_eq!(b.state().target_position, 100.0);
}

#[test]
fn deltas_accumulate_and_retarget_smoothly() {
    let mut b = bridge(5000.0);
    b.on_wheel(200.0);
    run(&mut b, 10);
    let before = b.position();
    b.on_wheel(200.0);
    assert_eq!(b.state().target_position, 400.0);
    // Retargeting continues from the current position, no jump.
    run(&mut b, 1);
    assert!(b.position() >= before);
    assert!(b.position() - before < 100.0);
}

#[test]
fn position_stays_within_limit() {
    let mut b = bridge(1000.0);
    for _ in 0..50 {
        b.on_wheel(400.0);
        run(&mut b, 3);
        assert!(b.position() >= 0.0 && b.position() <= 1000.0);
    }
    run(&mut b, 200);
    assert_eq!(b.position(), 1000.0);

    for _ in 0..50 {
        b.on_wheel(-400.0);
        run(&mut b, 3);
        assert!(b.position() >= 0.0 && b.position() <= 1000.0);
    }
    run(&mut b, 200);
    assert_eq!(b.position(), 0.0);
}

#[test]
fn scroll_to_reaches_and_holds_target() {
    let mut b = bridge(6000.0);
    let target = b.scroll_to(4000.0, ScrollToOptions::default());
    assert_eq!(target, Some(4000.0));
    assert_eq!(b.scroll_to_requests(), 1);
    // 1.5 s at 60 fps plus slack.
    run(&mut b, 95);
    assert_eq!(b.position(), 4000.0);
    run(&mut b, 60);
    assert_eq!(b.position(), 4000.0);
    assert!(!b.is_scrolling());
}

#[test]
fn scroll_to_is_clamped_and_honours_options() {
    let mut b = bridge(1000.0);
    assert_eq!(b.scroll_to(4000.0, ScrollToOptions::default()), Some(1000.0));
    let jumped = b.scroll_to(
        600.0,
        ScrollToOptions {
            offset: -100.0,
            immediate: true,
            ..Default::default()
        },
    );
    assert_eq!(jumped, Some(500.0));
    assert_eq!(b.position(), 500.0);
    assert!(!b.is_scrolling());
}

#[test]
fn scroll_to_target_resolves_elements() {
    let mut b = bridge(3000.0);
    let resolver = |id: &str| -> Option<f64> { (id == "footer").then_some(2500.0) };
    let opts = ScrollToOptions {
        immediate: true,
        ..Default::default()
    };
    assert_eq!(
        b.scroll_to_target(ScrollTarget::Element("footer"), opts, &resolver),
        Some(2500.0)
    );
    assert_eq!(b.position(), 2500.0);
    assert_eq!(
        b.scroll_to_target(ScrollTarget::Element("nowhere"), opts, &resolver),
        None
    );
    assert_eq!(
        b.scroll_to_target(ScrollTarget::Offset(10.0), opts, &resolver),
        Some(10.0)
    );
    assert_eq!(b.scroll_to_requests(), 2);
}

#[test]
fn anchor_to_element_at_top_issues_one_request() {
    let mut b = bridge(3000.0);
    let resolver = |fragment: &str| -> Option<f64> { (fragment == "events").then_some(0.0) };
    assert_eq!(b.handle_anchor("#events", &resolver), AnchorOutcome::Scrolled(0.0));
    assert_eq!(b.scroll_to_requests(), 1);
    run(&mut b, 10);
    assert_eq!(b.position(), 0.0);
}

#[test]
fn anchor_scrolls_to_resolved_offset() {
    let mut b = bridge(3000.0);
    let resolver = |fragment: &str| -> Option<f64> { (fragment == "events").then_some(900.0) };
    assert_eq!(b.handle_anchor("#events", &resolver), AnchorOutcome::Scrolled(900.0));
    run(&mut b, 100);
    assert_eq!(b.position(), 900.0);
}

#[test]
fn unknown_anchor_issues_no_request() {
    let mut b = bridge(3000.0);
    let resolver = |_: &str| -> Option<f64> { None };
    assert_eq!(b.handle_anchor("#missing", &resolver), AnchorOutcome::Unresolved);
    assert_eq!(b.scroll_to_requests(), 0);
}

#[test]
fn non_fragment_links_are_ignored() {
    let mut b = bridge(3000.0);
    let resolver = |_: &str| -> Option<f64> { Some(100.0) };
    assert_eq!(b.handle_anchor("https://example.com", &resolver), AnchorOutcome::Ignored);
    assert_eq!(b.handle_anchor("#", &resolver), AnchorOutcome::Ignored);
    assert_eq!(b.scroll_to_requests(), 0);
}

#[test]
fn observers_fire_once_per_frame() {
    let mut b = bridge(3000.0);
    let seen: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
    let a = seen.clone();
    b.subscribe(move |ev| a.borrow_mut().push(ev.position));
    let count = Rc::new(RefCell::new(0usize));
    let c = count.clone();
    b.subscribe(move |_| *c.borrow_mut() += 1);
    assert_eq!(b.observer_count(), 2);

    b.on_wheel(500.0);
    run(&mut b, 7);
    assert_eq!(seen.borrow().len(), 7);
    assert_eq!(*count.borrow(), 7);
    // Positions are monotonic while scrolling down.
    assert!(seen.borrow().windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn event_reports_direction_and_progress() {
    let mut b = bridge(1000.0);
    b.on_wheel(500.0);
    run(&mut b, 200);
    let ev = b.event();
    assert_eq!(ev.direction, 1);
    assert_eq!(ev.progress, 0.5);
    assert!(!ev.is_scrolling);

    b.on_wheel(-100.0);
    run(&mut b, 2);
    assert_eq!(b.event().direction, -1);
    assert!(b.event().velocity < 0.0);
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut b = bridge(3000.0);
    let count = Rc::new(RefCell::new(0usize));
    let c = count.clone();
    let id = b.subscribe(move |_| *c.borrow_mut() += 1);
    run(&mut b, 2);
    assert!(b.unsubscribe(id));
    assert!(!b.unsubscribe(id));
    run(&mut b, 2);
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn nothing_to_scroll_leaves_native_alone() {
    let mut b = bridge(0.0);
    assert!(!b.on_wheel(100.0));
    assert_eq!(b.position(), 0.0);
    let mut b = bridge(f64::NAN);
    assert_eq!(b.limit(), 0.0);
    assert!(!b.on_touch(10.0));
}

#[test]
fn shrinking_limit_clamps_position() {
    let mut b = bridge(2000.0);
    b.scroll_to(1800.0, ScrollToOptions { immediate: true, ..Default::default() });
    b.set_limit(1000.0);
    assert_eq!(b.position(), 1000.0);
    assert_eq!(b.state().target_position, 1000.0);
}

#[test]
fn native_sync_cancels_animation() {
    let mut b = bridge(2000.0);
    b.on_wheel(800.0);
    run(&mut b, 3);
    b.sync_native(250.0);
    assert_eq!(b.position(), 250.0);
    assert!(!b.is_scrolling());
    b.sync_native(f64::NAN);
    assert_eq!(b.position(), 250.0);
}

#[test]
fn stop_ignores_input_until_started() {
    let mut b = bridge(2000.0);
    b.stop();
    assert!(!b.on_wheel(100.0));
    assert_eq!(b.scroll_to(500.0, ScrollToOptions::default()), None);
    b.start();
    assert!(b.on_wheel(100.0));
}

#[test]
fn destroy_is_idempotent_and_final() {
    let mut b = bridge(2000.0);
    let count = Rc::new(RefCell::new(0usize));
    let c = count.clone();
    b.subscribe(move |_| *c.borrow_mut() += 1);
    b.on_wheel(300.0);

    assert!(b.destroy());
    assert!(!b.destroy());
    assert!(b.is_destroyed());
    assert_eq!(b.observer_count(), 0);

    run(&mut b, 5);
    assert_eq!(*count.borrow(), 0);
    assert!(!b.on_wheel(100.0));
    let resolver = |_: &str| -> Option<f64> { Some(10.0) };
    assert_eq!(b.handle_anchor("#events", &resolver), AnchorOutcome::Ignored);
    b.subscribe(|_| {});
    assert_eq!(b.observer_count(), 0);
}
