// Host-side tests for reveal triggers and entrance transitions.

use advitya_core::*;

fn viewport(scroll_y: f64) -> Bounds {
    Bounds::new(0.0, scroll_y, 1280.0, 800.0)
}

fn card_geometry(id: RevealId) -> Option<Bounds> {
    match id.0 {
        0 => Some(Bounds::new(100.0, 1200.0, 400.0, 300.0)),
        1 => Some(Bounds::new(600.0, 1200.0, 400.0, 300.0)),
        2 => Some(Bounds::new(100.0, 3000.0, 400.0, 300.0)),
        _ => None,
    }
}

#[test]
fn ratio_of_overlap() {
    let vp = Bounds::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(visibility_ratio(&Bounds::new(0.0, 50.0, 100.0, 100.0), &vp), 0.5);
    assert_eq!(visibility_ratio(&Bounds::new(10.0, 10.0, 20.0, 20.0), &vp), 1.0);
    assert_eq!(visibility_ratio(&Bounds::new(0.0, 200.0, 10.0, 10.0), &vp), 0.0);
}

#[test]
fn degenerate_element_counts_when_touching() {
    let vp = Bounds::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(visibility_ratio(&Bounds::new(10.0, 50.0, 0.0, 0.0), &vp), 1.0);
    assert_eq!(visibility_ratio(&Bounds::new(10.0, 150.0, 0.0, 0.0), &vp), 0.0);
    assert_eq!(visibility_ratio(&Bounds::new(f64::NAN, 0.0, 1.0, 1.0), &vp), 0.0);
}

#[test]
fn inset_never_inverts() {
    let b = Bounds::new(0.0, 0.0, 100.0, 50.0).inset(40.0);
    assert_eq!(b.width, 20.0);
    assert_eq!(b.height, 0.0);
    assert_eq!(b.top, 25.0);
}

#[test]
fn reveal_options_validate() {
    assert!(RevealOptions::default().validate().is_ok());
    assert_eq!(RevealOptions::default().margin, REVEAL_MARGIN_PX);
    let bad = RevealOptions {
        margin: 0.0,
        amount: 1.5,
    };
    assert!(matches!(
        bad.validate(),
        Err(MotionError::InvalidReveal { field: "amount", .. })
    ));
}

#[test]
fn margin_delays_entry() {
    let mut trigger = RevealTrigger::new();
    trigger.observe(RevealId(0), RevealOptions::default());

    // Card top is exactly on the inset viewport's bottom edge.
    assert!(trigger.update(&viewport(500.0), &card_geometry).is_empty());
    assert_eq!(trigger.state(RevealId(0)), RevealState::Observed);

    let entered = trigger.update(&viewport(501.0), &card_geometry);
    assert_eq!(entered.as_slice(), &[RevealId(0)]);
    assert!(trigger.is_revealed(RevealId(0)));
}

#[test]
fn edge_options_enter_without_inset() {
    let mut trigger = RevealTrigger::new();
    trigger.observe(RevealId(0), RevealOptions::EDGE);
    let entered = trigger.update(&viewport(401.0), &card_geometry);
    assert_eq!(entered.len(), 1);
}

#[test]
fn amount_requires_visible_fraction() {
    let mut trigger = RevealTrigger::new();
    trigger.observe(
        RevealId(0),
        RevealOptions {
            margin: 0.0,
            amount: 0.5,
        },
    );
    // 100 of 300 px visible.
    assert!(trigger.update(&viewport(500.0), &card_geometry).is_empty());
    // 150 of 300 px visible.
    assert_eq!(trigger.update(&viewport(550.0), &card_geometry).len(), 1);
}

#[test]
fn entry_is_one_shot() {
    let mut trigger = RevealTrigger::new();
    trigger.observe(RevealId(0), RevealOptions::default());
    trigger.observe(RevealId(1), RevealOptions::default());
    trigger.observe(RevealId(2), RevealOptions::default());
    assert_eq!(trigger.pending(), 3);

    let entered = trigger.update(&viewport(900.0), &card_geometry);
    assert_eq!(entered.as_slice(), &[RevealId(0), RevealId(1)]);
    assert_eq!(trigger.pending(), 1);

    // Scrolling away and back never re-triggers.
    assert!(trigger.update(&viewport(0.0), &card_geometry).is_empty());
    assert!(trigger.update(&viewport(900.0), &card_geometry).is_empty());
    assert!(trigger.is_revealed(RevealId(0)));

    // Re-observing an entered element keeps it entered.
    assert_eq!(
        trigger.observe(RevealId(0), RevealOptions::default()),
        RevealState::Entered
    );
    assert_eq!(trigger.pending(), 1);
}

#[test]
fn missing_geometry_stays_pending() {
    let mut trigger = RevealTrigger::new();
    trigger.observe(RevealId(9), RevealOptions::EDGE);
    assert!(trigger.update(&viewport(0.0), &card_geometry).is_empty());
    assert_eq!(trigger.state(RevealId(9)), RevealState::Observed);
    assert_eq!(trigger.state(RevealId(42)), RevealState::Unobserved);
}

#[test]
fn force_reveal_skips_sampling() {
    let mut trigger = RevealTrigger::new();
    trigger.observe(RevealId(2), RevealOptions::default());
    assert!(trigger.force_reveal(RevealId(2)));
    assert!(!trigger.force_reveal(RevealId(2)));
    assert_eq!(trigger.pending(), 0);
    assert!(trigger.is_revealed(RevealId(2)));
}

#[test]
fn card_entrance_rises_and_fades_in() {
    let e = Entrance::rise(
        CARD_ENTRANCE_OFFSET_PX,
        CARD_ENTRANCE_DURATION_SEC,
        CARD_ENTRANCE_STAGGER_SEC,
    );
    let start = e.sample(0.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.translate_y, CARD_ENTRANCE_OFFSET_PX);
    assert_eq!(start.progress, 0.0);

    let mid = e.sample(e.delay + e.duration * 0.5);
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    assert!(mid.translate_y > 0.0 && mid.translate_y < CARD_ENTRANCE_OFFSET_PX);

    let end = e.sample(e.total() + 0.01);
    assert_eq!(end.opacity, 1.0);
    assert_eq!(end.translate_y, 0.0);
    assert_eq!(end.progress, 1.0);
    assert!(e.is_complete(e.total()));
    assert!(!e.is_complete(e.total() - 0.01));
}

#[test]
fn entrance_holds_during_delay() {
    let e = Entrance::rise(30.0, 0.5, 1.0);
    assert_eq!(e.sample(0.5), e.sample(0.0));
    assert_eq!(e.sample(f32::NAN).opacity, 0.0);
}

#[test]
fn entrance_scale_and_opacity_targets() {
    let e = Entrance::rise(0.0, 0.3, 0.0)
        .with_scale(0.8)
        .with_opacity(0.6)
        .with_easing(Easing::Linear);
    let half = e.sample(0.15);
    assert!((half.scale - 0.9).abs() < 1e-5);
    assert!((half.opacity - 0.3).abs() < 1e-5);
    assert_eq!(e.sample(1.0).scale, 1.0);
}

#[test]
fn zero_duration_entrance_snaps() {
    let e = Entrance::rise(50.0, 0.0, 0.0);
    assert_eq!(e.sample(0.0).opacity, 1.0);
    assert_eq!(e.sample(0.0).translate_y, 0.0);
}
