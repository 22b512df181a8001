// Host-side tests for style mapping, easing curves and page copy.

use advitya_core::*;

#[test]
fn parallax_writes_translate() {
    let css = parallax_style([-30.0, 12.5]).css_transform();
    assert_eq!(css.as_deref(), Some("translate3d(-30px, 12.5px, 0px)"));
}

#[test]
fn tilt_writes_both_axes() {
    let css = tilt_style([15.0, -7.25]).css_transform();
    assert_eq!(css.as_deref(), Some("rotateX(15deg) rotateY(-7.25deg)"));
    assert_eq!(tilt_style([0.0, 0.0]).css_transform().as_deref(), Some("none"));
}

#[test]
fn glow_is_a_radial_gradient_at_pointer() {
    let css = glow_style([100.0, 0.0]).css_glow();
    assert_eq!(
        css.as_deref(),
        Some("radial-gradient(circle at 100% 0%, rgba(255,255,255,0.3) 0%, transparent 60%)")
    );
}

#[test]
fn card_content_floats_above_face() {
    assert_eq!(
        card_content_style().css_transform().as_deref(),
        Some("translateZ(30px)")
    );
}

#[test]
fn entrance_style_omits_unit_scale() {
    let frame = EntranceFrame {
        opacity: 0.0,
        translate_y: 100.0,
        scale: 1.0,
        progress: 0.0,
    };
    let style = entrance_style(frame);
    assert_eq!(
        style.css_transform().as_deref(),
        Some("translate3d(0px, 100px, 0px)")
    );
    assert_eq!(style.css_opacity().as_deref(), Some("0"));

    let scaled = entrance_style(EntranceFrame {
        scale: 0.5,
        ..frame
    });
    assert_eq!(
        scaled.css_transform().as_deref(),
        Some("translate3d(0px, 100px, 0px) scale(0.5)")
    );
}

#[test]
fn floating_style_spins_in_plane() {
    let style = floating_style(FloatFrame {
        translate_y: -30.0,
        rotate_deg: 90.0,
        opacity: 0.6,
        scale: 1.0,
    });
    assert_eq!(
        style.css_transform().as_deref(),
        Some("translate3d(0px, -30px, 0px) rotate(90deg) scale(1)")
    );
    assert_eq!(style.css_opacity().as_deref(), Some("0.6"));
}

#[test]
fn values_are_sanitized() {
    let style = StyleDescriptor {
        opacity: Some(1.4),
        translate: Some([f32::NAN, 0.004]),
        ..Default::default()
    };
    assert_eq!(style.css_opacity().as_deref(), Some("1"));
    assert_eq!(
        style.css_transform().as_deref(),
        Some("translate3d(0px, 0px, 0px)")
    );
    assert_eq!(StyleDescriptor::default().css_transform(), None);
    assert_eq!(
        gradient_line_style(-200.0).css_background_position().as_deref(),
        Some("-200% 0%")
    );
}

#[test]
fn easings_hit_endpoints() {
    for e in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        EASE_OUT_EXPO_BEZIER,
    ] {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        assert_eq!(e.apply(2.0), 1.0, "{e:?}");
        assert_eq!(e.apply(f64::NAN), 0.0, "{e:?}");
    }
    assert_eq!(Easing::ExpoOut.apply(1.0), 1.0);
    assert!((Easing::ExpoOut.apply(0.0) - 0.001).abs() < 1e-9);
}

#[test]
fn easing_shapes() {
    assert!(Easing::EaseOut.apply(0.5) > 0.5);
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
    assert!(EASE_OUT_EXPO_BEZIER.apply(0.5) > 0.9);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = Easing::ExpoOut.apply(i as f64 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn featured_events_are_complete() {
    assert_eq!(EVENTS.len(), 2);
    for ev in EVENTS {
        assert!(!ev.title.is_empty());
        assert!(ev.reg_link.starts_with("https://"));
        assert!(ev.gradient.starts_with("linear-gradient("));
    }
    assert_eq!(EVENTS[0].icon, EventIcon::Code);
    assert_eq!(EVENTS[1].icon, EventIcon::Bot);
}

#[test]
fn footer_links_are_external() {
    assert_eq!(SOCIAL_LINKS.len(), 4);
    assert!(SOCIAL_LINKS.iter().all(|l| l.href.starts_with("https://")));
    assert_eq!(HERO_SHAPES.len(), 5);
    assert_eq!(SECTION_DECORATIONS.len(), 3);
}

#[test]
fn square_shapes_render_as_diamonds() {
    assert_eq!(ShapeKind::Square.body_rotation_deg(), 45.0);
    assert_eq!(ShapeKind::Circle.body_rotation_deg(), 0.0);
    assert_eq!(ShapeKind::Triangle.body_rotation_deg(), 0.0);
    assert!(HERO_SHAPES.iter().any(|s| s.kind == ShapeKind::Square));
}
