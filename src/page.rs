//! Static page composition: hero, featured events, footer.
//!
//! Only structure and copy live here. Anything that moves is returned in
//! [`PageNodes`] so the frame loop can drive it.

use crate::constants::*;
use crate::dom::{append, el, set_attr, set_css, text_el};
use advitya_core::*;
use web_sys as web;

pub struct CardNodes {
    /// Tilting face; also the pointer surface.
    pub face: web::HtmlElement,
    pub glow: web::HtmlElement,
}

pub struct RevealNode {
    pub node: web::HtmlElement,
    pub entrance: Entrance,
    pub options: RevealOptions,
}

pub struct PageNodes {
    pub hero: web::HtmlElement,
    pub parallax_layer: web::HtmlElement,
    pub shapes: Vec<(web::HtmlElement, ShapeSpec)>,
    pub particles: Vec<(web::HtmlElement, Particle)>,
    pub title_glow: web::HtmlElement,
    pub cards: Vec<CardNodes>,
    pub decorations: Vec<(web::HtmlElement, DecorationSpec)>,
    pub gradient_line: web::HtmlElement,
    pub reveals: Vec<RevealNode>,
}

pub fn build(document: &web::Document, root: &web::Element) -> anyhow::Result<PageNodes> {
    let main = el(document, "main", "page")?;
    set_css(&main, "background", DEEP_BLACK);
    append(root, &main)?;

    let mut reveals = Vec::new();
    let hero = build_hero(document, &main, &mut reveals)?;
    let events = build_events(document, &main, &mut reveals)?;
    let gradient_line = build_footer(document, &main, &mut reveals)?;

    // Hidden until revealed; the first frame samples them.
    for r in &reveals {
        crate::dom::apply_style(&r.node, &entrance_style(r.entrance.sample(0.0)));
    }

    Ok(PageNodes {
        hero: hero.section,
        parallax_layer: hero.parallax_layer,
        shapes: hero.shapes,
        particles: hero.particles,
        title_glow: hero.title_glow,
        cards: events.cards,
        decorations: events.decorations,
        gradient_line,
        reveals,
    })
}

struct HeroNodes {
    section: web::HtmlElement,
    parallax_layer: web::HtmlElement,
    shapes: Vec<(web::HtmlElement, ShapeSpec)>,
    particles: Vec<(web::HtmlElement, Particle)>,
    title_glow: web::HtmlElement,
}

fn build_hero(
    document: &web::Document,
    main: &web::Element,
    reveals: &mut Vec<RevealNode>,
) -> anyhow::Result<HeroNodes> {
    let section = el(document, "section", "hero")?;
    section.set_id(HERO_ID);
    set_css(&section, "position", "relative");
    set_css(&section, "overflow", "hidden");
    append(main, &section)?;

    let grid = el(document, "div", "hero-grid")?;
    append(&section, &grid)?;

    let parallax_layer = el(document, "div", "hero-parallax")?;
    fill_parent(&parallax_layer);
    append(&section, &parallax_layer)?;
    let mut shapes = Vec::with_capacity(HERO_SHAPES.len());
    for spec in HERO_SHAPES {
        let holder = el(document, "div", "floating-shape")?;
        set_css(&holder, "position", "absolute");
        set_css(&holder, "left", &format!("{}%", spec.left_pct));
        set_css(&holder, "top", &format!("{}%", spec.top_pct));
        set_css(&holder, "width", &format!("{}px", spec.size_px));
        set_css(&holder, "height", &format!("{}px", spec.size_px));
        let body = el(document, "div", shape_class(spec.kind))?;
        match spec.kind {
            ShapeKind::Triangle => {
                let half = spec.size_px / 2.0;
                set_css(&body, "border-left", &format!("{half}px solid transparent"));
                set_css(&body, "border-right", &format!("{half}px solid transparent"));
                set_css(
                    &body,
                    "border-bottom",
                    &format!("{}px solid {}", spec.size_px, spec.color),
                );
                set_css(&body, "filter", &format!("drop-shadow(0 0 20px {})", spec.color));
            }
            ShapeKind::Circle | ShapeKind::Square => {
                set_css(&body, "width", "100%");
                set_css(&body, "height", "100%");
                if spec.kind == ShapeKind::Circle {
                    set_css(&body, "border-radius", "50%");
                }
                set_css(
                    &body,
                    "background",
                    &format!("linear-gradient(135deg, {}, transparent)", spec.color),
                );
                set_css(&body, "box-shadow", &format!("0 0 30px {}40", spec.color));
            }
        }
        let turn = spec.kind.body_rotation_deg();
        if turn != 0.0 {
            set_css(&body, "transform", &format!("rotate({turn}deg)"));
        }
        append(&holder, &body)?;
        append(&parallax_layer, &holder)?;
        shapes.push((holder, spec));
    }

    let particle_layer = el(document, "div", "hero-particles")?;
    fill_parent(&particle_layer);
    append(&section, &particle_layer)?;
    let mut particles = Vec::with_capacity(PARTICLE_COUNT);
    for p in scatter_particles(PARTICLE_COUNT, PARTICLE_SEED) {
        let dot = el(document, "div", "particle")?;
        set_css(&dot, "position", "absolute");
        set_css(&dot, "left", &format!("{}%", p.left_pct));
        set_css(&dot, "top", &format!("{}%", p.top_pct));
        set_css(&dot, "width", &format!("{}px", p.size_px));
        set_css(&dot, "height", &format!("{}px", p.size_px));
        append(&particle_layer, &dot)?;
        particles.push((dot, p));
    }

    let content = el(document, "div", "hero-content")?;
    append(&section, &content)?;

    let title = el(document, "h1", "hero-title")?;
    let title_glow = text_el(document, "span", "hero-title-name", EVENT_NAME)?;
    append(&title, &title_glow)?;
    append(&title, &el(document, "br", "")?)?;
    append(&title, &text_el(document, "span", "hero-title-year", EVENT_YEAR)?)?;
    append(&content, &title)?;
    reveals.push(RevealNode {
        node: title,
        entrance: Entrance::rise(50.0, 0.5, 0.1).with_easing(EASE_OUT_EXPO_BEZIER),
        options: RevealOptions::EDGE,
    });

    let tagline = text_el(document, "p", "hero-tagline", &format!("{TAGLINE_LEAD} "))?;
    append(&tagline, &text_el(document, "span", "accent", TAGLINE_ACCENT)?)?;
    append(&content, &tagline)?;
    reveals.push(RevealNode {
        node: tagline,
        entrance: Entrance::rise(30.0, 0.4, 0.2),
        options: RevealOptions::EDGE,
    });

    let date = el(document, "div", "hero-date")?;
    append(&date, &el(document, "div", "rule rule-left")?)?;
    append(&date, &text_el(document, "span", "hero-date-text", EVENT_YEAR)?)?;
    append(&date, &el(document, "div", "rule rule-right")?)?;
    append(&content, &date)?;
    reveals.push(RevealNode {
        node: date,
        entrance: Entrance::rise(20.0, 0.4, 0.3),
        options: RevealOptions::EDGE,
    });

    let actions = el(document, "div", "hero-actions")?;
    let view = text_el(document, "a", "btn-outline", "View Events")?;
    set_attr(&view, "href", &format!("#{EVENTS_ID}"));
    append(&actions, &view)?;
    append(&content, &actions)?;
    reveals.push(RevealNode {
        node: actions,
        entrance: Entrance::rise(30.0, 0.4, 0.4),
        options: RevealOptions::EDGE,
    });

    let stats = el(document, "div", "hero-stats")?;
    for (i, stat) in HERO_STATS.iter().enumerate() {
        let cell = el(document, "div", "stat")?;
        append(&cell, &text_el(document, "div", "stat-value", stat.value)?)?;
        append(&cell, &text_el(document, "div", "stat-label", stat.label)?)?;
        append(&stats, &cell)?;
        reveals.push(RevealNode {
            node: cell,
            entrance: Entrance::rise(0.0, 0.3, 0.6 + i as f32 * 0.05).with_scale(0.8),
            options: RevealOptions::EDGE,
        });
    }
    append(&content, &stats)?;
    reveals.push(RevealNode {
        node: stats,
        entrance: Entrance::rise(40.0, 0.5, 0.5),
        options: RevealOptions::EDGE,
    });

    append(&section, &el(document, "div", "hero-fade")?)?;

    Ok(HeroNodes {
        section,
        parallax_layer,
        shapes,
        particles,
        title_glow,
    })
}

fn fill_parent(node: &web::HtmlElement) {
    set_css(node, "position", "absolute");
    set_css(node, "inset", "0");
    set_css(node, "pointer-events", "none");
}

fn shape_class(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Circle => "shape shape-circle",
        ShapeKind::Square => "shape shape-square",
        ShapeKind::Triangle => "shape shape-triangle",
    }
}

struct EventNodes {
    cards: Vec<CardNodes>,
    decorations: Vec<(web::HtmlElement, DecorationSpec)>,
}

fn build_events(
    document: &web::Document,
    main: &web::Element,
    reveals: &mut Vec<RevealNode>,
) -> anyhow::Result<EventNodes> {
    let section = el(document, "section", "events")?;
    section.set_id(EVENTS_ID);
    append(main, &section)?;

    set_css(&section, "position", "relative");
    let backdrop = el(document, "div", "events-backdrop")?;
    fill_parent(&backdrop);
    append(&section, &backdrop)?;
    let mut decorations = Vec::with_capacity(SECTION_DECORATIONS.len());
    for spec in SECTION_DECORATIONS {
        let holder = el(document, "div", "decoration")?;
        set_attr(&holder, "style", &format!("position:absolute;{}", spec.placement));
        let blob = el(document, "div", "decoration-blob")?;
        set_css(&blob, "width", &format!("{}px", spec.size_px));
        set_css(&blob, "height", &format!("{}px", spec.size_px));
        set_css(&blob, "background", spec.color);
        append(&holder, &blob)?;
        append(&backdrop, &holder)?;
        decorations.push((holder, spec));
    }

    let header = el(document, "div", "events-header")?;
    append(&header, &text_el(document, "div", "badge", SECTION_BADGE)?)?;
    let heading = text_el(document, "h2", "events-title", "Epic ")?;
    append(&heading, &text_el(document, "span", "gradient-text", "Battles")?)?;
    append(&heading, &text_el(document, "span", "", " Await")?)?;
    append(&header, &heading)?;
    append(&header, &text_el(document, "p", "events-subtitle", SECTION_SUBTITLE)?)?;
    append(&section, &header)?;
    reveals.push(RevealNode {
        node: header,
        entrance: Entrance::rise(SECTION_ENTRANCE_OFFSET_PX, 0.6, 0.0),
        options: RevealOptions::EDGE,
    });

    let grid = el(document, "div", "events-grid")?;
    append(&section, &grid)?;
    let mut cards = Vec::with_capacity(EVENTS.len());
    for (i, event) in EVENTS.iter().enumerate() {
        let (wrapper, card) = build_card(document, event)?;
        append(&grid, &wrapper)?;
        reveals.push(RevealNode {
            node: wrapper,
            entrance: Entrance::rise(
                CARD_ENTRANCE_OFFSET_PX,
                CARD_ENTRANCE_DURATION_SEC,
                i as f32 * CARD_ENTRANCE_STAGGER_SEC,
            ),
            options: RevealOptions::default(),
        });
        cards.push(card);
    }

    append(&section, &el(document, "div", "events-rule")?)?;
    Ok(EventNodes { cards, decorations })
}

fn build_card(
    document: &web::Document,
    event: &EventDescriptor,
) -> anyhow::Result<(web::HtmlElement, CardNodes)> {
    let wrapper = el(document, "div", "card-perspective")?;
    set_css(&wrapper, "perspective", "1000px");
    let face = el(document, "div", "card")?;
    set_css(&face, "position", "relative");
    set_css(&face, "transform-style", "preserve-3d");
    append(&wrapper, &face)?;

    let background = el(document, "div", "card-bg")?;
    set_css(&background, "background", event.gradient);
    let image = el(document, "img", "card-image")?;
    set_attr(&image, "src", event.image);
    set_attr(&image, "alt", event.title);
    set_attr(&image, "role", "presentation");
    append(&background, &image)?;
    append(&background, &el(document, "div", "card-shade")?)?;
    append(&face, &background)?;

    let glow = el(document, "div", "card-glow")?;
    fill_parent(&glow);
    crate::dom::apply_style(&glow, &glow_style([50.0, 50.0]));
    append(&face, &glow)?;

    let content = el(document, "div", "card-content")?;
    crate::dom::apply_style(&content, &card_content_style());
    let top = el(document, "div", "")?;
    let icon = text_el(document, "div", "card-icon", icon_glyph(event.icon))?;
    append(&top, &icon)?;
    append(&top, &text_el(document, "h3", "card-title", event.title)?)?;
    append(&top, &text_el(document, "div", "card-date", event.date)?)?;
    append(&top, &text_el(document, "p", "card-description", event.description)?)?;
    append(&content, &top)?;

    let bottom = el(document, "div", "")?;
    let prize = el(document, "div", "card-prize")?;
    append(&prize, &text_el(document, "div", "card-prize-label", "Prize Pool")?)?;
    append(&prize, &text_el(document, "div", "card-prize-value", event.prize)?)?;
    set_css(&prize, "color", BRIGHT_YELLOW);
    append(&bottom, &prize)?;
    let cta = text_el(document, "a", "card-cta", event.cta)?;
    set_attr(&cta, "href", event.reg_link);
    set_attr(&cta, "target", "_blank");
    set_attr(&cta, "rel", "noopener noreferrer");
    append(&bottom, &cta)?;
    append(&content, &bottom)?;
    append(&face, &content)?;

    append(&face, &el(document, "div", "card-border-glow")?)?;
    Ok((wrapper, CardNodes { face, glow }))
}

fn icon_glyph(icon: EventIcon) -> &'static str {
    match icon {
        EventIcon::Code => "</>",
        EventIcon::Bot => "\u{1F916}",
    }
}

fn build_footer(
    document: &web::Document,
    main: &web::Element,
    reveals: &mut Vec<RevealNode>,
) -> anyhow::Result<web::HtmlElement> {
    let footer = el(document, "footer", "footer")?;
    footer.set_id(FOOTER_ID);
    append(main, &footer)?;

    let line_track = el(document, "div", "footer-line")?;
    let gradient_line = el(document, "div", "footer-line-fill")?;
    set_css(
        &gradient_line,
        "background",
        &format!(
            "linear-gradient(90deg, transparent, {NEON_PINK}, {ELECTRIC_BLUE}, {VIVID_PURPLE}, transparent)"
        ),
    );
    set_css(&gradient_line, "background-size", "200% 100%");
    append(&line_track, &gradient_line)?;
    append(&footer, &line_track)?;

    let columns = el(document, "div", "footer-columns")?;
    append(&footer, &columns)?;

    let brand = el(document, "div", "footer-brand")?;
    let logo = el(document, "div", "footer-logo")?;
    append(&logo, &text_el(document, "h3", "footer-name", EVENT_NAME)?)?;
    append(&logo, &text_el(document, "span", "footer-year", EVENT_YEAR)?)?;
    append(&brand, &logo)?;
    append(
        &brand,
        &text_el(document, "p", "footer-tagline", &format!("{TAGLINE_LEAD} {TAGLINE_ACCENT}."))?,
    )?;
    append(&brand, &text_el(document, "div", "footer-address", VENUE_ADDRESS)?)?;
    append(&columns, &brand)?;
    reveals.push(RevealNode {
        node: brand,
        entrance: Entrance::rise(SECTION_ENTRANCE_OFFSET_PX, 0.4, 0.0),
        options: RevealOptions::EDGE,
    });

    let social = el(document, "div", "footer-social")?;
    append(&social, &text_el(document, "h4", "footer-heading", "Follow Us")?)?;
    append(&social, &text_el(document, "p", "footer-blurb", FOOTER_BLURB)?)?;
    let icons = el(document, "div", "footer-icons")?;
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        let a = text_el(document, "a", "social-icon", &link.label[..1])?;
        set_attr(&a, "href", link.href);
        set_attr(&a, "target", "_blank");
        set_attr(&a, "rel", "noopener noreferrer");
        set_attr(&a, "aria-label", link.label);
        set_css(&a, "--hover-bg", link.color);
        append(&icons, &a)?;
        reveals.push(RevealNode {
            node: a,
            entrance: Entrance::rise(
                20.0,
                0.5,
                SOCIAL_ENTRANCE_BASE_DELAY_SEC + i as f32 * SOCIAL_ENTRANCE_STAGGER_SEC,
            ),
            options: RevealOptions::EDGE,
        });
    }
    append(&social, &icons)?;
    append(&columns, &social)?;
    reveals.push(RevealNode {
        node: social,
        entrance: Entrance::rise(SECTION_ENTRANCE_OFFSET_PX, 0.4, 0.1),
        options: RevealOptions::EDGE,
    });

    Ok(gradient_line)
}
