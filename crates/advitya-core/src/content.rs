//! Static page copy. Loaded once; nothing here changes at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventIcon {
    Code,
    Bot,
}

/// One featured event card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventDescriptor {
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub prize: &'static str,
    pub cta: &'static str,
    /// External registration form, opened in a new browsing context.
    pub reg_link: &'static str,
    pub image: &'static str,
    pub icon: EventIcon,
    /// CSS background for the card face.
    pub gradient: &'static str,
}

pub const EVENTS: [EventDescriptor; 2] = [
    EventDescriptor {
        title: "CODE GARUDA 4.0",
        date: "February 27, 2026",
        description: "The AI Mashup Hackathon! A 4-hour high-energy challenge where teams receive surprise concept cards and use AI tools to design, prototype, and pitch creative solutions.",
        prize: "Medals & Trophies",
        cta: "Register now",
        reg_link: "https://forms.gle/zFfRGnGDzsy5ERbRA",
        image: "/code-garuda-4/CG 4.jpg.jpeg",
        icon: EventIcon::Code,
        gradient: "linear-gradient(145deg, #FF006E 0%, #9D00FF 100%)",
    },
    EventDescriptor {
        title: "CRAZE CHASE \u{2019}26",
        date: "February 28, 2026",
        description: "A high-energy team challenge! Speed, strategy, trust, and coordination decide the winners. Features mini-games and a thrilling life-size Battleship finale.",
        prize: "Exciting Goodies",
        cta: "Register now",
        reg_link: "https://forms.gle/SP3moxr9DtDFP4dR9",
        image: "/vainateya-3/vainetaya 3.0.jpg",
        icon: EventIcon::Bot,
        gradient: "linear-gradient(145deg, #00F5FF 0%, #0066FF 100%)",
    },
];

pub const EVENT_NAME: &str = "ADVITYA";
pub const EVENT_YEAR: &str = "2026";
pub const TAGLINE_LEAD: &str = "where innovation meets";
pub const TAGLINE_ACCENT: &str = "AI";
pub const VENUE_ADDRESS: &str =
    "VIT Bhopal University, Kotri Kalan, Sehore, Madhya Pradesh - 466114";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat {
        value: "1500+",
        label: "Participants",
    },
    HeroStat {
        value: "8+",
        label: "Events",
    },
    HeroStat {
        value: "45+",
        label: "Members",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// Fixed turn of the shape body inside its animated holder; squares
    /// stand on a corner as diamonds.
    pub fn body_rotation_deg(self) -> f32 {
        match self {
            ShapeKind::Square => 45.0,
            ShapeKind::Circle | ShapeKind::Triangle => 0.0,
        }
    }
}

/// Floating hero shape placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    pub color: &'static str,
    pub size_px: f32,
    /// Percent of the hero box.
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay: f32,
    pub kind: ShapeKind,
}

pub const HERO_SHAPES: [ShapeSpec; 5] = [
    ShapeSpec {
        color: "#FF006E",
        size_px: 120.0,
        left_pct: 10.0,
        top_pct: 20.0,
        delay: 0.0,
        kind: ShapeKind::Circle,
    },
    ShapeSpec {
        color: "#00F5FF",
        size_px: 80.0,
        left_pct: 85.0,
        top_pct: 15.0,
        delay: 0.5,
        kind: ShapeKind::Square,
    },
    ShapeSpec {
        color: "#9D00FF",
        size_px: 100.0,
        left_pct: 75.0,
        top_pct: 70.0,
        delay: 1.0,
        kind: ShapeKind::Triangle,
    },
    ShapeSpec {
        color: "#FFE600",
        size_px: 60.0,
        left_pct: 5.0,
        top_pct: 60.0,
        delay: 1.5,
        kind: ShapeKind::Circle,
    },
    ShapeSpec {
        color: "#FF006E",
        size_px: 90.0,
        left_pct: 50.0,
        top_pct: 85.0,
        delay: 2.0,
        kind: ShapeKind::Square,
    },
];

/// Blurred blob floating behind the event cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationSpec {
    /// Inline CSS placement (top/left/right/bottom).
    pub placement: &'static str,
    pub size_px: f32,
    pub color: &'static str,
    pub delay: f32,
}

pub const SECTION_DECORATIONS: [DecorationSpec; 3] = [
    DecorationSpec {
        placement: "top:5rem;left:2.5rem",
        size_px: 80.0,
        color: "rgba(255,0,110,0.2)",
        delay: 0.0,
    },
    DecorationSpec {
        placement: "top:10rem;right:5rem",
        size_px: 64.0,
        color: "rgba(0,245,255,0.2)",
        delay: 1.0,
    },
    DecorationSpec {
        placement: "bottom:8rem;left:25%",
        size_px: 96.0,
        color: "rgba(157,0,255,0.2)",
        delay: 2.0,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Background on hover.
    pub color: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Microsoft-Technical-Club-VIT-Bhopal",
        color: "#333",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/groups/17283015/?feedType=highlightedFeedForGroups&highlightedUpdateUrn=urn%3Ali%3AgroupPost%3A17283015-7428341469201002496&q=highlightedFeedForGroups",
        color: "#0A66C2",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/mstc_vitb/",
        color: "#E4405F",
    },
    SocialLink {
        label: "Website",
        href: "https://mstc-vitb-website.vercel.app/",
        color: "#00F5FF",
    },
];

pub const SECTION_BADGE: &str = "Featured Events";
pub const SECTION_SUBTITLE: &str = "Choose your arena. Compete with the best. Claim your glory.";
pub const FOOTER_BLURB: &str =
    "Stay connected for updates, behind-the-scenes, and exclusive content!";
