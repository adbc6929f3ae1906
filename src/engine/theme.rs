use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme kind: \"{0}\"")]
    UnknownThemeKind(String),
}

/// Closed catalog of landing-page looks. `Original` is the ember look the
/// rest of the site ships with; it doubles as the pinned baseline that the
/// booking section keeps no matter what is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    Original,
    Neon,
    Pastel,
    Mono,
    Earthy,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 5] = [
        ThemeKind::Original,
        ThemeKind::Neon,
        ThemeKind::Pastel,
        ThemeKind::Mono,
        ThemeKind::Earthy,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ThemeKind::Original => "original",
            ThemeKind::Neon => "neon",
            ThemeKind::Pastel => "pastel",
            ThemeKind::Mono => "mono",
            ThemeKind::Earthy => "earthy",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, ThemeError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ThemeError::UnknownThemeKind(key.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Original => "Ember Original",
            ThemeKind::Neon => "Neon Gradient",
            ThemeKind::Pastel => "Pastel Pop",
            ThemeKind::Mono => "Monochrome Minimal",
            ThemeKind::Earthy => "Earthy Organic",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            ThemeKind::Original => "The InfoFuel house style. Dark, warm, ember-lit.",
            ThemeKind::Neon => "High-energy gradients + glow accents for bold CTAs.",
            ThemeKind::Pastel => "Soft, upbeat palettes with generous white space.",
            ThemeKind::Mono => "High contrast, bold type, clean hierarchy.",
            ThemeKind::Earthy => "Grounded neutrals with fresh botanical accents.",
        }
    }

    /// The three preview dots shown on each gallery card.
    pub fn swatches(self) -> [&'static str; 3] {
        match self {
            ThemeKind::Original => ["#ff6b2c", "#e63946", "#ff9248"],
            ThemeKind::Neon => ["#a855f7", "#22d3ee", "#84cc16"],
            ThemeKind::Pastel => ["#84dcc6", "#a5ffd6", "#ffa69e"],
            ThemeKind::Mono => ["#0a0a0a", "#ffffff", "#9ca3af"],
            ThemeKind::Earthy => ["#8b7a5a", "#b9a78b", "#2e6f62"],
        }
    }

    /// Background of the gallery preview panel.
    pub fn preview_css(self) -> &'static str {
        match self {
            ThemeKind::Original => {
                "radial-gradient(120% 80% at 20% 20%, rgba(255,107,44,0.5), transparent 60%), \
                 linear-gradient(90deg, #ff6b2c, #e63946)"
            }
            ThemeKind::Neon => {
                "radial-gradient(100% 60% at 20% 20%, rgba(132,204,22,0.35), transparent 60%), \
                 radial-gradient(120% 80% at 80% 30%, rgba(99,102,241,0.55), transparent 60%), \
                 linear-gradient(90deg, #a855f7, #22d3ee)"
            }
            ThemeKind::Pastel => {
                "conic-gradient(at 30% 30%, #84dcc6, #a5ffd6, #ffa69e, #ff686b, #84dcc6)"
            }
            ThemeKind::Mono => "linear-gradient(135deg, #000000, #171717, #262626)",
            ThemeKind::Earthy => "linear-gradient(90deg, #8b7a5a, #b9a78b, #2e6f62)",
        }
    }

    pub fn bundle(self) -> &'static ThemeBundle {
        match self {
            ThemeKind::Original => &ORIGINAL,
            ThemeKind::Neon => &NEON,
            ThemeKind::Pastel => &PASTEL,
            ThemeKind::Mono => &MONO,
            ThemeKind::Earthy => &EARTHY,
        }
    }
}

/// One ambient radial glow: an rgb triple plus the peak opacity of the
/// gradient built from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowAccent {
    pub rgb: &'static str,
    pub intensity: f32,
}

impl GlowAccent {
    pub fn radial_css(&self) -> String {
        format!(
            "radial-gradient(closest-side, rgba({}, {}), transparent)",
            self.rgb, self.intensity
        )
    }
}

/// Complete set of presentation tokens for one theme. Every field is always
/// populated; the rendering layer never has to handle a missing token.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeBundle {
    /// CSS background of the page itself.
    pub background: &'static str,
    pub glow_primary: GlowAccent,
    pub glow_secondary: GlowAccent,
    /// Opacity of the ember-texture overlay; zero hides it.
    pub ember_opacity: f32,
    pub gradient_text: &'static str,
    pub button_primary: &'static str,
    pub card: &'static str,
    pub card_hover: &'static str,
    pub border: &'static str,
    pub accent_text: &'static str,
    pub link_hover: &'static str,
    /// Color of non-card headings.
    pub heading: &'static str,
    /// Color of non-card body copy.
    pub body_text: &'static str,
    pub reset_control: &'static str,
    /// Raw accent color the tint helper blends from.
    pub base_color: &'static str,
}

impl ThemeBundle {
    /// `rgba(..)` of the theme's base color at the given opacity, used for
    /// procedural panel tints. Falls back to transparent if the catalog ever
    /// carried a malformed color (the completeness tests rule that out).
    pub fn tint(&self, alpha: f32) -> String {
        match parse_hex(self.base_color) {
            Some((r, g, b)) => format!("rgba({r}, {g}, {b}, {alpha})"),
            None => "rgba(0, 0, 0, 0)".to_string(),
        }
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

static ORIGINAL: ThemeBundle = ThemeBundle {
    background: "#0a0a0a",
    glow_primary: GlowAccent { rgb: "255, 107, 44", intensity: 0.35 },
    glow_secondary: GlowAccent { rgb: "230, 57, 70", intensity: 0.32 },
    ember_opacity: 0.18,
    gradient_text: "grad-text grad-text-ember",
    button_primary: "btn-primary btn-ember",
    card: "glass-card card-ember",
    card_hover: "card-hover-ember",
    border: "border-ember",
    accent_text: "accent-ember",
    link_hover: "link-ember",
    heading: "#ffffff",
    body_text: "#d1d5db",
    reset_control: "reset-control reset-ember",
    base_color: "#ff6b2c",
};

static NEON: ThemeBundle = ThemeBundle {
    background: "radial-gradient(120% 80% at 80% 0%, rgba(99, 102, 241, 0.25), transparent 60%), #090714",
    glow_primary: GlowAccent { rgb: "168, 85, 247", intensity: 0.40 },
    glow_secondary: GlowAccent { rgb: "34, 211, 238", intensity: 0.35 },
    ember_opacity: 0.10,
    gradient_text: "grad-text grad-text-neon",
    button_primary: "btn-primary btn-neon",
    card: "glass-card card-neon",
    card_hover: "card-hover-neon",
    border: "border-neon",
    accent_text: "accent-neon",
    link_hover: "link-neon",
    heading: "#f5f3ff",
    body_text: "#c7d2fe",
    reset_control: "reset-control reset-neon",
    base_color: "#a855f7",
};

static PASTEL: ThemeBundle = ThemeBundle {
    background: "#141821",
    glow_primary: GlowAccent { rgb: "132, 220, 198", intensity: 0.30 },
    glow_secondary: GlowAccent { rgb: "255, 166, 158", intensity: 0.28 },
    ember_opacity: 0.06,
    gradient_text: "grad-text grad-text-pastel",
    button_primary: "btn-primary btn-pastel",
    card: "glass-card card-pastel",
    card_hover: "card-hover-pastel",
    border: "border-pastel",
    accent_text: "accent-pastel",
    link_hover: "link-pastel",
    heading: "#f8fafc",
    body_text: "#cbd5e1",
    reset_control: "reset-control reset-pastel",
    base_color: "#84dcc6",
};

static MONO: ThemeBundle = ThemeBundle {
    background: "linear-gradient(160deg, #000000, #171717 55%, #262626)",
    glow_primary: GlowAccent { rgb: "255, 255, 255", intensity: 0.12 },
    glow_secondary: GlowAccent { rgb: "156, 163, 175", intensity: 0.10 },
    ember_opacity: 0.0,
    gradient_text: "grad-text grad-text-mono",
    button_primary: "btn-primary btn-mono",
    card: "glass-card card-mono",
    card_hover: "card-hover-mono",
    border: "border-mono",
    accent_text: "accent-mono",
    link_hover: "link-mono",
    heading: "#ffffff",
    body_text: "#9ca3af",
    reset_control: "reset-control reset-mono",
    base_color: "#9ca3af",
};

static EARTHY: ThemeBundle = ThemeBundle {
    background: "#121410",
    glow_primary: GlowAccent { rgb: "139, 122, 90", intensity: 0.30 },
    glow_secondary: GlowAccent { rgb: "46, 111, 98", intensity: 0.30 },
    ember_opacity: 0.12,
    gradient_text: "grad-text grad-text-earthy",
    button_primary: "btn-primary btn-earthy",
    card: "glass-card card-earthy",
    card_hover: "card-hover-earthy",
    border: "border-earthy",
    accent_text: "accent-earthy",
    link_hover: "link-earthy",
    heading: "#f5f5f0",
    body_text: "#c6c2b6",
    reset_control: "reset-control reset-earthy",
    base_color: "#2e6f62",
};

/// Single active-theme selection over the catalog. Plain owned value: pages
/// hold it in component state and re-read `current_bundle()` on every render
/// pass; nothing is pushed at consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEngine {
    active: ThemeKind,
}

impl Default for ThemeEngine {
    fn default() -> Self {
        Self { active: Self::BASELINE }
    }
}

impl ThemeEngine {
    pub const BASELINE: ThemeKind = ThemeKind::Original;

    /// Make the theme behind `key` the active one. On an unknown key the
    /// selection is left exactly as it was.
    pub fn select(&mut self, key: &str) -> Result<ThemeKind, ThemeError> {
        let kind = ThemeKind::from_key(key)?;
        self.active = kind;
        Ok(kind)
    }

    pub fn reset(&mut self) {
        self.active = Self::BASELINE;
    }

    pub fn active(&self) -> ThemeKind {
        self.active
    }

    pub fn current_bundle(&self) -> &'static ThemeBundle {
        self.active.bundle()
    }

    /// Bundle for the one page region that never follows the active
    /// selection (the booking section).
    pub fn pinned_baseline_bundle() -> &'static ThemeBundle {
        Self::BASELINE.bundle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_is_complete() {
        for kind in ThemeKind::ALL {
            let bundle = kind.bundle();
            for (field, value) in [
                ("background", bundle.background),
                ("gradient_text", bundle.gradient_text),
                ("button_primary", bundle.button_primary),
                ("card", bundle.card),
                ("card_hover", bundle.card_hover),
                ("border", bundle.border),
                ("accent_text", bundle.accent_text),
                ("link_hover", bundle.link_hover),
                ("heading", bundle.heading),
                ("body_text", bundle.body_text),
                ("reset_control", bundle.reset_control),
                ("base_color", bundle.base_color),
            ] {
                assert!(!value.is_empty(), "{} has an empty {field}", kind.key());
            }
            for glow in [&bundle.glow_primary, &bundle.glow_secondary] {
                assert!(!glow.rgb.is_empty());
                assert!(glow.intensity >= 0.0 && glow.intensity <= 1.0);
            }
            assert!(bundle.ember_opacity >= 0.0 && bundle.ember_opacity <= 1.0);
            assert!(
                parse_hex(bundle.base_color).is_some(),
                "{} base_color is not a hex color",
                kind.key()
            );
        }
    }

    #[test]
    fn keys_round_trip_through_the_catalog() {
        for kind in ThemeKind::ALL {
            assert_eq!(ThemeKind::from_key(kind.key()), Ok(kind));
            let mut engine = ThemeEngine::default();
            engine.select(kind.key()).unwrap();
            assert_eq!(engine.current_bundle(), kind.bundle());
        }
    }

    #[test]
    fn unknown_key_is_rejected_and_leaves_selection_unchanged() {
        let mut engine = ThemeEngine::default();
        engine.select("neon").unwrap();
        let before = engine.current_bundle();

        let err = engine.select("not-a-real-theme").unwrap_err();
        assert_eq!(err, ThemeError::UnknownThemeKind("not-a-real-theme".into()));
        assert_eq!(engine.current_bundle(), before);
        assert_eq!(engine.active(), ThemeKind::Neon);
    }

    #[test]
    fn reset_returns_to_the_baseline_after_any_selection() {
        let mut engine = ThemeEngine::default();
        engine.select("neon").unwrap();
        engine.select("pastel").unwrap();
        engine.reset();
        assert_eq!(engine.current_bundle(), ThemeEngine::pinned_baseline_bundle());
        assert_eq!(engine.active(), ThemeEngine::BASELINE);
    }

    #[test]
    fn pinned_bundle_ignores_the_active_selection() {
        let pinned = ThemeEngine::pinned_baseline_bundle();
        for kind in ThemeKind::ALL {
            let mut engine = ThemeEngine::default();
            engine.select(kind.key()).unwrap();
            assert_eq!(ThemeEngine::pinned_baseline_bundle(), pinned);
        }
        assert_eq!(pinned, ThemeKind::Original.bundle());
    }

    #[test]
    fn reselecting_the_active_theme_is_idempotent() {
        let mut engine = ThemeEngine::default();
        engine.select("mono").unwrap();
        let before = engine.clone();
        engine.select("mono").unwrap();
        assert_eq!(engine, before);
    }

    #[test]
    fn tint_blends_from_the_base_color() {
        assert_eq!(ThemeKind::Original.bundle().tint(0.5), "rgba(255, 107, 44, 0.5)");
        let odd = ThemeBundle { base_color: "nope", ..ThemeKind::Mono.bundle().clone() };
        assert_eq!(odd.tint(0.3), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn every_theme_has_gallery_metadata() {
        for kind in ThemeKind::ALL {
            assert!(!kind.label().is_empty());
            assert!(!kind.tagline().is_empty());
            assert!(!kind.preview_css().is_empty());
            assert!(kind.swatches().iter().all(|s| parse_hex(s).is_some()));
        }
    }
}
