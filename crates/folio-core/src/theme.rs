//! Light/dark mode and color palettes shared by every decorative component.
//!
//! The store is the only write path. Components call [`ThemeStore::subscribe`]
//! and receive a copy of the new [`ThemeState`] after each effective change;
//! they never get a handle that could mutate it.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string, e.g. `rgba(148, 163, 184, 0.2)`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Comma separated channels as used by `--primary-rgb`.
    pub fn channels(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }
}

#[derive(Debug, PartialEq)]
pub struct Palette {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: Rgba,
    /// Light accent used for the hero dots.
    pub primary_300: Rgba,
    pub primary_400: Rgba,
    pub primary_600: Rgba,
    pub secondary: Rgba,
    pub secondary_400: Rgba,
    pub aurora: [Rgba; 3],
}

impl Palette {
    /// CSS custom properties applied to the document root.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--primary-rgb", self.primary.channels()),
            ("--primary-400", self.primary_400.hex()),
            ("--primary-500", self.primary.hex()),
            ("--primary-600", self.primary_600.hex()),
            ("--secondary-400", self.secondary_400.hex()),
            ("--secondary-500", self.secondary.hex()),
            ("--aurora-1", self.aurora[0].hex()),
            ("--aurora-2", self.aurora[1].hex()),
            ("--aurora-3", self.aurora[2].hex()),
        ]
    }
}

pub static PALETTES: [Palette; 4] = [
    Palette {
        id: "cosmic",
        name: "Cosmic",
        primary: Rgba::rgb(99, 102, 241),
        primary_300: Rgba::rgb(165, 180, 252),
        primary_400: Rgba::rgb(129, 140, 248),
        primary_600: Rgba::rgb(79, 70, 229),
        secondary: Rgba::rgb(168, 85, 247),
        secondary_400: Rgba::rgb(192, 132, 252),
        aurora: [
            Rgba::rgb(67, 56, 202),
            Rgba::rgb(124, 58, 237),
            Rgba::rgb(219, 39, 119),
        ],
    },
    Palette {
        id: "cyber",
        name: "Cyberpunk",
        primary: Rgba::rgb(34, 211, 238),
        primary_300: Rgba::rgb(165, 243, 252),
        primary_400: Rgba::rgb(103, 232, 249),
        primary_600: Rgba::rgb(6, 182, 212),
        secondary: Rgba::rgb(217, 70, 239),
        secondary_400: Rgba::rgb(232, 121, 249),
        aurora: [
            Rgba::rgb(14, 116, 144),
            Rgba::rgb(34, 197, 94),
            Rgba::rgb(217, 70, 239),
        ],
    },
    Palette {
        id: "sunset",
        name: "Sunset",
        primary: Rgba::rgb(244, 63, 94),
        primary_300: Rgba::rgb(253, 164, 175),
        primary_400: Rgba::rgb(251, 113, 133),
        primary_600: Rgba::rgb(225, 29, 72),
        secondary: Rgba::rgb(245, 158, 11),
        secondary_400: Rgba::rgb(251, 191, 36),
        aurora: [
            Rgba::rgb(190, 18, 60),
            Rgba::rgb(180, 83, 9),
            Rgba::rgb(124, 45, 18),
        ],
    },
    Palette {
        id: "royal",
        name: "Royal",
        primary: Rgba::rgb(234, 179, 8),
        primary_300: Rgba::rgb(253, 224, 71),
        primary_400: Rgba::rgb(250, 204, 21),
        primary_600: Rgba::rgb(202, 138, 4),
        secondary: Rgba::rgb(239, 68, 68),
        secondary_400: Rgba::rgb(248, 113, 113),
        aurora: [
            Rgba::rgb(133, 77, 14),
            Rgba::rgb(153, 27, 27),
            Rgba::rgb(30, 27, 75),
        ],
    },
];

pub fn palette_by_id(id: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub palette: &'static Palette,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            palette: &PALETTES[0],
        }
    }
}

/// Dot and line colors of a particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldColors {
    pub dot: Rgba,
    pub line: Rgba,
}

impl FieldColors {
    /// Background field: muted slate in dark mode, translucent indigo in light mode.
    pub fn ambient(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                dot: Rgba::rgba(148, 163, 184, 0.2),
                line: Rgba::rgba(148, 163, 184, 0.05),
            },
            ThemeMode::Light => Self {
                dot: Rgba::rgba(99, 102, 241, 0.5),
                line: Rgba::rgba(99, 102, 241, 0.15),
            },
        }
    }

    /// Hero field follows the palette accent: 300 shade dots, 400 shade lines.
    /// Dot alpha is overridden per frame by the pulse.
    pub fn hero(palette: &Palette) -> Self {
        Self {
            dot: palette.primary_300,
            line: palette.primary_400,
        }
    }
}

pub type SubscriptionId = u64;

type Subscriber = Box<dyn FnMut(&ThemeState)>;

#[derive(Default)]
pub struct ThemeStore {
    state: ThemeState,
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&ThemeState) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        if self.state.mode != mode {
            self.state.mode = mode;
            self.notify();
        }
    }

    pub fn toggle_mode(&mut self) -> ThemeMode {
        self.set_mode(self.state.mode.toggled());
        self.state.mode
    }

    /// Unknown ids leave the theme untouched.
    pub fn apply_palette(&mut self, id: &str) -> bool {
        let Some(palette) = palette_by_id(id) else {
            log::warn!("[theme] unknown palette {id}");
            return false;
        };
        if self.state.palette.id != palette.id {
            self.state.palette = palette;
            self.notify();
        }
        true
    }

    fn notify(&mut self) {
        let state = self.state;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&state);
        }
    }
}
