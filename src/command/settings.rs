//! Scene settings driven by terminal commands
//!
//! The renderer reads these every frame to colour the lamp, the screen
//! text and the sky, and to pick the body shown on the globe.

use serde::{Deserialize, Serialize};

/// Bodies the desk globe can show, in index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Moon,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Moon,
    ];

    /// Look up a body by its lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Earth => "earth",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::Moon => "moon",
        }
    }

    /// Position in the globe's texture list
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Sky colour and hemisphere light intensity for one time of day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPreset {
    pub color: u32,
    pub intensity: f32,
}

/// Daytime sky
pub const DAY_PRESET: SkyPreset = SkyPreset {
    color: 0xB1E1FF,
    intensity: 5.0,
};

/// Night sky
pub const NIGHT_PRESET: SkyPreset = SkyPreset {
    color: 0x222222,
    intensity: 0.5,
};

/// Settings mutated by commands and read by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Lamp light colour (0xRRGGBB)
    pub lamp_color: u32,
    /// Current lamp intensity; 0 while the lamp is off
    pub lamp_intensity: f32,
    /// Intensity restored by `lamp on`
    pub saved_intensity: f32,
    /// Monitor text colour (0xRRGGBB)
    pub screen_color: u32,
    pub sky_color: u32,
    pub sky_intensity: f32,
    pub is_night: bool,
    pub selected_body: Body,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lamp_color: 0xFFFFFF,
            lamp_intensity: 200.0,
            saved_intensity: 200.0,
            screen_color: 0xFF00FF,
            sky_color: DAY_PRESET.color,
            sky_intensity: DAY_PRESET.intensity,
            is_night: false,
            selected_body: Body::Earth,
        }
    }
}

impl Settings {
    pub fn selected_body_index(&self) -> usize {
        self.selected_body.index()
    }

    /// Turn the lamp off, remembering its intensity.
    ///
    /// Turning off a lamp that is already off keeps the remembered value.
    pub fn lamp_off(&mut self) {
        if self.lamp_intensity > 0.0 {
            self.saved_intensity = self.lamp_intensity;
        }
        self.lamp_intensity = 0.0;
    }

    /// Restore the remembered lamp intensity
    pub fn lamp_on(&mut self) {
        self.lamp_intensity = self.saved_intensity;
    }

    /// Switch to a sky preset
    pub fn set_sky(&mut self, preset: SkyPreset, night: bool) {
        self.sky_color = preset.color;
        self.sky_intensity = preset.intensity;
        self.is_night = night;
    }
}
