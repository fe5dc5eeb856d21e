use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn luminance(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    pub fn grayscale(&self) -> Color {
        let l = self.luminance();
        Color::new(l, l, l)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPair {
    pub a: Color,
    pub b: Color,
}

impl GradientPair {
    pub fn new(a: Color, b: Color) -> Self {
        Self { a, b }
    }

    pub fn grayscale(&self) -> GradientPair {
        GradientPair { a: self.a.grayscale(), b: self.b.grayscale() }
    }
}

/// Curated brand swatches the session gradient is drawn from.
const SWATCHES: [u32; 10] = [
    0x2ca8e0, 0x365de5, 0x7b4fff, 0xa639e6, 0xe553a0, 0xff4e4e, 0xff8c39, 0xffc41e, 0x8ced5e,
    0x32c5a2,
];

/// Per-session color scheme, picked once at startup and injected where
/// needed instead of living in process-wide statics.
#[derive(Debug, Clone, Copy)]
pub struct SessionColorScheme {
    session_gradient: GradientPair,
    grayscale_session_gradient: GradientPair,
}

impl SessionColorScheme {
    /// Pick a random pair of distinct swatches for this session.
    pub fn random(rng: &mut impl Rng) -> Self {
        let first = rng.gen_range(0..SWATCHES.len());
        let mut second = rng.gen_range(0..SWATCHES.len() - 1);
        if second >= first {
            second += 1;
        }
        let session_gradient =
            GradientPair::new(Color::from_hex(SWATCHES[first]), Color::from_hex(SWATCHES[second]));
        Self { session_gradient, grayscale_session_gradient: session_gradient.grayscale() }
    }

    pub fn session_gradient(&self) -> GradientPair {
        self.session_gradient
    }

    pub fn grayscale_session_gradient(&self) -> GradientPair {
        self.grayscale_session_gradient
    }
}
