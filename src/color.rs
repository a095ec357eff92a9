// Color helpers shared by the scene composer, the legend and the renderer.
//
// Colors are authored in sRGB (hex literals and HSL hues) and converted to
// linear space before they reach the GPU.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal (sRGB, 0..1 per channel).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    /// HSL to sRGB. `h` is a fraction of the color wheel and wraps; `s`, `l` in [0, 1].
    /// Channel math is f64; hue 0 gives exactly (1, 0, 0).
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = (h as f64).rem_euclid(1.0);
        let s = (s as f64).clamp(0.0, 1.0);
        let l = (l as f64).clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::new(l as f32, l as f32, l as f32);
        }
        let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self {
            r: hue_to_channel(p, q, h + 1.0 / 3.0) as f32,
            g: hue_to_channel(p, q, h) as f32,
            b: hue_to_channel(p, q, h - 1.0 / 3.0) as f32,
        }
    }

    pub fn scale(self, k: f32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    pub fn to_linear(self) -> Self {
        Self::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        (c * 0.9478672986 + 0.0521327014).powf(2.4)
    }
}

/// Evenly spaced hue for entry `index` of `count`, as a fraction of the wheel.
#[inline]
pub fn hue_for_index(index: usize, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    }
}
