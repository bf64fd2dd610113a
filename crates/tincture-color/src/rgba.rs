//! The notation-independent color representation.
//!
//! Every complete color converts to an [`Rgba`]: sRGB channels in
//! `0.0..=255.0` and alpha in `0.0..=1.0`. Channels are kept unclamped so
//! out-of-gamut Lab/LCH values survive until they are serialized.

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from channels in `0..=255` and alpha in `0..=1`.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channels.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f64, g as f64, b as f64, a as f64 / 255.0)
    }

    /// Create a color from HSL: hue in degrees, saturation and lightness in
    /// percent.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let (r, g, b) = hsl_to_unit_rgb(
            normalize_hue(hue),
            (saturation / 100.0).clamp(0.0, 1.0),
            (lightness / 100.0).clamp(0.0, 1.0),
        );
        Self::new(r * 255.0, g * 255.0, b * 255.0, alpha)
    }

    /// Create a color from HWB: hue in degrees, whiteness and blackness in
    /// percent.
    pub fn from_hwb(hue: f64, whiteness: f64, blackness: f64, alpha: f64) -> Self {
        let w = (whiteness / 100.0).clamp(0.0, 1.0);
        let b = (blackness / 100.0).clamp(0.0, 1.0);
        if w + b >= 1.0 {
            let gray = w / (w + b) * 255.0;
            return Self::new(gray, gray, gray, alpha);
        }

        let (r, g, bl) = hsl_to_unit_rgb(normalize_hue(hue), 1.0, 0.5);
        let scale = 1.0 - w - b;
        Self::new(
            (r * scale + w) * 255.0,
            (g * scale + w) * 255.0,
            (bl * scale + w) * 255.0,
            alpha,
        )
    }

    /// Create a color from CIE Lab (D50 white point): lightness in percent,
    /// `a` and `b` unbounded.
    pub fn from_lab(lightness: f64, a: f64, b: f64, alpha: f64) -> Self {
        let (x, y, z) = lab_to_xyz_d50(lightness, a, b);
        let (x, y, z) = xyz_d50_to_d65(x, y, z);
        let (r, g, b) = xyz_d65_to_linear_srgb(x, y, z);
        Self::new(
            linear_to_srgb(r) * 255.0,
            linear_to_srgb(g) * 255.0,
            linear_to_srgb(b) * 255.0,
            alpha,
        )
    }

    /// Create a color from CIE LCH: lightness in percent, chroma unbounded,
    /// hue in degrees.
    pub fn from_lch(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Self {
        let hue = hue.to_radians();
        Self::from_lab(lightness, chroma * hue.cos(), chroma * hue.sin(), alpha)
    }

    /// Clamp and round to 8-bit channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f64| v.clamp(0.0, 255.0).round() as u8;
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Check if the color is fully opaque at 8-bit precision.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.to_rgba8()[3] == 255
    }

    /// Serialize as lowercase `#rrggbb`, or `#rrggbbaa` when translucent.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Compare two colors at 8-bit precision.
    pub fn same_color(&self, other: &Rgba) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }
}

fn normalize_hue(hue: f64) -> f64 {
    let hue = hue % 360.0;
    if hue < 0.0 { hue + 360.0 } else { hue }
}

/// HSL to RGB with every component in `0..=1` and hue in degrees.
fn hsl_to_unit_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    let h = hue / 360.0;

    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn lab_to_xyz_d50(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    const EPSILON: f64 = 216.0 / 24389.0;
    const KAPPA: f64 = 24389.0 / 27.0;
    const XN: f64 = 0.96422;
    const YN: f64 = 1.0;
    const ZN: f64 = 0.82521;

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let fx3 = fx * fx * fx;
    let fz3 = fz * fz * fz;

    let xr = if fx3 > EPSILON { fx3 } else { (116.0 * fx - 16.0) / KAPPA };
    let yr = if l > KAPPA * EPSILON { fy * fy * fy } else { l / KAPPA };
    let zr = if fz3 > EPSILON { fz3 } else { (116.0 * fz - 16.0) / KAPPA };

    (xr * XN, yr * YN, zr * ZN)
}

/// Bradford chromatic adaptation from D50 to D65.
fn xyz_d50_to_d65(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    (
        0.9555766 * x - 0.0230393 * y + 0.0631636 * z,
        -0.0282895 * x + 1.0099416 * y + 0.0210077 * z,
        0.0122982 * x - 0.0204830 * y + 1.3299098 * z,
    )
}

fn xyz_d65_to_linear_srgb(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    (
        3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
        -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
        0.0556434 * x - 0.2040259 * y + 1.0572252 * z,
    )
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
