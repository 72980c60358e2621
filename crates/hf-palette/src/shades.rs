//! Lightness ramps and bridge colors.

use hf_color::Color;
use hf_color::space::interpolate_hue;

/// Lightness of the darkest step in a ramp (percent).
pub const SHADE_MIN_LIGHTNESS: f64 = 5.0;
/// Lightness of the lightest step in a ramp (percent).
pub const SHADE_MAX_LIGHTNESS: f64 = 95.0;

/// Saturation below which a color's hue carries no information.
const ACHROMATIC_SATURATION: f64 = 0.5;

/// Generate `n` colors sharing `base`'s hue and saturation, with
/// lightness stepping evenly from dark to light.
///
/// Lightness runs from 5% to 95%, so the ramp never collapses into pure
/// black or white. A single step sits at 50%; `n == 0` yields nothing.
#[must_use]
pub fn generate_shades(base: Color, n: usize) -> Vec<Color> {
    let hsl = base.to_hsl();
    match n {
        0 => Vec::new(),
        1 => vec![Color::from_hsl(hsl.with_lightness(50.0))],
        _ => {
            let step = (SHADE_MAX_LIGHTNESS - SHADE_MIN_LIGHTNESS) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let l = (i as f64).mul_add(step, SHADE_MIN_LIGHTNESS);
                    Color::from_hsl(hsl.with_lightness(l))
                })
                .collect()
        }
    }
}

/// The color halfway between `a` and `b` in HSL.
///
/// Hue travels the shorter way around the wheel (350° and 10° meet at
/// 0°, not 180°). A gray endpoint has no meaningful hue, so the other
/// endpoint's hue is used. Saturation and lightness are averaged.
#[must_use]
pub fn generate_bridge_color(a: Color, b: Color) -> Color {
    let ha = a.to_hsl();
    let hb = b.to_hsl();

    let h = match (ha.s < ACHROMATIC_SATURATION, hb.s < ACHROMATIC_SATURATION) {
        (true, false) => hb.h,
        (false, true) | (true, true) => ha.h,
        (false, false) => interpolate_hue(ha.h, hb.h, 0.5),
    };

    Color::hsl(h, (ha.s + hb.s) / 2.0, (ha.l + hb.l) / 2.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hf_color::space::hue_diff;

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    // ── Shades ──────────────────────────────────────────────────────

    #[test]
    fn shades_count() {
        for n in 0..12 {
            assert_eq!(generate_shades(hex("#2563EB"), n).len(), n);
        }
    }

    #[test]
    fn shades_ascend_in_lightness() {
        let shades = generate_shades(hex("#2563EB"), 9);
        for w in shades.windows(2) {
            assert!(w[0].to_hsl().l < w[1].to_hsl().l, "{} !< {}", w[0], w[1]);
        }
    }

    #[test]
    fn shades_avoid_pure_black_and_white() {
        let shades = generate_shades(hex("#E63946"), 5);
        assert_ne!(shades[0], Color::BLACK);
        assert_ne!(shades[4], Color::WHITE);
        assert!((shades[0].to_hsl().l - SHADE_MIN_LIGHTNESS).abs() < 0.5);
        assert!((shades[4].to_hsl().l - SHADE_MAX_LIGHTNESS).abs() < 0.5);
    }

    #[test]
    fn shades_keep_hue() {
        let base = hex("#10B981");
        let h = base.to_hsl().h;
        for shade in generate_shades(base, 7) {
            assert!(hue_diff(shade.to_hsl().h, h) < 4.0, "{shade}");
        }
    }

    #[test]
    fn single_shade_is_mid_lightness() {
        let shade = generate_shades(hex("#10B981"), 1)[0];
        assert!((shade.to_hsl().l - 50.0).abs() < 0.5);
    }

    // ── Bridge ──────────────────────────────────────────────────────

    #[test]
    fn bridge_black_white_is_mid_gray() {
        let mid = generate_bridge_color(Color::BLACK, Color::WHITE);
        let hsl = mid.to_hsl();
        assert!((hsl.l - 50.0).abs() < 0.5, "{mid}");
        assert!(hsl.s < 0.5, "{mid}");
    }

    #[test]
    fn bridge_wraps_through_red() {
        let a = Color::hsl(350.0, 80.0, 50.0);
        let b = Color::hsl(10.0, 80.0, 50.0);
        let h = generate_bridge_color(a, b).to_hsl().h;
        assert!(hue_diff(h, 0.0) < 2.0, "went the long way: {h}");
    }

    #[test]
    fn bridge_is_symmetric_in_lightness() {
        let a = hex("#1D3557");
        let b = hex("#A8DADC");
        let ab = generate_bridge_color(a, b).to_hsl();
        let ba = generate_bridge_color(b, a).to_hsl();
        assert!((ab.l - ba.l).abs() < 0.5);
        assert!(hue_diff(ab.h, ba.h) < 2.0);
    }

    #[test]
    fn bridge_to_gray_keeps_color_hue() {
        let red = Color::hsl(0.0, 90.0, 50.0);
        let gray = hex("#808080");
        let h = generate_bridge_color(gray, red).to_hsl().h;
        assert!(hue_diff(h, 0.0) < 2.0, "{h}");
    }
}
