//! Domain-critical regression tests for color-harmony.
//!
//! These tests sweep large parts of the color cube rather than a few hand
//! picked values. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::color::{Color, Hsl};
    use crate::harmony::{harmony, HarmonyScheme};
    use crate::random::random_color_with;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    fn channel_error(a: Color, b: Color) -> u8 {
        let [ar, ag, ab] = a.to_bytes();
        let [br, bg, bb] = b.to_bytes();
        ar.abs_diff(br).max(ag.abs_diff(bg)).max(ab.abs_diff(bb))
    }

    // ========================================================================
    // GAP 1: HSL round trip
    // ========================================================================

    /// If this breaks, it means: the HSL forward or inverse conversion lost
    /// its branch structure (saturation formula switch at l = 0.5, hue
    /// sextant selection, or the +6 wrap for red-max colors), so harmony
    /// output drifts away from the base saturation and lightness.
    #[test]
    fn test_hsl_round_trip_sweep() {
        let mut max_error = 0u8;
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let original = Color::new(r, g, b);
                    let back = Color::from(Hsl::from(original));
                    let error = channel_error(original, back);
                    max_error = max_error.max(error);
                    assert!(
                        error <= 1,
                        "REGRESSION: {original} round-tripped through HSL to {back}"
                    );
                }
            }
        }
        assert!(max_error <= 1, "max round-trip error {max_error}");
    }

    /// If this breaks, it means: the HSL conversion disagrees with an
    /// independent implementation.
    #[test]
    fn test_hsl_matches_palette_crate() {
        use palette::{Hsl as PaletteHsl, IntoColor, Srgb as PaletteSrgb};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let color = random_color_with(&mut rng);
            let [r, g, b] = color.to_unit();
            let theirs: PaletteHsl<palette::encoding::Srgb, f64> =
                PaletteSrgb::new(r, g, b).into_color();
            let ours = Hsl::from(color);

            assert!((ours.s - theirs.saturation).abs() < 1e-6, "{color}: saturation");
            assert!((ours.l - theirs.lightness).abs() < 1e-6, "{color}: lightness");
            if ours.s > 0.0 {
                let their_hue = theirs.hue.into_positive_degrees();
                assert!(
                    hue_distance(ours.h, their_hue) < 1e-6,
                    "{color}: hue ours={} palette={their_hue}",
                    ours.h
                );
            }
        }
    }

    // ========================================================================
    // GAP 2: Harmony geometry
    // ========================================================================

    /// If this breaks, it means: complementary output no longer sits on the
    /// opposite side of the hue circle, or rotation changed saturation or
    /// lightness beyond 8-bit rounding.
    #[test]
    fn test_complementary_is_half_turn() {
        let mut rng = StdRng::seed_from_u64(180);
        for _ in 0..500 {
            let base = random_color_with(&mut rng);
            let base_hsl = base.to_hsl();
            let colors = harmony(base, HarmonyScheme::Complementary);

            assert_eq!(colors.len(), 2);
            assert_eq!(colors[0], base);

            // Low-saturation colors have a hue that 8-bit rounding can move
            // arbitrarily; only check geometry where the hue is meaningful.
            if base_hsl.s < 0.3 || base_hsl.l < 0.2 || base_hsl.l > 0.8 {
                continue;
            }
            let other = colors[1].to_hsl();
            let distance = hue_distance(base_hsl.h, other.h);
            assert!(
                (distance - 180.0).abs() < 3.0,
                "{base} -> {}: hue distance {distance}",
                colors[1]
            );
            assert!((other.l - base_hsl.l).abs() < 0.01, "{base}: lightness drifted");
        }
    }

    /// If this breaks, it means: triadic output lost its ordering (must be
    /// base, +120, +240) or its spacing.
    #[test]
    fn test_triadic_is_ordered_third_turns() {
        let mut rng = StdRng::seed_from_u64(120);
        for _ in 0..500 {
            let base = random_color_with(&mut rng);
            let base_hsl = base.to_hsl();
            if base_hsl.s < 0.3 || base_hsl.l < 0.2 || base_hsl.l > 0.8 {
                continue;
            }

            let colors = harmony(base, HarmonyScheme::Triadic);
            assert_eq!(colors.len(), 3);
            for (i, color) in colors.iter().enumerate() {
                let expected = (base_hsl.h + 120.0 * i as f64).rem_euclid(360.0);
                let actual = color.to_hsl().h;
                assert!(
                    hue_distance(actual, expected) < 3.0,
                    "{base}: color {i} hue {actual}, expected {expected}"
                );
            }
        }
    }

    /// If this breaks, it means: a harmony scheme produced the wrong number
    /// of colors or dropped the base color from its expected position.
    #[test]
    fn test_base_position_per_scheme() {
        let base: Color = "#10b981".parse().unwrap();
        let expected_index = [
            (HarmonyScheme::Complementary, 0),
            (HarmonyScheme::Analogous, 1),
            (HarmonyScheme::Triadic, 0),
            (HarmonyScheme::SplitComplementary, 0),
            (HarmonyScheme::Tetradic, 0),
            (HarmonyScheme::Monochromatic, 2),
        ];
        for (scheme, index) in expected_index {
            let colors = harmony(base, scheme);
            assert_eq!(colors.len(), scheme.color_count(), "{scheme}");
            assert_eq!(colors[index], base, "{scheme}: base not at {index}");
        }
    }

    // ========================================================================
    // GAP 3: Contrast text
    // ========================================================================

    /// If this breaks, it means: the text color no longer maximizes contrast
    /// for the extremes of the cube.
    #[test]
    fn test_contrast_text_extremes() {
        assert_eq!(Color::WHITE.contrast_text(), Color::BLACK);
        assert_eq!(Color::BLACK.contrast_text(), Color::WHITE);
        for v in 0..=255u8 {
            let grey = Color::new(v, v, v);
            let text = grey.contrast_text();
            assert!(text == Color::BLACK || text == Color::WHITE);
        }
    }
}
