// Generation and scoring properties over arbitrary inputs.

use hf_color::Color;
use hf_palette::score::score_palette;
use hf_palette::{
    ColorBlindnessMode, GenerationConstraints, HarmonyMode, Mood, contrast_ratio, generate,
    generate_bridge_color, generate_locked, simulate,
};
use proptest::prelude::*;
use proptest::sample::select;

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(Color::from)
}

fn any_mode() -> impl Strategy<Value = HarmonyMode> {
    select(HarmonyMode::all().to_vec())
}

fn any_mood() -> impl Strategy<Value = Mood> {
    select(Mood::all().to_vec())
}

proptest! {
    #[test]
    fn contrast_is_symmetric_and_bounded(a in any_color(), b in any_color()) {
        let ab = contrast_ratio(a, b);
        prop_assert!((ab - contrast_ratio(b, a)).abs() < 1e-12);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ab), "{ab}");
    }

    #[test]
    fn generated_length_matches_request(
        count in 2usize..=8,
        mode in any_mode(),
        mood in any_mood(),
        dark in any::<bool>(),
        seed in any::<u32>(),
    ) {
        let constraints = GenerationConstraints::default()
            .with_mode(mode)
            .with_mood(mood)
            .with_dark_mode(dark)
            .with_seed(seed);
        prop_assert_eq!(generate(count, &constraints).unwrap().len(), count);
    }

    #[test]
    fn unlocked_palettes_stay_in_band_and_meet_reachable_floors(
        count in 2usize..=8,
        mode in any_mode(),
        mood in any_mood(),
        dark in any::<bool>(),
        floor in 1.0f64..=4.5,
        seed in any::<u32>(),
    ) {
        let constraints = GenerationConstraints::default()
            .with_mode(mode)
            .with_mood(mood)
            .with_dark_mode(dark)
            .with_min_contrast(floor)
            .with_seed(seed);
        let band = mood.lightness_for(dark);
        let palette = generate(count, &constraints).unwrap();
        for color in &palette {
            let l = color.to_hsl().l;
            prop_assert!(l >= band.lo - 0.5 && l <= band.hi + 0.5, "{color} l={l} in {palette}");
        }
        for w in palette.colors().windows(2) {
            let ratio = contrast_ratio(w[0], w[1]);
            if ratio < floor {
                // Only allowed when neither band edge clears the floor either.
                let hsl = w[1].to_hsl();
                for l in [band.lo, band.hi] {
                    let edge = Color::from_hsl(hsl.with_lightness(l));
                    prop_assert!(contrast_ratio(edge, w[0]) < floor + 0.1, "{ratio} < {floor} in {palette}");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_palette(count in 2usize..=8, mode in any_mode(), seed in any::<u32>()) {
        let constraints = GenerationConstraints::default().with_mode(mode).with_seed(seed);
        prop_assert_eq!(
            generate(count, &constraints).unwrap(),
            generate(count, &constraints).unwrap()
        );
    }

    #[test]
    fn locked_colors_stay_put(
        locked in any_color(),
        index in 0usize..5,
        seed in any::<u32>(),
    ) {
        let mut slots = vec![None; 5];
        slots[index] = Some(locked);
        let constraints = GenerationConstraints::default().with_seed(seed);
        let palette = generate_locked(&slots, &constraints).unwrap();
        prop_assert_eq!(palette.get(index), Some(locked));
    }

    #[test]
    fn normal_vision_is_identity(c in any_color()) {
        prop_assert_eq!(simulate(c, ColorBlindnessMode::Normal), c);
    }

    #[test]
    fn bridge_is_between_in_lightness(a in any_color(), b in any_color()) {
        let (la, lb) = (a.to_hsl().l, b.to_hsl().l);
        let l = generate_bridge_color(a, b).to_hsl().l;
        prop_assert!(l >= la.min(lb) - 0.5 && l <= la.max(lb) + 0.5, "{la} {lb} -> {l}");
    }

    #[test]
    fn score_components_in_range(a in any_color(), b in any_color(), c in any_color()) {
        let palette = hf_palette::Palette::new(vec![a, b, c]).unwrap();
        let s = score_palette(&palette);
        prop_assert!((0.0..=100.0).contains(&s.harmony));
        prop_assert!((0.0..=100.0 + 1e-9).contains(&s.accessibility));
        prop_assert!((0.0..=100.0).contains(&s.total));
    }
}
