//! End-to-end color conversion tests.

use approx::assert_abs_diff_eq;
use tricolor_color::prelude::*;
use tricolor_color::registry::names;

fn space(name: &str) -> ColorSpace {
    ColorSpace::named(name).unwrap()
}

fn mauve() -> Color {
    Color::new(Vec3::new(0.5, 0.25, 0.125), space(names::LIN_REC709))
}

fn lin_ap0_d65() -> ColorSpace {
    ColorSpace::from_primaries(
        "lin_ap0_d65",
        ACES_AP0.r,
        ACES_AP0.g,
        ACES_AP0.b,
        D65_XY,
        TransferFunction::Linear,
    )
    .unwrap()
}

#[test]
fn default_construction() {
    let c = Color::default();
    assert_eq!(c.space(), &space(names::LIN_REC709));
    assert_eq!(c.rgb(), Vec3::ZERO);

    let c = Color::black(space(names::SRGB));
    assert_eq!(c.space(), &space(names::SRGB));
    assert_eq!(c.rgb(), Vec3::ZERO);

    let c = Color::new(Vec3::splat(0.5), space(names::SRGB));
    assert_eq!(c.rgb(), Vec3::splat(0.5));
}

#[test]
fn curve_roundtrip() {
    let c1 = mauve().convert(&space(names::SRGB));
    let c2 = c1.convert(&space(names::LIN_SRGB));
    assert!(c2.is_close(&mauve(), 1e-7));
    let c3 = c2.convert(&space(names::SRGB));
    assert!(c3.is_close(&c1, 1e-7));
}

#[test]
fn rec2020_roundtrip() {
    let c1 = mauve().convert(&space(names::LIN_REC2020));
    let c2 = c1.convert(&space(names::LIN_SRGB));
    assert!(c2.is_close(&mauve(), 1e-7));
}

#[test]
fn every_preset_roundtrips() {
    let start = mauve();
    for cs in ColorSpaceRegistry::global().iter() {
        let there = start.convert(cs);
        let back = there.convert(start.space());
        assert!(back.is_close(&start, 1e-7), "{} -> {back}", cs.name());
    }
}

#[test]
fn chromaticity_under_curve_and_white_changes() {
    let gamma = mauve().convert(&space(names::G22_REC709));
    let c1 = mauve().convert(&space(names::SRGB));
    let c2 = c1.convert(&space(names::LIN_AP0));
    let c2_d65 = c2.convert(&lin_ap0_d65());

    let chr1 = mauve().chromaticity();
    let chr2 = gamma.chromaticity();
    let chr3 = c1.chromaticity();
    let chr4 = c2.chromaticity();
    let chr5 = c2_d65.chromaticity();

    // Curve changes never move chromaticity.
    assert!(chr1.is_close(&chr2, 1e-5));
    assert!(chr1.is_close(&chr3, 1e-5));

    // White point changes move it, within bounds.
    assert!(chr4.is_close(&chr5, 1e-2));
    assert!(chr1.is_close(&chr4, 5e-2));
    assert!(chr1.is_close(&chr5, 2e-2));

    // Same white as the source: no drift at all.
    assert!(chr1.is_close(&chr5, 1e-9));
}

#[test]
fn adaptation_chain() {
    let g22 = mauve().convert(&space(names::G22_REC709));
    let lin = g22.convert(&space(names::LIN_REC709));
    assert!(lin.is_close(&mauve(), 1e-7));
    assert_eq!(g22.space().name(), names::G22_REC709);

    let srgb = lin.convert(&space(names::SRGB));
    let xy1 = g22.chromaticity();
    assert!(xy1.is_close(&srgb.chromaticity(), 1e-5));

    let ap0 = srgb.convert(&space(names::LIN_AP0));
    assert!(xy1.is_close(&ap0.chromaticity(), 3e-2));
    let srgb_again = ap0.convert(&space(names::SRGB));
    let p3 = srgb_again.convert(&space(names::SRGB_DISPLAY_P3));
    assert!(xy1.is_close(&p3.chromaticity(), 3e-2));

    let home = p3.convert(&space(names::LIN_REC709));
    assert!(home.is_close(&lin, 1e-7));
}

#[test]
fn adaptation_methods_agree_on_white() {
    let white = Color::new(Vec3::ONE, space(names::LIN_REC709));
    for method in AdaptationMethod::ALL {
        let aces = white.convert_with(&space(names::ACESCG), method);
        assert!(aces.rgb().is_close(&Vec3::ONE, 1e-9), "{method:?}");
    }
    let red = Color::new(Vec3::X, space(names::LIN_REC709));
    let bradford = red.convert_with(&space(names::ACESCG), AdaptationMethod::Bradford);
    let scaling = red.convert_with(&space(names::ACESCG), AdaptationMethod::XyzScaling);
    assert!(!bradford.is_close(&scaling, 1e-6));
}

#[test]
fn spaces_from_primaries() {
    for name in [
        names::SRGB,
        names::LIN_SRGB,
        names::LIN_REC709,
        names::G22_REC709,
        names::LIN_AP0,
        names::SRGB_DISPLAY_P3,
        names::LIN_REC2020,
    ] {
        assert!(space(name).is_constructed_from_primaries(), "{name}");
    }
    assert!(lin_ap0_d65().is_constructed_from_primaries());
}

#[test]
fn space_inequality() {
    let srgb = space(names::SRGB);
    for name in [
        names::LIN_SRGB,
        names::LIN_REC709,
        names::G22_REC709,
        names::LIN_AP0,
        names::SRGB_DISPLAY_P3,
        names::LIN_REC2020,
    ] {
        assert_ne!(srgb, space(name), "{name}");
    }
    assert_ne!(srgb, lin_ap0_d65());
    assert_ne!(space(names::LIN_AP0), lin_ap0_d65());
}

#[test]
fn blackbody_6500k_is_near_d65() {
    let white = Color::new(Vec3::ONE, space(names::LIN_REC709)).chromaticity();
    let mut c = Color::default();
    c.set_from_blackbody_kelvin(6500.0, 1.0);
    assert!(c.chromaticity().is_close(&white, 1e-2));
}

#[test]
fn primaries_are_unit_vectors() {
    let sets = [
        (space(names::LIN_AP0), ACES_AP0),
        (space(names::LIN_REC2020), REC2020),
        (space(names::LIN_REC709), REC709),
    ];
    for (cs, p) in sets {
        for (xy, unit) in [(p.r, Vec3::X), (p.g, Vec3::Y), (p.b, Vec3::Z)] {
            let mut c = Color::black(cs.clone());
            c.set_from_xy(xy);
            assert!(c.is_close(&Color::new(unit, cs.clone()), 1e-5), "{c}");
        }
    }
}

fn gamut_of(cs: &ColorSpace) -> Primaries {
    let xy = |rgb| Color::new(rgb, cs.clone()).chromaticity();
    Primaries::new(xy(Vec3::X), xy(Vec3::Y), xy(Vec3::Z), cs.white_point())
}

// Edges count as inside: Rec.2020 red lies on the AP0 red-green edge.
fn inside(gamut: &Primaries, xy: Vec2) -> bool {
    gamut
        .barycentric(xy)
        .is_some_and(|w| (0..3).all(|i| (-1e-9..=1.0 + 1e-9).contains(&w[i])))
}

#[test]
fn narrower_primaries_lie_inside_wider_gamuts() {
    let rec709 = gamut_of(&space(names::LIN_REC709));
    let rec2020 = gamut_of(&space(names::LIN_REC2020));
    let ap0 = gamut_of(&space(names::LIN_AP0));

    for p in [rec709.r, rec709.g, rec709.b] {
        assert!(inside(&rec2020, p));
        assert!(inside(&ap0, p));
    }
    for p in [rec2020.r, rec2020.g, rec2020.b] {
        assert!(inside(&ap0, p));
    }
    assert!(!inside(&rec709, rec2020.g));
}

#[test]
fn d65_inside_standard_gamuts() {
    for p in [REC709, REC2020, ACES_AP0] {
        let w = p.barycentric(D65_XY).unwrap();
        assert_abs_diff_eq!(w.sum(), 1.0, epsilon = 1e-12);
        assert!((0..3).all(|i| (0.0..=1.0).contains(&w[i])));
    }
}

#[test]
fn out_of_gamut_is_preserved() {
    let green = Color::new(Vec3::Y, space(names::LIN_REC2020));
    let narrow = green.convert(&space(names::LIN_REC709));
    assert!(narrow.rgb().x < 0.0);
    assert!(narrow.convert(green.space()).is_close(&green, 1e-7));
}

#[test]
fn buffers_match_single_colors() {
    let srgb = space(names::SRGB);
    let acescg = space(names::ACESCG);
    let mut rgb = vec![0.5, 0.25, 0.125, 1.0, 0.0, 0.0];
    srgb.convert_rgb(&acescg, &mut rgb).unwrap();

    let single = Color::new(Vec3::new(0.5, 0.25, 0.125), srgb.clone()).convert(&acescg);
    assert_eq!(&rgb[..3], &single.rgb().to_array());

    let mut rgba = vec![0.5, 0.25, 0.125, 0.5];
    srgb.convert_rgba(&acescg, &mut rgba).unwrap();
    assert_eq!(&rgba[..3], &rgb[..3]);
    assert_eq!(rgba[3], 0.5);

    assert!(matches!(
        srgb.convert_rgba(&acescg, &mut rgb),
        Err(ColorError::InvalidBuffer { len: 6, channels: 4 })
    ));
}

#[test]
fn registry_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let r = ColorSpaceRegistry::global();
                (r as *const ColorSpaceRegistry as usize, r.len())
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn custom_gamma_space() {
    let custom = ColorSpace::from_gamma("my_g22", REC709.r, REC709.g, REC709.b, D65_XY, 2.2, 0.0).unwrap();
    assert_eq!(custom, space(names::G22_REC709));
    assert_eq!(custom.name(), "my_g22");

    let c = Color::new(Vec3::splat(0.5), custom.clone());
    assert_eq!(c.convert(&space(names::G22_REC709)).rgb(), Vec3::splat(0.5));
}

#[cfg(feature = "serde")]
#[test]
fn definition_serde_roundtrip() {
    use tricolor_color::Definition;

    let def = *space(names::LIN_AP0).definition();
    let json = serde_json::to_string(&def).unwrap();
    let back: Definition = serde_json::from_str(&json).unwrap();
    assert_eq!(def, back);
}
