//! Parametric invariants across many source sizes and budgets.
//!
//! Each test collects every failure before asserting, so one run reports the
//! whole set of mismatches rather than the first.

use ressel::*;

fn gen_source_sizes() -> Vec<(u32, u32)> {
    let axes = [1, 2, 3, 7, 15, 16, 17, 100, 270, 480, 512, 576, 640, 720, 768, 854, 999, 1000, 1080, 1280, 1871, 1920, 3024, 4032];
    let mut sizes = Vec::new();
    for &w in &axes {
        for &h in &axes {
            sizes.push((w, h));
        }
    }
    sizes.extend([(1, 1_000_000), (1_000_000, 1), (16_384, 9), (9, 16_384)]);
    sizes
}

/// Brute-force reference: enumerate every aligned height, try the two
/// aligned widths bracketing the aspect, keep the strictly largest.
fn reference_search(w: u32, h: u32, max_pixels: u64, alignment: u32) -> (u32, u32) {
    let aspect = w as f64 / h as f64;
    let a = alignment as u64;
    let mut heights: Vec<u64> = (1..)
        .map(|k| k * a)
        .take_while(|&hh| (hh as f64) <= (max_pixels as f64 / aspect).sqrt())
        .collect();
    heights.reverse();

    let mut best = (0u64, 0u64, 0u64);
    for hh in heights {
        let down = ((aspect * hh as f64) / a as f64).floor() as u64 * a;
        for ww in [down, down + a] {
            let p = ww * hh;
            if ww > 0 && p <= max_pixels && p > best.2 {
                best = (ww, hh, p);
            }
        }
    }
    if best.2 == 0 {
        (alignment, alignment)
    } else {
        (best.0 as u32, best.1 as u32)
    }
}

#[test]
fn search_alignment_and_budget() {
    let mut failures = Vec::new();
    let budgets = [256, 257, 1000, 65_536, 230_400, DEFAULT_MAX_PIXELS, 921_600, MAX_MAX_PIXELS];
    for (w, h) in gen_source_sizes() {
        for &budget in &budgets {
            let r = match search_aligned(Dimensions::new(w, h), budget, 16) {
                Ok(r) => r,
                Err(e) => {
                    failures.push(format!("{w}x{h} @ {budget}: error {e:?}"));
                    continue;
                }
            };
            let d = r.dimensions;
            if !d.is_aligned(16) {
                failures.push(format!("{w}x{h} @ {budget}: {d} not 16-aligned"));
            }
            if r.pixels != d.pixel_count() {
                failures.push(format!("{w}x{h} @ {budget}: pixels {} != {}", r.pixels, d.pixel_count()));
            }
            if r.pixels > budget {
                failures.push(format!("{w}x{h} @ {budget}: {d} exceeds budget"));
            }
            if r.fallback && d != Dimensions::new(16, 16) {
                failures.push(format!("{w}x{h} @ {budget}: fallback produced {d}"));
            }
        }
    }
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn search_matches_brute_force_small_budgets() {
    let mut failures = Vec::new();
    for budget in [256u64, 1024, 4096, 10_000, 40_000, 65_536] {
        for (w, h) in gen_source_sizes() {
            let got = search_aligned(Dimensions::new(w, h), budget, 16).unwrap().dimensions;
            let want = reference_search(w, h, budget, 16);
            if (got.width, got.height) != want {
                failures.push(format!("{w}x{h} @ {budget}: got {got}, want {}x{}", want.0, want.1));
            }
        }
    }
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn search_is_globally_maximal_for_matching_aspect() {
    // When the budget is itself an aligned rectangle with the source aspect,
    // nothing aligned can beat it.
    for (w, h, budget, want) in [
        (1000, 1000, 256 * 256, (256, 256)),
        (1920, 1080, 1024 * 576, (1024, 576)),
        (1080, 1920, 576 * 1024, (576, 1024)),
        (4, 3, 640 * 480, (640, 480)),
    ] {
        let r = search_aligned(Dimensions::new(w, h), budget, 16).unwrap();
        assert_eq!((r.dimensions.width, r.dimensions.height), want, "{w}x{h}");
        assert_eq!(r.pixels, budget);
    }
}

#[test]
fn scale_round_trip_and_height() {
    let mut failures = Vec::new();
    for (w, h) in gen_source_sizes() {
        let d = Dimensions::new(w, h);
        match scale_to_height(d, h) {
            Ok(out) if out == d => {}
            other => failures.push(format!("{d}: identity scale gave {other:?}")),
        }
        for preset in HeightPreset::ALL {
            let out = scale_to_preset(d, preset).unwrap();
            if out.height != preset.height() || out.width == 0 {
                failures.push(format!("{d} @ {preset}: {out}"));
            }
            // The chosen width is the nearest integer to the exact width.
            let exact = preset.height() as f64 * d.aspect_ratio();
            if exact >= 1.0 && (out.width as f64 - exact).abs() > 0.5 {
                failures.push(format!("{d} @ {preset}: width {} far from {exact}", out.width));
            }
        }
    }
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn preset_selection_minimizes_aspect_difference() {
    let mut failures = Vec::new();
    for (w, h) in gen_source_sizes() {
        let d = Dimensions::new(w, h);
        for table in CandidatePreset::ALL {
            for tb in [TieBreak::None, TieBreak::NearestPixelCount] {
                let m = select_from(d, table, tb).unwrap();
                let min = table
                    .candidates()
                    .iter()
                    .map(|c| d.aspect_difference(c))
                    .fold(f64::INFINITY, f64::min);
                if m.aspect_difference != min {
                    failures.push(format!("{d} {table} {tb}: diff {} > min {min}", m.aspect_difference));
                }
                if table.candidates()[m.index] != m.dimensions {
                    failures.push(format!("{d} {table} {tb}: index {} mismatch", m.index));
                }
            }
        }
    }
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn policy_results_are_deterministic() {
    let candidates = [Dimensions::new(512, 512), Dimensions::new(1024, 1024)];
    let policies = [
        ResizePolicy::height_preset(HeightPreset::P1080),
        ResizePolicy::pixel_budget(DEFAULT_MAX_PIXELS),
        ResizePolicy::nearest_preset(CandidatePreset::Wan, TieBreak::None),
        ResizePolicy::nearest_candidates(&candidates, TieBreak::NearestPixelCount),
    ];
    for (w, h) in gen_source_sizes() {
        let d = Dimensions::new(w, h);
        for p in &policies {
            let a = p.resolve(d).unwrap();
            let b = p.resolve(d).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.info(), b.info());
            assert_eq!(p.plan(d, UpscaleMethod::Area).unwrap().needs_resize(), a.target != d);
        }
    }
}
