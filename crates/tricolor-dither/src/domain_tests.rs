//! Domain-critical regression tests for tricolor-dither.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use pretty_assertions::assert_eq;

    use crate::api::TricolorConverter;
    use crate::color::Rgb;
    use crate::dither::{diffuse_error, FloydSteinberg};
    use crate::output::{pack_plane, Plane};
    use crate::palette::Palette;
    use crate::raster::Raster;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);
    const RED: Rgb = Rgb::new(255, 0, 0);

    /// Deterministic, colorful test pattern covering all three palette regions.
    fn pattern(width: usize, height: usize) -> Raster {
        let pixels = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    Rgb::new(
                        ((x * 37 + y * 11) % 256) as u8,
                        ((x * 5 + y * 53) % 256) as u8,
                        ((x * 97 + y * 3) % 256) as u8,
                    )
                })
            })
            .collect();
        Raster::new(pixels, width, height).unwrap()
    }

    // ========================================================================
    // Palette closure
    // ========================================================================

    /// If this breaks, it means: a pixel was left unquantized (skipped by the
    /// scan) or overwritten by diffusion after it was quantized.
    #[test]
    fn test_every_pixel_is_a_palette_color() {
        let palette = Palette::default();
        let mut raster = pattern(64, 48);

        FloydSteinberg.dither(&mut raster, &palette);

        for (i, &px) in raster.pixels().iter().enumerate() {
            assert!(palette.contains(px), "pixel {i} is {px}, not a palette color");
        }
        // The pattern is varied enough that all three colors must appear
        for color in [BLACK, WHITE, RED] {
            assert!(raster.pixels().contains(&color), "{color} never used");
        }
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, it means: output depends on something other than the
    /// input raster and palette (iteration order, uninitialised state).
    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let converter = TricolorConverter::new(Palette::default()).canvas(64, 48);

        let first = converter.convert(pattern(64, 48)).unwrap();
        let second = converter.convert(pattern(64, 48)).unwrap();

        assert_eq!(first, second);
    }

    // ========================================================================
    // Length invariant
    // ========================================================================

    /// If this breaks, it means: the packer drops or adds a byte for a
    /// trailing partial chunk, or planes disagree in length.
    #[test]
    fn test_plane_length_is_ceil_pixels_over_8() {
        let palette = Palette::default();
        for (w, h) in [(1, 1), (7, 3), (8, 1), (9, 1), (13, 7), (800, 480)] {
            let raster = Raster::filled(w, h, Rgb::new(90, 90, 90));
            let converter = TricolorConverter::new(palette.clone()).canvas(w, h);
            let planes = converter.convert(raster).unwrap();

            let expected = (w * h).div_ceil(8);
            assert_eq!(planes.black_white().len(), expected, "{w}x{h} bw");
            assert_eq!(planes.red().len(), expected, "{w}x{h} red");
        }
    }

    /// If this breaks, it means: the panel would receive a short or long
    /// frame buffer.
    #[test]
    fn test_panel_canvas_is_48000_bytes_per_plane() {
        let converter = TricolorConverter::new(Palette::default());
        let planes = converter.convert(pattern(800, 480)).unwrap();

        assert_eq!(planes.black_white().len(), 48_000);
        assert_eq!(planes.red().len(), 48_000);
    }

    // ========================================================================
    // Edge handling
    // ========================================================================

    /// If this breaks, it means: diffusion wraps across row ends in the flat
    /// pixel buffer. In a 1-pixel-wide raster only the 5/16 "below" share
    /// is in bounds. The lower pixel ends at 170 - 127*5/16 = 130 -> white;
    /// had the 7/16 "right" share wrapped onto it first it would be 75 ->
    /// black.
    #[test]
    fn test_diffusion_does_not_wrap_rows() {
        let palette = Palette::default();
        let pixels = vec![Rgb::new(128, 128, 128), Rgb::new(170, 170, 170)];
        let mut raster = Raster::new(pixels, 1, 2).unwrap();

        FloydSteinberg.dither(&mut raster, &palette);

        assert_eq!(raster.pixels(), &[WHITE, WHITE]);
    }

    /// If this breaks, it means: out-of-range targets are clamped into the
    /// raster instead of skipped.
    #[test]
    fn test_out_of_bounds_targets_are_ignored() {
        let mut raster = Raster::filled(3, 2, Rgb::new(50, 50, 50));
        let before = raster.clone();

        // Right of the last column, left of the first, below the last row
        diffuse_error(&mut raster, 3, 0, [-200, -200, -200], 7, 16);
        diffuse_error(&mut raster, -1, 1, [-200, -200, -200], 3, 16);
        diffuse_error(&mut raster, 1, 2, [-200, -200, -200], 5, 16);

        assert_eq!(raster, before);
    }

    // ========================================================================
    // Channel clamping
    // ========================================================================

    /// If this breaks, it means: diffusion underflows or overflows a channel
    /// (wrapping u8 arithmetic would turn -1 into 255).
    #[test]
    fn test_channels_clamp_to_byte_range() {
        let mut raster = Raster::filled(2, 1, WHITE);
        diffuse_error(&mut raster, 0, 0, [-2000, -2000, -2000], 16, 16);
        assert_eq!(raster.get(0, 0), BLACK);

        diffuse_error(&mut raster, 1, 0, [255, 255, 255], 16, 16);
        assert_eq!(raster.get(1, 0), WHITE);
    }

    // ========================================================================
    // Nearest-color metric
    // ========================================================================

    /// If this breaks, it means: the distance is not L1 or ties are not
    /// resolved in palette order.
    #[test]
    fn test_l1_metric_and_first_entry_tie_break() {
        let palette = Palette::default();
        // 384 to black, 381 to white, 256 + 128 + 128 = 512 to red
        assert_eq!(palette.nearest_color(Rgb::new(128, 128, 128)), WHITE);
        // 381 to black, 384 to white
        assert_eq!(palette.nearest_color(Rgb::new(127, 127, 127)), BLACK);

        // Exact tie between black and a darker red: first entry wins
        let palette_with_tie = Palette::new(&[BLACK, WHITE, Rgb::new(254, 0, 0)]).unwrap();
        let midpoint = Rgb::new(127, 0, 0);
        assert_eq!(midpoint.l1_distance(BLACK), 127);
        assert_eq!(midpoint.l1_distance(Rgb::new(254, 0, 0)), 127);
        assert_eq!(palette_with_tie.nearest_color(midpoint), BLACK);
    }

    // ========================================================================
    // End-to-end
    // ========================================================================

    /// If this breaks, it means: the index-to-bit mapping changed. Red is
    /// index 2 (binary 10); only its LSB (0) is packed, on both planes.
    #[test]
    fn test_two_red_pixels_pack_to_zero_bytes() {
        let converter = TricolorConverter::new(Palette::default()).canvas(2, 1);
        let raster = Raster::filled(2, 1, RED);

        let quantized = converter.quantize(raster).unwrap();
        assert_eq!(quantized.pixels(), &[RED, RED]);

        let planes = converter.pack(&quantized).unwrap();
        assert_eq!(planes.black_white(), &[0x00]);
        assert_eq!(planes.red(), &[0x00]);
    }

    /// If this breaks, it means: the red plane match started depending on
    /// the pixel. It always resolves to the red entry.
    #[test]
    fn test_red_plane_is_blank_for_any_image() {
        let palette = Palette::default();
        let mut raster = pattern(40, 20);
        FloydSteinberg.dither(&mut raster, &palette);

        let red = pack_plane(&raster, &palette, Plane::Red);
        assert!(red.iter().all(|&b| b == 0));
    }

    /// If this breaks, it means: the black/white plane no longer marks
    /// exactly the white pixels.
    #[test]
    fn test_bw_plane_marks_white_pixels() {
        let palette = Palette::default();
        let mut raster = pattern(40, 20);
        FloydSteinberg.dither(&mut raster, &palette);

        let bw = pack_plane(&raster, &palette, Plane::BlackWhite);
        for (i, &px) in raster.pixels().iter().enumerate() {
            let bit = (bw[i / 8] >> (7 - i % 8)) & 1;
            assert_eq!(bit == 1, px == WHITE, "pixel {i} ({px})");
        }
    }
}
