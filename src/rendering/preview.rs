//! Preview PNG of the dithered image, as the panel will show it.

use std::io::Cursor;

use tricolor_dither::{Palette, Raster};

use crate::error::ConvertError;

/// Encode a quantized raster as a 2-bit indexed PNG.
///
/// The PLTE chunk holds the palette in index order, so the PNG pixel
/// values equal the palette indices used for the bit planes.
pub fn encode_preview(raster: &Raster, palette: &Palette) -> Result<Vec<u8>, ConvertError> {
    let indices: Vec<u8> = raster
        .pixels()
        .iter()
        .map(|&px| palette.index_of(px).unwrap_or(0))
        .collect();
    let plte: Vec<u8> = palette.colors().iter().flat_map(|c| c.to_bytes()).collect();

    let width = raster.width() as u32;
    let height = raster.height() as u32;
    let packed = pack_nbits(&indices, width, 2);
    encode_png(width, height, &plte, &packed)
}

fn encode_png(
    width: u32,
    height: u32,
    plte: &[u8],
    packed: &[u8],
) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Two);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
///
/// Each row starts on a fresh byte.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
