//! Canvas to PNG encoding.

use crate::error::RenderError;
use region_growth::Canvas;
use std::io::Cursor;
use std::path::Path;

/// Encode a canvas as an 8-bit RGB PNG
///
/// Unwritten cells are encoded as black. With `optimize`, the fast initial
/// encoding is re-compressed by oxipng; if that fails the unoptimized bytes
/// are returned.
pub fn encode_png(canvas: &Canvas, optimize: bool) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&canvas.to_rgb_bytes())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);
    Ok(optimized)
}

/// Encode a canvas and write it to `path`, creating parent directories
pub fn write_png(path: &Path, canvas: &Canvas, optimize: bool) -> Result<(), RenderError> {
    let bytes = encode_png(canvas, optimize)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}

/// Decode a PNG into `(width, height, rgb bytes)`
///
/// Only 8-bit RGB output is accepted; palette and low bit-depth images are
/// expanded by the decoder.
pub fn decode_png(bytes: &[u8]) -> Result<(u32, u32, Vec<u8>), RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut data)
        .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    data.truncate(info.buffer_size());

    let rgb = match info.color_type {
        png::ColorType::Rgb => data,
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect(),
        other => {
            return Err(RenderError::PngEncode(format!(
                "unsupported decoded color type {:?}",
                other
            )))
        }
    };
    Ok((info.width, info.height, rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use region_growth::{place_raster, Color, GridSize, Location, QuantizationScheme};

    fn raster_canvas() -> Canvas {
        let palette = QuantizationScheme::new(2, 2, 2).generate().unwrap();
        place_raster(GridSize::new(16, 4).unwrap(), &palette).unwrap()
    }

    #[test]
    fn test_png_signature() {
        let bytes = encode_png(&raster_canvas(), false).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_roundtrip_plain() {
        let canvas = raster_canvas();
        let (w, h, rgb) = decode_png(&encode_png(&canvas, false).unwrap()).unwrap();
        assert_eq!((w, h), (16, 4));
        assert_eq!(rgb, canvas.to_rgb_bytes());
    }

    #[test]
    fn test_roundtrip_optimized() {
        // oxipng may switch to an indexed or grayscale encoding; pixels must survive.
        let canvas = raster_canvas();
        let (w, h, rgb) = decode_png(&encode_png(&canvas, true).unwrap()).unwrap();
        assert_eq!((w, h), (16, 4));
        assert_eq!(rgb, canvas.to_rgb_bytes());
    }

    #[test]
    fn test_partial_canvas_encodes_black() {
        let mut canvas = Canvas::new(GridSize::new(2, 1).unwrap());
        canvas
            .set_pixel(Location::new(1, 0), Color::new(255, 255, 255))
            .unwrap();
        let (_, _, rgb) = decode_png(&encode_png(&canvas, false).unwrap()).unwrap();
        assert_eq!(rgb, vec![0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("image.png");
        write_png(&path, &raster_canvas(), false).unwrap();
        assert!(path.exists());
    }
}
