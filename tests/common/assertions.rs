//! Assertion helpers for tests.

use growth_image::rendering::decode_png;
use pretty_assertions::assert_eq;
use region_growth::{Canvas, Color, Palette};
use std::collections::HashSet;
use std::path::Path;

/// Assert every cell is written and every palette color used exactly once
pub fn assert_bijection(canvas: &Canvas, palette: &Palette) {
    assert!(canvas.is_complete(), "Canvas has unwritten cells");
    let placed: Vec<Color> = canvas.cells().iter().map(|c| c.unwrap()).collect();
    let unique: HashSet<Color> = placed.iter().copied().collect();
    assert_eq!(unique.len(), placed.len(), "A color was placed more than once");
    let expected: HashSet<Color> = palette.iter().collect();
    assert_eq!(unique, expected, "Placed colors differ from the palette");
}

/// Assert `path` is a PNG decoding to exactly the canvas pixels
pub fn assert_png_matches(path: &Path, canvas: &Canvas) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );
    let (width, height, rgb) = decode_png(&bytes).unwrap();
    assert_eq!((width, height), (canvas.width(), canvas.height()));
    assert!(rgb == canvas.to_rgb_bytes(), "Decoded pixels differ from canvas");
}

/// Assert every line is a well-formed progress line
pub fn assert_progress_lines(output: &str, expected_lines: usize) {
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), expected_lines, "Unexpected number of progress lines");
    for line in lines {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 3, "Malformed progress line: {line:?}");
        assert!(fields[0].starts_with("Body: "), "{line:?}");
        assert!(fields[1].starts_with("Frontier: "), "{line:?}");
        assert!(fields[2].starts_with("Unexplored: "), "{line:?}");
    }
}
