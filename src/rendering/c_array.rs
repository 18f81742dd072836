//! C source emitter for packed bit planes.
//!
//! Produces a `.cpp` file defining one `const unsigned char` array per plane
//! and a `.h` file with matching `extern` declarations, ready to be compiled
//! into the panel firmware.

use tricolor_dither::{PackedPlanes, Plane};

/// Turn a file stem into a valid C identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`; a leading digit gets a `_`
/// prefix. An empty stem yields `_`.
pub fn c_identifier(stem: &str) -> String {
    let mut ident: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Array symbol for one plane, e.g. `logo_b` or `logo_ry`.
pub fn array_name(base: &str, plane: Plane) -> String {
    format!("{base}{}", plane.suffix())
}

/// Include guard for the header, e.g. `_LOGO_H_`.
pub fn header_guard(base: &str) -> String {
    format!("_{}_H_", base.to_ascii_uppercase())
}

/// Rendered contents of a `.cpp`/`.h` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CArrayFiles {
    pub base: String,
    pub source: String,
    pub header: String,
}

impl CArrayFiles {
    /// Render both files for `base` (already a C identifier).
    pub fn render(base: &str, planes: &PackedPlanes, values_per_line: usize) -> Self {
        Self {
            base: base.to_string(),
            source: render_source(base, planes, values_per_line),
            header: render_header(base, planes.plane_len()),
        }
    }
}

/// The `.cpp` file: one definition per plane, separated by a blank line.
pub fn render_source(base: &str, planes: &PackedPlanes, values_per_line: usize) -> String {
    Plane::ALL
        .iter()
        .map(|&plane| {
            render_array(
                &array_name(base, plane),
                planes.plane(plane),
                values_per_line,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The `.h` file with the include guard and `extern` declarations.
pub fn render_header(base: &str, len: usize) -> String {
    let guard = header_guard(base);
    let mut out = format!("#ifndef {guard}\n#define {guard}\n\n");
    for plane in Plane::ALL {
        out.push_str(&format!(
            "extern const unsigned char {}[{len}];\n",
            array_name(base, plane)
        ));
    }
    out.push_str("\n#endif\n");
    out
}

/// A single array definition, `values_per_line` hex literals per line.
pub fn render_array(name: &str, bytes: &[u8], values_per_line: usize) -> String {
    let body = bytes
        .chunks(values_per_line.max(1))
        .map(|line| {
            line.iter()
                .map(|b| format!("0x{b:02X}"))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "const unsigned char {name}[{}] = {{\n{body}\n}};\n",
        bytes.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tricolor_dither::{Palette, Raster, Rgb, TricolorConverter};

    #[test]
    fn test_c_identifier_passthrough() {
        assert_eq!(c_identifier("logo"), "logo");
        assert_eq!(c_identifier("Logo_2"), "Logo_2");
    }

    #[test]
    fn test_c_identifier_replaces_invalid_chars() {
        assert_eq!(c_identifier("my-image v2"), "my_image_v2");
        assert_eq!(c_identifier("café"), "caf_");
    }

    #[test]
    fn test_c_identifier_leading_digit() {
        assert_eq!(c_identifier("7in5"), "_7in5");
        assert_eq!(c_identifier(""), "_");
    }

    #[test]
    fn test_render_array_wraps_lines() {
        let bytes: Vec<u8> = (0..5).collect();
        let text = render_array("x_b", &bytes, 2);
        assert_eq!(
            text,
            "const unsigned char x_b[5] = {\n0x00,0x01,\n0x02,0x03,\n0x04\n};\n"
        );
    }

    #[test]
    fn test_render_array_uppercase_hex() {
        let text = render_array("x_ry", &[0xab, 0x0f], 16);
        assert_eq!(text, "const unsigned char x_ry[2] = {\n0xAB,0x0F\n};\n");
    }

    #[test]
    fn test_render_header() {
        let header = render_header("logo", 48_000);
        assert_eq!(
            header,
            "#ifndef _LOGO_H_\n\
             #define _LOGO_H_\n\
             \n\
             extern const unsigned char logo_b[48000];\n\
             extern const unsigned char logo_ry[48000];\n\
             \n\
             #endif\n"
        );
    }

    #[test]
    fn test_render_source_has_both_planes() {
        let converter = TricolorConverter::new(Palette::default()).canvas(16, 1);
        let planes = converter
            .convert(Raster::filled(16, 1, Rgb::new(255, 255, 255)))
            .unwrap();

        let files = CArrayFiles::render("w", &planes, 16);
        assert_eq!(
            files.source,
            "const unsigned char w_b[2] = {\n0xFF,0xFF\n};\n\
             \n\
             const unsigned char w_ry[2] = {\n0x00,0x00\n};\n"
        );
        assert!(files.header.contains("extern const unsigned char w_b[2];"));
        assert_eq!(files.base, "w");
    }
}
