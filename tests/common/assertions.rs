//! Assertion helpers for generated C sources.

use pretty_assertions::assert_eq;

/// Extract the byte values of array `name` from a generated .cpp file
pub fn parse_c_array(source: &str, name: &str) -> Vec<u8> {
    let decl = format!("const unsigned char {name}[");
    let start = source
        .find(&decl)
        .unwrap_or_else(|| panic!("array {name} not found in source"));
    let rest = &source[start..];
    let open = rest.find("{\n").expect("array body start") + 2;
    let close = rest.find("\n};").expect("array body end");

    rest[open..close]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let hex = s
                .strip_prefix("0x")
                .unwrap_or_else(|| panic!("value {s:?} lacks 0x prefix"));
            assert_eq!(hex, hex.to_ascii_uppercase(), "hex digits must be uppercase");
            u8::from_str_radix(hex, 16).unwrap_or_else(|_| panic!("bad hex value {s:?}"))
        })
        .collect()
}

/// Assert the declared length of array `name` and its actual value count
pub fn assert_c_array_len(source: &str, name: &str, expected: usize) {
    let decl = format!("const unsigned char {name}[{expected}] = {{");
    assert!(
        source.contains(&decl),
        "Expected declaration {decl:?} in source"
    );
    assert_eq!(parse_c_array(source, name).len(), expected);
}

/// Assert every line of the array body holds at most `per_line` values,
/// and all but the last exactly `per_line`
pub fn assert_values_per_line(source: &str, name: &str, per_line: usize) {
    let decl = format!("const unsigned char {name}[");
    let start = source.find(&decl).expect("array declaration");
    let rest = &source[start..];
    let open = rest.find("{\n").expect("array body start") + 2;
    let close = rest.find("\n};").expect("array body end");

    let lines: Vec<&str> = rest[open..close].lines().collect();
    let (last, full) = lines.split_last().expect("non-empty body");
    for line in full {
        assert_eq!(line.trim_end_matches(',').split(',').count(), per_line);
    }
    assert!(last.split(',').count() <= per_line);
}

/// Assert the header has the include guard and both extern declarations
pub fn assert_header(header: &str, base: &str, len: usize) {
    let guard = format!("_{}_H_", base.to_ascii_uppercase());
    assert!(header.starts_with(&format!("#ifndef {guard}\n#define {guard}\n")));
    assert!(header.contains(&format!("extern const unsigned char {base}_b[{len}];")));
    assert!(header.contains(&format!("extern const unsigned char {base}_ry[{len}];")));
    assert!(header.trim_end().ends_with("#endif"));
}
