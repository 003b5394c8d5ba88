use super::{RenderError, Result};

/// Parse "#rgb" or "#rrggbb" into RGB components.
pub fn parse_color(color: &str) -> Result<[u8; 3]> {
    let bad = || RenderError::BadColor(color.to_string());
    let hex = color.strip_prefix('#').ok_or_else(bad)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    match hex.len() {
        3 => {
            let nibble = |slice: &str| u8::from_str_radix(slice, 16).map_err(|_| bad());
            Ok([
                nibble(&hex[0..1])? * 17,
                nibble(&hex[1..2])? * 17,
                nibble(&hex[2..3])? * 17,
            ])
        }
        6 => {
            let byte = |slice: &str| u8::from_str_radix(slice, 16).map_err(|_| bad());
            Ok([byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?])
        }
        _ => Err(bad()),
    }
}

/// Black-to-color ramp at a normalized intensity, in 0..=255 space.
pub(crate) fn ramp(color: [u8; 3], value: f32) -> [f32; 3] {
    let value = value.clamp(0.0, 1.0);
    [
        f32::from(color[0]) * value,
        f32::from(color[1]) * value,
        f32::from(color[2]) * value,
    ]
}
