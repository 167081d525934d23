//! Pure Business Logic Functions
//!
//! Funktionen ohne Serial-Port-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::{ChannelLevels, Payload};

/// Kodiert die Kanalwerte als JSON-Payload (UTF-8, ohne Newline, ohne Framing)
///
/// # Beispiele
///
/// ```
/// # use panel_core::{ChannelLevels, encode};
/// let levels = ChannelLevels { red: 1, green: 2, blue: 3, white: 4 };
/// assert_eq!(
///     encode(levels, false).unwrap(),
///     br#"{"red":1,"green":2,"blue":3,"white":4,"setAsDefault":false}"#
/// );
/// ```
pub fn encode(levels: ChannelLevels, set_as_default: bool) -> Result<Vec<u8>, serde_json::Error> {
    encode_payload(&Payload::new(levels, set_as_default))
}

/// Kodiert eine fertige Payload
///
/// serde_json schreibt die Felder in Deklarations-Reihenfolge und ohne
/// Whitespace, das entspricht exakt dem Wire-Format.
pub fn encode_payload(payload: &Payload) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(payload)
}

/// Mischfarbe aus Rot, Grün und Blau als `#rrggbb`
///
/// Weiß fließt nicht in die Mischung ein.
///
/// ```
/// # use rgb::RGB8;
/// # use panel_core::mix_color;
/// assert_eq!(mix_color(RGB8 { r: 255, g: 0, b: 0 }), "#ff0000");
/// ```
pub fn mix_color(color: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_exact_bytes() {
        let levels = ChannelLevels {
            red: 10,
            green: 0,
            blue: 200,
            white: 255,
        };
        assert_eq!(
            encode(levels, true).unwrap(),
            br#"{"red":10,"green":0,"blue":200,"white":255,"setAsDefault":true}"#.to_vec()
        );
    }

    #[test]
    fn test_encode_round_trips_through_parser() {
        let payload = Payload::new(ChannelLevels::splat(128), false);
        let parsed: Payload = serde_json::from_slice(&encode_payload(&payload).unwrap()).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_encode_has_no_newline() {
        let bytes = encode(ChannelLevels::splat(255), false).unwrap();
        assert!(!bytes.contains(&b'\n'));
        assert_eq!(bytes.last(), Some(&b'}'));
    }

    #[test]
    fn test_mix_color_black() {
        assert_eq!(mix_color(RGB8 { r: 0, g: 0, b: 0 }), "#000000");
    }

    #[test]
    fn test_mix_color_white() {
        assert_eq!(mix_color(RGB8 { r: 255, g: 255, b: 255 }), "#ffffff");
    }

    #[test]
    fn test_mix_color_zero_padding() {
        assert_eq!(mix_color(RGB8 { r: 1, g: 10, b: 15 }), "#010a0f");
    }

    #[test]
    fn test_mixed_color_ignores_white() {
        let levels = ChannelLevels {
            red: 255,
            green: 0,
            blue: 0,
            white: 255,
        };
        assert_eq!(levels.mixed_color(), "#ff0000");
    }
}
