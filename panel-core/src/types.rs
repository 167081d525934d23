//! Core Types für die RGBW-Steuerung
//!
//! Datenstrukturen ohne Serial-Port-Dependencies

use core::fmt;

use rgb::RGB8;
use serde::{Deserialize, Serialize};

/// Einer der vier steuerbaren Lichtkanäle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}

impl Channel {
    /// Alle Kanäle in Payload-Reihenfolge
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::White];

    /// JSON-Key des Kanals
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::White => "white",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Channel {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Channel::Red),
            "green" | "g" => Ok(Channel::Green),
            "blue" | "b" => Ok(Channel::Blue),
            "white" | "w" => Ok(Channel::White),
            _ => Err(()),
        }
    }
}

/// Aktuelle Intensitäten aller vier Kanäle (0-255)
///
/// `u8` hält die Bereichsgrenze per Typ ein, ein Clamping ist nicht nötig.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelLevels {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

impl ChannelLevels {
    /// Alle vier Kanäle auf denselben Wert (Zero / Maximum)
    pub fn splat(value: u8) -> Self {
        Self {
            red: value,
            green: value,
            blue: value,
            white: value,
        }
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::White => self.white,
        }
    }

    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
            Channel::White => self.white = value,
        }
    }

    /// Additive Grundfarben ohne Weiß-Kanal
    pub fn rgb(&self) -> RGB8 {
        RGB8 {
            r: self.red,
            g: self.green,
            b: self.blue,
        }
    }

    /// Mischfarbe für die Vorschau, z.B. `#ff8000`
    pub fn mixed_color(&self) -> String {
        crate::logic::mix_color(self.rgb())
    }
}

impl fmt::Display for ChannelLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red={} green={} blue={} white={}",
            self.red, self.green, self.blue, self.white
        )
    }
}

/// Nachricht an den Mikrocontroller
///
/// Feld-Reihenfolge entspricht exakt dem Wire-Format:
/// `{"red":R,"green":G,"blue":B,"white":W,"setAsDefault":S}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payload {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
    #[serde(rename = "setAsDefault")]
    pub set_as_default: bool,
}

impl Payload {
    pub fn new(levels: ChannelLevels, set_as_default: bool) -> Self {
        Self {
            red: levels.red,
            green: levels.green,
            blue: levels.blue,
            white: levels.white,
            set_as_default,
        }
    }

    pub fn levels(&self) -> ChannelLevels {
        ChannelLevels {
            red: self.red,
            green: self.green,
            blue: self.blue,
            white: self.white,
        }
    }
}

/// Gespeicherte Default-Einstellung (settings.json)
///
/// Jedes Feld darf in der Datei fehlen. Eine fehlende Datei entspricht
/// `PersistedConfig::default()`, also einem leeren Mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white: Option<u8>,
    #[serde(
        rename = "setAsDefault",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub set_as_default: Option<bool>,
}

impl PersistedConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, channel: Channel) -> Option<u8> {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::White => self.white,
        }
    }

    /// Kanalwerte zum Wiederherstellen, fehlende Kanäle werden 0
    pub fn levels(&self) -> ChannelLevels {
        let mut levels = ChannelLevels::default();
        for channel in Channel::ALL {
            levels.set(channel, self.get(channel).unwrap_or(0));
        }
        levels
    }
}

impl From<Payload> for PersistedConfig {
    fn from(payload: Payload) -> Self {
        Self {
            red: Some(payload.red),
            green: Some(payload.green),
            blue: Some(payload.blue),
            white: Some(payload.white),
            set_as_default: Some(payload.set_as_default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_try_from() {
        assert_eq!(Channel::try_from("red"), Ok(Channel::Red));
        assert_eq!(Channel::try_from("Green"), Ok(Channel::Green));
        assert_eq!(Channel::try_from(" b "), Ok(Channel::Blue));
        assert_eq!(Channel::try_from("W"), Ok(Channel::White));
        assert_eq!(Channel::try_from("brightness"), Err(()));
    }

    #[test]
    fn test_levels_set_and_get() {
        let mut levels = ChannelLevels::default();
        levels.set(Channel::Blue, 200);
        assert_eq!(levels.get(Channel::Blue), 200);
        assert_eq!(levels.get(Channel::Red), 0);
    }

    #[test]
    fn test_partial_config_restores_missing_as_zero() {
        let config: PersistedConfig = serde_json::from_str(r#"{"red":10,"blue":200}"#).unwrap();
        assert_eq!(
            config.levels(),
            ChannelLevels {
                red: 10,
                green: 0,
                blue: 200,
                white: 0,
            }
        );
    }

    #[test]
    fn test_empty_config_is_empty() {
        assert!(PersistedConfig::default().is_empty());
        assert_eq!(PersistedConfig::default().levels(), ChannelLevels::splat(0));
    }

    #[test]
    fn test_config_from_payload_keeps_flag() {
        let payload = Payload::new(ChannelLevels::splat(7), true);
        let config = PersistedConfig::from(payload);
        assert_eq!(config.set_as_default, Some(true));
        assert_eq!(config.levels(), ChannelLevels::splat(7));
    }

    #[test]
    fn test_config_rejects_out_of_range_value() {
        let result = serde_json::from_str::<PersistedConfig>(r#"{"red":300}"#);
        assert!(result.is_err());
    }
}
