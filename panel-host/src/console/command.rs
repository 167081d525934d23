// Panel-Kommandos
//
// Definiert die Text-Kommandos des Terminal-Panels.
// Jedes Kommando entspricht einem Regler oder Button des Panels.

use core::fmt;

use panel_core::Channel;

/// Benutzer-Aktion im Terminal-Panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Regler eines Kanals setzen, z.B. `red 120`
    Set { channel: Channel, value: u8 },
    /// Button "Zero": alle Kanäle auf 0
    Zero,
    /// Button "Maximum": alle Kanäle auf 255
    Maximum,
    /// Button "Restore": gespeicherte Defaults senden
    Restore,
    /// Button "Save": aktuelle Werte als Default speichern
    Save,
    /// Aktuelle Werte erneut senden
    Send,
    /// Aktuelle Werte und Mischfarbe anzeigen (sendet nichts)
    Show,
    Help,
    Quit,
}

impl PanelCommand {
    /// Löst das Kommando einen Transmit aus?
    pub fn transmits(self) -> bool {
        !matches!(self, PanelCommand::Show | PanelCommand::Help | PanelCommand::Quit)
    }
}

/// Fehler beim Parsen einer Eingabezeile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingValue(Channel),
    InvalidValue { channel: Channel, raw: String },
    UnexpectedArgument(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(cmd) => write!(f, "unknown command '{cmd}' (try 'help')"),
            CommandError::MissingValue(channel) => {
                write!(f, "missing value for {channel} (0-255)")
            }
            CommandError::InvalidValue { channel, raw } => {
                write!(f, "invalid value '{raw}' for {channel}, expected 0-255")
            }
            CommandError::UnexpectedArgument(arg) => write!(f, "unexpected argument '{arg}'"),
        }
    }
}

impl std::error::Error for CommandError {}

impl TryFrom<&str> for PanelCommand {
    type Error = CommandError;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }

        if let Ok(channel) = Channel::try_from(word) {
            let raw = arg.ok_or(CommandError::MissingValue(channel))?;
            let value = raw.parse::<u8>().map_err(|_| CommandError::InvalidValue {
                channel,
                raw: raw.to_string(),
            })?;
            return Ok(PanelCommand::Set { channel, value });
        }

        let command = match word.to_ascii_lowercase().as_str() {
            "zero" => PanelCommand::Zero,
            "max" | "maximum" => PanelCommand::Maximum,
            "restore" => PanelCommand::Restore,
            "save" => PanelCommand::Save,
            "send" => PanelCommand::Send,
            "show" => PanelCommand::Show,
            "help" | "?" => PanelCommand::Help,
            "quit" | "exit" | "q" => PanelCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match arg {
            Some(arg) => Err(CommandError::UnexpectedArgument(arg.to_string())),
            None => Ok(command),
        }
    }
}

pub const HELP_TEXT: &str = "\
commands:
  red|green|blue|white <0-255>   set one channel and send
  zero                           all channels to 0 and send
  max                            all channels to 255 and send
  restore                        send the saved default
  save                           save current values as default and send
  send                           send current values again
  show                           print current values and mixed colour
  help                           this text
  quit                           close the serial port and exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel_value() {
        assert_eq!(
            PanelCommand::try_from("red 120"),
            Ok(PanelCommand::Set {
                channel: Channel::Red,
                value: 120
            })
        );
        assert_eq!(
            PanelCommand::try_from("  W   255 "),
            Ok(PanelCommand::Set {
                channel: Channel::White,
                value: 255
            })
        );
    }

    #[test]
    fn test_parse_buttons() {
        assert_eq!(PanelCommand::try_from("zero"), Ok(PanelCommand::Zero));
        assert_eq!(PanelCommand::try_from("Maximum"), Ok(PanelCommand::Maximum));
        assert_eq!(PanelCommand::try_from("restore"), Ok(PanelCommand::Restore));
        assert_eq!(PanelCommand::try_from("save"), Ok(PanelCommand::Save));
        assert_eq!(PanelCommand::try_from("q"), Ok(PanelCommand::Quit));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            PanelCommand::try_from("blue 256"),
            Err(CommandError::InvalidValue {
                channel: Channel::Blue,
                raw: "256".to_string()
            })
        );
        assert!(PanelCommand::try_from("green -1").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(PanelCommand::try_from("   "), Err(CommandError::Empty));
        assert_eq!(
            PanelCommand::try_from("green"),
            Err(CommandError::MissingValue(Channel::Green))
        );
        assert_eq!(
            PanelCommand::try_from("brightness 10"),
            Err(CommandError::Unknown("brightness".to_string()))
        );
        assert_eq!(
            PanelCommand::try_from("zero 5"),
            Err(CommandError::UnexpectedArgument("5".to_string()))
        );
    }

    #[test]
    fn test_transmits() {
        assert!(PanelCommand::Zero.transmits());
        assert!(PanelCommand::Save.transmits());
        assert!(!PanelCommand::Show.transmits());
        assert!(!PanelCommand::Quit.transmits());
    }
}
