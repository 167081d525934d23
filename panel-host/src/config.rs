// Projekt-Konfiguration: Konstanten und Defaults
//
// Jeder Wert kann über .env, Environment oder Kommandozeile überschrieben
// werden (siehe cli.rs).

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Serial Port Konfiguration
// ============================================================================

/// Default Serial Port des Mikrocontrollers
/// Environment Variable: RGBW_PORT
pub const DEFAULT_PORT_NAME: &str = "COM4";

/// Baudrate der UART-Verbindung
/// Muss zur Firmware auf dem Mikrocontroller passen
/// Environment Variable: RGBW_BAUD
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Schreib-Timeout in Millisekunden
/// Ein blockierender Write soll das Panel nicht ewig hängen lassen
pub const WRITE_TIMEOUT_MS: u64 = 1000;

/// Wartezeit nach dem Öffnen des Ports in Millisekunden
/// Viele Boards resetten beim Öffnen der UART, das ist kein Handshake
/// Environment Variable: RGBW_STARTUP_DELAY_MS
pub const STARTUP_DELAY_MS: u64 = 2000;

// ============================================================================
// Settings Konfiguration
// ============================================================================

/// Dateiname der gespeicherten Default-Einstellung
/// Liegt neben der ausführbaren Datei, falls kein Pfad angegeben ist
/// Environment Variable: RGBW_SETTINGS
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Verbindungsparameter für den Serial Port
///
/// Parität ist fest auf Even, Flow Control fest auf None.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    pub port_name: String,
    pub baud_rate: u32,
    pub write_timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port_name: DEFAULT_PORT_NAME.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            write_timeout: Duration::from_millis(WRITE_TIMEOUT_MS),
        }
    }
}

/// Verzeichnis der laufenden Binary, Fallback: aktuelles Verzeichnis
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default-Pfad der Settings-Datei neben der Anwendung
pub fn default_settings_path() -> PathBuf {
    exe_dir().join(SETTINGS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serial_config() {
        let config = SerialConfig::default();
        assert_eq!(config.port_name, "COM4");
        assert_eq!(config.baud_rate, 115_200);
    }

    #[test]
    fn test_default_settings_path_file_name() {
        let path = default_settings_path();
        assert_eq!(path.file_name().unwrap(), SETTINGS_FILE_NAME);
    }
}
