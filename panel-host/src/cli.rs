// Kommandozeilen-Argumente
//
// Reihenfolge: Flag > Environment (auch aus .env) > Konstante aus config.rs

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{
    DEFAULT_BAUD_RATE, DEFAULT_PORT_NAME, STARTUP_DELAY_MS, SerialConfig, WRITE_TIMEOUT_MS,
    default_settings_path,
};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Set RGB+white illumination levels over a serial link",
    long_about = None
)]
pub struct Args {
    /// Serial port of the microcontroller (e.g. COM4, /dev/ttyUSB0)
    #[arg(short, long, env = "RGBW_PORT", default_value = DEFAULT_PORT_NAME)]
    pub port: String,

    /// Baud rate of the serial link
    #[arg(short, long, env = "RGBW_BAUD", default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,

    /// Settings file holding the saved default (defaults to settings.json next to the binary)
    #[arg(short, long, env = "RGBW_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Delay after opening the port before the panel accepts input
    #[arg(long, env = "RGBW_STARTUP_DELAY_MS", default_value_t = STARTUP_DELAY_MS)]
    pub startup_delay_ms: u64,
}

impl Args {
    pub fn serial_config(&self) -> SerialConfig {
        SerialConfig {
            port_name: self.port.clone(),
            baud_rate: self.baud,
            write_timeout: Duration::from_millis(WRITE_TIMEOUT_MS),
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(default_settings_path)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let args = Args::try_parse_from([
            "rgbw-panel",
            "--port",
            "/dev/ttyUSB0",
            "--baud",
            "9600",
            "--settings",
            "/tmp/panel.json",
            "--startup-delay-ms",
            "0",
        ])
        .unwrap();

        let serial = args.serial_config();
        assert_eq!(serial.port_name, "/dev/ttyUSB0");
        assert_eq!(serial.baud_rate, 9600);
        assert_eq!(args.settings_path(), PathBuf::from("/tmp/panel.json"));
        assert_eq!(args.startup_delay(), Duration::ZERO);
    }

    #[test]
    fn test_invalid_baud_is_rejected() {
        let result = Args::try_parse_from(["rgbw-panel", "--baud", "fast"]);
        assert!(result.is_err());
    }
}
