// Terminal-Panel Session - liest Kommandos zeilenweise und steuert den Controller
use std::io::{self, BufRead, Write};

use anyhow::Context;
use log::{error, info, warn};
use panel_core::{PanelController, PanelError, PayloadSink};

use super::command::{HELP_TEXT, PanelCommand};

/// Führt ein Kommando auf dem Controller aus
///
/// Genau ein Controller-Aufruf pro Kommando, damit jede Aktion höchstens
/// einen Transmit auslöst.
pub fn apply<S: PayloadSink>(
    panel: &mut PanelController<S>,
    command: PanelCommand,
) -> Result<(), PanelError> {
    match command {
        PanelCommand::Set { channel, value } => panel.set_channel(channel, value),
        PanelCommand::Zero => panel.set_all(0),
        PanelCommand::Maximum => panel.set_all(u8::MAX),
        PanelCommand::Restore => panel.restore_default(),
        PanelCommand::Save => panel.save_as_default(),
        PanelCommand::Send => panel.send_current(),
        PanelCommand::Show | PanelCommand::Help | PanelCommand::Quit => Ok(()),
    }
}

/// Statuszeile mit aktuellen Werten und Mischfarbe
pub fn status_line<S: PayloadSink>(panel: &PanelController<S>) -> String {
    format!("{}  mix={}", panel.levels(), panel.mixed_color())
}

/// Session-Logik - testbar ohne Serial Port und ohne Terminal
///
/// Liest bis `quit` oder Ende der Eingabe. Fehler einzelner Aktionen und
/// ungültige Eingaben (auch kein UTF-8) werden angezeigt und beenden die
/// Session nicht; nur I/O-Fehler auf `input`/`output` werden zurückgegeben.
///
/// # Parameter
/// - `panel`: Controller (Serial Port oder Mock)
/// - `input`: Kommandozeilen, z.B. stdin
/// - `output`: Ausgabe für Status und Fehlermeldungen, z.B. stdout
pub fn run_session<S, R, W>(
    panel: &mut PanelController<S>,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    S: PayloadSink,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", status_line(panel))?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!("Rejected input: {}", e);
                writeln!(output, "error: input is not valid UTF-8")?;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let command = match PanelCommand::try_from(line) {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected input '{}': {}", line, e);
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        if !command.transmits() {
            match command {
                PanelCommand::Quit => break,
                PanelCommand::Help => writeln!(output, "{HELP_TEXT}")?,
                _ => writeln!(output, "{}", status_line(panel))?,
            }
            continue;
        }

        match apply(panel, command) {
            Ok(()) => writeln!(output, "{}", status_line(panel))?,
            Err(e) => {
                error!("{:?} failed: {}", command, e);
                writeln!(output, "error: {e}")?;
            }
        }
    }

    info!("Session ended");
    Ok(())
}

/// Session ausführen und danach immer die Verbindung schließen
///
/// Auch wenn die Session mit einem I/O-Fehler endet, wird `shutdown()`
/// aufgerufen. Zurückgegeben wird der erste Fehler.
pub fn run_until_shutdown<S, R, W>(
    panel: &mut PanelController<S>,
    input: R,
    output: W,
) -> anyhow::Result<()>
where
    S: PayloadSink,
    R: BufRead,
    W: Write,
{
    let session = run_session(panel, input, output);
    let closed = panel.shutdown();

    session.context("Terminal I/O failed")?;
    closed.context("Failed to close serial port")?;
    Ok(())
}
