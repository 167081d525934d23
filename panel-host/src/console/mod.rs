// Console-Modul: Terminal-Panel als Benutzeroberfläche
//
// Ersetzt Fenster, Regler und Buttons durch zeilenweise Kommandos.

pub mod command;
pub mod session;

pub use command::{CommandError, HELP_TEXT, PanelCommand};
pub use session::{apply, run_session, run_until_shutdown, status_line};
