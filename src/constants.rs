//! Application-wide constants.

use std::time::Duration;

/// The display name of the application.
pub const APP_NAME: &str = "Team Colors";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "teamcolors";

/// How long a copy confirmation stays in the status bar.
pub const TOOLTIP_DURATION: Duration = Duration::from_secs(2);

/// Longest a CLI copy keeps serving the clipboard before exiting.
pub const CLIPBOARD_HOLD: Duration = Duration::from_secs(30);

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "teamcolors.log";
