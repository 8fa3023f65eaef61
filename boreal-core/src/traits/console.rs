//! Diagnostic console trait

/// Write side of the AT command console
///
/// Command parsing is the console driver's job; the core only emits
/// complete lines (`$SEND`, `$STATUS`, `$JOIN_OK`, `$JOIN_ERROR`)
/// and exposes handlers the driver calls for the two read commands.
pub trait Console {
    /// Emit one line, terminator handled by the driver
    fn emit(&mut self, line: &str);
}
