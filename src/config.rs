use crate::interpreter::linalg::DEFAULT_TOLERANCE;

/// Settings for one run of the interpreter.
///
/// The command line fills this in; library callers can start from
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Relative pivot tolerance below which a matrix counts as singular.
    pub tolerance:     f64,
    /// Print the parsed syntax tree before running.
    pub render_tree:   bool,
    /// Write the token listing next to the input file.
    pub token_listing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { tolerance:     DEFAULT_TOLERANCE,
               render_tree:   true,
               token_listing: true, }
    }
}
