//! Fixed names and values shared by the config loader.

/// File name of the scene config, appended to the directory passed on the
/// command line.
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// Characters that make a config line count as blank.
pub const BLANK_LINE_CHARS: &[char] = &[' ', '\t', '\r', '\n'];
