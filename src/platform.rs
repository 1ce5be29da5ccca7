//! Platform-specific configuration

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Add education entry shortcut display
/// - macOS: "Cmd+N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const ADD_ENTRY_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const ADD_ENTRY_SHORTCUT: &str = "Ctrl+N";

/// Remove education entry shortcut display
#[cfg(target_os = "macos")]
pub const REMOVE_ENTRY_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_ENTRY_SHORTCUT: &str = "Ctrl+D";
