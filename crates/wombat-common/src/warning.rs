//! Engine warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the tree, layout and render components to report input that is
//! wrong but recoverable (unknown color keyword, junk shorthand token).

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;
use strum_macros::Display;

/// Engine component a warning originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Component {
    /// Node tree construction and prop parsing.
    Tree,
    /// Layout calculation.
    Layout,
    /// Rasterization and terminal output.
    Render,
    /// The command line front end.
    Cli,
}

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about bad input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once(Component::Tree, "unknown color keyword 'blurple'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: Component, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[wombat {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call when loading a new scene)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
