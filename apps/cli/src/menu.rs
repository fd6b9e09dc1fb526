//! Settings menu shown once at session start.

use std::io;

use flashdrill_core::StudySettings;

use crate::terminal::Terminal;

/// View-and-change loop over the study toggles: show the numbered list on
/// request, flip one entry at a time, and keep going until the user stops
/// viewing. Returns whether anything changed so the caller can save.
pub fn edit_settings(term: &mut Terminal, settings: &mut StudySettings) -> io::Result<bool> {
    let mut changed = false;
    loop {
        if !term.ask_yes_no("View settings?")? {
            return Ok(changed);
        }
        for (i, toggle) in settings.iter().enumerate() {
            term.print_line(&format!("{}. {} : {}", i + 1, toggle.name, toggle.enabled))?;
        }
        if term.ask_yes_no("Make changes?")? {
            let index = term.read_index("Select a setting to change.", 1, settings.len() + 1)? - 1;
            if let Some(enabled) = settings.toggle(index) {
                let name = settings
                    .get(index)
                    .map(|toggle| toggle.name.as_str())
                    .unwrap_or_default();
                term.print_line(&format!("Setting \"{name}\" changed to {enabled}."))?;
                changed = true;
            }
        }
    }
}
