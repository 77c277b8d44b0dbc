//! Help text content for the help modal

use super::keymap::Keymap;

pub const ABOUT_HEADING: &str = "About Gradeline";

/// Get the about section
pub fn get_about_help() -> Vec<String> {
    vec![
        ABOUT_HEADING,
        "  Scores per group across evaluation rounds, with the change from",
        "  the previous round. Missing scores are shown as —.",
        "",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Get keybinding help text for the current keymap
pub fn get_help_text(keymap: &Keymap) -> Vec<String> {
    match keymap {
        Keymap::Vim => vec![
            "Navigation:",
            "  Tab          Switch focus (sheets / chart)",
            "  j/k          Next/previous sheet",
            "  h/l          Previous/next point",
            "  0 / $        First/last point",
            "",
            "Selection:",
            "  g / Enter    Choose group",
            "  /            Choose group",
            "",
            "Other:",
            "  d            Data table",
            "  ?            This help",
            "  q / Esc      Quit (Esc closes popups first)",
        ],
        Keymap::Emacs => vec![
            "Navigation:",
            "  Tab          Switch focus (sheets / chart)",
            "  C-n/C-p      Next/previous sheet",
            "  C-f/C-b      Next/previous point",
            "  C-a/C-e      First/last point",
            "",
            "Selection:",
            "  C-s / Enter  Choose group",
            "",
            "Other:",
            "  M-d          Data table",
            "  C-h          This help",
            "  C-g / Esc    Close popup",
            "  C-c          Quit",
        ],
    }
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Full modal contents: about section followed by the keybindings.
pub fn help_lines(keymap: &Keymap) -> Vec<String> {
    let mut lines = get_about_help();
    lines.extend(get_help_text(keymap));
    lines.push(String::new());
    lines.push("Press Esc or q to close".to_string());
    lines
}
