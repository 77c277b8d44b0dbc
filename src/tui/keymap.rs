//! Keymap translation layer.
//!
//! Keys are translated to [`Action`]s here; what an action does depends on
//! focus and is decided in `actions`.
//! - Vim keymap: hjkl navigation, single-letter commands.
//! - Emacs keymap: C-n/p/f/b navigation, C-g cancels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Mode;

/// Available keybinding schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keymap {
    Vim,
    Emacs,
}

impl Keymap {
    /// Look up a built-in keymap by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Keymap> {
        match name.trim().to_ascii_lowercase().as_str() {
            "vim" => Some(Keymap::Vim),
            "emacs" => Some(Keymap::Emacs),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Keymap::Vim => "vim",
            Keymap::Emacs => "emacs",
        }
    }

    pub fn status_hint(&self) -> &'static str {
        match self {
            Keymap::Vim => "Tab:focus  jk:sheet  hl:point  g:group  d:data  ?:help  q:quit",
            Keymap::Emacs => "Tab:focus  C-n/p:sheet  C-f/b:point  C-s:group  M-d:data  C-h:help  C-c:quit",
        }
    }
}

/// Actions that can be triggered by key presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Close the open popup, or quit from the dashboard.
    Cancel,
    Quit,
    /// Switch focus between the sheet list and the chart.
    ToggleFocus,
    Up,
    Down,
    Left,
    Right,
    /// Scroll a page up (-1) or down (+1).
    Page(i32),
    First,
    Last,
    /// Open the group dropdown.
    OpenPicker,
    /// Accept the highlighted entry.
    Confirm,
    ToggleData,
    ToggleHelp,
}

/// Translate a key event to an action for the current keymap and mode.
///
/// Returns `None` if the key has no binding in the current context.
pub fn translate(keymap: &Keymap, mode: Mode, key: KeyEvent) -> Option<Action> {
    if let Some(action) = translate_common(mode, key) {
        return Some(action);
    }
    match keymap {
        Keymap::Vim => translate_vim(mode, key),
        Keymap::Emacs => translate_emacs(mode, key),
    }
}

/// Keys that behave the same in every keymap.
fn translate_common(mode: Mode, key: KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Left if mode == Mode::Normal => Some(Action::Left),
        KeyCode::Right if mode == Mode::Normal => Some(Action::Right),
        KeyCode::PageUp => Some(Action::Page(-1)),
        KeyCode::PageDown => Some(Action::Page(1)),
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab | KeyCode::BackTab if mode == Mode::Normal => Some(Action::ToggleFocus),
        KeyCode::Enter if mode == Mode::GroupPicker => Some(Action::Confirm),
        KeyCode::Enter if mode == Mode::Normal => Some(Action::OpenPicker),
        KeyCode::Char('/') if mode == Mode::Normal => Some(Action::OpenPicker),
        _ => None,
    }
}

fn translate_vim(mode: Mode, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('d') => Some(Action::Page(1)),
            KeyCode::Char('u') => Some(Action::Page(-1)),
            _ => None,
        };
    }
    match mode {
        Mode::Normal => match key.code {
            KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Char('h') => Some(Action::Left),
            KeyCode::Char('l') => Some(Action::Right),
            KeyCode::Char('0') => Some(Action::First),
            KeyCode::Char('$') | KeyCode::Char('G') => Some(Action::Last),
            KeyCode::Char('g') => Some(Action::OpenPicker),
            KeyCode::Char('d') => Some(Action::ToggleData),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Mode::GroupPicker => match key.code {
            KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Char('g') => Some(Action::First),
            KeyCode::Char('G') => Some(Action::Last),
            KeyCode::Char('q') => Some(Action::Cancel),
            _ => None,
        },
        Mode::DataTable | Mode::Help => match key.code {
            KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Char('g') => Some(Action::First),
            KeyCode::Char('G') => Some(Action::Last),
            KeyCode::Char('q') => Some(Action::Cancel),
            KeyCode::Char('d') if mode == Mode::DataTable => Some(Action::ToggleData),
            KeyCode::Char('?') if mode == Mode::Help => Some(Action::ToggleHelp),
            _ => None,
        },
    }
}

fn translate_emacs(mode: Mode, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Shared by every mode
    match key.code {
        KeyCode::Char('g') if ctrl => return Some(Action::Cancel),
        KeyCode::Char('p') if ctrl => return Some(Action::Up),
        KeyCode::Char('n') if ctrl => return Some(Action::Down),
        KeyCode::Char('v') if ctrl => return Some(Action::Page(1)),
        KeyCode::Char('v') if alt => return Some(Action::Page(-1)),
        KeyCode::Char('<') if alt => return Some(Action::First),
        KeyCode::Char('>') if alt => return Some(Action::Last),
        _ => {}
    }

    match mode {
        Mode::Normal => match key.code {
            KeyCode::Char('f') if ctrl => Some(Action::Right),
            KeyCode::Char('b') if ctrl => Some(Action::Left),
            KeyCode::Char('a') if ctrl => Some(Action::First),
            KeyCode::Char('e') if ctrl => Some(Action::Last),
            KeyCode::Char('s') if ctrl => Some(Action::OpenPicker),
            KeyCode::Char('h') if ctrl => Some(Action::ToggleHelp),
            KeyCode::Char('c') if ctrl => Some(Action::Quit),
            KeyCode::Char('d') if alt => Some(Action::ToggleData),
            _ => None,
        },
        Mode::GroupPicker => match key.code {
            KeyCode::Char('m') if ctrl => Some(Action::Confirm),
            _ => None,
        },
        Mode::DataTable => match key.code {
            KeyCode::Char('d') if alt => Some(Action::ToggleData),
            _ => None,
        },
        Mode::Help => match key.code {
            KeyCode::Char('h') if ctrl => Some(Action::ToggleHelp),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Keymap::from_name("Vim"), Some(Keymap::Vim));
        assert_eq!(Keymap::from_name(" emacs "), Some(Keymap::Emacs));
        assert_eq!(Keymap::from_name("helix"), None);
        assert_eq!(Keymap::Emacs.name(), "emacs");
    }

    #[test]
    fn vim_normal_bindings() {
        let vim = Keymap::Vim;
        assert_eq!(translate(&vim, Mode::Normal, key(KeyCode::Char('j'))), Some(Action::Down));
        assert_eq!(translate(&vim, Mode::Normal, key(KeyCode::Char('l'))), Some(Action::Right));
        assert_eq!(translate(&vim, Mode::Normal, key(KeyCode::Char('g'))), Some(Action::OpenPicker));
        assert_eq!(translate(&vim, Mode::Normal, key(KeyCode::Enter)), Some(Action::OpenPicker));
        assert_eq!(translate(&vim, Mode::Normal, key(KeyCode::Tab)), Some(Action::ToggleFocus));
        assert_eq!(translate(&vim, Mode::Normal, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(translate(&vim, Mode::Normal, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn picker_confirms_and_cancels() {
        let vim = Keymap::Vim;
        assert_eq!(translate(&vim, Mode::GroupPicker, key(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(translate(&vim, Mode::GroupPicker, key(KeyCode::Esc)), Some(Action::Cancel));
        assert_eq!(translate(&vim, Mode::GroupPicker, key(KeyCode::Char('q'))), Some(Action::Cancel));
        assert_eq!(translate(&vim, Mode::GroupPicker, key(KeyCode::Tab)), None);
    }

    #[test]
    fn emacs_is_strict() {
        let emacs = Keymap::Emacs;
        assert_eq!(translate(&emacs, Mode::Normal, key(KeyCode::Char('j'))), None);
        assert_eq!(translate(&emacs, Mode::Normal, key(KeyCode::Char('q'))), None);
        assert_eq!(translate(&emacs, Mode::Normal, ctrl('n')), Some(Action::Down));
        assert_eq!(translate(&emacs, Mode::Normal, ctrl('b')), Some(Action::Left));
        assert_eq!(translate(&emacs, Mode::Normal, ctrl('c')), Some(Action::Quit));
        assert_eq!(translate(&emacs, Mode::GroupPicker, ctrl('g')), Some(Action::Cancel));
        assert_eq!(translate(&emacs, Mode::Help, ctrl('h')), Some(Action::ToggleHelp));
    }

    #[test]
    fn modals_scroll_with_arrows() {
        for keymap in [Keymap::Vim, Keymap::Emacs] {
            assert_eq!(translate(&keymap, Mode::DataTable, key(KeyCode::Down)), Some(Action::Down));
            assert_eq!(translate(&keymap, Mode::Help, key(KeyCode::PageUp)), Some(Action::Page(-1)));
            assert_eq!(translate(&keymap, Mode::Help, key(KeyCode::Left)), None);
        }
    }
}
