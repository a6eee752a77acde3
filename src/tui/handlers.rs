use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_list_key(key_event: KeyEvent) -> ListAction {
        match key_event.code {
            KeyCode::Char('q') => ListAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                ListAction::Quit
            }
            KeyCode::Up | KeyCode::Char('k') => ListAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => ListAction::MoveSelectionDown,
            KeyCode::Home | KeyCode::Char('g') => ListAction::MoveSelectionFirst,
            KeyCode::End | KeyCode::Char('G') => ListAction::MoveSelectionLast,
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => ListAction::ToggleSelected,
            KeyCode::Char('d') | KeyCode::Delete => ListAction::DeleteSelected,
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') => ListAction::FocusInput,
            KeyCode::Char('?') => ListAction::ShowHelp,
            _ => ListAction::None,
        }
    }

    pub fn handle_input_key(key_event: KeyEvent) -> InputAction {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('c') if ctrl => InputAction::Quit,
            KeyCode::Char('w') if ctrl => InputAction::DeleteWordBackward,
            KeyCode::Left if ctrl => InputAction::MoveToPreviousWord,
            KeyCode::Right if ctrl => InputAction::MoveToNextWord,
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Tab | KeyCode::Esc | KeyCode::Down => InputAction::FocusList,
            KeyCode::Backspace => InputAction::Backspace,
            KeyCode::Delete => InputAction::Delete,
            KeyCode::Left => InputAction::MoveCursorLeft,
            KeyCode::Right => InputAction::MoveCursorRight,
            KeyCode::Home => InputAction::MoveCursorHome,
            KeyCode::End => InputAction::MoveCursorEnd,
            KeyCode::Char(c) if !ctrl => InputAction::InsertChar(c),
            _ => InputAction::None,
        }
    }

    pub fn handle_help_key(key_event: KeyEvent) -> HelpAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => HelpAction::Close,
            _ => HelpAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ListAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    MoveSelectionFirst,
    MoveSelectionLast,
    ToggleSelected,
    DeleteSelected,
    FocusInput,
    ShowHelp,
}

#[derive(Debug, PartialEq)]
pub enum InputAction {
    None,
    Quit,
    Submit,
    FocusList,
    InsertChar(char),
    Backspace,
    Delete,
    DeleteWordBackward,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    MoveToPreviousWord,
    MoveToNextWord,
}

#[derive(Debug, PartialEq)]
pub enum HelpAction {
    None,
    Close,
}
