use crate::config::Settings;
use crate::todo::models::{TodoId, TodoList};
use crate::tui::handlers::{HelpAction, InputAction, KeyHandler, ListAction};
use crate::tui::input::DraftInput;
use crate::tui::ui::{self, Hit};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

#[derive(Debug)]
pub struct App {
    pub todo_list: TodoList,
    pub draft: DraftInput,
    pub focus: Focus,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub help_mode: bool,
    pub should_quit: bool,
    pub settings: Settings,
    visible_rows: usize,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            todo_list: TodoList::new(),
            draft: DraftInput::new(),
            focus: Focus::Input,
            selected_index: 0,
            scroll_offset: 0,
            help_mode: false,
            should_quit: false,
            settings,
            visible_rows: usize::MAX,
        }
    }

    /// Commits `text` as a new item and clears the draft. Blank text leaves
    /// everything, the draft included, as it was.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        match self.todo_list.add(text) {
            Some(id) => {
                debug!(%id, total = self.todo_list.len(), "added item");
                self.draft.clear();
                Some(id)
            }
            None => {
                trace!("ignored blank draft");
                None
            }
        }
    }

    pub fn submit_draft(&mut self) -> Option<TodoId> {
        let text = self.draft.value().to_string();
        self.add(&text)
    }

    pub fn toggle_completed(&mut self, id: TodoId) {
        if self.todo_list.toggle(id) {
            debug!(%id, "toggled item");
        } else {
            trace!(%id, "toggle ignored, no such item");
        }
    }

    pub fn delete_item(&mut self, id: TodoId) {
        if self.todo_list.remove(id) {
            debug!(%id, total = self.todo_list.len(), "deleted item");
            self.clamp_selection();
        } else {
            trace!(%id, "delete ignored, no such item");
        }
    }

    pub fn set_draft_text(&mut self, value: impl Into<String>) {
        self.draft.set(value);
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.todo_list.get(self.selected_index).map(|item| item.id)
    }

    /// Records the terminal size so scrolling and hit testing agree with what
    /// was drawn.
    pub fn resize(&mut self, area: Rect) {
        self.visible_rows = ui::WidgetLayout::new(area).visible_rows();
        self.update_scroll();
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self.help_mode {
            self.handle_help_key(key_event);
        } else {
            match self.focus {
                Focus::Input => self.handle_input_key(key_event),
                Focus::List => self.handle_list_key(key_event),
            }
        }
    }

    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent, area: Rect) {
        if self.help_mode || mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match ui::hit_test(self, area, mouse_event.column, mouse_event.row) {
            Some(Hit::Input) => self.focus = Focus::Input,
            Some(Hit::Submit) => {
                self.submit_draft();
            }
            Some(Hit::Checkbox(id)) => {
                self.select_id(id);
                self.toggle_completed(id);
            }
            Some(Hit::Delete(id)) => self.delete_item(id),
            Some(Hit::Row(id)) => self.select_id(id),
            None => {}
        }
    }

    fn handle_help_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_key(key_event) {
            HelpAction::Close => self.help_mode = false,
            HelpAction::None => {}
        }
    }

    fn handle_list_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_list_key(key_event) {
            ListAction::Quit => self.should_quit = true,
            ListAction::MoveSelectionUp => self.move_selection_up(),
            ListAction::MoveSelectionDown => self.move_selection_down(),
            ListAction::MoveSelectionFirst => {
                self.selected_index = 0;
                self.update_scroll();
            }
            ListAction::MoveSelectionLast => {
                self.selected_index = self.todo_list.len().saturating_sub(1);
                self.update_scroll();
            }
            ListAction::ToggleSelected => {
                if let Some(id) = self.selected_id() {
                    self.toggle_completed(id);
                }
            }
            ListAction::DeleteSelected => {
                if let Some(id) = self.selected_id() {
                    self.delete_item(id);
                }
            }
            ListAction::FocusInput => self.focus = Focus::Input,
            ListAction::ShowHelp => self.help_mode = true,
            ListAction::None => {}
        }
    }

    fn handle_input_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_input_key(key_event) {
            InputAction::Quit => self.should_quit = true,
            InputAction::Submit => {
                self.submit_draft();
            }
            InputAction::FocusList => self.focus = Focus::List,
            InputAction::InsertChar(c) => self.draft.insert_char(c),
            InputAction::Backspace => self.draft.backspace(),
            InputAction::Delete => self.draft.delete(),
            InputAction::DeleteWordBackward => self.draft.delete_word_backward(),
            InputAction::MoveCursorLeft => self.draft.move_cursor_left(),
            InputAction::MoveCursorRight => self.draft.move_cursor_right(),
            InputAction::MoveCursorHome => self.draft.move_cursor_home(),
            InputAction::MoveCursorEnd => self.draft.move_cursor_end(),
            InputAction::MoveToPreviousWord => self.draft.move_to_previous_word(),
            InputAction::MoveToNextWord => self.draft.move_to_next_word(),
            InputAction::None => {}
        }
    }

    fn select_id(&mut self, id: TodoId) {
        if let Some(index) = self.todo_list.position(id) {
            self.selected_index = index;
            self.focus = Focus::List;
            self.update_scroll();
        }
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.update_scroll();
        }
    }

    fn move_selection_down(&mut self) {
        if self.selected_index < self.todo_list.len().saturating_sub(1) {
            self.selected_index += 1;
            self.update_scroll();
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.todo_list.len().saturating_sub(1));
        self.update_scroll();
    }

    fn update_scroll(&mut self) {
        let visible = self.visible_rows.max(1);
        let max_offset = self.todo_list.len().saturating_sub(visible);

        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset.saturating_add(visible) {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    pub fn total_items(&self) -> usize {
        self.todo_list.total_items()
    }

    pub fn completed_items(&self) -> usize {
        self.todo_list.completed_items()
    }
}
