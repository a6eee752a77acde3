use crate::todo::models::{TodoId, TodoItem};
use crate::tui::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, HighlightSpacing, List, ListItem, ListState, Paragraph, Wrap},
};

const TITLE: &str = "ToDoリスト";
const PLACEHOLDER: &str = "新しいタスクを入力...";
const SUBMIT_LABEL: &str = "追加";
const DELETE_LABEL: &str = "[削除]";
const HIGHLIGHT_SYMBOL: &str = "> ";
const CHECKBOX_WIDTH: usize = 1;

/// Where each control lands for a given terminal area. Drawing and mouse hit
/// testing both go through this so they cannot disagree.
#[derive(Debug, Clone, Copy)]
pub struct WidgetLayout {
    pub heading: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub list: Rect,
    pub footer: Rect,
}

impl WidgetLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Heading
                Constraint::Length(3), // Input row
                Constraint::Min(0),    // Items
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(8)])
            .split(chunks[1]);

        Self {
            heading: chunks[0],
            input: input_row[0],
            submit: input_row[1],
            list: chunks[2],
            footer: chunks[3],
        }
    }

    pub fn list_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.list)
    }

    pub fn visible_rows(&self) -> usize {
        self.list_inner().height as usize
    }
}

/// A control under the mouse pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    Submit,
    Checkbox(TodoId),
    Delete(TodoId),
    Row(TodoId),
}

pub fn draw(frame: &mut Frame, app: &App) {
    let layout = WidgetLayout::new(frame.size());

    draw_heading(frame, layout.heading, app);
    draw_input(frame, &layout, app);
    draw_todo_list(frame, layout.list, app);
    draw_footer(frame, layout.footer, app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_heading(frame: &mut Frame, area: Rect, app: &App) {
    let heading = Paragraph::new(TITLE)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(app.settings.accent)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(heading, area);
}

fn draw_input(frame: &mut Frame, layout: &WidgetLayout, app: &App) {
    let focused = app.focus == Focus::Input;

    let text = if app.draft.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.draft.value())
    };
    let inner = Block::default().borders(Borders::ALL).inner(layout.input);
    let (scroll, cursor_col) = input_scroll(app.draft.value(), app.draft.cursor(), inner.width);
    let input = Paragraph::new(Line::from(text))
        .scroll((0, scroll))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(focused, app.settings.accent)),
        );
    frame.render_widget(input, layout.input);

    let submit = Paragraph::new(SUBMIT_LABEL)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(submit, layout.submit);

    if focused && !app.help_mode && inner.width > 0 {
        frame.set_cursor(inner.x.saturating_add(cursor_col), inner.y);
    }
}

/// Horizontal scroll for the input field and the cursor column inside it.
/// The draft scrolls just far enough that the cursor stays on the last
/// visible column.
pub fn input_scroll(draft: &str, cursor: usize, width: u16) -> (u16, u16) {
    let before_cursor = Span::raw(&draft[..cursor]).width();
    let last_col = usize::from(width.saturating_sub(1));
    let scroll = before_cursor.saturating_sub(last_col);

    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    let cursor_col = u16::try_from(before_cursor.min(last_col)).unwrap_or(u16::MAX);
    (scroll, cursor_col)
}

fn row_line(item: &TodoItem) -> Line<'_> {
    let checkbox = if item.completed { "☑" } else { "☐" };
    let text_style = if item.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };

    // Controls come first so that long text is clipped instead of them.
    Line::from(vec![
        Span::raw(checkbox),
        Span::raw(" "),
        Span::styled(DELETE_LABEL, Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled(item.text.as_str(), text_style),
    ])
}

fn draw_todo_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .todo_list
        .items()
        .iter()
        .map(|item| ListItem::new(row_line(item)))
        .collect();

    let focused = app.focus == Focus::List;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(focused, app.settings.accent)),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let selected = (focused && !app.todo_list.is_empty()).then_some(app.selected_index);
    let mut list_state = ListState::default()
        .with_offset(app.scroll_offset)
        .with_selected(selected);

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Input => "Enter: add | Tab/Esc: list | Ctrl+W: delete word | Ctrl+C: quit",
        Focus::List => "↑↓/j/k: move | Space: toggle | d: delete | Tab: input | ?: help | q: quit",
    };
    let footer_text = if app.settings.show_counts {
        format!(
            "Items: {} | Completed: {} | {}",
            app.total_items(),
            app.completed_items(),
            hints
        )
    } else {
        hints.to_string()
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn focus_border(focused: bool, accent: Color) -> Style {
    if focused {
        Style::default().fg(accent)
    } else {
        Style::default()
    }
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Todo List - Keyboard Commands",
        "",
        "INPUT:",
        "  Enter             Add the typed task",
        "  Tab / Esc / ↓     Move focus to the list",
        "  Ctrl+W            Delete previous word",
        "  Ctrl+←→           Jump by word",
        "",
        "LIST:",
        "  ↑↓ / j/k          Navigate up/down",
        "  g / G             First / last item",
        "  Space / Enter / x Toggle completion",
        "  d / Delete        Delete item",
        "  Tab / i / a       Move focus to the input",
        "",
        "MOUSE:",
        "  Click ☐ to toggle, [削除] to delete, 追加 to add",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Columns of the checkbox and the delete control on a list row. These do not
/// depend on the item, only on the list area. Either is `None` when the list
/// is too narrow to show it whole.
pub fn row_control_columns(area: Rect) -> (Option<u16>, Option<u16>) {
    let inner = WidgetLayout::new(area).list_inner();
    let right = usize::from(inner.right());

    let checkbox_x = usize::from(inner.x) + Span::raw(HIGHLIGHT_SYMBOL).width();
    let delete_x = checkbox_x + CHECKBOX_WIDTH + 1;

    let fits = |x: usize, width: usize| (x + width <= right).then_some(x as u16);
    (
        fits(checkbox_x, CHECKBOX_WIDTH),
        fits(delete_x, Span::raw(DELETE_LABEL).width()),
    )
}

pub fn hit_test(app: &App, area: Rect, column: u16, row: u16) -> Option<Hit> {
    let layout = WidgetLayout::new(area);

    if contains(layout.input, column, row) {
        return Some(Hit::Input);
    }
    if contains(layout.submit, column, row) {
        return Some(Hit::Submit);
    }

    let inner = layout.list_inner();
    if !contains(inner, column, row) {
        return None;
    }

    let index = app.scroll_offset + usize::from(row - inner.y);
    let item = app.todo_list.get(index)?;
    let (checkbox_x, delete_x) = row_control_columns(area);
    let column = usize::from(column);
    let within = |x: Option<u16>, width: usize| {
        x.is_some_and(|x| column >= usize::from(x) && column < usize::from(x) + width)
    };

    if within(checkbox_x, CHECKBOX_WIDTH) {
        Some(Hit::Checkbox(item.id))
    } else if within(delete_x, Span::raw(DELETE_LABEL).width()) {
        Some(Hit::Delete(item.id))
    } else {
        Some(Hit::Row(item.id))
    }
}
