//! Rendering. Pure mapping from app state to widgets; nothing in here
//! mutates the session.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tally_core::friend::{Friend, Standing};
use tally_core::session::UiMode;
use tally_core::split::Payer;

use crate::app::{App, Focus};

pub fn render(frame: &mut Frame, app: &App) {
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(42), Constraint::Fill(1)]).areas(frame.area());

    render_sidebar(frame, app, sidebar);

    let [body, status] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(main);

    match app.session().mode() {
        UiMode::Idle => render_idle(frame, body),
        UiMode::AddingFriend => render_add_form(frame, app, body),
        UiMode::Splitting { .. } => render_split_form(frame, app, body),
    }

    if let Some(message) = app.status() {
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Yellow)),
            status,
        );
    }
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let [list_area, hint] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    let selected_id = app.session().mode().selected_friend_id();
    let items: Vec<ListItem> = app
        .session()
        .registry()
        .friends()
        .iter()
        .enumerate()
        .map(|(i, friend)| friend_item(friend, i == app.list_index(), selected_id))
        .collect();

    let list = List::new(items).block(Block::default().title(" Friends ").borders(Borders::ALL));
    frame.render_widget(list, list_area);

    let hint_text = if app.session().mode().is_adding() {
        "a Close | Tab Field | Enter Add"
    } else if selected_id.is_some() {
        "Tab Field | Enter Split | Esc Close"
    } else {
        "j/k Move | Enter Select | a Add Friend | q Quit"
    };
    frame.render_widget(
        Paragraph::new(hint_text).style(Style::default().fg(Color::DarkGray)),
        hint,
    );
}

fn friend_item<'a>(friend: &'a Friend, under_cursor: bool, selected_id: Option<&str>) -> ListItem<'a> {
    let is_selected = selected_id == Some(friend.id.as_str());

    let mut name_line = Line::from(vec![
        Span::raw(if under_cursor { "> " } else { "  " }),
        Span::styled(&friend.name, Style::default().bold()),
        Span::raw(if is_selected { "  [splitting]" } else { "" }),
    ]);
    if under_cursor {
        name_line = name_line.style(Style::default().fg(Color::Cyan));
    }

    let (text, color) = match friend.standing() {
        Standing::UserOwes(amount) => (
            format!("  You owe {} ${}", friend.name, amount),
            Some(Color::Red),
        ),
        Standing::FriendOwes(amount) => (
            format!("  {} owes you ${}", friend.name, amount),
            Some(Color::Green),
        ),
        Standing::Even => (format!("  You and {} are even", friend.name), None),
    };
    let standing_line = match color {
        Some(color) => Line::from(Span::styled(text, Style::default().fg(color))),
        None => Line::from(text),
    };

    ListItem::new(vec![name_line, standing_line])
}

fn render_idle(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("Select a friend to split a bill, or add a new one.")
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Add a friend ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, name_label, name_input, _, image_label, image_input, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let form = app.session().add_form();
    frame.render_widget(Paragraph::new("Friend name").bold(), name_label);
    render_field(
        frame,
        name_input,
        &form.name,
        app.focus() == Focus::AddName,
    );

    frame.render_widget(Paragraph::new("Image URL").bold(), image_label);
    render_field(
        frame,
        image_input,
        &form.image_url,
        app.focus() == Focus::AddImage,
    );

    let (cursor_area, cursor_text) = match app.focus() {
        Focus::AddImage => (image_input, form.image_url.as_str()),
        _ => (name_input, form.name.as_str()),
    };
    set_field_cursor(frame, cursor_area, cursor_text);
}

fn render_split_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(friend) = app.session().selected_friend() else {
        return;
    };
    let Some(draft) = app.session().split_draft() else {
        return;
    };

    let block = Block::default()
        .title(format!(" Split the bill with {} ", friend.name))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, bill_label, bill_input, expense_label, expense_input, friend_label, friend_value, payer_label, payer_value, _] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

    frame.render_widget(Paragraph::new("Bill value").bold(), bill_label);
    render_field(frame, bill_input, app.bill_input(), app.focus() == Focus::Bill);

    frame.render_widget(Paragraph::new("Your expense").bold(), expense_label);
    render_field(
        frame,
        expense_input,
        app.expense_input(),
        app.focus() == Focus::Expense,
    );

    // Derived, display-only
    frame.render_widget(
        Paragraph::new(format!("{}'s expense", friend.name)).bold(),
        friend_label,
    );
    let derived = draft
        .friend_expense()
        .map(|v| v.to_string())
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(derived).style(Style::default().fg(Color::DarkGray)),
        friend_value,
    );

    frame.render_widget(Paragraph::new("Who's paying the bill?").bold(), payer_label);
    let payer_line = match draft.payer() {
        Payer::User => Line::from(vec![
            Span::styled("[You]", Style::default().fg(Color::Cyan)),
            Span::raw(format!("  {}", friend.name)),
        ]),
        Payer::Friend => Line::from(vec![
            Span::raw("You  "),
            Span::styled(
                format!("[{}]", friend.name),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    };
    let payer_style = if app.focus() == Focus::Payer {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(payer_line).style(payer_style), payer_value);

    match app.focus() {
        Focus::Bill => set_field_cursor(frame, bill_input, app.bill_input()),
        Focus::Expense => set_field_cursor(frame, expense_input, app.expense_input()),
        _ => {}
    }
}

fn render_field(frame: &mut Frame, area: Rect, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        ),
        area,
    );
}

/// Place the cursor at the end of a bordered input field.
fn set_field_cursor(frame: &mut Frame, area: Rect, text: &str) {
    frame.set_cursor_position(Position::new(area.x + 1 + text.len() as u16, area.y + 1));
}
