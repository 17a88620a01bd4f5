//! Shell state and key handling.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;
use tally_core::config::TallyConfig;
use tally_core::session::SessionState;
use tally_core::split::Payer;

use crate::ui;

/// Which widget receives keystrokes.
#[derive(Clone, Copy, PartialEq)]
pub enum Focus {
    FriendList,
    AddName,
    AddImage,
    Bill,
    Expense,
    Payer,
}

/// Shell-owned presentation state around the core session.
///
/// `bill_input` and `expense_input` are the raw text being typed; each
/// keystroke is committed through the draft's parse-and-validate entry
/// points, so a rejected keystroke (non-numeric, or an expense over
/// the bill) simply never lands in the buffer.
pub struct App {
    session: SessionState,
    focus: Focus,
    /// Cursor position in the friend list
    list_index: usize,
    bill_input: String,
    expense_input: String,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &TallyConfig) -> Self {
        Self {
            session: SessionState::new(config),
            focus: Focus::FriendList,
            list_index: 0,
            bill_input: String::new(),
            expense_input: String::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn list_index(&self) -> usize {
        self.list_index
    }

    pub fn bill_input(&self) -> &str {
        &self.bill_input
    }

    pub fn expense_input(&self) -> &str {
        &self.expense_input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();

        loop {
            terminal.draw(|frame| ui::render(frame, &self))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    // Windows compatibility: only handle Press events
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        ratatui::restore();
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        self.status = None;
        match self.focus {
            Focus::FriendList => self.handle_list_key(key),
            Focus::AddName | Focus::AddImage => self.handle_add_form_key(key),
            Focus::Bill | Focus::Expense | Focus::Payer => self.handle_split_form_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_index = self.list_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.session.registry().len().saturating_sub(1);
                if self.list_index < last {
                    self.list_index += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Some(friend) = self.session.registry().friends().get(self.list_index) else {
                    return;
                };
                let id = friend.id.clone();
                self.session.select_friend(&id);
                self.bill_input.clear();
                self.expense_input.clear();
                if self.session.mode().selected_friend_id().is_some() {
                    self.focus = Focus::Bill;
                }
            }
            KeyCode::Char('a') => {
                self.session.toggle_add_friend();
                self.focus = if self.session.mode().is_adding() {
                    Focus::AddName
                } else {
                    Focus::FriendList
                };
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_add_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::AddName => Focus::AddImage,
                    _ => Focus::AddName,
                };
            }
            KeyCode::Char(c) => {
                let form = self.session.add_form_mut();
                match self.focus {
                    Focus::AddName => form.name.push(c),
                    _ => form.image_url.push(c),
                }
            }
            KeyCode::Backspace => {
                let form = self.session.add_form_mut();
                match self.focus {
                    Focus::AddName => {
                        form.name.pop();
                    }
                    _ => {
                        form.image_url.pop();
                    }
                }
            }
            KeyCode::Enter => match self.session.submit_add_friend() {
                Ok(friend) => {
                    self.status = Some(format!("Added {}", friend.name));
                    self.focus = Focus::FriendList;
                }
                Err(err) => self.status = Some(err.to_string()),
            },
            KeyCode::Esc => {
                self.session.toggle_add_friend();
                self.focus = Focus::FriendList;
            }
            _ => {}
        }
    }

    fn handle_split_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Bill => Focus::Expense,
                    Focus::Expense => Focus::Payer,
                    _ => Focus::Bill,
                };
            }
            KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Bill => Focus::Payer,
                    Focus::Expense => Focus::Bill,
                    _ => Focus::Expense,
                };
            }
            KeyCode::Char(c) if self.focus == Focus::Bill => {
                let candidate = format!("{}{}", self.bill_input, c);
                self.commit_bill(candidate);
            }
            KeyCode::Char(c) if self.focus == Focus::Expense => {
                let candidate = format!("{}{}", self.expense_input, c);
                self.commit_expense(candidate);
            }
            KeyCode::Backspace if self.focus == Focus::Bill => {
                let mut candidate = self.bill_input.clone();
                candidate.pop();
                self.commit_bill(candidate);
            }
            KeyCode::Backspace if self.focus == Focus::Expense => {
                let mut candidate = self.expense_input.clone();
                candidate.pop();
                self.commit_expense(candidate);
            }
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right if self.focus == Focus::Payer => {
                if let Some(draft) = self.session.split_draft_mut() {
                    let next = match draft.payer() {
                        Payer::User => Payer::Friend,
                        Payer::Friend => Payer::User,
                    };
                    draft.set_payer(next);
                }
            }
            KeyCode::Enter => {
                let name = self
                    .session
                    .selected_friend()
                    .map(|f| f.name.clone())
                    .unwrap_or_default();
                match self.session.submit_split() {
                    Ok(_) => {
                        self.status = Some(format!("Split recorded with {name}"));
                        self.bill_input.clear();
                        self.expense_input.clear();
                        self.focus = Focus::FriendList;
                    }
                    Err(err) => self.status = Some(err.to_string()),
                }
            }
            KeyCode::Esc => {
                if let Some(id) = self.session.mode().selected_friend_id() {
                    let id = id.to_string();
                    // Toggle-off: selecting the selected friend again
                    self.session.select_friend(&id);
                }
                self.bill_input.clear();
                self.expense_input.clear();
                self.focus = Focus::FriendList;
            }
            _ => {}
        }
    }

    /// Runs a candidate bill string through the draft; the buffer only
    /// changes if the core accepts it.
    fn commit_bill(&mut self, candidate: String) {
        let Some(draft) = self.session.split_draft_mut() else {
            return;
        };
        if draft.enter_bill_total(&candidate).is_ok() {
            self.bill_input = candidate;
        }
    }

    /// Same for the expense field. Over-bill input is silently dropped
    /// and the prior value is kept, including on screen.
    fn commit_expense(&mut self, candidate: String) {
        let Some(draft) = self.session.split_draft_mut() else {
            return;
        };
        if draft.enter_user_expense(&candidate).is_ok() {
            self.expense_input = candidate;
        }
    }
}
