//! Sign-in screen — the auth gate. Shown whenever the session is not
//! `SignedIn`; submits through `Portal::connect_with`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Field {
    #[default]
    Username,
    Password,
}

/// What the app should do after a key was handled.
pub enum LoginOutcome {
    /// Keep editing.
    Pending,
    /// Submit the current username/password.
    Submit { username: String, password: String },
    /// Quit the app.
    Quit,
}

#[derive(Default)]
pub struct LoginScreen {
    username: Input,
    password: Input,
    focus: Field,
    /// Last failure, shown under the form.
    pub error: Option<String>,
    /// True while a sign-in attempt is in flight.
    pub busy: bool,
}

impl LoginScreen {
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginOutcome {
        if self.busy {
            return LoginOutcome::Pending;
        }

        match key.code {
            KeyCode::Esc => return LoginOutcome::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Field::Username => Field::Password,
                    Field::Password => Field::Username,
                };
            }
            KeyCode::Enter => {
                if self.focus == Field::Username {
                    self.focus = Field::Password;
                } else if !self.username.value().trim().is_empty() {
                    self.error = None;
                    self.busy = true;
                    return LoginOutcome::Submit {
                        username: self.username.value().trim().to_owned(),
                        password: self.password.value().to_owned(),
                    };
                }
            }
            _ => {
                let event = crossterm::event::Event::Key(key);
                match self.focus {
                    Field::Username => {
                        self.username.handle_event(&event);
                    }
                    Field::Password => {
                        self.password.handle_event(&event);
                    }
                }
            }
        }
        LoginOutcome::Pending
    }

    pub fn fail(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
        self.password = Input::default();
        self.focus = Field::Password;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let form_width = 48u16.min(area.width.saturating_sub(4));
        let form_height = 11u16;
        let x = (area.width.saturating_sub(form_width)) / 2;
        let y = (area.height.saturating_sub(form_height)) / 2;
        let form_area = Rect::new(area.x + x, area.y + y, form_width, form_height);

        let block = Block::default()
            .title(" Đăng nhập ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let layout = Layout::vertical([
            Constraint::Length(1), // spacing
            Constraint::Length(1), // username
            Constraint::Length(1), // spacing
            Constraint::Length(1), // password
            Constraint::Length(1), // spacing
            Constraint::Length(1), // status
            Constraint::Length(1), // spacing
            Constraint::Length(1), // hint
        ])
        .split(inner);

        let field = |label: &str, value: String, focused: bool| {
            Line::from(vec![
                Span::styled(format!("  {label:<10}"), theme::key_hint()),
                Span::styled(
                    value,
                    if focused {
                        theme::title()
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(if focused { "▏" } else { "" }, theme::title()),
            ])
        };

        frame.render_widget(
            Paragraph::new(field(
                "Tài khoản",
                self.username.value().to_owned(),
                self.focus == Field::Username,
            )),
            layout[1],
        );
        frame.render_widget(
            Paragraph::new(field(
                "Mật khẩu",
                "•".repeat(self.password.value().chars().count()),
                self.focus == Field::Password,
            )),
            layout[3],
        );

        let status = if self.busy {
            Line::from(Span::styled("  Đang đăng nhập...", theme::key_hint()))
        } else if let Some(ref error) = self.error {
            Line::from(Span::styled(
                format!("  {error}"),
                Style::default().fg(theme::ERROR),
            ))
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(status), layout[5]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  Enter đăng nhập · Tab chuyển ô · Esc thoát",
                theme::key_hint(),
            ))),
            layout[7],
        );
    }
}
