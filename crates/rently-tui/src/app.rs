//! Application core — event loop, screen management, action dispatch.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use secrecy::SecretString;
use tokio::sync::mpsc;
use tracing::{debug, info};

use rently_core::{CoreError, Credentials, Portal, format};

use crate::action::Action;
use crate::data::{self, AppData};
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::contracts::ContractsScreen;
use crate::screens::dashboard::DashboardScreen;
use crate::screens::homes::HomesScreen;
use crate::screens::invoices::InvoicesScreen;
use crate::screens::login::{LoginOutcome, LoginScreen};
use crate::screens::mev::MevScreen;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    portal: Portal,
    active_screen: ScreenId,
    dashboard: DashboardScreen,
    homes: HomesScreen,
    contracts: ContractsScreen,
    invoices: InvoicesScreen,
    mev: MevScreen,
    login: LoginScreen,
    signed_in: bool,
    data: AppData,
    /// Transient status-line message (usually an error).
    status: Option<String>,
    help_visible: bool,
    running: bool,
    refreshing: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(portal: Portal, signed_in: bool) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            portal,
            active_screen: ScreenId::Dashboard,
            dashboard: DashboardScreen,
            homes: HomesScreen::default(),
            contracts: ContractsScreen::default(),
            invoices: InvoicesScreen::default(),
            mev: MevScreen::default(),
            login: LoginScreen::default(),
            signed_in,
            data: AppData::default(),
            status: None,
            help_visible: false,
            running: true,
            refreshing: false,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::new(
            Duration::from_secs(5),    // refresh heartbeat
            Duration::from_millis(33), // ~30 FPS render
        );

        info!("TUI event loop started");

        if self.signed_in {
            self.spawn_refresh();
        }

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => self.handle_key_event(key),
                Event::Tick => {
                    // Reads go through the cache, so inside the stale
                    // windows this is free.
                    if self.signed_in && !self.refreshing {
                        self.spawn_refresh();
                    }
                }
                Event::Render => {
                    tui.draw(|frame| self.render(frame))?;
                }
                Event::Resize(..) => {}
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(action);
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    // ── Background tasks ─────────────────────────────────────────────

    fn spawn_refresh(&mut self) {
        self.refreshing = true;
        let portal = self.portal.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            match data::refresh(&portal).await {
                Ok(snapshot) => {
                    let _ = tx.send(Action::DataLoaded(Box::new(snapshot)));
                }
                Err(CoreError::SessionExpired) => {
                    let _ = tx.send(Action::SessionExpired);
                }
                Err(e) => {
                    let _ = tx.send(Action::Error(e.to_string()));
                }
            }
        });
    }

    fn spawn_sign_in(&self, username: String, password: String) {
        let portal = self.portal.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let credentials = Credentials::Password {
                username: username.clone(),
                password: SecretString::from(password),
            };
            match portal.connect_with(credentials).await {
                Ok(()) => {
                    let _ = tx.send(Action::SignedIn(username));
                }
                Err(e) => {
                    let _ = tx.send(Action::SignInFailed(e.to_string()));
                }
            }
        });
    }

    // ── Input handling ───────────────────────────────────────────────

    fn handle_key_event(&mut self, key: KeyEvent) {
        // The sign-in gate swallows everything until a session exists.
        if !self.signed_in {
            match self.login.handle_key(key) {
                LoginOutcome::Quit => self.running = false,
                LoginOutcome::Submit { username, password } => {
                    self.spawn_sign_in(username, password);
                }
                LoginOutcome::Pending => {}
            }
            return;
        }

        if self.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.help_visible = false;
            }
            return;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q')) => {
                self.running = false;
            }
            (KeyModifiers::NONE, KeyCode::Char('?')) => {
                self.help_visible = true;
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                let _ = self.action_tx.send(Action::ForceRefresh);
            }
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='5')) => {
                if let Some(screen) = ScreenId::from_number(c as u8 - b'0') {
                    let _ = self.action_tx.send(Action::SwitchScreen(screen));
                }
            }
            (KeyModifiers::NONE, KeyCode::Tab) => {
                let _ = self
                    .action_tx
                    .send(Action::SwitchScreen(self.active_screen.next()));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                let _ = self
                    .action_tx
                    .send(Action::SwitchScreen(self.active_screen.prev()));
            }
            _ => {
                let action = match self.active_screen {
                    ScreenId::Dashboard => None,
                    ScreenId::Homes => self.homes.handle_key(key, &self.data),
                    ScreenId::Contracts => self.contracts.handle_key(key, &self.data),
                    ScreenId::Invoices => self.invoices.handle_key(key, &self.data),
                    ScreenId::Mev => self.mev.handle_key(key, &self.data),
                };
                if let Some(action) = action {
                    let _ = self.action_tx.send(action);
                }
            }
        }
    }

    // ── Action processing ────────────────────────────────────────────

    fn process_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,

            Action::SwitchScreen(target) => {
                if target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    self.active_screen = target;
                }
            }

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::ForceRefresh => {
                self.portal.invalidate_all();
                self.spawn_refresh();
            }

            Action::DataLoaded(snapshot) => {
                self.data = *snapshot;
                self.refreshing = false;
                self.status = None;
            }

            Action::SignedIn(username) => {
                info!(%username, "signed in");
                self.signed_in = true;
                self.login = LoginScreen::default();
                self.spawn_refresh();
            }

            Action::SignInFailed(message) => {
                self.login.fail(message);
            }

            Action::SessionExpired => {
                self.signed_in = false;
                self.refreshing = false;
                self.login = LoginScreen::default();
                self.login.error = Some("Phiên đăng nhập đã hết hạn".into());
            }

            Action::Error(message) => {
                self.refreshing = false;
                self.status = Some(message);
            }

            Action::Tick | Action::Render | Action::Resize(..) => {}
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if !self.signed_in {
            self.login.render(frame, area);
            return;
        }

        let layout = Layout::vertical([
            Constraint::Min(1),    // screen content
            Constraint::Length(1), // tab bar
            Constraint::Length(1), // status bar
        ])
        .split(area);

        match self.active_screen {
            ScreenId::Dashboard => self.dashboard.render(frame, layout[0], &self.data),
            ScreenId::Homes => self.homes.render(frame, layout[0], &self.data),
            ScreenId::Contracts => self.contracts.render(frame, layout[0], &self.data),
            ScreenId::Invoices => self.invoices.render(frame, layout[0], &self.data),
            ScreenId::Mev => self.mev.render(frame, layout[0], &self.data),
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let left = if let Some(ref message) = self.status {
            Span::styled(format!(" {message}"), Style::default().fg(theme::ERROR))
        } else if self.refreshing {
            Span::styled(" ◐ đang tải", Style::default().fg(theme::WARNING))
        } else {
            let age = self
                .data
                .refreshed_at
                .map(format::datetime)
                .unwrap_or_else(|| "-".into());
            Span::styled(
                format!(" ● cập nhật {age}"),
                Style::default().fg(theme::SUCCESS),
            )
        };

        let hints = Span::styled(" │ ? trợ giúp  r tải lại  q thoát", theme::key_hint());

        frame.render_widget(Paragraph::new(Line::from(vec![left, hints])), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 13u16.min(area.height.saturating_sub(4));
        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        let block = Block::default()
            .title(" Phím tắt ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(help_area);
        frame.render_widget(ratatui::widgets::Clear, help_area);
        frame.render_widget(block, help_area);

        let hint = |keys: &str, text: &str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<10}"), theme::title()),
                Span::styled(text.to_owned(), theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            hint("1-5", "Chuyển màn hình"),
            hint("Tab", "Màn hình kế tiếp"),
            hint("j/k ↑/↓", "Di chuyển lựa chọn"),
            hint("g/G", "Đầu / cuối danh sách"),
            hint("h/l", "Đổi tab con (MEV)"),
            hint("r", "Xóa cache và tải lại"),
            hint("?", "Trợ giúp"),
            hint("q", "Thoát"),
            Line::from(""),
            Line::from(Span::styled("  Esc hoặc ? để đóng", theme::key_hint())),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
