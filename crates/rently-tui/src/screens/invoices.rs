//! Invoice table.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState};

use rently_core::format;

use crate::action::Action;
use crate::data::AppData;
use crate::theme;
use crate::widgets::badge::badge_span;
use crate::widgets::nav;

#[derive(Default)]
pub struct InvoicesScreen {
    table: TableState,
}

impl InvoicesScreen {
    pub fn handle_key(&mut self, key: KeyEvent, data: &AppData) -> Option<Action> {
        nav::handle_table_nav(&mut self.table, data.invoices.len(), key);
        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, data: &AppData) {
        nav::clamp_selection(&mut self.table, data.invoices.len());

        let rows: Vec<Row> = data
            .invoices
            .iter()
            .map(|i| {
                Row::new(vec![
                    Cell::from(i.id.to_string()),
                    Cell::from(
                        i.home_contract_id
                            .as_ref()
                            .or(i.service_contract_id.as_ref())
                            .map(ToString::to_string)
                            .unwrap_or_default(),
                    ),
                    Cell::from(format::vnd(i.amount)),
                    Cell::from(format::date_or_dash(i.due_date)),
                    Cell::from(format::date_or_dash(i.paid_date)),
                    Cell::from(badge_span(format::payment_status(i.status))),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(10),
                Constraint::Length(16),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Fill(1),
            ],
        )
        .header(
            Row::new(vec![
                "ID",
                "Hợp đồng",
                "Số tiền",
                "Hạn thu",
                "Ngày thu",
                "Trạng thái",
            ])
            .style(theme::header_row()),
        )
        .row_highlight_style(theme::selected_row())
        .block(
            Block::default()
                .title(format!(" Hóa đơn ({}) ", data.invoices.len()))
                .title_style(theme::title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

        frame.render_stateful_widget(table, area, &mut self.table);
    }
}
