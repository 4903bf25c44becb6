//! Home-contract table with detail pane.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use rently_core::format;

use crate::action::Action;
use crate::data::AppData;
use crate::theme;
use crate::widgets::badge::badge_span;
use crate::widgets::nav;

#[derive(Default)]
pub struct ContractsScreen {
    table: TableState,
}

impl ContractsScreen {
    pub fn handle_key(&mut self, key: KeyEvent, data: &AppData) -> Option<Action> {
        nav::handle_table_nav(&mut self.table, data.contracts.len(), key);
        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, data: &AppData) {
        nav::clamp_selection(&mut self.table, data.contracts.len());

        let layout =
            Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).split(area);

        self.render_table(frame, layout[0], data);
        self.render_detail(frame, layout[1], data);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, data: &AppData) {
        let rows: Vec<Row> = data
            .contracts
            .iter()
            .map(|c| {
                Row::new(vec![
                    Cell::from(c.id.to_string()),
                    Cell::from(
                        c.home
                            .as_ref()
                            .map(|h| h.name.clone())
                            .or_else(|| c.home_id.as_ref().map(ToString::to_string))
                            .unwrap_or_default(),
                    ),
                    Cell::from(
                        c.guest
                            .as_ref()
                            .map(|g| g.full_name.clone())
                            .or_else(|| c.guest_id.as_ref().map(ToString::to_string))
                            .unwrap_or_default(),
                    ),
                    Cell::from(format::vnd(c.rent_amount)),
                    Cell::from(badge_span(format::contract_status(c.status))),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Length(16),
                Constraint::Length(16),
            ],
        )
        .header(
            Row::new(vec!["ID", "Nhà", "Khách", "Tiền thuê", "Trạng thái"])
                .style(theme::header_row()),
        )
        .row_highlight_style(theme::selected_row())
        .block(
            Block::default()
                .title(format!(" Hợp đồng ({}) ", data.contracts.len()))
                .title_style(theme::title())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

        frame.render_stateful_widget(table, area, &mut self.table);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, data: &AppData) {
        let block = Block::default()
            .title(" Chi tiết ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(contract) = self.table.selected().and_then(|i| data.contracts.get(i)) else {
            return;
        };

        let mut lines = vec![
            Line::from(format!(
                "Nhà:        {}",
                contract
                    .home
                    .as_ref()
                    .map(|h| h.name.clone())
                    .unwrap_or_else(|| "-".into())
            )),
            Line::from(format!(
                "Khách:      {}",
                contract
                    .guest
                    .as_ref()
                    .map(|g| g.full_name.clone())
                    .unwrap_or_else(|| "-".into())
            )),
            Line::from(format!(
                "Thời hạn:   {} → {}",
                format::date_or_dash(contract.start_date),
                format::date_or_dash(contract.end_date)
            )),
            Line::from(format!(
                "Tiền thuê:  {}",
                format::vnd(contract.rent_amount)
            )),
        ];
        if let Some(deposit) = contract.deposit_amount {
            lines.push(Line::from(format!("Đặt cọc:    {}", format::vnd(deposit))));
        }
        if let Some(cycle) = contract.payment_cycle {
            lines.push(Line::from(format!(
                "Chu kỳ:     {}",
                format::payment_cycle(cycle)
            )));
        }
        lines.push(Line::from(vec![
            "Trạng thái: ".into(),
            badge_span(format::contract_status(contract.status)),
        ]));
        if let Some(ref note) = contract.note {
            lines.push(Line::from(format!("Ghi chú:    {note}")));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
