//! Homes table with a detail pane for the selected row.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use rently_core::format;

use crate::action::Action;
use crate::data::AppData;
use crate::theme;
use crate::widgets::nav;

#[derive(Default)]
pub struct HomesScreen {
    table: TableState,
}

impl HomesScreen {
    pub fn handle_key(&mut self, key: KeyEvent, data: &AppData) -> Option<Action> {
        nav::handle_table_nav(&mut self.table, data.homes.len(), key);
        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, data: &AppData) {
        nav::clamp_selection(&mut self.table, data.homes.len());

        let layout =
            Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).split(area);

        self.render_table(frame, layout[0], data);
        self.render_detail(frame, layout[1], data);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, data: &AppData) {
        let rows: Vec<Row> = data
            .homes
            .iter()
            .map(|h| {
                Row::new(vec![
                    Cell::from(h.id.to_string()),
                    Cell::from(h.name.clone()),
                    Cell::from(h.address.clone().unwrap_or_default()),
                    Cell::from(h.base_price.map(format::vnd).unwrap_or_default()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Fill(2),
                Constraint::Fill(3),
                Constraint::Length(16),
            ],
        )
        .header(Row::new(vec!["ID", "Tên", "Địa chỉ", "Giá"]).style(theme::header_row()))
        .row_highlight_style(theme::selected_row())
        .block(
            Block::default()
                .title(format!(" Nhà ({}) ", data.homes.len()))
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

        let Some(home) = self.table.selected().and_then(|i| data.homes.get(i)) else {
            return;
        };

        let mut lines = vec![
            format!("Tên:      {}", home.name),
            format!("Địa chỉ:  {}", home.address.as_deref().unwrap_or("-")),
        ];
        if let Some(ref owner) = home.owner {
            lines.push(format!("Chủ nhà:  {}", owner.full_name));
            if let Some(ref phone) = owner.phone {
                lines.push(format!("SĐT:      {phone}"));
            }
        }
        if let Some(rooms) = home.room_count {
            lines.push(format!("Số phòng: {rooms}"));
        }
        if let Some(price) = home.base_price {
            lines.push(format!("Giá:      {}", format::vnd(price)));
        }
        if let Some(ref note) = home.note {
            lines.push(format!("Ghi chú:  {note}"));
        }

        frame.render_widget(Paragraph::new(lines.join("\n")), inner);
    }
}
