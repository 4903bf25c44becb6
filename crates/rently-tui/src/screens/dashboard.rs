//! Overview screen: aggregate figures plus the most recent contracts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use rently_core::format;

use crate::data::AppData;
use crate::theme;
use crate::widgets::badge::badge_span;

#[derive(Default)]
pub struct DashboardScreen;

impl DashboardScreen {
    pub fn render(&self, frame: &mut Frame, area: Rect, data: &AppData) {
        let layout = Layout::vertical([
            Constraint::Length(7), // stat tiles
            Constraint::Min(1),    // recent contracts
        ])
        .split(area);

        self.render_stats(frame, layout[0], data);
        self.render_recent_contracts(frame, layout[1], data);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, data: &AppData) {
        let block = Block::default()
            .title(" Tổng quan ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(ref stats) = data.stats else {
            frame.render_widget(Paragraph::new("Đang tải dữ liệu..."), inner);
            return;
        };

        let mut lines = vec![
            stat_line("Nhà đang quản lý", stats.home_count.to_string()),
            stat_line("Khách thuê", stats.guest_count.to_string()),
            stat_line("Hợp đồng hiệu lực", stats.active_contract_count.to_string()),
            stat_line(
                "Hợp đồng sắp hết hạn",
                stats.expiring_contract_count.to_string(),
            ),
            stat_line(
                "Hóa đơn chưa thanh toán",
                stats.unpaid_invoice_count.to_string(),
            ),
        ];
        if let Some(revenue) = stats.revenue_this_month {
            lines.push(stat_line("Doanh thu tháng này", format::vnd(revenue)));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_recent_contracts(&self, frame: &mut Frame, area: Rect, data: &AppData) {
        let block = Block::default()
            .title(" Hợp đồng gần đây ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let rows: Vec<Row> = data
            .contracts
            .iter()
            .take(usize::from(area.height.saturating_sub(3)))
            .map(|c| {
                Row::new(vec![
                    Cell::from(c.id.to_string()),
                    Cell::from(
                        c.home
                            .as_ref()
                            .map(|h| h.name.clone())
                            .unwrap_or_default(),
                    ),
                    Cell::from(
                        c.guest
                            .as_ref()
                            .map(|g| g.full_name.clone())
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
        .block(block);

        frame.render_widget(table, area);
    }
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<24}"), Style::default().fg(theme::MUTED)),
        Span::styled(value, theme::title()),
    ])
}
