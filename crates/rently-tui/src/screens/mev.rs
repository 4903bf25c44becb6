//! MEV analytics view: blocks and transactions sub-tabs.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Tabs};

use rently_core::format;

use crate::action::Action;
use crate::data::AppData;
use crate::theme;
use crate::widgets::nav;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MevTab {
    #[default]
    Blocks,
    Transactions,
}

#[derive(Default)]
pub struct MevScreen {
    tab: MevTab,
    blocks_table: TableState,
    txs_table: TableState,
}

impl MevScreen {
    pub fn handle_key(&mut self, key: KeyEvent, data: &AppData) -> Option<Action> {
        // h/l (or ←/→) switch sub-tabs, the rest is table navigation.
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                self.tab = MevTab::Blocks;
                return None;
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.tab = MevTab::Transactions;
                return None;
            }
            _ => {}
        }

        match self.tab {
            MevTab::Blocks => {
                nav::handle_table_nav(&mut self.blocks_table, data.mev_blocks.len(), key);
            }
            MevTab::Transactions => {
                nav::handle_table_nav(&mut self.txs_table, data.mev_transactions.len(), key);
            }
        }
        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, data: &AppData) {
        let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);

        let tabs = Tabs::new(vec![Line::from(" Blocks "), Line::from(" Transactions ")])
            .select(match self.tab {
                MevTab::Blocks => 0,
                MevTab::Transactions => 1,
            })
            .highlight_style(theme::tab_active())
            .style(theme::tab_inactive());
        frame.render_widget(tabs, layout[0]);

        if data.mev_blocks.is_empty() && data.mev_transactions.is_empty() {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded);
            let inner = block.inner(layout[1]);
            frame.render_widget(block, layout[1]);
            frame.render_widget(
                Paragraph::new("Analytics API chưa được cấu hình hoặc không có dữ liệu.")
                    .style(theme::key_hint()),
                inner,
            );
            return;
        }

        match self.tab {
            MevTab::Blocks => self.render_blocks(frame, layout[1], data),
            MevTab::Transactions => self.render_transactions(frame, layout[1], data),
        }
    }

    fn render_blocks(&mut self, frame: &mut Frame, area: Rect, data: &AppData) {
        nav::clamp_selection(&mut self.blocks_table, data.mev_blocks.len());

        let rows: Vec<Row> = data
            .mev_blocks
            .iter()
            .map(|b| {
                Row::new(vec![
                    Cell::from(b.number.to_string()),
                    Cell::from(b.timestamp.map(format::datetime).unwrap_or_default()),
                    Cell::from(
                        b.transaction_count
                            .map(|n| n.to_string())
                            .unwrap_or_default(),
                    ),
                    Cell::from(
                        b.mev_transaction_count
                            .map(|n| n.to_string())
                            .unwrap_or_default(),
                    ),
                    Cell::from(b.profit_eth.map(|p| format!("{p:.4}")).unwrap_or_default()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(18),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Fill(1),
            ],
        )
        .header(
            Row::new(vec!["Block", "Time", "Txs", "MEV txs", "Profit (ETH)"])
                .style(theme::header_row()),
        )
        .row_highlight_style(theme::selected_row())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

        frame.render_stateful_widget(table, area, &mut self.blocks_table);
    }

    fn render_transactions(&mut self, frame: &mut Frame, area: Rect, data: &AppData) {
        nav::clamp_selection(&mut self.txs_table, data.mev_transactions.len());

        let rows: Vec<Row> = data
            .mev_transactions
            .iter()
            .map(|t| {
                Row::new(vec![
                    Cell::from(t.hash.clone()),
                    Cell::from(t.block_number.map(|n| n.to_string()).unwrap_or_default()),
                    Cell::from(t.kind.clone().unwrap_or_default()),
                    Cell::from(t.protocol.clone().unwrap_or_default()),
                    Cell::from(t.profit_eth.map(|p| format!("{p:.4}")).unwrap_or_default()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(vec!["Hash", "Block", "Kind", "Protocol", "Profit (ETH)"])
                .style(theme::header_row()),
        )
        .row_highlight_style(theme::selected_row())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

        frame.render_stateful_widget(table, area, &mut self.txs_table);
    }
}
