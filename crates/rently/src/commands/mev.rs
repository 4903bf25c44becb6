//! MEV analytics command handlers (read-only passthrough views).

use std::sync::Arc;

use tabled::Tabled;

use rently_core::{MevBlock, MevTransaction, Portal, format};

use crate::cli::{GlobalOpts, MevArgs, MevCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct BlockRow {
    #[tabled(rename = "Block")]
    number: u64,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Txs")]
    txs: String,
    #[tabled(rename = "MEV txs")]
    mev_txs: String,
    #[tabled(rename = "Profit (ETH)")]
    profit: String,
}

impl From<&Arc<MevBlock>> for BlockRow {
    fn from(b: &Arc<MevBlock>) -> Self {
        Self {
            number: b.number,
            time: b.timestamp.map(format::datetime).unwrap_or_default(),
            txs: b
                .transaction_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
            mev_txs: b
                .mev_transaction_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
            profit: b.profit_eth.map(|p| format!("{p:.4}")).unwrap_or_default(),
        }
    }
}

fn block_detail(b: &Arc<MevBlock>) -> String {
    let mut lines = vec![format!("Block: {}", b.number), format!("Hash:  {}", b.hash)];
    if let Some(t) = b.timestamp {
        lines.push(format!("Time:  {}", format::datetime(t)));
    }
    if let Some(n) = b.transaction_count {
        lines.push(format!("Txs:   {n}"));
    }
    if let Some(n) = b.mev_transaction_count {
        lines.push(format!("MEV:   {n}"));
    }
    if let Some(p) = b.profit_eth {
        lines.push(format!("Profit: {p:.6} ETH"));
    }
    lines.join("\n")
}

#[derive(Tabled)]
struct TxRow {
    #[tabled(rename = "Hash")]
    hash: String,
    #[tabled(rename = "Block")]
    block: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Protocol")]
    protocol: String,
    #[tabled(rename = "Profit (ETH)")]
    profit: String,
}

impl From<&Arc<MevTransaction>> for TxRow {
    fn from(t: &Arc<MevTransaction>) -> Self {
        Self {
            hash: short_hash(&t.hash),
            block: t
                .block_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            kind: t.kind.clone().unwrap_or_default(),
            protocol: t.protocol.clone().unwrap_or_default(),
            profit: t.profit_eth.map(|p| format!("{p:.4}")).unwrap_or_default(),
        }
    }
}

fn tx_detail(t: &Arc<MevTransaction>) -> String {
    let mut lines = vec![format!("Hash:     {}", t.hash)];
    if let Some(n) = t.block_number {
        lines.push(format!("Block:    {n}"));
    }
    if let Some(ref kind) = t.kind {
        lines.push(format!("Kind:     {kind}"));
    }
    if let Some(ref protocol) = t.protocol {
        lines.push(format!("Protocol: {protocol}"));
    }
    if let Some(ref from) = t.from {
        lines.push(format!("From:     {from}"));
    }
    if let Some(ref to) = t.to {
        lines.push(format!("To:       {to}"));
    }
    if let Some(p) = t.profit_eth {
        lines.push(format!("Profit:   {p:.6} ETH"));
    }
    if let Some(c) = t.cost_eth {
        lines.push(format!("Cost:     {c:.6} ETH"));
    }
    lines.join("\n")
}

/// Truncate a 0x hash for table display: 0x1234…abcd.
fn short_hash(hash: &str) -> String {
    if hash.len() > 14 {
        format!("{}…{}", &hash[..8], &hash[hash.len() - 4..])
    } else {
        hash.to_owned()
    }
}

pub async fn handle(portal: &Portal, args: MevArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        MevCommand::Blocks { limit } => {
            let snap = portal.mev_blocks(limit).await?;
            let out =
                output::render_list(&global.output, &snap, BlockRow::from, |b| {
                    b.number.to_string()
                });
            output::print_output(&out, global.quiet);
        }

        MevCommand::Block { number } => {
            let block = portal.mev_block(number).await?;
            let out = output::render_single(&global.output, &block, block_detail, |b| {
                b.number.to_string()
            });
            output::print_output(&out, global.quiet);
        }

        MevCommand::Transactions { limit } => {
            let snap = portal.mev_transactions(limit).await?;
            let out = output::render_list(&global.output, &snap, TxRow::from, |t| t.hash.clone());
            output::print_output(&out, global.quiet);
        }

        MevCommand::Transaction { hash } => {
            let tx = portal.mev_transaction(&hash).await?;
            let out = output::render_single(&global.output, &tx, tx_detail, |t| t.hash.clone());
            output::print_output(&out, global.quiet);
        }
    }
    Ok(())
}
