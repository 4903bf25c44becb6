//! Display formatting helpers: VND currency, day/month/year dates, and
//! status-code badges.
//!
//! All functions are total over their input domains — unrecognized codes
//! fall through to an explicit neutral default, never a panic. Labels are
//! Vietnamese because that is what the business operates in; tones map to
//! terminal colors in the CLI and TUI.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{ContractStatus, PaymentStatus};

// ── Status badges ───────────────────────────────────────────────────

/// Semantic color of a status badge. Front ends decide the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Warning,
    Negative,
    Neutral,
}

/// A display label + tone pair for a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: Tone,
}

/// Badge for a home/service contract status.
pub fn contract_status(status: ContractStatus) -> StatusBadge {
    match status {
        ContractStatus::Active => StatusBadge {
            label: "Đang hiệu lực",
            tone: Tone::Positive,
        },
        ContractStatus::Expired => StatusBadge {
            label: "Hết hạn",
            tone: Tone::Warning,
        },
        ContractStatus::Cancelled => StatusBadge {
            label: "Đã hủy",
            tone: Tone::Negative,
        },
        ContractStatus::Unknown(_) => StatusBadge {
            label: "Không xác định",
            tone: Tone::Neutral,
        },
    }
}

/// Badge for an invoice payment status.
pub fn payment_status(status: PaymentStatus) -> StatusBadge {
    match status {
        PaymentStatus::Unpaid => StatusBadge {
            label: "Chưa thanh toán",
            tone: Tone::Warning,
        },
        PaymentStatus::Paid => StatusBadge {
            label: "Đã thanh toán",
            tone: Tone::Positive,
        },
        PaymentStatus::Overdue => StatusBadge {
            label: "Quá hạn",
            tone: Tone::Negative,
        },
        PaymentStatus::Unknown(_) => StatusBadge {
            label: "Không xác định",
            tone: Tone::Neutral,
        },
    }
}

/// Human text for a payment cycle given in months.
pub fn payment_cycle(months: u32) -> String {
    match months {
        1 => "Hàng tháng".into(),
        3 => "Hàng quý".into(),
        6 => "Nửa năm".into(),
        12 => "Hàng năm".into(),
        n => format!("{n} tháng/lần"),
    }
}

// ── Money ───────────────────────────────────────────────────────────

/// Format whole VND the way the business reads it: dot-grouped thousands,
/// no fractional digits, `₫` suffix. `1_000_000` → `"1.000.000 ₫"`.
pub fn vnd(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped} ₫")
}

// ── Dates ───────────────────────────────────────────────────────────

/// Day/month/year rendering: `15/06/2024`.
pub fn date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Date + time rendering: `15/06/2024 10:30`.
pub fn datetime(t: DateTime<Utc>) -> String {
    t.format("%d/%m/%Y %H:%M").to_string()
}

/// `date` for optional values, rendering `-` when absent.
pub fn date_or_dash(d: Option<NaiveDate>) -> String {
    d.map_or_else(|| "-".into(), date)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn vnd_has_no_decimal_places() {
        let formatted = vnd(1_000_000);
        assert_eq!(formatted, "1.000.000 ₫");
        assert!(!formatted.contains(','));
    }

    #[test]
    fn vnd_small_amounts() {
        assert_eq!(vnd(0), "0 ₫");
        assert_eq!(vnd(999), "999 ₫");
        assert_eq!(vnd(1_500), "1.500 ₫");
    }

    #[test]
    fn vnd_negative_amounts() {
        assert_eq!(vnd(-250_000), "-250.000 ₫");
    }

    #[test]
    fn vnd_large_amounts() {
        assert_eq!(vnd(12_345_678_900), "12.345.678.900 ₫");
    }

    #[test]
    fn active_contract_badge() {
        let badge = contract_status(ContractStatus::from(1));
        assert_eq!(badge.label, "Đang hiệu lực");
        assert_eq!(badge.tone, Tone::Positive);
    }

    #[test]
    fn unknown_contract_code_gets_neutral_badge() {
        let badge = contract_status(ContractStatus::from(42));
        assert_eq!(badge.label, "Không xác định");
        assert_eq!(badge.tone, Tone::Neutral);
    }

    #[test]
    fn payment_badges() {
        assert_eq!(
            payment_status(PaymentStatus::from(1)).label,
            "Đã thanh toán"
        );
        assert_eq!(payment_status(PaymentStatus::from(0)).tone, Tone::Warning);
        assert_eq!(payment_status(PaymentStatus::from(7)).tone, Tone::Neutral);
    }

    #[test]
    fn payment_cycle_names_known_periods() {
        assert_eq!(payment_cycle(1), "Hàng tháng");
        assert_eq!(payment_cycle(3), "Hàng quý");
        assert_eq!(payment_cycle(6), "Nửa năm");
        assert_eq!(payment_cycle(12), "Hàng năm");
    }

    #[test]
    fn payment_cycle_falls_back_for_odd_periods() {
        assert_eq!(payment_cycle(2), "2 tháng/lần");
    }

    #[test]
    fn date_renders_day_month_year() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(date(d), "15/06/2024");
        assert_eq!(date_or_dash(None), "-");
    }
}
