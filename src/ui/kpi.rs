use eframe::egui::{self, RichText, Ui};

use crate::color;
use crate::data::aggregate::{AggregateResult, round_to};

/// Shown in place of a figure that is undefined for an empty selection.
pub const NOT_AVAILABLE: &str = "–";

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Whole dollars with thousands separators: `US $ 322,967`.
pub fn format_currency(value: f64) -> String {
    format!("US $ {}", group_thousands(value.trunc() as i64))
}

/// Dollars and cents: `US $ 322.97`.
pub fn format_currency_cents(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("US $ {sign}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// One star per rating point, after rounding to one decimal then to whole.
pub fn star_glyphs(rating: f64) -> String {
    let n = round_to(rating, 1).round().clamp(0.0, 10.0) as usize;
    "⭐".repeat(n)
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// KPI row
// ---------------------------------------------------------------------------

/// Render the three headline figures side by side.
pub fn kpi_row(ui: &mut Ui, summary: &AggregateResult) {
    ui.columns(3, |cols| {
        cols[0].heading("Total Sales:");
        cols[0].label(RichText::new(format_currency(summary.total)).size(22.0).strong());

        cols[1].heading("Average Rating:");
        match summary.mean_rating {
            Some(rating) => {
                cols[1].horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new(format!("{:.1}/10", round_to(rating, 1))).size(20.0));
                    ui.label(RichText::new(star_glyphs(rating)).size(20.0).color(color::STAR));
                });
            }
            None => {
                cols[1].label(RichText::new(NOT_AVAILABLE).size(20.0));
            }
        }

        cols[2].heading("Average Sales Per Transaction:");
        let average = summary
            .mean_total
            .map(format_currency_cents)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        cols[2].label(RichText::new(average).size(22.0).strong());
    });

    ui.add_space(4.0);
    ui.label(
        RichText::new(format!("{} transactions", summary.transactions))
            .color(egui::Color32::GRAY),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_thousands_separators() {
        assert_eq!(format_currency(322966.75), "US $ 322,966");
        assert_eq!(format_currency(999.99), "US $ 999");
        assert_eq!(format_currency(1000.0), "US $ 1,000");
        assert_eq!(format_currency(0.0), "US $ 0");
        assert_eq!(format_currency(1234567.0), "US $ 1,234,567");
    }

    #[test]
    fn cents_are_rounded() {
        assert_eq!(format_currency_cents(322.966), "US $ 322.97");
        assert_eq!(format_currency_cents(1500.5), "US $ 1,500.50");
        assert_eq!(format_currency_cents(7.0), "US $ 7.00");
    }

    #[test]
    fn stars_follow_rounded_rating() {
        assert_eq!(star_glyphs(6.9727).chars().count(), 7);
        assert_eq!(star_glyphs(6.44).chars().count(), 6);
        assert_eq!(star_glyphs(0.2), "");
    }
}
