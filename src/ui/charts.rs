use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color;
use crate::data::aggregate::AggregateResult;

const CHART_HEIGHT: f32 = 340.0;

// ---------------------------------------------------------------------------
// Sales by hour (vertical bars)
// ---------------------------------------------------------------------------

/// Render the hourly sales chart, one bar per hour that has sales.
pub fn hourly_sales(ui: &mut Ui, summary: &AggregateResult) {
    ui.label(RichText::new("Sales by hour").strong());

    let bars: Vec<Bar> = summary
        .by_hour
        .iter()
        .map(|&(hour, total)| {
            Bar::new(hour as f64, total)
                .width(0.8)
                .name(format!("{hour}:00"))
                .fill(color::ACCENT)
        })
        .collect();

    Plot::new("sales_by_hour")
        .height(CHART_HEIGHT)
        .x_axis_label("hour")
        .y_axis_label("Total")
        .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
        .x_axis_formatter(|mark: GridMark, _| whole_number_label(mark.value, 0.0, 23.0))
        .show_grid([false, false])
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Total"));
        });
}

// ---------------------------------------------------------------------------
// Sales by product line (horizontal bars)
// ---------------------------------------------------------------------------

/// Render the product-line chart, bars ascending from the bottom.
pub fn product_line_sales(ui: &mut Ui, summary: &AggregateResult, distinct_colors: bool) {
    ui.label(RichText::new("Sales by Product Line").strong());

    let colors = color::bar_colors(summary.by_product_line.len(), distinct_colors);
    let bars: Vec<Bar> = summary
        .by_product_line
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, ((line, total), fill))| {
            Bar::new(i as f64, *total)
                .width(0.7)
                .name(line)
                .fill(fill)
        })
        .collect();

    let labels: Vec<String> = summary
        .by_product_line
        .iter()
        .map(|(line, _)| line.clone())
        .collect();

    Plot::new("sales_by_product_line")
        .height(CHART_HEIGHT)
        .x_axis_label("Total")
        .y_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
        .y_axis_formatter(move |mark: GridMark, _| category_label(&labels, mark.value))
        .y_axis_min_width(140.0)
        .show_grid([false, false])
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Total"));
        });
}

// ---------------------------------------------------------------------------
// Axis labels
// ---------------------------------------------------------------------------

/// Label integral tick positions inside `[min, max]`, blank elsewhere.
fn whole_number_label(value: f64, min: f64, max: f64) -> String {
    if value.fract() == 0.0 && (min..=max).contains(&value) {
        format!("{value:.0}")
    } else {
        String::new()
    }
}

/// Name of the category drawn at `value`, blank between categories.
fn category_label(labels: &[String], value: f64) -> String {
    if value.fract() != 0.0 || value < 0.0 {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_ticks_are_whole_hours() {
        assert_eq!(whole_number_label(13.0, 0.0, 23.0), "13");
        assert_eq!(whole_number_label(13.5, 0.0, 23.0), "");
        assert_eq!(whole_number_label(-1.0, 0.0, 23.0), "");
        assert_eq!(whole_number_label(24.0, 0.0, 23.0), "");
    }

    #[test]
    fn category_ticks_map_to_names() {
        let labels = vec!["Health and beauty".to_string(), "Food and beverages".to_string()];
        assert_eq!(category_label(&labels, 0.0), "Health and beauty");
        assert_eq!(category_label(&labels, 1.0), "Food and beverages");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }
}
