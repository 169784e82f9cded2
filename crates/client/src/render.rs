//! Terminal rendering of the dashboard views.
//!
//! Tables go through `prettytable`; the category and trend charts are drawn
//! with ratatui widgets into an off-screen [`Buffer`] and read back as text,
//! so the output can be printed without taking over the terminal.

use prettytable::format::{self, Alignment};
use prettytable::{Cell, Row, Table};
use ratatui::buffer::Buffer;
use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Sparkline, Widget};

use crate::state::{Dashboard, Tab};
use crate::view::{
    expense_rows, format_currency, ExpenseRow, LineChart, PieChart, SummaryCards,
    EMPTY_EXPENSES_MESSAGE,
};

const CHART_WIDTH: u16 = 60;
const TREND_HEIGHT: u16 = 8;

pub fn render_cards(cards: &SummaryCards) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.add_row(Row::new(vec![
        Cell::new("Total Spending"),
        Cell::new(&format!("{} ({})", cards.total, cards.month)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Transactions"),
        Cell::new(&cards.transactions),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Avg Transaction"),
        Cell::new(&cards.average),
    ]));
    table.to_string()
}

pub fn render_table(rows: &[ExpenseRow]) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_EXPENSES_MESSAGE}\n");
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(vec![
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Category"),
        Cell::new_align("Amount", Alignment::RIGHT),
        Cell::new("Date"),
    ]));

    for row in rows {
        // Notes sit under the description, as in the web table.
        let description = match &row.notes {
            Some(notes) => format!("{}\n{notes}", row.description),
            None => row.description.clone(),
        };
        table.add_row(Row::new(vec![
            Cell::new(&row.id.to_string()),
            Cell::new(&description),
            Cell::new(&format!("[{}] {}", row.badge.name(), row.category)),
            Cell::new_align(&row.amount, Alignment::RIGHT),
            Cell::new(&row.date),
        ]));
    }
    table.to_string()
}

/// Two-column label/amount table printed under a chart.
fn legend(heading: &str, labels: &[String], values: &[f64]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(vec![
        Cell::new(heading),
        Cell::new_align("Amount", Alignment::RIGHT),
    ]));
    for (label, value) in labels.iter().zip(values) {
        table.add_row(Row::new(vec![
            Cell::new(label),
            Cell::new_align(&format_currency(*value), Alignment::RIGHT),
        ]));
    }
    table.to_string()
}

/// Whole cents, with negatives and NaN drawn as empty bars.
fn cents(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        (amount * 100.0).round() as u64
    } else {
        0
    }
}

/// Draw `widget` into a blank `width` x `height` buffer and return its rows,
/// trailing blanks trimmed.
fn draw<W: Widget>(widget: W, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);

    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

pub fn render_pie(chart: &PieChart) -> String {
    let bars: Vec<Bar> = chart
        .labels
        .iter()
        .zip(&chart.values)
        .zip(&chart.colors)
        .map(|((label, value), color)| {
            Bar::default()
                .value(cents(*value))
                .text_value(String::new())
                .label(Line::from(label.as_str()))
                .style(Style::default().fg(color.parse::<Color>().unwrap_or(Color::Reset)))
        })
        .collect();

    let height = u16::try_from(bars.len()).unwrap_or(u16::MAX).saturating_add(2);
    let bar_chart = BarChart::default()
        .block(chart_block(" Spending by Category "))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0);

    let mut out = draw(bar_chart, CHART_WIDTH, height);
    out.push_str(&legend("Category", &chart.labels, &chart.values));
    out
}

pub fn render_trend(chart: &LineChart) -> String {
    let data: Vec<u64> = chart.data.iter().map(|v| cents(*v)).collect();
    let width = u16::try_from(data.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .clamp(CHART_WIDTH / 2, CHART_WIDTH);

    let title = format!(" Monthly Trend ({}) ", chart.label);
    let sparkline = Sparkline::default()
        .block(chart_block(&title))
        .data(&data)
        .style(Style::default().fg(chart.border_color.parse::<Color>().unwrap_or(Color::Reset)));

    let mut out = draw(sparkline, width, TREND_HEIGHT);
    out.push_str(&legend("Month", &chart.labels, &chart.data));
    out
}

/// Render whichever tab is selected.
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::from("Finance Dashboard\n=================\n\n");

    match dashboard.tab {
        Tab::Dashboard => {
            // Nothing below the header until a summary has loaded.
            if let Some(summary) = &dashboard.summary {
                out.push_str(&render_cards(&SummaryCards::from(summary)));
                if let Some(pie) = &dashboard.category_chart {
                    out.push('\n');
                    out.push_str(&render_pie(pie));
                }
                if let Some(line) = &dashboard.trend_chart {
                    out.push('\n');
                    out.push_str(&render_trend(line));
                }
            }
        }
        Tab::Expenses => {
            if dashboard.loading {
                out.push_str("Loading expenses...\n");
            } else {
                out.push_str(&render_table(&expense_rows(&dashboard.expenses)));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{BadgeColor, TREND_BORDER_COLOR, TREND_FILL_COLOR, TREND_LABEL};
    use uuid::Uuid;

    fn lunch() -> ExpenseRow {
        ExpenseRow {
            id: Uuid::nil(),
            description: "Lunch".into(),
            notes: Some("team".into()),
            category: "Food".into(),
            badge: BadgeColor::Green,
            amount: "$8.50".into(),
            date: "2024-05-10".into(),
        }
    }

    #[test]
    fn empty_table_shows_prompt() {
        assert_eq!(render_table(&[]), "No expenses yet. Add your first expense!\n");
    }

    #[test]
    fn table_lists_rows_with_notes_under_description() {
        let text = render_table(&[lunch()]);

        assert!(text.contains("Description"));
        assert!(text.contains(&Uuid::nil().to_string()));
        assert!(text.contains("[green] Food"));
        assert!(text.contains("$8.50"));
        assert!(text.contains("2024-05-10"));

        let lunch_line = text.lines().position(|l| l.contains("Lunch")).unwrap();
        let notes_line = text.lines().position(|l| l.contains("team")).unwrap();
        assert_eq!(notes_line, lunch_line + 1);
    }

    #[test]
    fn cards_render_nan_average() {
        let cards = SummaryCards {
            total: "$0.00".into(),
            month: "2024-05".into(),
            transactions: "0".into(),
            average: "$NaN".into(),
        };
        let text = render_cards(&cards);
        let average = text.lines().find(|l| l.contains("Avg Transaction")).unwrap();
        assert!(average.contains("$NaN"));
        assert!(text.contains("$0.00 (2024-05)"));
    }

    #[test]
    fn category_chart_draws_bars_and_a_legend() {
        let pie = PieChart {
            labels: vec!["Food".into(), "Other".into()],
            values: vec![10.0, 5.0],
            colors: vec!["#10b981", "#3b82f6"],
        };
        let text = render_pie(&pie);

        assert!(text.contains("Spending by Category"));
        let food_bar = text.lines().find(|l| l.contains("Food") && l.contains('█')).unwrap();
        let other_bar = text.lines().find(|l| l.contains("Other") && l.contains('█')).unwrap();
        let width = |line: &str| line.chars().filter(|c| *c == '█').count();
        assert!(width(food_bar) > width(other_bar));

        assert!(text.contains("$10.00"));
        assert!(text.contains("$5.00"));
    }

    #[test]
    fn trend_chart_draws_a_sparkline_and_month_legend() {
        let line = LineChart {
            label: TREND_LABEL,
            labels: vec!["2024-04".into(), "2024-05".into()],
            data: vec![20.0, 42.1],
            border_color: TREND_BORDER_COLOR,
            fill_color: TREND_FILL_COLOR,
        };
        let text = render_trend(&line);

        assert!(text.contains("Monthly Trend (Monthly Spending)"));
        assert!(text.contains('█'));
        assert!(text.contains("2024-04"));
        assert!(text.contains("$42.10"));
    }

    #[test]
    fn negative_and_nan_amounts_draw_empty_bars() {
        assert_eq!(cents(-3.0), 0);
        assert_eq!(cents(f64::NAN), 0);
        assert_eq!(cents(12.5), 1250);
    }
}
