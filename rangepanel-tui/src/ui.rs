//! Panel rendering — a fixed-size bordered window centered on the terminal.
//!
//! Drawing is a pure function of panel state: it mutates nothing, and two
//! draws with no action in between produce identical buffers. A terminal
//! resize only moves the window; the edited values are untouched.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use rangepanel_core::{ControlSpec, Panel};

use crate::input;
use crate::layout::{centered_fixed, PanelLayout};
use crate::theme;

/// Display strings for the panel; one label per control.
pub struct PanelText<'s> {
    pub title: &'s str,
    pub labels: &'s [&'s str],
}

/// Draw the whole panel.
pub fn draw(f: &mut Frame, panel: &Panel, text: &PanelText, layout: &PanelLayout) {
    let area = centered_fixed(layout.width, layout.height, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(text.title)
        .title_alignment(Alignment::Center)
        .title_style(theme::panel_title());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(layout.footer_height.min(inner.height)),
        ])
        .split(inner);

    render_controls(f, chunks[0], panel, text, layout);
    render_footer(f, chunks[1]);
}

fn render_controls(f: &mut Frame, area: Rect, panel: &Panel, text: &PanelText, layout: &PanelLayout) {
    let margin = layout.left_margin.min(area.width.saturating_sub(1));
    let body = Rect {
        x: area.x + margin,
        y: area.y,
        width: area.width - margin,
        height: area.height,
    };
    let track_width = layout.slider_width.min(body.width) as usize;

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (idx, control) in panel.controls().iter().enumerate() {
        let label = text.labels.get(idx).copied().unwrap_or("");
        match control {
            ControlSpec::Toggle => {
                lines.push(toggle_line(panel, idx, label));
                lines.push(Line::from(""));
            }
            ControlSpec::Slider { handles } => {
                let selected = panel.is_selected(idx);
                let label_style = if selected { theme::accent_bold() } else { theme::muted() };
                lines.push(Line::from(Span::styled(label, label_style)));

                let mut markers = Vec::new();
                let mut values = Vec::new();
                for handle in 0..*handles {
                    let value = panel.value(idx, handle);
                    let x = marker_x(value, track_width);
                    let style = handle_style(panel, idx, handle);
                    markers.push((x, style));
                    values.push((x, format!("{value}%"), style));
                }
                markers.sort_by_key(|(x, _)| *x);
                values.sort_by_key(|(x, _, _)| *x);

                let track_style = if selected { theme::accent() } else { theme::muted() };
                lines.push(track_line(&markers, track_width, track_style));
                lines.push(value_line(&values));
                lines.push(Line::from(""));
            }
        }
    }

    f.render_widget(Paragraph::new(lines), body);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let hints = input::key_bindings_help()
        .into_iter()
        .map(|(keys, what)| format!("[{keys}] {what}"))
        .collect::<Vec<_>>()
        .join("  ");
    let para = Paragraph::new(Line::from(Span::styled(hints, theme::muted())))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn toggle_line<'a>(panel: &Panel, idx: usize, label: &'a str) -> Line<'a> {
    let label_style = if panel.is_selected(idx) {
        theme::highlight()
    } else {
        theme::muted()
    };
    Line::from(vec![
        Span::styled("[", theme::muted()),
        Span::styled(if panel.enabled() { "X" } else { " " }, theme::text()),
        Span::styled("]  ", theme::muted()),
        Span::styled(label, label_style),
    ])
}

fn handle_style(panel: &Panel, control: usize, handle: usize) -> Style {
    if panel.is_handle_active(control, handle) {
        theme::highlight()
    } else if panel.is_selected(control) {
        theme::accent()
    } else {
        theme::warning()
    }
}

/// Marker cell for a percentage on a track of `width` cells.
fn marker_x(value: i32, width: usize) -> usize {
    let cell = value.clamp(0, 100) as usize * width / 100;
    cell.min(width.saturating_sub(1))
}

/// The slider track: dashes with one `|` per handle.
fn track_line<'a>(markers: &[(usize, Style)], width: usize, track: Style) -> Line<'a> {
    let mut spans = Vec::new();
    let mut x = 0;
    for (mx, style) in markers {
        if *mx < x {
            continue; // two handles on the same cell render one marker
        }
        if *mx > x {
            spans.push(Span::styled("-".repeat(mx - x), track));
        }
        spans.push(Span::styled("|", *style));
        x = mx + 1;
    }
    if width > x {
        spans.push(Span::styled("-".repeat(width - x), track));
    }
    Line::from(spans)
}

/// Percentage texts, each right-aligned to end under its marker.
fn value_line<'a>(values: &[(usize, String, Style)]) -> Line<'a> {
    let mut spans = Vec::new();
    let mut x = 0usize;
    for (mx, text, style) in values {
        let end = mx + 1;
        let mut pad = end.saturating_sub(x + text.len());
        if x > 0 && pad == 0 {
            pad = 1; // keep overlapping texts apart
        }
        if pad > 0 {
            spans.push(Span::raw(" ".repeat(pad)));
        }
        spans.push(Span::styled(text.clone(), *style));
        x += pad + text.len();
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use rangepanel_core::{Action, SettingsBinding};

    const LABELS: [&str; 3] = ["Enabled", "Generator load", "Fill battery until"];

    fn split_controls() -> Vec<ControlSpec> {
        vec![
            ControlSpec::Toggle,
            ControlSpec::Slider { handles: 1 },
            ControlSpec::Slider { handles: 1 },
        ]
    }

    fn buffer_row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    fn draw_once(panel: &Panel, labels: &[&str], width: u16, height: u16) -> Buffer {
        let text = PanelText {
            title: " Generator controls ",
            labels,
        };
        let layout = PanelLayout::default();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, panel, &text, &layout)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn render_is_pure() {
        let mut enabled = true;
        let (mut a, mut b) = (50, 75);
        let binding = SettingsBinding::new(&mut enabled, vec![&mut a, &mut b]);
        let panel = Panel::new(split_controls(), binding);

        let first = draw_once(&panel, &LABELS, 80, 30);
        let second = draw_once(&panel, &LABELS, 80, 30);
        assert_eq!(first, second);
        assert_eq!(panel.value(1, 0), 50);
        assert_eq!(panel.value(2, 0), 75);
        assert!(panel.enabled());
    }

    #[test]
    fn checkbox_follows_the_flag() {
        let mut enabled = false;
        let (mut a, mut b) = (50, 75);
        let binding = SettingsBinding::new(&mut enabled, vec![&mut a, &mut b]);
        let mut panel = Panel::new(split_controls(), binding);

        // Panel is centered on 80x30: outer x=14, y=4; body starts at x=21.
        let buffer = draw_once(&panel, &LABELS, 80, 30);
        assert!(buffer_row(&buffer, 6).contains("[ ]  Enabled"));

        panel.apply(Action::Confirm);
        let buffer = draw_once(&panel, &LABELS, 80, 30);
        assert!(buffer_row(&buffer, 6).contains("[X]  Enabled"));
    }

    #[test]
    fn marker_sits_at_the_value_cell() {
        let mut enabled = false;
        let (mut a, mut b) = (50, 75);
        let binding = SettingsBinding::new(&mut enabled, vec![&mut a, &mut b]);
        let panel = Panel::new(split_controls(), binding);

        let buffer = draw_once(&panel, &LABELS, 80, 30);
        // First slider track is the 5th body row; body x starts at 21.
        let track = buffer_row(&buffer, 9);
        assert_eq!(track.find('|'), Some(21 + 50 * 40 / 100));
        // Value text ends under the marker.
        let value_row = buffer_row(&buffer, 10);
        let text_end = value_row.rfind("50%").unwrap() + 3;
        assert_eq!(text_end, 21 + 50 * 40 / 100 + 1);
    }

    #[test]
    fn dual_handle_slider_shows_both_markers() {
        let mut enabled = false;
        let (mut low, mut high) = (30, 70);
        let binding = SettingsBinding::new(&mut enabled, vec![&mut low, &mut high]);
        let panel = Panel::new(
            vec![ControlSpec::Toggle, ControlSpec::Slider { handles: 2 }],
            binding,
        );

        let buffer = draw_once(&panel, &["Enabled", "Keep charge between"], 80, 30);
        let track = buffer_row(&buffer, 9);
        let marks: Vec<usize> = track
            .char_indices()
            .filter(|(_, c)| *c == '|')
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marks, vec![21 + 30 * 40 / 100, 21 + 70 * 40 / 100]);
        let value_row = buffer_row(&buffer, 10);
        assert!(value_row.contains("30%"));
        assert!(value_row.contains("70%"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut enabled = false;
        let (mut a, mut b) = (50, 75);
        let binding = SettingsBinding::new(&mut enabled, vec![&mut a, &mut b]);
        let panel = Panel::new(split_controls(), binding);

        for (w, h) in [(10, 3), (3, 10), (1, 1), (52, 22)] {
            let _ = draw_once(&panel, &LABELS, w, h);
        }
    }

    #[test]
    fn marker_x_spans_the_track() {
        assert_eq!(marker_x(0, 40), 0);
        assert_eq!(marker_x(50, 40), 20);
        assert_eq!(marker_x(100, 40), 39);
        assert_eq!(marker_x(5, 40), 2);
    }
}
