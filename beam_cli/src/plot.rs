//! Terminal shear and moment diagrams.
//!
//! Two stacked line charts: shear force above, bending moment below, both
//! plotted against position along the beam with a zero baseline.

use std::io;

use beam_core::calculations::BeamResponse;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::{DefaultTerminal, Frame};

/// Chart data derived from a response
pub struct DiagramData {
    length_m: f64,
    shear: Vec<(f64, f64)>,
    moment: Vec<(f64, f64)>,
    baseline: [(f64, f64); 2],
}

impl DiagramData {
    pub fn from_response(response: &BeamResponse) -> Self {
        DiagramData {
            length_m: response.length_m,
            shear: response.curve.shear_diagram(),
            moment: response.curve.moment_diagram(),
            baseline: [(0.0, 0.0), (response.length_m, 0.0)],
        }
    }
}

/// Show the diagrams full-screen until a key is pressed.
pub fn show(response: &BeamResponse) -> io::Result<()> {
    let data = DiagramData::from_response(response);
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &data);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, data: &DiagramData) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, data))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Draw both diagrams into the frame.
pub fn render(frame: &mut Frame, data: &DiagramData) {
    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(frame.area());

    render_chart(
        frame,
        top,
        data,
        ChartStyle {
            title: "Shear Force Diagram",
            y_title: "Shear Force (kN)",
            color: Color::Red,
            x_title: None,
        },
        &data.shear,
    );
    render_chart(
        frame,
        bottom,
        data,
        ChartStyle {
            title: "Bending Moment Diagram (press any key to exit)",
            y_title: "Moment (kNm)",
            color: Color::Blue,
            x_title: Some("Beam Length (m)"),
        },
        &data.moment,
    );
}

struct ChartStyle {
    title: &'static str,
    y_title: &'static str,
    color: Color,
    x_title: Option<&'static str>,
}

fn render_chart(
    frame: &mut Frame,
    area: Rect,
    data: &DiagramData,
    style: ChartStyle,
    points: &[(f64, f64)],
) {
    let datasets = vec![
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&data.baseline),
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style.color))
            .data(points),
    ];

    let [y_min, y_max] = value_bounds(points);
    let mut x_axis = Axis::default()
        .bounds([0.0, data.length_m])
        .labels(tick_labels(0.0, data.length_m));
    if let Some(x_title) = style.x_title {
        x_axis = x_axis.title(x_title);
    }
    let y_axis = Axis::default()
        .title(style.y_title)
        .bounds([y_min, y_max])
        .labels(tick_labels(y_min, y_max));

    let chart = Chart::new(datasets)
        .block(Block::bordered().title(style.title))
        .x_axis(x_axis)
        .y_axis(y_axis);
    frame.render_widget(chart, area);
}

/// Padded y-range that always includes zero and is never empty.
pub fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let (min, max) = points
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let span = max - min;
    let pad = if span > 0.0 { span * 0.1 } else { 1.0 };
    [min - pad, max + pad]
}

fn tick_labels(min: f64, max: f64) -> Vec<String> {
    [min, (min + max) / 2.0, max]
        .iter()
        .map(|v| format!("{v:.2}"))
        .collect()
}
