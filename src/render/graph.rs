//! Trend graph: temperature line and humidity dots over the history.
//!
//! The graph occupies a fixed 40×35 box in the bottom-right corner.
//!
//! - Temperature auto-scales to `[min, max + 2]` over the stored samples.
//! - Humidity uses the fixed `10..95 %` range.
//! - Columns follow the raw buffer order, so the line wraps around at the
//!   write cursor; a short vertical tick marks the cursor.
//!
//! Planning ([`plot`]) is pure and produces [`PlotCommand`]s; painting
//! ([`draw_plot`]) issues them to any `DrawTarget`.

use embedded_graphics::mono_font::iso_8859_1::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use heapless::Vec;

use crate::config::{
    CURSOR_MARKER_INSET, GRAPH_HEIGHT, GRAPH_WIDTH, GRAPH_X, GRAPH_Y, HISTORY_CAPACITY,
    HUMIDITY_SCALE_MAX, HUMIDITY_SCALE_MIN, LABEL_OFFSET_X, TEMPERATURE_HEADROOM,
};
use crate::history::Snapshot;

/// Upper bound on commands: border, cursor, two labels, and at most one
/// segment plus one dot per adjacent slot pair.
pub const MAX_PLOT_COMMANDS: usize = 4 + 2 * (HISTORY_CAPACITY - 1);

/// Offset of a label above its series' first value, in data units.
const LABEL_LIFT: f32 = 2.0;

/// Bottom-most plot row (inside the border).
const PLOT_BOTTOM: i32 = GRAPH_Y + GRAPH_HEIGHT - 1;

/// Rows available above the bottom row.
const PLOT_SPAN_PX: i32 = GRAPH_HEIGHT - 1;

/// One drawing step of the graph, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotCommand {
    Border { top_left: Point, size: Size },
    TemperatureSegment { from: Point, to: Point },
    HumidityDot(Point),
    CursorMarker { from: Point, to: Point },
    Label { text: &'static str, at: Point },
}

/// Temperature range used for the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureScale {
    /// Lowest stored temperature.
    pub min: f32,
    /// Highest stored temperature.
    pub max: f32,
}

impl TemperatureScale {
    /// Scale over every stored temperature, `None` for an empty history.
    pub fn from_snapshot(snapshot: &Snapshot<'_>) -> Option<Self> {
        snapshot
            .temperatures()
            .flatten()
            .fold(None, |acc: Option<Self>, t| {
                Some(match acc {
                    None => Self { min: t, max: t },
                    Some(s) => Self {
                        min: s.min.min(t),
                        max: s.max.max(t),
                    },
                })
            })
    }

    /// Pixel row of a temperature value.
    pub fn row(&self, value: f32) -> i32 {
        value_to_row(value, self.min, self.max + TEMPERATURE_HEADROOM)
    }
}

/// Pixel row of a humidity value on the fixed scale.
pub fn humidity_row(value: f32) -> i32 {
    value_to_row(value, HUMIDITY_SCALE_MIN, HUMIDITY_SCALE_MAX)
}

/// Pixel column of a raw buffer slot.
pub fn column(slot: usize) -> i32 {
    GRAPH_X + slot as i32 * (GRAPH_WIDTH - 1) / (HISTORY_CAPACITY as i32 - 1)
}

/// Linear map of `value` from `[lo, hi]` onto the plot rows, higher values
/// landing higher on screen. Out-of-range values are clamped to the box.
fn value_to_row(value: f32, lo: f32, hi: f32) -> i32 {
    let span = hi - lo;
    let offset = if span > 0.0 {
        ((value - lo) * PLOT_SPAN_PX as f32 / span) as i32
    } else {
        0
    };
    PLOT_BOTTOM - offset.clamp(0, PLOT_SPAN_PX)
}

/// Planned graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub scale: Option<TemperatureScale>,
    pub commands: Vec<PlotCommand, MAX_PLOT_COMMANDS>,
}

impl Plot {
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PlotCommand::TemperatureSegment { from, to } => Some((from, to)),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PlotCommand::HumidityDot(p) => Some(p),
            _ => None,
        })
    }

    pub fn label(&self, text: &str) -> Option<Point> {
        self.commands.iter().find_map(|c| match *c {
            PlotCommand::Label { text: t, at } if t == text => Some(at),
            _ => None,
        })
    }
}

fn push(commands: &mut Vec<PlotCommand, MAX_PLOT_COMMANDS>, command: PlotCommand) {
    let pushed = commands.push(command).is_ok();
    debug_assert!(pushed, "MAX_PLOT_COMMANDS too small");
}

/// Plan the graph for a history snapshot.
pub fn plot(snapshot: &Snapshot<'_>) -> Plot {
    let scale = TemperatureScale::from_snapshot(snapshot);
    let mut commands: Vec<PlotCommand, MAX_PLOT_COMMANDS> = Vec::new();

    push(&mut commands, PlotCommand::Border {
        top_left: Point::new(GRAPH_X, GRAPH_Y),
        size: Size::new(GRAPH_WIDTH as u32, GRAPH_HEIGHT as u32),
    });

    let slots = snapshot.slots;
    for (i, pair) in slots.windows(2).enumerate() {
        let (Some(a), Some(b)) = (pair[0], pair[1]) else {
            continue;
        };
        if let Some(scale) = scale {
            push(&mut commands, PlotCommand::TemperatureSegment {
                from: Point::new(column(i), scale.row(a.temperature)),
                to: Point::new(column(i + 1), scale.row(b.temperature)),
            });
        }
        push(&mut commands, PlotCommand::HumidityDot(Point::new(
            column(i),
            humidity_row(a.humidity),
        )));
    }

    let cursor_x = column(snapshot.cursor);
    push(&mut commands, PlotCommand::CursorMarker {
        from: Point::new(cursor_x, GRAPH_Y + CURSOR_MARKER_INSET),
        to: Point::new(cursor_x, GRAPH_Y + GRAPH_HEIGHT - CURSOR_MARKER_INSET),
    });

    if let Some(first) = slots[0] {
        let label_x = GRAPH_X - LABEL_OFFSET_X;
        push(&mut commands, PlotCommand::Label {
            text: "H",
            at: Point::new(label_x, humidity_row(first.humidity + LABEL_LIFT)),
        });
        if let Some(scale) = scale {
            push(&mut commands, PlotCommand::Label {
                text: "T",
                at: Point::new(label_x, scale.row(first.temperature + LABEL_LIFT)),
            });
        }
    }

    Plot { scale, commands }
}

fn label_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Paint a planned graph.
pub fn draw_plot<D>(target: &mut D, plot: &Plot) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    for command in &plot.commands {
        match *command {
            PlotCommand::Border { top_left, size } => {
                Rectangle::new(top_left, size).into_styled(stroke).draw(target)?;
            }
            PlotCommand::TemperatureSegment { from, to }
            | PlotCommand::CursorMarker { from, to } => {
                Line::new(from, to).into_styled(stroke).draw(target)?;
            }
            PlotCommand::HumidityDot(p) => {
                Pixel(p, BinaryColor::On).draw(target)?;
            }
            PlotCommand::Label { text, at } => {
                Text::with_baseline(text, at, label_style(), Baseline::Middle).draw(target)?;
            }
        }
    }
    Ok(())
}

/// Plan and paint the graph for a history snapshot.
pub fn draw_graph<D>(target: &mut D, snapshot: &Snapshot<'_>) -> Result<Plot, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let plot = plot(snapshot);
    draw_plot(target, &plot)?;
    Ok(plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{History, Sample};
    use crate::testing::FramePanel;

    fn slots_from(temps: &[f32]) -> [Option<Sample>; HISTORY_CAPACITY] {
        let mut slots = [None; HISTORY_CAPACITY];
        for (slot, &t) in slots.iter_mut().zip(temps) {
            if !t.is_nan() {
                *slot = Some(Sample {
                    temperature: t,
                    humidity: 50.0,
                });
            }
        }
        slots
    }

    #[test]
    fn scale_spans_stored_min_and_max() {
        let slots = slots_from(&[10.0, 20.0, 30.0, f32::NAN, 40.0]);
        let snapshot = Snapshot {
            slots: &slots,
            cursor: 5,
        };
        let scale = TemperatureScale::from_snapshot(&snapshot).unwrap();
        assert_eq!(scale.min, 10.0);
        assert_eq!(scale.max, 40.0);
    }

    #[test]
    fn temperature_rows_are_monotonic_bottom_to_top() {
        let slots = slots_from(&[10.0, 20.0, 30.0, f32::NAN, 40.0]);
        let snapshot = Snapshot {
            slots: &slots,
            cursor: 5,
        };
        let scale = TemperatureScale::from_snapshot(&snapshot).unwrap();

        let rows = [10.0, 20.0, 30.0, 40.0].map(|t| scale.row(t));
        assert_eq!(rows[0], PLOT_BOTTOM);
        assert!(rows.windows(2).all(|w| w[1] < w[0]));
        // The +2 headroom keeps 40 a few rows below the top border.
        assert!(rows[3] >= GRAPH_Y);
        assert!(rows[3] - GRAPH_Y <= 4);
    }

    #[test]
    fn gaps_break_the_line() {
        let slots = slots_from(&[10.0, 20.0, 30.0, f32::NAN, 40.0]);
        let snapshot = Snapshot {
            slots: &slots,
            cursor: 5,
        };
        let plot = plot(&snapshot);

        let segments: std::vec::Vec<_> = plot.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].0.x, column(0));
        assert_eq!(segments[1].1.x, column(2));
        assert_eq!(plot.dots().count(), 2);
    }

    #[test]
    fn empty_history_draws_frame_and_cursor_only() {
        let history = History::new();
        let plot = plot(&history.snapshot());

        assert!(plot.scale.is_none());
        assert_eq!(plot.segments().count(), 0);
        assert_eq!(plot.dots().count(), 0);
        assert!(plot.label("T").is_none());
        assert!(plot.label("H").is_none());
        assert_eq!(plot.commands.len(), 2);
    }

    #[test]
    fn full_history_fills_command_buffer_exactly() {
        let mut history = History::new();
        for t in 0..HISTORY_CAPACITY {
            history.record(t as f32, 50.0).unwrap();
        }
        let plot = plot(&history.snapshot());
        assert_eq!(plot.commands.len(), MAX_PLOT_COMMANDS);
        assert_eq!(plot.segments().count(), HISTORY_CAPACITY - 1);
        assert!(plot.label("T").is_some());
    }

    #[test]
    fn flat_history_has_finite_positive_span() {
        let mut history = History::new();
        for _ in 0..3 {
            history.record(21.0, 40.0).unwrap();
        }
        let plot = plot(&history.snapshot());
        let scale = plot.scale.unwrap();
        assert_eq!(scale.row(21.0), PLOT_BOTTOM);
        for (from, to) in plot.segments() {
            assert_eq!(from.y, PLOT_BOTTOM);
            assert_eq!(to.y, PLOT_BOTTOM);
        }
    }

    #[test]
    fn humidity_uses_fixed_range_and_clamps() {
        assert_eq!(humidity_row(HUMIDITY_SCALE_MIN), PLOT_BOTTOM);
        assert_eq!(humidity_row(HUMIDITY_SCALE_MAX), GRAPH_Y);
        assert_eq!(humidity_row(0.0), PLOT_BOTTOM);
        assert_eq!(humidity_row(100.0), GRAPH_Y);
    }

    #[test]
    fn columns_stay_inside_the_border() {
        assert_eq!(column(0), GRAPH_X);
        assert_eq!(column(HISTORY_CAPACITY - 1), GRAPH_X + GRAPH_WIDTH - 1);
    }

    #[test]
    fn cursor_marker_follows_write_cursor() {
        let mut history = History::new();
        for t in 0..5 {
            history.record(t as f32, 50.0).unwrap();
        }
        let plot = plot(&history.snapshot());
        let marker = plot.commands.iter().find_map(|c| match *c {
            PlotCommand::CursorMarker { from, to } => Some((from, to)),
            _ => None,
        });
        let (from, to) = marker.unwrap();
        assert_eq!(from.x, column(5));
        assert_eq!(to.x, column(5));
        assert_eq!(from.y, GRAPH_Y + CURSOR_MARKER_INSET);
        assert_eq!(to.y, GRAPH_Y + GRAPH_HEIGHT - CURSOR_MARKER_INSET);
    }

    #[test]
    fn labels_use_the_same_scales_as_the_series() {
        let mut history = History::new();
        history.record(10.0, 30.0).unwrap();
        history.record(20.0, 60.0).unwrap();
        let plot = plot(&history.snapshot());
        let scale = plot.scale.unwrap();

        let t = plot.label("T").unwrap();
        let h = plot.label("H").unwrap();
        assert_eq!(t, Point::new(GRAPH_X - LABEL_OFFSET_X, scale.row(12.0)));
        assert_eq!(h, Point::new(GRAPH_X - LABEL_OFFSET_X, humidity_row(32.0)));
    }

    #[test]
    fn painted_graph_lights_border_and_line() {
        let mut history = History::new();
        history.record(10.0, 50.0).unwrap();
        history.record(20.0, 50.0).unwrap();

        let mut panel = FramePanel::new();
        let plot = draw_graph(&mut panel, &history.snapshot()).unwrap();

        assert!(panel.is_on(GRAPH_X, GRAPH_Y));
        assert!(panel.is_on(GRAPH_X + GRAPH_WIDTH - 1, GRAPH_Y + GRAPH_HEIGHT - 1));
        let (from, to) = plot.segments().next().unwrap();
        assert!(panel.is_on(from.x, from.y));
        assert!(panel.is_on(to.x, to.y));
    }
}
