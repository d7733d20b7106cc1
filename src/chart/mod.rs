//! Balance renderer: draws the trailing-week cumulative chart as an SVG.
//!
//! Two series on one hour axis: the required cumulative hours (dashed,
//! neutral) and the undertaken cumulative hours (solid, marked, accent),
//! with a color-coded bracket annotating the final-day surplus/deficit.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::core::series::PerformanceRecord;
use crate::errors::{AppError, AppResult};
use crate::utils::balance_label;
use crate::utils::date::weekday_abbrev;

/// Line/marker color of the undertaken series.
const ACCENT: RGBColor = RGBColor(0x01, 0x51, 0x87);
/// Required series color.
const NEUTRAL: RGBColor = RGBColor(0x80, 0x80, 0x80);
/// Bracket/label color when the balance is non-negative.
const SURPLUS: RGBColor = RGBColor(0x00, 0xcc, 0x66);
/// Bracket/label color when the balance is negative.
const DEFICIT: RGBColor = RGBColor(0xc9, 0x2a, 0x2a);

/// Render the selected window and its balance annotation to `out_path`.
pub fn render_chart(
    window: &[PerformanceRecord],
    balance: f64,
    out_path: &str,
    size: (u32, u32),
) -> AppResult<()> {
    if window.is_empty() {
        return Err(AppError::Render("empty window, nothing to draw".into()));
    }

    let labels: Vec<String> = window
        .iter()
        .map(|r| format!("{}\n({})", weekday_abbrev(r.date), r.date.format("%d/%m")))
        .collect();

    let required: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.cum_target_hours))
        .collect();
    let undertaken: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.cum_worked_hours))
        .collect();

    let y_max = required
        .iter()
        .chain(undertaken.iter())
        .map(|&(_, y)| y)
        .fold(f64::MIN, f64::max)
        .max(1.0)
        * 1.05;
    let y_min = required
        .iter()
        .chain(undertaken.iter())
        .map(|&(_, y)| y)
        .fold(0.0, f64::min);

    let n = window.len();

    let root = SVGBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Working hours balance", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .x_desc("Day")
        .y_desc("Hours")
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() < 0.01 && i >= 0.0 && (i as usize) < labels.len() {
                labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .label_style(("sans-serif", 13))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(DashedLineSeries::new(
            required.iter().copied(),
            5,
            4,
            NEUTRAL.stroke_width(1),
        ))
        .map_err(render_err)?
        .label("Required")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], NEUTRAL.stroke_width(1)));

    chart
        .draw_series(LineSeries::new(
            undertaken.iter().copied(),
            ACCENT.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Undertaken")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ACCENT.stroke_width(2)));

    chart
        .draw_series(
            undertaken
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, ACCENT.filled())),
        )
        .map_err(render_err)?;

    draw_balance_bracket(&mut chart, window, balance)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Vertical |-| bracket at the last x position, spanning from the final
/// required value to the final undertaken value, labeled with the signed
/// balance near its midpoint.
fn draw_balance_bracket(
    chart: &mut ChartContext<'_, SVGBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    window: &[PerformanceRecord],
    balance: f64,
) -> AppResult<()> {
    let last = window
        .last()
        .ok_or_else(|| AppError::Render("empty window, nothing to annotate".into()))?;

    let x = (window.len() - 1) as f64;
    let y_required = last.cum_target_hours;
    let y_worked = last.cum_worked_hours;
    let color = if balance >= 0.0 { SURPLUS } else { DEFICIT };

    let cap = 0.06;
    let bracket = [
        vec![(x - cap, y_required), (x + cap, y_required)],
        vec![(x, y_required), (x, y_worked)],
        vec![(x - cap, y_worked), (x + cap, y_worked)],
    ];
    chart
        .draw_series(
            bracket
                .into_iter()
                .map(|seg| PathElement::new(seg, color.stroke_width(2))),
        )
        .map_err(render_err)?;

    let label_style = TextStyle::from(("sans-serif", 16).into_font()).color(&color);
    chart
        .draw_series(std::iter::once(Text::new(
            balance_label(balance),
            (x + 2.0 * cap, (y_required + y_worked) * 0.5),
            label_style,
        )))
        .map_err(render_err)?;

    Ok(())
}

fn render_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}
