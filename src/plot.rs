use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::prelude::*;

use crate::core::model::BodyTone;
use crate::core::trajectory::{apex_time, position_at, sample_trajectory};
use crate::core::window::fixed_ratio_axis_window;
use crate::error::{Result, SimError};
use crate::headless::RunReport;

const PLOT_SIZE_PX: (u32, u32) = (1200, 600);
const ANALYTIC_SAMPLES: usize = 240;

fn plot_err<E: std::fmt::Display>(err: E) -> SimError {
    SimError::Plot(err.to_string())
}

/// A directory becomes a timestamped file inside it; anything else is used as given.
pub fn resolve_plot_path(requested: &Path, now: DateTime<Local>) -> PathBuf {
    if requested.is_dir() {
        requested.join(format!("trajectory_{}.svg", now.format("%Y%m%d_%H%M%S")))
    } else {
        requested.to_path_buf()
    }
}

pub fn render_trajectory_svg(report: &RunReport, out: &Path) -> Result<()> {
    let trace = report.trace();
    let analytic = sample_trajectory(report.params, report.elapsed_s, ANALYTIC_SAMPLES);

    let min_x = trace.iter().fold(0.0f64, |acc, p| acc.min(p.x_m));
    let max_x = trace.iter().fold(0.0f64, |acc, p| acc.max(p.x_m));
    let max_y = trace
        .iter()
        .chain(analytic.iter())
        .fold(0.0f64, |acc, p| acc.max(p.height_m));
    let (x_span, y_span) = fixed_ratio_axis_window(max_x - min_x, max_y);

    let root = SVGBackend::new(out, PLOT_SIZE_PX).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let caption = format!(
        "h0 = {:.2} m, v0 = {:.2} m/s, angle = {:.1} deg ({})",
        report.params.height_m,
        report.params.speed_mps,
        report.params.angle_deg,
        report.status.label()
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(min_x..(min_x + x_span), 0.0..y_span)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            analytic.iter().map(|p| (p.x_m, p.height_m.max(0.0))),
            &BLUE,
        ))
        .map_err(plot_err)?
        .label("closed form")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            trace.iter().map(|p| (p.x_m, p.height_m.max(0.0))),
            &BLACK,
        ))
        .map_err(plot_err)?
        .label(format!("{} ticks", report.ticks))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    if let Some(result) = &report.result {
        let apex_x = position_at(report.params, apex_time(report.params).min(report.elapsed_s)).x_m;
        let marker_color = match report.final_tone {
            BodyTone::Danger => RED,
            BodyTone::Normal => GREEN,
        };
        chart
            .draw_series(std::iter::once(Circle::new(
                (apex_x, result.peak_height_m),
                5,
                marker_color.filled(),
            )))
            .map_err(plot_err)?
            .label(format!("peak {:.2} m", result.peak_height_m))
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, marker_color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    log::info!("wrote trajectory plot to {}", out.display());
    Ok(())
}
