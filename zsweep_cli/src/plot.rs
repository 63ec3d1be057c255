use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use zsweep_core::Analysis;

pub const X_CAPTION: &str = "Compression speed, MB/s";
pub const Y_CAPTION: &str = "CR";

pub const DEFAULT_SIZE: (u32, u32) = (1280, 800);

/// Render the speed/ratio scatter of an analysis to an SVG file.
///
/// Layers, bottom to top:
/// - every tuned point as a small black dot, without legend entries;
/// - each default configuration as a triangle with its own legend entry;
/// - each frontier point as a coloured dot with its own legend entry.
pub fn render_svg(path: &Path, analysis: &Analysis, size: (u32, u32)) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let all = analysis.defaults.iter().chain(&analysis.tuned);
    let x_range = padded_range(all.clone().map(|p| p.speed_mbps));
    let y_range = padded_range(all.map(|p| p.ratio));

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_CAPTION)
        .y_desc(Y_CAPTION)
        .draw()?;

    chart.draw_series(
        analysis
            .tuned
            .iter()
            .map(|p| Circle::new((p.speed_mbps, p.ratio), 3, BLACK.filled())),
    )?;

    let mut color = 0usize;
    for point in &analysis.defaults {
        let style = Palette99::pick(color).stroke_width(2);
        color += 1;
        chart
            .draw_series(std::iter::once(TriangleMarker::new(
                (point.speed_mbps, point.ratio),
                8,
                style,
            )))?
            .label(point.desc.as_str())
            .legend(move |(x, y)| TriangleMarker::new((x, y), 8, style));
    }

    for point in &analysis.frontier {
        let style = Palette99::pick(color).filled();
        color += 1;
        chart
            .draw_series(std::iter::once(Circle::new(
                (point.speed_mbps, point.ratio),
                5,
                style,
            )))?
            .label(point.desc.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 5, style));
    }

    if color > 0 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Axis range covering every finite value with 5% padding on both sides.
/// Falls back to 0..1 when there is nothing to cover.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return 0.0..1.0;
    }
    let pad = if hi > lo {
        (hi - lo) * 0.05
    } else {
        lo.abs().max(1.0) * 0.05
    };
    (lo - pad)..(hi + pad)
}
