use std::path::Path;

use plotters::prelude::*;

use crate::Res;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

/// Renders the valence/energy scatterplot as an SVG file at `path`.
///
/// Both axes span `0.0..1.0`; every point becomes a filled circle. The parent
/// directory is created when missing. An empty `points` slice still produces
/// the empty chart.
pub fn render_scatter(path: &Path, points: &[(f64, f64)]) -> Res<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Music Mood Distribution", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..1.0f64, 0.0f64..1.0f64)?;

    chart
        .configure_mesh()
        .x_desc("Valence (Happiness)")
        .y_desc("Energy")
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(valence, energy)| Circle::new((valence, energy), 5, BLUE.mix(0.7).filled())),
    )?;

    root.present()?;
    Ok(())
}
