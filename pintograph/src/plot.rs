//! Functions for plotting the mechanism and the traced curve.
pub use plotters::{prelude::*, *};

use crate::mech::Frame;
use std::f64::consts::TAU;

/// Get font setting.
pub fn font() -> TextStyle<'static> {
    ("sans-serif", 24).into_font().color(&BLACK)
}

/// Plot 2D curves with labels.
pub fn curves<B>(backend: B, title: &str, curves: &[(&str, &[[f64; 2]])]) -> anyhow::Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let pts = curves.iter().flat_map(|(_, c)| c.iter().copied());
    let [x_min, x_max, y_min, y_max] = bounding_box(pts);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, font())
        .set_label_area_size(LabelAreaPosition::Left, (8).percent())
        .set_label_area_size(LabelAreaPosition::Bottom, (4).percent())
        .margin((8).percent())
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_label_style(font())
        .y_label_style(font())
        .draw()?;
    for (i, &(label, curve)) in curves.iter().enumerate() {
        let color = Palette99::pick(i);
        chart
            .draw_series(LineSeries::new(curve.iter().map(|&[x, y]| (x, y)), &color))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }
    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .border_style(&BLACK)
        .label_font(font())
        .draw()?;
    Ok(())
}

/// Plot one mechanism state and the traced path.
///
/// Draws the three disks, the six rods, the H/E/P markers and the path.
pub fn frame<B>(backend: B, title: &str, fr: &Frame, path: &[[f64; 2]]) -> anyhow::Result<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    let pts = fr
        .disks
        .iter()
        .flat_map(|disk| {
            let [cx, cy] = disk.center;
            [[cx - disk.r, cy - disk.r], [cx + disk.r, cy + disk.r]]
        })
        .chain(fr.rods.iter().flat_map(|rod| [rod.start, rod.end]))
        .chain(path.iter().copied());
    let [x_min, x_max, y_min, y_max] = bounding_box(pts);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, font())
        .set_label_area_size(LabelAreaPosition::Left, (8).percent())
        .set_label_area_size(LabelAreaPosition::Bottom, (4).percent())
        .margin((8).percent())
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_label_style(font())
        .y_label_style(font())
        .draw()?;
    for disk in &fr.disks {
        let [cx, cy] = disk.center;
        let outline = (0..=360)
            .map(|i| TAU * i as f64 / 360.)
            .map(|a| (cx + disk.r * a.cos(), cy + disk.r * a.sin()));
        chart.draw_series(LineSeries::new(outline, &BLACK))?;
    }
    for rod in &fr.rods {
        let ends = [rod.start, rod.end].map(|[x, y]| (x, y));
        chart.draw_series(LineSeries::new(ends, &BLUE))?;
    }
    chart.draw_series(LineSeries::new(path.iter().map(|&[x, y]| (x, y)), &RED))?;
    let marks = [fr.pos.h, fr.pos.e, fr.pos.p];
    chart.draw_series(marks.iter().map(|&[x, y]| Circle::new((x, y), 5, BLACK.filled())))?;
    Ok(())
}

/// Get the bounding box of the points, squared up to an equal aspect.
pub fn bounding_box(pts: impl IntoIterator<Item = [f64; 2]>) -> [f64; 4] {
    let [mut x_min, mut x_max] = [f64::INFINITY, -f64::INFINITY];
    let [mut y_min, mut y_max] = [f64::INFINITY, -f64::INFINITY];
    for [x, y] in pts {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let dx = (x_max - x_min).abs();
    let dy = (y_max - y_min).abs();
    if dx > dy {
        let cen = (y_min + y_max) * 0.5;
        let r = dx * 0.5;
        [x_min, x_max, cen - r, cen + r]
    } else {
        let cen = (x_min + x_max) * 0.5;
        let r = dy * 0.5;
        [cen - r, cen + r, y_min, y_max]
    }
}
