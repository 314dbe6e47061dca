//! PNG rendering of the emissions-by-source bar chart.

use anyhow::Result;
use greenaudit_core::{
    chart::{CATEGORY_AXIS_TITLE, VALUE_AXIS_TITLE},
    AuditReport,
};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const BAR_COLOR: RGBColor = RGBColor(46, 125, 50);

/// Draws one bar per emission source and returns the path of the image.
pub fn plot_emissions_by_source(output_dir: &Path, report: &AuditReport) -> Result<PathBuf> {
    let path = output_dir.join("emissions_chart.png");
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let bars = &report.chart;
    let max_value = bars.iter().map(|b| b.value_kg_co2e).fold(0.0, f64::max);
    // An all-zero audit still needs a non-empty axis.
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
    let labels: Vec<&str> = bars.iter().map(|b| b.label).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Emissions by Source: {}", report.profile.company_name),
            ("sans-serif", 40).into_font(),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..bars.len() as u32).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).map_or(String::new(), |l| l.to_string()),
            _ => String::new(),
        })
        .x_desc(CATEGORY_AXIS_TITLE)
        .y_desc(VALUE_AXIS_TITLE)
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(60)
            .data(bars.iter().enumerate().map(|(i, b)| (i as u32, b.value_kg_co2e))),
    )?;

    root.present()?;
    Ok(path.clone())
}
