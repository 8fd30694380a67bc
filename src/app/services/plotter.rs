//! Before/after comparison plots
//!
//! Renders one PNG per variable comparing the raw series (the read-only
//! snapshot taken at load time) against the cleaned series. Purely
//! presentational; nothing in the pipeline depends on these files.

use std::path::Path;

use chrono::NaiveDate;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::app::models::{ObservationTable, Variable};
use crate::constants::{PLOT_FILENAMES, PLOT_HEIGHT, PLOT_WIDTH};
use crate::{Error, Result};

/// Plot caption and y-axis label for each variable, in column order
const PLOT_TITLES: &[(&str, &str)] = &[
    ("Precipitation", "precipitation (mm)"),
    ("Maximum Air Temperature", "maximum air temperature (°C)"),
    ("Minimum Air Temperature", "minimum air temperature (°C)"),
    ("Wind Speed", "wind speed (m/s)"),
];

/// Render the four before/after comparison plots into `output_dir`
///
/// `before` is the raw table snapshot, `after` the cleaned table; the two
/// share the same date index. An empty table renders nothing.
pub fn render_comparison_plots(
    before: &ObservationTable,
    after: &ObservationTable,
    output_dir: &Path,
) -> Result<()> {
    if after.is_empty() {
        warn!("Empty observation table, skipping plots");
        return Ok(());
    }

    for variable in Variable::ALL {
        let path = output_dir.join(plot_filename(variable));
        render_variable_plot(before, after, variable, &path)?;
        info!("Wrote {} plot to '{}'", variable.label(), path.display());
    }
    Ok(())
}

/// Output file name for one variable's plot
pub fn plot_filename(variable: Variable) -> &'static str {
    PLOT_FILENAMES[variable.index()]
}

/// (date, value) points of one column, missing values dropped
pub fn series_points(table: &ObservationTable, variable: Variable) -> Vec<(NaiveDate, f64)> {
    table
        .records()
        .iter()
        .filter_map(|r| r.value(variable).map(|v| (r.date, v)))
        .collect()
}

/// Padded y-axis bounds covering both series, or `None` when every value
/// of the variable is missing in both tables
pub fn value_bounds(
    before: &ObservationTable,
    after: &ObservationTable,
    variable: Variable,
) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for table in [before, after] {
        for value in table.records().iter().filter_map(|r| r.value(variable)) {
            lo = lo.min(value);
            hi = hi.max(value);
        }
    }
    if lo > hi {
        return None;
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    Some((lo - pad, hi + pad))
}

fn render_variable_plot(
    before: &ObservationTable,
    after: &ObservationTable,
    variable: Variable,
    path: &Path,
) -> Result<()> {
    let (title, y_label) = PLOT_TITLES[variable.index()];
    let Some((y_lo, y_hi)) = value_bounds(before, after, variable) else {
        warn!("No values present for {}, skipping plot", variable.label());
        return Ok(());
    };

    let records = after.records();
    let date_range = records[0].date..records[records.len() - 1].date;

    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(date_range, y_lo..y_hi)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("date")
        .y_desc(y_label)
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(series_points(before, variable), &BLUE))
        .map_err(plot_error)?
        .label("before check")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(series_points(after, variable), &RED))
        .map_err(plot_error)?
        .label("after check")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn plot_error<E: std::fmt::Display>(error: E) -> Error {
    Error::plot(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::DailyRecord;

    fn table() -> ObservationTable {
        let mut a = DailyRecord::new(
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            1.0,
            20.0,
            10.0,
            3.0,
        );
        a.precip = None;
        let b = DailyRecord::new(
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            2.0,
            22.0,
            12.0,
            4.0,
        );
        ObservationTable::from_records(vec![a, b])
    }

    #[test]
    fn test_series_points_drop_missing() {
        let points = series_points(&table(), Variable::Precip);
        assert_eq!(
            points,
            vec![(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(), 2.0)]
        );
    }

    #[test]
    fn test_value_bounds_cover_both_tables() {
        let before = table();
        let mut after = table();
        after.records_mut()[1].max_temp = Some(30.0);

        let (lo, hi) = value_bounds(&before, &after, Variable::MaxTemp).unwrap();
        assert!(lo < 20.0 && lo > 19.0);
        assert!(hi > 30.0 && hi < 31.0);
    }

    #[test]
    fn test_value_bounds_none_when_all_missing() {
        let mut before = table();
        let mut after = table();
        for t in [&mut before, &mut after] {
            for record in t.records_mut() {
                record.wind_speed = None;
            }
        }
        assert_eq!(value_bounds(&before, &after, Variable::WindSpeed), None);
    }

    #[test]
    fn test_plot_filenames_in_column_order() {
        assert_eq!(plot_filename(Variable::Precip), "precip.png");
        assert_eq!(plot_filename(Variable::WindSpeed), "wind_speed.png");
    }
}
