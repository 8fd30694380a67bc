//! Per-variable summary statistics for stage observability
//!
//! Computes count/mean/std/min/quartiles/max over the non-missing values
//! of each column, logged after each pipeline stage. Informational only;
//! nothing in the pipeline reads these numbers back.

use tracing::info;

use crate::app::models::{ObservationTable, Variable};

/// Descriptive statistics for one variable column
///
/// `None` for every moment when the column has no present values. Std is
/// the sample standard deviation (n - 1 denominator) and needs at least
/// two values; quantiles use linear interpolation between order statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Number of non-missing values
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl SummaryStats {
    /// Compute statistics over one variable column of the table
    pub fn for_variable(table: &ObservationTable, variable: Variable) -> Self {
        let mut values: Vec<f64> = table
            .records()
            .iter()
            .filter_map(|r| r.value(variable))
            .collect();
        values.sort_by(f64::total_cmp);

        let count = values.len();
        if count == 0 {
            return Self {
                count,
                mean: None,
                std: None,
                min: None,
                q25: None,
                median: None,
                q75: None,
                max: None,
            };
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            Some((sum_sq / (count - 1) as f64).sqrt())
        } else {
            None
        };

        Self {
            count,
            mean: Some(mean),
            std,
            min: Some(values[0]),
            q25: Some(quantile(&values, 0.25)),
            median: Some(quantile(&values, 0.5)),
            q75: Some(quantile(&values, 0.75)),
            max: Some(values[count - 1]),
        }
    }

    /// One-line rendering used in stage logs and the inspect report
    pub fn format_row(&self, label: &str) -> String {
        fn cell(value: Option<f64>) -> String {
            match value {
                Some(v) => format!("{v:>9.2}"),
                None => format!("{:>9}", "-"),
            }
        }

        format!(
            "{label:<11} n={:<5} mean={} std={} min={} 25%={} 50%={} 75%={} max={}",
            self.count,
            cell(self.mean),
            cell(self.std),
            cell(self.min),
            cell(self.q25),
            cell(self.median),
            cell(self.q75),
            cell(self.max),
        )
    }
}

/// Linearly interpolated quantile over pre-sorted values (fraction in [0, 1])
fn quantile(sorted: &[f64], fraction: f64) -> f64 {
    let rank = fraction * (sorted.len() - 1) as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    if below == above {
        sorted[below]
    } else {
        sorted[below] + (rank - below as f64) * (sorted[above] - sorted[below])
    }
}

/// Render the four per-variable summary rows for a table
pub fn describe(table: &ObservationTable) -> Vec<String> {
    Variable::ALL
        .iter()
        .map(|&variable| SummaryStats::for_variable(table, variable).format_row(variable.label()))
        .collect()
}

/// Log the per-variable summary of the table at info level
pub fn log_stage_summary(table: &ObservationTable) {
    for row in describe(table) {
        info!("{}", row);
    }
}
