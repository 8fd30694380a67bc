//! Application constants for metqc
//!
//! Fixed thresholds, sentinel values, ledger labels, and output file
//! names used throughout the quality control pipeline.

// =============================================================================
// Quality Control Thresholds
// =============================================================================

/// Reserved "no observation recorded" value in raw input files.
///
/// Compared with exact equality; any field equal to this value is converted
/// to the explicit missing marker by Check 1.
pub const NO_DATA_SENTINEL: f64 = -999.0;

/// Closed plausible range for daily precipitation (mm)
pub const PRECIP_RANGE: (f64, f64) = (0.0, 25.0);

/// Closed plausible range for daily max/min air temperature (°C)
pub const TEMPERATURE_RANGE: (f64, f64) = (-25.0, 35.0);

/// Closed plausible range for daily wind speed (m/s)
pub const WIND_SPEED_RANGE: (f64, f64) = (0.0, 10.0);

/// Maximum allowed MaxTemp - MinTemp spread (°C); larger spans fail Check 4
pub const MAX_TEMPERATURE_SPAN: f64 = 25.0;

// =============================================================================
// Ledger Labels
// =============================================================================

/// Row labels of the correction ledger, in pipeline order
pub const CHECK_LABELS: &[&str] = &[
    "1. No Data",
    "2. Gross Error",
    "3. Swapped",
    "4. Range Fail",
];

/// Column labels of the correction ledger, in table column order
pub const VARIABLE_LABELS: &[&str] = &["Precip", "Max Temp", "Min Temp", "Wind Speed"];

// =============================================================================
// Output Artifacts
// =============================================================================

/// File name for the persisted cleaned observation table
pub const CLEANED_DATA_FILENAME: &str = "after_check_data.txt";

/// File name for the persisted correction ledger
pub const LEDGER_FILENAME: &str = "corrections_made.tsv";

/// Token used to serialize missing values in the cleaned table
pub const MISSING_TOKEN: &str = "NaN";

/// File names of the before/after comparison plots, in column order
pub const PLOT_FILENAMES: &[&str] = &[
    "precip.png",
    "max_temp.png",
    "min_temp.png",
    "wind_speed.png",
];

/// Pixel dimensions of rendered plots
pub const PLOT_WIDTH: u32 = 1024;
pub const PLOT_HEIGHT: u32 = 576;

// =============================================================================
// Input Parsing
// =============================================================================

/// Accepted calendar date formats, tried in order
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Number of whitespace-delimited fields per raw record
pub const RAW_FIELD_COUNT: usize = 5;
