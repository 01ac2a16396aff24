//! Distributional summary: an extended "describe" over a whole table.

use indexmap::IndexMap;

use crate::classify::{SemanticType, classify};
use crate::report::Report;
use crate::table::{Column, Table, Value};

/// Statistics computed for every column, in report row order.
const UNIVERSAL_ROWS: [&str; 9] = [
    "type",
    "dtype",
    "N",
    "count",
    "missing_p",
    "cardinality",
    "unique_p",
    "most_freq",
    "least_freq",
];

/// Statistics computed for numerical columns only, appended after the
/// universal rows.
const NUMERIC_ROWS: [&str; 9] = [
    "mean", "std", "min", "25%", "50%", "75%", "max", "skewness", "kurtosis",
];

/// Build a per-column statistical report.
///
/// Rows are statistic names, columns mirror the input table. Cells are
/// `Null` where a statistic does not apply: the numeric rows for
/// non-numerical columns, and every frequency- or fraction-based row when
/// its denominator is zero. An empty table produces a report of nulls, not
/// an error.
pub fn summarize(table: &Table) -> Report {
    let row_labels = UNIVERSAL_ROWS
        .iter()
        .chain(NUMERIC_ROWS.iter())
        .map(|s| s.to_string())
        .collect();

    let mut report = Report::new(row_labels);
    for column in table.columns() {
        report.push_column(column.name(), summarize_column(column));
    }
    report
}

fn summarize_column(column: &Column) -> Vec<Value> {
    let n = column.len();
    let count = column.non_null_count();
    let counts = column.value_counts();
    let singletons = counts.values().filter(|&&c| c == 1).count();
    let (most_freq, least_freq) = frequency_extremes(&counts);

    let mut cells = vec![
        Value::Text(classify(column).to_string()),
        Value::Text(column.storage().to_string()),
        Value::Int(n as i64),
        Value::Int(count as i64),
        fraction(n - count, n),
        Value::Int(counts.len() as i64),
        fraction(singletons, count),
        most_freq,
        least_freq,
    ];

    if classify(column) == SemanticType::Numerical {
        cells.extend(numeric_cells(column));
    } else {
        cells.extend(std::iter::repeat_n(Value::Null, NUMERIC_ROWS.len()));
    }
    cells
}

/// `numerator / denominator`, or `Null` for the 0/0 case.
fn fraction(numerator: usize, denominator: usize) -> Value {
    if denominator == 0 {
        Value::Null
    } else {
        Value::Float(numerator as f64 / denominator as f64)
    }
}

/// Most and least frequent values. Ties keep the value seen first in
/// column order, which is the frequency table's iteration order.
fn frequency_extremes(counts: &IndexMap<Value, usize>) -> (Value, Value) {
    let mut most: Option<(&Value, usize)> = None;
    let mut least: Option<(&Value, usize)> = None;
    for (value, &count) in counts {
        if most.is_none_or(|(_, c)| count > c) {
            most = Some((value, count));
        }
        if least.is_none_or(|(_, c)| count < c) {
            least = Some((value, count));
        }
    }
    (
        most.map_or(Value::Null, |(v, _)| v.clone()),
        least.map_or(Value::Null, |(v, _)| v.clone()),
    )
}

/// The numeric-only rows for a numerical column.
fn numeric_cells(column: &Column) -> Vec<Value> {
    let mut xs: Vec<f64> = column.non_null_values().filter_map(Value::as_f64).collect();
    if xs.is_empty() {
        return vec![Value::Null; NUMERIC_ROWS.len()];
    }
    xs.sort_by(|a, b| a.total_cmp(b));

    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;

    // Central moments, population-style.
    let m2 = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let m3 = xs.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / n;
    let m4 = xs.iter().map(|x| (x - mean).powi(4)).sum::<f64>() / n;

    let std = if xs.len() < 2 {
        Value::Null
    } else {
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Value::Float(var.sqrt())
    };

    // Standardized moments are undefined for a zero-variance column.
    let (skewness, kurtosis) = if m2 == 0.0 {
        (Value::Null, Value::Null)
    } else {
        (
            Value::Float(m3 / m2.powf(1.5)),
            Value::Float(m4 / (m2 * m2) - 3.0),
        )
    };

    vec![
        Value::Float(mean),
        std,
        Value::Float(xs[0]),
        Value::Float(percentile(&xs, 25.0)),
        Value::Float(percentile(&xs, 50.0)),
        Value::Float(percentile(&xs, 75.0)),
        Value::Float(xs[xs.len() - 1]),
        skewness,
        kurtosis,
    ]
}

/// Linear-interpolation percentile over sorted values.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
    }
}
