use plotly::common::{Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
pub mod cli;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// default input file for the no-argument app
pub const FIXED_INPUT_FILE: &str = "values.txt";

/// The main struct for the learning score series
#[derive(Debug, Clone)]
pub struct ScoreSeries {
    pub scores: Vec<f64>,
}

impl ScoreSeries {
    pub fn new() -> ScoreSeries {
        let scores: Vec<f64> = Vec::new();
        let series: ScoreSeries = ScoreSeries { scores };
        series
    }

    /// Init a ScoreSeries from the last row of a csv file,
    /// parsing the fields as integers (the convention of the fixed-path app).
    /// A missing file is reported and gives an empty series,
    /// a field that is not an integer panics.
    pub fn from_csv_integers(fin: PathBuf) -> ScoreSeries {
        let row = match last_csv_row(&fin) {
            Some(r) => r,
            None => return ScoreSeries::new(),
        };
        let mut series = ScoreSeries::new();
        for (i, field) in row.split(',').enumerate() {
            let field = field.trim();
            match field.parse::<i64>() {
                Ok(v) => series.scores.push(v as f64),
                Err(_) => panic!(
                    "could not parse field {:?} at position {} as an integer score",
                    field,
                    i + 1
                ),
            }
        }
        series
    }

    /// Init a ScoreSeries from the last row of a csv file,
    /// parsing the fields as floats (the convention of the flag-driven app).
    /// A missing file is reported and gives an empty series,
    /// a field that is not a number panics.
    pub fn from_csv_floats(fin: PathBuf) -> ScoreSeries {
        let row = match last_csv_row(&fin) {
            Some(r) => r,
            None => return ScoreSeries::new(),
        };
        let mut series = ScoreSeries::new();
        for (i, field) in row.split(',').enumerate() {
            let field = field.trim();
            match field.parse::<f64>() {
                Ok(v) => series.scores.push(v),
                Err(_) => panic!(
                    "could not parse field {:?} at position {} as a score",
                    field,
                    i + 1
                ),
            }
        }
        series
    }

    /// plots the scores against their trial number and opens the chart
    pub fn plot(self) {
        let trials: Vec<usize> = (0..self.scores.len()).collect();
        let line = Scatter::new(trials, self.scores).mode(Mode::Lines);
        let mut plot = Plot::new();
        plot.add_trace(line);
        plot.set_layout(
            Layout::new()
                .x_axis(Axis::new().title(Title::new("trial no.")))
                .y_axis(Axis::new().title(Title::new("score"))),
        );
        plot.show();
    }
}

impl std::fmt::Display for ScoreSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "trial no.,score\n")?;
        for (trial, score) in self.scores.iter().enumerate() {
            write!(f, "{},{}\n", trial, score)?
        }
        Ok(())
    }
}

/// Reads all the rows of the csv file and keeps only the last non-empty one,
/// earlier rows are discarded.
/// Returns None when the file cannot be opened, after reporting it,
/// so that the caller can still plot an empty series.
/// A file that opens but has no rows panics.
pub fn last_csv_row(fin: &Path) -> Option<String> {
    let file = match File::open(fin) {
        Ok(f) => f,
        Err(_) => {
            println!("input value file not found: {}", fin.display());
            return None;
        }
    };
    let buf = BufReader::new(file);
    let mut last_row: Option<String> = None;
    for l in buf.lines() {
        let l_unwrap = match l {
            Ok(l_ok) => l_ok,
            Err(l_err) => {
                println!("Err, could not read/unwrap line {}", l_err);
                continue;
            }
        };
        if !l_unwrap.trim().is_empty() {
            last_row = Some(l_unwrap);
        }
    }
    match last_row {
        Some(r) => Some(r),
        None => panic!("input file {} has no rows to plot", fin.display()),
    }
}
