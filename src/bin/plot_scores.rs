use score_plot::{ScoreSeries, FIXED_INPUT_FILE};
use std::path::PathBuf;

fn main() {
    println!("read scores from {} and plot them", FIXED_INPUT_FILE);
    let series = ScoreSeries::from_csv_integers(PathBuf::from(FIXED_INPUT_FILE));
    series.plot();
}
