use score_plot::cli::parse_cli;
use score_plot::ScoreSeries;

fn main() {
    let csvin = match parse_cli() {
        Some(p) => p,
        None => return,
    };
    println!("read scores from {} and plot them", csvin.to_str().unwrap());
    let series = ScoreSeries::from_csv_floats(csvin);
    series.plot();
}
