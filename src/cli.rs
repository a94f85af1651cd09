use super::VERSION;
use clap::{App, Arg, ErrorKind};
use std::path::PathBuf;

/// one-line usage, printed for help and for any argument error
pub const USAGE: &str = "plot_scores_cli -i <inputfile>";

/// Takes the CLI arguments that select the input file for the score plot.
/// Returns None when no input file was supplied, so the caller can exit
/// without plotting.
/// Help prints the usage line and exits clean,
/// any other argument error prints the usage line and exits with status 2.
pub fn parse_cli() -> Option<PathBuf> {
    let arg_ifile = Arg::with_name("inputfile")
        .help("csv file with the score values, last row is plotted")
        .short("i")
        .long("ifile")
        .takes_value(true);
    let cli_args = App::new("plot_scores_cli")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the learning scores from a csv file")
        .arg(arg_ifile)
        .get_matches_safe();
    match cli_args {
        Ok(matches) => matches.value_of("inputfile").map(PathBuf::from),
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => {
                println!("{}", USAGE);
                std::process::exit(2);
            }
        },
    }
}
