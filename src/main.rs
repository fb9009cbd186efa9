use std::{path::PathBuf, process};

use circle_pslg::{CoordinatePrecision, Polygon, UnitCircle, WriterConfig};
use clap::{error::ErrorKind, Parser};

const USAGE: &str = "usage: genCirclePSLG numPerimVerts outFilename";

#[derive(Parser)]
#[command(name = "genCirclePSLG", version, about = "Writes a planar straight line graph of the unit circle for `triangle`")]
struct Cli {
    /// Number of evenly spaced vertices on the circle's perimeter.
    /// Kept as text so a wrong argument count is reported before the count is parsed.
    #[arg(allow_negative_numbers = true)]
    num_perim_verts: String,

    /// Output .poly path (created or overwritten)
    out_filename: PathBuf,

    /// Digits after the decimal point for coordinates, or "roundtrip" for the shortest exact text
    /// [env: CIRCLE_PSLG_PRECISION]
    #[arg(long, value_name = "DIGITS")]
    precision: Option<CoordinatePrecision>,

    /// Also write an SVG preview of the graph
    /// [env: CIRCLE_PSLG_SVG_OUTPUT_PATH]
    #[cfg(feature = "debugging")]
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,
}

/// Parses the command line, answering a wrong argument count with the usage line and status 1
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => {
                println!("{}", USAGE);
                process::exit(1);
            }
            _ => e.exit(),
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = parse_cli();

    let mut config = WriterConfig::from_env()?;
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }

    let circle: UnitCircle = cli.num_perim_verts.parse()?;
    circle.write_pslg_file(&cli.out_filename, &config)?;

    #[cfg(feature = "debugging")]
    circle_pslg::debug::svg::write_preview(&circle, cli.svg.as_deref())?;

    Ok(())
}
