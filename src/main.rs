use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tripline::config::Config;
use tripline::input::parse_trip_list;
use tripline::layout::{Layout, LayoutEngine};
use tripline::session::Session;
use tripline::svg::SvgRenderer;
use tripline::trip::Trip;

#[derive(Parser)]
#[command(name = "tripline")]
#[command(author, version, about)]
#[command(long_about = "Lay out a list of trips on two tracks and render the diagram.\n\n\
    Input has one trip per line, e.g. `BLR MAA` or `BLR -> MAA`.\n\
    Routes travelled more than once move to the upper track.\n\n\
    Examples:\n  \
    tripline trips.txt                 Print SVG to stdout\n  \
    tripline trips.txt -o trips.svg    Write SVG to a file\n  \
    cat trips.txt | tripline - -f json Print the layout model as JSON")]
struct Cli {
    /// Trip list file, or `-` for stdin
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// JSON file overriding layout constants and colours
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    trips: &'a [Trip],
    layout: &'a Layout,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::INFO,
        (false, 2) => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let renderer = SvgRenderer::new(&config.layout);

    let source = read_input(&cli.input)?;
    let routes = parse_trip_list(&source)?;

    let mut session = Session::new(LayoutEngine::from_config(config));
    let total = routes.len();
    let accepted = session.extend(routes);
    if accepted < total {
        tracing::warn!(skipped = total - accepted, "ignored trips with empty codes");
    }
    tracing::info!(
        trips = accepted,
        width = session.layout().width,
        "diagram ready"
    );

    let rendered = match cli.format {
        Format::Svg => renderer.render(session.layout())?,
        Format::Json => serde_json::to_string_pretty(&JsonOutput {
            trips: session.trips(),
            layout: session.layout(),
        })?,
    };

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}
