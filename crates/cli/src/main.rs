use anyhow::{anyhow, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use tessera::{
    timed, MapView, Point2, TileCoord, TileFamily, TileMap, ViewConfig,
};

/// CLI for building tile maps with Tessera, hit testing them, and rendering
/// them to SVG.
#[derive(Debug, StructOpt)]
#[structopt(name = "tessera")]
struct Opt {
    /// Path to a config file that defines how the map is viewed. Supported
    /// formats: JSON, TOML. If not given, the default config is used
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The shape of tile to build the map from. Supported families: rect,
    /// hex, tri
    #[structopt(short, long, default_value = "hex")]
    family: TileFamily,

    /// Number of columns in the map
    #[structopt(long, default_value = "17")]
    width: u32,

    /// Number of rows in the map
    #[structopt(long, default_value = "17")]
    height: u32,

    /// Index of the scale to view the map at. Overrides `initial_scale` from
    /// the config
    #[structopt(short, long)]
    scale: Option<usize>,

    /// Tiles to select, as `x,y` coordinates. Can be given multiple times
    #[structopt(long, number_of_values = 1)]
    select: Vec<Pair<u32>>,

    /// Pixel points to click on, as `x,y`. Each click toggles the selection
    /// of the tile under it, and prints which tile that was. Clicks are
    /// applied after `--select`
    #[structopt(long, number_of_values = 1, allow_hyphen_values = true)]
    click: Vec<Pair<f64>>,

    /// If given, the map will be rendered as an SVG and saved to this path
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// If given, the full config used for the view will be saved to this
    /// path, in TOML format
    #[structopt(long)]
    dump_config: Option<PathBuf>,

    /// Leave tile labels out of the rendered map. Overrides `show_labels`
    /// from the config
    #[structopt(long)]
    hide_labels: bool,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// A pair of comma-separated values from the command line, e.g. `3,7`
#[derive(Copy, Clone, Debug, PartialEq)]
struct Pair<T>(T, T);

impl<T: FromStr> FromStr for Pair<T> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected `x,y`, got {:?}", s))?;
        let parse = |value: &str| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| anyhow!("invalid value {:?} in {:?}", value, s))
        };
        Ok(Self(parse(x)?, parse(y)?))
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<ViewConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Write some bytes to a file, replacing whatever's there
fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("error opening output file {:?}", path))?;
    file.write_all(bytes)
        .with_context(|| format!("error writing to file {:?}", path))
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => ViewConfig::default(),
    };
    if let Some(scale) = opt.scale {
        config.initial_scale = scale;
    }
    if opt.hide_labels {
        config.show_labels = false;
    }

    let map = TileMap::labeled(opt.family, opt.width, opt.height)
        .context("error building map")?;
    let mut view = MapView::new(map, &config)?;
    info!(
        "Viewing {}x{} map at scale {} ({}), {} pixels",
        opt.width,
        opt.height,
        view.scale(),
        view.current_dimension(),
        view.pixel_size()
    );

    let selected = opt
        .select
        .iter()
        .map(|Pair(x, y)| TileCoord::new(opt.family, *x, *y))
        .collect::<Vec<_>>();
    view.set_selection(selected)
        .context("error selecting tiles")?;

    for Pair(x, y) in &opt.click {
        let point = Point2::new(*x, *y);
        match view.toggle_at(point) {
            Some((coord, selected)) => {
                let tile = view.map().tile_at(coord)?;
                let status = if selected { "selected" } else { "deselected" };
                println!("{} -> {} {} ({})", point, coord, tile, status);
            }
            None => println!("{} -> off the map", point),
        }
    }

    if let Some(output_path) = &opt.output {
        timed!(
            format!("Rendering map to {:?}", output_path),
            log::Level::Info,
            write_file(
                output_path,
                view.render_as_svg(config.show_labels).as_bytes()
            )?
        );
    }

    if let Some(config_path) = &opt.dump_config {
        let toml = toml::to_string_pretty(&config)
            .context("error serializing config")?;
        write_file(config_path, toml.as_bytes())?;
        info!("Wrote config to {:?}", config_path);
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
