//! SG: Compute the graticule of an ellipsoid, as seen through an auxiliary
//! sphere in oblique stereographic projection, and print its sample table.
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use stereogrid::math::angular::parse_angle;
use stereogrid::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "sg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the ellipsoid
    #[arg(short, long, default_value = "GSK_2011")]
    ellps: String,

    /// Ellipsoid definition file, overriding the built-in definitions
    #[arg(long)]
    ellipsoids: Option<PathBuf>,

    /// Semimajor axis of a user defined ellipsoid (requires --b)
    #[arg(long, requires = "b")]
    a: Option<f64>,

    /// Semiminor axis of a user defined ellipsoid (requires --a)
    #[arg(long, requires = "a")]
    b: Option<f64>,

    /// Ellipsoid-to-sphere projection: mollweide, gauss-first, gauss-second,
    /// equal-area or equidistant
    #[arg(short, long, default_value = "mollweide")]
    projection: String,

    /// Latitude of the projection center, decimal degrees or D:M:S
    #[arg(long, allow_hyphen_values = true)]
    lat0: String,

    /// Longitude of the projection center, decimal degrees or D:M:S
    #[arg(long, allow_hyphen_values = true)]
    lon0: String,

    /// Distance between the parallels, degrees
    #[arg(long, default_value_t = 10.)]
    step_lat: f64,

    /// Distance between the meridians, degrees
    #[arg(long, default_value_t = 10.)]
    step_lon: f64,

    /// Use the latitude step for the meridians too
    #[arg(long)]
    fixed_steps: bool,

    /// Sampling resolution along the curves, degrees
    #[arg(long, default_value_t = 0.5)]
    resolution: f64,

    /// Print the curves, one point per line
    #[arg(long)]
    polylines: bool,

    /// Print the curve labels
    #[arg(long)]
    labels: bool,

    /// Project these points, given as LAT,LON, instead of building the grid
    #[arg(long, allow_hyphen_values = true)]
    point: Vec<String>,

    /// Scale denominator for the projected points
    #[arg(short, long, default_value_t = 1.)]
    scale: f64,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{options:#?}");

    let ellps = ellipsoid(&options)?;
    let kind: SphereProjection = options.projection.parse()?;
    let lat0 = parse_angle(&options.lat0)?;
    let lon0 = parse_angle(&options.lon0)?;

    let sphere = SphereProjector::new(kind, &ellps, lat0);
    let plane = StereographicProjector::new(sphere, lat0, lon0);
    info!("{kind}: sphere radius {:.3}", plane.radius());

    if !options.point.is_empty() {
        for point in &options.point {
            let Some((lat, lon)) = point.split_once(',') else {
                anyhow::bail!("Expected LAT,LON, got '{point}'");
            };
            let (lat, lon) = (parse_angle(lat)?, parse_angle(lon)?);
            let xy = plane.project_to_plane_scaled(lat, lon, options.scale)?;
            println!("{point}\t{:.3}\t{:.3}", xy.x(), xy.y());
        }
        return Ok(());
    }

    let step_lon = if options.fixed_steps {
        options.step_lat
    } else {
        options.step_lon
    };
    let grid = GridBuilder::new(plane, options.step_lat, step_lon, lat0, lon0)?
        .with_resolution(options.resolution)?
        .build();

    for row in grid.table_rows() {
        println!("{}", row.join("\t"));
    }

    if options.polylines {
        for line in grid.polylines() {
            println!("# {:?} {}", line.family, line.value);
            for p in &line.points {
                println!("{:.3}\t{:.3}", p.x() / options.scale, p.y() / options.scale);
            }
        }
    }

    if options.labels {
        for label in grid.labels() {
            let at = label.at.scale_down(options.scale);
            println!("{label}\t{:?}\t{:.3}\t{:.3}", label.family, at.x(), at.y());
        }
    }
    Ok(())
}

// The named ellipsoid, or the user defined one if both axes are given
fn ellipsoid(options: &Cli) -> Result<Ellipsoid, anyhow::Error> {
    if let (Some(a), Some(b)) = (options.a, options.b) {
        let rf = if a == b { 0. } else { a / (a - b) };
        return Ok(Ellipsoid::new(a, b, rf, 0)?);
    }

    let mut registry = EllipsoidRegistry::builtin();
    if let Some(path) = registry_path(options) {
        info!("Reading ellipsoids from {}", path.display());
        registry = registry.merged(EllipsoidRegistry::from_file(&path)?);
    }
    Ok(registry.get(&options.ellps)?)
}

// Explicitly given, or the first one found in the search path
fn registry_path(options: &Cli) -> Option<PathBuf> {
    if let Some(path) = &options.ellipsoids {
        return Some(path.clone());
    }

    let mut paths: Vec<PathBuf> = vec![[".", "stereogrid", "ellipsoids.ini"].iter().collect()];
    #[cfg(feature = "with_plain")]
    {
        if let Some(mut userpath) = dirs::data_local_dir() {
            userpath.push("stereogrid");
            userpath.push("ellipsoids.ini");
            paths.push(userpath);
        }
    }
    paths.into_iter().find(|path| path.exists())
}
