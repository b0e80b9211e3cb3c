//! brushforge CLI - generate parametric brushes from the command line
//!
//! Each subcommand builds one shape into a fresh document and writes it as
//! JSON (`.json`) or Quake 3 map text (`.map`).

use anyhow::{Context, Result};
use brushforge::{
    build_corner_stairs, build_door_pair, build_stair_step, build_stair_step_wedge, build_wedge,
    save_map, Aabb, BrushforgeConfig, Direction, DoorAxis, DoorParams, MapDocument, Point3,
    ScaleAxes, StairTextures,
};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brushforge")]
#[command(about = "Generate wedges, stairs and doors as level-editor brushes", long_about = None)]
struct Cli {
    /// TOML settings file (shape settings and texture sizes)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Box and output shared by every shape.
#[derive(Args)]
struct Common {
    /// Minimum corner, as x,y,z
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    min: Point3,
    /// Maximum corner, as x,y,z
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    max: Point3,
    /// Output file (format determined by extension: .json, .map)
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Right-triangular wedge
    Wedge {
        #[command(flatten)]
        common: Common,
        /// Side the slant faces: north, south, east or west
        #[arg(short, long)]
        direction: Direction,
        /// Hang the wedge from the top of the box
        #[arg(long)]
        down: bool,
    },
    /// Single box stair step
    StairStep {
        #[command(flatten)]
        common: Common,
        #[arg(short, long)]
        direction: Direction,
        #[command(flatten)]
        textures: StairArgs,
    },
    /// Stair step with a sloped underside
    StairWedge {
        #[command(flatten)]
        common: Common,
        #[arg(short, long)]
        direction: Direction,
        #[command(flatten)]
        textures: StairArgs,
        /// Mark the brush as detail
        #[arg(long)]
        detail: bool,
    },
    /// Pair of linked func_door entities
    Doors {
        #[command(flatten)]
        common: Common,
        /// Split axis: ns (0) or ew (1)
        #[arg(short, long, default_value = "ns")]
        axis: DoorAxis,
        /// Door face texture
        #[arg(long)]
        main: String,
        /// Texture where the halves meet
        #[arg(long)]
        trim: String,
        /// Fit the main texture horizontally
        #[arg(long)]
        scale_main_h: bool,
        /// Fit the main texture vertically
        #[arg(long)]
        scale_main_v: bool,
        /// Fit the trim texture horizontally
        #[arg(long)]
        scale_trim_h: bool,
        /// Fit the trim texture vertically
        #[arg(long)]
        scale_trim_v: bool,
    },
    /// Quarter-turn staircase closed by a bevel
    CornerStairs {
        #[command(flatten)]
        common: Common,
        /// Number of steps
        #[arg(short = 'n', long, default_value_t = 4)]
        steps: u32,
        #[command(flatten)]
        textures: StairArgs,
    },
}

#[derive(Args)]
struct StairArgs {
    /// Tread texture
    #[arg(long)]
    main: String,
    /// Riser texture
    #[arg(long)]
    riser: String,
}

impl StairArgs {
    fn as_textures(&self) -> StairTextures<'_> {
        StairTextures {
            main: &self.main,
            riser: &self.riser,
        }
    }
}

fn parse_point(s: &str) -> Result<Point3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad coordinate in '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z, got '{s}'")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => BrushforgeConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => BrushforgeConfig::default(),
    };

    let doc = generate(&cli.command, &config)?;
    let output = &common(&cli.command).output;
    write_document(&doc, output)?;
    println!(
        "Wrote {} world objects and {} entities to {}",
        doc.world.len(),
        doc.entities.len(),
        output.display()
    );
    Ok(())
}

fn common(command: &Commands) -> &Common {
    match command {
        Commands::Wedge { common, .. }
        | Commands::StairStep { common, .. }
        | Commands::StairWedge { common, .. }
        | Commands::Doors { common, .. }
        | Commands::CornerStairs { common, .. } => common,
    }
}

/// Build the requested shape into a new document.
fn generate(command: &Commands, config: &BrushforgeConfig) -> Result<MapDocument> {
    let c = common(command);
    let bounds = Aabb::new(c.min, c.max).context("--min must not exceed --max on any axis")?;
    let shapes = &config.shapes;
    let mut doc = MapDocument::new();

    match command {
        Commands::Wedge {
            direction, down, ..
        } => build_wedge(&mut doc, shapes, *direction, &bounds, !down)?,
        Commands::StairStep {
            direction,
            textures,
            ..
        } => build_stair_step(&mut doc, shapes, *direction, &bounds, &textures.as_textures())?,
        Commands::StairWedge {
            direction,
            textures,
            detail,
            ..
        } => build_stair_step_wedge(
            &mut doc,
            shapes,
            *direction,
            &bounds,
            &textures.as_textures(),
            *detail,
        )?,
        Commands::Doors {
            axis,
            main,
            trim,
            scale_main_h,
            scale_main_v,
            scale_trim_h,
            scale_trim_v,
            ..
        } => {
            let params = DoorParams {
                axis: *axis,
                main_texture: main,
                trim_texture: trim,
                main_scale: ScaleAxes {
                    horizontal: *scale_main_h,
                    vertical: *scale_main_v,
                },
                trim_scale: ScaleAxes {
                    horizontal: *scale_trim_h,
                    vertical: *scale_trim_v,
                },
            };
            let team = build_door_pair(&mut doc, &config.textures, shapes, &bounds, &params)?;
            tracing::info!(%team, "doors linked");
        }
        Commands::CornerStairs {
            steps, textures, ..
        } => build_corner_stairs(&mut doc, shapes, &bounds, *steps, &textures.as_textures())?,
    }

    Ok(doc)
}

fn write_document(doc: &MapDocument, output: &Path) -> Result<()> {
    let ext = output.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_lowercase().as_str() {
        "json" => std::fs::write(output, doc.to_json()?)?,
        "map" => save_map(doc, output)?,
        _ => anyhow::bail!("Unknown output format: {}", ext),
    }
    Ok(())
}
