//! cocoplus: helpers for working with COCO object detection data.
//!
//! Stateless utilities around the COCO annotation conventions: converting
//! boxes between the XYWH and XYXY layouts, clipping them to an image,
//! drawing boxes, points and class names on images, the fixed 80-class
//! category table, and a colorized console logger.
//!
//! # Modules
//!
//! - [`ir`]: Box and point value types
//! - [`boxes`]: Layout conversion and clipping, single box or batch
//! - [`annotate`]: Drawing on RGB buffers
//! - [`categories`]: The COCO category table
//! - [`logging`]: Console log formatting and the logger registry
//! - [`config`]: Drawing options loaded from YAML
//! - [`error`]: Error types for cocoplus operations

pub mod annotate;
pub mod boxes;
pub mod categories;
pub mod config;
pub mod error;
pub mod ir;
pub mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ndarray::Array2;

pub use error::CocoPlusError;

use annotate::{Annotator, ColorFormat, LabelFont};
use boxes::BoxFormat;
use config::RenderConfig;
use ir::{BBoxXYWH, BBoxXYXY, Coord};
use logging::{LoggerRegistry, Severity};

/// The cocoplus CLI application.
#[derive(Parser)]
#[command(name = "cocoplus")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Console log level (DEBUG, INFO, WARN, ERROR or CRITICAL).
    #[arg(long, global = true, env = "COCOPLUS_LOG_LEVEL", default_value = "INFO")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List or look up COCO categories.
    Categories(CategoriesArgs),
    /// Convert boxes between the xywh and xyxy layouts.
    Convert(ConvertArgs),
    /// Clip xyxy boxes to an image size.
    Clip(ClipArgs),
    /// Draw boxes, points and class names on an image.
    Draw(DrawArgs),
}

/// Arguments for the categories subcommand.
#[derive(clap::Args)]
struct CategoriesArgs {
    /// Show only the category with this id.
    #[arg(long, group = "lookup")]
    id: Option<u64>,

    /// Show only the category with this name.
    #[arg(long, group = "lookup")]
    name: Option<String>,

    /// Show only the categories of this supercategory.
    #[arg(long, group = "lookup")]
    supercategory: Option<String>,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Target layout ('xyxy' or 'xywh'); the input is the other one.
    #[arg(long)]
    to: String,

    /// JSON file holding an array of 4-number boxes.
    #[arg(long, conflicts_with = "values")]
    batch: Option<PathBuf>,

    /// A single box as four numbers.
    #[arg(num_args = 4, allow_negative_numbers = true, required_unless_present = "batch")]
    values: Vec<f64>,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the clip subcommand.
#[derive(clap::Args)]
struct ClipArgs {
    /// Image height in pixels.
    #[arg(long)]
    height: u32,

    /// Image width in pixels.
    #[arg(long)]
    width: u32,

    /// JSON file holding an array of 4-number xyxy boxes.
    #[arg(long, conflicts_with = "values")]
    batch: Option<PathBuf>,

    /// A single xyxy box as four numbers.
    #[arg(num_args = 4, allow_negative_numbers = true, required_unless_present = "batch")]
    values: Vec<f64>,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the draw subcommand.
#[derive(clap::Args)]
struct DrawArgs {
    /// Image to draw on.
    input: PathBuf,

    /// Where to write the annotated image (format from the extension).
    output: PathBuf,

    /// JSON file holding an array of 4-number boxes.
    #[arg(long)]
    boxes: Option<PathBuf>,

    /// Layout of the boxes ('xywh' or 'xyxy').
    #[arg(long, default_value = "xywh")]
    box_format: String,

    /// Comma-separated class names, one per box.
    #[arg(long, value_delimiter = ',', requires = "boxes")]
    names: Option<Vec<String>>,

    /// JSON file holding an array of [x, y] points.
    #[arg(long)]
    points: Option<PathBuf>,

    /// YAML file with drawing options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font for class names (overrides the config file).
    #[arg(long, env = "COCOPLUS_FONT")]
    font: Option<PathBuf>,
}

/// Run the cocoplus CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), CocoPlusError> {
    let cli = Cli::parse();

    let level: Severity = cli.log_level.parse()?;
    let registry = LoggerRegistry::new();
    let logger = registry.initialize(env!("CARGO_PKG_NAME"), level);
    logging::install(Arc::clone(&logger))?;

    match cli.command {
        Some(Commands::Categories(args)) => run_categories(args),
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Clip(args)) => run_clip(args),
        Some(Commands::Draw(args)) => run_draw(args),
        None => {
            println!("cocoplus {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Helpers for COCO boxes, categories and visualization.");
            println!();
            println!("Run 'cocoplus --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the categories subcommand.
fn run_categories(args: CategoriesArgs) -> Result<(), CocoPlusError> {
    let matches: Vec<&categories::CocoCategory> = if let Some(id) = args.id {
        let category = categories::by_id(id)
            .ok_or_else(|| CocoPlusError::UnknownCategory(format!("id {}", id)))?;
        vec![category]
    } else if let Some(name) = &args.name {
        let category = categories::by_name(name)
            .ok_or_else(|| CocoPlusError::UnknownCategory(format!("name '{}'", name)))?;
        vec![category]
    } else if let Some(supercategory) = &args.supercategory {
        let found: Vec<_> = categories::in_supercategory(supercategory).collect();
        if found.is_empty() {
            return Err(CocoPlusError::UnknownCategory(format!(
                "supercategory '{}'",
                supercategory
            )));
        }
        found
    } else {
        categories::all().iter().collect()
    };

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&matches).map_err(CocoPlusError::JsonWrite)?;
            println!("{}", json);
        }
        _ => {
            for category in &matches {
                println!("{}", category);
            }
        }
    }
    Ok(())
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), CocoPlusError> {
    let target: BoxFormat = args.to.parse()?;

    let rows = match &args.batch {
        Some(path) => {
            let batch = read_box_batch(path)?;
            let converted = match target {
                BoxFormat::Xyxy => boxes::xywh_to_xyxy_batch(batch.view())?,
                BoxFormat::Xywh => boxes::xyxy_to_xywh_batch(batch.view())?,
            };
            log::debug!("converted {} box(es) to {}", converted.nrows(), target);
            rows_of(&converted)
        }
        None => {
            let converted = match target {
                BoxFormat::Xyxy => boxes::xywh_to_xyxy(BBoxXYWH::try_from(&args.values[..])?).to_array(),
                BoxFormat::Xywh => boxes::xyxy_to_xywh(BBoxXYXY::try_from(&args.values[..])?).to_array(),
            };
            vec![converted]
        }
    };

    print_rows(&rows, &args.output)
}

/// Execute the clip subcommand.
fn run_clip(args: ClipArgs) -> Result<(), CocoPlusError> {
    let rows = match &args.batch {
        Some(path) => {
            let mut batch = read_box_batch(path)?;
            boxes::clip_boxes_to_image(batch.view_mut(), args.height, args.width)?;
            rows_of(&batch)
        }
        None => {
            let bbox = BBoxXYXY::try_from(&args.values[..])?;
            vec![boxes::clip_box_to_image(bbox, args.height, args.width).to_array()]
        }
    };

    print_rows(&rows, &args.output)
}

/// Execute the draw subcommand.
fn run_draw(args: DrawArgs) -> Result<(), CocoPlusError> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_path(path)?,
        None => RenderConfig::default(),
    };
    if let Some(font) = args.font {
        config.font_path = Some(font);
    }
    let box_format: BoxFormat = args.box_format.parse()?;

    let font = config
        .font_path
        .as_deref()
        .map(|path| LabelFont::from_path(path, config.labels.clone()))
        .transpose()?;

    // Decoded images are always RGB.
    let mut annotator = Annotator::new(ColorFormat::Rgb);
    if let Some(font) = &font {
        annotator = annotator.with_label_font(font);
    }

    let mut img = image::open(&args.input)?.to_rgb8();
    log::debug!(
        "loaded {} ({}x{})",
        args.input.display(),
        img.width(),
        img.height()
    );

    if let Some(path) = &args.boxes {
        let batch = read_box_batch(path)?;
        let names = args.names.as_deref();
        match box_format {
            BoxFormat::Xywh => {
                let rows = boxes::xywh_rows(&batch)?;
                annotator.draw_xywh_bbox(&mut img, &rows, &config.boxes, names)?;
            }
            BoxFormat::Xyxy => {
                let rows = boxes::xyxy_rows(&batch)?;
                annotator.draw_xyxy_bbox(&mut img, &rows, &config.boxes, names)?;
            }
        }
    }

    if let Some(path) = &args.points {
        let points = read_points(path)?;
        annotator.draw_points(&mut img, &points, &config.points);
    }

    img.save(&args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

/// Reads a JSON array of 4-number boxes into a batch matrix.
fn read_box_batch(path: &Path) -> Result<Array2<f64>, CocoPlusError> {
    let text = fs::read_to_string(path)?;
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(&text).map_err(|source| CocoPlusError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    let rows = rows
        .iter()
        .map(|row| {
            <[f64; 4]>::try_from(row.as_slice())
                .map_err(|_| CocoPlusError::BoxShape { columns: row.len() })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(boxes::batch_from_rows(&rows))
}

/// Reads a JSON array of `[x, y]` points.
fn read_points(path: &Path) -> Result<Vec<Coord>, CocoPlusError> {
    let text = fs::read_to_string(path)?;
    let points: Vec<[f64; 2]> =
        serde_json::from_str(&text).map_err(|source| CocoPlusError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(points.into_iter().map(Coord::from).collect())
}

fn rows_of(batch: &Array2<f64>) -> Vec<[f64; 4]> {
    batch
        .rows()
        .into_iter()
        .map(|row| [row[0], row[1], row[2], row[3]])
        .collect()
}

fn print_rows(rows: &[[f64; 4]], output: &str) -> Result<(), CocoPlusError> {
    match output {
        "json" => {
            let json = serde_json::to_string(rows).map_err(CocoPlusError::JsonWrite)?;
            println!("{}", json);
        }
        _ => {
            for [a, b, c, d] in rows {
                println!("{} {} {} {}", a, b, c, d);
            }
        }
    }
    Ok(())
}
