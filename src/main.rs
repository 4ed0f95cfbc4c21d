use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use boxlabel::{LabelSet, Settings, logging, preview};

#[derive(Parser)]
#[command(name = "boxlabel")]
#[command(about = "Draw bounding boxes on images and export YOLO annotations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Comma separated label list, in class index order
    #[arg(long, global = true, value_name = "LABELS")]
    labels: Option<String>,

    /// Directory annotation files are written to (default: next to each image)
    #[arg(long, global = true, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Open the annotation window (the default)
    Annotate {
        /// Images or folders to open right away
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
    /// Draw an existing annotation file onto its image
    Preview {
        /// Source image
        #[arg(long, value_name = "IMAGE")]
        image: PathBuf,

        /// YOLO annotation file for the image
        #[arg(long, value_name = "TXT")]
        annotations: PathBuf,

        /// Where to write the rendered PNG
        #[arg(short, long, value_name = "PNG")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::setup_logger(args.verbose);

    let mut settings = Settings::load(args.config.as_deref());
    if let Some(list) = &args.labels {
        let labels = LabelSet::parse(list)?;
        settings.labels = labels.labels().to_vec();
    }
    if let Some(dir) = args.output_dir {
        settings.output_dir = Some(dir);
    }

    match args.command {
        Some(Command::Preview {
            image,
            annotations,
            output,
        }) => {
            let drawn = preview::render_preview(&image, &annotations, &output, &settings.label_set())?;
            println!("Drew {} box(es) into {}", drawn, output.display());
            Ok(())
        }
        Some(Command::Annotate { paths }) => launch(settings, paths),
        None => launch(settings, Vec::new()),
    }
}

#[cfg(feature = "gui")]
fn launch(settings: Settings, paths: Vec<PathBuf>) -> anyhow::Result<()> {
    info!("Starting annotator with labels {:?}", settings.labels);
    boxlabel::gui::run(boxlabel::gui::Flags { settings, paths })
        .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

#[cfg(not(feature = "gui"))]
fn launch(_settings: Settings, _paths: Vec<PathBuf>) -> anyhow::Result<()> {
    info!("GUI requested but not compiled in");
    Err(anyhow::anyhow!(
        "boxlabel was built without the `gui` feature; only `preview` is available"
    ))
}
