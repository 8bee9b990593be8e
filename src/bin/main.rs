//! Texture Combinator CLI
//!
//! Combine six face textures into a block texture atlas.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use texture_combinator::{
    AtlasManifest, Combinator, CombinatorError, CompositorConfig, FaceAssignment, FaceId,
    FaceLayout, ResampleFilter,
};

#[derive(Parser)]
#[command(name = "texture-combinator")]
#[command(author, version, about = "Combine six face textures into a block texture atlas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an atlas from one image per face
    Compose {
        #[arg(long)]
        front: Option<PathBuf>,

        #[arg(long)]
        back: Option<PathBuf>,

        #[arg(long)]
        left: Option<PathBuf>,

        #[arg(long)]
        right: Option<PathBuf>,

        #[arg(long)]
        top: Option<PathBuf>,

        #[arg(long)]
        bottom: Option<PathBuf>,

        /// Use the front texture for all faces
        #[arg(short, long)]
        uniform: bool,

        /// Resampling filter
        #[arg(long, value_enum, default_value = "nearest")]
        filter: FilterArg,

        /// Output file path
        #[arg(short, long, default_value = "Texture.png")]
        output: PathBuf,
    },

    /// Build an atlas from a JSON manifest
    Manifest {
        /// Manifest file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (overrides the manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the atlas layout
    Layout,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FilterArg {
    /// Nearest neighbour (crisp pixel art)
    Nearest,
    /// Bilinear interpolation
    Bilinear,
}

impl From<FilterArg> for ResampleFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResampleFilter::Nearest,
            FilterArg::Bilinear => ResampleFilter::Bilinear,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compose {
            front,
            back,
            left,
            right,
            top,
            bottom,
            uniform,
            filter,
            output,
        } => {
            let faces = [
                (FaceId::Front, front),
                (FaceId::Back, back),
                (FaceId::Left, left),
                (FaceId::Right, right),
                (FaceId::Top, top),
                (FaceId::Bottom, bottom),
            ];
            compose_from_args(faces, uniform, filter.into(), &output)
        }
        Commands::Manifest { input, output } => compose_from_manifest(&input, output),
        Commands::Layout => {
            show_layout();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn compose_from_args(
    faces: [(FaceId, Option<PathBuf>); 6],
    uniform: bool,
    filter: ResampleFilter,
    output: &Path,
) -> Result<(), CombinatorError> {
    let faces: Vec<(FaceId, PathBuf)> = faces
        .into_iter()
        .filter_map(|(face, path)| path.map(|path| (face, path)))
        .filter(|(face, _)| !uniform || *face == FaceId::Front)
        .collect();
    for (face, path) in &faces {
        println!("Loading {} face from {:?}...", face, path);
    }
    let assignment = FaceAssignment::load_faces(faces, uniform)?;

    let config = CompositorConfig::default().with_filter(filter);
    export(&assignment, uniform, config, output)
}

fn compose_from_manifest(input: &Path, output: Option<PathBuf>) -> Result<(), CombinatorError> {
    println!("Loading manifest from {:?}...", input);
    let manifest = AtlasManifest::from_path(input)?;
    let base_dir = input.parent().unwrap_or_else(|| Path::new("."));

    let assignment = manifest.load_assignment(base_dir)?;
    println!("  Loaded {} face images", assignment.assigned_count());

    let output = output
        .or_else(|| manifest.output_path(base_dir))
        .unwrap_or_else(|| PathBuf::from("Texture.png"));

    export(&assignment, manifest.uniform, manifest.config(), &output)
}

fn export(
    assignment: &FaceAssignment,
    uniform: bool,
    config: CompositorConfig,
    output: &Path,
) -> Result<(), CombinatorError> {
    let path = if output.extension().is_some() {
        output.to_path_buf()
    } else {
        output.with_extension("png")
    };

    println!("Compositing with config:");
    println!("  - Uniform faces: {}", uniform);
    println!("  - Filter: {:?}", config.filter);

    Combinator::with_config(config).export(assignment, uniform, &path)?;
    println!("Exported atlas to {:?}", path);

    Ok(())
}

fn show_layout() {
    let size = FaceLayout::canvas_size();
    let tile = FaceLayout::tile_size();

    println!("Atlas: {}x{} RGBA, tiles {}x{}", size, size, tile, tile);
    for face in FaceId::ALL {
        let (x, y) = FaceLayout::offset_of(face);
        println!("  {:<7} ({:>3}, {:>3})", face.to_string(), x, y);
    }
}
