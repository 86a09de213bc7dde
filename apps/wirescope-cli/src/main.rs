use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wirescope_common::{InputEvent, Steps};
use wirescope_mesh::MeshDescription;
use wirescope_pose::PoseAccumulator;
use wirescope_render::{DebugTextRenderer, Renderer};

#[derive(Parser)]
#[command(name = "wirescope-cli", about = "Headless tool for wirescope operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Ingest an OBJ file and print its statistics
    Inspect {
        /// OBJ geometry file
        mesh: PathBuf,
    },
    /// Apply an event sequence and print the resulting pose
    Simulate {
        /// Comma-separated event tokens, e.g. "move-up,rotate-cw,scale-up"
        #[arg(short, long)]
        sequence: String,

        /// Apply the whole sequence this many times
        #[arg(short, long, default_value = "1")]
        repeat: u32,

        /// Optional OBJ file whose vertex count the output reports
        #[arg(long)]
        mesh: Option<PathBuf>,

        /// Translation step in world units
        #[arg(long)]
        move_step: Option<f32>,

        /// Rotation step in degrees
        #[arg(long)]
        rotate_step: Option<f32>,

        /// Uniform scale ratio
        #[arg(long)]
        scale_step: Option<f32>,
    },
}

fn parse_sequence(sequence: &str) -> anyhow::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    for token in sequence.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        events.push(token.parse::<InputEvent>()?);
    }
    Ok(events)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("wirescope-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("mesh: {}", wirescope_mesh::crate_info());
            println!("pose: {}", wirescope_pose::crate_info());
            println!("input: {}", wirescope_input::crate_info());
            println!("render: {}", wirescope_render::crate_info());
        }
        Commands::Inspect { mesh } => {
            let description = MeshDescription::from_obj_file(&mesh)?;
            let buffer = description.flatten()?;

            println!("{}", mesh.display());
            println!("  shapes:    {}", description.shapes.len());
            for shape in &description.shapes {
                let triangles = shape.indices.len() / 3;
                println!("    {} ({triangles} triangles)", shape.name);
            }
            println!("  positions: {}", description.position_count());
            println!("  corners:   {}", description.corner_count());
            println!("  triangles: {}", description.triangle_count());
            println!(
                "  flattened: {} floats ({} vertices)",
                buffer.len(),
                buffer.vertex_count()
            );
        }
        Commands::Simulate {
            sequence,
            repeat,
            mesh,
            move_step,
            rotate_step,
            scale_step,
        } => {
            let events = parse_sequence(&sequence)?;
            let defaults = Steps::default();
            let steps = Steps {
                translation: move_step.unwrap_or(defaults.translation),
                rotation: rotate_step.map_or(defaults.rotation, f32::to_radians),
                scale: scale_step.unwrap_or(defaults.scale),
            };

            let mut accumulator = PoseAccumulator::new();
            for _ in 0..repeat {
                for &event in &events {
                    accumulator.apply(event, steps);
                }
            }

            let renderer = match &mesh {
                Some(path) => {
                    let description = MeshDescription::from_obj_file(path)?;
                    DebugTextRenderer::for_buffer(&description.flatten()?)
                }
                None => DebugTextRenderer::new(0),
            };

            println!("sequence: {} event(s), repeated {repeat}x", events.len());
            print!("{}", renderer.render(&accumulator.current()));
            println!("determinant: {:.6}", accumulator.current().determinant());
            println!("state: {:?}", accumulator.state());
        }
    }

    Ok(())
}
