use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use voxa_geom::Vec3;
use voxa_world::{World, WorldConfig, generate_terrain};

#[derive(Parser)]
#[command(name = "voxa", about = "Headless driver for the voxa voxel world")]
struct Cli {
    /// TOML file with world settings (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Clone, Copy)]
struct TerrainArgs {
    /// Half-width of the generated terrain, in voxels
    #[arg(long, default_value_t = 32)]
    radius: i32,
    /// Noise seed
    #[arg(long, default_value_t = 1337, allow_hyphen_values = true)]
    seed: i32,
}

#[derive(Subcommand)]
enum Command {
    /// Generate terrain, rebuild every chunk, and print counts
    Stats {
        #[command(flatten)]
        terrain: TerrainArgs,
    },
    /// Find a walking path across generated terrain
    Path {
        #[command(flatten)]
        terrain: TerrainArgs,
        /// Start cell (X,Y,Z); Y is snapped to the ground below
        #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true)]
        from: Vec<i32>,
        /// Goal cell (X,Y,Z); Y is snapped to the ground below
        #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true)]
        to: Vec<i32>,
        /// Actor height in voxels
        #[arg(long, default_value_t = 2)]
        height: u32,
    },
    /// Cast a ray and report the first solid voxel
    Pick {
        #[command(flatten)]
        terrain: TerrainArgs,
        /// Ray origin (X,Y,Z)
        #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true)]
        origin: Vec<f32>,
        /// Ray direction (X,Y,Z)
        #[arg(long, value_delimiter = ',', num_args = 3, allow_hyphen_values = true)]
        dir: Vec<f32>,
        #[arg(long, default_value_t = 256.0)]
        max_dist: f32,
    },
}

fn triple<T: Copy>(name: &str, v: &[T]) -> Result<(T, T, T), Box<dyn Error>> {
    match v {
        [x, y, z] => Ok((*x, *y, *z)),
        _ => Err(format!("--{name} expects three comma-separated values").into()),
    }
}

fn build_world(config: &WorldConfig, terrain: TerrainArgs) -> World {
    let mut world = World::with_config(config.clone());
    let voxels = generate_terrain(&mut world, terrain.radius, terrain.seed, &config.terrain);
    log::info!(
        "terrain radius={} seed={} voxels={} chunks={}",
        terrain.radius,
        terrain.seed,
        voxels,
        world.stats().chunks
    );
    world
}

/// Snaps a cell onto the ground below it, or leaves it as given when there is none.
fn snap(world: &World, (x, y, z): (i32, i32, i32), height: u32) -> (i32, i32, i32) {
    match world.ground(x, y, z, height) {
        Some(g) => (x, g, z),
        None => (x, y, z),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };

    match cli.command {
        Command::Stats { terrain } => {
            let mut world = build_world(&config, terrain);
            let rebuilt = world.rebuild_dirty();
            let s = world.stats();
            println!("world {}", world.id().get());
            println!("blocks      {} ({} populated)", s.blocks, s.populated_blocks);
            println!("chunks      {}", s.chunks);
            println!("meshes      {} rebuilt, {} quads", rebuilt.meshes, s.quads);
            println!(
                "colliders   {} rebuilt, {} boxes",
                rebuilt.colliders, s.collider_boxes
            );
        }
        Command::Path {
            terrain,
            from,
            to,
            height,
        } => {
            let world = build_world(&config, terrain);
            let from = snap(&world, triple("from", &from)?, height);
            let to = snap(&world, triple("to", &to)?, height);
            let path = world.pathfind(from, to, height);
            if path.is_empty() {
                println!("no path from {:?} to {:?}", from, to);
            } else {
                for p in path.chunks(3) {
                    println!("{} {} {}", p[0], p[1], p[2]);
                }
            }
        }
        Command::Pick {
            terrain,
            origin,
            dir,
            max_dist,
        } => {
            let world = build_world(&config, terrain);
            let (ox, oy, oz) = triple("origin", &origin)?;
            let (dx, dy, dz) = triple("dir", &dir)?;
            match world.raycast(Vec3::new(ox, oy, oz), Vec3::new(dx, dy, dz), max_dist) {
                Some(hit) => {
                    let v = world.get(hit.voxel.0, hit.voxel.1, hit.voxel.2);
                    println!(
                        "hit {:?} face {:?} place {:?} rgb {} {} {}",
                        hit.voxel, hit.normal, hit.previous, v.color.r, v.color.g, v.color.b
                    );
                }
                None => println!("miss"),
            }
        }
    }
    Ok(())
}
