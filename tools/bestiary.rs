//! Bestiary — spawns mobs from the biome factories and prints what they do.
//!
//! Usage: bestiary [--config <path>] [--biome <name>] [--wave <n>] [--seed <n>]
//!                 [--mute] [--cue <path>]
//!
//! Without `--biome` it runs the scripted encounter: four mobs across the
//! forest and meadow spawners. With `--biome` it spawns that biome's hostile
//! and neutral mob. `--wave n` adds n rolled spawns per biome. Set
//! `RUST_LOG=debug` to see audio activity.

use anyhow::{Context, Result};
use clap::Parser;
use mob_spawner::audio::Soundboard;
use mob_spawner::config::SpawnerConfig;
use mob_spawner::core::encounter;
use mob_spawner::core::registry::FactoryRegistry;
use mob_spawner::core::spawner::{LogObserver, Spawner};
use mob_spawner::schema::mob::Mob;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::rc::Rc;

const DEFAULT_CONFIG: &str = "data/spawner.ron";

#[derive(Parser, Debug)]
#[command(name = "bestiary")]
#[command(about = "Spawn mobs from biome factories")]
struct Args {
    /// RON configuration file (defaults to data/spawner.ron when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only spawn from this biome
    #[arg(long)]
    biome: Option<String>,

    /// Rolled spawns per biome after the scripted or single-biome encounter
    #[arg(long)]
    wave: Option<usize>,

    /// Random seed for rolled spawns
    #[arg(long)]
    seed: Option<u64>,

    /// Never play audio
    #[arg(long)]
    mute: bool,

    /// Audio cue for the neutral mob
    #[arg(long)]
    cue: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let soundboard = Rc::new(if config.muted {
        Soundboard::muted()
    } else {
        Soundboard::system()
    });
    let registry = FactoryRegistry::with_defaults(Rc::clone(&soundboard), &config.cue_path);

    println!("MOB SPAWNER: BIOME FACTORIES");
    println!("============================");
    println!("Biomes: {}", registry.labels().join(", "));
    println!("Audio: {}", if soundboard.is_muted() { "muted" } else { "on" });

    let requests = match args.biome {
        Some(ref name) => encounter::biome_pair(&registry, name)?,
        None => encounter::scripted(),
    };

    let mut current_biome: Option<String> = None;
    encounter::run(&registry, &requests, Rc::new(LogObserver), |request, mob| {
        if current_biome.as_deref() != Some(request.biome.as_str()) {
            println!();
            println!("--- Spawning through the {} factory ---", request.biome);
            current_biome = Some(request.biome.clone());
        }
        show(mob.as_ref());
    })?;

    if config.wave_size > 0 {
        let biomes: Vec<String> = match args.biome {
            Some(_) => requests.iter().take(1).map(|r| r.biome.clone()).collect(),
            None => registry.labels().into_iter().map(str::to_string).collect(),
        };
        let mut rng = StdRng::seed_from_u64(config.seed);
        for biome in &biomes {
            let factory = registry
                .get(biome)
                .with_context(|| format!("biome '{}' vanished from the registry", biome))?;
            let spawner = Spawner::new(factory);

            println!();
            println!(
                "--- {} wave ({} mobs, seed {}) ---",
                spawner.biome_label(),
                config.wave_size,
                config.seed
            );
            for _ in 0..config.wave_size {
                let mob = spawner.spawn_roll(&mut rng, config.hostile_chance);
                show(mob.as_ref());
            }
        }
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<SpawnerConfig> {
    let mut config = match args.config {
        Some(ref path) => SpawnerConfig::load_from_ron(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG);
            if default_path.is_file() {
                SpawnerConfig::load_from_ron(&default_path)
                    .with_context(|| format!("failed to load config '{}'", DEFAULT_CONFIG))?
            } else {
                SpawnerConfig::default()
            }
        }
    };

    if args.mute {
        config.muted = true;
    }
    if let Some(wave) = args.wave {
        config.wave_size = wave;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(ref cue) = args.cue {
        config.cue_path = cue.clone();
    }
    Ok(config)
}

fn show(mob: &dyn Mob) {
    println!();
    println!("Spawned {}: {}", mob.name(), mob.describe());
    match mob.vocalize() {
        Ok(line) => println!("{} says: {}", mob.name(), line),
        Err(e) => eprintln!("{} could not speak: {}", mob.name(), e),
    }
    println!("{} attacks: {}", mob.name(), mob.attack());
}
