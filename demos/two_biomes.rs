//! Two Biomes demo — the factory/spawner layer wired by hand.
//!
//! A forest skeleton, a meadow Mellstroy and a meadow creeper, then the
//! forest's own Mellstroy. Each Mellstroy plays `assets/mellstroy.mp3` if it
//! exists and stays silent otherwise.
//!
//! Run with: cargo run --example two_biomes

use mob_spawner::audio::Soundboard;
use mob_spawner::core::factory::{ForestMobFactory, MeadowMobFactory, DEFAULT_CUE};
use mob_spawner::core::spawner::Spawner;
use mob_spawner::schema::mob::Mob;
use std::path::Path;
use std::rc::Rc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let soundboard = Rc::new(if Path::new(DEFAULT_CUE).is_file() {
        Soundboard::system()
    } else {
        Soundboard::muted()
    });

    // --- Factories, one per biome ---
    let forest_factory = ForestMobFactory::new().with_soundboard(Rc::clone(&soundboard));
    let meadow_factory = MeadowMobFactory::new().with_soundboard(soundboard);

    println!("=== Forest ===");
    let forest_spawner = Spawner::new(&forest_factory);
    let skeleton = forest_spawner.spawn_hostile();
    narrate(skeleton.as_ref());

    println!("\n=== Meadow ===");
    let meadow_spawner = Spawner::new(&meadow_factory);
    let mellstroy = meadow_spawner.spawn_neutral();
    narrate(mellstroy.as_ref());

    let creeper = meadow_spawner.spawn_hostile();
    narrate(creeper.as_ref());

    println!("\n=== Back in the Forest ===");
    let forest_mellstroy = forest_spawner.spawn_neutral();
    narrate(forest_mellstroy.as_ref());
}

fn narrate(mob: &dyn Mob) {
    println!("\nSpawned {}: {}", mob.name(), mob.describe());
    let line = mob.vocalize().expect("failed to play audio cue");
    println!("{} says: {}", mob.name(), line);
    println!("{} attacks: {}", mob.name(), mob.attack());
}
