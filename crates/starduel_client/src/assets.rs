//! Static assets: проверка при старте + handles

use std::path::{Path, PathBuf};

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use thiserror::Error;

pub const BACKGROUND: &str = "space.png";
pub const YELLOW_SHIP: &str = "spaceship_yellow.png";
pub const RED_SHIP: &str = "spaceship_red.png";
pub const FIRE_SOUND: &str = "Gun+Silencer.mp3";
pub const HIT_SOUND: &str = "Grenade+1.mp3";

pub const REQUIRED: [&str; 5] = [BACKGROUND, YELLOW_SHIP, RED_SHIP, FIRE_SOUND, HIT_SOUND];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset directory {0} not found")]
    MissingRoot(PathBuf),

    #[error("required asset {name} not found in {root}")]
    MissingFile { name: &'static str, root: PathBuf },
}

/// Тот же каталог, из которого читает `AssetPlugin` по умолчанию
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join("assets")
}

/// Checks that every required file exists under `root`.
pub fn verify_assets(root: &Path) -> Result<(), AssetError> {
    if !root.is_dir() {
        return Err(AssetError::MissingRoot(root.to_path_buf()));
    }

    for name in REQUIRED {
        if !root.join(name).is_file() {
            return Err(AssetError::MissingFile {
                name,
                root: root.to_path_buf(),
            });
        }
    }

    Ok(())
}

#[derive(Resource)]
pub struct GameAssets {
    pub background: Handle<Image>,
    pub yellow_ship: Handle<Image>,
    pub red_ship: Handle<Image>,
    pub fire_sound: Handle<AudioSource>,
    pub hit_sound: Handle<AudioSource>,
}

impl FromWorld for GameAssets {
    fn from_world(world: &mut World) -> Self {
        let server = world.resource::<AssetServer>();
        Self {
            background: server.load(BACKGROUND),
            yellow_ship: server.load(YELLOW_SHIP),
            red_ship: server.load(RED_SHIP),
            fire_sound: server.load(FIRE_SOUND),
            hit_sound: server.load(HIT_SOUND),
        }
    }
}
