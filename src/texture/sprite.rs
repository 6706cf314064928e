//! Per-entity-kind sprite assets.
//!
//! Each asset is an explicit little state machine rather than a boolean the
//! renderer polls: pending (nothing to load), ready, or failed. The render
//! pipeline draws a procedural fallback shape for anything that is not
//! ready, so the game is always visually complete.

use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use tracing::{debug, warn};

/// Load state of one visual asset.
pub enum SpriteState {
    /// No asset was configured for this slot.
    Pending,
    Ready(Texture),
    /// The asset exists but could not be loaded.
    Failed,
}

impl SpriteState {
    /// The texture, if this asset is ready to draw.
    pub fn ready(&self) -> Option<&Texture> {
        match self {
            SpriteState::Ready(texture) => Some(texture),
            _ => None,
        }
    }
}

/// Number of family sprite variants shipped with the asset set.
pub const FAMILY_SPRITE_COUNT: usize = 4;

/// All sprite assets the renderer can draw, loaded once at startup.
pub struct SpriteStore {
    pub player: SpriteState,
    pub enemy: SpriteState,
    pub pumpkin: SpriteState,
    pub family: [SpriteState; FAMILY_SPRITE_COUNT],
}

impl SpriteStore {
    /// Loads every asset slot from `asset_dir`. The player slot is loaded
    /// from `selected_player` (the sprite chosen on the character page) and
    /// stays pending when none was chosen. Failures degrade to fallback
    /// rendering, never to an error.
    pub fn load(
        creator: &TextureCreator<WindowContext>,
        asset_dir: &Path,
        selected_player: Option<&Path>,
    ) -> Self {
        let player = match selected_player {
            Some(path) => load_slot(creator, path),
            None => SpriteState::Pending,
        };

        Self {
            player,
            enemy: load_slot(creator, &asset_dir.join("witch.png")),
            pumpkin: load_slot(creator, &asset_dir.join("pumpkin.png")),
            family: std::array::from_fn(|i| {
                load_slot(creator, &asset_dir.join(format!("family{}.png", i + 1)))
            }),
        }
    }

    /// The sprite for a family member's visual variant.
    pub fn family_variant(&self, variant: usize) -> &SpriteState {
        &self.family[variant % FAMILY_SPRITE_COUNT]
    }
}

fn load_slot(creator: &TextureCreator<WindowContext>, path: &Path) -> SpriteState {
    match creator.load_texture(path) {
        Ok(texture) => {
            debug!(path = %path.display(), "Loaded sprite");
            SpriteState::Ready(texture)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Sprite unavailable, using fallback shape");
            SpriteState::Failed
        }
    }
}
