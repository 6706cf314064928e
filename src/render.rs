//! The per-frame draw pass: a pure function of the current state.
//!
//! Draw order is fixed and significant, later draws land on top: background
//! grid, walls, pumpkins, family members, checkpoints, player, enemy, HUD,
//! the collected-family icon strip, and finally the checkpoint overlay while
//! paused. Any sprite that is not ready falls back to a procedural shape so
//! the frame is always complete.

use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{BlendMode, Canvas, Texture};
use sdl2::video::Window;

use crate::constants::{
    BACKGROUND_COLOR, CANVAS_SIZE, CHECKPOINT_COLOR, ENEMY_COLOR, FAMILY_COLOR, GRID_LINE_COLOR,
    HUD_COLOR, HUD_ORIGIN, ICON_STRIP_ORIGIN, ICON_STRIP_SPACING, PLAYER_COLOR, PUMPKIN_COLOR,
    TILE_SIZE, WALL_COLOR,
};
use crate::error::{GameError, GameResult};
use crate::game::GameState;
use crate::geometry::Rect;
use crate::quiz::{PanelContent, QuizPanel};
use crate::texture::SpriteStore;

const LOADING_MESSAGE: &str = "Loading flashcards...";
const EMPTY_MESSAGE: &str = "No flashcards returned yet.";
const FAILED_MESSAGE: &str = "Could not load flashcards. Is the quiz service running?";
const DISMISS_HINT: &str = "Press Enter to continue";

/// Renders one frame. Never mutates game state.
pub fn draw(
    canvas: &mut Canvas<Window>,
    state: &GameState,
    panel: &QuizPanel,
    sprites: &SpriteStore,
) -> GameResult<()> {
    draw_grid_background(canvas)?;

    canvas.set_draw_color(WALL_COLOR);
    for wall in &state.walls {
        canvas.fill_rect(to_sdl(&wall.rect)).map_err(GameError::Sdl)?;
    }

    for pumpkin in &state.pumpkins {
        match sprites.pumpkin.ready() {
            Some(texture) => blit(canvas, texture, &pumpkin.rect)?,
            None => filled_circle(canvas, &pumpkin.rect, PUMPKIN_COLOR)?,
        }
    }

    for member in &state.family {
        if member.is_collected() {
            continue;
        }
        match sprites.family_variant(member.variant).ready() {
            Some(texture) => blit(canvas, texture, &member.rect)?,
            None => family_box(canvas, member.rect.pos.x as i16, member.rect.pos.y as i16, &member.rect.size)?,
        }
    }

    for checkpoint in &state.checkpoints {
        if !checkpoint.is_triggered() {
            filled_circle(canvas, &checkpoint.rect, CHECKPOINT_COLOR)?;
        }
    }

    match sprites.player.ready() {
        Some(texture) => blit(canvas, texture, &state.player.rect)?,
        None => ghost_shape(canvas, &state.player.rect, PLAYER_COLOR)?,
    }

    if let Some(enemy) = &state.enemy {
        match sprites.enemy.ready() {
            Some(texture) => blit(canvas, texture, &enemy.rect)?,
            None => ghost_shape(canvas, &enemy.rect, ENEMY_COLOR)?,
        }
    }

    canvas
        .string(
            HUD_ORIGIN.x as i16,
            HUD_ORIGIN.y as i16,
            &format!("Points: {}", state.points),
            HUD_COLOR,
        )
        .map_err(GameError::Sdl)?;

    draw_collected_strip(canvas, state, sprites)?;

    if panel.is_open() {
        draw_overlay(canvas, panel)?;
    }

    canvas.present();
    Ok(())
}

fn draw_grid_background(canvas: &mut Canvas<Window>) -> GameResult<()> {
    canvas.set_draw_color(BACKGROUND_COLOR);
    canvas.clear();

    canvas.set_draw_color(GRID_LINE_COLOR);
    for x in (0..=CANVAS_SIZE.x).step_by(TILE_SIZE as usize) {
        canvas
            .draw_line((x as i32, 0), (x as i32, CANVAS_SIZE.y as i32))
            .map_err(GameError::Sdl)?;
    }
    for y in (0..=CANVAS_SIZE.y).step_by(TILE_SIZE as usize) {
        canvas
            .draw_line((0, y as i32), (CANVAS_SIZE.x as i32, y as i32))
            .map_err(GameError::Sdl)?;
    }
    Ok(())
}

/// One icon per collected family member, in collection-list order, left to
/// right with fixed spacing.
fn draw_collected_strip(
    canvas: &mut Canvas<Window>,
    state: &GameState,
    sprites: &SpriteStore,
) -> GameResult<()> {
    let size = (TILE_SIZE as f32 * 0.8) as u32;
    let mut slot = 0;
    for member in &state.family {
        if !member.is_collected() {
            continue;
        }
        let x = (ICON_STRIP_ORIGIN.x + slot * ICON_STRIP_SPACING) as i16;
        let y = ICON_STRIP_ORIGIN.y as i16;
        match sprites.family_variant(member.variant).ready() {
            Some(texture) => canvas
                .copy(texture, None, SdlRect::new(x as i32, y as i32, size, size))
                .map_err(GameError::Sdl)?,
            None => family_box(canvas, x, y, &glam::Vec2::splat(size as f32))?,
        }
        slot += 1;
    }
    Ok(())
}

fn draw_overlay(canvas: &mut Canvas<Window>, panel: &QuizPanel) -> GameResult<()> {
    let margin = 80i32;
    let frame = SdlRect::new(
        margin,
        margin,
        CANVAS_SIZE.x - 2 * margin as u32,
        CANVAS_SIZE.y - 2 * margin as u32,
    );

    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(0x05, 0x02, 0x0a, 0xe6));
    canvas.fill_rect(frame).map_err(GameError::Sdl)?;
    canvas.set_draw_color(CHECKPOINT_COLOR);
    canvas.draw_rect(frame).map_err(GameError::Sdl)?;
    canvas.set_blend_mode(BlendMode::None);

    let x = (margin + 24) as i16;
    let mut y = (margin + 24) as i16;

    if let Some(title) = panel.title() {
        canvas.string(x, y, title, CHECKPOINT_COLOR).map_err(GameError::Sdl)?;
        y += 24;
    }

    match panel.content() {
        Some(PanelContent::Loading) => {
            canvas.string(x, y, LOADING_MESSAGE, HUD_COLOR).map_err(GameError::Sdl)?;
        }
        Some(PanelContent::Empty) => {
            canvas.string(x, y, EMPTY_MESSAGE, HUD_COLOR).map_err(GameError::Sdl)?;
        }
        Some(PanelContent::Failed) => {
            canvas.string(x, y, FAILED_MESSAGE, ENEMY_COLOR).map_err(GameError::Sdl)?;
        }
        Some(PanelContent::Ready(cards)) => {
            for card in cards {
                canvas.string(x, y, &card.front, HUD_COLOR).map_err(GameError::Sdl)?;
                y += 12;
                canvas
                    .string(x + 16, y, &card.back, FAMILY_COLOR)
                    .map_err(GameError::Sdl)?;
                y += 20;
            }
        }
        None => {}
    }

    let hint_y = (CANVAS_SIZE.y as i32 - margin - 24) as i16;
    canvas
        .string(x, hint_y, DISMISS_HINT, GRID_LINE_COLOR)
        .map_err(GameError::Sdl)?;
    Ok(())
}

fn to_sdl(rect: &Rect) -> SdlRect {
    SdlRect::new(
        rect.pos.x as i32,
        rect.pos.y as i32,
        rect.size.x as u32,
        rect.size.y as u32,
    )
}

fn blit(canvas: &mut Canvas<Window>, texture: &Texture, rect: &Rect) -> GameResult<()> {
    canvas.copy(texture, None, to_sdl(rect)).map_err(GameError::Sdl)
}

fn filled_circle(canvas: &mut Canvas<Window>, rect: &Rect, color: Color) -> GameResult<()> {
    let center = rect.center();
    canvas
        .filled_circle(
            center.x as i16,
            center.y as i16,
            (rect.size.x / 2.0) as i16,
            color,
        )
        .map_err(GameError::Sdl)
}

/// The classic fallback: a round head over a square skirt.
fn ghost_shape(canvas: &mut Canvas<Window>, rect: &Rect, color: Color) -> GameResult<()> {
    filled_circle(canvas, rect, color)?;
    canvas.set_draw_color(color);
    canvas
        .fill_rect(SdlRect::new(
            rect.pos.x as i32,
            (rect.pos.y + rect.size.y * 0.3) as i32,
            rect.size.x as u32,
            (rect.size.y * 0.7) as u32,
        ))
        .map_err(GameError::Sdl)
}

/// Fallback family marker: a labeled box.
fn family_box(canvas: &mut Canvas<Window>, x: i16, y: i16, size: &glam::Vec2) -> GameResult<()> {
    canvas.set_draw_color(FAMILY_COLOR);
    canvas
        .fill_rect(SdlRect::new(x as i32, y as i32, size.x as u32, size.y as u32))
        .map_err(GameError::Sdl)?;
    canvas.string(x + 4, y + 4, "F", Color::BLACK).map_err(GameError::Sdl)
}
