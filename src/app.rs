//! SDL2 shell and the frame driver.
//!
//! One tick = poll events, drain the quiz inbox, update, render. Rendering
//! runs unconditionally so paused frames stay visible; update is a no-op
//! unless the game is active. The loop has no internal stop condition
//! besides window close; after the terminal hand-off it keeps rendering the
//! final frame until the shell navigates away.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{error, event};

use crate::config::Config;
use crate::constants::{CANVAS_SIZE, LOOP_TIME};
use crate::game::{GameEvent, GameState};
use crate::input::InputState;
use crate::map::Level;
use crate::quiz::{FetchReply, QuizClient, QuizPanel};
use crate::render;
use crate::session::SessionStore;
use crate::texture::SpriteStore;

pub struct App {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    // Textures in the sprite store point into this creator.
    _texture_creator: TextureCreator<WindowContext>,
    sprites: SpriteStore,
    state: GameState,
    panel: QuizPanel,
    quiz: QuizClient,
    replies: Receiver<FetchReply>,
    session: SessionStore,
    input: InputState,
}

impl App {
    /// Initializes SDL, builds the level for the configured tuning profile,
    /// and wires up the quiz client. The caller has already verified the
    /// session exists.
    pub fn new(config: &Config, session: SessionStore) -> Result<Self> {
        let session_id = session
            .session_id()
            .context("session id required before the game can start")?
            .to_string();

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

        let window = video_subsystem
            .window("Pumpkin Maze", CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()?;

        let mut canvas = window.into_canvas().build()?;
        canvas.set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)?;
        let texture_creator = canvas.texture_creator();

        let tuning = config.tuning()?;
        let state = GameState::new(Level::build(tuning.map, tuning));

        let sprites = SpriteStore::load(&texture_creator, &config.asset_dir, session.selected_sprite());

        let (quiz, replies) = QuizClient::new(config.quiz_base_url.clone(), session_id);

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        Ok(Self {
            canvas,
            event_pump,
            _texture_creator: texture_creator,
            sprites,
            state,
            panel: QuizPanel::default(),
            quiz,
            replies,
            session,
            input: InputState::default(),
        })
    }

    /// Runs the frame loop until the window is closed.
    pub fn run(&mut self) -> Result<()> {
        event!(
            tracing::Level::INFO,
            "Starting game loop ({:.3}ms)",
            LOOP_TIME.as_secs_f32() * 1000.0
        );

        loop {
            let start = Instant::now();

            if !self.handle_events() {
                event!(tracing::Level::INFO, "Exit requested. Exiting...");
                return Ok(());
            }

            for reply in self.replies.try_iter() {
                self.panel.deliver(reply);
            }

            let events = self.state.update(self.input);
            for game_event in events {
                self.handle_game_event(game_event);
            }

            if let Err(e) = render::draw(&mut self.canvas, &self.state, &self.panel, &self.sprites) {
                error!("Failed to draw frame: {e}");
            }

            if start.elapsed() < LOOP_TIME {
                let time = LOOP_TIME.saturating_sub(start.elapsed());
                if time != Duration::ZERO {
                    spin_sleep::sleep(time);
                }
            } else {
                event!(
                    tracing::Level::WARN,
                    "Game loop behind schedule by: {:?}",
                    start.elapsed() - LOOP_TIME
                );
            }
        }
    }

    /// Polls SDL events into the input state. Returns false when the app
    /// should exit.
    fn handle_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Q),
                    ..
                } => {
                    return false;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Return) | Some(Keycode::KpEnter) | Some(Keycode::Escape),
                    ..
                } if self.panel.is_open() => {
                    self.panel.dismiss();
                    self.state.resume();
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    self.input.apply_key(keycode, true);
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    self.input.apply_key(keycode, false);
                }
                _ => {}
            }
        }
        true
    }

    fn handle_game_event(&mut self, game_event: GameEvent) {
        match game_event {
            GameEvent::CheckpointReached { lesson, index } => {
                let seq = self.panel.open(lesson, index);
                self.quiz.request(seq, lesson, index);
            }
            GameEvent::Ended(summary) => {
                if let Err(e) = self.session.record_summary(&summary) {
                    error!("Failed to record game summary: {e}");
                }
            }
        }
    }
}
