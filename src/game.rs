//! Session orchestration
//!
//! [`Game`] owns the simulation state and its collaborators. The host calls
//! [`Game::frame`] once per scheduled frame for as long as it returns `true`;
//! each call runs one pure tick, then dispatches its sound effects, then
//! hands the result to the renderer and the score display.

use crate::audio::{AudioManager, SoundEffect};
use crate::input::Intent;
use crate::present::{Frame, Renderer, ScoreDisplay};
use crate::settings::Settings;
use crate::sim::{GameState, SessionPhase, TickInput, tick};

pub struct Game<R: Renderer, D: ScoreDisplay> {
    state: GameState,
    audio: AudioManager,
    renderer: R,
    display: D,
    /// Intents received since the last tick
    pending: TickInput,
}

impl<R: Renderer, D: ScoreDisplay> Game<R, D> {
    pub fn new(settings: &Settings, mut audio: AudioManager, renderer: R, display: D) -> Self {
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);

        Self {
            state: GameState::new(settings.geometry(), settings.seed),
            audio,
            renderer,
            display,
            pending: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    /// Draw the current state without advancing it
    pub fn render_static(&mut self) {
        self.present();
    }

    /// Begin a fresh session. Restarting while playing re-initializes from
    /// the configured seed, so the result is the same as a first start.
    pub fn start_session(&mut self) {
        match self.state.phase {
            SessionPhase::Start => log::info!("Session starting (seed {})", self.state.seed),
            SessionPhase::Playing => log::info!(
                "Session restarting at level {} with score {}",
                self.state.level,
                self.state.score
            ),
        }

        self.audio.resume();
        self.pending = TickInput::default();
        self.state.begin_session();
        self.audio.play(SoundEffect::AmbientLoopStart);
        self.present();
    }

    /// Abandon the session; no further frames are scheduled
    pub fn end_session(&mut self) {
        if self.state.phase == SessionPhase::Playing {
            log::info!(
                "Session ended after {} ticks: score {}, level {}",
                self.state.time_ticks,
                self.state.score,
                self.state.level
            );
        }
        self.state.phase = SessionPhase::Start;
        self.pending = TickInput::default();
        self.present();
    }

    /// Queue an intent for the next tick. Ignored unless playing.
    pub fn handle_input(&mut self, intent: Intent) {
        match self.state.phase {
            SessionPhase::Start => log::trace!("Ignoring {intent:?} outside a session"),
            SessionPhase::Playing => self.pending.push(intent),
        }
    }

    /// Translate and queue a raw key press; unbound keys are dropped
    pub fn handle_key(&mut self, key: &str) {
        match Intent::from_key(key) {
            Some(intent) => self.handle_input(intent),
            None => log::trace!("Unbound key {key:?}"),
        }
    }

    /// Run one scheduled frame. Returns whether another frame should be
    /// scheduled.
    pub fn frame(&mut self) -> bool {
        match self.state.phase {
            SessionPhase::Start => false,
            SessionPhase::Playing => {
                let input = std::mem::take(&mut self.pending);
                let events = tick(&mut self.state, &input);
                self.audio.dispatch(&events);
                self.present();
                true
            }
        }
    }

    /// Drive frames until the session stops scheduling or `max_frames` ran.
    /// Returns the number of frames run.
    pub fn run_frames(&mut self, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames && self.frame() {
            frames += 1;
        }
        frames
    }

    fn present(&mut self) {
        self.renderer.render(&Frame::of(&self.state));
        self.display.show(self.state.score, self.state.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tests::RecordingBackend;
    use crate::present::TextDisplay;
    use crate::sim::{Direction, Enemy, Projectile};
    use glam::Vec2;

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(SessionPhase, u64, usize)>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, frame: &Frame<'_>) {
            self.frames.push((frame.phase, frame.tick, frame.enemies.len()));
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Vec<(u64, u32)>,
    }

    impl ScoreDisplay for RecordingDisplay {
        fn show(&mut self, score: u64, level: u32) {
            self.shown.push((score, level));
        }
    }

    type TestGame = Game<RecordingRenderer, RecordingDisplay>;

    fn game_with(backend: RecordingBackend) -> TestGame {
        Game::new(
            &Settings::default(),
            AudioManager::new(Box::new(backend)),
            RecordingRenderer::default(),
            RecordingDisplay::default(),
        )
    }

    fn game() -> TestGame {
        game_with(RecordingBackend::default())
    }

    fn played(backend: &RecordingBackend) -> Vec<SoundEffect> {
        backend.played.borrow().iter().map(|(e, _)| *e).collect()
    }

    #[test]
    fn test_idle_game_schedules_nothing() {
        let mut game = game();
        assert_eq!(game.phase(), SessionPhase::Start);
        assert!(!game.frame());
        assert_eq!(game.run_frames(10), 0);
        assert!(game.renderer().frames.is_empty());

        game.render_static();
        assert_eq!(game.renderer().frames, vec![(SessionPhase::Start, 0, 0)]);
        assert_eq!(game.display().shown, vec![(0, 1)]);
    }

    #[test]
    fn test_start_session() {
        let backend = RecordingBackend::default();
        let mut game = game_with(backend.clone());

        game.start_session();

        assert_eq!(game.phase(), SessionPhase::Playing);
        assert_eq!(game.state().formation.len(), 32);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().level, 1);
        assert_eq!(*backend.resumes.borrow(), 1);
        assert_eq!(played(&backend), vec![SoundEffect::AmbientLoopStart]);
        assert_eq!(game.renderer().frames, vec![(SessionPhase::Playing, 0, 32)]);
    }

    #[test]
    fn test_each_frame_ticks_renders_and_displays() {
        let mut game = game();
        game.start_session();

        assert_eq!(game.run_frames(5), 5);
        assert_eq!(game.state().time_ticks, 5);
        // One render on start plus one per frame
        assert_eq!(game.renderer().frames.len(), 6);
        assert_eq!(game.display().shown.len(), 6);
        assert_eq!(game.renderer().frames.last(), Some(&(SessionPhase::Playing, 5, 32)));
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut once = game();
        once.start_session();

        let mut twice = game();
        twice.start_session();
        twice.handle_input(Intent::Fire);
        twice.run_frames(50);
        twice.handle_input(Intent::Fire);
        twice.start_session();

        assert_eq!(twice.state().score, 0);
        assert_eq!(twice.state().level, 1);
        assert_eq!(twice.state().formation, once.state().formation);
        assert_eq!(twice.state().stars, once.state().stars);
        assert_eq!(twice.state().player, once.state().player);
        assert!(twice.state().projectiles.is_empty());

        // The stale fire intent from before the restart is gone too
        twice.frame();
        assert!(twice.state().projectiles.is_empty());
    }

    #[test]
    fn test_input_ignored_outside_session() {
        let mut game = game();
        game.handle_input(Intent::Fire);
        game.handle_key("ArrowLeft");
        game.start_session();
        game.frame();

        assert!(game.state().projectiles.is_empty());
        assert_eq!(game.state().player.pos.x, 400.0);
    }

    #[test]
    fn test_input_applies_on_next_tick() {
        let backend = RecordingBackend::default();
        let mut game = game_with(backend.clone());
        game.start_session();

        game.handle_key(" ");
        game.handle_key(" ");
        game.handle_key("ArrowLeft");
        game.handle_key("KeyQ");
        assert!(game.state().projectiles.is_empty());
        assert_eq!(game.state().player.pos.x, 400.0);

        game.frame();

        assert_eq!(game.state().projectiles.len(), 2);
        assert_eq!(game.state().player.pos.x, 380.0);
        assert_eq!(
            played(&backend),
            vec![SoundEffect::AmbientLoopStart, SoundEffect::Shoot, SoundEffect::Shoot]
        );
    }

    #[test]
    fn test_audio_failure_does_not_block() {
        let backend = RecordingBackend {
            fail: true,
            ..Default::default()
        };
        let mut game = game_with(backend);

        game.start_session();
        game.handle_input(Intent::Fire);
        assert!(game.frame());

        assert_eq!(game.phase(), SessionPhase::Playing);
        assert_eq!(game.state().projectiles.len(), 1);
        // resume, ambient loop, shot
        assert_eq!(game.audio().failures(), 3);
    }

    #[test]
    fn test_end_session_stops_scheduling() {
        let mut game = game();
        game.start_session();
        game.run_frames(3);

        game.end_session();

        assert_eq!(game.phase(), SessionPhase::Start);
        assert!(!game.frame());
        assert_eq!(game.state().time_ticks, 3);
    }

    #[test]
    fn test_wave_clear_plays_level_up() {
        let backend = RecordingBackend::default();
        let mut game = game_with(backend.clone());
        game.start_session();

        game.state.formation.enemies = vec![Enemy {
            pos: Vec2::new(200.0, 200.0),
            row: 0,
            col: 0,
        }];
        game.state.projectiles.push(Projectile {
            pos: Vec2::new(200.0, 215.0),
        });

        game.frame();

        assert_eq!(game.state().level, 2);
        assert_eq!(game.state().score, 10);
        assert_eq!(game.state().formation.len(), 32);
        assert_eq!(game.display().shown.last(), Some(&(10, 2)));
        assert_eq!(
            played(&backend),
            vec![
                SoundEffect::AmbientLoopStart,
                SoundEffect::Explosion,
                SoundEffect::LevelUp
            ]
        );
    }

    #[test]
    fn test_formation_bounces_off_right_wall() {
        let mut game = game();
        game.start_session();
        game.state.formation.enemies = vec![
            Enemy {
                pos: Vec2::new(765.0, 100.0),
                row: 0,
                col: 7,
            },
            Enemy {
                pos: Vec2::new(415.0, 150.0),
                row: 1,
                col: 0,
            },
        ];

        let mut frames = 0;
        while game.state().formation.direction == Direction::Right {
            game.frame();
            frames += 1;
            assert!(frames < 10, "formation never bounced");
        }

        let enemies = &game.state().formation.enemies;
        assert_eq!(enemies[0].pos.y, 110.0);
        assert_eq!(enemies[1].pos.y, 160.0);
        assert!(enemies[0].pos.x < 770.0);
    }

    #[test]
    fn test_text_display_integration() {
        let mut game = Game::new(
            &Settings::default(),
            AudioManager::disabled(),
            RecordingRenderer::default(),
            TextDisplay::default(),
        );
        game.start_session();
        game.frame();
        assert_eq!(game.display().line(), "Score: 0 | Level: 1");
    }
}
