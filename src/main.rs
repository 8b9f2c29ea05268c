//! Pipanoid entry point
//!
//! Runs the game loop against a headless presenter that replays a scripted
//! key timeline. A windowing backend plugs in by implementing `Presenter`.
//!
//! Usage: `pipanoid [config.json] [frames]`

use anyhow::{Context, Result};

use pipanoid::platform::{InputEvent, Key, Presenter};
use pipanoid::renderer::{ScoreLabel, scene_mesh};
use pipanoid::sim::Scene;
use pipanoid::{App, Config};

const DEFAULT_FRAMES: u64 = 600;

/// Frame, key name, pressed: serve, then sweep the paddle under the ball
const SCRIPT: &[(u64, &str, bool)] = &[
    (10, "Space", true),
    (40, "ArrowLeft", true),
    (90, "ArrowLeft", false),
    (120, "ArrowRight", true),
    (220, "ArrowRight", false),
    (260, "ArrowLeft", true),
    (310, "ArrowLeft", false),
];

/// Replays key presses at fixed frame numbers and logs what it would draw
struct HeadlessPresenter {
    frame: u64,
    max_frames: u64,
    script: Vec<(u64, InputEvent)>,
    last_score: Option<u32>,
    last_title: String,
}

impl HeadlessPresenter {
    fn new(max_frames: u64) -> Self {
        let script = SCRIPT
            .iter()
            .map(|&(frame, name, pressed)| {
                let key = Key::from_name(name);
                let event = if pressed {
                    InputEvent::KeyPressed(key)
                } else {
                    InputEvent::KeyReleased(key)
                };
                (frame, event)
            })
            .collect();
        Self {
            frame: 0,
            max_frames,
            script,
            last_score: None,
            last_title: String::new(),
        }
    }
}

impl Presenter for HeadlessPresenter {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let frame = self.frame;
        self.frame += 1;

        let mut events: Vec<InputEvent> = self
            .script
            .iter()
            .filter(|(at, _)| *at == frame)
            .map(|(_, event)| *event)
            .collect();
        if frame + 1 >= self.max_frames {
            events.push(InputEvent::Closed);
        }
        events
    }

    fn clear(&mut self, color: [f32; 4]) {
        log::trace!("Clear to {:?}", color);
    }

    fn draw(&mut self, scene: &Scene, score: &ScoreLabel) {
        let mesh = scene_mesh(scene);
        if self.last_score != Some(scene.score) {
            log::info!(
                "{} ({} bricks, {} vertices, glyphs: {})",
                score.text,
                scene.bricks.len(),
                mesh.len(),
                score.has_glyphs
            );
            self.last_score = Some(scene.score);
        }
    }

    fn set_title(&mut self, title: &str) {
        if self.frame % 60 == 0 {
            log::debug!("{}", title);
        }
        self.last_title = title.to_string();
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Pipanoid (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(&path).with_context(|| format!("loading {path}"))?,
        None => Config::default(),
    };
    let frames = match args.next() {
        Some(n) => n
            .parse::<u64>()
            .with_context(|| format!("frame count {n:?} is not a number"))?,
        None => DEFAULT_FRAMES,
    };

    let app = App::new(config, HeadlessPresenter::new(frames))?;
    let (summary, presenter) = app.run();

    log::info!("Last title: {}", presenter.last_title);
    println!(
        "frames={} steps={} rounds={} bricks_destroyed={} score={}",
        summary.frames, summary.steps, summary.rounds, summary.bricks_destroyed, summary.final_score
    );
    Ok(())
}
