mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::audio::{AudioPlayer, BellAudio};
use space_shooter::compute::{init_state, tick, TickInput};
use space_shooter::config;
use space_shooter::entities::{GameStatus, Playfield, WeaponMode};

/// A key is considered "held" if its last press/repeat event arrived within
/// this window.  Covers terminals that don't emit key-release events: the OS
/// key-repeat rate is ≥ 15 Hz, so 133 ms is always refreshed before expiry.
const HOLD_WINDOW: Duration = Duration::from_millis(133);

/// Returns true if `key` was seen within the last `HOLD_WINDOW`.
fn is_held(key_seen: &HashMap<KeyCode, Instant>, key: &KeyCode, now: Instant) -> bool {
    key_seen
        .get(key)
        .map(|&last| now.duration_since(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Key state sampled between ticks.
#[derive(Default)]
struct InputSampler {
    /// Maps each held key → the instant it was last seen (press or repeat).
    key_seen: HashMap<KeyCode, Instant>,
}

impl InputSampler {
    /// Drain every pending terminal event without blocking.  Returns `None`
    /// when quit was requested.
    fn sample(&mut self) -> std::io::Result<Option<TickInput>> {
        let now = Instant::now();
        let mut input = TickInput::default();

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if self.apply(key, now, &mut input) {
                return Ok(None);
            }
        }

        input.left = self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], now);
        input.right = self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], now);
        Ok(Some(input))
    }

    /// Fold one key event into `input`.  Returns true when it asks to quit.
    ///
    /// Terminals that ignore the event-type flags report OS auto-repeat as
    /// another `Press`, so Space only fires when it was not already held.
    fn apply(&mut self, key: KeyEvent, now: Instant, input: &mut TickInput) -> bool {
        let KeyEvent { code, kind, modifiers, .. } = key;
        match kind {
            // Press: record key + handle one-shot actions
            KeyEventKind::Press => {
                let fresh = !is_held(&self.key_seen, &code, now);
                self.key_seen.insert(code, now);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
                    KeyCode::Char(' ') if fresh => input.fire = true,
                    KeyCode::Char('1') => input.select = Some(WeaponMode::Standard),
                    KeyCode::Char('2') => input.select = Some(WeaponMode::Charged),
                    _ => {}
                }
            }
            // Repeat: refresh timestamp so key stays "held"
            KeyEventKind::Repeat => {
                self.key_seen.insert(code, now);
            }
            // Release: remove key immediately (keyboard-enhancement path)
            KeyEventKind::Release => {
                self.key_seen.remove(&code);
            }
        }
        false
    }

    fn any_held(&self, keys: &[KeyCode], now: Instant) -> bool {
        keys.iter().any(|k| is_held(&self.key_seen, k, now))
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run one session until the player quits.  Once the game is over the loop
/// keeps showing the summary and only listens for quit.
fn game_loop<W: Write>(out: &mut W, audio: &mut impl AudioPlayer) -> std::io::Result<()> {
    let frame = config::tick_interval();
    let mut rng = match config::rng_seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sampler = InputSampler::default();
    let mut state = init_state(Playfield::DEFAULT);

    log::info!("session started ({} ms per tick)", frame.as_millis());
    audio.start_music();

    loop {
        let frame_start = Instant::now();

        let Some(input) = sampler.sample()? else {
            log::info!(
                "quit at tick {} with score {}",
                state.frame,
                state.progression.score
            );
            return Ok(());
        };

        if state.status == GameStatus::Playing {
            let (next, cues) = tick(&state, &input, &mut rng);
            state = next;
            for cue in cues {
                audio.play(cue);
            }
        }

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging() -> std::io::Result<()> {
    let file = File::create(config::log_path())?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> std::io::Result<()> {
    init_logging()?;
    log::info!("Space Shooter starting...");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let mut audio = BellAudio::new(stdout(), config::muted());
    let result = game_loop(&mut out, &mut audio);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("terminal error: {}", err);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    fn space(kind: KeyEventKind) -> KeyEvent {
        key(KeyCode::Char(' '), kind)
    }

    /// Feed `events` at the given offsets from a common start and collect
    /// how many of them requested a shot.
    fn shots(events: &[(u64, KeyEvent)]) -> usize {
        let mut sampler = InputSampler::default();
        let start = Instant::now();
        events
            .iter()
            .filter(|(ms, event)| {
                let mut input = TickInput::default();
                sampler.apply(*event, start + Duration::from_millis(*ms), &mut input);
                input.fire
            })
            .count()
    }

    #[test]
    fn auto_repeat_reported_as_press_fires_once() {
        let held = [
            (0, space(KeyEventKind::Press)),
            (30, space(KeyEventKind::Press)),
            (60, space(KeyEventKind::Press)),
        ];
        assert_eq!(shots(&held), 1);
    }

    #[test]
    fn repeat_events_never_fire() {
        let held = [
            (0, space(KeyEventKind::Press)),
            (30, space(KeyEventKind::Repeat)),
            (60, space(KeyEventKind::Repeat)),
        ];
        assert_eq!(shots(&held), 1);
    }

    #[test]
    fn press_after_release_fires_again() {
        let taps = [
            (0, space(KeyEventKind::Press)),
            (20, space(KeyEventKind::Release)),
            (40, space(KeyEventKind::Press)),
        ];
        assert_eq!(shots(&taps), 2);
    }

    #[test]
    fn press_after_hold_window_fires_again() {
        let taps = [(0, space(KeyEventKind::Press)), (200, space(KeyEventKind::Press))];
        assert_eq!(shots(&taps), 2);
    }

    #[test]
    fn held_space_does_not_block_weapon_select_or_movement() {
        let mut sampler = InputSampler::default();
        let now = Instant::now();
        let mut input = TickInput::default();
        sampler.apply(space(KeyEventKind::Press), now, &mut input);
        sampler.apply(key(KeyCode::Char('2'), KeyEventKind::Press), now, &mut input);
        sampler.apply(key(KeyCode::Left, KeyEventKind::Press), now, &mut input);

        assert!(input.fire);
        assert_eq!(input.select, Some(WeaponMode::Charged));
        assert!(sampler.any_held(&[KeyCode::Left], now));
    }

    #[test]
    fn quit_keys() {
        let mut sampler = InputSampler::default();
        let now = Instant::now();
        let mut input = TickInput::default();
        assert!(sampler.apply(key(KeyCode::Esc, KeyEventKind::Press), now, &mut input));
        assert!(sampler.apply(key(KeyCode::Char('q'), KeyEventKind::Press), now, &mut input));
        let ctrl_c = KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        assert!(sampler.apply(ctrl_c, now, &mut input));
        assert!(!sampler.apply(space(KeyEventKind::Release), now, &mut input));
    }
}
