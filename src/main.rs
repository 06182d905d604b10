mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::game::{AlienInvasion, Control};
use alien_invasion::settings::Settings;

use display::TerminalHost;

const SETTINGS_PATH: &str = "alien_invasion.toml";

/// Log output goes to a file; stderr would scribble over the alternate screen.
const LOG_PATH: &str = "alien_invasion.log";

fn init_logging() -> Result<()> {
    let file = File::create(LOG_PATH).with_context(|| format!("creating {LOG_PATH}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run frames at the configured rate until the player quits.
fn game_loop<W: Write>(out: &mut W, settings: Settings, reports_release: bool) -> Result<()> {
    let (cols, rows) = terminal::size().context("querying terminal size")?;
    let mut host = TerminalHost::new(out, cols, rows, &settings, reports_release);
    let mut game = AlienInvasion::new(settings, &host);
    let frame = Duration::from_secs_f64(1.0 / game.settings().frame_rate as f64);

    loop {
        let frame_start = Instant::now();

        if game.run_frame(&mut host)? == Control::Quit {
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;
    let settings = Settings::load(Path::new(SETTINGS_PATH))
        .with_context(|| format!("loading {SETTINGS_PATH}"))?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release events where the terminal supports them; elsewhere
    // the host falls back to expiring keys that stop repeating.
    let reports_release = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

    let result = game_loop(&mut out, settings, reports_release);

    // Always restore the terminal
    if reports_release {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("{:#}", e);
    }
    result
}
