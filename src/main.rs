mod display;

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use airplane::assets::Assets;
use airplane::compute::{click, init_state, pointer_moved, tick};
use airplane::config::GameConfig;
use airplane::entities::{GameState, GameStatus};
use airplane::render::draw_frame;
use airplane::tuning::{FRAME_INTERVAL_MS, VIEW_WIDTH};

use display::TerminalCanvas;

const FRAME: Duration = Duration::from_millis(FRAME_INTERVAL_MS as u64);

/// How far one arrow/A/D press moves the virtual pointer.
const KEY_STEER_STEP: i32 = 40;

/// The loss banner only takes a press that follows this much input silence,
/// so a held key or a click already in flight cannot dismiss it.
const DISMISS_QUIET: Duration = Duration::from_millis(400);

/// Set once the terminal accepted the kitty keyboard flags; restore pops them.
static KEYBOARD_ENHANCED: AtomicBool = AtomicBool::new(false);

// ── Command line ──────────────────────────────────────────────────────────────

/// Bomb the tanks before they roll past you.  Steer with the mouse (or ←/→),
/// click (or Space) to drop a bomb, Q to quit.
#[derive(Debug, Parser)]
#[command(name = "airplane", version)]
struct Cli {
    /// TOML config file.  Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sprite directory (bg/, enm/, plane/, icon/).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Misses allowed before the game is lost.
    #[arg(long)]
    max_health: Option<u32>,

    /// Where log output goes while the game owns the terminal.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn resolve_config(cli: Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(dir) = cli.assets {
        config.asset_dir = dir;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_health) = cli.max_health {
        config.rules.max_health = max_health;
    }
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }
    Ok(config)
}

// ── Logging & terminal lifecycle ──────────────────────────────────────────────

fn init_tracing(config: &GameConfig) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        restore_terminal(&mut stdout());
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        eprintln!("{info}");
    }));
    Ok(())
}

fn setup_terminal<W: Write>(out: &mut W) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;
    // Ask for Repeat/Release events; terminals without the protocol ignore it.
    let enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    KEYBOARD_ENHANCED.store(enhanced, Ordering::Relaxed);
    Ok(())
}

/// Best effort; runs on every exit path, including panics.
fn restore_terminal<W: Write>(out: &mut W) {
    if KEYBOARD_ENHANCED.swap(false, Ordering::Relaxed) {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Control {
    Continue,
    Quit,
}

/// Translate one host event into input-port calls.  Position is
/// latest-value-wins; a click only raises the drop request.
fn handle_event<W: Write>(
    event: &Event,
    canvas: &mut TerminalCanvas<W>,
    state: &mut GameState,
) -> Control {
    match event {
        Event::Mouse(MouseEvent { kind, column, .. }) => match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                *state = pointer_moved(state, canvas.column_to_view_x(*column));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                *state = pointer_moved(state, canvas.column_to_view_x(*column));
                *state = click(state);
            }
            _ => {}
        },
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            modifiers,
            ..
        }) => {
            let nudge = |state: &GameState, step: i32| {
                pointer_moved(state, (state.plane.pointer_x + step).clamp(0, VIEW_WIDTH))
            };
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Control::Quit;
                }
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                    *state = nudge(state, -KEY_STEER_STEP);
                }
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                    *state = nudge(state, KEY_STEER_STEP);
                }
                KeyCode::Char(' ') => *state = click(state),
                _ => {}
            }
        }
        Event::Resize(cols, rows) => canvas.resize(*cols, *rows),
        _ => {}
    }
    Control::Continue
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-rate loop: drain input, tick, render, sleep out the frame.  Returns
/// once the player quits or the game is lost and the loss has been dismissed.
fn game_loop<W: Write>(
    canvas: &mut TerminalCanvas<W>,
    state: &mut GameState,
    assets: &Assets,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Control::Quit = handle_event(&ev, canvas, state) {
                return Ok(());
            }
        }

        *state = tick(state, rng);
        draw_frame(canvas, state, assets)?;

        if state.status == GameStatus::Lost {
            return await_dismissal(canvas, state, assets, rx);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

/// Key presses and button clicks; the events that can end the loss screen.
fn is_press(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent { kind: KeyEventKind::Press | KeyEventKind::Repeat, .. })
            | Event::Mouse(MouseEvent { kind: MouseEventKind::Down(_), .. })
    )
}

/// Terminal state: the last frame (with the loss banner) stays up until the
/// player presses a key or clicks after a pause of `DISMISS_QUIET`.
///
/// Input still queued from play is discarded, and every press that comes too
/// soon restarts the quiet period.  A key held through the loss never
/// dismisses; it has to be released and pressed again.
fn await_dismissal<W: Write>(
    canvas: &mut TerminalCanvas<W>,
    state: &GameState,
    assets: &Assets,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    while let Ok(ev) = rx.try_recv() {
        if let Event::Resize(cols, rows) = ev {
            canvas.resize(cols, rows);
            draw_frame(canvas, state, assets)?;
        }
    }

    let mut quiet_since = Instant::now();
    loop {
        match rx.recv() {
            Ok(Event::Resize(cols, rows)) => {
                canvas.resize(cols, rows);
                draw_frame(canvas, state, assets)?;
            }
            Ok(Event::Key(KeyEvent { kind: KeyEventKind::Release, .. })) => {
                quiet_since = Instant::now();
            }
            Ok(ev) if is_press(&ev) => {
                if quiet_since.elapsed() >= DISMISS_QUIET {
                    return Ok(());
                }
                quiet_since = Instant::now();
            }
            Ok(_) => {}
            // Input thread gone; nothing can dismiss us any more.
            Err(_) => return Ok(()),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = resolve_config(Cli::parse())?;
    init_tracing(&config)?;
    tracing::info!(?config, "starting");

    let assets = Assets::load(&config.asset_dir);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = init_state(&config.rules, assets.slides.len(), &mut rng);

    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    let mut canvas = TerminalCanvas::new(BufWriter::new(stdout()), cols, rows);
    setup_terminal(canvas.out_mut()).context("failed to prepare terminal")?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut canvas, &mut state, &assets, &rx, &mut rng);

    // Always restore the terminal
    restore_terminal(canvas.out_mut());

    tracing::info!(
        frames = state.frame,
        score = state.scoreboard.score,
        missed = state.scoreboard.missed,
        lost = state.status == GameStatus::Lost,
        "game over"
    );
    result.context("game loop failed")?;
    println!("Score: {}", state.scoreboard.score);
    Ok(())
}
