use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::core::constants::FRAME;
use flappy::input::map_key;
use flappy::ui::draw_ui;
use flappy::utils::logging::{init_file_logging, log_event, log_path};
use flappy::{GameSession, HighScoreFile, HighScoreStore, InputResult, MemoryHighScore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{info, warn};

fn main() -> io::Result<()> {
    // Logging is optional: without a data directory the game still runs.
    if let Err(e) = log_path().and_then(|path| init_file_logging(&path)) {
        eprintln!("flappy: file logging disabled ({e})");
    }

    let store: Box<dyn HighScoreStore> = match HighScoreFile::open_default() {
        Ok(file) => {
            info!(path = %file.path().display(), "using high score file");
            Box::new(file)
        }
        Err(e) => {
            warn!(error = %e, "high score will not persist this session");
            Box::new(MemoryHighScore::default())
        }
    };
    let mut session = GameSession::new(StdRng::from_entropy(), store);

    let result = {
        let _screen = ScreenGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.hide_cursor()?;
        run(&mut terminal, &mut session)
    };

    info!("exiting");
    result
}

/// Raw mode plus the alternate screen for as long as it is alive. Dropping
/// it restores the terminal, including on early returns and panics.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, Drop undoes whatever was entered.
        let guard = ScreenGuard;
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        restore_screen(&mut io::stdout());
        let _ = disable_raw_mode();
    }
}

/// Leave the alternate screen and show the cursor. Best effort: each step
/// runs even if an earlier one failed.
fn restore_screen<W: Write>(out: &mut W) {
    let _ = out.execute(LeaveAlternateScreen);
    let _ = out.execute(Show);
}

/// Fixed-rate loop: wait for input until the next tick is due, then tick
/// and redraw. Returns when the player quits.
fn run<B, R, S>(terminal: &mut Terminal<B>, session: &mut GameSession<R, S>) -> io::Result<()>
where
    B: Backend,
    R: Rng,
    S: HighScoreStore,
{
    let mut last_tick = Instant::now();

    terminal.draw(|f| draw_ui(f, &session.view()))?;

    loop {
        let timeout = FRAME.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key, session.phase) {
                    let (result, events) = session.handle_input(input);
                    events.iter().for_each(log_event);
                    if result == InputResult::Quit {
                        return Ok(());
                    }
                }
            }
        }

        if last_tick.elapsed() >= FRAME {
            let now = Instant::now();
            session.tick(now - last_tick).iter().for_each(log_event);
            last_tick = now;
            terminal.draw(|f| draw_ui(f, &session.view()))?;
        }
    }
}
