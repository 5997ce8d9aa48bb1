use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::panic;
use std::sync::Once;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

pub const TITLE: &str = "Quiz Game";

/// The terminal, taken over for the lifetime of the value.
///
/// Raw mode and the alternate screen are released when the session is
/// dropped, and by the panic hook if the program panics first.
pub struct Session {
    terminal: AppTerminal,
}

impl Session {
    pub fn start() -> io::Result<Self> {
        let terminal = init()?;
        tracing::debug!("terminal session started");
        Ok(Self { terminal })
    }
}

impl Deref for Session {
    type Target = AppTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::warn!("failed to restore terminal: {}", e);
        }
        tracing::debug!("terminal session ended");
    }
}

pub fn init() -> io::Result<AppTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;

    let terminal = io::stdout()
        .execute(EnterAlternateScreen)
        .and_then(|stdout| stdout.execute(SetTitle(TITLE)))
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));

    release_on_err(terminal, restore)
}

/// Undo a partial takeover when setup fails half way, keeping the setup error.
fn release_on_err<T>(result: io::Result<T>, release: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        let _ = release();
    }
    result
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn setup_panic_hook() {
    static HOOK: Once = Once::new();

    HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = io::stdout().execute(LeaveAlternateScreen);
            original_hook(panic_info);
        }));
    });
}
