//! Interactive multi-select menu over the target registry.
//!
//! A single-threaded render/await-input loop: every keypress is processed to
//! completion, the frame is redrawn in place, and the loop suspends again on
//! [`crossterm::event::read`]. The terminal is the one shared process-wide
//! resource here; raw mode and cursor visibility are held by an RAII guard
//! and additionally restored by a SIGINT hook registered before the mode is
//! entered, so no exit path can leave the user's terminal without a cursor.
//! The hook treats an interrupt as a cancellation only while the menu owns
//! the terminal; outside that window it terminates with a failure status.

use std::io::{self, Write as _};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context as _, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};

use crate::agents::SKILL_NAME;
use crate::registry::Registry;

/// How an interactive menu session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The user confirmed the current selection.
    Confirmed,
    /// The user backed out; nothing should be installed.
    Cancelled,
}

/// What the event loop should do after one keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Confirm,
    Cancel,
}

/// Cursor state for one menu session over a registry.
///
/// Invariant: `cursor < registry.len()` whenever the registry is non-empty;
/// moves clamp at both ends, there is no wraparound.
#[derive(Debug)]
struct MenuState<'a> {
    registry: &'a mut Registry,
    cursor: usize,
}

impl<'a> MenuState<'a> {
    const fn new(registry: &'a mut Registry) -> Self {
        debug_assert!(!registry.is_empty(), "menu entered with empty registry");
        Self {
            registry,
            cursor: 0,
        }
    }

    const fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    const fn move_down(&mut self) {
        if self.cursor + 1 < self.registry.len() {
            self.cursor += 1;
        }
    }

    fn apply_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Step {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Char(' ') => self.registry.toggle(self.cursor),
            KeyCode::Enter => return Step::Confirm,
            KeyCode::Esc | KeyCode::Char('q') => return Step::Cancel,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Step::Cancel;
            }
            _ => {}
        }
        Step::Continue
    }
}

/// Build the full menu frame as plain lines.
///
/// The `(exists)` marker is recomputed from the filesystem on every call; it
/// is advisory display state only, the executor re-checks at install time.
fn render_frame(registry: &Registry, cursor: usize, ansi: bool) -> String {
    let hints = "  space toggles, enter installs, q cancels";
    let mut lines = vec![
        format!("Select targets for the {SKILL_NAME} skill"),
        if ansi {
            format!("\x1b[2m{hints}\x1b[0m")
        } else {
            hints.to_string()
        },
        String::new(),
    ];
    for (index, target) in registry.targets().iter().enumerate() {
        let marker = if index == cursor { ">" } else { " " };
        let checkbox = if target.selected { "[x]" } else { "[ ]" };
        let exists = if target.dest.exists() { " (exists)" } else { "" };
        let row = format!(
            "{marker} {checkbox} {}  {}{exists}",
            target.name,
            target.dest.display()
        );
        lines.push(if ansi && index == cursor {
            format!("\x1b[36m{row}\x1b[0m")
        } else {
            row
        });
    }
    lines.push(String::new());
    lines.push(format!(
        "{} of {} selected",
        registry.selected().len(),
        registry.len()
    ));
    lines.join("\n")
}

/// In-place frame writer.
///
/// Tracks how many lines the previous frame emitted and erases exactly that
/// many before printing the next one, so redraws never scroll the terminal
/// history or leave stale partial frames.
#[derive(Debug, Default)]
struct Renderer {
    lines_drawn: u16,
}

impl Renderer {
    fn redraw(&mut self, out: &mut impl io::Write, frame: &str) -> io::Result<()> {
        if self.lines_drawn > 0 {
            queue!(
                out,
                cursor::MoveUp(self.lines_drawn),
                Clear(ClearType::FromCursorDown)
            )?;
        }
        let mut lines: u16 = 0;
        for line in frame.lines() {
            // Raw mode: an explicit carriage return is needed per line.
            writeln!(out, "{line}\r")?;
            lines = lines.saturating_add(1);
        }
        self.lines_drawn = lines;
        out.flush()
    }
}

/// Restore cooked input mode and cursor visibility.
///
/// Idempotent and safe to call from the SIGINT handler thread.
fn restore_terminal() {
    terminal::disable_raw_mode().ok();
    execute!(io::stdout(), cursor::Show).ok();
}

/// Scoped acquisition of the process-wide terminal mode.
///
/// Raw mode and the hidden cursor are released in `Drop`, covering confirm,
/// cancel, and error-unwind exits alike.
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        // Raised before raw mode so an interrupt racing the setup is still
        // read as a menu cancellation; the guard lowers it on every exit.
        MENU_ACTIVE.store(true, Ordering::SeqCst);
        let guard = Self;
        terminal::enable_raw_mode().context("enabling raw terminal mode")?;
        execute!(io::stdout(), cursor::Hide).context("hiding terminal cursor")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        MENU_ACTIVE.store(false, Ordering::SeqCst);
        restore_terminal();
    }
}

static SIGINT_HOOK: Once = Once::new();

/// True while a [`TerminalGuard`] holds the terminal in raw mode.
static MENU_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Exit status for a delivered interrupt.
///
/// Inside the menu an interrupt is a deliberate cancellation and exits
/// cleanly; anywhere else it is an aborted run and exits with the
/// conventional SIGINT status.
const fn interrupt_exit_code(menu_active: bool) -> i32 {
    if menu_active { 0 } else { 130 }
}

/// Register the unconditional restore hook, once per process.
///
/// Must run before raw mode is entered: an interrupt delivered mid-menu must
/// never leave the terminal with an invisible cursor. The hook always
/// restores the terminal, but only a menu-stage interrupt counts as a
/// cancellation; an interrupt during the install phase terminates with a
/// failure status so half-finished work is never reported as success.
fn install_sigint_hook() {
    SIGINT_HOOK.call_once(|| {
        let result = ctrlc::set_handler(|| {
            restore_terminal();
            let menu_active = MENU_ACTIVE.load(Ordering::SeqCst);
            if menu_active {
                writeln!(io::stderr(), "cancelled").ok();
            }
            std::process::exit(interrupt_exit_code(menu_active));
        });
        if let Err(err) = result {
            tracing::debug!("SIGINT restore hook not installed: {err}");
        }
    });
}

/// Run the interactive selection loop over `registry`.
///
/// Renders the registry with a movable cursor, processes exactly one key
/// event at a time (Up/`k`, Down/`j`, space, Enter, `q`/Esc/Ctrl-C) and
/// redraws in place after each. Returns when the user confirms or cancels;
/// the selection flags on `registry` are the final answer.
///
/// The caller must guarantee a non-empty registry and an interactive
/// terminal on standard input and output.
///
/// # Errors
///
/// Returns an error if raw mode cannot be entered or terminal I/O fails.
/// The terminal is restored on every exit path, including errors.
pub fn select_targets(registry: &mut Registry) -> Result<MenuOutcome> {
    install_sigint_hook();
    let _guard = TerminalGuard::acquire()?;
    let mut out = io::stdout();
    let mut renderer = Renderer::default();
    let mut state = MenuState::new(registry);

    loop {
        let frame = render_frame(state.registry, state.cursor, true);
        renderer
            .redraw(&mut out, &frame)
            .context("drawing selection menu")?;

        let Event::Key(key) = event::read().context("reading terminal input")? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match state.apply_key(key.code, key.modifiers) {
            Step::Continue => {}
            Step::Confirm => return Ok(MenuOutcome::Confirmed),
            Step::Cancel => return Ok(MenuOutcome::Cancelled),
        }
    }
}
