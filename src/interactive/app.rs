//! TUI application state and logic
//!
//! Key presses are translated into `Command`s; `App::dispatch` is the only place the
//! round, the audio state and the notice queue change.

use crate::audio::{AudioFeedback, Effect};
use crate::core::{CategoryFilter, GuessOutcome, HINT_AFTER_MISSES, Round};
use crate::output::formatters::{hint_message, loss_message, win_message};
use crate::store::{WordSource, start_round};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

/// Virtual keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Longest text accepted in the guess entry
const MAX_ENTRY_LEN: usize = 16;

/// Upper bound on how long the loop waits for input before checking timers
const TICK_RATE: Duration = Duration::from_millis(250);

/// Player intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    /// Submit free text from the guess entry
    Guess(String),
    /// Press a virtual keyboard key
    PressKey(char),
    Hint,
    ToggleMusic,
    NextCategory,
    PrevCategory,
    /// Close the front notice
    Dismiss,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Entry,
    Keyboard,
}

/// Modal message that blocks input until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session tallies, kept in memory only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// Application state
pub struct App<'a> {
    pub store: &'a dyn WordSource,
    pub audio: AudioFeedback,
    pub filter: CategoryFilter,
    pub round: Round,
    pub focus: Focus,
    pub input_buffer: String,
    pub key_cursor: (usize, usize),
    pub notices: VecDeque<Notice>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(store: &'a dyn WordSource, audio: AudioFeedback, filter: CategoryFilter) -> Self {
        Self::with_rng(store, audio, filter, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_rng(
        store: &'a dyn WordSource,
        audio: AudioFeedback,
        filter: CategoryFilter,
        rng: StdRng,
    ) -> Self {
        let (round, notice) = start_round(store, filter);

        let mut app = Self {
            store,
            audio,
            filter,
            round,
            focus: Focus::Entry,
            input_buffer: String::new(),
            key_cursor: (0, 0),
            notices: VecDeque::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Welcome! Type a letter and press Enter, or TAB to use the keyboard.",
            MessageStyle::Info,
        );
        if let Some(text) = notice {
            app.push_notice("Database Error", text);
        }
        app
    }

    /// Start the ambient track for the initial round
    ///
    /// # Errors
    ///
    /// Returns an error if the ambient track cannot be played.
    pub fn begin(&mut self) -> Result<()> {
        self.audio.round_started()?;
        Ok(())
    }

    /// Apply one player intent
    ///
    /// While a notice is open only `Dismiss` and `Quit` are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if a sound asset cannot be played.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> Result<()> {
        if !self.notices.is_empty() && !matches!(command, Command::Dismiss | Command::Quit) {
            return Ok(());
        }

        match command {
            Command::Start | Command::Reset => {
                self.audio.click()?;
                self.new_round();
                self.audio.round_started()?;
            }
            Command::Guess(text) => {
                self.audio.click()?;
                self.input_buffer.clear();
                let outcome = self.round.guess(&text);
                self.after_guess(outcome, now)?;
            }
            Command::PressKey(letter) => {
                if !self.key_enabled(letter) {
                    return Ok(());
                }
                self.audio.click()?;
                self.input_buffer.clear();
                let outcome = self.round.guess_letter(letter);
                self.after_guess(outcome, now)?;
            }
            Command::Hint => {
                if !self.round.hint_available() {
                    return Ok(());
                }
                self.audio.click()?;
                if let Some(letter) = self.round.give_hint(&mut self.rng) {
                    log::debug!("Hint revealed '{letter}'");
                    self.push_notice("Hint", hint_message(letter));
                    if self.round.is_won() {
                        self.finish_round(GuessOutcome::Win, now)?;
                    }
                }
            }
            Command::ToggleMusic => {
                let enabled = self.audio.toggle_music()?;
                self.add_message(
                    if enabled { "Music on" } else { "Music off" },
                    MessageStyle::Info,
                );
            }
            Command::NextCategory => self.select_category(self.filter.next()),
            Command::PrevCategory => self.select_category(self.filter.prev()),
            Command::Dismiss => {
                self.notices.pop_front();
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }

        Ok(())
    }

    /// Takes effect when the next round starts
    fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.add_message(
            &format!("Category set to {filter} (F2 to start)"),
            MessageStyle::Info,
        );
    }

    fn after_guess(&mut self, outcome: GuessOutcome, now: Instant) -> Result<()> {
        if outcome.is_final() {
            return self.finish_round(outcome, now);
        }
        if outcome == GuessOutcome::Miss
            && self.round.hint_available()
            && self.round.misses() == HINT_AFTER_MISSES
        {
            self.add_message("Hint unlocked! Press F3.", MessageStyle::Success);
        }
        Ok(())
    }

    /// Announce the result and immediately replace the round
    fn finish_round(&mut self, outcome: GuessOutcome, now: Instant) -> Result<()> {
        self.stats.rounds_played += 1;

        if outcome == GuessOutcome::Win {
            self.stats.rounds_won += 1;
            log::info!("Round won: {}", self.round.word());
            self.audio.round_finished(Effect::Win, now)?;
            self.add_message(win_message(), MessageStyle::Success);
            self.push_notice("Hangman", win_message().to_string());
        } else {
            log::info!("Round lost: {}", self.round.word());
            self.audio.round_finished(Effect::Loss, now)?;
            let text = loss_message(self.round.word().text());
            self.add_message(&text, MessageStyle::Error);
            self.push_notice("Hangman", text);
        }

        self.new_round();
        Ok(())
    }

    fn new_round(&mut self) {
        let (round, notice) = start_round(self.store, self.filter);
        self.round = round;
        self.input_buffer.clear();
        if let Some(text) = notice {
            self.add_message(&text, MessageStyle::Error);
            self.push_notice("Database Error", text);
        }
        self.add_message(
            &format!("New round! Category: {}", self.round.category()),
            MessageStyle::Info,
        );
    }

    pub fn push_notice(&mut self, title: &str, text: String) {
        self.notices.push_back(Notice {
            title: title.to_string(),
            text,
        });
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Sound was requested but the audio device or assets could not be opened
    pub fn sound_unavailable(&mut self, reason: &str) {
        self.add_message(&format!("Sound unavailable: {reason}"), MessageStyle::Error);
    }

    /// A key stays disabled from the moment its letter is guessed until the next round
    #[must_use]
    pub fn key_enabled(&self, letter: char) -> bool {
        letter.is_ascii_lowercase() && !self.round.is_guessed(letter)
    }

    /// Letter under the virtual keyboard cursor
    #[must_use]
    pub fn selected_key(&self) -> char {
        let (row, col) = self.key_cursor;
        KEYBOARD_ROWS[row].chars().nth(col).unwrap_or('q')
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let rows = KEYBOARD_ROWS.len();
        let (row, col) = self.key_cursor;
        let row = (row + rows).wrapping_add_signed(d_row) % rows;
        let len = KEYBOARD_ROWS[row].len();
        let col = if d_col == 0 {
            col.min(len - 1)
        } else {
            (col + len).wrapping_add_signed(d_col) % len
        };
        self.key_cursor = (row, col);
    }

    /// Apply a key press
    ///
    /// # Errors
    ///
    /// Returns an error if a sound asset cannot be played.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if let Some(command) = self.command_for_key(key) {
            self.dispatch(command, now)?;
        }
        Ok(())
    }

    /// Map a key press to a command, updating entry and cursor state on the way
    pub fn command_for_key(&mut self, key: KeyEvent) -> Option<Command> {
        if let KeyCode::Char('c') = key.code
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(Command::Quit);
        }

        if !self.notices.is_empty() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Command::Dismiss),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::F(2) => Some(Command::Start),
            KeyCode::F(3) => Some(Command::Hint),
            KeyCode::F(4) => Some(Command::ToggleMusic),
            KeyCode::F(5) => Some(Command::Reset),
            KeyCode::PageUp | KeyCode::Char('[') => Some(Command::PrevCategory),
            KeyCode::PageDown | KeyCode::Char(']') => Some(Command::NextCategory),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Entry => Focus::Keyboard,
                    Focus::Keyboard => Focus::Entry,
                };
                None
            }
            _ => match self.focus {
                Focus::Entry => self.entry_key(key.code),
                Focus::Keyboard => self.keyboard_key(key.code),
            },
        }
    }

    fn entry_key(&mut self, code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_ENTRY_LEN {
                    self.input_buffer.push(c);
                }
                None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                None
            }
            KeyCode::Enter => Some(Command::Guess(std::mem::take(&mut self.input_buffer))),
            _ => None,
        }
    }

    fn keyboard_key(&mut self, code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return Some(Command::PressKey(self.selected_key()));
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                return Some(Command::PressKey(c.to_ascii_lowercase()));
            }
            _ => {}
        }
        None
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if a sound asset cannot be played.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.begin()?;

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wake up in time for a scheduled music resume
        let timeout = app.audio.next_deadline().map_or(TICK_RATE, |due| {
            due.saturating_duration_since(Instant::now()).min(TICK_RATE)
        });

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now())?;
        }

        app.audio.tick(Instant::now())?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::{Played, RecordingBackend};
    use crate::core::{Category, MAX_ATTEMPTS};
    use crate::store::testing::ScriptedSource;
    use crate::store::{StoreError, WordEntry};

    fn app_with<'a>(source: &'a ScriptedSource, backend: &RecordingBackend) -> App<'a> {
        let audio = AudioFeedback::new(Box::new(backend.clone()), true);
        App::with_rng(
            source,
            audio,
            CategoryFilter::All,
            StdRng::seed_from_u64(42),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_guess(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)), now).unwrap();
        }
        app.handle_key(key(KeyCode::Enter), now).unwrap();
    }

    #[test]
    fn sound_failure_reaches_message_log() {
        let source = ScriptedSource::words(&[("cat", "Animals")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);

        app.sound_unavailable("no output device");

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Sound unavailable: no output device");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn typed_guess_is_applied() {
        let source = ScriptedSource::words(&[("cat", "Animals")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        type_guess(&mut app, "C", now);

        assert_eq!(app.round.guessed(), &['c']);
        assert!(app.input_buffer.is_empty());
        assert_eq!(backend.take(), vec![Played::Effect(Effect::Click)]);
    }

    #[test]
    fn invalid_entry_is_silently_ignored() {
        let source = ScriptedSource::words(&[("cat", "Animals")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);

        type_guess(&mut app, "ab", Instant::now());
        type_guess(&mut app, "7", Instant::now());

        assert!(app.round.guessed().is_empty());
        assert_eq!(app.round.attempts_remaining(), MAX_ATTEMPTS);
        assert!(app.notices.is_empty());
    }

    #[test]
    fn guessed_key_is_disabled() {
        let source = ScriptedSource::words(&[("cat", "Animals")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        app.dispatch(Command::PressKey('z'), now).unwrap();
        assert!(!app.key_enabled('z'));
        backend.take();

        app.dispatch(Command::PressKey('z'), now).unwrap();
        assert!(backend.take().is_empty());
        assert_eq!(app.round.attempts_remaining(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn win_announces_and_starts_next_round() {
        let source = ScriptedSource::words(&[("cat", "Animals"), ("java", "Programming")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        for letter in ['c', 'a', 't'] {
            app.dispatch(Command::PressKey(letter), now).unwrap();
        }

        assert_eq!(app.notices.front().unwrap().text, "Congrats! You won!");
        assert_eq!(app.round.word().text(), "java");
        assert!(app.round.guessed().is_empty());
        assert!(app.key_enabled('c'));
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.audio.next_deadline(), Some(now + crate::audio::RESUME_DELAY));

        let played = backend.take();
        assert_eq!(
            &played[played.len() - 2..],
            &[Played::AmbientStop, Played::Effect(Effect::Win)]
        );
    }

    #[test]
    fn loss_reveals_word() {
        let source = ScriptedSource::words(&[("dog", "Animals"), ("cat", "Animals")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        for letter in ['q', 'w', 'e', 'r', 't', 'y'] {
            app.dispatch(Command::PressKey(letter), now).unwrap();
        }

        assert_eq!(
            app.notices.front().unwrap().text,
            "You lose! The word was: dog"
        );
        assert_eq!(app.round.word().text(), "cat");
        assert_eq!(app.round.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_won, 0);
        assert!(backend.take().contains(&Played::Effect(Effect::Loss)));
    }

    #[test]
    fn notice_blocks_input_until_dismissed() {
        let source = ScriptedSource::words(&[("cat", "Animals"), ("dog", "Animals")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        for letter in ['c', 'a', 't'] {
            app.dispatch(Command::PressKey(letter), now).unwrap();
        }
        assert_eq!(app.notices.len(), 1);

        app.handle_key(key(KeyCode::Char('d')), now).unwrap();
        app.dispatch(Command::PressKey('d'), now).unwrap();
        assert!(app.input_buffer.is_empty());
        assert!(app.round.guessed().is_empty());

        app.handle_key(key(KeyCode::Enter), now).unwrap();
        assert!(app.notices.is_empty());

        type_guess(&mut app, "d", now);
        assert_eq!(app.round.guessed(), &['d']);
    }

    #[test]
    fn hint_locked_until_third_miss() {
        let source = ScriptedSource::words(&[("python", "Programming")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        app.dispatch(Command::PressKey('a'), now).unwrap();
        app.dispatch(Command::PressKey('b'), now).unwrap();
        backend.take();

        app.dispatch(Command::Hint, now).unwrap();
        assert!(backend.take().is_empty());
        assert_eq!(app.round.guessed().len(), 2);

        app.dispatch(Command::PressKey('c'), now).unwrap();
        assert!(app.round.hint_available());

        app.dispatch(Command::Hint, now).unwrap();
        assert_eq!(app.round.guessed().len(), 4);
        assert!(!app.round.hint_available());
        assert_eq!(app.notices.front().unwrap().title, "Hint");
        assert_eq!(app.round.attempts_remaining(), MAX_ATTEMPTS - 3);

        // Used once per round
        app.dispatch(Command::Dismiss, now).unwrap();
        app.dispatch(Command::Hint, now).unwrap();
        assert_eq!(app.round.guessed().len(), 4);
    }

    #[test]
    fn reset_starts_fresh_round_and_restarts_music() {
        let source = ScriptedSource::words(&[("python", "Programming"), ("turkey", "Countries")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        for letter in ['a', 'b', 'c'] {
            app.dispatch(Command::PressKey(letter), now).unwrap();
        }
        backend.take();

        app.handle_key(key(KeyCode::F(5)), now).unwrap();

        assert_eq!(app.round.word().text(), "turkey");
        assert_eq!(app.round.attempts_remaining(), MAX_ATTEMPTS);
        assert!(!app.round.hint_available());
        assert!(app.key_enabled('a'));
        assert_eq!(
            backend.take(),
            vec![Played::Effect(Effect::Click), Played::AmbientStart]
        );
    }

    #[test]
    fn category_selection_applies_to_next_round() {
        let source = ScriptedSource::words(&[("cat", "Animals"), ("python", "Programming")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        app.handle_key(key(KeyCode::Char(']')), now).unwrap();
        assert_eq!(app.filter, CategoryFilter::Only(Category::Programming));
        assert!(app.input_buffer.is_empty());

        app.dispatch(Command::Start, now).unwrap();
        assert_eq!(
            source.filters.borrow().as_slice(),
            &[
                CategoryFilter::All,
                CategoryFilter::Only(Category::Programming)
            ]
        );
        assert_eq!(app.round.category(), "Programming");
    }

    #[test]
    fn storage_failure_shows_notice_and_plays_fallback() {
        let source = ScriptedSource::new(vec![Err(StoreError::Database(
            rusqlite::Error::InvalidQuery,
        ))]);
        let backend = RecordingBackend::default();
        let app = app_with(&source, &backend);

        assert_eq!(app.notices.front().unwrap().title, "Database Error");
        assert_eq!(app.round.word().text(), "error");
        assert_eq!(app.round.category(), "General");
    }

    #[test]
    fn virtual_keyboard_navigation() {
        let source = ScriptedSource::new(vec![Ok(Some(WordEntry::new("dog", "Animals")))]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        app.handle_key(key(KeyCode::Tab), now).unwrap();
        assert_eq!(app.focus, Focus::Keyboard);

        app.handle_key(key(KeyCode::Right), now).unwrap();
        app.handle_key(key(KeyCode::Down), now).unwrap();
        assert_eq!(app.selected_key(), 's');

        app.handle_key(key(KeyCode::Enter), now).unwrap();
        assert_eq!(app.round.guessed(), &['s']);

        // Cursor column is clamped on the shorter bottom row
        app.key_cursor = (1, 8);
        app.handle_key(key(KeyCode::Down), now).unwrap();
        assert_eq!(app.selected_key(), 'm');

        app.handle_key(key(KeyCode::Left), now).unwrap();
        assert_eq!(app.selected_key(), 'n');
        app.key_cursor = (0, 0);
        app.handle_key(key(KeyCode::Left), now).unwrap();
        assert_eq!(app.selected_key(), 'p');
    }

    #[test]
    fn toggle_music_and_quit() {
        let source = ScriptedSource::words(&[("cat", "Animals")]);
        let backend = RecordingBackend::default();
        let mut app = app_with(&source, &backend);
        let now = Instant::now();

        app.handle_key(key(KeyCode::F(4)), now).unwrap();
        assert!(!app.audio.music_enabled());
        assert_eq!(backend.take(), vec![Played::AmbientStop]);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now)
            .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn missing_sound_asset_is_an_error() {
        let source = ScriptedSource::words(&[("cat", "Animals")]);
        let backend = RecordingBackend {
            fail_effects: true,
            ..RecordingBackend::default()
        };
        let mut app = app_with(&source, &backend);

        assert!(app.dispatch(Command::Guess("c".into()), Instant::now()).is_err());
    }
}
