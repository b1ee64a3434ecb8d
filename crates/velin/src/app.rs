use std::cmp;
use std::path::PathBuf;

use anyhow::Result;

use crate::buffer::TextBuffer;
use crate::command::{self, Command};
use crate::file_manager::{FileManager, LoadOutcome};
use crate::input::InputEvent;
use crate::status::StatusLine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Edit,
    Command,
}

/// Where the terminal cursor goes after a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorFocus {
    /// A cell in the text area, viewport-relative.
    Text { row: usize, col: usize },
    /// The command line, at the given column.
    CommandLine { col: usize },
}

/// Everything the renderer needs for one frame. The controller computes
/// this; drawing happens elsewhere.
pub struct RenderPlan<'a> {
    pub lines: &'a [String],
    pub first_row: usize,
    pub status_text: String,
    pub status_is_error: bool,
    pub command_line: Option<&'a str>,
    pub suggestion: Option<&'static str>,
    pub cursor: CursorFocus,
}

/// The editor controller: owns the buffer, the mode state machine, the
/// command input, the status line and the viewport offset. One input event
/// is fully processed before the next is accepted; the outer loop checks
/// `should_quit` instead of the core exiting the process.
pub struct App {
    buffer: TextBuffer,
    file_manager: FileManager,
    status: StatusLine,
    mode: Mode,
    command_input: String,
    viewport_offset: usize,
    viewport_height: usize,
    gutter_width: u16,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            file_manager: FileManager::new(),
            status: StatusLine::new(),
            mode: Mode::Edit,
            command_input: String::new(),
            viewport_offset: 0,
            viewport_height: 24, // Default, updated on every render
            gutter_width: 0,
            should_quit: false,
        }
    }

    /// Tells the controller how many screen columns the renderer spends on
    /// the line-number gutter, so clicks map to the glyph under them.
    pub fn set_gutter_width(&mut self, width: u16) {
        self.gutter_width = width;
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn command_input(&self) -> &str {
        &self.command_input
    }

    pub fn file_path(&self) -> Option<&std::path::Path> {
        self.file_manager.current_path()
    }

    pub fn viewport_offset(&self) -> usize {
        self.viewport_offset
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Loads `path` into the buffer. A missing file starts an empty buffer
    /// with the filename pending.
    pub fn load_file(&mut self, path: PathBuf) -> Result<()> {
        let display = path.display().to_string();
        match self.file_manager.load_file(path)? {
            LoadOutcome::Loaded(content) => {
                self.buffer.set_from_text(&content);
                self.status.set_info(format!("Loaded {}", display));
            }
            LoadOutcome::NewFile => {
                self.buffer.clear();
                self.status.set_info(format!("New file: {}", display));
            }
        }
        Ok(())
    }

    /// Surfaces a failure from an outer collaborator (startup load) on the
    /// status line.
    pub fn set_error_message(&mut self, message: impl Into<String>) {
        self.status.set_error(message);
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match self.mode {
            Mode::Edit => self.handle_edit_event(event),
            Mode::Command => self.handle_command_event(event),
        }
    }

    fn handle_edit_event(&mut self, event: InputEvent) {
        // Informational notices last exactly one keystroke; errors persist.
        self.status.clear_transient();

        match event {
            InputEvent::ToggleMode => self.enter_command_mode(),
            InputEvent::Backspace => self.buffer.delete_before_cursor(),
            InputEvent::Enter => self.buffer.split_line(),
            InputEvent::Left => self.buffer.move_horizontal(-1),
            InputEvent::Right => self.buffer.move_horizontal(1),
            InputEvent::Up => self.buffer.move_vertical(-1),
            InputEvent::Down => self.buffer.move_vertical(1),
            InputEvent::Click { x, y } => self.handle_click(x, y),
            InputEvent::Char(c) if !c.is_control() => self.buffer.insert_char(c),
            _ => {}
        }
    }

    fn handle_command_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ToggleMode => self.cancel_command_mode(),
            InputEvent::Backspace => {
                self.command_input.pop();
            }
            InputEvent::Enter => self.execute_command(),
            InputEvent::Tab => {
                if let Some(suggestion) = command::suggest(&self.command_input) {
                    self.command_input = suggestion.to_string();
                }
            }
            InputEvent::Char(c) if !c.is_control() => self.command_input.push(c),
            _ => {}
        }
    }

    fn enter_command_mode(&mut self) {
        self.mode = Mode::Command;
        self.command_input.clear();
        self.status.clear_transient();
    }

    fn cancel_command_mode(&mut self) {
        self.mode = Mode::Edit;
        self.command_input.clear();
        self.status.set_info("Command mode cancelled");
    }

    /// Maps a screen click to a buffer position through the viewport
    /// offset, discounting the gutter so the cursor lands on the glyph
    /// under the pointer. Clicks below the text area are ignored; clicks
    /// inside the gutter snap to column 0.
    fn handle_click(&mut self, x: u16, y: u16) {
        if (y as usize) < self.viewport_height {
            let col = x.saturating_sub(self.gutter_width) as usize;
            self.buffer
                .set_cursor(self.viewport_offset + y as usize, col);
        }
    }

    /// Runs the typed command. Failures keep the typed input around so the
    /// user can edit and resubmit; only a command that goes through clears
    /// it.
    fn execute_command(&mut self) {
        // A new attempt supersedes whatever error is still showing.
        self.status.clear();

        let raw = self.command_input.clone();
        let Some((token, args)) = command::tokenize(&raw) else {
            // A bare Enter resolves to nothing; report it like any other
            // unrecognized input.
            self.status.set_error(format!("Unknown command: {}", raw.trim()));
            return;
        };

        let Some(cmd) = command::resolve(&token) else {
            self.status.set_error(format!("Unknown command: {}", token));
            return;
        };

        match cmd {
            Command::Write => {
                if self.write_file() {
                    self.command_input.clear();
                    self.mode = Mode::Edit;
                }
            }
            Command::Quit => {
                self.command_input.clear();
                self.should_quit = true;
            }
            Command::WriteQuit => {
                if self.write_file() {
                    self.command_input.clear();
                    self.should_quit = true;
                }
            }
            Command::Clear => {
                self.command_input.clear();
                self.buffer.clear();
                self.status.set_info("Buffer cleared");
                self.mode = Mode::Edit;
            }
            Command::Name => {
                self.command_input.clear();
                match args.first() {
                    Some(arg) => {
                        self.file_manager.set_current_path(PathBuf::from(arg));
                        self.status.set_info(format!("Filename set to {}", arg));
                    }
                    None => {
                        let current = self
                            .file_manager
                            .current_path()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| "[No Name]".to_string());
                        self.status.set_info(format!("Filename: {}", current));
                    }
                }
            }
        }
    }

    /// Saves the buffer to the current file. Reports the result through
    /// the status line and returns whether the save succeeded.
    fn write_file(&mut self) -> bool {
        if !self.file_manager.has_file() {
            self.status.set_error("No filename specified");
            return false;
        }

        match self.file_manager.save(&self.buffer.to_text()) {
            Ok(()) => {
                let name = self
                    .file_manager
                    .current_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.status.set_info(format!("Saved {}", name));
                true
            }
            Err(e) => {
                self.status.set_error(format!("Error saving file: {}", e));
                false
            }
        }
    }

    /// Scrolls the viewport just enough to keep the cursor visible. The
    /// offset only moves when the cursor has left the window.
    fn adjust_viewport(&mut self, height: usize) {
        self.viewport_height = cmp::max(height, 1);
        let (cursor_row, _) = self.buffer.cursor();

        if cursor_row < self.viewport_offset {
            self.viewport_offset = cursor_row;
        } else if cursor_row >= self.viewport_offset + self.viewport_height {
            self.viewport_offset = cursor_row + 1 - self.viewport_height;
        }
    }

    /// Recomputes the viewport for a text area `height` rows tall and
    /// describes the frame for the renderer.
    pub fn render_plan(&mut self, height: usize) -> RenderPlan<'_> {
        self.adjust_viewport(height);

        let lines = self.buffer.lines();
        let end = cmp::min(self.viewport_offset + self.viewport_height, lines.len());
        let (cursor_row, cursor_col) = self.buffer.cursor();

        let filename = self
            .file_manager
            .current_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string());
        let status_text = format!(" {} - {}", filename, self.status.message());

        let in_command_mode = self.mode == Mode::Command;
        let suggestion = if in_command_mode {
            command::suggest(&self.command_input)
        } else {
            None
        };

        let cursor = if in_command_mode {
            CursorFocus::CommandLine {
                col: self.command_input.chars().count(),
            }
        } else {
            CursorFocus::Text {
                row: cursor_row - self.viewport_offset,
                col: cursor_col,
            }
        };

        RenderPlan {
            lines: &lines[self.viewport_offset..end],
            first_row: self.viewport_offset,
            status_text,
            status_is_error: self.status.is_error(),
            command_line: in_command_mode.then_some(self.command_input.as_str()),
            suggestion,
            cursor,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
