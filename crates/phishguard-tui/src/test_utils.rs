//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widget and full-screen tests can assert on
//! rendered text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function, for full-screen tests
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.content().starts_with("Hello World"));
    }
}
