//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widgets and the full view can be rendered
//! into an in-memory buffer and inspected as text.

use chrono::{TimeZone, Utc};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use workdeck_app::AppState;
use workdeck_core::{GitHubCommit, GitHubLinkInfo};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        let buffer = self.buffer();
        if line >= buffer.area.height {
            return false;
        }
        let row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, line)].symbol())
            .collect();
        row.contains(text)
    }

    /// All rows joined with newlines
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

pub fn test_link() -> GitHubLinkInfo {
    GitHubLinkInfo::new(
        "https://github.com/octocat.png",
        "octocat/hello-world",
        GitHubCommit {
            sha: "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d".to_string(),
            author: "The Octocat".to_string(),
            message: "Merge pull request #6\n\nEdited README".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        },
    )
    .unwrap()
}

/// AppState with a fixed project name
pub fn create_test_state() -> AppState {
    let mut state = AppState::new();
    state.project_name = Some("demo-app".to_string());
    state
}
