//! Screen geometry shared by rendering and mouse hit-testing

use super::helpers::rect_contains;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the control pane on the right
pub const CONTROL_PANE_WIDTH: u16 = 34;

const BUTTON_HEIGHT: u16 = 3;

/// Where each part of the main screen lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellLayout {
    pub header: Rect,
    pub image: Rect,
    pub controls: Rect,
    /// Space reserved for the bucket buttons
    pub bucket_area: Rect,
    /// One rect per bucket, in config order. Buttons that don't fit are empty.
    pub buttons: Vec<Rect>,
    pub caps: Rect,
    pub open_button: Rect,
    pub footer: Rect,
}

/// A clickable element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Bucket(usize),
    OpenFolder,
}

impl ShellLayout {
    pub fn compute(area: Rect, bucket_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Image and controls
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(CONTROL_PANE_WIDTH)])
            .split(rows[1]);

        let controls = body[1];
        let inner = Rect {
            x: controls.x.saturating_add(1),
            y: controls.y.saturating_add(1),
            width: controls.width.saturating_sub(2),
            height: controls.height.saturating_sub(2),
        };

        let pane = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                // Bucket buttons
                Constraint::Length(1),             // Caps-lock label
                Constraint::Length(BUTTON_HEIGHT), // Open Folder
            ])
            .split(inner);

        ShellLayout {
            header: rows[0],
            image: body[0],
            controls,
            bucket_area: pane[0],
            buttons: stack_buttons(pane[0], bucket_count),
            caps: pane[1],
            open_button: pane[2],
            footer: rows[2],
        }
    }

    /// The clickable element under the cell at (`col`, `row`)
    pub fn hit_test(&self, col: u16, row: u16) -> Option<Hit> {
        if let Some(index) = self
            .buttons
            .iter()
            .position(|rect| rect_contains(*rect, col, row))
        {
            return Some(Hit::Bucket(index));
        }
        rect_contains(self.open_button, col, row).then_some(Hit::OpenFolder)
    }
}

/// Stacks buttons top to bottom, dropping to one row each when boxed
/// buttons would not all fit.
fn stack_buttons(area: Rect, count: usize) -> Vec<Rect> {
    let boxed_fit = (area.height / BUTTON_HEIGHT) as usize >= count;
    let height = if boxed_fit { BUTTON_HEIGHT } else { 1 };

    (0..count)
        .map(|i| {
            let offset = i as u32 * height as u32;
            if offset + height as u32 > area.height as u32 {
                return Rect::default();
            }
            Rect {
                x: area.x,
                y: area.y + offset as u16,
                width: area.width,
                height,
            }
        })
        .collect()
}
