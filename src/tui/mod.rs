// TUI module for rendering the terminal interface
pub mod colors;
pub mod helpers;
pub mod input;
pub mod layout;

// Re-exports
pub use colors::*;
pub use helpers::{centered_rect, format_file_size};
pub use input::{
    handle_key_event, handle_prompt_input, is_modifier_only, KeyAction, PromptAction,
};
pub use layout::{Hit, ShellLayout};

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::path::Path;

/// UI view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Main sorting view
    Browsing,
    /// Folder prompt visible
    OpenFolder(FolderPrompt),
    /// Help overlay visible
    Help,
}

/// Text typed into the folder prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPrompt {
    pub input: String,
}

/// A modal message that must be dismissed before anything else happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

/// Renders the whole screen, overlays included
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = ShellLayout::compute(frame.area(), app.session().buckets().len());

    render_header(frame, layout.header, app);
    render_image_pane(frame, layout.image, app);
    render_controls(frame, &layout, app);
    render_footer(frame, layout.footer, app);

    match app.view() {
        ViewState::Browsing => {}
        ViewState::Help => render_help_overlay(frame),
        ViewState::OpenFolder(prompt) => render_folder_prompt(frame, prompt),
    }

    if let Some(dialog) = app.dialog() {
        render_dialog(frame, dialog);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Header with the image position and details
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();

    let (title_text, info) = match session.current_image() {
        Some(path) => {
            let mut details = Vec::new();
            if let Some(size) = app.current_size() {
                details.push(format_file_size(size));
            }
            if let Some(displayed) = app.viewer().displayed() {
                let (width, height) = displayed.original;
                details.push(format!("{}x{}", width, height));
            }
            let mut spans = vec![Span::styled(
                path.parent()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                Style::default().fg(TEXT_SECONDARY),
            )];
            if !details.is_empty() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("({})", details.join(" • ")),
                    Style::default().fg(TEXT_SECONDARY),
                ));
            }
            (
                format!(
                    " Image {}/{}: {} ",
                    session.cursor() + 1,
                    session.images().len(),
                    file_name(path)
                ),
                spans,
            )
        }
        None => (
            " imgsort ".to_string(),
            vec![Span::styled(
                match session.folder() {
                    Some(folder) => folder.display().to_string(),
                    None => "No folder open".to_string(),
                },
                Style::default().fg(TEXT_SECONDARY),
            )],
        ),
    };

    let title_line = Line::from(Span::styled(
        title_text,
        Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(vec![title_line, Line::from(info)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(header, area);
}

fn render_image_pane(frame: &mut Frame, area: Rect, app: &mut App) {
    let current = app.session().current_image().map(Path::to_path_buf);
    let Some(current) = current else {
        frame.render_widget(empty_state_widget(app), area);
        return;
    };

    // A decode failure keeps the previous image on screen
    let stale = app
        .viewer()
        .displayed()
        .map(|displayed| displayed.path != current)
        .unwrap_or(true);

    let (title, border) = if stale {
        (format!(" {} [!] ", file_name(&current)), ACCENT_PRIMARY)
    } else {
        (format!(" {} ", file_name(&current)), BORDER_COLOR)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = app.image_lines(inner.width, inner.height).to_vec();
    if lines.is_empty() {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "[!] Could not display this image",
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    // Center vertically
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let target = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

/// Placeholder shown when there is no image to display
fn empty_state_widget(app: &App) -> Paragraph<'static> {
    let session = app.session();
    let (headline, hint) = if session.folder().is_none() {
        ("No folder open", "Press Ctrl+O to choose a folder.")
    } else if session.total_moved() > 0 {
        ("All images sorted", "Open another folder with Ctrl+O.")
    } else {
        ("No images found", "Only .jpg, .JPG, .jpeg, .png and .bmp files are listed.")
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(TEXT_SECONDARY))),
    ];

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR))
                .title(" Image "),
        )
        .alignment(Alignment::Center)
}

/// Bucket buttons, caps-lock label and the Open Folder button
fn render_controls(frame: &mut Frame, layout: &ShellLayout, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(" Buckets ");
    frame.render_widget(block, layout.controls);

    let session = app.session();
    let buckets = session.buckets();

    if buckets.is_empty() {
        let text = if session.folder().is_some() {
            "No buckets configured"
        } else {
            ""
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(TEXT_SECONDARY)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            layout.bucket_area,
        );
    }

    for (index, (bucket, rect)) in buckets.iter().zip(&layout.buttons).enumerate() {
        if rect.is_empty() {
            continue;
        }

        let shadowed = app
            .router()
            .conflicts()
            .iter()
            .any(|conflict| conflict.shadowed == index);
        let key_style = if shadowed {
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD)
        };

        let key = match bucket.hotkey {
            Some(key) => Span::styled(format!("[{}] ", key), key_style),
            None => Span::raw("    "),
        };
        let label = Line::from(vec![
            key,
            Span::styled(bucket.label.clone(), Style::default().fg(TEXT_PRIMARY)),
            Span::styled(
                format!(" ({})", session.moved_count(index)),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]);

        render_button(frame, *rect, label, app.focus() == index);
    }

    let caps_style = match app.status().caps_lock() {
        Some(true) => Style::default()
            .fg(ACCENT_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(TEXT_SECONDARY),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(app.status().label(), caps_style)).alignment(Alignment::Center),
        layout.caps,
    );

    let open = Line::from(vec![
        Span::styled("Open Folder", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" (Ctrl+O)", Style::default().fg(TEXT_SECONDARY)),
    ]);
    render_button(frame, layout.open_button, open, app.focus() == buckets.len());
}

fn render_button(frame: &mut Frame, area: Rect, label: Line<'static>, focused: bool) {
    if area.height >= 3 {
        let border = if focused { ACCENT_HIGHLIGHT } else { BORDER_COLOR };
        let button = Paragraph::new(label).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(button, area);
    } else {
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(label).style(style), area);
    }
}

/// Footer with the status line and key hints
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    if let Some(message) = app.message() {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(TEXT_PRIMARY),
        ));
        spans.push(Span::raw("  │  "));
    }
    spans.extend([
        Span::styled(
            "Ctrl+O ",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Open", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("F1 ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Help", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("Esc ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Quit", Style::default().fg(TEXT_SECONDARY)),
    ]);

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR)),
    );

    frame.render_widget(footer, area);
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let help_area = centered_rect(60, 70, area);

    // Clear background
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let entry = |keys: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:>12}  ", keys), Style::default().fg(ACCENT_SECONDARY)),
            Span::raw(format!("{:<24}", text)),
        ])
    };

    let help_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        entry("[key]", "Move to the bucket"),
        entry("click", "Move to the bucket"),
        Line::from(""),
        entry("↑↓ Tab", "Move button focus"),
        entry("Enter", "Press focused button"),
        entry("Ctrl+O", "Open folder"),
        Line::from(""),
        entry("F1", "Toggle help"),
        entry("Esc Ctrl+Q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Hotkeys are case-sensitive; mind Caps Lock.",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(help_lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Renders the folder prompt
pub fn render_folder_prompt(frame: &mut Frame, prompt: &FolderPrompt) {
    let area = centered_rect(70, 30, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Open Folder ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1), // Input line
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let input = Line::from(vec![
        Span::styled(" Folder: ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled(prompt.input.clone(), Style::default().fg(TEXT_PRIMARY)),
        Span::styled("▏", Style::default().fg(ACCENT_HIGHLIGHT)),
    ]);
    frame.render_widget(Paragraph::new(input), chunks[1]);

    let hints = Line::from(vec![
        Span::styled("Enter ", Style::default().fg(ACCENT_SECONDARY)),
        Span::styled("Open", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("Ctrl+U ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Clear", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("Esc ", Style::default().fg(ACCENT_PRIMARY)),
        Span::styled("Cancel", Style::default().fg(TEXT_SECONDARY)),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        chunks[3],
    );
}

/// Renders a modal error dialog
pub fn render_dialog(frame: &mut Frame, dialog: &Dialog) {
    let area = centered_rect(60, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_PRIMARY))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            dialog.message.clone(),
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, inner);
}
