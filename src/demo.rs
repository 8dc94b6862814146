//! Showcase host app
//!
//! A small mailbox screen that lays itself out from the [`RenderContext`]:
//! platform-specific title alignment, safe-area padding, and a search field
//! that appears above the on-screen keyboard.

use devsim_app::InputKey;
use devsim_core::RenderContext;
use devsim_tui::{safe_area_rect, unobscured_rect, HostApp};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const FOLDERS: [&str; 7] = [
    "Inbox", "Starred", "Sent", "Drafts", "Archive", "Spam", "Trash",
];

const APP_BG: Color = Color::Rgb(250, 250, 252);
const APP_FG: Color = Color::Rgb(30, 30, 36);
const APP_BAR_BG: Color = Color::Rgb(0, 122, 255);
const ANDROID_BAR_BG: Color = Color::Rgb(98, 0, 238);
const SELECTED_BG: Color = Color::Rgb(220, 230, 250);

#[derive(Debug, Default)]
pub struct DemoApp {
    selected: usize,
    query: String,
}

impl DemoApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_folder(&self) -> &'static str {
        FOLDERS[self.selected]
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    fn render_app_bar(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        // Apple platforms centre the title; everything else leads with it
        let (alignment, bg) = if ctx.platform.is_apple() {
            (Alignment::Center, APP_BAR_BG)
        } else {
            (Alignment::Left, ANDROID_BAR_BG)
        };
        let title = if ctx.platform.is_apple() {
            "Mail".to_string()
        } else {
            " ≡ Mail".to_string()
        };
        frame.render_widget(
            Paragraph::new(title)
                .alignment(alignment)
                .style(
                    Style::default()
                        .bg(bg)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            area,
        );
    }

    fn status_line(ctx: &RenderContext) -> Line<'static> {
        let device = ctx.device.clone().unwrap_or_else(|| "No device".to_string());
        Line::from(vec![
            Span::styled(device, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                " · {} · {} · {:.0}x{:.0}",
                ctx.platform,
                ctx.orientation.label(),
                ctx.size.width,
                ctx.size.height
            )),
        ])
    }
}

impl HostApp for DemoApp {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        frame.render_widget(
            Block::default().style(Style::default().bg(APP_BG).fg(APP_FG)),
            area,
        );

        let safe = safe_area_rect(area, ctx);
        let usable = unobscured_rect(area, ctx);
        if usable.height == 0 || usable.width == 0 {
            return;
        }

        let bar = Rect::new(safe.x, safe.y, safe.width, 1);
        self.render_app_bar(frame, bar, ctx);

        let mut body = Rect::new(
            usable.x,
            bar.bottom(),
            usable.width,
            usable.bottom().saturating_sub(bar.bottom()),
        );
        if body.height == 0 {
            return;
        }

        frame.render_widget(
            Paragraph::new(Self::status_line(ctx)),
            Rect::new(body.x, body.y, body.width, 1),
        );
        body.y += 1;
        body.height -= 1;

        // search field sits just above the keyboard
        if ctx.keyboard_visible() && body.height > 0 {
            let field = Rect::new(body.x, body.bottom() - 1, body.width, 1);
            frame.render_widget(
                Paragraph::new(format!("Search: {}_", self.query))
                    .style(Style::default().bg(SELECTED_BG)),
                field,
            );
            body.height -= 1;
        }

        let items: Vec<ListItem> = FOLDERS.iter().map(|f| ListItem::new(*f)).collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(SELECTED_BG).add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");
        let mut list_state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, body, &mut list_state);
    }

    fn handle_key(&mut self, key: InputKey, ctx: &RenderContext) -> bool {
        match key {
            InputKey::Up => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            InputKey::Down => {
                self.selected = (self.selected + 1).min(FOLDERS.len() - 1);
                true
            }
            InputKey::Char(c) if ctx.keyboard_visible() => {
                self.query.push(c);
                true
            }
            InputKey::Backspace if ctx.keyboard_visible() => self.query.pop().is_some(),
            _ => false,
        }
    }
}
