//! The simulator container: owns simulator state and the wrapped UI.

use devsim_app::{update, AppState, InputKey, Message, SimulatorOptions, UpdateAction};
use devsim_core::prelude::*;
use devsim_core::RenderContext;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use crate::event::TerminalEvent;
use crate::render::{self, Rendered};
use crate::widgets::toolbar;

/// The UI being previewed inside the simulator.
///
/// Implementations should lay themselves out from the [`RenderContext`]
/// (logical size, orientation, safe-area padding, keyboard insets and
/// platform) rather than from the terminal size. Any
/// `FnMut(&mut Frame, Rect, &RenderContext)` closure is a `HostApp` that
/// ignores key presses.
pub trait HostApp {
    /// Draw into `area`, the simulated screen (or the whole viewport when
    /// the simulator is off).
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext);

    /// Handle a key the simulator did not claim. Returns true if consumed.
    fn handle_key(&mut self, _key: InputKey, _ctx: &RenderContext) -> bool {
        false
    }
}

impl<F> HostApp for F
where
    F: FnMut(&mut Frame, Rect, &RenderContext),
{
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        self(frame, area, ctx)
    }
}

/// Wraps a [`HostApp`] in the device simulator.
pub struct DeviceSimulator<H> {
    state: AppState,
    host: H,
    /// Where things landed on the last frame; used for click hit-testing
    /// and as the context for forwarded keys
    last_frame: Option<Rendered>,
}

impl<H: HostApp> DeviceSimulator<H> {
    /// Create a simulator, resolving the enable gate for the current host.
    pub fn new(options: SimulatorOptions, host: H) -> Result<Self> {
        Ok(Self::with_state(AppState::new(options)?, host))
    }

    pub fn with_state(state: AppState, host: H) -> Self {
        Self {
            state,
            host,
            last_frame: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Context the wrapped UI saw on the last frame
    pub fn last_context(&self) -> Option<&RenderContext> {
        self.last_frame.as_ref().map(|f| &f.context)
    }

    /// Screen rect of the last frame
    pub fn last_screen(&self) -> Option<Rect> {
        self.last_frame.as_ref().map(|f| f.screen)
    }

    /// Render a single frame without flushing post-render work.
    pub fn render(&mut self, frame: &mut Frame) {
        let rendered = render::view(frame, &mut self.state, &mut self.host);
        self.last_frame = Some(rendered);
    }

    /// Draw a frame, apply anything the frame discovered, and redraw once if
    /// that changed state.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.draw_once(terminal)?;
        if self.flush_post_render() {
            self.draw_once(terminal)?;
        }
        Ok(())
    }

    fn draw_once<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal
            .draw(|frame| self.render(frame))
            .map_err(|e| Error::terminal(e.to_string()))?;
        Ok(())
    }

    /// Apply queued post-render tasks. Returns true if any ran.
    pub fn flush_post_render(&mut self) -> bool {
        let messages = self.state.post_render.drain();
        let ran = !messages.is_empty();
        for message in messages {
            self.dispatch(message);
        }
        ran
    }

    /// Translate a terminal event into simulator messages.
    pub fn handle_event(&mut self, event: TerminalEvent) {
        match event {
            TerminalEvent::Key(key) => self.dispatch(Message::Key(key)),
            TerminalEvent::Click { column, row } => {
                let toolbar_area = self.last_frame.as_ref().and_then(|f| f.toolbar);
                if let Some(area) = toolbar_area {
                    if let Some(button) = toolbar::button_at(area, &self.state, column, row) {
                        debug!("Toolbar click: {:?}", button);
                        self.dispatch(button.message());
                    }
                }
            }
            TerminalEvent::Tick => self.dispatch(Message::Tick),
        }
    }

    /// Process a message and every follow-up it produces.
    pub fn dispatch(&mut self, message: Message) {
        let mut next = Some(message);
        while let Some(msg) = next.take() {
            let result = update(&mut self.state, msg);
            if let Some(action) = result.action {
                self.handle_action(action);
            }
            next = result.message;
        }
    }

    fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::ForwardKey(key) => {
                let ctx = match self.last_frame.as_ref() {
                    Some(frame) => frame.context.clone(),
                    None => self.state.render_context(devsim_core::Size::ZERO),
                };
                if !self.host.handle_key(key, &ctx) {
                    trace!("Key {:?} not handled by host", key);
                }
            }
        }
    }
}
