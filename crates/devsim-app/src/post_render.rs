//! Work deferred until the current render pass completes
//!
//! Rendering takes `&AppState`-derived data and must not change simulator
//! state while a frame is being laid out. Anything a render pass discovers
//! (currently only a new zoom value) is queued here and turned into messages
//! once the frame has been drawn.

use crate::message::Message;

/// A state change discovered while rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostRenderTask {
    SetZoom(f64),
}

impl PostRenderTask {
    pub fn into_message(self) -> Message {
        match self {
            PostRenderTask::SetZoom(zoom) => Message::ZoomComputed { zoom },
        }
    }
}

/// FIFO of post-render tasks.
///
/// Zoom updates coalesce: a render pass only ever leaves one pending
/// `SetZoom`, so draining triggers at most one extra frame.
#[derive(Debug, Clone, Default)]
pub struct PostRenderQueue {
    tasks: Vec<PostRenderTask>,
}

impl PostRenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: PostRenderTask) {
        match task {
            PostRenderTask::SetZoom(_) => {
                if let Some(pending) = self
                    .tasks
                    .iter_mut()
                    .find(|t| matches!(t, PostRenderTask::SetZoom(_)))
                {
                    *pending = task;
                    return;
                }
            }
        }
        self.tasks.push(task);
    }

    /// Take every pending task as a message, in scheduling order.
    pub fn drain(&mut self) -> Vec<Message> {
        self.tasks
            .drain(..)
            .map(PostRenderTask::into_message)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
