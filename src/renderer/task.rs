//! Renderer event loop.
//!
//! [`RendererHandle::spawn`] moves a [`Renderer`] onto its own tokio task. The
//! task is the renderer's single execution context: controller messages and
//! document events are handled one at a time, so renderer state needs no
//! locking.
//!
//! # Event Loop
//!
//! The task selects over:
//!
//! - Incoming controller messages (replies sent back on the request's channel)
//! - Document events pushed by the page binding
//!
//! It ends when either source closes.

// ============================================================================
// Imports
// ============================================================================

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::transport::{ControllerPort, Inbox, RendererPort, channel};

use super::core::{ClickOutcome, Renderer};
use super::options::MenuOptions;
use super::page::{Page, PageEvent};

// ============================================================================
// Types
// ============================================================================

/// A document event, optionally with a channel to report its outcome on.
struct QueuedEvent {
    event: PageEvent,
    done_tx: Option<oneshot::Sender<Option<ClickOutcome>>>,
}

// ============================================================================
// RendererHandle
// ============================================================================

/// Handle to a renderer running on its own task.
#[derive(Debug)]
pub struct RendererHandle {
    port: RendererPort,
    events_tx: mpsc::UnboundedSender<QueuedEvent>,
    task: JoinHandle<()>,
}

impl RendererHandle {
    /// Spawns a renderer for `page` on the current tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn<P>(page: P, options: MenuOptions, controller: ControllerPort) -> Self
    where
        P: Page + 'static,
    {
        let (port, inbox) = channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let renderer = Renderer::new(page, options, controller);

        let task = tokio::spawn(Self::run_event_loop(renderer, inbox, events_rx));

        Self {
            port: RendererPort::new(port),
            events_tx,
            task,
        }
    }

    /// Returns the port the controller attaches for this page.
    #[inline]
    #[must_use]
    pub fn port(&self) -> RendererPort {
        self.port.clone()
    }

    /// Queues a document event without waiting for it to be handled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PortClosed`] if the renderer task has ended.
    pub fn dispatch(&self, event: PageEvent) -> Result<()> {
        self.events_tx
            .send(QueuedEvent {
                event,
                done_tx: None,
            })
            .map_err(|_| Error::PortClosed)
    }

    /// Queues a document event and waits until it has been handled.
    ///
    /// Returns the click outcome for clicks.
    ///
    /// # Errors
    ///
    /// - [`Error::PortClosed`] if the renderer task has ended
    /// - [`Error::NoReply`] if it ended before handling the event
    pub async fn dispatch_and_wait(&self, event: PageEvent) -> Result<Option<ClickOutcome>> {
        let (done_tx, done_rx) = oneshot::channel();
        self.events_tx
            .send(QueuedEvent {
                event,
                done_tx: Some(done_tx),
            })
            .map_err(|_| Error::PortClosed)?;

        Ok(done_rx.await?)
    }

    /// Stops accepting events and waits for the task to finish.
    ///
    /// Controller messages already queued may be dropped.
    pub async fn shutdown(self) {
        let Self {
            port,
            events_tx,
            task,
        } = self;
        drop(events_tx);
        drop(port);

        if let Err(e) = task.await {
            debug!(error = %e, "Renderer task ended abnormally");
        }
    }

    /// Serves one renderer until its page or its inbox goes away.
    async fn run_event_loop<P: Page>(
        mut renderer: Renderer<P>,
        mut inbox: Inbox,
        mut events_rx: mpsc::UnboundedReceiver<QueuedEvent>,
    ) {
        loop {
            tokio::select! {
                // Messages from the controller
                incoming = inbox.recv() => {
                    let Some(incoming) = incoming else {
                        debug!("Renderer inbox closed");
                        break;
                    };

                    let (message, responder) = incoming.into_parts();
                    let reply = renderer.handle_message(message);

                    if let (Some(reply), Some(responder)) = (reply, responder)
                        && let Err(e) = responder.send(reply)
                    {
                        trace!(error = %e, "Reply dropped by requester");
                    }
                }

                // Events from the document
                queued = events_rx.recv() => {
                    let Some(QueuedEvent { event, done_tx }) = queued else {
                        debug!("Page event stream closed");
                        break;
                    };

                    let outcome = renderer.handle_event(event);
                    if let Some(outcome) = outcome {
                        trace!(?outcome, "Click handled");
                    }
                    if let Some(done_tx) = done_tx {
                        let _ = done_tx.send(outcome);
                    }
                }
            }
        }

        renderer.remove_context_menu();
        debug!("Renderer event loop terminated");
    }
}

// ============================================================================
// Tests
// ============================================================================
