//! Message ports between isolated contexts.
//!
//! A [`Port`] is the sending half and an [`Inbox`] the receiving half of one
//! direction of a channel. Every message is serialized to JSON text on send
//! and parsed again on receipt, so the two contexts never share a value, only
//! its encoding.
//!
//! # Delivery
//!
//! - [`Port::post`] is fire-and-forget.
//! - [`Port::request`] returns a [`PendingReply`] the caller may await or drop.
//! - Undecodable messages are logged and skipped by the inbox; their reply
//!   channel is dropped, which the requester observes as [`Error::NoReply`].

// ============================================================================
// Imports
// ============================================================================

use std::future::IntoFuture;

use futures_util::future::{BoxFuture, FutureExt};
use serde_json::{from_str, to_string};
use tokio::sync::{mpsc, oneshot};
use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::protocol::{MenuReply, Message};

// ============================================================================
// Envelope
// ============================================================================

/// One encoded message in flight.
struct Envelope {
    /// JSON-encoded [`Message`].
    payload: String,
    /// Reply channel for requests.
    reply_tx: Option<oneshot::Sender<String>>,
}

// ============================================================================
// Constructor
// ============================================================================

/// Creates a connected port/inbox pair.
#[must_use]
pub fn channel() -> (Port, Inbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Port { tx }, Inbox { rx })
}

// ============================================================================
// Port
// ============================================================================

/// Sending half of a message channel.
///
/// Cheap to clone; all clones feed the same [`Inbox`].
#[derive(Clone)]
pub struct Port {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl std::fmt::Debug for Port {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Port")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

impl Port {
    /// Sends a message without waiting for any reply.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] if the message cannot be encoded
    /// - [`Error::PortClosed`] if the inbox is gone
    pub fn post(&self, message: &Message) -> Result<()> {
        let payload = to_string(message)?;
        self.tx
            .send(Envelope {
                payload,
                reply_tx: None,
            })
            .map_err(|_| Error::PortClosed)?;

        trace!(action = message.action(), "Message posted");
        Ok(())
    }

    /// Sends a message and returns a handle to its eventual reply.
    ///
    /// # Errors
    ///
    /// - [`Error::Protocol`] if the message is never answered
    /// - [`Error::Json`] if the message cannot be encoded
    /// - [`Error::PortClosed`] if the inbox is gone
    pub fn request(&self, message: &Message) -> Result<PendingReply> {
        if !message.expects_reply() {
            return Err(Error::protocol(format!(
                "{} is not answered, post it instead",
                message.action()
            )));
        }

        let payload = to_string(message)?;
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send(Envelope {
                payload,
                reply_tx: Some(reply_tx),
            })
            .map_err(|_| Error::PortClosed)?;

        trace!(action = message.action(), "Request sent");
        Ok(PendingReply { rx: reply_rx })
    }

    /// Returns `true` if the receiving side has been dropped.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

// ============================================================================
// PendingReply
// ============================================================================

/// Reply to a request that has not arrived yet.
///
/// Await it to get the [`MenuReply`], or drop it to ignore the answer.
#[derive(Debug)]
pub struct PendingReply {
    rx: oneshot::Receiver<String>,
}

impl PendingReply {
    /// Waits for the reply.
    ///
    /// # Errors
    ///
    /// - [`Error::NoReply`] if the receiver dropped the request
    /// - [`Error::Json`] if the reply cannot be decoded
    pub async fn recv(self) -> Result<MenuReply> {
        let text = self.rx.await?;
        Ok(from_str(&text)?)
    }
}

impl IntoFuture for PendingReply {
    type Output = Result<MenuReply>;
    type IntoFuture = BoxFuture<'static, Result<MenuReply>>;

    fn into_future(self) -> Self::IntoFuture {
        self.recv().boxed()
    }
}

// ============================================================================
// Inbox
// ============================================================================

/// Receiving half of a message channel.
pub struct Inbox {
    rx: mpsc::UnboundedReceiver<Envelope>,
}

impl Inbox {
    /// Receives the next decodable message.
    ///
    /// Returns `None` once every [`Port`] has been dropped.
    pub async fn recv(&mut self) -> Option<Incoming> {
        loop {
            let envelope = self.rx.recv().await?;

            match from_str::<Message>(&envelope.payload) {
                Ok(message) => {
                    return Some(Incoming {
                        message,
                        responder: envelope.reply_tx.map(|tx| Responder { tx }),
                    });
                }
                Err(e) => {
                    warn!(error = %e, payload = %envelope.payload, "Failed to parse incoming message");
                }
            }
        }
    }
}

// ============================================================================
// Incoming
// ============================================================================

/// A decoded message, plus the means to answer it when it was a request.
#[derive(Debug)]
pub struct Incoming {
    /// The decoded message.
    pub message: Message,
    responder: Option<Responder>,
}

impl Incoming {
    /// Splits into the message and its responder.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Message, Option<Responder>) {
        (self.message, self.responder)
    }
}

// ============================================================================
// Responder
// ============================================================================

/// Answers one request.
#[derive(Debug)]
pub struct Responder {
    tx: oneshot::Sender<String>,
}

impl Responder {
    /// Sends the reply.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] if the reply cannot be encoded
    /// - [`Error::PortClosed`] if the requester dropped its [`PendingReply`]
    pub fn send(self, reply: MenuReply) -> Result<()> {
        let text = to_string(&reply)?;
        self.tx.send(text).map_err(|_| Error::PortClosed)
    }
}

// ============================================================================
// Tests
// ============================================================================
