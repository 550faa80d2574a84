//! One-slot rendezvous mailbox.
//!
//! tokio has no zero-capacity channel, so each parcel travels with a oneshot
//! acknowledgement: [`Outbox::send`] returns only after a receiver has taken
//! the parcel. An explicit end marker, the outbox being dropped, or a parcel
//! left behind by a sender that was cancelled mid-send latches the
//! [`Inbox`], after which every receive returns `None` immediately.
use tokio::sync::{mpsc, oneshot};

use crate::api::{Result, RuntimeError};

struct Parcel<T> {
    /// `None` is the end marker.
    item: Option<T>,
    ack: oneshot::Sender<()>,
}

pub(crate) fn mailbox<T>() -> (Outbox<T>, Inbox<T>) {
    let (tx, rx) = mpsc::channel(1);
    (Outbox { tx }, Inbox { rx, ended: false })
}

pub(crate) struct Outbox<T> {
    tx: mpsc::Sender<Parcel<T>>,
}

impl<T> Outbox<T> {
    /// Blocks until a receiver takes `item`.
    pub(crate) async fn send(&self, item: T) -> Result<()> {
        self.deliver(Some(item)).await
    }

    /// Blocks until a receiver takes the end marker.
    pub(crate) async fn end(&self) -> Result<()> {
        self.deliver(None).await
    }

    async fn deliver(&self, item: Option<T>) -> Result<()> {
        let (ack, acked) = oneshot::channel();
        self.tx
            .send(Parcel { item, ack })
            .await
            .map_err(|_| RuntimeError::SessionClosed)?;
        acked.await.map_err(|_| RuntimeError::SessionClosed)
    }
}

pub(crate) struct Inbox<T> {
    rx: mpsc::Receiver<Parcel<T>>,
    ended: bool,
}

impl<T> Inbox<T> {
    /// Next item, or `None` once the end marker arrived or the sender is gone.
    pub(crate) async fn recv(&mut self) -> Option<T> {
        if self.ended {
            return None;
        }
        match self.rx.recv().await {
            // A parcel whose sender stopped waiting belongs to a cancelled
            // session and is treated as the end.
            Some(Parcel {
                item: Some(item),
                ack,
            }) => {
                if ack.send(()).is_ok() {
                    Some(item)
                } else {
                    self.latch();
                    None
                }
            }
            Some(Parcel { item: None, ack }) => {
                let _ = ack.send(());
                self.latch();
                None
            }
            None => {
                self.latch();
                None
            }
        }
    }

    fn latch(&mut self) {
        self.ended = true;
        self.rx.close();
    }
}
