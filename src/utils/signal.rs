use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(unix)]
use smallvec::SmallVec;
#[cfg(unix)]
use tokio::signal::unix::{self, Signal, SignalKind};

#[cfg(unix)]
const SHUTDOWN_SIGNALS: [(&str, fn() -> SignalKind); 3] = [
    ("SIGINT", SignalKind::interrupt),
    ("SIGTERM", SignalKind::terminate),
    ("SIGQUIT", SignalKind::quit),
];

/// Completes on the first shutdown signal, ending the server's graceful
/// shutdown wait. Signals that cannot be registered are logged and skipped.
pub struct SignalHandler {
    #[cfg(unix)]
    listeners: SmallVec<[(&'static str, Signal); 3]>,
    #[cfg(not(unix))]
    ctrl_c: futures::future::BoxFuture<'static, std::io::Result<()>>,
}

impl SignalHandler {
    #[cfg(unix)]
    pub fn new() -> Self {
        let listeners = SHUTDOWN_SIGNALS
            .into_iter()
            .filter_map(|(name, kind)| match unix::signal(kind()) {
                Ok(signal) => {
                    debug!(signal = name, "listening for shutdown signal");
                    Some((name, signal))
                }
                Err(error) => {
                    error!(signal = name, "failed to register signal listener: {error}");
                    None
                }
            })
            .collect();

        Self { listeners }
    }

    #[cfg(not(unix))]
    pub fn new() -> Self {
        Self {
            ctrl_c: Box::pin(tokio::signal::ctrl_c()),
        }
    }
}

impl Future for SignalHandler {
    type Output = ();

    #[cfg(unix)]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let received = self
            .listeners
            .iter_mut()
            .find_map(|(name, signal)| signal.poll_recv(cx).is_ready().then_some(*name));

        match received {
            Some(name) => {
                info!(signal = name, "shutting down, finishing open requests");
                Poll::Ready(())
            }
            None => Poll::Pending,
        }
    }

    #[cfg(not(unix))]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.ctrl_c.as_mut().poll(cx).is_pending() {
            return Poll::Pending;
        }

        info!("shutting down, finishing open requests");
        Poll::Ready(())
    }
}
