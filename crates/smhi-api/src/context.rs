//! Per-call cancellation and deadline handling.

use std::future::{Future, pending};
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::SmhiError;

/// Cancellation and deadline signals bound to a single call.
///
/// The default context carries neither, so a call may block for as long as
/// the transport allows.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancellation: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context without cancellation or deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Cancels the call when `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Fails the call once `deadline` is reached.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Fails the call once `timeout` has elapsed from now.
    ///
    /// A timeout too large to represent leaves the deadline unset.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` if the bound token has already been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Drives `future` until it completes or a signal fires.
    ///
    /// Cancellation wins over an elapsed deadline, and both win over a
    /// result that becomes ready in the same poll. The abandoned future is
    /// dropped, which closes any response body it still owns.
    ///
    /// # Errors
    ///
    /// Returns `SmhiError::Cancelled` or `SmhiError::DeadlineExceeded` when
    /// a signal fires first, otherwise whatever `future` returns.
    pub async fn run<F, T>(&self, future: F) -> Result<T, SmhiError>
    where
        F: Future<Output = Result<T, SmhiError>>,
    {
        let cancelled = async {
            match &self.cancellation {
                Some(token) => token.cancelled().await,
                None => pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(SmhiError::Cancelled),
            () = expired => Err(SmhiError::DeadlineExceeded),
            result = future => result,
        }
    }
}
