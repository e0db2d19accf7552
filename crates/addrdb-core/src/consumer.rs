// crates/addrdb-core/src/consumer.rs

//! Cancellable result consumers.
//!
//! Searches stream every accepted item through a [`ResultConsumer`] and poll
//! [`ResultConsumer::is_cancelled`] between units of work. Cancellation is
//! cooperative: a [`CancellationToken`] clone can be cancelled from another
//! thread while a worker thread runs the search.

pub use tokio_util::sync::CancellationToken;

/// Receives search results as they are found.
pub trait ResultConsumer<T: ?Sized> {
    /// Offers an item. Returning `false` rejects it: where the search honours
    /// the verdict (city matches) it is then left out of the result.
    fn publish(&self, item: &T) -> bool;

    fn is_cancelled(&self) -> bool;
}

impl<T: ?Sized, C: ResultConsumer<T> + ?Sized> ResultConsumer<T> for &C {
    fn publish(&self, item: &T) -> bool {
        (**self).publish(item)
    }

    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Accepts everything and is never cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unfiltered;

impl<T: ?Sized> ResultConsumer<T> for Unfiltered {
    fn publish(&self, _item: &T) -> bool {
        true
    }

    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A bare token as consumer: accepts everything, cancelled with the token.
impl<T: ?Sized> ResultConsumer<T> for CancellationToken {
    fn publish(&self, _item: &T) -> bool {
        true
    }

    fn is_cancelled(&self) -> bool {
        CancellationToken::is_cancelled(self)
    }
}

/// Adapts a closure to [`ResultConsumer`], cancelled through a token.
///
/// ```rust
/// use addrdb_core::consumer::{CancellationToken, FnConsumer, ResultConsumer};
///
/// let token = CancellationToken::new();
/// let consumer = FnConsumer::new(token.clone(), |name: &str| !name.is_empty());
/// assert!(consumer.publish("Berlin"));
/// token.cancel();
/// assert!(consumer.is_cancelled());
/// ```
pub struct FnConsumer<F> {
    token: CancellationToken,
    publish: F,
}

impl<F> FnConsumer<F> {
    pub fn new(token: CancellationToken, publish: F) -> Self {
        Self { token, publish }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> ResultConsumer<T> for FnConsumer<F> {
    fn publish(&self, item: &T) -> bool {
        (self.publish)(item)
    }

    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
