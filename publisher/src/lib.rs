//! # Crate publisher
//!
//! Fan-out of events of type `T` to a dynamic set of listeners.
//!
//! Sensor sources own a [`Publisher`] and call [`Publishable::notify_listeners`] for every
//! new reading. Consumers wrap a callback in a [`Listener`], register it, and keep the
//! returned id to unregister when their session ends.
//!
//! ### Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use publisher::{Listener, Publishable, Publisher};
//!
//! let publisher = Publisher::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let mut listener = Listener::new({
//!     let seen = seen.clone();
//!     move |_id, value: Arc<i32>| seen.lock().unwrap().push(*value)
//! });
//! let id = publisher.register_listener(&mut listener);
//!
//! publisher.notify_listeners(Arc::new(7));
//! assert_eq!(*seen.lock().unwrap(), vec![7]);
//!
//! publisher.unregister_listener(id).unwrap();
//! assert!(publisher.is_empty());
//! ```

pub mod listener;
pub mod macros;
pub mod publisher;

pub use listener::{Callback, Listener, Notifiable};
pub use publisher::{Publishable, Publisher, PublisherError};
