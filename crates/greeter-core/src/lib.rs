//! # Greeter Core
//!
//! The Greeter component for maven-app.
//!
//! A `Greeter` announces its own startup through an injected logging sink
//! and then exposes one fixed greeting for as long as it lives.
//!
//! ```rust
//! use greeter_core::{Greeter, GREETING};
//!
//! let sink = tracing::Dispatch::none();
//! let greeter = Greeter::new(&sink);
//! assert_eq!(greeter.message(), GREETING);
//! ```

mod greeter;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use greeter::{GREETING, Greeter, STARTUP_MESSAGE};
