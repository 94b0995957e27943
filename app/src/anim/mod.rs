//! Landing page animation model.
//!
//! Each behavior of `public/script.js` exists here as an explicit state
//! machine: no globals, no hidden timers. Time is injected (`clock`), all
//! delayed and repeating work goes through a deterministic `scheduler`
//! with cancellable handles, and the whole page is driven through
//! `AnimationController` as events in, DOM commands out.

pub mod clock;
pub mod controller;
pub mod counter;
pub mod effects;
pub mod menu;
pub mod navbar;
pub mod pipeline;
pub mod reveal;
pub mod scheduler;
pub mod throttle;
pub mod typewriter;

pub use controller::{AnimationController, DomCommand, PageEvent, PageModel, Target};
