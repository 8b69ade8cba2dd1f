// SPDX-License-Identifier: MPL-2.0
//! Slide carousel: state machine, surface seam and input resolution.
//!
//! Nothing in this module depends on Iced. The GUI drives a
//! [`SlideCarousel`] through its navigation operations and renders whatever
//! the carousel pushed into its [`DisplaySurface`].

mod animation;
mod controller;
mod error;
mod input;
pub mod location;
mod options;
mod slide_number;
mod state;
mod surface;

pub use animation::{PostTransitionActions, SlideAnimation};
pub use controller::{Navigation, PendingTransition, SlideCarousel};
pub use error::{CarouselError, Surface};
pub use input::{NavigationKey, NavigationRequest, SwipeTracker};
pub use location::{FragmentLocation, LocationError, NoLocation, SlideLocation};
pub use options::{CarouselOptions, SwipeThreshold, TransitionDuration};
pub use slide_number::SlideNumber;
pub use state::{CarouselState, Phase, Refusal, TransitionTicket};
pub use surface::{DisplaySurface, SurfaceInventory, TrackOffset, MIN_SLIDES};
