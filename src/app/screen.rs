// SPDX-License-Identifier: MPL-2.0
//! What the window shows.

use crate::carousel::{FragmentLocation, SlideCarousel};
use crate::error::Error;
use crate::ui::surface_model::SurfaceModel;

/// Carousel as hosted by the app.
pub type Presentation = SlideCarousel<SurfaceModel, FragmentLocation>;

#[derive(Debug)]
pub enum Screen {
    Presenting(Box<Presentation>),
    /// The deck could not be loaded or the carousel refused to start.
    Failed(Error),
}

impl Screen {
    #[must_use]
    pub fn presentation(&self) -> Option<&Presentation> {
        match self {
            Screen::Presenting(presentation) => Some(presentation.as_ref()),
            Screen::Failed(_) => None,
        }
    }

    pub fn presentation_mut(&mut self) -> Option<&mut Presentation> {
        match self {
            Screen::Presenting(presentation) => Some(presentation.as_mut()),
            Screen::Failed(_) => None,
        }
    }
}
