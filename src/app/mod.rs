// SPDX-License-Identifier: MPL-2.0
//! Application root: hosts the slide carousel in an Iced window.
//!
//! `App` loads settings, session state and the deck, builds the carousel
//! against a [`SurfaceModel`], and turns carousel outcomes into Iced tasks:
//! a linear scroll of the track and a sleep for every started transition,
//! and a `scroll_to` jump for every other track offset write.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Presentation, Screen};

use crate::carousel::location::split_location;
use crate::carousel::{CarouselOptions, FragmentLocation, SlideCarousel, SwipeTracker};
use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::config::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::deck::Deck;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::surface_model::SurfaceModel;
use crate::ui::theming::AppTheme;
use crate::ui::track_motion::TrackMotion;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::AppState;
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    deck: Deck,
    deck_path: Option<PathBuf>,
    screen: Screen,
    swipe: SwipeTracker,
    /// Last known cursor x, the start and end of mouse drags.
    cursor_x: Option<f32>,
    app_state: AppState,
    resume_last_slide: bool,
    /// Translation key of a startup warning (unreadable settings or state).
    notice: Option<String>,
    /// Last known scroll position of the slide track.
    track_x: f32,
    /// Running scroll of the track toward the current slide.
    motion: Option<TrackMotion>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("deck_path", &self.deck_path)
            .field("slides", &self.deck.len())
            .field("screen", &self.screen)
            .finish()
    }
}

/// Everything `App` needs that comes from outside the window.
#[derive(Debug)]
pub struct Startup {
    pub i18n: I18n,
    pub config: Config,
    pub app_state: AppState,
    /// Raw deck argument, e.g. `talk.toml#slide-3`. `None` opens the demo deck.
    pub deck: Option<String>,
    pub at: Option<usize>,
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let (app_state, state_warning) = AppState::load();

        let mut app = Self::boot(Startup {
            i18n,
            config,
            app_state,
            deck: flags.deck,
            at: flags.at,
        });
        app.notice = config_warning.or(state_warning);

        let task = app.sync_scroll();
        (app, task)
    }

    /// Builds the app from already-loaded inputs.
    pub fn boot(startup: Startup) -> Self {
        let Startup {
            i18n,
            config,
            app_state,
            deck,
            at,
        } = startup;

        let (deck_path, fragment) = match deck.as_deref() {
            Some(raw) => {
                let (path, fragment) = split_location(raw);
                (Some(PathBuf::from(path)), fragment.map(str::to_string))
            }
            None => (None, None),
        };

        let resume_last_slide = config.carousel.resume_last_slide.unwrap_or(true);
        let options = CarouselOptions::from(&config.carousel);

        let loaded = match &deck_path {
            Some(path) => Deck::load_from_path(path),
            None => Ok(Deck::demo()),
        };

        let (deck, screen) = match loaded {
            Ok(deck) => {
                let resume = if resume_last_slide {
                    app_state.resume_slide_for(deck_path.as_deref())
                } else {
                    None
                };
                let location = initial_location(at, fragment.as_deref(), resume);
                let screen = match SlideCarousel::with_location(
                    deck.len(),
                    SurfaceModel::new(deck.len()),
                    location,
                    deck.post_transition_actions(),
                    options,
                ) {
                    Ok(carousel) => Screen::Presenting(Box::new(carousel)),
                    Err(err) => Screen::Failed(Error::Carousel(err)),
                };
                (deck, screen)
            }
            Err(err) => {
                tracing::error!(deck = ?deck_path, %err, "cannot open deck");
                (Deck::default(), Screen::Failed(err))
            }
        };

        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            deck,
            deck_path,
            screen,
            swipe: SwipeTracker::new(options.swipe_threshold),
            cursor_x: None,
            app_state,
            resume_last_slide,
            notice: None,
            track_x: 0.0,
            motion: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn deck_path(&self) -> Option<&Path> {
        self.deck_path.as_deref()
    }

    #[must_use]
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Last known scroll position of the slide track.
    #[must_use]
    pub fn track_x(&self) -> f32 {
        self.track_x
    }

    #[must_use]
    pub fn is_track_moving(&self) -> bool {
        self.motion.is_some()
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let deck_name = self.deck.title.clone().or_else(|| {
            self.deck_path
                .as_ref()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
        });

        // the location lags behind until the first publish; only show it once it agrees
        let fragment = self.screen.presentation().and_then(|presentation| {
            let location = presentation.location();
            let current = presentation.current_slide().get();
            if presentation.options().publish_location && location.slide() == Some(current) {
                location.fragment().map(str::to_string)
            } else {
                None
            }
        });

        match (deck_name, fragment) {
            (Some(name), Some(fragment)) => format!("{name} {fragment} - {app_name}"),
            (Some(name), None) => format!("{name} - {app_name}"),
            (None, _) => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_motion_subscription(self.motion.is_some()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            deck: &self.deck,
            screen: &self.screen,
            colors: &self.theme.colors,
            notice: self.notice.as_deref(),
        })
    }
}

/// Picks the starting slide: `--at`, then the deck fragment, then the last session.
fn initial_location(
    at: Option<usize>,
    fragment: Option<&str>,
    resume: Option<usize>,
) -> FragmentLocation {
    if let Some(slide) = at {
        return FragmentLocation::from_slide(slide);
    }
    if let Some(fragment) = fragment {
        match FragmentLocation::from_fragment(fragment) {
            Ok(location) => return location,
            Err(err) => tracing::warn!(%err, "ignoring deck location"),
        }
    }
    resume.map(FragmentLocation::from_slide).unwrap_or_default()
}
