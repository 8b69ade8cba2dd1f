// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_slides::app::persisted_state::AppState;
use iced_slides::app::{App, Screen, Startup};
use iced_slides::carousel::{
    CarouselError, CarouselOptions, DisplaySurface, Navigation, NavigationRequest,
    PostTransitionActions, SlideAnimation, SlideCarousel, SlideNumber, SwipeThreshold,
    SwipeTracker,
};
use iced_slides::config::{self, Config};
use iced_slides::deck::Deck;
use iced_slides::i18n::fluent::I18n;
use iced_slides::ui::surface_model::SurfaceModel;
use tempfile::tempdir;

fn demo_carousel() -> SlideCarousel<SurfaceModel> {
    let deck = Deck::demo();
    SlideCarousel::new(
        deck.len(),
        SurfaceModel::new(deck.len()),
        deck.post_transition_actions(),
        CarouselOptions::default(),
    )
    .expect("demo deck has every surface")
}

fn finish(carousel: &mut SlideCarousel<SurfaceModel>, navigation: Navigation) {
    let pending = navigation.pending().expect("transition started");
    assert!(carousel.complete_transition(pending.ticket));
}

#[test]
fn five_slide_walkthrough() {
    let mut carousel = demo_carousel();
    assert_eq!(carousel.current_slide().get(), 1);
    assert_abs_diff_eq!(carousel.surface().progress(), 20.0, epsilon = 1e-4);

    let navigation = carousel.next_slide();
    assert_eq!(carousel.current_slide().get(), 2);
    assert!(carousel.is_transitioning());

    // input during the transition is dropped, not queued
    assert_eq!(carousel.next_slide(), Navigation::Dropped);
    assert_eq!(
        carousel.go_to_slide(5).expect("in range"),
        Navigation::Dropped
    );
    assert_eq!(carousel.current_slide().get(), 2);

    finish(&mut carousel, navigation);
    assert!(!carousel.is_transitioning());
    assert_eq!(
        carousel.surface().slide(SlideNumber::from_position(1)).played,
        Some(SlideAnimation::RevealItems)
    );

    let navigation = carousel.go_to_slide(5).expect("in range");
    finish(&mut carousel, navigation);
    assert_abs_diff_eq!(carousel.surface().progress(), 100.0, epsilon = 1e-4);
    assert_eq!(carousel.surface().offset().percent(), -400.0);

    let navigation = carousel.next_slide();
    assert_eq!(carousel.current_slide().get(), 1);
    finish(&mut carousel, navigation);

    let navigation = carousel.previous_slide();
    assert_eq!(carousel.current_slide().get(), 5);
    finish(&mut carousel, navigation);
}

#[test]
fn out_of_range_targets_are_rejected_not_clamped() {
    let mut carousel = demo_carousel();

    assert_eq!(
        carousel.go_to_slide(6),
        Err(CarouselError::InvalidIndex { index: 6, total: 5 })
    );
    assert_eq!(
        carousel.go_to_slide(0),
        Err(CarouselError::InvalidIndex { index: 0, total: 5 })
    );
    assert_eq!(carousel.current_slide().get(), 1);
    assert!(!carousel.is_transitioning());
}

#[test]
fn swipe_of_sixty_navigates_and_forty_does_not() {
    let mut tracker = SwipeTracker::new(SwipeThreshold::default());

    tracker.press(200.0);
    assert_eq!(tracker.release(140.0), Some(NavigationRequest::Next));

    tracker.press(200.0);
    assert_eq!(tracker.release(260.0), Some(NavigationRequest::Previous));

    tracker.press(200.0);
    assert_eq!(tracker.release(160.0), None);
}

#[test]
fn resize_on_third_of_five_keeps_minus_two_hundred_percent() {
    let mut carousel = demo_carousel();
    let navigation = carousel.go_to_slide(3).expect("in range");
    finish(&mut carousel, navigation);

    carousel.surface_mut().set_viewport_width(640.0);
    carousel.handle_resize();
    carousel.handle_resize();

    assert_eq!(carousel.current_slide().get(), 3);
    assert_eq!(carousel.surface().offset().percent(), -200.0);
    assert_eq!(carousel.surface_mut().take_scroll_x(), Some(1280.0));
    assert!(!carousel.is_transitioning());
}

#[test]
fn too_small_deck_cannot_start() {
    let deck = Deck::parse("[[slides]]\ntitle = \"Alone\"\n").expect("valid deck");
    let surface = SurfaceModel::new(deck.len());
    assert!(surface.inventory().first_missing(deck.len()).is_some());

    let result = SlideCarousel::new(
        deck.len(),
        surface,
        PostTransitionActions::new(),
        CarouselOptions::default(),
    );
    assert!(matches!(result, Err(CarouselError::MissingSurface(_))));
}

#[test]
fn settings_drive_locale_and_carousel_options() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("pt-BR".to_string());
    settings.carousel.wrap_around = Some(false);
    settings.carousel.transition_ms = Some(250);
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "pt-BR");
    assert_eq!(
        i18n.tr_with_args(
            "carousel-position",
            &[("current", "1".to_string()), ("total", "5".to_string())]
        ),
        "Slide 1 de 5"
    );

    let options = CarouselOptions::from(&loaded.carousel);
    assert!(!options.wrap_around);
    assert_eq!(options.transition.value(), 250);
}

#[test]
fn app_boots_deck_from_file_with_location() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("talk.toml");
    std::fs::write(
        &path,
        "[[slides]]\ntitle = \"A\"\n\n[[slides]]\ntitle = \"B\"\n\n[[slides]]\ntitle = \"C\"\n",
    )
    .expect("write deck");

    let app = App::boot(Startup {
        i18n: I18n::new(Some("en-US".to_string()), None, &Config::default()),
        config: Config::default(),
        app_state: AppState::default(),
        deck: Some(format!("{}#slide-2", path.display())),
        at: None,
    });

    match app.screen() {
        Screen::Presenting(presentation) => {
            assert_eq!(presentation.current_slide().get(), 2);
            assert_eq!(presentation.total_slides(), 3);
        }
        Screen::Failed(err) => panic!("deck failed to open: {err}"),
    }
    assert_eq!(app.deck_path(), Some(path.as_path()));
    assert_eq!(app.title(), "talk.toml #slide-2 - Iced Slides");
}
