use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Task, Theme};
use thiserror::Error;

mod state;
mod ui;

use state::currency::CurrencyFormatter;
use state::gallery::{Gallery, GalleryError, GalleryState, Navigation};
use state::settings::{Screen, Settings, ThemeChoice};
use state::tip::TipRequest;
use ui::artwork::ArtworkLibrary;

/// Fatal startup and runtime errors
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Gallery(#[from] GalleryError),

    #[error(transparent)]
    Ui(#[from] iced::Error),
}

/// Main application state
struct TipGallery {
    /// Screen currently shown
    screen: Screen,
    theme: ThemeChoice,
    currency: CurrencyFormatter,
    /// Raw tip calculator input
    tip_request: TipRequest,
    /// Formatted tip for `tip_request`, recomputed on every input change
    tip: String,
    gallery: Gallery,
    gallery_state: GalleryState,
    artwork: ArtworkLibrary,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked a screen from the top bar
    ScreenSelected(Screen),
    /// Bill amount text edited
    AmountChanged(String),
    /// Tip percentage text edited
    TipPercentChanged(String),
    /// Round-up switch flipped
    RoundUpToggled(bool),
    /// Previous/next button pressed
    Navigate(Navigation),
}

impl TipGallery {
    /// Create a new instance of the application
    fn new(settings: Settings, gallery: Gallery, currency: CurrencyFormatter) -> (Self, Task<Message>) {
        let artwork = ArtworkLibrary::load(&settings.asset_dir(), &gallery);
        let tip_request = TipRequest::default();
        let tip = tip_request.formatted_tip(&currency);
        let gallery_state = gallery.start();

        (
            TipGallery {
                screen: settings.start_screen,
                theme: settings.theme,
                currency,
                tip_request,
                tip,
                gallery,
                gallery_state,
                artwork,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ScreenSelected(screen) => {
                tracing::debug!(?screen, "screen selected");
                self.screen = screen;
            }
            Message::AmountChanged(text) => {
                self.tip_request.amount_text = text;
                self.recompute_tip();
            }
            Message::TipPercentChanged(text) => {
                self.tip_request.tip_percent_text = text;
                self.recompute_tip();
            }
            Message::RoundUpToggled(round_up) => {
                self.tip_request.round_up = round_up;
                self.recompute_tip();
            }
            Message::Navigate(navigation) => {
                self.gallery_state = self.gallery_state.apply(navigation);
                tracing::debug!(
                    ?navigation,
                    index = self.gallery_state.current_index(),
                    "gallery navigated"
                );
            }
        }

        Task::none()
    }

    fn recompute_tip(&mut self) {
        self.tip = self.tip_request.formatted_tip(&self.currency);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let tabs = row![
            self.tab_button("Tip Calculator", Screen::TipCalculator),
            self.tab_button("Gallery", Screen::Gallery),
        ]
        .spacing(8)
        .padding(8);

        let body = match self.screen {
            Screen::TipCalculator => ui::tip::view(&self.tip_request, &self.tip),
            Screen::Gallery => ui::gallery::view(&self.gallery, self.gallery_state, &self.artwork),
        };

        column![tabs, container(body).width(Length::Fill).height(Length::Fill)].into()
    }

    fn tab_button<'a>(&self, label: &'a str, screen: Screen) -> Element<'a, Message> {
        let style = if self.screen == screen {
            button::primary
        } else {
            button::secondary
        };

        button(text(label))
            .style(style)
            .on_press(Message::ScreenSelected(screen))
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();

    // A broken settings file should not keep the app from starting
    let settings = Settings::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring settings");
        Settings::default()
    });
    let gallery = state::data::shipped_gallery()?;
    let currency = CurrencyFormatter::from_env();

    tracing::info!(
        locale = ?currency.locale(),
        artworks = gallery.item_count().get(),
        "Tip Gallery starting"
    );

    iced::application("Tip Gallery", TipGallery::update, TipGallery::view)
        .theme(TipGallery::theme)
        .centered()
        .run_with(move || TipGallery::new(settings, gallery, currency))?;

    Ok(())
}
