use iced::task;
use iced::widget::{container, Column};
use iced::{Element, Length, Task, Theme};
use log::{error, info};
use std::time::Duration;

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use state::catalog::Catalog;
use state::filter::NoiseLevel;
use state::navigation::Screen;
use state::session::{ReturnTicket, Session};
use ui::profile::ProfileTab;
use ui::toast::Toast;

/// Main application state
struct McStudy {
    /// Catalog, navigation and filters for this session
    session: Session,
    config: Config,
    /// Notification shown above the current screen
    toast: Option<Toast>,
    /// Selected list on the profile tab
    profile_tab: ProfileTab,
    /// In-flight delay after a review submission, with the ticket it carries
    return_handle: Option<(ReturnTicket, task::Handle)>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch screen, optionally selecting a spot
    Navigate(Screen, Option<String>),
    /// Context-sensitive back action
    Back,
    CategorySelected(String),
    SearchChanged(String),
    NoiseSelected(NoiseLevel),
    AmenityToggled(String),
    OpenNowToggled(bool),
    ResetFilters,
    ToggleFavorite(String),
    CheckIn(String),
    RatingSelected(u8),
    ReviewTextChanged(String),
    SubmitReview,
    /// The post-submission delay elapsed
    ReturnDue(ReturnTicket),
    ProfileTabSelected(ProfileTab),
}

impl McStudy {
    /// Create a new instance of the application
    fn new(catalog: Catalog, config: Config) -> (Self, Task<Message>) {
        info!("🎓 McStudy initialized with {} study spots", catalog.len());

        let session = Session::new(
            catalog,
            config.profile.review_name.clone(),
            config.min_review_chars,
        );

        (
            McStudy {
                session,
                config,
                toast: None,
                profile_tab: ProfileTab::default(),
                return_handle: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen, place_id) => {
                self.leave_screen();
                self.session.navigate_to(screen, place_id.as_deref());
            }
            Message::Back => {
                self.leave_screen();
                self.session.go_back();
            }
            Message::CategorySelected(category) => self.session.set_category(&category),
            Message::SearchChanged(term) => self.session.set_search(term),
            Message::NoiseSelected(level) => self.session.set_noise_level(level),
            Message::AmenityToggled(amenity) => self.session.toggle_amenity(&amenity),
            Message::OpenNowToggled(open_now) => self.session.set_open_now(open_now),
            Message::ResetFilters => self.session.reset_filters(),
            Message::ToggleFavorite(id) => {
                self.session.toggle_favorite(&id);
            }
            Message::CheckIn(id) => {
                self.session.check_in(&id);
            }
            Message::RatingSelected(rating) => self.session.set_draft_rating(rating),
            Message::ReviewTextChanged(text) => self.session.set_draft_text(text),
            Message::SubmitReview => match self.session.submit_review() {
                Ok(ticket) => {
                    self.toast = Some(Toast::success("Review submitted successfully!"));

                    // Simulated network latency, then back to the spot
                    let delay = Duration::from_millis(self.config.review_return_delay_ms);
                    let (task, handle) = Task::perform(tokio::time::sleep(delay), move |_| {
                        Message::ReturnDue(ticket)
                    })
                    .abortable();
                    self.abort_return();
                    self.return_handle = Some((ticket, handle));

                    return task;
                }
                Err(e) => {
                    self.toast = Some(Toast::error(e.to_string()));
                }
            },
            Message::ReturnDue(ticket) => {
                if matches!(&self.return_handle, Some((live, _)) if *live == ticket) {
                    self.return_handle = None;
                }
                self.session.complete_return(ticket);
            }
            Message::ProfileTabSelected(tab) => self.profile_tab = tab,
        }

        Task::none()
    }

    /// Drop screen-bound state before any navigation
    fn leave_screen(&mut self) {
        self.toast = None;
        self.abort_return();
    }

    fn abort_return(&mut self) {
        if let Some((_, handle)) = self.return_handle.take() {
            handle.abort();
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let current = self.session.current_screen();

        let screen = match current {
            Screen::Home => ui::home::view(&self.session),
            Screen::Filter => ui::filter::view(&self.session),
            Screen::Detail => ui::detail::view(
                self.session.selected_spot(),
                self.session.navigator().detail_parent(),
            ),
            Screen::Review => ui::review::view(&self.session),
            Screen::Profile => ui::profile::view(&self.session, &self.config.profile, self.profile_tab),
            Screen::Map => ui::map::view(&self.session),
        };

        let mut layout = Column::new();
        if let Some(toast) = &self.toast {
            layout = layout.push(container(ui::toast::view(toast)).padding([8, 12]));
        }
        layout = layout.push(container(screen).height(Length::Fill));
        if current.is_tab() {
            layout = layout.push(ui::bottom_nav::view(current));
        }

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let catalog = match Catalog::seeded() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("❌ Cannot start without a catalog: {}", e);
            std::process::exit(1);
        }
    };

    let window_size = (config.window_width, config.window_height);

    iced::application("McStudy", McStudy::update, McStudy::view)
        .theme(McStudy::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || McStudy::new(catalog, config))
}
