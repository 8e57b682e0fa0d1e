use iced::widget::{center, column, container, horizontal_rule, mouse_area, opaque, scrollable, stack, text};
use iced::{Element, Event, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;

mod classify;
mod state;
mod ui;

use classify::intake;
use classify::mock::{OfflineLookup, SimulatedClassifier};
use classify::{AnalysisError, LookupError, PestClassifier, PestLookup};
use state::catalog::Catalog;
use state::data::{Classification, PestRecord};
use state::directory::{CategoryFilter, DirectoryView, LayoutMode, ThreatFilter};
use state::session::Session;

/// Main application state
struct PestHub {
    /// The bundled pest catalog
    catalog: Catalog,
    /// The active classification session
    session: Session,
    /// Directory filters, layout, and the custom-search dialog
    directory: DirectoryView,
    /// Classification collaborator; currently the bundled simulation
    classifier: Arc<dyn PestClassifier>,
    /// Custom-search collaborator; currently the offline stand-in
    lookup: Arc<dyn PestLookup>,
    /// Inline notice for recoverable input and analysis errors
    notice: Option<String>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the upload button in the drop zone
    BrowseImage,
    /// A file landed on the window
    FileDropped(PathBuf),
    /// User invoked "Classify" on the previewed image
    Classify,
    /// The analysis task completed; generation ties it to the run that
    /// started it
    AnalysisFinished {
        generation: u64,
        outcome: Result<Classification, AnalysisError>,
    },
    /// User invoked "Reset" or "Classify another"
    ResetSession,

    /// Directory search text changed
    QueryChanged(String),
    CategorySelected(CategoryFilter),
    ThreatSelected(ThreatFilter),
    LayoutSelected(LayoutMode),

    /// Custom-search dialog lifecycle
    OpenCustomSearch,
    CloseCustomSearch,
    SearchDraftChanged(String),
    SubmitCustomSearch,
    CustomSearchResolved(Result<Option<PestRecord>, LookupError>),
}

impl PestHub {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot function without
        // its reference catalog
        let catalog = Catalog::load().expect("Failed to load the bundled pest catalog");

        println!("🐛 PestHub initialized with {} pests in the directory", catalog.len());

        let status = format!("Ready. {} pests in the directory.", catalog.len());

        (
            PestHub {
                catalog,
                session: Session::new(),
                directory: DirectoryView::default(),
                classifier: Arc::new(SimulatedClassifier::new()),
                lookup: Arc::new(OfflineLookup),
                notice: None,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseImage => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select a field photo")
                    .add_filter("Images", &intake::IMAGE_EXTENSIONS)
                    .pick_file();

                if let Some(path) = picked {
                    self.accept_image(path);
                }

                Task::none()
            }
            Message::FileDropped(path) => {
                self.accept_image(path);
                Task::none()
            }
            Message::Classify => match self.session.begin_analysis() {
                Ok(ticket) => {
                    self.notice = None;
                    self.status = format!("Analyzing {}…", ticket.image.file_name);

                    let provider = Arc::clone(&self.classifier);
                    let generation = ticket.generation;

                    // Launch the analysis task; the generation comes back
                    // with the completion so stale runs can be discarded
                    Task::perform(
                        classify::classify_with_deadline(provider, ticket.image.path),
                        move |outcome| Message::AnalysisFinished {
                            generation,
                            outcome,
                        },
                    )
                }
                Err(err) => {
                    self.notice = Some(err.to_string());
                    Task::none()
                }
            },
            Message::AnalysisFinished {
                generation,
                outcome,
            } => {
                let applied = self.session.finish_analysis(generation, outcome.clone());

                if !applied {
                    // The session moved on while the task was in flight
                    println!("⏭️  Discarded stale analysis completion (generation {})", generation);
                    return Task::none();
                }

                match outcome {
                    Ok(classification) => {
                        self.notice = None;
                        self.status = format!(
                            "Identified {} ({}% confidence) at {}",
                            classification.label,
                            classification.confidence_pct,
                            chrono::Local::now().format("%H:%M:%S"),
                        );
                    }
                    Err(err) => {
                        self.notice = Some(format!("{}. You can try again.", err));
                        self.status = "Analysis failed.".to_string();
                    }
                }

                Task::none()
            }
            Message::ResetSession => {
                self.session.reset();
                self.notice = None;
                self.status = "Ready.".to_string();
                Task::none()
            }

            Message::QueryChanged(query) => {
                self.directory.query = query;
                Task::none()
            }
            Message::CategorySelected(category) => {
                self.directory.category = category;
                Task::none()
            }
            Message::ThreatSelected(threat) => {
                self.directory.threat = threat;
                Task::none()
            }
            Message::LayoutSelected(layout) => {
                self.directory.layout = layout;
                Task::none()
            }

            Message::OpenCustomSearch => {
                self.directory.search_open = true;
                Task::none()
            }
            Message::CloseCustomSearch => {
                self.directory.search_open = false;
                Task::none()
            }
            Message::SearchDraftChanged(draft) => {
                self.directory.search_draft = draft;
                Task::none()
            }
            Message::SubmitCustomSearch => {
                let query = self.directory.search_draft.trim().to_string();
                if query.is_empty() {
                    return Task::none();
                }

                self.directory.search_open = false;
                self.status = format!("Searching for \"{}\"…", query);

                let lookup = Arc::clone(&self.lookup);
                Task::perform(
                    async move { lookup.search(query).await },
                    Message::CustomSearchResolved,
                )
            }
            Message::CustomSearchResolved(outcome) => {
                self.status = match outcome {
                    Ok(Some(record)) => format!("Custom search matched {}.", record.name),
                    Ok(None) => "Custom search found no match.".to_string(),
                    Err(err) => err.to_string(),
                };
                Task::none()
            }
        }
    }

    /// Validate a picked or dropped file and hand it to the session
    fn accept_image(&mut self, path: PathBuf) {
        match intake::inspect_selection(path) {
            Ok(image) => match self.session.select(image) {
                Ok(()) => {
                    self.notice = None;
                    self.status = "Preview ready.".to_string();
                }
                Err(err) => self.notice = Some(err.to_string()),
            },
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = scrollable(
            column![
                ui::sections::hero(),
                horizontal_rule(1),
                ui::sections::how_it_works(),
                ui::classifier::view(&self.session, self.notice.as_deref()),
                ui::directory::view(&self.catalog, &self.directory),
                ui::sections::pest_detail(),
                ui::sections::about(),
                horizontal_rule(1),
                text(&self.status).size(14),
            ]
            .spacing(32)
            .padding(40),
        );

        let base: Element<Message> = container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if self.directory.search_open {
            let dialog = ui::directory::custom_search_modal(&self.directory.search_draft);

            stack![
                base,
                opaque(
                    mouse_area(center(opaque(dialog))).on_press(Message::CloseCustomSearch)
                )
            ]
            .into()
        } else {
            base
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Window-level events: the drop target for classification photos
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            Event::Window(iced::window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            _ => None,
        })
    }
}

fn main() -> iced::Result {
    iced::application("PestHub", PestHub::update, PestHub::view)
        .subscription(PestHub::subscription)
        .theme(PestHub::theme)
        .centered()
        .run_with(PestHub::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::mock::canned_classification;
    use crate::state::data::{Category, ThreatLevel};
    use crate::state::session::Stage;
    use std::fs;

    fn app() -> PestHub {
        PestHub::new().0
    }

    /// Write a real, probe-able image under the system temp directory
    fn scratch_image(name: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("pesthub-app-{}-{}", std::process::id(), name));
        image::RgbImage::from_pixel(8, 8, image::Rgb([30, 120, 60]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn classify_without_a_selection_shows_a_notice_and_stays_idle() {
        let mut app = app();

        let _ = app.update(Message::Classify);

        assert_eq!(app.session.stage(), Stage::Idle);
        assert!(app.notice.is_some());
    }

    #[test]
    fn dropping_a_photo_enters_preview() {
        let mut app = app();
        let path = scratch_image("drop.png");

        let _ = app.update(Message::FileDropped(path.clone()));

        assert_eq!(app.session.stage(), Stage::Preview);
        assert!(app.notice.is_none());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn dropping_a_non_image_shows_a_notice_without_a_transition() {
        let mut app = app();

        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/report.pdf")));

        assert_eq!(app.session.stage(), Stage::Idle);
        assert!(app.notice.is_some());
    }

    #[test]
    fn directory_messages_drive_the_visible_set() {
        let mut app = app();

        let _ = app.update(Message::QueryChanged("aphid".to_string()));
        let visible = app.directory.visible(app.catalog.records());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Aphid");

        let _ = app.update(Message::QueryChanged(String::new()));
        let _ = app.update(Message::CategorySelected(CategoryFilter::Only(
            Category::Larvae,
        )));
        let _ = app.update(Message::ThreatSelected(ThreatFilter::Only(
            ThreatLevel::High,
        )));

        let names: Vec<&str> = app
            .directory
            .visible(app.catalog.records())
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Cutworm", "Armyworm", "Corn Borer"]);
    }

    #[test]
    fn a_stale_completion_after_reset_leaves_the_session_idle() {
        let mut app = app();
        let path = scratch_image("stale.png");

        let _ = app.update(Message::FileDropped(path.clone()));
        let _ = app.update(Message::Classify);
        assert_eq!(app.session.stage(), Stage::Processing);

        // User resets while the analysis task is still in flight; the
        // first run carried generation 1
        let _ = app.update(Message::ResetSession);
        let _ = app.update(Message::AnalysisFinished {
            generation: 1,
            outcome: Ok(canned_classification()),
        });

        assert_eq!(app.session.stage(), Stage::Idle);
        assert!(app.session.outcome().is_none());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn reset_clears_the_notice() {
        let mut app = app();

        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/report.pdf")));
        assert!(app.notice.is_some());

        let _ = app.update(Message::ResetSession);
        assert!(app.notice.is_none());
    }

    #[test]
    fn custom_search_dialog_opens_and_closes_on_submit() {
        let mut app = app();

        let _ = app.update(Message::OpenCustomSearch);
        assert!(app.directory.search_open);

        let _ = app.update(Message::SearchDraftChanged(
            "tiny green insect on tomato leaves".to_string(),
        ));
        let _ = app.update(Message::SubmitCustomSearch);
        assert!(!app.directory.search_open);
    }

    #[test]
    fn submitting_an_empty_custom_search_keeps_the_dialog_open() {
        let mut app = app();

        let _ = app.update(Message::OpenCustomSearch);
        let _ = app.update(Message::SearchDraftChanged("   ".to_string()));
        let _ = app.update(Message::SubmitCustomSearch);

        assert!(app.directory.search_open);
    }
}
