#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod highscore_service;
pub mod quiz_services;
pub mod session;
pub mod session_view;
pub mod settings_service;
pub mod translations;

pub use quiz_core::Clock;

pub use error::{
    HighscoreServiceError, QuizServicesError, SessionError, SettingsServiceError,
    TranslationsError,
};
pub use generator::ExerciseGenerator;
pub use highscore_service::HighscoreService;
pub use quiz_services::QuizServices;
pub use session::{QuizOutcome, QuizSession, SessionProgress, Tick};
pub use session_view::OutcomeView;
pub use settings_service::SettingsService;
pub use translations::TranslationCatalog;
