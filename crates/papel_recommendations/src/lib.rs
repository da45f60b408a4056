pub mod cli;
pub mod client;
pub mod logging;
pub mod parser;
pub mod screen;
pub mod view_model;

pub use cli::{handle_command, ConsoleNavigator, RecommendationCommands};
pub use client::RecommendationClient;
pub use screen::{Navigator, RecommendationScreen};
pub use view_model::RecommendationListViewModel;
