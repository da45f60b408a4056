use clap::Subcommand;
use papel_core::Result;

use crate::screen::{Navigator, RecommendationScreen};
use crate::view_model::RecommendationListViewModel;

pub const DEFAULT_DETAIL_BASE: &str = "papel://articles/";

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RecommendationCommands {
    /// Fetch and print the recommended articles
    List {
        /// Print the batch as JSON instead of one line per article
        #[arg(long)]
        json: bool,
    },
    /// Fetch, then open the article at the given position (0-based)
    Open {
        index: usize,
    },
}

/// Prints the detail location of each opened article.
#[derive(Debug, Clone)]
pub struct ConsoleNavigator {
    detail_base: String,
}

impl ConsoleNavigator {
    pub fn new(detail_base: impl Into<String>) -> Self {
        Self {
            detail_base: detail_base.into(),
        }
    }

    pub fn location(&self, article_id: &str) -> String {
        format!("{}{}", self.detail_base, article_id)
    }
}

impl Default for ConsoleNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_DETAIL_BASE)
    }
}

impl Navigator for ConsoleNavigator {
    fn open_article(&mut self, article_id: &str) {
        println!("{}", self.location(article_id));
    }
}

pub async fn handle_command<N: Navigator>(
    command: RecommendationCommands,
    screen: &mut RecommendationScreen<N>,
) -> Result<()> {
    let mut errors = screen.subscribe_errors();
    screen.on_mount().await;
    if let Ok(e) = errors.try_recv() {
        return Err(e);
    }

    match command {
        RecommendationCommands::List { json: true } => {
            let vm = screen.view_model();
            let batch = serde_json::json!({
                "because": vm.because(),
                "articles": vm.summaries(),
            });
            println!("{:#}", batch);
        }
        RecommendationCommands::List { json: false } => {
            if let Some(because) = screen.because() {
                println!("Because you read \"{}\"", because.title);
            }
            for row in render_rows(screen.view_model()) {
                println!("{}", row);
            }
        }
        RecommendationCommands::Open { index } => screen.on_item_selected(index)?,
    }
    Ok(())
}

/// One display line per held article, in list order.
pub fn render_rows(vm: &RecommendationListViewModel) -> Vec<String> {
    vm.summaries()
        .iter()
        .enumerate()
        .map(|(i, article)| match &article.image_url {
            Some(image) => format!("{:>3}. {} [{}] {}", i, article.title, article.id, image),
            None => format!("{:>3}. {} [{}]", i, article.title, article.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use papel_core::{ArticleSummary, BecauseReason, RecommendationResult};

    #[test]
    fn test_render_rows() {
        let mut vm = RecommendationListViewModel::new();
        vm.replace(RecommendationResult {
            because: BecauseReason {
                article_id: "b".to_string(),
                title: "Because".to_string(),
            },
            articles: vec![
                ArticleSummary {
                    id: "a1".to_string(),
                    title: "First".to_string(),
                    body: "...".to_string(),
                    image_url: None,
                },
                ArticleSummary {
                    id: "a2".to_string(),
                    title: "Second".to_string(),
                    body: "...".to_string(),
                    image_url: Some("http://x/y.png".to_string()),
                },
            ],
        });

        let rows = render_rows(&vm);
        assert_eq!(rows, vec!["  0. First [a1]", "  1. Second [a2] http://x/y.png"]);
    }

    #[test]
    fn test_navigator_location() {
        let navigator = ConsoleNavigator::new("https://papel.app/read/");
        assert_eq!(navigator.location("a1"), "https://papel.app/read/a1");
        assert_eq!(ConsoleNavigator::default().location("x"), "papel://articles/x");
    }
}
