use std::sync::Arc;

use clap::Parser;
use papel_core::config::{DEFAULT_HOST, DEFAULT_RECOMMENDATION_PATH};
use papel_core::{AuthTokenProvider, ClientConfig, Result, StaticTokenProvider};
use papel_recommendations::cli::DEFAULT_DETAIL_BASE;
use papel_recommendations::logging::init_logging;
use papel_recommendations::{
    handle_command, ConsoleNavigator, RecommendationClient, RecommendationCommands,
    RecommendationScreen,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse your recommended articles", long_about = None)]
pub struct Cli {
    /// Backend host, e.g. http://localhost:3000
    #[arg(long, env = "PAPEL_HOST", default_value = DEFAULT_HOST)]
    host: String,
    /// Path prefix of the recommendation routes; "articles" is appended verbatim
    #[arg(long = "path", env = "PAPEL_RECOMMENDATION_PATH", default_value = DEFAULT_RECOMMENDATION_PATH)]
    recommendation_path: String,
    /// Bearer token of the signed-in user
    #[arg(long, env = "PAPEL_TOKEN", hide_env_values = true)]
    token: String,
    /// Prefix used to build the detail location of an opened article
    #[arg(long, env = "PAPEL_DETAIL_BASE", default_value = DEFAULT_DETAIL_BASE)]
    detail_base: String,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: RecommendationCommands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ClientConfig::new(cli.host, cli.recommendation_path);
    let tokens: Arc<dyn AuthTokenProvider> = Arc::new(StaticTokenProvider::new(cli.token));
    let client = RecommendationClient::new(&config, tokens)?;
    info!("📚 Fetching recommendations from {}", client.endpoint());

    let mut screen = RecommendationScreen::new(client, ConsoleNavigator::new(cli.detail_base));
    handle_command(cli.command, &mut screen).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_open() {
        let cli = Cli::try_parse_from(["papel", "--token", "abc", "open", "2"]).unwrap();
        assert_eq!(cli.token, "abc");
        assert_eq!(cli.command, RecommendationCommands::Open { index: 2 });
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from([
            "papel", "--token", "abc", "--host", "http://10.0.2.2:3000", "list", "--json",
        ])
        .unwrap();
        assert_eq!(cli.host, "http://10.0.2.2:3000");
        assert_eq!(cli.command, RecommendationCommands::List { json: true });
    }

    #[test]
    fn test_negative_index_rejected() {
        assert!(Cli::try_parse_from(["papel", "--token", "abc", "open", "-1"]).is_err());
    }
}
