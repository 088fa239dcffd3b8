use clap::builder::BoolishValueParser;
use clap::Parser;
use companysearch_http::serve;

#[derive(Parser)]
#[command(name = "companysearch", about = "REST search over the company indices")]
struct Cli {
    /// Elasticsearch base URL
    #[arg(long, env = "COMPANYSEARCH_ES_URL", default_value = "http://localhost:9200")]
    es_url: String,
    /// Basic auth user for the engine
    #[arg(long, env = "COMPANYSEARCH_ES_USERNAME")]
    es_username: Option<String>,
    #[arg(long, env = "COMPANYSEARCH_ES_PASSWORD", hide_env_values = true)]
    es_password: Option<String>,
    /// Per-request engine timeout in seconds
    #[arg(long, env = "COMPANYSEARCH_ES_TIMEOUT_SECS", default_value_t = 10)]
    es_timeout_secs: u64,
    #[arg(long, env = "COMPANYSEARCH_BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind_addr: String,
    /// Directory with index_settings.json and MOCK_DATA.json
    #[arg(long, env = "COMPANYSEARCH_STATIC_DIR", default_value = "./static")]
    static_dir: String,
    /// Seed the fixture even if the indices already hold documents
    #[arg(
        long,
        env = "COMPANYSEARCH_FORCE_SEED",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    force_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    std::env::set_var("COMPANYSEARCH_ES_URL", &cli.es_url);
    if let Some(username) = &cli.es_username {
        std::env::set_var("COMPANYSEARCH_ES_USERNAME", username);
    }
    if let Some(password) = &cli.es_password {
        std::env::set_var("COMPANYSEARCH_ES_PASSWORD", password);
    }
    std::env::set_var(
        "COMPANYSEARCH_ES_TIMEOUT_SECS",
        cli.es_timeout_secs.to_string(),
    );
    std::env::set_var("COMPANYSEARCH_BIND_ADDR", &cli.bind_addr);
    std::env::set_var("COMPANYSEARCH_STATIC_DIR", &cli.static_dir);
    std::env::set_var(
        "COMPANYSEARCH_FORCE_SEED",
        if cli.force_seed { "true" } else { "false" },
    );
    serve().await
}
