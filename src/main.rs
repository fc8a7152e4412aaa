use ai_llm_service::{OpenAiService, config::default_config::config_openai, telemetry};
use anyhow::{Context, bail};
use git_repo_fetcher::{GitHubClient, ProviderConfig};
use homework_reviewer::{HomeworkChecker, ReviewConfig};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Global log filter when `RUST_LOG` is unset.
const LOG_DEFAULT: &str = "warn";
/// Level for the chat client's request/latency events when `RUST_LOG` is unset.
const LLM_LOG_LEVEL: Level = Level::INFO;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    check_dotenv(dotenvy::dotenv().map(|_| ()))?;

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level(LOG_DEFAULT, LLM_LOG_LEVEL))
        .with(telemetry::layer())
        .try_init()
        .context("setting default subscriber failed")?;

    // Read once at start; there is no default key.
    let llm_cfg = config_openai().context("chat-completion config")?;
    let provider_cfg = ProviderConfig::from_env().context("repository provider config")?;
    let review_cfg = ReviewConfig::from_env().context("review config")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let repo_url = prompt_line(&mut lines, "Enter the repository URL: ").await?;
    let assignment = prompt_line(&mut lines, "Enter the homework assignment: ").await?;

    let fetcher = GitHubClient::from_config(provider_cfg)?;
    let chat = OpenAiService::new(llm_cfg)?;
    let checker = HomeworkChecker::new(fetcher, chat, review_cfg);

    let feedback = checker.get_feedback(&assignment, &repo_url).await?;

    println!("Score: {}", feedback.score());
    println!("Comments: {}", feedback.comments());

    Ok(())
}

/// A missing `.env` is fine; variables may come from the real environment.
/// Anything else (unreadable file, bad line) is reported.
fn check_dotenv(res: Result<(), dotenvy::Error>) -> anyhow::Result<()> {
    match res {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("loading .env"),
    }
}

/// Prints `label` without a newline and reads the next stdin line.
async fn prompt_line(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> anyhow::Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;

    match lines.next_line().await.context("reading stdin")? {
        Some(line) => Ok(line.trim_end_matches('\r').to_string()),
        None => bail!("stdin closed before input for {label:?} was given"),
    }
}
