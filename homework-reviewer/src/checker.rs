//! Review orchestration: URL → sources → prompt → model → feedback.

use std::time::Instant;

use git_repo_fetcher::{collect_code, parse_repo_url};
use tracing::{debug, info, instrument};

use crate::clients::{ChatCompletion, SourceFetcher};
use crate::config::ReviewConfig;
use crate::errors::ReviewResult;
use crate::feedback::{HomeworkFeedback, parse_feedback};
use crate::prompt::build_review_prompt;

/// Runs a homework review against one repository.
///
/// Generic over the fetcher and the chat client so the pipeline can be
/// driven by fakes in tests.
pub struct HomeworkChecker<F, C> {
    fetcher: F,
    chat: C,
    cfg: ReviewConfig,
}

impl<F, C> HomeworkChecker<F, C>
where
    F: SourceFetcher,
    C: ChatCompletion,
{
    pub fn new(fetcher: F, chat: C, cfg: ReviewConfig) -> Self {
        Self { fetcher, chat, cfg }
    }

    /// Reviews the repository at `repo_url` against `assignment`.
    ///
    /// Steps run strictly in sequence and each runs once. Any fetch or LLM
    /// failure is returned as is; a reply without a score marker is not a
    /// failure (score 0).
    #[instrument(skip_all, fields(repo_url = %repo_url))]
    pub async fn get_feedback(
        &self,
        assignment: &str,
        repo_url: &str,
    ) -> ReviewResult<HomeworkFeedback> {
        let started = Instant::now();

        let repo = parse_repo_url(repo_url);
        debug!(owner = %repo.owner, name = %repo.name, "repository resolved");

        let files = self
            .fetcher
            .list_source_files(&repo.owner, &repo.name)
            .await?;
        let all_code = collect_code(&files);
        debug!(files = files.len(), code_len = all_code.len(), "sources collected");

        let prompt = build_review_prompt(&self.cfg.language, assignment, &all_code);
        let reply = self.chat.complete(&prompt).await?;

        let feedback = parse_feedback(&reply);
        info!(
            score = feedback.score(),
            files = files.len(),
            latency_ms = started.elapsed().as_millis(),
            "homework review completed"
        );

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_llm_service::AiLlmError;
    use ai_llm_service::error_handler::{Provider, ProviderError, ProviderErrorKind};
    use git_repo_fetcher::errors::GitRepoFetcherProviderError;
    use git_repo_fetcher::{GitRepoFetcherError, SourceFile};
    use std::sync::Mutex;

    use crate::errors::ReviewError;

    struct FakeFetcher {
        files: Vec<SourceFile>,
        fail: bool,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeFetcher {
        fn with(files: Vec<SourceFile>) -> Self {
            Self {
                files,
                fail: false,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl SourceFetcher for FakeFetcher {
        async fn list_source_files(
            &self,
            owner: &str,
            repo: &str,
        ) -> Result<Vec<SourceFile>, GitRepoFetcherError> {
            self.calls
                .lock()
                .unwrap()
                .push((owner.to_string(), repo.to_string()));
            if self.fail {
                return Err(GitRepoFetcherProviderError::NotFound.into());
            }
            Ok(self.files.clone())
        }
    }

    struct FakeChat {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeChat {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChatCompletion for FakeChat {
        async fn complete(&self, prompt: &str) -> Result<String, AiLlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().ok_or_else(|| {
                ProviderError::new(Provider::OpenAI, ProviderErrorKind::EmptyChoices).into()
            })
        }
    }

    fn file(path: &str, content: &str) -> SourceFile {
        SourceFile {
            path: path.into(),
            download_url: Some(format!("https://raw.example/{path}")),
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn full_pipeline_produces_feedback() {
        let fetcher = FakeFetcher::with(vec![
            file("Program.cs", "class Program {}"),
            file("Util.cs", "class Util {}"),
        ]);
        let chat = FakeChat::replying("Variable names are unclear.\nScore: 4");
        let checker = HomeworkChecker::new(fetcher, chat, ReviewConfig::default());

        let fb = checker
            .get_feedback("Count days until New Year", "https://github.com/owner/repo")
            .await
            .unwrap();

        assert_eq!(fb, HomeworkFeedback::new(4, "Variable names are unclear."));

        let calls = checker.fetcher.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), [("owner".to_string(), "repo".to_string())]);

        let prompts = checker.chat.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("'Count days until New Year'"));
        assert!(prompts[0].ends_with("\nclass Program {}\nclass Util {}\n"));
    }

    #[tokio::test]
    async fn no_sources_still_calls_chat_once() {
        let checker = HomeworkChecker::new(
            FakeFetcher::with(Vec::new()),
            FakeChat::replying("Nothing to review."),
            ReviewConfig::default(),
        );

        let fb = checker
            .get_feedback("Sort an array", "https://github.com/owner/empty")
            .await
            .unwrap();

        assert_eq!(fb.score(), 0);
        assert_eq!(fb.comments(), "Nothing to review.");

        let prompts = checker.chat.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("'Sort an array'"));
        assert!(prompts[0].ends_with("done perfectly.\n"));
    }

    #[tokio::test]
    async fn language_label_reaches_prompt() {
        let checker = HomeworkChecker::new(
            FakeFetcher::with(vec![file("main.rs", "fn main() {}")]),
            FakeChat::replying("Score: 5"),
            ReviewConfig {
                language: "Rust".into(),
            },
        );

        let fb = checker
            .get_feedback("Hello world", "https://github.com/owner/repo")
            .await
            .unwrap();
        assert_eq!(fb.score(), 5);

        let prompts = checker.chat.prompts.lock().unwrap();
        assert!(prompts[0].starts_with("Review the following Rust code"));
    }

    #[tokio::test]
    async fn fetch_failure_skips_chat() {
        let mut fetcher = FakeFetcher::with(Vec::new());
        fetcher.fail = true;
        let checker =
            HomeworkChecker::new(fetcher, FakeChat::replying("unused"), ReviewConfig::default());

        let err = checker
            .get_feedback("task", "https://github.com/owner/missing")
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Fetch(_)));
        assert!(checker.chat.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn llm_failure_propagates() {
        let chat = FakeChat {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        };
        let checker =
            HomeworkChecker::new(FakeFetcher::with(Vec::new()), chat, ReviewConfig::default());

        let err = checker
            .get_feedback("task", "https://github.com/owner/repo")
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::Llm(_)));
    }
}
