//! Command line surface. Each command plays the role of one app screen.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use finmate_api::{with_cancel, ApiError, AttachmentUpload, CancelToken, PageParams};
use finmate_core::legal::LegalDocument;
use finmate_core::presentation::{LoadState, SkeletonList};
use finmate_core::utils::ImageAsset;

use crate::main_lib::AppState;
use crate::render;

const DEFAULT_RECENT_LIMIT: u32 = 5;
const LOAD_FAILED_MESSAGE: &str = "Gagal memuat data";

#[derive(Parser, Debug)]
#[command(name = "finmate", version, about = "Finmate personal finance client")]
pub struct Cli {
    /// Bearer token for the API
    #[arg(long, env = "FINMATE_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration
    Config,
    /// List transactions
    Transactions {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the most recent transactions
    Recent {
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: u32,
    },
    /// Show one transaction
    Transaction { id: i64 },
    /// List payment goals
    Goals {
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one payment goal
    Goal { id: i64 },
    /// Payment goal summary
    Overview,
    /// List the attachments of a transaction
    Attachments { transaction_id: i64 },
    /// Attach an image to a transaction
    Attach {
        transaction_id: i64,
        path: PathBuf,
        /// MIME type of the image, e.g. image/png
        #[arg(long)]
        mime: Option<String>,
    },
    /// Show where a legal document lives
    Legal {
        #[arg(value_enum)]
        document: LegalArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LegalArg {
    Privacy,
    Terms,
}

impl From<LegalArg> for LegalDocument {
    fn from(value: LegalArg) -> Self {
        match value {
            LegalArg::Privacy => LegalDocument::PrivacyPolicy,
            LegalArg::Terms => LegalDocument::TermsOfService,
        }
    }
}

/// Runs one command and returns the lines to print.
pub async fn run(cli: Cli, state: &AppState, cancel: &CancelToken) -> anyhow::Result<Vec<String>> {
    let token = cli.token.unwrap_or_default();

    match cli.command {
        Command::Config => Ok(vec![serde_json::to_string_pretty(&state.config)?]),

        Command::Transactions { page, limit } => {
            show_loading();
            let params = PageParams { page, limit };
            let result = with_cancel(
                cancel,
                state.transaction_service.get_transactions(&token, params),
            )
            .await;
            match result {
                Ok(page) => {
                    let pagination = page.pagination.clone();
                    let load = if page.success {
                        LoadState::from_items(page.data)
                    } else {
                        LoadState::Error(page.message.unwrap_or_default())
                    };
                    Ok(render::transactions(&load, pagination.as_ref()))
                }
                Err(e) => Ok(render::transactions(&failed(e)?, None)),
            }
        }

        Command::Recent { limit } => {
            show_loading();
            let items = with_cancel(cancel, async {
                Ok(state
                    .transaction_service
                    .get_recent_transactions(&token, limit)
                    .await)
            })
            .await?;
            Ok(render::transactions(&LoadState::from_items(items), None))
        }

        Command::Transaction { id } => {
            let response =
                with_cancel(cancel, state.transaction_service.get_transaction(&token, id)).await?;
            Ok(match response.into_result() {
                Ok(transaction) => render::transaction_detail(&transaction),
                Err(failure) => vec![render::failure_line(&failure.summary())],
            })
        }

        Command::Goals { page } => {
            show_loading();
            let response = with_cancel(
                cancel,
                state.payment_goals_service.get_payment_goals(&token, page),
            )
            .await?;
            Ok(match response.into_result() {
                Ok(list) => render::goals(&LoadState::from_items(list.data), Some(&list.meta)),
                Err(failure) => render::goals(&LoadState::Error(failure.summary()), None),
            })
        }

        Command::Goal { id } => {
            let response =
                with_cancel(cancel, state.payment_goals_service.get_payment_goal(&token, id))
                    .await?;
            Ok(match response.into_result() {
                Ok(goal) => render::goal_lines(&goal),
                Err(failure) => vec![render::failure_line(&failure.summary())],
            })
        }

        Command::Overview => {
            let response =
                with_cancel(cancel, state.payment_goals_service.get_overview(&token)).await?;
            Ok(match response.into_result() {
                Ok(overview) => render::overview(&overview),
                Err(failure) => vec![render::failure_line(&failure.summary())],
            })
        }

        Command::Attachments { transaction_id } => {
            let response = with_cancel(
                cancel,
                state
                    .attachment_service
                    .list_attachments(&token, transaction_id),
            )
            .await?;
            let load = match response.into_result() {
                Ok(items) => LoadState::from_items(items),
                Err(failure) => LoadState::Error(failure.summary()),
            };
            Ok(render::attachments(&load))
        }

        Command::Attach {
            transaction_id,
            path,
            mime,
        } => {
            let metadata = tokio::fs::metadata(&path).await.ok();
            let asset = ImageAsset {
                file_name: path.file_name().map(|n| n.to_string_lossy().to_string()),
                file_size: metadata.map(|m| m.len()),
                mime_type: mime,
                ..ImageAsset::new(path.to_string_lossy())
            };
            let outcome = with_cancel(
                cancel,
                state
                    .attachment_service
                    .upload_attachment(&token, transaction_id, &asset),
            )
            .await?;
            Ok(match outcome {
                AttachmentUpload::Rejected(reason) => vec![render::failure_line(&reason.to_string())],
                AttachmentUpload::Sent(response) => match response.into_result() {
                    Ok(attachment) => vec![format!("Lampiran tersimpan: {}", attachment.url)],
                    Err(failure) => vec![render::failure_line(&failure.summary())],
                },
            })
        }

        Command::Legal { document } => Ok(render::legal(document.into(), &state.config)),
    }
}

/// Status and decode failures become an error state; the rest propagate.
fn failed<T>(error: ApiError) -> anyhow::Result<LoadState<T>> {
    match error {
        ApiError::Status { message, .. } => Ok(LoadState::Error(message)),
        ApiError::Decode(_) => Ok(LoadState::Error(LOAD_FAILED_MESSAGE.to_string())),
        other => Err(other.into()),
    }
}

fn show_loading() {
    if std::io::stderr().is_terminal() {
        for line in SkeletonList::new(3).render() {
            eprintln!("{}", line);
        }
    }
}
