use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    adapters::{
        controllers::{
            health_controller::HealthController, verification_controller::VerificationController,
        },
        state::AppState,
    },
    application::error::ApplicationError,
    domain::config::{client::ClientConfig, policy::UploadPolicy},
};

#[derive(Parser, Debug)]
#[command(name = "doc-verify", about = "Verification document upload client")]
pub struct Cli {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Base URL of the verification API
    #[arg(long, env = "DOC_VERIFY_API_BASE_URL", default_value = ClientConfig::DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Path of the upload endpoint, relative to the base URL
    #[arg(long, env = "DOC_VERIFY_UPLOAD_PATH", default_value = ClientConfig::DEFAULT_UPLOAD_PATH)]
    pub upload_path: String,

    /// Bearer token for the documents and health endpoints
    #[arg(long, env = "DOC_VERIFY_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate files locally without uploading anything
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Upload a verification document. With several files only the first is used
    Upload {
        /// Verification link carrying `token` and `email` query parameters
        #[arg(long, conflicts_with_all = ["token", "email"])]
        link: Option<String>,
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List verification documents already stored for a client
    Documents {
        #[arg(long)]
        email: String,
    },
    /// Check that the verification API is reachable
    Health,
}

impl From<ApiArgs> for ClientConfig {
    fn from(args: ApiArgs) -> Self {
        ClientConfig {
            api_base_url: args.api_base_url,
            upload_path: args.upload_path,
            api_token: args.api_token.filter(|t| !t.is_empty()),
        }
    }
}

pub async fn run(cli: Cli) -> Result<(), ApplicationError> {
    let app_state = AppState::new(cli.api.into(), UploadPolicy::default());

    match cli.command {
        Commands::Check { files } => VerificationController::check(&app_state, &files).await,
        Commands::Upload {
            link,
            token,
            email,
            files,
        } => {
            let target = VerificationController::resolve_target(link.as_deref(), token, email)?;
            VerificationController::upload(&app_state, target, &files)
                .await
                .map(|_| ())
        }
        Commands::Documents { email } => {
            VerificationController::list_documents(&app_state, &email).await
        }
        Commands::Health => HealthController::health_check(&app_state)
            .await
            .map(|_| ()),
    }
}
