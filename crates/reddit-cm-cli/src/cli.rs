use clap::{Args, Parser, Subcommand, ValueEnum};
use reddit_cm_core::CredentialOverrides;
use reddit_cm_persistence::DocumentFormat;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "communities.json";
const DEFAULT_YAML_OUTPUT: &str = "communities.yaml";

#[derive(Parser)]
#[command(name = "reddit-cm")]
#[command(
    about = "Reddit Community Manager - Export and import your joined Reddit communities",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Print machine-readable JSON responses instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export your joined communities to JSON or YAML
    Export(ExportArgs),
    /// Join the communities listed in an exported file
    Import(ImportArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    /// Configuration file (JSON, YAML or TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Reddit API client ID
    #[arg(long, env = "REDDIT_CLIENT_ID")]
    pub client_id: Option<String>,
    /// Reddit API client secret
    #[arg(long, env = "REDDIT_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,
    /// Reddit username
    #[arg(long, env = "REDDIT_USERNAME")]
    pub username: Option<String>,
    /// Reddit password
    #[arg(long, env = "REDDIT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// User agent string
    #[arg(long, env = "REDDIT_USER_AGENT")]
    pub user_agent: Option<String>,
    #[arg(long, env = "REDDIT_CM_AUTH_BASE", hide = true)]
    pub auth_base: Option<String>,
    #[arg(long, env = "REDDIT_CM_API_BASE", hide = true)]
    pub api_base: Option<String>,
}

impl CredentialArgs {
    pub fn overrides(&self) -> CredentialOverrides {
        CredentialOverrides {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for DocumentFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Yaml => DocumentFormat::Yaml,
        }
    }
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
    /// Export format (json or yaml)
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,
    /// Output file path [default: communities.json]
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// The default output follows the chosen format's extension.
    pub fn output_path(&self) -> PathBuf {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        if self.format == FormatArg::Yaml && output == PathBuf::from(DEFAULT_OUTPUT) {
            PathBuf::from(DEFAULT_YAML_OUTPUT)
        } else {
            output
        }
    }
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to exported JSON or YAML file containing communities to import
    #[arg(value_name = "IMPORT_FILE")]
    pub file: PathBuf,
    #[command(flatten)]
    pub credentials: CredentialArgs,
    /// Preview what would be imported without actually joining communities
    #[arg(long)]
    pub dry_run: bool,
}
