use crate::config::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT};
use crate::domain::ApplicationFields;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "cat",
    version,
    about = "CAT is a small application tracker",
    long_about = "Client for the CAT gRPC API server. Each command opens one connection, \
                  issues one call and exits."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Host to call the gRPC API server on
    #[arg(short = 'H', long, global = true, default_value = DEFAULT_HOST)]
    pub host: String,
    /// Port of the gRPC API server
    #[arg(short = 'P', long, global = true, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
    /// Also log connection and call lifecycle steps
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieves a single entry
    Get(UuidArgs),
    /// Retrieves all entries
    All,
    /// Deletes a single entry
    Delete(UuidArgs),
    /// Creates a new entry
    Create(CreateArgs),
    /// Print the version number of CAT
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct UuidArgs {
    /// Uuid of the application to perform the action on
    #[arg(short, long)]
    pub uuid: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the application
    #[arg(short, long, default_value = "")]
    pub name: String,
    /// Namespace of the application
    #[arg(short = 'c', long, default_value = "")]
    pub namespace: String,
    /// Description of the application
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Sources of the application, ',' separated
    #[arg(short, long, default_value = "")]
    pub sources: String,
    /// ArtifactIDs of the application, ',' separated
    #[arg(short = 'r', long = "artifactIDs", default_value = "")]
    pub artifact_ids: String,
    /// Labels of the application, ',' separated for the list, ';' separated for the key value
    #[arg(short, long, default_value = "")]
    pub labels: String,
    /// Annotations of the application, ',' separated for the list, ';' separated for the origin/key/value
    #[arg(short, long, default_value = "")]
    pub annotations: String,
}

impl GlobalArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.host.clone(), self.port)
    }
}

impl CreateArgs {
    pub fn fields(&self) -> ApplicationFields<'_> {
        ApplicationFields {
            name: &self.name,
            namespace: &self.namespace,
            description: &self.description,
            sources: &self.sources,
            artifact_ids: &self.artifact_ids,
            labels: &self.labels,
            annotations: &self.annotations,
        }
    }
}
