use crate::cli::{Cli, Commands, CreateArgs, UuidArgs};
use crate::domain::build_application;
use crate::error::Operation;
use crate::invoker::Invoker;
use crate::proto::{
    API_VERSION, Application, CreateRequest, DeleteRequest, ReadAllRequest, ReadRequest,
};
use anyhow::Result;

pub async fn run(cli: Cli) -> Result<()> {
    // Building the invoker does not connect; `version` never calls it.
    let invoker = Invoker::new(cli.global.client_config());
    let summary = match cli.command {
        Commands::Create(args) => cmd_create(&invoker, &args).await?,
        Commands::Get(args) => cmd_get(&invoker, &args).await?,
        Commands::Delete(args) => cmd_delete(&invoker, &args).await?,
        Commands::All => cmd_all(&invoker).await?,
        Commands::Version => version(),
    };

    println!("{summary}");
    Ok(())
}

pub fn version() -> String {
    format!("CAT {}", env!("CARGO_PKG_VERSION"))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub async fn cmd_create(invoker: &Invoker, args: &CreateArgs) -> Result<String> {
    let application = build_application(&args.fields());
    tracing::info!(
        name = %application.name,
        namespace = %application.namespace,
        address = %invoker.config().address(),
        "creating application"
    );

    let message = CreateRequest {
        api: API_VERSION.to_string(),
        application: Some(application.clone()),
    };
    let response = invoker
        .call(Operation::Create, |mut client| async move {
            client.create(message).await
        })
        .await?;

    Ok(create_summary(&response.uuid, &application))
}

pub async fn cmd_get(invoker: &Invoker, args: &UuidArgs) -> Result<String> {
    let message = ReadRequest {
        api: API_VERSION.to_string(),
        uuid: args.uuid.clone(),
    };
    let response = invoker
        .call(Operation::Read, |mut client| async move {
            client.read(message).await
        })
        .await?;

    Ok(read_summary(response.application.as_ref()))
}

pub async fn cmd_delete(invoker: &Invoker, args: &UuidArgs) -> Result<String> {
    let message = DeleteRequest {
        api: API_VERSION.to_string(),
        uuid: args.uuid.clone(),
    };
    let response = invoker
        .call(Operation::Delete, |mut client| async move {
            client.delete(message).await
        })
        .await?;

    Ok(delete_summary(response.deleted))
}

pub async fn cmd_all(invoker: &Invoker) -> Result<String> {
    let message = ReadAllRequest {
        api: API_VERSION.to_string(),
    };
    let response = invoker
        .call(Operation::ReadAll, |mut client| async move {
            client.read_all(message).await
        })
        .await?;

    Ok(read_all_summary(&response.applications))
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

pub fn create_summary(uuid: &str, application: &Application) -> String {
    format!("create result: id={uuid}, application={application:?}")
}

pub fn read_summary(application: Option<&Application>) -> String {
    let uuid = application.map(|app| app.uuid.as_str()).unwrap_or_default();
    format!("read result: id={uuid}, application={application:?}")
}

pub fn delete_summary(deleted: bool) -> String {
    format!("delete result: deleted={deleted}")
}

pub fn read_all_summary(applications: &[Application]) -> String {
    format!(
        "read all result: count={}, applications={applications:?}",
        applications.len()
    )
}
