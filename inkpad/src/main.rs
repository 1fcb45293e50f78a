use anyhow::Result;
use clap::Parser;
use inkpad::app::Inkpad;
use inkpad::cli::{Cli, Commands, DocCommands, FolderCommands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let app = Inkpad::new(&cli.api_url);

    match cli.command {
        Commands::Folders(args) => match args.command {
            None => app.list_folders().await?,
            Some(FolderCommands::Create { name }) => app.create_folder(&name).await?,
            Some(FolderCommands::Delete { id }) => app.delete_folder(&id).await?,
        },
        Commands::Docs(args) => match args.command {
            DocCommands::List { folder_id } => app.list_documents(&folder_id).await?,
            DocCommands::Show { id } => app.show_document(&id).await?,
            DocCommands::Create {
                title,
                content,
                folder,
            } => app.create_document(&title, &content, &folder).await?,
            DocCommands::Edit { id, content } => app.update_document(&id, &content).await?,
            DocCommands::Delete { id } => app.delete_document(&id).await?,
        },
        Commands::Search(args) => app.search(&args.query).await?,
        Commands::History(_) => app.show_history().await?,
    }

    Ok(())
}
