use clap::{Args, Parser, Subcommand};

/// Inkpad: organize markdown documents in folders on a remote store.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the remote document API.
    #[arg(
        long,
        global = true,
        env = "INKPAD_API_URL",
        default_value = "http://localhost:3000"
    )]
    pub api_url: String,

    /// Increase verbosity (use multiple times for more).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List folders, or create/delete one.
    Folders(FoldersArgs),
    /// Work with the documents in a folder.
    Docs(DocsArgs),
    /// Search documents by keyword.
    Search(SearchArgs),
    /// Show the recently viewed documents.
    History(HistoryArgs),
}

#[derive(Args, Debug)]
pub struct FoldersArgs {
    #[command(subcommand)]
    pub command: Option<FolderCommands>,
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// Create a new folder.
    Create {
        /// Name of the folder.
        name: String,
    },
    /// Delete a folder by id.
    Delete {
        /// Id of the folder to delete.
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct DocsArgs {
    #[command(subcommand)]
    pub command: DocCommands,
}

#[derive(Subcommand, Debug)]
pub enum DocCommands {
    /// List the documents in a folder.
    List {
        /// Id of the folder to list.
        folder_id: String,
    },
    /// Show a full document; the view is recorded in history.
    Show {
        /// Id of the document to show.
        id: String,
    },
    /// Create a document in a folder.
    Create {
        /// Title of the new document.
        title: String,
        /// Markdown content; empty when omitted.
        #[arg(long, default_value = "")]
        content: String,
        /// Id of the folder to file the document under.
        #[arg(long)]
        folder: String,
    },
    /// Replace a document's content.
    Edit {
        /// Id of the document to edit.
        id: String,
        /// New markdown content.
        content: String,
    },
    /// Delete a document by id.
    Delete {
        /// Id of the document to delete.
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword to search for.
    pub query: String,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {}
