use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtracker
/// CLI application to track projects and hierarchical work items
#[derive(Parser)]
#[command(
    name = "rtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple project tracker CLI: epics, stories, tasks and subtasks with rollup progress, Jira sync and pluggable storage",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,
    },

    /// Manage the SQLite database (integrity checks, maintenance)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long, default_value = "20", help = "How many rows to show")]
        limit: usize,
    },

    /// Create a new project
    New {
        /// Project name
        name: String,

        #[arg(long, default_value = "", help = "Project description")]
        description: String,

        #[arg(long = "start", help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "end", help = "End date (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long, default_value = "planning", help = "planning | in-progress | completed")]
        status: String,
    },

    /// List projects with rollup progress
    Projects,

    /// Add a work item to a project
    Add {
        /// Project id
        #[arg(long)]
        project: i64,

        /// Item name
        name: String,

        #[arg(long = "type", default_value = "epic", help = "epic | story | task | subtask")]
        item_type: String,

        #[arg(long, help = "Parent item id (required for story/task/subtask)")]
        parent: Option<i64>,

        #[arg(long, default_value = "pending", help = "pending | in-progress | review")]
        status: String,

        #[arg(long, default_value = "medium", help = "low | medium | high")]
        priority: String,

        #[arg(long, default_value = "")]
        assignee: String,

        #[arg(long = "start", help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "end", help = "End date (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long = "estimate", default_value = "0", help = "Estimated hours")]
        estimated_hours: f64,

        #[arg(long = "actual", default_value = "0", help = "Actual hours")]
        actual_hours: f64,

        #[arg(long = "jira", help = "Also create a Jira issue and link it")]
        jira: bool,
    },

    /// Delete a work item and its whole subtree
    Del {
        #[arg(long)]
        project: i64,

        /// Item id to delete
        item: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Update the status of a work item
    Status {
        #[arg(long)]
        project: i64,

        /// Item id
        item: i64,

        /// New status: pending | in-progress | review
        status: String,
    },

    /// Append a comment to a work item
    Comment {
        #[arg(long)]
        project: i64,

        /// Item id
        item: i64,

        /// Comment text
        text: String,

        #[arg(long, default_value = "", help = "Comment author")]
        author: String,

        #[arg(long = "jira", help = "Also post the comment to the linked Jira issue")]
        jira: bool,
    },

    /// Show a project's item tree with rollup progress and hours
    Show {
        /// Project id
        project: i64,

        #[arg(long, help = "Show rollup hours next to each item")]
        hours: bool,
    },

    /// Dashboard counters across all projects
    Stats,

    /// Import items from a CSV spreadsheet
    Import {
        #[arg(long)]
        project: i64,

        /// Spreadsheet file (CSV)
        file: String,

        #[arg(long = "yes", short = 'y', help = "Skip the preview confirmation")]
        yes: bool,
    },

    /// Export a backup (json) or a flat item report (csv, xlsx)
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export a flat item report instead of a full backup")]
        report: bool,
    },

    /// Restore projects (and Jira connection) from a JSON backup
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Create or import a share link
    Share {
        #[arg(long = "make", help = "Encode the current projects into a share link")]
        make: bool,

        #[arg(long = "from", value_name = "LINK", help = "Import projects from a share link or blob")]
        from: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Manage the Jira connection and exchange issues
    Jira {
        #[arg(long, help = "Save the Jira connection (requires --url --email --token --project-key)")]
        connect: bool,

        #[arg(long, help = "Forget the saved Jira connection")]
        disconnect: bool,

        #[arg(long, help = "Verify the saved credentials against the server")]
        test: bool,

        #[arg(long = "import", help = "Import the project key's latest issues into --project")]
        import: bool,

        #[arg(long, help = "Target local project id for --import")]
        project: Option<i64>,

        #[arg(long, help = "Jira base URL, e.g. https://acme.atlassian.net")]
        url: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long = "token")]
        api_token: Option<String>,

        #[arg(long = "project-key", help = "Default Jira project key, e.g. ACME")]
        project_key: Option<String>,

        #[arg(long = "auto-sync", help = "Push status changes to Jira automatically")]
        auto_sync: bool,

        #[arg(long = "yes", short = 'y', help = "Skip the preview confirmation on --import")]
        yes: bool,
    },

    /// Synchronize with the remote team server
    Sync {
        #[arg(long, help = "Replace local projects with the remote snapshot (last fetch wins)")]
        pull: bool,

        #[arg(long, help = "Upsert every local project to the remote server")]
        push: bool,

        #[arg(long, help = "Poll --pull on a fixed interval until interrupted")]
        watch: bool,

        #[arg(long, help = "Probe the remote /api/health endpoint")]
        status: bool,

        #[arg(long, help = "Poll interval in seconds (defaults to the configured value)")]
        interval: Option<u64>,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt on --pull")]
        yes: bool,
    },

    /// List public holidays for a year from the remote server
    Holidays {
        /// Year, e.g. 2026
        year: i32,
    },

    /// Delete all projects and the saved Jira connection
    Clear {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
