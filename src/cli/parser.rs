use crate::db::BackendKind;
use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to track student attendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance tracker: register students, mark daily attendance and export reports",
    long_about = None
)]
pub struct Cli {
    /// Override storage file path (useful for tests or custom storage)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Storage backend (default: from config, or guessed from the --db extension)
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<BackendKind>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the storage and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the storage (info, integrity checks, cleanup)
    Db {
        #[arg(long = "info", help = "Show storage information")]
        info: bool,

        #[arg(
            long = "check",
            help = "Check stored data (parse errors, orphaned or duplicate records)"
        )]
        check: bool,

        #[arg(
            long = "prune",
            help = "Remove attendance records that reference no student"
        )]
        prune: bool,

        #[arg(long = "vacuum", help = "Optimize the SQLite storage using VACUUM")]
        vacuum: bool,
    },

    /// Register a new student
    Add {
        /// Student name
        name: String,

        /// Roll number
        roll_no: String,
    },

    /// List registered students
    Students,

    /// Delete a student (and all their attendance records)
    Del {
        /// Student id or roll number
        student: String,

        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Mark attendance for a day
    Mark {
        /// Day to mark (YYYY-MM-DD, default: today)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Students present (id or roll number)
        #[arg(long, short = 'p', num_args = 1.., value_name = "STUDENT")]
        present: Vec<String>,

        /// Students absent (id or roll number)
        #[arg(long, short = 'a', num_args = 1.., value_name = "STUDENT")]
        absent: Vec<String>,

        /// Flip a student's status (unmarked becomes present)
        #[arg(long, value_name = "STUDENT", conflicts_with_all = ["present", "absent", "all_present"])]
        toggle: Option<String>,

        /// Mark every registered student present
        #[arg(long = "all-present", conflicts_with_all = ["present", "absent"])]
        all_present: bool,
    },

    /// Show the attendance sheet for a day, or one student's history
    Show {
        /// Day to show (YYYY-MM-DD, default: today)
        #[arg(long, short = 'd', conflicts_with = "student")]
        date: Option<String>,

        /// Show the history of one student (id or roll number)
        #[arg(long, short = 's')]
        student: Option<String>,
    },

    /// Summary of today's attendance and the overall average
    Dashboard {
        /// Day to summarize (YYYY-MM-DD, default: today)
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Per-student attendance report
    Report {
        /// Only count records in this period.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD and ranges of the
        /// same shape (YYYY-MM:YYYY-MM, ...), or `all`.
        #[arg(long, short = 'r', value_name = "RANGE")]
        range: Option<String>,
    },

    /// Create a backup copy of the storage file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup as .zip
        #[arg(long)]
        compress: bool,

        /// Overwrite an existing backup without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the per-student attendance report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: attendance-report-<today>.<ext>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(
            long,
            short = 'r',
            value_name = "RANGE",
            help = "Only count records in a year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
