use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lifeboard")]
#[command(version, about = "Offline-first personal dashboard in your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the task list
    Task(TaskCommand),

    /// Quick-capture notes
    Note(NoteCommand),

    /// Daily habits and streaks
    Habit(HabitCommand),

    /// Goals with percent progress
    Goal(GoalCommand),

    /// Daily weight and sleep log
    Health(HealthCommand),

    /// Income/expense ledger
    Tx(TxCommand),

    /// Agenda events
    Event(EventCommand),

    /// One journal entry per day
    Journal(JournalCommand),

    /// Write a full backup document
    Export {
        /// Destination file; prints to stdout when omitted
        path: Option<PathBuf>,
    },

    /// Apply a backup document (only the fields it contains)
    Import {
        /// Backup file to read
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Add a task
    Add { text: String },

    /// Toggle a task done/undone
    Toggle { id: String },

    /// Delete a task
    Rm { id: String },

    /// List tasks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct NoteCommand {
    #[command(subcommand)]
    pub action: NoteAction,
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Capture a note
    Add { text: String },

    /// Delete a note
    Rm { id: String },

    /// List notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct HabitCommand {
    #[command(subcommand)]
    pub action: HabitAction,
}

#[derive(Subcommand, Debug)]
pub enum HabitAction {
    /// Add a habit
    Add { name: String },

    /// Toggle today's mark for a habit
    Toggle { id: String },

    /// Delete a habit
    Rm { id: String },

    /// List habits with their current streaks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct GoalCommand {
    #[command(subcommand)]
    pub action: GoalAction,
}

#[derive(Subcommand, Debug)]
pub enum GoalAction {
    /// Add a goal
    Add { name: String },

    /// Set a goal's progress (0-100, clamped)
    Set { id: String, progress: String },

    /// Delete a goal
    Rm { id: String },

    /// List goals
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct HealthCommand {
    #[command(subcommand)]
    pub action: HealthAction,
}

#[derive(Subcommand, Debug)]
pub enum HealthAction {
    /// Record today's weight or sleep
    Set {
        /// Field to set: weight or sleep
        field: String,
        value: String,
    },

    /// Show the last seven days
    Week,
}

#[derive(Args, Debug)]
pub struct TxCommand {
    #[command(subcommand)]
    pub action: TxAction,
}

#[derive(Subcommand, Debug)]
pub enum TxAction {
    /// Book a transaction on today's date
    Add {
        /// Amount; zero or non-numeric input books nothing
        amount: String,

        /// income or expense
        #[arg(long, default_value = "expense")]
        kind: String,

        #[arg(long, default_value = "")]
        category: String,

        #[arg(long, default_value = "")]
        note: String,
    },

    /// Delete a transaction
    Rm { id: String },

    /// List transactions
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show monthly income/expense/net
    Totals {
        /// Month key like 2024-03; defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct EventCommand {
    #[command(subcommand)]
    pub action: EventAction,
}

#[derive(Subcommand, Debug)]
pub enum EventAction {
    /// Add an event
    Add {
        title: String,

        /// Day key like 2024-03-15; defaults to today
        #[arg(long, default_value = "")]
        date: String,

        #[arg(long, default_value = "")]
        time: String,

        #[arg(long, default_value = "")]
        note: String,
    },

    /// Delete an event
    Rm { id: String },

    /// List events
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct JournalCommand {
    #[command(subcommand)]
    pub action: JournalAction,
}

#[derive(Subcommand, Debug)]
pub enum JournalAction {
    /// Overwrite today's journal entry
    Write { text: String },

    /// Show one day's entry
    Show {
        /// Day key like 2024-03-15; defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}
