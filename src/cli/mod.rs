// src/cli/mod.rs
//! Command-line surface: a thin presentation consumer of the state core.
//! Handlers open the dashboard, call one mutation or read, and print.

mod commands;
mod handlers;

pub use commands::{
    Cli, Commands, EventAction, EventCommand, GoalAction, GoalCommand, HabitAction, HabitCommand,
    HealthAction, HealthCommand, JournalAction, JournalCommand, NoteAction, NoteCommand,
    TaskAction, TaskCommand, TxAction, TxCommand,
};
pub use handlers::{
    handle_event_add, handle_event_list, handle_event_rm, handle_export, handle_goal_add,
    handle_goal_list, handle_goal_rm, handle_goal_set, handle_habit_add, handle_habit_list,
    handle_habit_rm, handle_habit_toggle, handle_health_set, handle_health_week, handle_import,
    handle_journal_show, handle_journal_write, handle_note_add, handle_note_list, handle_note_rm,
    handle_task_add, handle_task_list, handle_task_rm, handle_task_toggle, handle_tx_add,
    handle_tx_list, handle_tx_rm, handle_tx_totals,
};
