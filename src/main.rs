use clap::Parser;
use lifeboard::cli::{
    handle_event_add, handle_event_list, handle_event_rm, handle_export, handle_goal_add,
    handle_goal_list, handle_goal_rm, handle_goal_set, handle_habit_add, handle_habit_list,
    handle_habit_rm, handle_habit_toggle, handle_health_set, handle_health_week, handle_import,
    handle_journal_show, handle_journal_write, handle_note_add, handle_note_list, handle_note_rm,
    handle_task_add, handle_task_list, handle_task_rm, handle_task_toggle, handle_tx_add,
    handle_tx_list, handle_tx_rm, handle_tx_totals, Cli, Commands, EventAction, GoalAction,
    HabitAction, HealthAction, JournalAction, NoteAction, TaskAction, TxAction,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Task(cmd) => match cmd.action {
            TaskAction::Add { text } => handle_task_add(text),
            TaskAction::Toggle { id } => handle_task_toggle(id),
            TaskAction::Rm { id } => handle_task_rm(id),
            TaskAction::List { json } => handle_task_list(json),
        },
        Commands::Note(cmd) => match cmd.action {
            NoteAction::Add { text } => handle_note_add(text),
            NoteAction::Rm { id } => handle_note_rm(id),
            NoteAction::List { json } => handle_note_list(json),
        },
        Commands::Habit(cmd) => match cmd.action {
            HabitAction::Add { name } => handle_habit_add(name),
            HabitAction::Toggle { id } => handle_habit_toggle(id),
            HabitAction::Rm { id } => handle_habit_rm(id),
            HabitAction::List { json } => handle_habit_list(json),
        },
        Commands::Goal(cmd) => match cmd.action {
            GoalAction::Add { name } => handle_goal_add(name),
            GoalAction::Set { id, progress } => handle_goal_set(id, progress),
            GoalAction::Rm { id } => handle_goal_rm(id),
            GoalAction::List { json } => handle_goal_list(json),
        },
        Commands::Health(cmd) => match cmd.action {
            HealthAction::Set { field, value } => handle_health_set(field, value),
            HealthAction::Week => handle_health_week(),
        },
        Commands::Tx(cmd) => match cmd.action {
            TxAction::Add {
                amount,
                kind,
                category,
                note,
            } => handle_tx_add(amount, kind, category, note),
            TxAction::Rm { id } => handle_tx_rm(id),
            TxAction::List { json } => handle_tx_list(json),
            TxAction::Totals { month } => handle_tx_totals(month),
        },
        Commands::Event(cmd) => match cmd.action {
            EventAction::Add {
                title,
                date,
                time,
                note,
            } => handle_event_add(title, date, time, note),
            EventAction::Rm { id } => handle_event_rm(id),
            EventAction::List { json } => handle_event_list(json),
        },
        Commands::Journal(cmd) => match cmd.action {
            JournalAction::Write { text } => handle_journal_write(text),
            JournalAction::Show { date } => handle_journal_show(date),
        },
        Commands::Export { path } => handle_export(path),
        Commands::Import { path } => handle_import(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
