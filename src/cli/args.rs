use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focusdo")]
#[command(about = "A to-do list with a distraction-free focus mode")]
#[command(long_about = "focusdo - a to-do list with a distraction-free focus mode

Capture tasks, sort them into day/week/later, and run timed focus
sessions over today's tasks.

QUICK START:
  focusdo add \"Write report\"       Add a task for today
  focusdo day                      Show today's tasks
  focusdo done 3                   Mark task 3 as done
  focusdo focus                    Start a focus session

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focusdo <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. When omitted, the
    /// default_output from config.yaml applies (pretty out of the box).
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    ///
    /// Creates a task in the day list by default. Use --category to file
    /// it under week or later instead.
    ///
    /// # Examples
    ///
    ///   focusdo add "Buy milk"
    ///   focusdo add "Quarterly review" --category week --priority high
    ///   focusdo add "Call mom" --due tomorrow --estimate 15
    ///   focusdo add "Fix login bug" --note "see issue #42" --due "12/01 14:00"
    #[command(alias = "a")]
    Add(AddArgs),

    /// List tasks
    ///
    /// Shows open tasks across all categories. Use --all to include
    /// completed tasks, or --category to restrict to one list.
    ///
    /// # Examples
    ///
    ///   focusdo list              List open tasks
    ///   focusdo ls --all          Include done tasks
    ///   focusdo list -c week      Only the week list
    ///   focusdo list -o json      Output as JSON for scripting
    #[command(alias = "ls")]
    List(ListArgs),

    /// List today's tasks
    ///
    /// Shows the day list, the set of tasks a focus session runs over.
    ///
    /// # Examples
    ///
    ///   focusdo day               Show today's tasks
    ///   focusdo d -o json         Output as JSON
    #[command(alias = "d")]
    Day {
        /// Include completed tasks
        #[arg(long, short = 'a')]
        all: bool,
    },

    /// Show details of a specific task
    ///
    /// # Examples
    ///
    ///   focusdo show 3
    ///   focusdo show 3 -o json
    Show {
        /// Task id (shown in list output)
        id: i64,
    },

    /// Toggle a task between done and open
    ///
    /// Marks an open task as done, or re-opens a completed one.
    ///
    /// # Examples
    ///
    ///   focusdo done 3
    Done {
        /// Task id to toggle
        id: i64,
    },

    /// Delete a task
    ///
    /// Removes the task permanently. There is no undo.
    ///
    /// # Examples
    ///
    ///   focusdo delete 3
    #[command(alias = "rm")]
    Delete {
        /// Task id to delete
        id: i64,
    },

    /// Run a focus session over today's tasks
    ///
    /// Opens a full-screen session view with a running clock, a progress
    /// bar, and the remaining tasks. Tick off tasks as you finish them;
    /// the session ends when everything is done or you quit.
    ///
    /// # Keybindings
    ///
    ///   j/k or arrows  Navigate tasks
    ///   Enter/Space    Mark selected task done
    ///   q/Esc          End the session
    ///
    /// # Examples
    ///
    ///   focusdo focus
    #[command(alias = "f")]
    Focus,

    /// Launch the interactive Terminal User Interface (TUI)
    ///
    /// Full-screen view of all tasks with keyboard navigation.
    /// Browse, toggle, and delete tasks without leaving the terminal.
    ///
    /// # Keybindings
    ///
    ///   j/k or arrows  Navigate up/down
    ///   Enter/Space    Toggle selected task
    ///   d              Delete selected task
    ///   f              Start a focus session
    ///   q/Esc          Quit TUI
    ///
    /// # Example
    ///
    ///   focusdo tui
    Tui,

    /// Generate shell completions
    ///
    /// Outputs a completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// # Examples
    ///
    ///   focusdo completions bash > ~/.bash_completion.d/focusdo
    ///   focusdo completions zsh > ~/.zfunc/_focusdo
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

/// Arguments for adding a task.
#[derive(Args)]
pub struct AddArgs {
    /// Task title (required)
    pub title: String,

    /// Note or description for the task
    #[arg(short, long)]
    pub note: Option<String>,

    /// Due date
    ///
    /// Accepts: today, tomorrow, "in 3 days", "in 2 weeks", or dd/mm[/yyyy]
    /// with an optional time: "25/12 14:30".
    #[arg(short, long)]
    pub due: Option<String>,

    /// Priority (low, normal, high, veryhigh)
    #[arg(short, long, default_value = "normal")]
    pub priority: String,

    /// Category (day, week, later)
    #[arg(short, long, default_value = "day")]
    pub category: String,

    /// Time estimate in minutes
    #[arg(short, long)]
    pub estimate: Option<u32>,
}

/// Arguments for listing tasks.
#[derive(Args)]
pub struct ListArgs {
    /// Restrict to one category (day, week, later)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Include completed tasks
    #[arg(long, short = 'a')]
    pub all: bool,
}
