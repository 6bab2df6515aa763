//! `jobboard`: command-line access to the job board's record backend.
//!
//! # Usage
//!
//! ```text
//! jobboard --config jobboard.toml jobs list
//! JOBBOARD_BASE_URL=https://records.example.com jobboard tasks list --status Completed
//! jobboard saved-jobs toggle 7
//! ```
//!
//! Every command prints its result as pretty JSON.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use jobboard_core::{
  RecordId,
  contact::ContactMessageInput,
  message::MessageInput,
  task::{TaskInput, TaskStatus},
};
use jobboard_http::HttpClient;
use jobboard_records::{JobBoard, SavedItems, StatusFilter, mapper::Bookmark};
use serde::Serialize;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "jobboard", version, about = "Job board records from the command line")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "jobboard.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Job postings.
  #[command(subcommand)]
  Jobs(JobsCmd),
  /// Candidate profiles.
  #[command(subcommand)]
  Candidates(CandidatesCmd),
  /// Hiring companies.
  #[command(subcommand)]
  Companies(ListCmd),
  /// Applications of candidates to jobs.
  #[command(subcommand)]
  Applications(ListCmd),
  /// Conversation summaries.
  #[command(subcommand)]
  Conversations(ListCmd),
  /// Messages inside a conversation.
  #[command(subcommand)]
  Messages(MessagesCmd),
  /// Recruiter tasks.
  #[command(subcommand)]
  Tasks(TasksCmd),
  /// Jobs saved by the configured user.
  #[command(subcommand)]
  SavedJobs(SavedCmd),
  /// Candidates saved by the configured user.
  #[command(subcommand)]
  SavedCandidates(SavedCmd),
  /// Submit the contact form.
  Contact(ContactArgs),
}

#[derive(Subcommand, Debug)]
enum ListCmd {
  List,
}

#[derive(Subcommand, Debug)]
enum JobsCmd {
  List,
  Show { id: RecordId },
  Delete { id: RecordId },
}

#[derive(Subcommand, Debug)]
enum CandidatesCmd {
  List,
  Show { id: RecordId },
}

#[derive(Subcommand, Debug)]
enum MessagesCmd {
  /// Messages of one conversation, oldest first.
  List { conversation: RecordId },
  Send {
    conversation: RecordId,
    content:      String,
    /// Sender id; defaults to the configured user.
    #[arg(long)]
    sender:       Option<RecordId>,
  },
  /// Mark a message as read.
  Read { id: RecordId },
}

#[derive(Subcommand, Debug)]
enum TasksCmd {
  List {
    /// `All`, `New`, `In Progress`, `Completed` or `Blocked`.
    #[arg(long, default_value = "All")]
    status: String,
  },
  Add {
    title:       String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    status:      Option<String>,
    /// Due date as `YYYY-MM-DD`.
    #[arg(long)]
    due:         Option<NaiveDate>,
  },
  /// Mark a task completed.
  Done { id: RecordId },
  Stats,
}

#[derive(Subcommand, Debug)]
enum SavedCmd {
  List,
  /// Save if absent, remove if present. Prints whether it is saved now.
  Toggle { id: RecordId },
  Count,
}

#[derive(Args, Debug)]
struct ContactArgs {
  #[arg(long)]
  name:    String,
  #[arg(long)]
  email:   String,
  #[arg(long)]
  subject: String,
  #[arg(long)]
  message: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let settings = Settings::load(&cli.config)?;
  let user_id = settings.user_id()?;
  let client = HttpClient::new(settings.client_config())
    .context("failed to build record client")?;
  let board = JobBoard::new(Arc::new(client), user_id);

  run(&board, user_id, cli.command).await
}

async fn run(
  board: &JobBoard<HttpClient>,
  user_id: RecordId,
  command: Command,
) -> Result<()> {
  match command {
    Command::Jobs(JobsCmd::List) => print(&board.jobs.list().await),
    Command::Jobs(JobsCmd::Show { id }) => print(
      &board
        .jobs
        .get_by_id(id)
        .await
        .with_context(|| format!("loading job {id}"))?,
    ),
    Command::Jobs(JobsCmd::Delete { id }) => print(
      &board
        .jobs
        .delete(id)
        .await
        .with_context(|| format!("deleting job {id}"))?,
    ),

    Command::Candidates(CandidatesCmd::List) => {
      print(&board.candidates.list().await)
    }
    Command::Candidates(CandidatesCmd::Show { id }) => print(
      &board
        .candidates
        .get_by_id(id)
        .await
        .with_context(|| format!("loading candidate {id}"))?,
    ),

    Command::Companies(ListCmd::List) => print(&board.companies.list().await),
    Command::Applications(ListCmd::List) => {
      print(&board.applications.list().await)
    }
    Command::Conversations(ListCmd::List) => {
      print(&board.messaging.list_conversations().await)
    }

    Command::Messages(MessagesCmd::List { conversation }) => {
      print(&board.messaging.thread(conversation).await)
    }
    Command::Messages(MessagesCmd::Send {
      conversation,
      content,
      sender,
    }) => {
      let input = MessageInput {
        conversation_id: Some(conversation),
        sender_id: Some(sender.unwrap_or(user_id)),
        content: Some(content),
        ..MessageInput::default()
      };
      let sent = board
        .messaging
        .send(&input)
        .await
        .context("sending message")?;
      let Some(sent) = sent else {
        bail!("the backend did not store the message");
      };
      print(&sent)
    }
    Command::Messages(MessagesCmd::Read { id }) => print(
      &board
        .messaging
        .mark_as_read(id)
        .await
        .with_context(|| format!("marking message {id} as read"))?,
    ),

    Command::Tasks(TasksCmd::List { status }) => print(
      &board
        .tasks
        .list_filtered(&StatusFilter::from(status.as_str()))
        .await,
    ),
    Command::Tasks(TasksCmd::Add {
      title,
      description,
      status,
      due,
    }) => {
      let input = TaskInput {
        title: Some(title),
        description,
        status: status.as_deref().map(TaskStatus::from),
        due_date: due,
        ..TaskInput::default()
      };
      let Some(task) = board.tasks.create(&input).await.context("adding task")?
      else {
        bail!("the backend did not store the task");
      };
      print(&task)
    }
    Command::Tasks(TasksCmd::Done { id }) => {
      let Some(task) = board
        .tasks
        .set_status(id, TaskStatus::Completed)
        .await
        .with_context(|| format!("completing task {id}"))?
      else {
        bail!("the backend did not update task {id}");
      };
      print(&task)
    }
    Command::Tasks(TasksCmd::Stats) => print(&board.tasks.get_stats().await),

    Command::SavedJobs(cmd) => saved(&board.saved_jobs, cmd).await,
    Command::SavedCandidates(cmd) => saved(&board.saved_candidates, cmd).await,

    Command::Contact(args) => {
      let input = ContactMessageInput {
        name:    args.name,
        email:   args.email,
        subject: args.subject,
        message: args.message,
      };
      let Some(submitted) = board
        .contact
        .submit(&input)
        .await
        .context("submitting contact form")?
      else {
        bail!("the backend did not store the submission");
      };
      print(&submitted)
    }
  }
}

async fn saved<B>(items: &SavedItems<HttpClient, B>, cmd: SavedCmd) -> Result<()>
where
  B: Bookmark + Serialize,
{
  match cmd {
    SavedCmd::List => print(&items.list().await),
    SavedCmd::Toggle { id } => print(
      &items
        .toggle(id)
        .await
        .with_context(|| format!("toggling saved item {id}"))?,
    ),
    SavedCmd::Count => print(&items.count().await),
  }
}

fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  let json = serde_json::to_string_pretty(value).context("serialising output")?;
  println!("{json}");
  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_is_well_formed() { Cli::command().debug_assert(); }

  #[test]
  fn parses_nested_subcommands() {
    let cli = Cli::try_parse_from([
      "jobboard", "tasks", "add", "Draft offer letter", "--due", "2024-01-01",
    ])
    .unwrap();
    match cli.command {
      Command::Tasks(TasksCmd::Add { title, due, .. }) => {
        assert_eq!(title, "Draft offer letter");
        assert_eq!(due, NaiveDate::from_ymd_opt(2024, 1, 1));
      }
      other => panic!("unexpected command {other:?}"),
    }

    assert!(Cli::try_parse_from(["jobboard", "saved-jobs", "toggle", "0"]).is_err());
  }
}
