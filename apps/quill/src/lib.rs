pub mod controller;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use quill_domain::{Clock, SystemClock};
use quill_service::NotesService;

use crate::{
	controller::{NoteForm, NotesController},
	render::Page,
};

#[derive(Debug, Parser)]
#[command(
	version = quill_cli::VERSION,
	rename_all = "kebab",
	styles = quill_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// Remote notes API base URL. Overrides the config file and environment.
	#[arg(long, value_name = "URL")]
	pub api_base: Option<String>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Show notes, most recently updated first.
	List {
		/// Case-insensitive filter over title and content.
		#[arg(long, short = 's', value_name = "QUERY")]
		search: Option<String>,
	},
	/// Create a note.
	Add {
		#[arg(long, short = 't')]
		title: String,
		#[arg(long, short = 'b')]
		content: Option<String>,
	},
	/// Change the title or content of a note.
	Edit {
		id: String,
		#[arg(long, short = 't')]
		title: Option<String>,
		#[arg(long, short = 'b')]
		content: Option<String>,
	},
	/// Delete a note.
	Rm { id: String },
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = quill_config::resolve(args.config.as_deref(), args.api_base.as_deref())?;
	init_tracing(&config)?;
	let service = NotesService::from_config(&config)?;
	let mut controller = NotesController::new(service);

	controller.mount().await;

	match args.command {
		Command::List { search } => {
			if let Some(query) = search {
				controller.set_search(query);
			}
		},
		Command::Add { title, content } => {
			controller.open_new();
			controller.submit(&NoteForm::new(title, content.unwrap_or_default())).await;
		},
		Command::Edit { id, title, content } => {
			let Some(mut form) = controller.open_edit(&id) else {
				return Err(eyre::eyre!("No note with id {id}."));
			};

			if let Some(title) = title {
				form.title = title;
			}
			if let Some(content) = content {
				form.content = content;
			}

			controller.submit(&form).await;
		},
		Command::Rm { id } => {
			controller.delete(&id).await;
		},
	}

	if let Some(message) = controller.form_error() {
		return Err(eyre::eyre!(message.to_string()));
	}

	print!("{}", Page::new(&controller, SystemClock.now_ms()));

	Ok(())
}

fn init_tracing(config: &quill_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
	Ok(())
}
