//! spantable CLI
//!
//! Renders a JSON document of nested records as an HTML table.
//!
//! ## Usage
//!
//! ```bash
//! spantable orders.json
//! spantable --minify --settings '{"class": "report"}' < orders.json
//! RUST_LOG=spantable_core=trace spantable orders.json
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use spantable_core::options::{DEFAULT_MAX_DEPTH, DEFAULT_SETTINGS_KEY};
use spantable_core::{RenderOptions, TableData, TableRenderer, TableSettings};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "spantable")]
#[command(about = "Render nested JSON records as an HTML table", long_about = None)]
#[command(version)]
struct Cli {
	/// JSON document to render; reads stdin when omitted or `-`
	#[arg(value_name = "INPUT")]
	input: Option<PathBuf>,

	/// Table settings as a JSON object, layered over settings in the input
	#[arg(short, long, value_name = "JSON")]
	settings: Option<String>,

	/// Write the whole table on one line
	#[arg(long)]
	minify: bool,

	/// Spaces per indentation level
	#[arg(long, value_name = "N", default_value_t = 4)]
	indent: usize,

	/// Deepest record nesting accepted
	#[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
	max_depth: usize,

	/// Member name holding table and row settings
	#[arg(long, value_name = "KEY", default_value = DEFAULT_SETTINGS_KEY)]
	settings_key: String,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

impl Cli {
	fn render_options(&self) -> RenderOptions {
		let options = RenderOptions::new()
			.indent(" ".repeat(self.indent))
			.max_depth(self.max_depth)
			.settings_key(self.settings_key.as_str());
		if self.minify { options.minify() } else { options }
	}
}

fn level_for(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

fn init_logging(verbosity: u8) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
		.init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
	match path {
		Some(path) if path != Path::new("-") => fs::read_to_string(path)
			.with_context(|| format!("failed to read {}", path.display())),
		_ => {
			let mut text = String::new();
			io::stdin()
				.read_to_string(&mut text)
				.context("failed to read stdin")?;
			Ok(text)
		}
	}
}

fn parse_settings(text: &str) -> Result<TableSettings> {
	let value: serde_json::Value =
		serde_json::from_str(text).context("--settings is not valid JSON")?;
	if !value.is_object() {
		bail!("--settings must be a JSON object");
	}
	Ok(TableSettings::from_json(value))
}

fn run(cli: &Cli) -> Result<String> {
	let options = cli.render_options();
	let settings = cli.settings.as_deref().map(parse_settings).transpose()?;

	let text = read_input(cli.input.as_deref())?;
	let data = TableData::from_json_str(&text, &options.settings_key)
		.context("input is not a document of records")?;
	tracing::info!(
		records = data.records.len(),
		embedded_settings = data.settings.is_some(),
		"loaded input"
	);

	let markup = TableRenderer::new(options)
		.render_data(&data, settings.as_ref())
		.context("failed to render table")?;
	Ok(markup.into_string())
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbosity);

	match run(&cli) {
		Ok(html) if html.is_empty() || html.ends_with('\n') => print!("{html}"),
		Ok(html) => println!("{html}"),
		Err(e) => {
			eprintln!("{} {:#}", "Error:".red().bold(), e);
			process::exit(1);
		}
	}
}
