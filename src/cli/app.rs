//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{render_cmd, sidebar_cmd};
use crate::storage::{self, Config, Project};

#[derive(Parser)]
#[command(name = "sidebar")]
#[command(author, version, about = "Manage shortcode-rendered widget sidebars")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config setting)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new sidebar project
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Create a new custom sidebar
    Add {
        /// Display name for the sidebar
        name: String,

        #[command(flatten)]
        fields: sidebar_cmd::FieldArgs,

        /// Refuse to save when another sidebar already uses the slug
        #[arg(long)]
        unique_slug: bool,
    },

    /// List sidebars with their shortcodes
    List,

    /// Show one sidebar's full definition
    Show {
        /// Sidebar ID
        id: String,
    },

    /// Edit an existing sidebar (unspecified fields keep their values)
    Edit {
        /// Sidebar ID
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: sidebar_cmd::FieldArgs,
    },

    /// Remove a sidebar
    Delete {
        /// Sidebar ID
        id: String,
    },

    /// Check whether a slug is still unused
    CheckSlug {
        /// Slug to check
        slug: String,
    },

    /// Expand sidebar shortcodes in a content file
    Render {
        /// Content file (stdin when omitted)
        path: Option<PathBuf>,

        /// Widget placement JSON mapping sidebar ids or slugs to widgets
        #[arg(long)]
        widgets: Option<PathBuf>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = match cli.format {
        Some(format) => format,
        None => match Config::load()?.global.default_format {
            storage::OutputFormat::Text => OutputFormat::Text,
            storage::OutputFormat::Json => OutputFormat::Json,
        },
    };
    let output = Output::new(format, cli.verbose);

    match cli.command {
        Commands::Init { path } => {
            output.verbose_ctx("init", &format!("Initializing project at: {}", path));
            let project = Project::init(&path)?;
            output.success(&format!(
                "Initialized sidebar project at {}",
                project.root().display()
            ));
        }

        Commands::Add {
            name,
            fields,
            unique_slug,
        } => sidebar_cmd::add(&output, &name, fields, unique_slug)?,

        Commands::List => sidebar_cmd::list(&output)?,

        Commands::Show { id } => sidebar_cmd::show(&output, &id)?,

        Commands::Edit { id, name, fields } => {
            sidebar_cmd::edit(&output, &id, fields, name.as_deref())?
        }

        Commands::Delete { id } => sidebar_cmd::delete(&output, &id)?,

        Commands::CheckSlug { slug } => sidebar_cmd::check_slug(&output, &slug)?,

        Commands::Render { path, widgets } => {
            render_cmd::render(&output, path.as_deref(), widgets.as_deref())?
        }
    }

    Ok(())
}
