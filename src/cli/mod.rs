//! CLI module - Command-line interface for Fyyur
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Fyyur - venue and artist booking directory
#[derive(Parser)]
#[command(name = "fyyur")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// List venues grouped by city, or search them by name
    #[command(alias = "v")]
    Venues {
        /// Case-insensitive name fragment
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Show a venue with its past and upcoming shows
    Venue {
        /// Venue ID
        id: i32,
    },

    /// List artists, or search them by name
    #[command(alias = "a")]
    Artists {
        /// Case-insensitive name fragment
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Show an artist with their past and upcoming shows
    Artist {
        /// Artist ID
        id: i32,
    },

    /// List every booked show
    #[command(alias = "s")]
    Shows,
}

pub use commands::*;
