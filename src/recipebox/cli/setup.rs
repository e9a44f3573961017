use clap::{Parser, Subcommand};
use recipebox::commands::{FilterKey, SortKey};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebox", bin_name = "recipebox", version)]
#[command(about = "Browse, search and favorite recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding favorites and config (defaults to $RECIPEBOX_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Catalog JSON file to use instead of the built-in recipes
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes
    #[command(alias = "ls")]
    List {
        /// Filter: all, easy, medium, hard, quick, favorites
        #[arg(short, long)]
        filter: Option<FilterKey>,

        /// Sort: none, name, time
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Search titles, descriptions and ingredients
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Search recipes (shorthand for `list --search`)
    Search {
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },

    /// Toggle a recipe as favorite
    #[command(alias = "f")]
    Fav {
        /// Recipe id
        id: u32,
    },

    /// List favorite recipes
    Favorites,

    /// Show the full card for a recipe
    #[command(alias = "v")]
    View {
        /// Recipe id
        id: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_options() {
        let cli = Cli::parse_from(["recipebox", "list", "-f", "easy", "-s", "time", "-q", "spi"]);
        match cli.command {
            Some(Commands::List {
                filter,
                sort,
                search,
            }) => {
                assert_eq!(filter, Some(FilterKey::Easy));
                assert_eq!(sort, Some(SortKey::Time));
                assert_eq!(search.as_deref(), Some("spi"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["recipebox", "list", "--filter", "vegan"]).is_err());
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::parse_from(["recipebox", "--no-color"]);
        assert!(cli.command.is_none());
        assert!(cli.no_color);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["recipebox", "fav", "2", "--data-dir", "/tmp/rb"]);
        assert!(matches!(cli.command, Some(Commands::Fav { id: 2 })));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/rb")));
    }
}
