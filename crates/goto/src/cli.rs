//! Command-line interface definition using clap.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Jump to short keywords that expand to full addresses.
#[derive(Parser, Debug)]
#[command(name = "goto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Keyword store file (overrides store_path config)
    #[arg(long, env = "GOTO_STORE", value_hint = ValueHint::FilePath)]
    pub store: Option<PathBuf>,

    /// Log debug output from goto to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show ranked suggestions for a partial keyword
    Suggest {
        /// What has been typed so far
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the best match for a query (or search for it)
    Open {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,

        /// Print the destination instead of opening it
        #[arg(long)]
        print: bool,
    },
    /// Add a keyword or change where it leads
    Add { keyword: String, destination: String },
    /// Remove a keyword
    Remove { keyword: String },
    /// List all keywords
    List {
        /// Print the keywords as a JSON object (suitable for `import`)
        #[arg(long)]
        json: bool,
    },
    /// Show or set the search fallback template
    ///
    /// `%s` in the template is replaced by the query. Pass an empty string
    /// to disable the fallback.
    SearchEngine { template: Option<String> },
    /// Replace all keywords with the contents of a JSON file
    Import {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Restore the default keywords and search engine
    Reset {
        /// Confirm resetting everything
        #[arg(long)]
        yes: bool,
    },
    /// Read queries from stdin, one per line
    ///
    /// A plain line prints suggestions, `!query` opens the best match,
    /// `:add <keyword> <destination>`, `:rm <keyword>` and
    /// `:search <template>` edit the store, `:q` quits.
    Interactive {
        /// Print destinations instead of opening them
        #[arg(long)]
        print: bool,
    },
}

/// Join the words of a query back together the way they were typed
pub fn join_query(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_query_keeps_words_and_dashes() {
        let cli = Cli::try_parse_from(["goto", "suggest", "rust", "-lang"]).unwrap();
        match cli.command {
            Commands::Suggest { query, json } => {
                assert!(!json);
                assert_eq!(join_query(&query), "rust -lang");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_open_print_flag() {
        let cli = Cli::try_parse_from(["goto", "open", "--print", "docs"]).unwrap();
        match cli.command {
            Commands::Open { query, print } => {
                assert!(print);
                assert_eq!(query, vec!["docs"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_empty_query_allowed() {
        let cli = Cli::try_parse_from(["goto", "open"]).unwrap();
        assert!(matches!(cli.command, Commands::Open { ref query, .. } if query.is_empty()));
    }

    #[test]
    fn test_search_engine_optional_template() {
        let cli = Cli::try_parse_from(["goto", "search-engine"]).unwrap();
        assert!(matches!(cli.command, Commands::SearchEngine { template: None }));

        let cli = Cli::try_parse_from(["goto", "search-engine", ""]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::SearchEngine { template: Some(ref t) } if t.is_empty()
        ));
    }

    #[test]
    fn test_global_store_flag() {
        let cli = Cli::try_parse_from(["goto", "--store", "/tmp/k.json", "list"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/k.json")));
    }
}
