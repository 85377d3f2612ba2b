use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the build id for non-release builds.
/// Format: "0.1.0" when the build id is unknown, "0.1.0@abc1234" otherwise
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const BUILD: &str = env!("TEXTDESK_BUILD");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if BUILD == "unknown" {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, BUILD)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "textdesk", bin_name = "textdesk", version = get_version())]
#[command(about = "Multilingual texts with a review workflow", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (overrides TEXTDESK_DATA_DIR)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Content flags shared by `create` and `update`
#[derive(Args, Debug, Clone, Default)]
pub struct ContentArgs {
    /// Arabic text
    #[arg(long)]
    pub ar: Option<String>,

    /// French text
    #[arg(long)]
    pub fr: Option<String>,

    /// English text
    #[arg(long)]
    pub en: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new text (starts as a draft)
    #[command(alias = "n")]
    Create {
        #[command(flatten)]
        content: ContentArgs,
    },

    /// Show one text
    #[command(alias = "v")]
    Get {
        /// Text id
        id: String,
    },

    /// List texts, one page at a time
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Page size, 0 for no limit (defaults to the configured default-limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Change the content of a text; languages left out are kept
    Update {
        /// Text id
        id: String,

        #[command(flatten)]
        content: ContentArgs,
    },

    /// Count the words of a text
    Count {
        /// Text id
        id: String,

        /// Only count this language (ar, fr, en)
        language: Option<String>,

        /// Show the count of every language
        #[arg(long, conflicts_with = "language")]
        breakdown: bool,
    },

    /// Most frequent word across all texts
    Frequent,

    /// Submit a draft or rejected text for review
    Submit {
        /// Text id
        id: String,
    },

    /// Reject a submitted text
    Reject {
        /// Text id
        id: String,
    },

    /// Approve a submitted text
    Approve {
        /// Text id
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
