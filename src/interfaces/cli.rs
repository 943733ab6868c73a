use clap::Parser;

#[derive(Parser)]
#[command(name = "autotranslate")]
#[command(about = "Translate strings through the configured machine-translation backend.")]
#[command(version)]
pub struct Cli {
    /// Target language code
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Source language code
    #[arg(short = 's', long, default_value = autotranslate::DEFAULT_SOURCE_LANGUAGE)]
    pub source: String,

    /// Backend to use instead of the configured one (e.g. google, google-api, amazon)
    #[arg(short = 'S', long)]
    pub service: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Strings to translate (read from stdin, one per line, when omitted)
    #[arg(num_args = 1..)]
    pub strings: Vec<String>,
}
