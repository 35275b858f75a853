use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(short, long, help = "Suppress input prompt message.")]
    pub quiet: bool,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated list of wrapped Facebook links"
    )]
    pub urls: Vec<String>,

    #[arg(
        long = "src-files",
        value_delimiter = ',',
        help = "Comma-separated list of file paths containing wrapped links"
    )]
    pub src_files: Vec<String>,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        info!("Quiet mode: {}", args.quiet);
        info!("Parsed {} URL(s) from --urls", args.urls.len());
        info!("Parsed {} file(s) from --src-files", args.src_files.len());

        args
    }
}
