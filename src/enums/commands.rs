use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run the job API server
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Analyze one repository in-process and print the summary as JSON
    Analyze {
        repo_url: String,
        /// Only print this analysis (e.g. "security")
        #[clap(short = 't', long)]
        analysis_type: Option<String>,
    },
    /// Show which API keys are configured
    ApiStatus,
    /// Check the configuration file for problems
    Validate,
}

