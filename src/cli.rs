#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Run the Slack events webhook server
    Serve {
        /// Address to bind the server to
        #[arg(short, long, default_value = "0.0.0.0:3000")]
        addr: std::net::SocketAddr,
    },

    /// Evaluate an arithmetic expression locally and print the result
    Eval { text: Vec<String> },
}
