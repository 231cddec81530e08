use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = musicraze::cli::Cli::parse();
    musicraze::logging::init(cli.verbose);

    if let Err(err) = musicraze::run(cli).await {
        tracing::error!(error = %err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
