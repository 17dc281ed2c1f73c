//! protogen - protobuf toolchain bootstrapper and code generator

use clap::Parser;
use tracing_subscriber::EnvFilter;

use protogen::cli::{Cli, Commands};
use protogen::commands::{self, helpers::GlobalOptions};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "protogen=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GlobalOptions {
        config: cli.config,
        proto_root: cli.proto_root,
        install_dir: cli.install_dir,
    };

    let result = match &cli.command {
        Commands::Generate(args) => commands::generate::run(&options, args),
        Commands::Install => commands::install::run(&options),
        Commands::Compile => commands::compile::run(&options),
        Commands::Patch(args) => commands::patch::run(&options, args),
        Commands::ProtocUrl(args) => commands::protoc_url::run(&options, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
