//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// protogen - protobuf toolchain bootstrapper and code generator
///
/// Installs the protoc toolchain and generates Go sources for every protocol package.
#[derive(Parser, Debug)]
#[command(
    name = "protogen",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Protobuf toolchain bootstrapper and code generator",
    long_about = "protogen installs protoc and the Go code-generator plugins, compiles every \
                  <name>/<name>.proto package under the protocol root, and strips ',omitempty' \
                  from the generated sources.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  protogen generate\n    \
                  protogen generate --skip-install\n    \
                  protogen --proto-root ./proto compile\n    \
                  protogen patch pkg/protocol/user/user.pb.go\n    \
                  protogen protoc-url --os linux --arch arm64"
)]
pub struct Cli {
    /// Configuration file (defaults to ./protogen.yaml when present)
    #[arg(long, short = 'c', global = true, env = "PROTOGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Protocol-definitions root containing <name>/<name>.proto packages
    #[arg(long, global = true, env = "PROTOGEN_PROTO_ROOT", value_name = "DIR")]
    pub proto_root: Option<PathBuf>,

    /// Directory generator tools are installed into
    #[arg(long, global = true, env = "PROTOGEN_INSTALL_DIR", value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install missing tools, then compile and patch every protocol package
    Generate(GenerateArgs),

    /// Install missing generator tools and protoc
    Install,

    /// Compile and patch every protocol package with the tools already installed
    Compile,

    /// Strip the annotation token from generated files
    Patch(PatchArgs),

    /// Print the protoc archive URL for this host or a given platform
    ProtocUrl(ProtocUrlArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install tools and generate everything:\n    protogen generate\n\n\
                  Generate without checking tools:\n    protogen generate --skip-install")]
pub struct GenerateArgs {
    /// Skip the tool installation step
    #[arg(long)]
    pub skip_install: bool,
}

/// Arguments for the patch command
#[derive(Parser, Debug)]
pub struct PatchArgs {
    /// Generated files to patch in place
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Arguments for the protoc-url command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  URL for this machine:\n    protogen protoc-url\n\n\
                  URL for another platform:\n    protogen protoc-url --os windows --arch x86_64")]
pub struct ProtocUrlArgs {
    /// Operating system (linux, macos, windows, ...); defaults to the host
    #[arg(long)]
    pub os: Option<String>,

    /// CPU architecture (x86_64, aarch64, amd64, arm64, ...); defaults to the host
    #[arg(long)]
    pub arch: Option<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    protogen completions --shell bash > ~/.bash_completion.d/protogen\n\n\
                  Generate zsh completions:\n    protogen completions --shell zsh > ~/.zfunc/_protogen")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate() {
        let cli = Cli::try_parse_from(["protogen", "generate"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert!(!args.skip_install),
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parsing_generate_skip_install() {
        let cli = Cli::try_parse_from(["protogen", "generate", "--skip-install"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert!(args.skip_install),
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parsing_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "protogen",
            "compile",
            "--proto-root",
            "./proto",
            "--install-dir",
            "/opt/bin",
            "-v",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Compile));
        assert_eq!(cli.proto_root, Some(PathBuf::from("./proto")));
        assert_eq!(cli.install_dir, Some(PathBuf::from("/opt/bin")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parsing_patch_files() {
        let cli = Cli::try_parse_from(["protogen", "patch", "a.pb.go", "b.pb.go"]).unwrap();
        match cli.command {
            Commands::Patch(args) => {
                assert_eq!(
                    args.files,
                    vec![PathBuf::from("a.pb.go"), PathBuf::from("b.pb.go")]
                );
            }
            _ => panic!("Expected Patch command"),
        }
    }

    #[test]
    fn test_cli_parsing_patch_requires_file() {
        assert!(Cli::try_parse_from(["protogen", "patch"]).is_err());
    }

    #[test]
    fn test_cli_parsing_protoc_url() {
        let cli =
            Cli::try_parse_from(["protogen", "protoc-url", "--os", "linux", "--arch", "arm64"])
                .unwrap();
        match cli.command {
            Commands::ProtocUrl(args) => {
                assert_eq!(args.os.as_deref(), Some("linux"));
                assert_eq!(args.arch.as_deref(), Some("arm64"));
            }
            _ => panic!("Expected ProtocUrl command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["protogen", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["protogen"]).is_err());
    }
}
