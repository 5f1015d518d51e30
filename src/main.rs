use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use miette::{Context, IntoDiagnostic, Result};

use ownerbot_core::{OwnerbotConfig, OwnersTable};
use ownerbot_notify::context::PrContext;
use ownerbot_notify::github::GitHubClient;
use ownerbot_notify::pipeline::{NotifyOutcome, NotifyPipeline};

#[derive(Parser)]
#[command(
    name = "ownerbot",
    version,
    about = "CI bot that requests review from module owners on pull requests",
    long_about = "Ownerbot inspects the files changed in a pull request, maps changed\n\
                   top-level module directories to owning teams via .github/owners.json,\n\
                   and keeps a single marked PR comment listing the owners whose review\n\
                   is needed.\n\n\
                   Examples:\n  \
                     ownerbot notify                      Run against the triggering PR event\n  \
                     ownerbot notify --pr octo/widgets#7  Run against an explicit PR\n  \
                     ownerbot notify --dry-run            Print the comment without posting\n  \
                     ownerbot init                        Create a starter owners.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .ownerbot.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// When to use colors
    #[arg(long, global = true, default_value = "auto")]
    color: ColorChoice,
}

#[derive(Subcommand)]
enum Command {
    /// Post or update the owners comment on a pull request
    #[command(long_about = "Post or update the owners comment on a pull request.\n\n\
        Derives touched modules from the PR's changed files, resolves owners from\n\
        the owners mapping, and reconciles the single marked bot comment: update\n\
        if present, create otherwise. Does nothing when no owned module changed.\n\n\
        Examples:\n  ownerbot notify\n  ownerbot notify --pr octo/widgets#7 --dry-run")]
    Notify {
        /// Pull request reference (owner/repo#number); defaults to the
        /// triggering GitHub Actions event
        #[arg(long)]
        pr: Option<String>,

        /// Path to the owners mapping (default: <workspace>/.github/owners.json)
        #[arg(long)]
        owners: Option<PathBuf>,

        /// Directory whose children are treated as modules
        #[arg(long)]
        module_root: Option<String>,

        /// GitHub token (default: GITHUB_TOKEN env var)
        #[arg(long)]
        token: Option<String>,

        /// Compose the comment and report the branch taken, without posting
        #[arg(long)]
        dry_run: bool,
    },
    /// Create a starter .github/owners.json
    Init,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

const STARTER_OWNERS: &str = r#"{
  "example-module": ["octocat"]
}
"#;

fn print_welcome(use_color: bool) {
    let version = env!("CARGO_PKG_VERSION");

    if use_color {
        println!("\x1b[1m\x1b[33m⚡\x1b[0m \x1b[1mownerbot\x1b[0m v{version} — review requests from module owners on every PR\n");

        println!("Quick start:");
        println!("  \x1b[36mownerbot init\x1b[0m                 Create a starter .github/owners.json");
        println!("  \x1b[36mownerbot notify --dry-run\x1b[0m     Preview the owners comment");
        println!("  \x1b[36mownerbot notify\x1b[0m               Post or update the owners comment\n");

        println!("All commands:");
        println!("  \x1b[32mnotify\x1b[0m       Post or update the owners comment on a PR");
        println!("  \x1b[32minit\x1b[0m         Create a starter owners mapping");
        println!("  \x1b[32mcompletions\x1b[0m  Generate shell completions\n");
    } else {
        println!("ownerbot v{version} — review requests from module owners on every PR\n");

        println!("Quick start:");
        println!("  ownerbot init                 Create a starter .github/owners.json");
        println!("  ownerbot notify --dry-run     Preview the owners comment");
        println!("  ownerbot notify               Post or update the owners comment\n");

        println!("All commands:");
        println!("  notify       Post or update the owners comment on a PR");
        println!("  init         Create a starter owners mapping");
        println!("  completions  Generate shell completions\n");
    }

    println!("Run 'ownerbot <command> --help' for details.");
}

/// Workspace root the owners file is resolved against: `GITHUB_WORKSPACE`
/// in CI, the current directory otherwise.
fn workspace_root() -> PathBuf {
    std::env::var("GITHUB_WORKSPACE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => OwnerbotConfig::from_file(path)?,
        None => {
            let default_path = std::path::Path::new(".ownerbot.toml");
            if default_path.exists() {
                OwnerbotConfig::from_file(default_path)?
            } else {
                OwnerbotConfig::default()
            }
        }
    };

    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    };

    match cli.command {
        None => {
            print_welcome(use_color);
            return Ok(());
        }
        Some(Command::Notify {
            pr,
            owners,
            module_root,
            token,
            dry_run,
        }) => {
            let mut notify_config = config.notify;
            if let Some(root) = module_root {
                notify_config.module_root = root;
            }

            let pr_context = match &pr {
                Some(pr_ref) => PrContext::parse(pr_ref)?,
                None => PrContext::from_env()?,
            };

            let owners_path =
                owners.unwrap_or_else(|| workspace_root().join(&notify_config.owners_file));
            let owners_table = OwnersTable::from_file(&owners_path)
                .wrap_err(format!("loading owners from {}", owners_path.display()))?;

            if cli.verbose {
                eprintln!(
                    "PR: {}/{}#{}",
                    pr_context.owner, pr_context.repo, pr_context.number
                );
                eprintln!(
                    "Owners: {} modules from {}",
                    owners_table.len(),
                    owners_path.display()
                );
                eprintln!("Module root: {}/", notify_config.module_root);
            }

            let github = GitHubClient::new(token.as_deref())?;
            let pipeline = NotifyPipeline::new(github, notify_config);
            let outcome = pipeline.run(&pr_context, &owners_table, dry_run).await?;

            match outcome {
                NotifyOutcome::NoModulesTouched => {
                    println!("No modules were modified");
                }
                NotifyOutcome::NoOwnersMatched => {
                    println!("Modules were modified, but no owners were found");
                }
                NotifyOutcome::Created { .. } => {
                    println!("Created owners comment");
                }
                NotifyOutcome::Updated { comment_id, .. } => {
                    println!("Updated existing owners comment ({comment_id})");
                }
                NotifyOutcome::WouldCreate { body } => {
                    println!("Dry run: would create owners comment:\n\n{body}");
                }
                NotifyOutcome::WouldUpdate { comment_id, body } => {
                    println!("Dry run: would update comment {comment_id}:\n\n{body}");
                }
            }
        }
        Some(Command::Init) => {
            let dir = std::path::Path::new(".github");
            let path = dir.join("owners.json");
            if path.exists() {
                miette::bail!(".github/owners.json already exists");
            }
            std::fs::create_dir_all(dir).into_diagnostic()?;
            std::fs::write(&path, STARTER_OWNERS).into_diagnostic()?;
            println!("Created .github/owners.json with a starter mapping");
        }
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "ownerbot", &mut std::io::stdout());
        }
    }

    Ok(())
}
