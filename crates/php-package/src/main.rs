//! php-package - scaffolding for PHP composer packages

use anyhow::Result;
use clap::Parser;
use composer_scaffold::tui::CreateArgs;
use composer_scaffold::DEFAULT_PHP_VERSION;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "php-package")]
#[command(about = "CLI for scaffolding PHP composer packages")]
#[command(version)]
pub struct Args {
    /// The name (vendor/name) of the package
    pub package: String,

    /// The minimum PHP version supported by your package
    #[arg(default_value = DEFAULT_PHP_VERSION)]
    pub phpv: String,

    /// Add TravisCI configuration
    #[arg(long)]
    pub travis: bool,

    /// Add PHPUnit configuration
    #[arg(long)]
    pub phpunit: bool,

    /// Which auto-loader? psr4 or psr0
    #[arg(long, default_value = "psr4")]
    pub psr: String,

    /// Directory to write composer.json into
    #[arg(short, long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// YAML file with package defaults (authors, license, ...)
    #[arg(long)]
    pub defaults: Option<PathBuf>,

    /// Write the render plan (shared variables, renames, ignores) as JSON
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Decline all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            package: args.package,
            php_version: args.phpv,
            travis: args.travis,
            phpunit: args.phpunit,
            psr: args.psr,
            output_dir: args.output_dir,
            defaults: args.defaults,
            plan: args.plan,
            yes: args.yes,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = composer_scaffold::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
