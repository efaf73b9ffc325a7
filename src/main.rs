use clap::Parser;
use osint_vault::cli::commands::Cli;
use osint_vault::cli::handlers::{self, Context};

fn main() {
    let cli = Cli::parse();

    let ctx = match Context::new(cli.workspace_dir.as_deref(), cli.json) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    osint_vault::cli::init_logging(&ctx.start);

    if let Err(e) = handlers::dispatch(cli.command, &ctx) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
