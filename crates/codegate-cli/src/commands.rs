use super::args::{AuthCommand, Cli, CodeCommand, Commands, LogLevel};
use super::handlers;
use crate::context::AppContext;
use crate::handlers::code_status::StatusAction;
use anyhow::Result;
use codegate_client::resolve_data_dir;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init {
            server_url,
            page_size,
        } => handlers::init::handle(&data_dir, &server_url, page_size),

        Commands::Auth { command } => match command {
            AuthCommand::Login { username, password } => {
                let mut ctx = AppContext::open(data_dir)?;
                runtime()?.block_on(handlers::auth::login(&mut ctx, &username, password))
            }
            AuthCommand::Logout => handlers::auth::logout(&data_dir),
            AuthCommand::Status => handlers::auth::status(&data_dir, cli.format),
        },

        Commands::Code { command } => {
            let ctx = AppContext::open(data_dir)?;
            let runtime = runtime()?;

            match command {
                CodeCommand::List { page, page_size } => {
                    runtime.block_on(handlers::code_list::handle(&ctx, page, page_size, cli.format))
                }
                CodeCommand::Show {
                    reference,
                    accounts_page,
                } => runtime.block_on(handlers::code_show::handle(
                    &ctx,
                    &reference,
                    accounts_page,
                    cli.format,
                )),
                CodeCommand::Generate {
                    duration,
                    max_accounts,
                } => runtime.block_on(handlers::code_generate::handle(
                    &ctx,
                    duration,
                    max_accounts,
                    cli.format,
                )),
                CodeCommand::Enable { reference } => runtime.block_on(
                    handlers::code_status::handle(&ctx, &reference, StatusAction::Enable),
                ),
                CodeCommand::Disable { reference } => runtime.block_on(
                    handlers::code_status::handle(&ctx, &reference, StatusAction::Disable),
                ),
                CodeCommand::Toggle { reference } => runtime.block_on(
                    handlers::code_status::handle(&ctx, &reference, StatusAction::Toggle),
                ),
            }
        }

        Commands::Console => {
            let ctx = AppContext::open(data_dir)?;
            let runtime = runtime()?;
            handlers::console::handle(ctx, &runtime)
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

fn init_tracing(level: LogLevel) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("codegate={},codegate_client={}", level, level))
    });

    // Diagnostics go to stderr so they never mix with rendered output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn show_guidance(data_dir: &Path) {
    let config_exists = data_dir.join("config.toml").exists();
    let token_exists = data_dir.join("token").exists();

    println!("codegate - Activation-code administration console\n");

    if !config_exists {
        println!("Get started:");
        println!("  codegate init --server-url <URL>\n");
        println!("Then:");
        println!("  codegate auth login --username <name>");
        println!("  codegate console\n");
    } else if !token_exists {
        println!("Configured, but no session token is held:");
        println!("  codegate auth login --username <name>\n");
    } else {
        println!("Quick commands:");
        println!("  codegate code list                # Browse activation codes");
        println!("  codegate code generate            # Create a new code");
        println!("  codegate code show <id>           # Inspect provisioned accounts");
        println!("  codegate console                  # Interactive dashboard\n");
    }

    println!("For more commands:");
    println!("  codegate --help");
}
