use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write the initial configuration")]
    Init {
        #[arg(long, help = "Base URL of the activation-code backend")]
        server_url: String,

        #[arg(long, default_value = "10", help = "Rows per page of the code list")]
        page_size: u32,
    },

    #[command(about = "Manage the admin session")]
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    #[command(about = "Manage activation codes")]
    Code {
        #[command(subcommand)]
        command: CodeCommand,
    },

    #[command(about = "Interactive dashboard: list, generate, toggle, details")]
    Console,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    #[command(about = "Log in and persist the session token")]
    Login {
        #[arg(long)]
        username: String,

        #[arg(long, help = "Password (falls back to $CODEGATE_PASSWORD)")]
        password: Option<String>,
    },

    #[command(about = "Forget the persisted session token (no network call)")]
    Logout,

    #[command(about = "Show whether a usable session token is held")]
    Status,
}

#[derive(Subcommand)]
pub enum CodeCommand {
    #[command(about = "List activation codes with pagination")]
    List {
        #[arg(long, default_value = "1")]
        page: u32,

        #[arg(long, help = "Override the configured page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Show one code with its provisioned account credentials")]
    Show {
        #[arg(help = "Numeric id or the code string itself")]
        reference: String,

        #[arg(long, default_value = "1", help = "Page within the account list")]
        accounts_page: u32,
    },

    #[command(about = "Generate a new activation code")]
    Generate {
        #[arg(long, default_value = "5", help = "Validity period in days (5, 15 or 30)")]
        duration: u32,

        #[arg(long, default_value = "1", help = "Account capacity (1-100)")]
        max_accounts: u32,
    },

    #[command(about = "Enable a code")]
    Enable {
        #[arg(help = "Numeric id or the code string itself")]
        reference: String,
    },

    #[command(about = "Disable a code")]
    Disable {
        #[arg(help = "Numeric id or the code string itself")]
        reference: String,
    },

    #[command(about = "Flip a code's current status")]
    Toggle {
        #[arg(help = "Numeric id or the code string itself")]
        reference: String,
    },
}
