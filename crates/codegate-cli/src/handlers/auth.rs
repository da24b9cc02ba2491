use crate::args::OutputFormat;
use crate::context::AppContext;
use crate::presentation::renderers::console::render_session_status;
use crate::presentation::view_models::SessionStatusViewModel;
use anyhow::{Result, bail};
use codegate_client::{ActivationApi, SessionStore};
use std::path::Path;
use tracing::warn;

/// Log in against the auth collaborator and persist the issued token.
/// On any failure the stored session is left exactly as it was.
pub async fn login(ctx: &mut AppContext, username: &str, password: Option<String>) -> Result<()> {
    let password = match password.or_else(|| std::env::var("CODEGATE_PASSWORD").ok()) {
        Some(password) => password,
        None => bail!("no password given: pass --password or set CODEGATE_PASSWORD"),
    };

    match ctx.api.login(username, &password).await {
        Ok(token) => {
            ctx.session.persist(&token)?;
            println!("Logged in as {}.", username);
            Ok(())
        }
        Err(err) => {
            warn!(%err, "login failed");
            bail!("login failed: {}", err);
        }
    }
}

/// Forget the persisted token. Purely local; the backend is not called.
pub fn logout(data_dir: &Path) -> Result<()> {
    let mut session = SessionStore::open(data_dir);
    session.initialize();
    session.clear()?;
    println!("Logged out.");
    Ok(())
}

pub fn status(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let mut session = SessionStore::open(data_dir);
    session.initialize();

    let vm = SessionStatusViewModel {
        authenticated: session.is_authenticated(),
    };
    render_session_status(&vm, format)
}
