use anyhow::{Context, Result};
use codegate_client::{CodeOps, Config, HttpApi, SessionStore};
use std::path::PathBuf;

/// Everything a handler needs: configuration, the session holder, and the
/// operations layer wired to the backend.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub session: SessionStore,
    pub api: HttpApi,
    pub ops: CodeOps<HttpApi>,
}

impl AppContext {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&Config::config_path(&data_dir))?;

        let mut session = SessionStore::open(&data_dir);
        session.initialize();

        let api = HttpApi::new(&config.server_url, session.token_slot())
            .context("failed to build the backend client")?;
        let ops = CodeOps::new(api.clone(), config.page_size);

        Ok(Self {
            data_dir,
            config,
            session,
            api,
            ops,
        })
    }
}
