use crate::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Shared slot through which the request layer reads the current bearer
/// token. The session holder writes it; [`crate::HttpApi`] only reads.
/// Injected rather than held as ambient global state.
#[derive(Debug, Clone, Default)]
pub struct TokenSlot(Arc<Mutex<Option<String>>>);

impl TokenSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.0.lock().unwrap().clone()
    }

    fn set(&self, token: Option<String>) {
        *self.0.lock().unwrap() = token;
    }
}

/// Holds the single process-wide session token and its persisted copy.
///
/// Lifecycle: `initialize` reads the persisted token (if any) and marks the
/// session authenticated; `persist` stores a freshly issued token; `clear`
/// forgets it. None of these touch the network.
pub struct SessionStore {
    token_path: PathBuf,
    slot: TokenSlot,
    authenticated: bool,
    loading: bool,
}

impl SessionStore {
    pub fn open(data_dir: &Path) -> Self {
        Self {
            token_path: data_dir.join("token"),
            slot: TokenSlot::new(),
            authenticated: false,
            loading: true,
        }
    }

    /// Read the persisted token if present and attach it to the request
    /// slot. Always completes; a missing or unreadable file just leaves the
    /// session unauthenticated. Loading is finished afterwards either way.
    pub fn initialize(&mut self) {
        match std::fs::read_to_string(&self.token_path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if !token.is_empty() {
                    debug!(path = %self.token_path.display(), "restored persisted session token");
                    self.slot.set(Some(token));
                    self.authenticated = true;
                }
            }
            Err(_) => {
                // No persisted token; start unauthenticated.
            }
        }
        self.loading = false;
    }

    /// Store a freshly issued token and start attaching it to requests.
    pub fn persist(&mut self, token: &str) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.token_path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.token_path, perms)?;
        }

        self.slot.set(Some(token.to_string()));
        self.authenticated = true;
        Ok(())
    }

    /// Forget the token: remove the persisted copy and stop attaching it.
    /// No network call is made.
    pub fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.token_path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.slot.set(None);
        self.authenticated = false;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// True only while `initialize` has not yet run.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The slot the request layer should read bearer tokens from.
    pub fn token_slot(&self) -> TokenSlot {
        self.slot.clone()
    }
}
