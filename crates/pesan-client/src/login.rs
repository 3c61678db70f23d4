//! Login surface: credential collection and submission.
//!
//! [`LoginForm`] holds the screen state (fields, loading flag, last error)
//! and performs the credential exchange through any [`AuthProvider`]. The
//! interactive [`run`] wrapper drives it from terminal prompts.

use std::io::Write;

use tracing::{error, warn};

use pesan_auth::AuthProvider;
use pesan_shared::SessionRecord;
use pesan_store::Database;

/// State of the login surface.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Set while a credential exchange is in flight; doubles as the
    /// double-submission guard.
    pub loading: bool,
    /// Last user-facing error message, if any.
    pub error: Option<String>,
}

impl LoginForm {
    /// Whether the submit affordance is enabled: both fields non-empty and
    /// no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty() && !self.loading
    }

    /// Exchange the entered credentials and persist the session on success.
    ///
    /// On failure the provider code is mapped to the fixed message table,
    /// no session is written, and the loading flag is cleared so the user
    /// can retry. On success the loading flag stays set while the caller
    /// navigates away.
    pub async fn submit(
        &mut self,
        auth: &impl AuthProvider,
        db: &Database,
    ) -> Option<SessionRecord> {
        if !self.can_submit() {
            return None;
        }

        self.loading = true;
        self.error = None;

        match auth.sign_in(self.email.trim(), &self.password).await {
            Ok(user) => {
                let session = SessionRecord {
                    uid: user.uid,
                    email: user.email,
                };
                if let Err(e) = db.save_session(&session) {
                    // A failed session write lands in the same place as a
                    // provider rejection: stay on the login surface.
                    error!(error = %e, "failed to persist session record");
                    self.error = Some("Login gagal. Periksa email dan password Anda.".to_string());
                    self.loading = false;
                    return None;
                }
                Some(session)
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.error = Some(e.user_message().to_string());
                self.loading = false;
                None
            }
        }
    }
}

/// Interactive login loop on plain stdin/stdout.
///
/// Returns the established session, or `None` when the user backs out
/// (empty email input).
pub async fn run(db: &Database, auth: &impl AuthProvider) -> anyhow::Result<Option<SessionRecord>> {
    println!("== {} ==", pesan_shared::constants::APP_NAME);
    println!("Login dengan email yang terdaftar.");

    loop {
        let email = prompt("Email (kosongkan untuk keluar): ")?;
        if email.is_empty() {
            return Ok(None);
        }
        let password = prompt("Password: ")?;
        if password.is_empty() {
            println!("Email dan password wajib diisi");
            continue;
        }

        let mut form = LoginForm {
            email,
            password,
            ..LoginForm::default()
        };

        println!("Masuk...");
        match form.submit(auth, db).await {
            Some(session) => {
                println!("Login berhasil sebagai {}", session.email);
                return Ok(Some(session));
            }
            None => {
                if let Some(msg) = form.error {
                    println!("Login gagal: {msg}");
                }
            }
        }
    }
}

fn prompt(label: &str) -> std::io::Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
