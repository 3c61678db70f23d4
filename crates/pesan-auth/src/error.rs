use thiserror::Error;

/// Errors produced by the credential exchange.
///
/// The first three variants are the provider codes the UI maps to specific
/// messages; everything else collapses into the generic login-failure
/// message via [`AuthError::user_message`].
#[derive(Error, Debug)]
pub enum AuthError {
    /// Provider rejected the identifier as not being an email address.
    #[error("provider rejected email format")]
    InvalidEmail,

    /// No account exists for the given email.
    #[error("no account for the given email")]
    UserNotFound,

    /// The password does not match the account.
    #[error("wrong password")]
    WrongPassword,

    /// Any other provider error code.
    #[error("provider error: {0}")]
    Provider(String),

    /// Transport-level failure (connectivity, TLS, malformed body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AuthError {
    /// Map a provider wire code to a typed error.
    ///
    /// The provider occasionally suffixes codes with details
    /// (`"EMAIL_NOT_FOUND : ..."`), so only the leading token is matched.
    pub fn from_code(code: &str) -> Self {
        let token = code
            .split(|c: char| c.is_whitespace() || c == ':')
            .next()
            .unwrap_or_default();
        match token {
            "INVALID_EMAIL" => AuthError::InvalidEmail,
            "EMAIL_NOT_FOUND" => AuthError::UserNotFound,
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => AuthError::WrongPassword,
            _ => AuthError::Provider(code.to_string()),
        }
    }

    /// The fixed user-facing message table.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidEmail => "Format email tidak valid.",
            AuthError::UserNotFound => "User tidak ditemukan. Coba daftar di Firebase Auth.",
            AuthError::WrongPassword => "Password salah.",
            AuthError::Provider(_) | AuthError::Http(_) => {
                "Login gagal. Periksa email dan password Anda."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert!(matches!(
            AuthError::from_code("INVALID_EMAIL"),
            AuthError::InvalidEmail
        ));
        assert!(matches!(
            AuthError::from_code("EMAIL_NOT_FOUND"),
            AuthError::UserNotFound
        ));
        assert!(matches!(
            AuthError::from_code("INVALID_PASSWORD"),
            AuthError::WrongPassword
        ));
        assert!(matches!(
            AuthError::from_code("INVALID_LOGIN_CREDENTIALS"),
            AuthError::WrongPassword
        ));
    }

    #[test]
    fn maps_suffixed_code() {
        assert!(matches!(
            AuthError::from_code("EMAIL_NOT_FOUND : no user record"),
            AuthError::UserNotFound
        ));
    }

    #[test]
    fn unknown_code_is_provider_error() {
        let err = AuthError::from_code("USER_DISABLED");
        assert!(matches!(err, AuthError::Provider(ref code) if code == "USER_DISABLED"));
        assert_eq!(
            err.user_message(),
            "Login gagal. Periksa email dan password Anda."
        );
    }

    #[test]
    fn user_messages_are_fixed() {
        assert_eq!(
            AuthError::UserNotFound.user_message(),
            "User tidak ditemukan. Coba daftar di Firebase Auth."
        );
        assert_eq!(AuthError::InvalidEmail.user_message(), "Format email tidak valid.");
        assert_eq!(AuthError::WrongPassword.user_message(), "Password salah.");
    }
}
