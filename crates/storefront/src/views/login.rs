use boutique_core::DomainError;

use crate::directory::{Credentials, ProductDirectory};
use crate::error::{DirectoryError, ViewError};
use crate::session::SessionWriter;

const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

/// Exchange credentials for a token and start the session.
pub async fn login(
    directory: &dyn ProductDirectory,
    writer: &SessionWriter,
    credentials: &Credentials,
) -> Result<(), ViewError> {
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(DomainError::validation("username and password are required").into());
    }

    let token = directory.login(credentials).await?;
    writer.login(token)?;
    tracing::info!(username = %credentials.username, "admin logged in");
    Ok(())
}

/// End the session.
pub fn logout(writer: &SessionWriter) -> Result<(), ViewError> {
    writer.logout()?;
    Ok(())
}

/// Error text for the login form: the server's message when it sent one.
pub fn login_notice(err: &ViewError) -> String {
    match err {
        ViewError::Directory(DirectoryError::Api {
            message: Some(message),
            ..
        }) => message.clone(),
        ViewError::Directory(DirectoryError::Api { .. }) => INVALID_CREDENTIALS.to_string(),
        other => other.notice("log in"),
    }
}
