use std::io;

/// Ask for the MySQL password on the terminal without echoing it.
pub fn prompt_password() -> io::Result<String> {
    let password = rpassword::prompt_password("Enter MySQL password: ")?;
    Ok(password.trim().to_string())
}
