use inquire::{Password, PasswordDisplayMode, Text};

pub fn text_or_prompt(given: Option<&str>, message: &str) -> anyhow::Result<String> {
    match given {
        Some(value) => Ok(value.to_string()),
        None => Ok(Text::new(message).prompt()?),
    }
}

pub fn secret_or_prompt(given: Option<&str>, message: &str) -> anyhow::Result<String> {
    match given {
        Some(value) => Ok(value.to_string()),
        None => Ok(Password::new(message)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()?),
    }
}
