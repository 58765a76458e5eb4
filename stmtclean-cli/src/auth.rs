use anyhow::{Context, Result, bail};
use std::io::{self, Write};

use stmtclean_ingest::Session;

use crate::config::GateSection;

fn prompt_secret(label: &str) -> Result<String> {
    // Plain stdin read; the terminal echoes input.
    eprint!("{}: ", label);
    io::stderr().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Start a session and pass it through the password gate.
pub fn login(gate: &GateSection, password: Option<String>) -> Result<Session> {
    let secret = gate.secret().with_context(|| {
        format!(
            "no access secret configured (set {} or gate.password in config.toml)",
            gate.password_env
        )
    })?;

    let candidate = match password {
        Some(p) => p,
        None => prompt_secret("Enter password")?,
    };

    let mut session = Session::new();
    if !session.authenticate(&candidate, &secret) {
        bail!("Incorrect password");
    }
    Ok(session)
}
