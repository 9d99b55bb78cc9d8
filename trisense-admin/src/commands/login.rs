//! `login` - authenticate and persist the bearer token

use std::io::{self, BufRead, Write};

use trisense_common::{config, Result};

use crate::client::ApiClient;

pub async fn run(client: &ApiClient, username: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };

    let token = client.login(username, &password).await?;

    let path = config::config_file_path()?;
    config::save_token(&path, &token)?;

    println!("Logged in as {}. Token saved to {}.", username, path.display());
    Ok(())
}

fn prompt_password() -> io::Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
