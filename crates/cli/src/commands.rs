//! The create and view flows.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use paste_client::{CreatePaste, PasteClient};
use tracing::info;

/// Create a paste from `file` (or stdin), optionally encrypting it first,
/// and print the share URL.
pub async fn create(
    client: &PasteClient,
    file: Option<&Path>,
    syntax: String,
    burn: bool,
    expire_minutes: Option<u32>,
    password: Option<&str>,
) -> Result<()> {
    let content = read_content(file)?;
    if content.trim().is_empty() {
        bail!("paste content is empty");
    }

    // An empty password (e.g. PASTE_PASSWORD="") means no protection.
    let password = password.filter(|p| !p.is_empty());
    let content = match password {
        Some(pw) => {
            paste_protect::encrypt(&content, pw).context("failed to encrypt paste content")?
        }
        None => content,
    };

    let req = CreatePaste {
        content,
        syntax,
        is_burn_after_reading: burn,
        expire_minutes,
    };
    let created = client.create(&req).await?;

    info!(key = %created.key, protected = password.is_some(), "paste created");
    println!("{}", client.share_url(&created.key));
    Ok(())
}

/// Fetch a paste and print its content, decrypting protected payloads.
pub async fn show(
    client: &PasteClient,
    key: &str,
    password: Option<&str>,
    raw: bool,
) -> Result<()> {
    let paste = client.get(key).await?;
    info!(syntax = %paste.syntax, burn = paste.is_burn_after_reading, "paste fetched");
    if let Some(expire_at) = paste.expire_at {
        info!(%expire_at, "paste expires");
    }

    if paste.is_protected() && !raw {
        let password = password
            .filter(|p| !p.is_empty())
            .context("paste is password-protected; supply --password or set PASTE_PASSWORD")?;
        let plaintext = paste_protect::decrypt(&paste.content, password)?;
        println!("{plaintext}");
    } else {
        println!("{}", paste.content);
    }
    Ok(())
}

fn read_content(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read paste content from stdin")?;
            Ok(buf)
        }
    }
}
