use crate::api::{Request, Surface};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct CallArgs {
    /// JSON-encoded request, e.g. '{"op":"getCounts"}'
    request: String,
}

/// Dispatches a raw JSON request against the command surface and prints the
/// JSON response. This is the same operation set a UI front end would call.
pub fn cmd(args: CallArgs) -> Result<()> {
    let request: Request =
        serde_json::from_str(&args.request).context("invalid request payload")?;
    let response = Surface::new()?.handle(request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
