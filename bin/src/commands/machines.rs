//! Machines command implementation.

use anyhow::Result;
use wattline_lib::prelude::*;

/// List the machines predictions can be requested for.
///
/// By default the built-in set is shown; `--remote` asks the service's
/// `/machines` endpoint instead.
pub(crate) async fn machines(api_url: Option<&str>, remote: bool) -> Result<()> {
    if remote {
        let client = super::build_client(api_url)?;
        let list = client.machines().await?;

        println!("{:<12} {}", "MACHINE", "DESCRIPTION");
        for id in &list.machines {
            let description = list.descriptions.get(id).map_or("", String::as_str);
            println!("{id:<12} {description}");
        }
        return Ok(());
    }

    println!("{:<12} {:<10} {}", "MACHINE", "LABEL", "DESCRIPTION");
    for machine in Machine::all() {
        println!(
            "{:<12} {:<10} {}",
            machine.id(),
            machine.label(),
            machine.description()
        );
    }
    Ok(())
}
