//! Catalog command - list the compiled-in banks and subscription services.

use clap::Args;
use console::style;
use serde::Serialize;

use thslip_core::slip::rules::{catalog, subscription_catalog};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct BankEntry<'a> {
    name: &'a str,
    identifiers: Vec<&'a str>,
}

#[derive(Serialize)]
struct ServiceEntry<'a> {
    name: &'a str,
    category: &'a str,
}

#[derive(Serialize)]
struct CatalogListing<'a> {
    banks: Vec<BankEntry<'a>>,
    subscriptions: Vec<ServiceEntry<'a>>,
}

fn listing() -> CatalogListing<'static> {
    let banks = catalog()
        .iter()
        .map(|profile| BankEntry {
            name: profile.name,
            identifiers: profile
                .identifiers
                .iter()
                .map(|re| re.as_str().trim_start_matches("(?i)"))
                .collect(),
        })
        .collect();

    let subscriptions = subscription_catalog()
        .iter()
        .map(|service| ServiceEntry {
            name: service.name,
            category: service.category,
        })
        .collect();

    CatalogListing {
        banks,
        subscriptions,
    }
}

pub async fn run(args: CatalogArgs) -> anyhow::Result<()> {
    let listing = listing();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", style("Banks (detection order):").bold());
    for (i, bank) in listing.banks.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            style(bank.name).cyan(),
            style(bank.identifiers.join(", ")).dim()
        );
    }

    println!();
    println!("{}", style("Subscription services:").bold());
    for service in &listing.subscriptions {
        println!("  - {} ({})", style(service.name).cyan(), service.category);
    }

    Ok(())
}
