use std::io::{BufRead, Write};
use std::path::PathBuf;
use anyhow::Context;
use tracing::info;
use crate::config::Config;
use crate::controller::google_places_api::{LookupClient, PlacesTransport};
use crate::helpers::console::format_listing;
use crate::helpers::prompt::{prompt_for_city, validate_city};
use crate::repositories::json_file_repo::JsonFileRepo;

pub mod google_places_api;

/// One query → response → write → print cycle against the real places API.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<PathBuf> {
    let client = LookupClient::from_config(config)?;
    run_with_client(&client, config, input, output)
}

pub fn run_with_client<T: PlacesTransport, R: BufRead, W: Write>(
    client: &LookupClient<T>,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<PathBuf> {
    let city = match &config.city {
        Some(city) => validate_city(city)?.to_string(),
        None => prompt_for_city(input, output)?,
    };

    writeln!(output, "\nSearching for top restaurants in {}...\n", city)?;
    let mut records = client.search_restaurants(&city)?;
    if config.details && !records.is_empty() {
        info!("Fetching details for {} restaurants", records.len());
        client.enrich_with_details(&mut records);
    }

    let repo = JsonFileRepo::new(&config.output_dir);
    let path = repo
        .store_restaurants(&city, &records)
        .context("Error writing output file")?;

    write!(output, "{}", format_listing(&city, &records))
        .context("Error printing restaurant listing")?;
    writeln!(output, "\nSaved results to {}", path.display())?;

    Ok(path)
}
