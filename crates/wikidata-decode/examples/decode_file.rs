//! Prints a summary of a saved Wikibase response.
//!
//! Usage: `cargo run --example decode_file -- response.json[.zst] [language]`

use std::error::Error;
use std::fs;

use tracing_subscriber::EnvFilter;
use wikidata_decode::codec::{decode_response_bytes, detect_envelope, read_body};
use wikidata_decode::{ClaimValue, DecodeOptions, Entity, Response};

fn format_value(v: &ClaimValue) -> String {
    match v {
        ClaimValue::Entity(id) => id.to_string(),
        ClaimValue::Text(s) | ClaimValue::ExternalId(s) | ClaimValue::Math(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        ClaimValue::Url(s) => format!("URL({})", s),
        ClaimValue::Media(s) => format!("MEDIA({})", s),
        ClaimValue::Coordinates(c) => format!("POINT({}, {})", c.latitude, c.longitude),
        ClaimValue::Quantity(q) => match (q.lower_bound, q.upper_bound) {
            (Some(lo), Some(hi)) => format!("{} [{}, {}] unit=Q{}", q.amount, lo, hi, q.unit),
            _ => format!("{} unit=Q{}", q.amount, q.unit),
        },
        ClaimValue::Date(d) => format!("DATE({})", d),
        ClaimValue::SomeValue => "<some value>".to_string(),
        ClaimValue::NoValue => "<no value>".to_string(),
    }
}

fn print_entity(entity: &Entity) {
    println!(
        "{} [{}] {}",
        entity.id,
        entity.kind.as_str(),
        entity.label.as_deref().unwrap_or("<no label>")
    );
    if let Some(description) = &entity.description {
        println!("    {}", description);
    }
    if !entity.aliases.is_empty() {
        println!("    aliases: {}", entity.aliases.join(", "));
    }
    if let Some(datatype) = &entity.datatype {
        println!("    datatype: {}", datatype);
    }
    for (property, claims) in entity.claims.iter().take(10) {
        for claim in claims.iter().take(3) {
            println!("      {} = {}", property, format_value(&claim.value));
        }
        if claims.len() > 3 {
            println!("      ... and {} more for {}", claims.len() - 3, property);
        }
    }
    if entity.claims.len() > 10 {
        println!("      ... and {} more properties", entity.claims.len() - 10);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: decode_file <response.json> [language]")?;
    let mut options = DecodeOptions::new();
    if let Some(language) = args.next() {
        options = options.with_language(language);
    }

    println!("Reading: {}", path);
    let data = fs::read(&path)?;
    println!("File size: {} bytes", data.len());

    let kind = detect_envelope(&read_body(&data, &options)?);
    println!("Envelope: {:?}", kind);

    match decode_response_bytes(&data, &options)? {
        Response::Search(search) => {
            println!("\n=== Search ({}) ===", search.query.as_deref().unwrap_or(""));
            if let Some(error) = &search.error {
                println!("Failed: {}", error.message().unwrap_or("unknown error"));
            }
            for (i, hit) in search.results.iter().enumerate() {
                println!(
                    "[{}] {} {} - {}",
                    i,
                    hit.id,
                    hit.label.as_deref().unwrap_or("<no label>"),
                    hit.description.as_deref().unwrap_or("")
                );
            }
            if let Some(offset) = search.continue_offset {
                println!("More results from offset {}", offset);
            }
        }
        Response::Entities(result) => {
            println!("\n=== Entities ({}) ===", result.len());
            if let Some(error) = &result.error {
                println!("Failed: {}", error.message().unwrap_or("unknown error"));
            }
            for entity in &result.entities {
                print_entity(entity);
            }
            for id in &result.missing {
                println!("{} [missing]", id);
            }
        }
    }

    Ok(())
}
