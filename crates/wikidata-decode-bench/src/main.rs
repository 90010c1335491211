//! Throughput benchmark for Wikibase response decoding.
//!
//! Synthesizes a large get-entities envelope covering every value kind and a
//! matching search envelope, then times the decoders on plain and
//! zstd-compressed bodies.

use std::time::Instant;

use serde_json::{json, Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wikidata_decode::{
    decode_entities, decode_entities_bytes, decode_search, DecodeOptions, limits::MAX_ENTITIES,
};

const DECODE_ITERS: u32 = 10;

// =============================================================================
// SYNTHETIC DATA
// =============================================================================

fn statement(property: &str, datatype: &str, value_type: &str, value: Value) -> Value {
    json!({
        "mainsnak": {
            "snaktype": "value",
            "property": property,
            "datatype": datatype,
            "datavalue": {"value": value, "type": value_type}
        },
        "type": "statement",
        "rank": "normal"
    })
}

fn make_entity(n: u64) -> Value {
    let id = format!("Q{n}");
    let mut claims = Map::new();
    claims.insert(
        "P31".into(),
        json!([statement(
            "P31",
            "wikibase-item",
            "wikibase-entityid",
            json!({"entity-type": "item", "numeric-id": 515, "id": "Q515"})
        )]),
    );
    claims.insert(
        "P625".into(),
        json!([statement(
            "P625",
            "globe-coordinate",
            "globecoordinate",
            json!({"latitude": 40.0 + (n % 50) as f64 / 10.0, "longitude": -73.9, "precision": 0.0001})
        )]),
    );
    claims.insert(
        "P1082".into(),
        json!([statement(
            "P1082",
            "quantity",
            "quantity",
            json!({"amount": format!("+{}", 1000 + n), "unit": "1"})
        )]),
    );
    claims.insert(
        "P571".into(),
        json!([statement(
            "P571",
            "time",
            "time",
            json!({
                "time": format!("+{}-05-01T00:00:00Z", 1000 + n % 1000),
                "timezone": 0,
                "before": 0,
                "after": 0,
                "precision": 11,
                "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
            })
        )]),
    );
    claims.insert(
        "P1448".into(),
        json!([statement(
            "P1448",
            "monolingualtext",
            "monolingualtext",
            json!({"text": format!("City {n}"), "language": "en"})
        )]),
    );
    claims.insert(
        "P18".into(),
        json!([statement("P18", "commonsMedia", "string", json!(format!("City_{n}.jpg")))]),
    );
    claims.insert(
        "P214".into(),
        json!([statement("P214", "external-id", "string", json!(n.to_string()))]),
    );

    json!({
        "id": id,
        "type": "item",
        "labels": {
            "en": {"language": "en", "value": format!("City {n}")},
            "de": {"language": "de", "value": format!("Stadt {n}")}
        },
        "descriptions": {"en": {"language": "en", "value": "synthetic city"}},
        "aliases": {"en": [{"language": "en", "value": format!("C{n}")}]},
        "claims": claims
    })
}

fn make_entities_body(count: u64) -> String {
    let mut entities = Map::new();
    for n in 1..=count {
        entities.insert(format!("Q{n}"), make_entity(n));
    }
    json!({"entities": entities, "success": 1}).to_string()
}

fn make_search_body(count: u64) -> String {
    let hits: Vec<Value> = (1..=count)
        .map(|n| json!({"id": format!("Q{n}"), "label": format!("City {n}"), "description": "synthetic city"}))
        .collect();
    json!({"searchinfo": {"search": "city"}, "search": hits, "success": 1}).to_string()
}

fn throughput(bytes: usize, secs: f64) -> f64 {
    (bytes as f64 / 1_000_000.0) / secs
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(MAX_ENTITIES as u64)
        .min(MAX_ENTITIES as u64);

    let build_start = Instant::now();
    let entities_body = make_entities_body(count);
    let search_body = make_search_body(count);
    info!(entities = count, elapsed = ?build_start.elapsed(), "synthesized bodies");

    println!(
        "Entities body: {} bytes ({:.1} MB)",
        entities_body.len(),
        entities_body.len() as f64 / 1_000_000.0
    );

    // Warmup
    for _ in 0..3 {
        let _ = decode_entities(&entities_body).expect("Failed to decode entities");
    }

    let decode_start = Instant::now();
    let mut decoded = None;
    for _ in 0..DECODE_ITERS {
        decoded = Some(decode_entities(&entities_body).expect("Failed to decode entities"));
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;
    let decoded = decoded.expect("at least one iteration");
    assert_eq!(decoded.len() as u64, count);

    let total_claims: usize = decoded.entities.iter().map(|e| e.claims.claims().count()).sum();
    println!(
        "\nDecode entities: {:?} (avg of {} iterations)",
        decode_time, DECODE_ITERS
    );
    println!("  {} entities, {} claims", decoded.len(), total_claims);
    println!(
        "  Throughput: {:.2} MB/s",
        throughput(entities_body.len(), decode_time.as_secs_f64())
    );

    // Compressed
    let compress_start = Instant::now();
    let compressed = zstd::encode_all(entities_body.as_bytes(), 3).expect("Failed to compress");
    let compress_time = compress_start.elapsed();
    println!(
        "\nCompressed (level 3): {} bytes in {:?}",
        compressed.len(),
        compress_time
    );
    println!(
        "  Compression ratio: {:.1}x",
        entities_body.len() as f64 / compressed.len() as f64
    );

    let options = DecodeOptions::default();
    let decode_compressed_start = Instant::now();
    for _ in 0..DECODE_ITERS {
        let result = decode_entities_bytes(&compressed, &options).expect("Failed to decode compressed");
        assert_eq!(result.len() as u64, count);
    }
    let decode_compressed_time = decode_compressed_start.elapsed() / DECODE_ITERS;
    println!(
        "\nDecode entities (compressed): {:?} (avg of {} iterations)",
        decode_compressed_time, DECODE_ITERS
    );
    println!(
        "  Throughput: {:.2} MB/s (uncompressed equivalent)",
        throughput(entities_body.len(), decode_compressed_time.as_secs_f64())
    );

    // Search
    let search_start = Instant::now();
    for _ in 0..DECODE_ITERS {
        let search = decode_search(&search_body).expect("Failed to decode search");
        assert_eq!(search.len() as u64, count);
    }
    let search_time = search_start.elapsed() / DECODE_ITERS;
    println!(
        "\nDecode search: {:?} (avg of {} iterations)",
        search_time, DECODE_ITERS
    );
    println!(
        "  Throughput: {:.2} MB/s",
        throughput(search_body.len(), search_time.as_secs_f64())
    );
}
