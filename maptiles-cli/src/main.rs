use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use maptiles::{LatLng, MapTileProviderBuilder, Subdomains, TileJson};

#[derive(Parser, Debug)]
#[command(
    name = "maptiles-cli",
    about = "Print the tile key and request URI for a location using a TileJSON provider"
)]
struct Args {
    /// Path to a TileJSON document
    tilejson: PathBuf,

    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,

    /// Zoom level, clamped to the provider's range
    #[arg(short, long, default_value = "10")]
    zoom: u8,

    /// Extra template variable as key=value (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    vars: Vec<String>,

    /// Comma-separated shard names substituted for {s}
    #[arg(long, value_delimiter = ',', default_value = "a,b,c")]
    subdomains: Vec<String>,

    /// Print the provider back out as TileJSON
    #[arg(long)]
    dump: bool,
}

fn parse_var(var: &str) -> Result<(&str, &str)> {
    match var.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("expected KEY=VALUE, got `{}`", var),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.tilejson)
        .with_context(|| format!("reading {}", args.tilejson.display()))?;
    let doc: TileJson = text
        .parse()
        .with_context(|| format!("parsing {}", args.tilejson.display()))?;

    let mut builder = MapTileProviderBuilder::from_tilejson(&doc)?
        .with_resolver(Subdomains::new(args.subdomains.iter().cloned()));
    for var in &args.vars {
        let (key, value) = parse_var(var)?;
        builder = builder.with_value(key, value);
    }
    let provider = builder.build()?;
    log::info!("Loaded provider {} ({})", provider.id(), provider.name());

    let location = LatLng::new(args.lat, args.lng);
    if !location.is_valid() {
        log::warn!("{:?} is outside the valid coordinate range", location);
    }

    let key = provider.tile_key_for(&location, args.zoom).wrapped();
    let uri = provider.tile_uri(&key)?;

    println!("provider: {}", provider.id());
    println!("tile:     {}", key);
    println!("uri:      {}", uri);

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&provider.to_json()?)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_var("token=abc").unwrap(), ("token", "abc"));
        assert_eq!(parse_var("empty=").unwrap(), ("empty", ""));
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=value").is_err());
    }
}
