//! Scripted anchoring session demo
//!
//! Drives a full session through the mock sensors: loads points of interest
//! from a JSON file, delivers one scripted fix and one scripted compass
//! reading, and prints the heading indicator plus the resulting placements.

use geoanchor::{
    ArSession, ConsoleSurface, GeoCoordinate, GeoFix, HeadingIndicator, HeadingSample,
    InMemoryPointStore, MockGeolocationProvider, MockOrientationSource, OrientationChannel,
    SessionConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!(
            "Usage: {} <points_json> <latitude_deg> <longitude_deg> <heading_deg>",
            args.first().map_or("geoanchor", |s| s.as_str())
        );
        return Err("Invalid arguments".into());
    }

    let points_path = &args[1];
    let latitude_deg = args[2].parse::<f64>()?;
    let longitude_deg = args[3].parse::<f64>()?;
    let heading_deg = args[4].parse::<f64>()?;

    let store = InMemoryPointStore::from_json_file(points_path)?;

    let mut provider = MockGeolocationProvider::new();
    provider.push_fix(GeoFix::new(GeoCoordinate::new(latitude_deg, longitude_deg)));

    let mut compass = MockOrientationSource::new(OrientationChannel::Absolute);
    compass.push_sample(HeadingSample::compass(heading_deg));

    let mut session = ArSession::new(
        SessionConfig::default(),
        Box::new(provider),
        Box::new(ConsoleSurface),
    )?;
    session.load_points(&store)?;
    session.attach_orientation_source(Box::new(compass));

    println!("heading: {}", HeadingIndicator::from_heading(session.heading()));
    session.start();
    session.pump();
    println!("heading: {}", HeadingIndicator::from_heading(session.heading()));

    let status = session.status();
    println!(
        "session: phase={:?} entities={} yaw={:.1}°",
        status.phase,
        status.entity_count,
        status.heading_deg.map_or(0.0, |h| -h)
    );

    session.shutdown();
    Ok(())
}
