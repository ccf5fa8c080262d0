//! End-to-end anchoring walkthrough on mock sensors
//!
//! Run with: cargo run --example anchoring_demo

use geoanchor::{
    ArSession, GeoCoordinate, GeoFix, GeolocationError, HeadingIndicator, HeadingSample,
    MockGeolocationProvider, MockOrientationSource, OrientationChannel, RecordingSurface,
    SessionConfig, SessionPhase,
};

fn demo_projection() {
    println!("=== Tangent-plane projection ===");
    let origin = GeoCoordinate::new(47.6062, -122.3321);
    let targets = [
        ("due north 11m", GeoCoordinate::new(47.6063, -122.3321)),
        ("due east", GeoCoordinate::new(47.6062, -122.3320)),
        ("diagonal", GeoCoordinate::new(47.6063, -122.3320)),
    ];
    for (label, target) in targets {
        let offset = geoanchor::project(origin, target);
        println!(
            "  {:<14} x={:>7.2} m  z={:>7.2} m  ({:.2} m away)",
            label,
            offset.x,
            offset.z,
            geoanchor::ground_distance(origin, target)
        );
    }
    println!();
}

fn demo_session() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Scripted session: failure, retry, calibration ===");

    let mut provider = MockGeolocationProvider::new();
    provider.push_error(GeolocationError::Timeout { waited_ms: 5000 });
    provider.push_fix(GeoFix::new(GeoCoordinate::new(47.6062, -122.3321)).with_accuracy(4.0));

    // Two redundant orientation channels; the relative one delivers the
    // usable angle first
    let mut absolute = MockOrientationSource::new(OrientationChannel::Absolute);
    absolute.push_sample(HeadingSample::blank());
    let mut relative = MockOrientationSource::new(OrientationChannel::Relative);
    relative.push_sample(HeadingSample::rotation(318.0));
    let absolute_active = absolute.active_handle();
    let relative_active = relative.active_handle();

    let surface = RecordingSurface::new();
    let frames = surface.frames_handle();

    let mut session = ArSession::new(
        SessionConfig::default(),
        Box::new(provider),
        Box::new(surface),
    )?;
    session.attach_orientation_source(Box::new(absolute));
    session.attach_orientation_source(Box::new(relative));

    session.start();
    session.pump();
    let status = session.status();
    println!(
        "  after first pump: phase={:?}, error={:?}",
        status.phase, status.last_location_error
    );
    println!(
        "  overlay: {}",
        HeadingIndicator::from_heading(status.heading_deg)
    );

    println!("  retrying location...");
    session.retry_location();
    session.pump();
    let status = session.status();
    assert_eq!(status.phase, SessionPhase::Anchored);
    println!(
        "  after retry: phase={:?}, entities={}, overlay: {}",
        status.phase,
        status.entity_count,
        HeadingIndicator::from_heading(status.heading_deg)
    );
    println!(
        "  orientation channels active: absolute={}, relative={}",
        absolute_active.get(),
        relative_active.get()
    );

    let borrowed = frames.borrow();
    let pose = borrowed.last().expect("a frame was presented");
    println!("  scene yaw: {:.1}°", pose.yaw_degrees);
    for placement in &pose.placements {
        println!(
            "    {:<10} x={:>7.2} m  z={:>7.2} m",
            placement.entity_id, placement.offset.x, placement.offset.z
        );
    }
    drop(borrowed);

    session.shutdown();
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo_projection();
    demo_session()
}
