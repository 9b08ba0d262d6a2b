//! End-to-end aggregation over the straight-line provider

use meguri_core::models::{Coordinates, RouteStop, StartLocation, TransportMode};
use meguri_route::{HaversineLegProvider, RouteAggregator};

#[tokio::test]
async fn nerima_walking_loop() {
    let start = StartLocation::new(Coordinates::new(35.7356, 139.6517), "練馬駅");
    let stops = vec![
        start.to_stop(),
        RouteStop::new("豊玉氷川神社", Coordinates::new(35.7303, 139.6601))
            .with_id("spot-1")
            .with_visit_duration(20),
        RouteStop::new("練馬区立美術館", Coordinates::new(35.7442, 139.6282))
            .with_id("spot-2")
            .with_visit_duration(60),
    ];

    let aggregator = RouteAggregator::new(HaversineLegProvider::new());
    let route = aggregator.aggregate(&stops, TransportMode::Walking, true).await.unwrap();

    assert_eq!(route.points.len(), 4);
    assert_eq!(route.summary.total_stops, 2);
    assert_eq!(route.summary.total_visit_time_minutes, 80);
    assert!(route.summary.returns_to_start);

    // legs are short urban hops: positive, each well under 10 km
    for point in &route.points[1..] {
        assert!(point.distance_from_previous_km > 0.0);
        assert!(point.distance_from_previous_km < 10.0);
    }

    // summary travel time is the exact sum of the per-point values
    let summed: u32 = route.points.iter().map(|p| p.travel_time_from_previous_minutes).sum();
    assert_eq!(route.summary.total_travel_time_minutes, summed);

    // distances add up within float tolerance
    let distance_sum: f64 = route.points.iter().map(|p| p.distance_from_previous_km).sum();
    assert!((route.summary.total_distance_km - distance_sum).abs() < 1e-9);
}
