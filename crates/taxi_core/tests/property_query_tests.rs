use proptest::prelude::*;
use taxi_core::synthetic::{generate_park, SyntheticParkParams};
use taxi_core::TaxiPark;

fn arb_park() -> impl Strategy<Value = TaxiPark> {
    (
        1u32..15,
        1u32..25,
        0usize..80,
        0.0f64..=1.0,
        0.0f64..=1.0,
        any::<u64>(),
    )
        .prop_map(|(drivers, passengers, trips, active, discount, seed)| {
            generate_park(&SyntheticParkParams {
                num_drivers: drivers,
                num_passengers: passengers,
                num_trips: trips,
                active_driver_share: active,
                discount_probability: discount,
                seed,
                ..SyntheticParkParams::default()
            })
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn fake_drivers_never_drove(park in arb_park()) {
        let fake = park.find_fake_drivers();
        prop_assert!(fake.is_subset(&park.all_drivers));
        prop_assert!(park.trips.iter().all(|t| !fake.contains(&t.driver)));
    }

    #[test]
    fn faithful_with_zero_minimum_is_all_passengers(park in arb_park()) {
        prop_assert_eq!(park.find_faithful_passengers(0), park.all_passengers.clone());
    }

    #[test]
    fn faithful_sets_shrink_as_minimum_grows(park in arb_park(), min in 0usize..10) {
        let looser = park.find_faithful_passengers(min);
        let stricter = park.find_faithful_passengers(min + 1);
        prop_assert!(stricter.is_subset(&looser));
    }

    #[test]
    fn frequent_passengers_need_two_trips_with_driver(park in arb_park()) {
        for driver in &park.all_drivers {
            let trips: Vec<_> = park.trips_by(driver).collect();
            let frequent = park.find_frequent_passengers(driver);
            if trips.len() < 2 {
                prop_assert!(frequent.is_empty());
            }
            for passenger in &frequent {
                let rides = trips.iter().filter(|t| t.has_passenger(passenger)).count();
                prop_assert!(rides > 1);
            }
        }
    }

    #[test]
    fn smart_passengers_have_more_discounted_trips(park in arb_park()) {
        for passenger in park.find_smart_passengers() {
            let (discounted, full): (Vec<_>, Vec<_>) = park
                .trips
                .iter()
                .filter(|t| t.has_passenger(&passenger))
                .partition(|t| t.is_discounted());
            prop_assert!(discounted.len() > full.len());
        }
    }

    #[test]
    fn most_frequent_period_is_maximal(park in arb_park()) {
        let histogram = park.trip_duration_histogram(10);
        match park.most_frequent_trip_duration_period() {
            None => prop_assert!(park.trips.is_empty()),
            Some(period) => {
                prop_assert_eq!(period.end() - period.start(), 9);
                prop_assert_eq!(period.start() % 10, 0);
                let best = histogram[period.start()];
                prop_assert!(histogram.values().all(|count| *count <= best));
            }
        }
    }

    #[test]
    fn pareto_never_holds_without_trips(drivers in 0u32..30) {
        let park = generate_park(
            &SyntheticParkParams::default().with_drivers(drivers).with_trips(0),
        );
        prop_assert!(!park.check_pareto_principle());
    }
}
