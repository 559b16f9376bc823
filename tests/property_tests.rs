use geocell::{Direction, Point, codec, neighbour, needed_precision};
use proptest::prelude::*;

fn point_strategy() -> impl Strategy<Value = Point> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Point::new(lat, lng))
}

fn hash_text_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9b-hjkmnp-z]{1,12}").unwrap()
}

proptest! {
    #[test]
    fn prop_decode_reencodes_to_same_text(point in point_strategy(), precision in 0u8..=60) {
        let hash = codec::encode(&point, precision);

        if let Some(center) = codec::decode(hash.text()).unwrap() {
            let again = codec::encode(&center, precision);
            prop_assert_eq!(again.text(), hash.text());
        } else {
            prop_assert!(hash.text().is_empty());
        }
    }

    #[test]
    fn prop_encode_is_deterministic(point in point_strategy(), precision in 0u8..=60) {
        prop_assert_eq!(codec::encode(&point, precision), codec::encode(&point, precision));
    }

    #[test]
    fn prop_north_then_south_returns(text in hash_text_strategy()) {
        let north = neighbour(&text, Direction::North).unwrap();
        prop_assert_eq!(neighbour(&north, Direction::South).unwrap(), text.clone());

        let east = neighbour(&text, Direction::East).unwrap();
        prop_assert_eq!(neighbour(&east, Direction::West).unwrap(), text);
    }

    #[test]
    fn prop_neighbour_keeps_length(text in hash_text_strategy()) {
        for direction in Direction::ALL {
            prop_assert_eq!(neighbour(&text, direction).unwrap().len(), text.len());
        }
    }

    #[test]
    fn prop_needed_precision_monotonic(a in 1e-9f64..1e5, b in 1e-9f64..1e5) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(needed_precision(large) <= needed_precision(small));
        prop_assert_eq!(needed_precision(a) % 2, 0);
    }
}
