use crate::models::restaurant::RestaurantRecord;

/// `rating * (1 + log10(1 + reviews))`, missing values counting as zero.
pub fn composite_score(rating: Option<f64>, review_count: Option<u64>) -> f64 {
    let r = rating.unwrap_or(0.0);
    let v = review_count.unwrap_or(0) as f64;
    r * (1.0 + (1.0 + v).log10())
}

/// Highest score first. Stable, so equal scores keep provider order.
pub fn rank_by_composite_score(mut records: Vec<RestaurantRecord>) -> Vec<RestaurantRecord> {
    records.sort_by(|a, b| {
        let a = composite_score(a.rating, a.user_ratings_total);
        let b = composite_score(b.rating, b.user_ratings_total);
        b.total_cmp(&a)
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(place_id: &str, rating: Option<f64>, reviews: Option<u64>) -> RestaurantRecord {
        RestaurantRecord {
            name: place_id.to_uppercase(),
            address: "somewhere".to_string(),
            rating,
            user_ratings_total: reviews,
            price_level: None,
            place_id: place_id.to_string(),
            google_maps_url: None,
            website: None,
            review_snippets: Vec::new(),
        }
    }

    #[test]
    fn unrated_places_score_zero() {
        assert_eq!(composite_score(None, Some(500)), 0.0);
        assert_eq!(composite_score(Some(4.0), None), 4.0);
        assert!((composite_score(Some(4.0), Some(9)) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn review_volume_outweighs_small_rating_gap() {
        let ranked = rank_by_composite_score(vec![
            record("a", Some(4.9), Some(3)),
            record("b", Some(4.5), Some(2000)),
            record("c", None, None),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.place_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn ties_keep_provider_order() {
        let ranked = rank_by_composite_score(vec![
            record("first", Some(4.0), Some(10)),
            record("second", Some(4.0), Some(10)),
            record("third", Some(4.0), Some(10)),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.place_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}
