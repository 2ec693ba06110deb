use crate::models::restaurant::RestaurantRecord;

pub fn format_listing(city: &str, records: &[RestaurantRecord]) -> String {
    if records.is_empty() {
        return format!("No restaurants found for {}.\n", city);
    }

    let mut out = format!("Top {} restaurants in {}:\n", records.len(), city);
    for (i, record) in records.iter().enumerate() {
        let rating = record
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "n/a".to_string());
        let price = record
            .price_level
            .map(|p| p.to_string())
            .unwrap_or_else(|| "n/a".to_string());

        out.push_str(&format!(
            "{}. {} - {} | Rating: {} ({} reviews) | Price: {}\n",
            i + 1,
            record.name,
            record.address,
            rating,
            record.user_ratings_total.unwrap_or(0),
            price,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::restaurant::PriceLevel;

    #[test]
    fn empty_listing_says_so() {
        assert_eq!(format_listing("Ipoh", &[]), "No restaurants found for Ipoh.\n");
    }

    #[test]
    fn lists_in_order_with_placeholders() {
        let records = vec![
            RestaurantRecord {
                name: "Nasi Kandar Pelita".to_string(),
                address: "149 Jalan Ampang".to_string(),
                rating: Some(4.2),
                user_ratings_total: Some(9120),
                price_level: Some(PriceLevel::Inexpensive),
                place_id: "p1".to_string(),
                google_maps_url: None,
                website: None,
                review_snippets: Vec::new(),
            },
            RestaurantRecord {
                name: "Pop-up Stall".to_string(),
                address: "Jalan Alor".to_string(),
                rating: None,
                user_ratings_total: None,
                price_level: None,
                place_id: "p2".to_string(),
                google_maps_url: None,
                website: None,
                review_snippets: Vec::new(),
            },
        ];

        let listing = format_listing("Kuala Lumpur", &records);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines[0], "Top 2 restaurants in Kuala Lumpur:");
        assert_eq!(
            lines[1],
            "1. Nasi Kandar Pelita - 149 Jalan Ampang | Rating: 4.2 (9120 reviews) | Price: Inexpensive"
        );
        assert_eq!(lines[2], "2. Pop-up Stall - Jalan Alor | Rating: n/a (0 reviews) | Price: n/a");
    }
}
