//! Synthetic measurement documents: ten Finnish locations with fifty random
//! days each between 2023-01-01 and 2025-12-31.

use chrono::{Datelike, Duration, NaiveDate};
use rand::{seq::index, Rng};
use serde_json::{json, Value};

pub const LOCATIONS: [&str; 10] = [
    "Helsinki",
    "Tampere",
    "Turku",
    "Oulu",
    "Jyväskylä",
    "Rovaniemi",
    "Kuopio",
    "Lahti",
    "Joensuu",
    "Vaasa",
];

pub const DOCS_PER_LOCATION: usize = 50;

/// Plausible monthly temperature band in Finland, southern baseline.
fn monthly_range(month: u32) -> (f64, f64) {
    match month {
        1 => (-15.0, -3.0),
        2 => (-14.0, -2.0),
        3 => (-8.0, 3.0),
        4 => (-2.0, 10.0),
        5 => (5.0, 17.0),
        6 => (11.0, 22.0),
        7 => (14.0, 25.0),
        8 => (13.0, 23.0),
        9 => (7.0, 17.0),
        10 => (1.0, 10.0),
        11 => (-5.0, 4.0),
        12 => (-12.0, 1.0),
        _ => unreachable!("month out of range"),
    }
}

/// Northern locations run colder than the southern baseline.
fn north_offset(location: &str) -> f64 {
    match location {
        "Rovaniemi" => -5.0,
        "Oulu" => -3.0,
        "Joensuu" => -2.0,
        "Kuopio" => -1.0,
        _ => 0.0,
    }
}

/// Generates the full synthetic dataset. The random source is passed in, so
/// a fixed seed reproduces the same documents.
pub fn documents<R: Rng>(rng: &mut R) -> Vec<Value> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    let total_days = ((end - start).num_days() + 1) as usize;

    let mut documents = Vec::with_capacity(LOCATIONS.len() * DOCS_PER_LOCATION);
    let mut idx = 1;

    for location in LOCATIONS {
        let offset = north_offset(location);
        let mut day_offsets = index::sample(rng, total_days, DOCS_PER_LOCATION).into_vec();
        day_offsets.sort_unstable();

        for day_offset in day_offsets {
            let date = start + Duration::days(day_offset as i64);
            let (lo, hi) = monthly_range(date.month());
            let temperature = round1(rng.gen_range(lo + offset..hi + offset));

            documents.push(json!({
                "id": format!("doc-{:04}", idx),
                "content": {
                    "paikkakunta": location,
                    "pvm": date.format("%Y-%m-%d").to_string(),
                    "lämpötila": temperature,
                },
            }));
            idx += 1;
        }
    }

    documents
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn should_generate_five_hundred_documents_with_unique_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let documents = documents(&mut rng);

        assert_eq!(documents.len(), 500);
        assert_eq!(documents[0]["id"], "doc-0001");
        assert_eq!(documents[499]["id"], "doc-0500");

        let ids: HashSet<&str> = documents
            .iter()
            .map(|d| d["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn should_nest_fields_under_content_with_accented_temperature_key() {
        let mut rng = StdRng::seed_from_u64(7);
        let documents = documents(&mut rng);

        for document in &documents {
            let content = &document["content"];
            assert!(content["paikkakunta"].is_string());
            assert!(content["pvm"].is_string());
            assert!(content["lämpötila"].is_number());
            assert!(content.get("lampotila").is_none());
        }
    }

    #[test]
    fn should_keep_dates_in_window_and_sorted_per_location() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let documents = documents(&mut rng);

        for chunk in documents.chunks(DOCS_PER_LOCATION) {
            let dates: Vec<NaiveDate> = chunk
                .iter()
                .map(|d| {
                    NaiveDate::parse_from_str(d["content"]["pvm"].as_str().unwrap(), "%Y-%m-%d")
                        .unwrap()
                })
                .collect();

            let locations: HashSet<&str> = chunk
                .iter()
                .map(|d| d["content"]["paikkakunta"].as_str().unwrap())
                .collect();
            assert_eq!(locations.len(), 1);

            let mut sorted = dates.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(dates, sorted);

            for date in dates {
                assert!(date >= start && date <= end);
            }
        }
    }

    #[test]
    fn should_keep_temperatures_inside_the_monthly_band() {
        let mut rng = StdRng::seed_from_u64(13);
        let documents = documents(&mut rng);

        for document in &documents {
            let content = &document["content"];
            let location = content["paikkakunta"].as_str().unwrap();
            let date =
                NaiveDate::parse_from_str(content["pvm"].as_str().unwrap(), "%Y-%m-%d").unwrap();
            let temperature = content["lämpötila"].as_f64().unwrap();

            let (lo, hi) = monthly_range(date.month());
            let offset = north_offset(location);

            // One-decimal rounding can nudge a value past the band edge.
            assert!(temperature >= lo + offset - 0.05);
            assert!(temperature <= hi + offset + 0.05);
        }
    }

    #[test]
    fn should_reproduce_the_dataset_under_a_fixed_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        assert_eq!(documents(&mut a), documents(&mut b));
    }
}
