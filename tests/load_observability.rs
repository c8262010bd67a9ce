use std::sync::{Arc, Mutex};

use sales_analytics::ingestion::{
    load_sales_from_path, load_sales_from_reader, LoadObserver, LoadOptions, LoadStats,
};
use sales_analytics::SalesError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    date_failures: Mutex<Vec<(usize, String)>>,
    failures: Mutex<Vec<String>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_date_parse_failure(&self, line: usize, raw: &str) {
        self.date_failures
            .lock()
            .unwrap()
            .push((line, raw.to_string()));
    }

    fn on_failure(&self, error: &SalesError) {
        self.failures.lock().unwrap().push(error.to_string());
    }
}

#[test]
fn observer_receives_success_stats() {
    let obs = Arc::new(RecordingObserver::default());
    let options = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let sales = load_sales_from_path("tests/fixtures/product_sale.csv", &options).unwrap();

    let successes = obs.successes.lock().unwrap();
    assert_eq!(
        *successes,
        vec![LoadStats {
            rows: sales.len(),
            dates_unset: 0
        }]
    );
    assert!(obs.date_failures.lock().unwrap().is_empty());
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_on_missing_source() {
    let obs = Arc::new(RecordingObserver::default());
    let options = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let _ = load_sales_from_path("tests/fixtures/does_not_exist.csv", &options).unwrap_err();

    let failures = obs.failures.lock().unwrap();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].contains("io error"));
    assert!(obs.successes.lock().unwrap().is_empty());
}

#[test]
fn observer_is_told_about_each_unparsable_date() {
    let obs = Arc::new(RecordingObserver::default());
    let options = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let input = "Product Name,Sale Id,Sale Date,Sale Amount\n\
                 Product1,101,\"2014-12-01 10:15:00\",10.00\n\
                 Product2,102,\"05.12.2014\",20.00\n\
                 Product3,103,\"not a date\",30.00\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let sales = load_sales_from_reader(&mut rdr, &options).unwrap();
    assert_eq!(sales.len(), 3);
    assert_eq!(sales.iter().filter(|s| s.sale_date.is_none()).count(), 2);

    let date_failures = obs.date_failures.lock().unwrap();
    assert_eq!(
        *date_failures,
        vec![
            (3, "05.12.2014".to_string()),
            (4, "not a date".to_string())
        ]
    );
}
