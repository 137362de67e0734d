//! Operation feed
//!
//! This module provides the [`OperationFeed`] that drives the whole pipeline:
//! load records from a [`RecordSource`], parse them into operations, select
//! the latest executed ones and write their display blocks to an output sink.
//!
//! A record that fails to parse aborts the run before anything is written.

use crate::core::parser::parse_records;
use crate::core::selection::{select_and_format, DEFAULT_LIMIT};
use crate::core::traits::RecordSource;
use crate::types::FeedError;
use std::io::Write;
use tracing::debug;

/// Configuration of a feed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    /// Maximum number of operations to display
    pub limit: usize,
}

impl FeedConfig {
    pub fn new(limit: usize) -> Self {
        FeedConfig { limit }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pipeline driver for displaying the latest executed operations
///
/// # Examples
///
/// ```
/// use operation_feed::{FeedConfig, OperationFeed};
/// use serde_json::json;
///
/// let records = vec![json!({
///     "id": 1,
///     "state": "EXECUTED",
///     "date": "2019-08-10T00:00:00",
///     "operationAmount": { "amount": "12345.67", "currency": { "name": "USD", "code": "USD" } },
///     "description": "Оплата услуг",
///     "from": "MasterCard 123456******7890",
///     "to": "Счет **1234"
/// })];
///
/// let mut output: Vec<u8> = Vec::new();
/// let shown = OperationFeed::new(FeedConfig::default())
///     .run(&records, &mut output)
///     .unwrap();
///
/// assert_eq!(shown, 1);
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "10.08.2019 Оплата услуг\nMasterCard 1234 56** **** 7890 -> Счет **1234\n12345.67 USD\n\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperationFeed {
    config: FeedConfig,
}

impl OperationFeed {
    pub fn new(config: FeedConfig) -> Self {
        OperationFeed { config }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Run the feed once
    ///
    /// # Returns
    ///
    /// * `Ok(count)` with the number of operation blocks written
    /// * `Err(FeedError)` if loading, parsing, formatting or writing failed
    pub fn run(&self, source: &dyn RecordSource, output: &mut dyn Write) -> Result<usize, FeedError> {
        let records = source.load()?;
        debug!(records = records.len(), "loaded operation records");

        let operations = parse_records(&records)?;
        let shown = select_and_format(&operations, self.config.limit, output)?;

        debug!(shown, limit = self.config.limit, "operation feed written");
        Ok(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    fn record(id: i64, state: &str, date: &str) -> Value {
        json!({
            "id": id,
            "state": state,
            "date": date,
            "operationAmount": {
                "amount": "100.00",
                "currency": { "name": "руб.", "code": "RUB" }
            },
            "description": "Открытие вклада",
            "to": "Счет 41421565395219882431"
        })
    }

    /// Log sink shared between the subscriber and the test
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn load(&self) -> Result<Vec<Value>, FeedError> {
            Err(FeedError::FileNotFound {
                path: "operations.json".to_string(),
            })
        }
    }

    #[test]
    fn test_default_config_limit_is_five() {
        assert_eq!(FeedConfig::default().limit, 5);
        assert_eq!(OperationFeed::default().config().limit, 5);
    }

    #[test]
    fn test_run_writes_selected_blocks() {
        let records = vec![
            record(1, "EXECUTED", "2019-07-03T18:35:29.512364"),
            json!({}),
            record(2, "CANCELLED", "2019-08-03T18:35:29.512364"),
        ];

        let mut output: Vec<u8> = Vec::new();
        let shown = OperationFeed::default().run(&records, &mut output).unwrap();

        assert_eq!(shown, 1);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "03.07.2019 Открытие вклада\nСчет **2431\n100.0 руб.\n\n"
        );
    }

    #[test]
    fn test_run_respects_limit() {
        let records: Vec<Value> = (1..=4)
            .map(|day| record(day, "EXECUTED", &format!("2019-07-0{day}T00:00:00")))
            .collect();

        let mut output: Vec<u8> = Vec::new();
        let shown = OperationFeed::new(FeedConfig::new(2))
            .run(&records, &mut output)
            .unwrap();

        assert_eq!(shown, 2);
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("04.07.2019"));
        assert!(text.contains("03.07.2019"));
        assert!(!text.contains("02.07.2019"));
    }

    #[test]
    fn test_run_propagates_source_errors() {
        let mut output: Vec<u8> = Vec::new();
        let result = OperationFeed::default().run(&FailingSource, &mut output);

        assert!(matches!(result, Err(FeedError::FileNotFound { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_aborts_on_invalid_record() {
        let mut broken = record(2, "EXECUTED", "2019-07-04T00:00:00");
        broken.as_object_mut().unwrap().remove("description");
        let records = vec![record(1, "EXECUTED", "2019-07-03T00:00:00"), broken];

        let mut output: Vec<u8> = Vec::new();
        let result = OperationFeed::default().run(&records, &mut output);

        assert_eq!(result, Err(FeedError::missing_field("description")));
        assert!(output.is_empty());
    }

    #[rstest]
    #[case::info(Level::INFO, false)]
    #[case::debug(Level::DEBUG, true)]
    fn test_shown_count_is_logged_at_debug(#[case] level: Level, #[case] logged: bool) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let records = vec![record(1, "EXECUTED", "2019-07-03T00:00:00")];
        let mut output: Vec<u8> = Vec::new();
        let shown = tracing::subscriber::with_default(subscriber, || {
            OperationFeed::default().run(&records, &mut output)
        })
        .unwrap();

        assert_eq!(shown, 1);
        assert_eq!(logs.text().contains("operation feed written"), logged);
    }
}
