pub mod error_tracking;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::application::SearchStrategy;

#[derive(Default)]
pub struct AppMetrics {
    request_count: AtomicU64,
    client_error_count: AtomicU64,
    error_count: AtomicU64,
    latency_total_ms: AtomicU64,
    latency_count: AtomicU64,
    bounded_searches: AtomicU64,
    full_scan_searches: AtomicU64,
    search_results: AtomicU64,
}

impl AppMetrics {
    pub fn record_request(&self, status: u16, latency_ms: u64) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        match status {
            400..=499 => {
                self.client_error_count.fetch_add(1, Ordering::Relaxed);
            }
            500.. => {
                self.error_count.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
        self.latency_total_ms.fetch_add(latency_ms, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_search(&self, strategy: SearchStrategy, results: usize) {
        let counter = match strategy {
            SearchStrategy::BoundingBox => &self.bounded_searches,
            SearchStrategy::FullScan => &self.full_scan_searches,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.search_results
            .fetch_add(results as u64, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self, db_size: u32, db_idle: usize) -> String {
        let count = self.latency_count.load(Ordering::Relaxed).max(1);
        let avg_latency = self.latency_total_ms.load(Ordering::Relaxed) as f64 / count as f64;

        format!(
            concat!(
                "# TYPE http_requests_total counter\n",
                "http_requests_total {}\n",
                "# TYPE http_client_error_total counter\n",
                "http_client_error_total {}\n",
                "# TYPE http_error_total counter\n",
                "http_error_total {}\n",
                "# TYPE http_latency_avg_ms gauge\n",
                "http_latency_avg_ms {:.2}\n",
                "# TYPE address_searches_total counter\n",
                "address_searches_total{{strategy=\"bounding_box\"}} {}\n",
                "address_searches_total{{strategy=\"full_scan\"}} {}\n",
                "# TYPE address_search_results_total counter\n",
                "address_search_results_total {}\n",
                "# TYPE db_pool_size gauge\n",
                "db_pool_size {}\n",
                "# TYPE db_pool_idle gauge\n",
                "db_pool_idle {}\n",
            ),
            self.request_count.load(Ordering::Relaxed),
            self.client_error_count.load(Ordering::Relaxed),
            self.error_count.load(Ordering::Relaxed),
            avg_latency,
            self.bounded_searches.load(Ordering::Relaxed),
            self.full_scan_searches.load(Ordering::Relaxed),
            self.search_results.load(Ordering::Relaxed),
            db_size,
            db_idle,
        )
    }
}
