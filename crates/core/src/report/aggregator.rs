//! Usage aggregation over the weekly report window.
//!
//! A single pass over the raw events builds two accumulators (calendar day
//! to minutes, domain to minutes), which are then projected into the two
//! ordered output views. The accumulators are local to the call; the
//! function is pure.

use std::collections::HashMap;

use chrono::NaiveDate;
use tabtally_domain::{round_minutes, ActivityEvent, DailyUsage, DomainUsage, WeeklyReport};

/// Per-domain running total, tagged with the order the domain was first
/// seen in the input so ties can be broken deterministically.
struct DomainAccumulator {
    first_seen: usize,
    total_minutes: f64,
}

/// Aggregate raw events into the weekly report views.
///
/// `daily` contains one entry per element of `days`, in the same order,
/// zero-filled for days without data and rounded to two decimals.
/// `domains` contains every observed domain sorted descending by total
/// minutes; equal totals keep first-seen input order. Domain totals are not
/// rounded here - that happens at display time.
///
/// Events whose close date falls outside `days` (a caller filtering bug)
/// never surface in `daily`, which is built from the fixed day list, but
/// they still count toward their domain's total.
pub fn aggregate(events: &[ActivityEvent], days: &[NaiveDate]) -> WeeklyReport {
    let mut by_day: HashMap<NaiveDate, f64> = HashMap::new();
    let mut by_domain: HashMap<String, DomainAccumulator> = HashMap::new();

    for event in events {
        let minutes = event.active_minutes();

        if let Some(day) = event.date_local() {
            *by_day.entry(day).or_insert(0.0) += minutes;
        }

        let next_rank = by_domain.len();
        by_domain
            .entry(event.domain.clone())
            .or_insert(DomainAccumulator { first_seen: next_rank, total_minutes: 0.0 })
            .total_minutes += minutes;
    }

    let daily = days
        .iter()
        .map(|day| DailyUsage {
            day: *day,
            total_minutes: round_minutes(by_day.get(day).copied().unwrap_or(0.0)),
        })
        .collect();

    let mut ranked: Vec<(usize, DomainUsage)> = by_domain
        .into_iter()
        .map(|(domain, acc)| (acc.first_seen, DomainUsage { domain, total_minutes: acc.total_minutes }))
        .collect();
    // Explicit tie-break on first-seen order instead of relying on map
    // iteration order.
    ranked.sort_by(|a, b| {
        b.1.total_minutes.total_cmp(&a.1.total_minutes).then(a.0.cmp(&b.0))
    });

    WeeklyReport { daily, domains: ranked.into_iter().map(|(_, usage)| usage).collect() }
}
