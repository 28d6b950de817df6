mod common;
use common::dt;
use parkledger::core::cost::{DEFAULT_RATE_PER_HOUR, parking_cost};

const RATE: f64 = DEFAULT_RATE_PER_HOUR;

#[test]
fn zero_elapsed_minutes_costs_nothing() {
    let t = dt("2025-06-01T10:00:00");
    assert_eq!(parking_cost(t, t, RATE), 0.0);
}

#[test]
fn any_started_hour_bills_in_full() {
    let t = dt("2025-06-01T10:00:00");
    assert_eq!(parking_cost(t, dt("2025-06-01T10:59:00"), RATE), RATE);
    assert_eq!(parking_cost(t, dt("2025-06-01T10:01:00"), RATE), RATE);
}

#[test]
fn one_minute_past_the_hour_bills_a_second_hour() {
    let t = dt("2025-06-01T10:00:00");
    assert_eq!(parking_cost(t, dt("2025-06-01T11:01:00"), RATE), 2.0 * RATE);
}

#[test]
fn exact_hours_bill_exactly() {
    let t = dt("2025-06-01T10:00:00");
    assert_eq!(parking_cost(t, dt("2025-06-01T11:00:00"), RATE), RATE);
    assert_eq!(parking_cost(t, dt("2025-06-01T12:00:00"), RATE), 2.0 * RATE);
}

#[test]
fn reversed_timestamps_never_go_negative() {
    let t_in = dt("2025-06-01T12:00:00");
    let t_out = dt("2025-06-01T09:00:00");
    assert_eq!(parking_cost(t_in, t_out, RATE), 0.0);
}

#[test]
fn sub_minute_elapsed_rounds_down_to_zero() {
    // 59 seconds is still zero whole minutes, so nothing is billed.
    let t = dt("2025-06-01T10:00:00");
    assert_eq!(parking_cost(t, dt("2025-06-01T10:00:59"), RATE), 0.0);
}

#[test]
fn rate_is_a_plain_multiplier() {
    let t = dt("2025-06-01T10:00:00");
    let out = dt("2025-06-01T10:30:00");
    assert_eq!(parking_cost(t, out, 35.0), 35.0);
}
