// File: crates/tics-core/tests/values.rs
// Purpose: Enumerating tic values and locating major tics among minor ones.

use tics_core::{tic_values, AxisRange, AxisTics, TicSequence};

#[test]
fn values_are_indexed_not_accumulated() {
    let v: Vec<f64> = tic_values(0.0, 0.1, 31).collect();
    assert_eq!(v.len(), 31);
    assert_eq!(v[30], 30.0 * 0.1);
    let back: Vec<f64> = tic_values(1.0, 0.5, 3).rev().collect();
    assert_eq!(back, vec![2.0, 1.5, 1.0]);
}

#[test]
fn iterator_reports_exact_length() {
    let mut it = tic_values(-1.0, 0.25, 5);
    assert_eq!(it.len(), 5);
    it.next();
    it.next_back();
    assert_eq!(it.len(), 3);
    assert_eq!(tic_values(0.0, 1.0, 0).count(), 0);
}

#[test]
fn sequence_last_value() {
    assert_eq!(TicSequence::new(0, 1.0, 3.0).last(), None);
    assert_eq!(TicSequence::new(4, 0.5, -1.0).last(), Some(0.5));
}

#[test]
fn major_values_for_sampled_axis() {
    let t = AxisTics::with_interval(-1.3, 1.699, 0.5).unwrap();
    let v: Vec<f64> = t.major().values().collect();
    assert_eq!(v, vec![-1.0, -0.5, 0.0, 0.5, 1.0, 1.5]);
}

#[test]
fn major_tics_sit_on_every_multiple_th_minor() {
    let t = AxisTics::with_interval(0.0, 10.0, 1.0).unwrap();
    assert!(t.is_major(0));
    assert!(!t.is_major(5));
    assert!(t.is_major(10));
    assert!(t.is_major(100));
    assert!(!t.is_major(101));

    // minor run starts three steps before the first major tic
    let t = AxisTics::with_interval(-1.3, 1.699, 0.5).unwrap();
    assert!(!t.is_major(0));
    assert!(t.is_major(3));
    assert!(t.is_major(8));
    let majors: Vec<f64> = t
        .minor()
        .values()
        .enumerate()
        .filter(|&(i, _)| t.is_major(i))
        .map(|(_, x)| x)
        .collect();
    assert_eq!(majors.len(), t.count_major());
    for (a, b) in majors.iter().zip(t.major().values()) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn range_normalizes_and_pads() {
    let r = AxisRange::new(4.0, -2.0).unwrap();
    assert_eq!((r.min, r.max), (-2.0, 4.0));
    assert_eq!(r.span(), 6.0);
    let p = r.padded(0.5);
    assert_eq!((p.min, p.max), (-5.0, 7.0));
    assert!(p.contains(-5.0) && !p.contains(7.5));
    assert!(AxisRange::new(1.0, 1.0).unwrap().is_degenerate());
    assert!(AxisRange::new(f64::NAN, 1.0).is_err());
}
