//! Property-based tests for opldb-query using proptest.

use opldb_core::schema::{ColumnSet, OplColumn};
use opldb_core::{OplTable, Row, Value};
use opldb_query::{filter, make_indices, sort_numeric, sort_numeric_by2, uniq_by_name, Order};
use proptest::prelude::*;
use std::collections::HashSet;

/// A cell that is numeric most of the time, sometimes junk or missing.
fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        6 => (-50i32..50).prop_map(|n| Value::from(n.to_string())),
        1 => Just(Value::from("")),
        1 => Just(Value::from("DQ")),
        1 => Just(Value::Null),
    ]
}

fn lifters() -> impl Strategy<Value = OplTable> {
    prop::collection::vec((0u8..6, cell(), cell()), 0..60).prop_map(|rows| {
        let rows = rows
            .into_iter()
            .map(|(name, total, wilks)| {
                let mut cells = vec![Value::Null; OplColumn::width()];
                cells[OplColumn::Name.index()] = Value::from(format!("lifter{}", name));
                cells[OplColumn::TotalKg.index()] = total;
                cells[OplColumn::Wilks.index()] = wilks;
                Row::new(cells)
            })
            .collect();
        OplTable::new(rows).unwrap()
    })
}

fn order() -> impl Strategy<Value = Order> {
    prop_oneof![Just(Order::Asc), Just(Order::Desc)]
}

fn total(table: &OplTable, i: usize) -> Option<f64> {
    table.get(i).unwrap().number(OplColumn::TotalKg)
}

fn wilks(table: &OplTable, i: usize) -> Option<f64> {
    table.get(i).unwrap().number(OplColumn::Wilks)
}

fn in_order(order: Order, a: f64, b: f64) -> bool {
    match order {
        Order::Asc => a <= b,
        Order::Desc => a >= b,
    }
}

proptest! {
    /// Test that the index builder yields the identity sequence.
    #[test]
    fn make_indices_is_identity(table in lifters()) {
        let indices = make_indices(&table);
        prop_assert_eq!(indices.len(), table.len());
        for (pos, &i) in indices.iter().enumerate() {
            prop_assert_eq!(pos, i);
        }
    }

    /// Test that filter returns an order-preserving subsequence of matches.
    #[test]
    fn filter_is_ordered_subsequence(table in lifters(), threshold in -50.0f64..50.0) {
        let all = make_indices(&table);
        let pred = |row: &Row| row.number(OplColumn::TotalKg).is_some_and(|t| t > threshold);
        let out = filter(&table, &all, pred);

        prop_assert!(out.len() <= all.len());
        prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
        for &i in &out {
            prop_assert!(pred(table.get(i).unwrap()));
        }
        let expected = all.iter().filter(|&&i| pred(table.get(i).unwrap())).count();
        prop_assert_eq!(out.len(), expected);
    }

    /// Test that valid values are ordered and missing values trail.
    #[test]
    fn sort_numeric_orders_and_puts_missing_last(table in lifters(), order in order()) {
        let out = sort_numeric(&table, make_indices(&table), OplColumn::TotalKg, order);
        prop_assert_eq!(out.len(), table.len());

        let first_missing = out.iter().position(|&i| total(&table, i).is_none()).unwrap_or(out.len());
        prop_assert!(out[first_missing..].iter().all(|&i| total(&table, i).is_none()));

        for w in out[..first_missing].windows(2) {
            let (a, b) = (total(&table, w[0]).unwrap(), total(&table, w[1]).unwrap());
            prop_assert!(in_order(order, a, b));
        }
    }

    /// Test that ties keep their input order.
    #[test]
    fn sort_numeric_is_stable(table in lifters(), order in order()) {
        let out = sort_numeric(&table, make_indices(&table), OplColumn::TotalKg, order);
        for w in out.windows(2) {
            if total(&table, w[0]) == total(&table, w[1]) {
                prop_assert!(w[0] < w[1]);
            }
        }
    }

    /// Test that the two-key sort uses the secondary column only on primary ties.
    #[test]
    fn sort_by2_tie_break(table in lifters(), order in order()) {
        let out = sort_numeric_by2(&table, make_indices(&table), OplColumn::TotalKg, OplColumn::Wilks, order);
        let key = |v: Option<f64>| v.unwrap_or_else(|| order.extreme());

        for w in out.windows(2) {
            let (a1, b1) = (key(total(&table, w[0])), key(total(&table, w[1])));
            prop_assert!(in_order(order, a1, b1));
            if a1 == b1 {
                let (a2, b2) = (key(wilks(&table, w[0])), key(wilks(&table, w[1])));
                prop_assert!(in_order(order, a2, b2));
            }
        }
    }

    /// Test that uniq keeps exactly the earliest position of each name.
    #[test]
    fn uniq_keeps_earliest_per_name(table in lifters(), order in order()) {
        let sorted = sort_numeric(&table, make_indices(&table), OplColumn::Wilks, order);
        let out = uniq_by_name(&table, &sorted);

        let name = |i: usize| table.get(i).unwrap().text(OplColumn::Name).unwrap().to_string();
        let names: HashSet<String> = out.iter().map(|&i| name(i)).collect();
        prop_assert_eq!(names.len(), out.len());

        let mut seen = HashSet::new();
        let expected: Vec<usize> = sorted.iter().copied().filter(|&i| seen.insert(name(i))).collect();
        prop_assert_eq!(out, expected);
    }
}
