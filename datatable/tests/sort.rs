mod common;

use common::{ids, staff};
use datatable::sort::{UNSORTED_GLYPH, apply_sort, direction_for, indicator};
use datatable::{SortConfig, SortDirection};

#[test]
fn test_new_column_starts_ascending() {
    let next = SortConfig::next(None, "name");
    assert_eq!(next, SortConfig::asc("name"));

    let current = SortConfig::desc("email");
    let next = SortConfig::next(Some(&current), "name");
    assert_eq!(next, SortConfig::asc("name"));
}

#[test]
fn test_same_column_flips() {
    let asc = SortConfig::asc("name");
    let desc = SortConfig::next(Some(&asc), "name");
    assert_eq!(desc.direction, SortDirection::Desc);
    let back = SortConfig::next(Some(&desc), "name");
    assert_eq!(back.direction, SortDirection::Asc);
}

#[test]
fn test_indicators() {
    let sort = SortConfig::desc("name");
    assert_eq!(indicator(Some(&sort), "name"), "↓");
    assert_eq!(indicator(Some(&sort), "email"), UNSORTED_GLYPH);
    assert_eq!(indicator(None, "name"), UNSORTED_GLYPH);
    assert_eq!(direction_for(Some(&SortConfig::asc("id")), "id"), Some(SortDirection::Asc));
}

#[test]
fn test_direction_parse() {
    assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
    assert_eq!("descending".parse::<SortDirection>(), Ok(SortDirection::Desc));
    assert!("up".parse::<SortDirection>().is_err());
    assert_eq!(SortDirection::Desc.to_string(), "desc");
}

#[test]
fn test_apply_sort_is_stable() {
    let mut records = staff();
    apply_sort(&mut records, &SortConfig::asc("department"));
    // Alice and Carol tie on Engineering and keep their order.
    assert_eq!(ids(&records), vec![1, 3, 2]);

    apply_sort(&mut records, &SortConfig::desc("salary"));
    assert_eq!(ids(&records), vec![3, 2, 1]);
}
