use datatable::pagination::{
    PageControl, PageSummary, page_controls, total_pages, window, window_range,
};
use datatable::{PaginationConfig, TableError};

fn numbers(controls: &[PageControl]) -> Vec<Option<usize>> {
    controls
        .iter()
        .filter_map(|c| match c {
            PageControl::Page { number, .. } => Some(Some(*number)),
            PageControl::Ellipsis => Some(None),
            _ => None,
        })
        .collect()
}

#[test]
fn test_total_pages() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(25, 10), 3);
}

#[test]
fn test_window_slices_page() {
    let items: Vec<u32> = (1..=25).collect();
    assert_eq!(window(&items, 1, 10), &items[0..10]);
    assert_eq!(window(&items, 3, 10), &[21, 22, 23, 24, 25]);
}

#[test]
fn test_window_past_end_is_empty() {
    let items: Vec<u32> = (1..=5).collect();
    assert!(window(&items, 4, 10).is_empty());
    assert_eq!(window_range(5, 4, 10), 5..5);
}

#[test]
fn test_summary() {
    let summary = PageSummary::new(3, 10, 25);
    assert_eq!(summary.to_string(), "Showing 21 to 25 of 25 entries");
    assert_eq!(PageSummary::new(1, 10, 0).from, 0);
}

#[test]
fn test_controls_single_page_is_empty() {
    assert!(page_controls(1, 1, 5).is_empty());
    assert!(page_controls(1, 0, 5).is_empty());
}

#[test]
fn test_controls_small_total() {
    let controls = page_controls(2, 3, 5);
    assert_eq!(controls.first(), Some(&PageControl::Previous { disabled: false }));
    assert_eq!(controls.last(), Some(&PageControl::Next { disabled: false }));
    assert_eq!(numbers(&controls), vec![Some(1), Some(2), Some(3)]);
    assert!(controls.contains(&PageControl::Page {
        number: 2,
        active: true
    }));
}

#[test]
fn test_controls_centred_with_ellipses() {
    let controls = page_controls(10, 20, 5);
    assert_eq!(
        numbers(&controls),
        vec![
            Some(1),
            None,
            Some(8),
            Some(9),
            Some(10),
            Some(11),
            Some(12),
            None,
            Some(20)
        ]
    );
}

#[test]
fn test_controls_shift_at_edges() {
    let first = page_controls(1, 20, 5);
    assert_eq!(first[0], PageControl::Previous { disabled: true });
    assert_eq!(
        numbers(&first),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(20)]
    );

    let last = page_controls(20, 20, 5);
    assert_eq!(last.last(), Some(&PageControl::Next { disabled: true }));
    assert_eq!(
        numbers(&last),
        vec![Some(1), None, Some(16), Some(17), Some(18), Some(19), Some(20)]
    );
}

#[test]
fn test_config_rejects_zero() {
    assert!(matches!(
        PaginationConfig::new(1, 0, 10, |_| {}),
        Err(TableError::InvalidPageSize(0))
    ));
    assert!(matches!(
        PaginationConfig::new(0, 10, 10, |_| {}),
        Err(TableError::InvalidPage(0))
    ));
}

#[test]
fn test_config_derived_values() {
    let config = PaginationConfig::new(2, 20, 45, |_| {}).unwrap();
    assert_eq!(config.total_pages(), 3);
    assert_eq!(config.summary().to_string(), "Showing 21 to 40 of 45 entries");
    assert_eq!(config.options(), &[10, 20, 50, 100]);
}
