mod common;

use common::{Employee, roster, staff};
use datatable::text::{display_width, truncate_to_width};
use datatable::{
    Align, Column, ColumnSet, DataTable, PaginationConfig, Search, SearchConfig, SelectionConfig,
    TableProps, TableStyle, TextRenderer,
};

fn narrow_columns() -> ColumnSet<Employee> {
    ColumnSet::new(vec![
        Column::new("name", "Name").width(8),
        Column::new("salary", "Salary").width(10).align(Align::Right),
    ])
    .unwrap()
}

fn plain(props: &TableProps<Employee>) -> Vec<String> {
    let view = DataTable::new().render(props);
    TextRenderer::new()
        .render(&view)
        .iter()
        .map(|line| line.to_plain())
        .collect()
}

#[test]
fn test_display_width_cjk() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}

#[test]
fn test_plain_grid() {
    let props = TableProps::new(staff(), narrow_columns());
    let lines = plain(&props);
    assert_eq!(
        lines,
        vec![
            "Name          Salary",
            "────────  ──────────",
            "Alice          1,000",
            "Bob            2,000",
            "Carol          3,000",
        ]
    );
}

#[test]
fn test_bordered_grid() {
    let props = TableProps::new(staff(), narrow_columns()).style(TableStyle {
        bordered: true,
        ..Default::default()
    });
    let lines = plain(&props);
    assert_eq!(lines[0], "┌──────────┬────────────┐");
    assert_eq!(lines[1], "│ Name     │     Salary │");
    assert_eq!(lines[2], "├──────────┼────────────┤");
    assert_eq!(lines[3], "│ Alice    │      1,000 │");
    assert_eq!(lines.last().map(String::as_str), Some("└──────────┴────────────┘"));
}

#[test]
fn test_search_line_and_spacer() {
    let props = TableProps::new(staff(), narrow_columns())
        .search(SearchConfig::new(Search::uncontrolled("")));
    let lines = plain(&props);
    assert_eq!(lines[0], "Search: Search...");
    assert_eq!(lines[1], "");

    let compact = TableProps::new(staff(), narrow_columns())
        .search(SearchConfig::new(Search::uncontrolled("")))
        .style(TableStyle {
            compact: true,
            ..Default::default()
        });
    assert!(plain(&compact)[1].starts_with("Name"));
}

#[test]
fn test_placeholder_spans_grid() {
    let props = TableProps::new(Vec::<Employee>::new(), narrow_columns());
    let lines = plain(&props);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].trim(), "No data available");
}

#[test]
fn test_checkbox_and_row_number_columns() {
    let records = staff();
    let props = TableProps::new(records.clone(), narrow_columns())
        .selection(SelectionConfig::multiple(vec![records[1].clone()], |_| {}))
        .style(TableStyle {
            show_row_numbers: true,
            ..Default::default()
        });
    let lines = plain(&props);
    assert!(lines[0].starts_with("[-]  #  Name"));
    assert!(lines[3].starts_with("[x]  2  Bob"));
}

#[test]
fn test_pagination_footer() {
    let props = TableProps::new(roster(25), narrow_columns()).pagination(
        PaginationConfig::new(2, 10, 25, |_| {})
            .unwrap()
            .on_page_size_change(|_| {}),
    );
    let lines = plain(&props);
    let footer = &lines[lines.len() - 3..];
    assert_eq!(footer[0], "‹ Prev 1 [2] 3 Next ›");
    assert_eq!(footer[1], "Showing 11 to 20 of 25 entries");
    assert_eq!(footer[2], "Rows per page: [10] 20 50 100");
}

#[test]
fn test_striped_lines_flagged() {
    let props = TableProps::new(staff(), narrow_columns()).style(TableStyle {
        striped: true,
        ..Default::default()
    });
    let view = DataTable::new().render(&props);
    let striped: Vec<bool> = TextRenderer::new()
        .render(&view)
        .iter()
        .skip(2)
        .map(|line| line.striped)
        .collect();
    assert_eq!(striped, vec![false, true, false]);
}
