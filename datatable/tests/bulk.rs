mod common;

use common::Recorder;
use datatable::{BulkAction, BulkActionBar, ButtonVariant, EventResult};

#[test]
fn test_hidden_without_selection() {
    let bar: BulkActionBar<u32> =
        BulkActionBar::default().action(BulkAction::new("Delete", |_| {}));
    assert!(bar.render(&[]).is_none());
    assert_eq!(bar.click(0, &[]), EventResult::Ignored);
}

#[test]
fn test_summary_and_buttons() {
    let bar = BulkActionBar::new(vec![
        BulkAction::new("Approve", |_: &[u32]| {}).variant(ButtonVariant::Primary),
        BulkAction::new("Reject", |_: &[u32]| {}).variant(ButtonVariant::Danger),
    ]);
    let view = bar.render(&[4, 9]).unwrap();
    assert_eq!(view.summary, "2 selected");
    let labels: Vec<String> = view.buttons.iter().map(|b| b.plain_text()).collect();
    assert_eq!(labels, vec!["[Approve]", "[Reject]"]);
}

#[test]
fn test_click_passes_ids() {
    let recorder: Recorder<Vec<u32>> = Recorder::new();
    let record = recorder.callback();
    let bar = BulkActionBar::new(vec![BulkAction::new("Export", move |ids: &[u32]| {
        record(ids.to_vec())
    })]);

    assert_eq!(bar.click(0, &[1, 2]), EventResult::Consumed);
    assert_eq!(bar.click(1, &[1, 2]), EventResult::Ignored);
    assert_eq!(recorder.calls(), vec![vec![1, 2]]);
}
