use pickem_ui::date_range::{PickerEvent, RangePosition};
use pickem_ui::ui::core::actions::Action;
use pretty_assertions::assert_eq;

#[test]
fn test_batch_flattens_and_drops_none() {
    let nested = Action::batch([
        Action::None,
        Action::Pressed("a".to_string()),
        Action::Batch(vec![Action::Login, Action::None, Action::Logout]),
    ]);
    assert_eq!(
        nested,
        Action::Batch(vec![Action::Pressed("a".to_string()), Action::Login, Action::Logout])
    );
}

#[test]
fn test_batch_of_one_is_unwrapped() {
    assert_eq!(Action::batch([Action::None, Action::ModalClosed]), Action::ModalClosed);
    assert!(Action::batch(Vec::new()).is_none());
}

#[test]
fn test_picker_events_keep_dispatch_order() {
    let action = Action::from_picker_events(vec![
        PickerEvent::Close,
        PickerEvent::RangePositionChange(RangePosition::Start),
    ]);
    assert_eq!(
        action.into_vec(),
        vec![
            Action::DateRange(PickerEvent::Close),
            Action::DateRange(PickerEvent::RangePositionChange(RangePosition::Start)),
        ]
    );
}

#[test]
fn test_default_action_is_none() {
    assert_eq!(Action::default(), Action::None);
    assert!(Action::None.into_vec().is_empty());
}
