use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one".to_owned());
    let b = state.push(NoticeKind::Error, "two".to_owned());
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one".to_owned());
    let b = state.push(NoticeKind::Error, "two".to_owned());
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = NoticeState::default();
    state.push(NoticeKind::Success, "one".to_owned());
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one".to_owned());
    state.dismiss(a);
    let b = state.push(NoticeKind::Success, "again".to_owned());
    assert_ne!(a, b);
}

#[test]
fn kind_css_classes_are_distinct() {
    assert_ne!(NoticeKind::Success.css_class(), NoticeKind::Error.css_class());
}
