use super::*;

#[test]
fn push_assigns_increasing_ids_and_appends() {
    let mut state = ToastState::default();
    let a = state.push("saved", ToastKind::Success);
    let b = state.push("failed", ToastKind::Error);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "saved");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("one", ToastKind::Info);
    let b = state.push("two", ToastKind::Info);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);

    // Dismissing again, or an unknown id, is a no-op.
    state.dismiss(a);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.push("one", ToastKind::Info);
    state.dismiss(a);
    let b = state.push("two", ToastKind::Info);
    assert!(b > a);
}

#[test]
fn kinds_map_to_fixed_classes_and_icons() {
    assert_eq!(ToastKind::Success.class(), "toast--success");
    assert_eq!(ToastKind::Success.icon_class(), "fa-check-circle");
    assert_eq!(ToastKind::Error.class(), "toast--error");
    assert_eq!(ToastKind::Error.icon_class(), "fa-exclamation-circle");
    assert_eq!(ToastKind::Info.icon_class(), "fa-info-circle");
    assert_eq!(ToastKind::Warning.icon_class(), "fa-exclamation-triangle");
}
