use super::*;

#[test]
fn modal_target_selector_points_at_dialog_id() {
    assert_eq!(BIKE_MODAL_ID, "bikeModal");
    assert_eq!(modal_target_selector(), "#bikeModal");
}
