use super::*;
use crate::net::types::Bike;

fn list(entries: &[(i64, &str)]) -> BikeList {
    BikeList::new(
        entries
            .iter()
            .map(|(id, name)| Bike { id: *id, name: (*name).to_owned() })
            .collect(),
    )
}

#[test]
fn two_bikes_render_two_rows_then_submit() {
    let form = BikeForm::from_list(&list(&[(1, "Roadster"), (2, "Cruiser")]));
    assert_eq!(form.values(), vec!["1", "2"]);
    assert_eq!(form.labels(), vec!["Roadster", "Cruiser"]);
    assert_eq!(form.submit.label, "Add Bikes");
    assert_eq!(form.submit.class, "btn btn-primary");
}

#[test]
fn empty_list_renders_only_submit() {
    let form = BikeForm::from_list(&BikeList::default());
    assert!(form.rows.is_empty());
    assert_eq!(form.submit, SubmitControl::default());
}

#[test]
fn row_count_matches_bike_count() {
    for n in [0_i64, 1, 5, 40] {
        let bikes = BikeList::new((0..n).map(|i| Bike { id: i, name: format!("bike-{i}") }).collect());
        let form = BikeForm::from_list(&bikes);
        assert_eq!(form.rows.len(), bikes.len());
    }
}

#[test]
fn rows_keep_input_order_without_sorting() {
    let form = BikeForm::from_list(&list(&[(30, "Zephyr"), (4, "Aero"), (17, "Mule")]));
    assert_eq!(form.values(), vec!["30", "4", "17"]);
    assert_eq!(form.labels(), vec!["Zephyr", "Aero", "Mule"]);
}

#[test]
fn every_checkbox_shares_selected_bikes_field() {
    let form = BikeForm::from_list(&list(&[(1, "A"), (2, "B"), (3, "C")]));
    assert!(form.rows.iter().all(|row| row.name == "selected_bikes"));
}

#[test]
fn rendering_same_list_twice_is_identical() {
    let bikes = list(&[(1, "Roadster"), (2, "Cruiser")]);
    assert_eq!(BikeForm::from_list(&bikes), BikeForm::from_list(&bikes));
}

#[test]
fn rendering_new_list_drops_previous_rows() {
    let stale = BikeForm::from_list(&list(&[(1, "Roadster"), (2, "Cruiser")]));
    let fresh = BikeForm::from_list(&list(&[(3, "Tandem")]));
    assert_ne!(stale, fresh);
    assert_eq!(fresh.values(), vec!["3"]);
}

#[test]
fn duplicate_names_are_rendered_as_given() {
    let form = BikeForm::from_list(&list(&[(1, "Commuter"), (2, "Commuter")]));
    assert_eq!(form.labels(), vec!["Commuter", "Commuter"]);
    assert_eq!(form.values(), vec!["1", "2"]);
}

// =============================================================
// Rendered markup (SSR)
// =============================================================

#[cfg(feature = "ssr")]
fn render_form_html(form: Option<BikeForm>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let form = Signal::derive(move || form.clone());
        view! { <BikeFormView form/> }.to_html()
    })
}

#[cfg(feature = "ssr")]
#[test]
fn view_renders_rows_then_submit_inside_posting_form() {
    let html = render_form_html(Some(BikeForm::from_list(&list(&[(1, "Roadster"), (2, "Cruiser")]))));

    assert!(html.starts_with(r#"<form action="/add_bikes" method="post">"#), "{html}");
    assert!(html.trim_end().ends_with("</form>"), "{html}");
    assert_eq!(html.matches(r#"<div class="form-check">"#).count(), 2, "{html}");
    assert!(html.contains(r#"<input type="checkbox" name="selected_bikes" value="1">"#), "{html}");
    assert!(html.contains(r#"<input type="checkbox" name="selected_bikes" value="2">"#), "{html}");
    assert!(html.contains(r#"<button type="submit" class="btn btn-primary">Add Bikes</button>"#), "{html}");

    let roadster = html.find("<label>Roadster</label>").expect("Roadster label");
    let cruiser = html.find("<label>Cruiser</label>").expect("Cruiser label");
    let submit = html.find("<button").expect("submit button");
    assert!(roadster < cruiser && cruiser < submit, "{html}");
}

#[cfg(feature = "ssr")]
#[test]
fn view_without_form_renders_empty_form_and_no_submit() {
    let html = render_form_html(None);

    assert!(html.starts_with(r#"<form action="/add_bikes" method="post">"#), "{html}");
    assert!(!html.contains("<button"), "{html}");
    assert!(!html.contains("<input"), "{html}");
}

#[cfg(feature = "ssr")]
#[test]
fn view_for_empty_list_renders_only_submit() {
    let html = render_form_html(Some(BikeForm::from_list(&BikeList::default())));

    assert!(!html.contains("form-check"), "{html}");
    assert_eq!(html.matches("<button").count(), 1, "{html}");
    assert!(html.contains(r#"<button type="submit" class="btn btn-primary">Add Bikes</button>"#), "{html}");
}
