//! Bike selection form: a pure form model and its declarative view.
//!
//! DESIGN
//! ======
//! `BikeForm::from_list` is a total function of the bike list, so the view
//! re-renders the whole form from data instead of patching existing nodes.
//! Rows keep input order; the submit control always comes last.

#[cfg(test)]
#[path = "bike_form_test.rs"]
mod bike_form_test;

use leptos::prelude::*;

use crate::net::api::ADD_BIKES_ENDPOINT;
use crate::net::types::BikeList;

/// Field name shared by every bike checkbox.
pub const SELECTED_BIKES_FIELD: &str = "selected_bikes";
pub const SUBMIT_CLASS: &str = "btn btn-primary";
pub const SUBMIT_LABEL: &str = "Add Bikes";

/// One checkbox + label row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxRow {
    pub name: &'static str,
    pub value: String,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub class: &'static str,
    pub label: &'static str,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self { class: SUBMIT_CLASS, label: SUBMIT_LABEL }
    }
}

/// Complete content of the modal's form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BikeForm {
    pub rows: Vec<CheckboxRow>,
    pub submit: SubmitControl,
}

impl BikeForm {
    #[must_use]
    pub fn from_list(list: &BikeList) -> Self {
        let rows = list
            .bikes
            .iter()
            .map(|bike| CheckboxRow { name: SELECTED_BIKES_FIELD, value: bike.id.to_string(), label: bike.name.clone() })
            .collect();
        Self { rows, submit: SubmitControl::default() }
    }

    /// Checkbox values in render order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.value.as_str()).collect()
    }

    /// Labels in render order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }
}

/// The modal's `<form>`. Empty until a form model is available.
#[component]
pub fn BikeFormView(#[prop(into)] form: Signal<Option<BikeForm>>) -> impl IntoView {
    view! {
        <form action=ADD_BIKES_ENDPOINT method="post">
            {move || {
                form.get()
                    .map(|form| {
                        let rows = form
                            .rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <div class="form-check">
                                        <input type="checkbox" name=row.name value=row.value/>
                                        <label>{row.label}</label>
                                    </div>
                                }
                            })
                            .collect_view();
                        view! {
                            {rows}
                            <button type="submit" class=form.submit.class>
                                {form.submit.label}
                            </button>
                        }
                    })
            }}
        </form>
    }
}
