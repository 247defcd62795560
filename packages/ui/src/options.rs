//! Select inputs shared by the registration and profile forms.

use dioxus::prelude::*;

/// `(value, label)` pairs for the age-group select.
pub const AGE_GROUPS: &[(&str, &str)] = &[
    ("child", "Child (under 13)"),
    ("teen", "Teen (13-19)"),
    ("adult", "Adult (20-59)"),
    ("senior", "Senior (60+)"),
];

/// `(code, label)` pairs for the language select.
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("hi", "हिन्दी (Hindi)")];

#[component]
pub fn AgeGroupSelect(id: String, value: String, onchange: EventHandler<String>) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "form-select",
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            option { value: "", selected: value.is_empty(), "Select age group" }
            for (code, label) in AGE_GROUPS.iter().copied() {
                option {
                    key: "{code}",
                    value: code,
                    selected: value == code,
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn LanguageSelect(id: String, value: String, onchange: EventHandler<String>) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "form-select",
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            for (code, label) in LANGUAGES.iter().copied() {
                option {
                    key: "{code}",
                    value: code,
                    selected: value == code,
                    "{label}"
                }
            }
        }
    }
}
