use dioxus::prelude::*;
use directory::{FieldEditor, FieldKind};

use crate::icons::FaPen;
use crate::Icon;

/// A profile field with an inline editor. Edits are kept locally and never sent
/// anywhere.
#[component]
pub fn EditableProfileField(kind: FieldKind, value: String) -> Element {
    let mut editor = use_signal(|| FieldEditor::new(kind, value.clone()));

    // Re-seed when the profile behind the field changes
    let mut seeded = use_signal(|| value.clone());
    if *seeded.peek() != value {
        seeded.set(value.clone());
        editor.set(FieldEditor::new(kind, value.clone()));
    }

    let state = editor.read().clone();
    let field = state.kind();
    let can_save = state.can_save();
    let input_class = if can_save { "field-input" } else { "field-input invalid" };

    rsx! {
        div {
            class: "profile-field",
            div { class: "profile-field-name", "{field.label()}" }
            if state.is_editing() {
                div {
                    class: "profile-field-edit",
                    input {
                        class: "{input_class}",
                        r#type: "text",
                        initial_value: "{state.buffer()}",
                        oninput: move |evt: FormEvent| editor.write().input(&evt.value()),
                    }
                    p { class: "field-guidance", "{field.guidance()}" }
                    div {
                        class: "field-actions",
                        button {
                            class: "primary",
                            disabled: !can_save,
                            onclick: move |_| {
                                if editor.write().save() {
                                    tracing::debug!(field = kind.label(), "field updated locally");
                                }
                            },
                            "Update"
                        }
                        button {
                            class: "secondary",
                            onclick: move |_| editor.write().cancel(),
                            "Cancel"
                        }
                    }
                }
            } else {
                div {
                    class: "profile-field-value",
                    "{state.display()}"
                    button {
                        class: "icon-button",
                        title: "Edit {field.label()}",
                        onclick: move |_| editor.write().begin_edit(),
                        Icon { icon: FaPen, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ReadOnlyProfileField(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "profile-field",
            div { class: "profile-field-name", "{label}" }
            div { class: "profile-field-value", {children} }
        }
    }
}
