use dioxus::prelude::*;

/// Dynamic list of CIN inputs. Entries may be left blank; the fetcher
/// skips them. "Add CIN" grows the list, it never shrinks within a
/// session.
#[component]
pub fn CinForm(cins: Signal<Vec<String>>) -> Element {
    let mut cins = cins;
    let entries = cins();

    rsx! {
        div { class: "cin-form",
            div { class: "cin-form__grid",
                for (index, value) in entries.iter().enumerate() {
                    label { key: "{index}", class: "cin-form__field",
                        span { class: "cin-form__label", "CIN {index + 1}" }
                        input {
                            r#type: "text",
                            class: "cin-form__input",
                            value: "{value}",
                            oninput: move |evt| {
                                cins.with_mut(|list| {
                                    if let Some(slot) = list.get_mut(index) {
                                        *slot = evt.value();
                                    }
                                });
                            },
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "button button--ghost cin-form__add",
                onclick: move |_| cins.with_mut(|list| list.push(String::new())),
                "Add CIN"
            }
        }
    }
}
