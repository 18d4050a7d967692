use dioxus::prelude::*;

// Navbar stylesheet, also inlined for release native builds where the
// asset pipeline is not serving files.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Brand header with the dark/light switch. The switch is cosmetic
/// only: it flips the `app--dark` class on the app shell, which swaps
/// the theme custom properties, and changes no behavior.
#[component]
pub fn AppNavbar(dark_mode: Signal<bool>) -> Element {
    let mut dark_mode = dark_mode;
    let checked = dark_mode();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "BRSR Report Comparator" }
                    span { class: "navbar__brand-subtitle",
                        "Business responsibility reports, side by side"
                    }
                }

                label { class: "navbar__theme",
                    input {
                        r#type: "checkbox",
                        class: "navbar__theme-toggle",
                        checked,
                        onchange: move |_| {
                            let next = !dark_mode();
                            dark_mode.set(next);
                        },
                    }
                    span { class: "navbar__theme-label", "Dark Mode" }
                }
            }
        }
    }
}
