use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::views::Home;

// Unified shared theme (ui/assets/theme/main.css), embedded so the page
// carries no external stylesheet dependency.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let dark_mode = use_signal(|| false);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div { class: if dark_mode() { "app app--dark" } else { "app" },
            AppNavbar { dark_mode }
            Home {}
        }
    }
}
