use crate::Route;
use charts_ui::{MusicIcon, SearchIcon};
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();
    let mut search_query = use_signal(|| match &current_route {
        Route::Search { q } => q.clone(),
        Route::Home {} => String::new(),
    });

    let submit = move || {
        let q = search_query().trim().to_string();
        navigator().push(Route::Search { q });
    };

    rsx! {
        header { class: "app-header",
            Link { class: "brand", to: Route::Home {},
                MusicIcon {}
                span { "Charts" }
            }
            div { class: "search-box", role: "search",
                SearchIcon {}
                input {
                    r#type: "search",
                    placeholder: "Search tracks and artists...",
                    autocomplete: "off",
                    "aria-label": "Search tracks and artists",
                    value: "{search_query}",
                    oninput: move |evt| search_query.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        } else if evt.key() == Key::Escape {
                            search_query.set(String::new());
                        }
                    },
                }
            }
        }
        main { class: "app-main", Outlet::<Route> {} }
    }
}
