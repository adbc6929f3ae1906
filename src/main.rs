use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod engine {
    pub mod counter;
    pub mod theme;
}
mod components {
    pub mod cal_embed;
}
mod pages {
    pub mod home;
    pub mod template;
    pub mod termsprivacy;
}

use pages::{
    home::Home,
    template::Template,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/template")]
    Template,
    #[at("/terms-of-service")]
    Terms,
    #[at("/privacy-policy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Template => {
            info!("Rendering Template page");
            html! { <Template /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

/// Smooth-scroll to an in-page section. Silently does nothing if the section
/// isn't on the current page.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let section_link = |id: &'static str, label: &'static str| {
        let close_menu = close_menu.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close_menu.emit(e);
            scroll_to_section(id);
        });
        html! {
            <button class="nav-link" {onclick}>{label}</button>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"InfoFuel"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { section_link("process", "Process") }
                    { section_link("services", "Services") }
                    { section_link("how", "How") }
                    { section_link("results", "Results") }
                    { section_link("team", "Team") }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Template} classes="nav-link">
                            {"Template"}
                        </Link<Route>>
                    </div>
                    <button
                        class="nav-cta"
                        onclick={
                            let close_menu = close_menu.clone();
                            Callback::from(move |e: MouseEvent| {
                                close_menu.emit(e);
                                scroll_to_section("book-call");
                            })
                        }
                    >
                        {"Book A Call"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
