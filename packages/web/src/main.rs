use dioxus::prelude::*;

use ui::{ClientConfig, ClientProvider};
use views::{Chat, Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login_page")]
    Login {},
    #[route("/register_page")]
    Register {},
    #[route("/chat_page")]
    Chat {},
    #[route("/profile_page")]
    Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../wellbot.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClientConfig::from_toml_or_default(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Title { "WellBot" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the login page
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}
