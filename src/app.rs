//! App shell: router, navbar, wallet context and provider event wiring.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Navbar;
use crate::pages::HomePage;
use crate::services::wallet;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let wallet_ctx = provide_wallet_context();

    // Follow account switches in the extension: an empty account list is a
    // disconnect, anything else replaces the connected address.
    Effect::new(move || {
        if !wallet::has_ethereum_provider() {
            log::warn!("no injected ethereum provider detected");
            return;
        }
        let callback = Closure::<dyn Fn(JsValue)>::new(move |account: JsValue| {
            // null means the wallet dropped the session
            match account.as_string() {
                Some(address) => {
                    log::info!("account changed: {}", address);
                    wallet_ctx.set_connected(address);
                }
                None => {
                    log::info!("wallet reported disconnect");
                    wallet_ctx.disconnect();
                }
            }
        });
        wallet::on_accounts_changed(callback.as_ref().unchecked_ref());
        // the listener lives for the whole session
        callback.forget();
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="button" style="margin-top: 20px; display: inline-block;">
                        "Back to the mint"
                    </span>
                </A>
            </div>
        </div>
    }
}
