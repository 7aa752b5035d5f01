//! Flip card: pre-mint artwork on the front, confirmation panel on the back.
//!
//! Presentation only. The flip is a pure function of the confirmation flag
//! the page derives from the mint flow; there is no path back to the front
//! once flipped, short of a wallet disconnect resetting the session.

use leptos::prelude::*;

#[component]
pub fn FlipCard(children: Children) -> impl IntoView {
    view! {
        <div class="flip-card">
            <div class="flip-card-inner">{children()}</div>
        </div>
    }
}

#[component]
pub fn FrontCard(#[prop(into)] flipped: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="flip-card-front" class:flipped=move || flipped.get()>
            {children()}
        </div>
    }
}

#[component]
pub fn BackCard(#[prop(into)] flipped: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="flip-card-back" class:flipped=move || flipped.get()>
            {children()}
        </div>
    }
}
