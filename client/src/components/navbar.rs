//! Top navigation bar with greeting, role badge, and logout.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Renders nothing until a session user exists.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| u.display_name().to_owned())
            .unwrap_or_default()
    };
    let role = move || session.get().user.map(|u| u.role);

    let on_logout = move |_| {
        crate::util::session::logout();
        session.set(SessionState { user: None, loading: false });
        #[cfg(feature = "hydrate")]
        {
            log::info!("logged out");
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(crate::util::auth::LOGIN_PATH);
            }
        }
    };

    view! {
        <Show when=move || session.get().user.is_some()>
            <nav class="navbar">
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true">"✦"</span>
                    <span class="navbar__name">"LaundryMart"</span>
                </a>
                <div class="navbar__actions">
                    <div class="navbar__welcome">
                        <p class="navbar__welcome-label">"Welcome back,"</p>
                        <p class="navbar__welcome-name">{greeting}</p>
                    </div>
                    <span class=move || role().map_or("badge", |r| r.badge_class())>
                        {move || role().map(|r| r.as_str()).unwrap_or_default()}
                    </span>
                    <a href="/admin" class="navbar__link">
                        "Profile"
                    </a>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </nav>
        </Show>
    }
}
