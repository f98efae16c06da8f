//! Login page: username + password against the backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::net::types::LoginRequest;
use crate::state::session::SessionState;

const LOGIN_REQUIRED_MESSAGE: &str = "Enter both username and password.";
#[cfg(feature = "hydrate")]
const LOGIN_FAILED_MESSAGE: &str = "Login failed. Check your credentials.";

fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(LOGIN_REQUIRED_MESSAGE);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let session = expect_context::<RwSignal<SessionState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(auth) => {
                    crate::util::session::browser().begin(&auth.token, &auth.user);
                    let target = crate::util::auth::landing_path(auth.user.role);
                    log::info!("logged in as {}", auth.user.username);
                    session.set(SessionState { user: Some(auth.user), loading: false });
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(target);
                    }
                }
                Err(e) => {
                    info.set(e.message_or(LOGIN_FAILED_MESSAGE));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"LaundryMart"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
            <Footer/>
        </div>
    }
}
