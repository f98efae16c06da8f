//! Static site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__name">"LaundryMart"</span>
                <p class="footer__tagline">"Fresh clothes, zero stress. Pickup and delivery in 24 hours."</p>
            </div>
            <nav class="footer__links">
                <a href="/">"Home"</a>
                <a href="/login">"Sign In"</a>
            </nav>
            <p class="footer__copyright">"© LaundryMart. All rights reserved."</p>
        </footer>
    }
}
