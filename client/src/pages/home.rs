//! Public landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

const FEATURES: [(&str, &str); 3] = [
    (
        "Free Pickup & Delivery",
        "Don't leave your house. We collect your laundry and return it fresh and folded, absolutely free.",
    ),
    (
        "24h Turnaround",
        "Use our Express Service to get your clothes back in as little as 24 hours.",
    ),
    (
        "Quality Guarantee",
        "Not happy with the results? We'll re-wash your clothes for free. No questions asked.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>

            <header class="hero">
                <span class="hero__badge">"#1 Laundry Service in Town"</span>
                <h1 class="hero__title">
                    <span>"Fresh Clothes,"</span>
                    <br/>
                    <span class="hero__title-accent">"Zero Stress."</span>
                </h1>
                <p class="hero__lead">
                    "We pick up, clean, and deliver your laundry in 24 hours. Experience the ultimate convenience today."
                </p>
                <div class="hero__actions">
                    <a href="/login" class="btn btn--primary">
                        "Get Started"
                    </a>
                </div>
            </header>

            <section class="features">
                <h2>"Why Choose LaundryMart?"</h2>
                <p>"We don't just clean clothes; we care for them."</p>
                <div class="features__grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="feature-card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Save Time?"</h2>
                <p>"Join thousands of satisfied customers who've made the switch to hassle-free laundry."</p>
                <a href="/login" class="btn btn--primary">
                    "Start Your First Order"
                </a>
            </section>

            <Footer/>
        </div>
    }
}
