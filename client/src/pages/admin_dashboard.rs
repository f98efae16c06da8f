//! Admin dashboard: stats, user management, orders, and profile editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route. Loads the user list once on mount; every other
//! network call is triggered by a form submit, one request per action.
//! Tab switches only touch local state.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::add_user_dialog::AddUserDialog;
use crate::components::footer::Footer;
use crate::components::form_field::FormField;
use crate::components::navbar::Navbar;
use crate::net::types::{Order, OrderStatus, Role};
use crate::state::dashboard::{DashboardState, DashboardTab, MessageTone, ProfileForm, avatar_initial, should_load_users};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Fetch the user list and fold it into dashboard state.
fn load_users(dashboard: RwSignal<DashboardState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::get_users().await;
        if let Err(e) = &result {
            log::error!("failed to load users: {e}");
        }
        dashboard.update(|s| s.users_loaded(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dashboard;
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dashboard = RwSignal::new(DashboardState::new(session.get_untracked().user.as_ref()));

    install_unauth_redirect(session, use_navigate());

    // Seed the profile form once the persisted session has been read.
    Effect::new(move || {
        let user = session.get().user;
        dashboard.update(|s| {
            if s.profile == ProfileForm::default() {
                s.profile = ProfileForm::from_user(user.as_ref());
            }
        });
    });

    // One fetch per page, and only once a session user exists.
    Effect::new(move |requested: Option<bool>| {
        let requested = requested.unwrap_or(false);
        if session.with(|s| should_load_users(requested, s)) {
            load_users(dashboard);
            return true;
        }
        requested
    });

    let submit_add_user = Callback::new(move |()| {
        let Some(new_user) = dashboard.try_update(DashboardState::begin_add_user).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::dashboard::AddUserFollowUp;

            let result = crate::net::api::register(&new_user).await;
            let follow_up = dashboard.try_update(|s| s.finish_add_user(result));
            if let Some(AddUserFollowUp::ReloadThenClose { delay_ms }) = follow_up {
                load_users(dashboard);
                gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                dashboard.update(DashboardState::close_after_add);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_user;
        }
    });

    let submit_profile = Callback::new(move |()| {
        let Some(update) = dashboard.try_update(DashboardState::begin_profile_save).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_profile(&update).await;
            let store = crate::util::session::browser();
            let saved = dashboard.try_update(|s| s.finish_profile_save(result, &store)).flatten();
            if let Some(user) = saved {
                session.update(|st| st.user = Some(user));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    });

    let tab_is = move |tab: DashboardTab| dashboard.with(|s| s.active_tab == tab);

    view! {
        <Show
            when=move || session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <Navbar/>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>
                        <span class="dashboard-page__accent">"Admin"</span>
                        " Dashboard"
                    </h1>
                    <p>"Manage users, orders, and business operations"</p>
                </header>

                <StatsGrid dashboard=dashboard/>

                <nav class="tabs">
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || if tab_is(tab) { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                                    on:click=move |_| dashboard.update(|s| s.select_tab(tab))
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <Show when=move || tab_is(DashboardTab::Overview)>
                    <OverviewTab dashboard=dashboard/>
                </Show>
                <Show when=move || tab_is(DashboardTab::Users)>
                    <UsersTab dashboard=dashboard/>
                </Show>
                <Show when=move || tab_is(DashboardTab::Orders)>
                    <OrdersTab dashboard=dashboard/>
                </Show>
                <Show when=move || tab_is(DashboardTab::Profile)>
                    <ProfileTab dashboard=dashboard session=session on_submit=submit_profile/>
                </Show>
            </div>
            <Show when=move || dashboard.with(|s| s.show_add_user)>
                <AddUserDialog state=dashboard on_submit=submit_add_user/>
            </Show>
            <Footer/>
        </Show>
    }
}

#[component]
fn StatsGrid(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let stat = move |label: &'static str, modifier: &'static str, value: Signal<String>| {
        view! {
            <div class=format!("stat-card stat-card--{modifier}")>
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        }
    };
    let derived = move |f: fn(&DashboardState) -> String| Signal::derive(move || dashboard.with(f));

    view! {
        <div class="stats-grid">
            {stat("Total Users", "users", derived(|s| s.stats.total_users.to_string()))}
            {stat("Employees", "employees", derived(|s| s.stats.employees.to_string()))}
            {stat("Riders", "riders", derived(|s| s.stats.riders.to_string()))}
            {stat("Total Orders", "orders", derived(|s| s.stats.total_orders.to_string()))}
            {stat("Active Orders", "active", derived(|s| s.stats.active_orders.to_string()))}
            {stat("Revenue", "revenue", derived(|s| format!("${}", s.stats.revenue)))}
        </div>
    }
}

#[component]
fn OverviewTab(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="overview">
            <div class="quick-actions">
                <button class="quick-action quick-action--add-user" on:click=move |_| dashboard.update(DashboardState::open_add_user)>
                    <h3>"Add Employee/Rider"</h3>
                    <p>"Register new team members"</p>
                </button>
                <button
                    class="quick-action quick-action--orders"
                    on:click=move |_| dashboard.update(|s| s.select_tab(DashboardTab::Orders))
                >
                    <h3>"Manage Orders"</h3>
                    <p>"View and update order status"</p>
                </button>
                <button
                    class="quick-action quick-action--users"
                    on:click=move |_| dashboard.update(|s| s.select_tab(DashboardTab::Users))
                >
                    <h3>"View All Users"</h3>
                    <p>"Manage user accounts"</p>
                </button>
            </div>

            <section class="panel">
                <h2>"Recent Orders"</h2>
                <div class="order-list order-list--compact">
                    {move || {
                        dashboard
                            .with(|s| s.recent_orders().to_vec())
                            .into_iter()
                            .map(|order| {
                                view! {
                                    <div class="order-row">
                                        <div>
                                            <span class="order-row__id">{format!("#{}", order.id)}</span>
                                            <span class="order-row__customer">{order.customer}</span>
                                            <span class=order.status.badge_class()>{order.status.label()}</span>
                                            <p class="order-row__items">{order.items}</p>
                                        </div>
                                        <div class="order-row__totals">
                                            <div class="order-row__amount">{format!("${}", order.amount)}</div>
                                            <div class="order-row__date">{order.date}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
fn UsersTab(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let or_dash = |v: Option<String>| v.filter(|s| !s.is_empty()).unwrap_or_else(|| "-".to_owned());

    view! {
        <section class="panel">
            <div class="panel__header">
                <h2>"User Management"</h2>
                <button class="btn btn--primary" on:click=move |_| dashboard.update(DashboardState::open_add_user)>
                    "+ Add User"
                </button>
            </div>
            <Show
                when=move || !dashboard.with(|s| s.loading)
                fallback=move || view! { <div class="spinner" aria-label="Loading users"></div> }
            >
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Username"</th>
                            <th>"Full Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Phone"</th>
                            <th class="user-table__actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            dashboard
                                .with(|s| s.users.clone())
                                .into_iter()
                                .map(|user| {
                                    let role: Role = user.role;
                                    view! {
                                        <tr>
                                            <td>{user.username}</td>
                                            <td>{or_dash(user.full_name)}</td>
                                            <td>{user.email}</td>
                                            <td>
                                                <span class=role.badge_class()>{role.as_str()}</span>
                                            </td>
                                            <td>{or_dash(user.phone)}</td>
                                            <td class="user-table__actions">
                                                <button class="btn btn--link">"Edit"</button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn OrdersTab(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <section class="panel">
            <div class="panel__header">
                <h2>"Order Management"</h2>
                <div class="panel__tools">
                    <button class="btn">"Filter"</button>
                    <button class="btn">"Export"</button>
                </div>
            </div>
            <div class="order-list">
                {move || {
                    dashboard
                        .with(|s| s.orders.clone())
                        .into_iter()
                        .map(|order| view! { <OrderCard order=order/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

/// Order row with an inert status select; no update endpoint is wired.
#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let current = order.status;
    view! {
        <div class="order-card">
            <div class="order-card__body">
                <div class="order-card__meta">
                    <span class="order-card__id">{format!("Order #{}", order.id)}</span>
                    <span class=current.badge_class()>{current.label()}</span>
                </div>
                <p class="order-card__customer">{order.customer}</p>
                <p class="order-card__items">{order.items}</p>
                <div class="order-card__facts">
                    <span>{format!("Date: {}", order.date)}</span>
                    <span>{format!("Amount: ${}", order.amount)}</span>
                </div>
            </div>
            <div class="order-card__controls">
                <select class="form-field__input" prop:value=current.label()>
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|status| view! { <option value=status.label()>{status.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--primary">"Update"</button>
            </div>
        </div>
    }
}

#[component]
fn ProfileTab(
    dashboard: RwSignal<DashboardState>,
    session: RwSignal<SessionState>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let field = move |get: fn(&ProfileForm) -> String, set: fn(&mut ProfileForm, String)| {
        (
            Signal::derive(move || dashboard.with(|s| get(&s.profile))),
            Callback::new(move |v: String| dashboard.update(|s| set(&mut s.profile, v))),
        )
    };
    let (full_name, on_full_name) = field(|p| p.full_name.clone(), |p, v| p.full_name = v);
    let (email, on_email) = field(|p| p.email.clone(), |p, v| p.email = v);
    let (phone, on_phone) = field(|p| p.phone.clone(), |p, v| p.phone = v);
    let (address, on_address) = field(|p| p.address.clone(), |p, v| p.address = v);

    let admin = move || session.get().user;
    let message = move || dashboard.with(|s| s.profile_message.clone());

    view! {
        <section class="panel panel--profile">
            <h2>"Admin Profile"</h2>
            <div class="profile-card">
                <div class="profile-card__avatar">{move || avatar_initial(admin().as_ref()).to_string()}</div>
                <div>
                    <h3>{move || admin().map(|u| u.display_name().to_owned()).unwrap_or_default()}</h3>
                    <p class="profile-card__email">{move || admin().map(|u| u.email).unwrap_or_default()}</p>
                    <span class=Role::Admin.badge_class()>{Role::Admin.as_str()}</span>
                </div>
            </div>

            <FormField label="Full Name" value=full_name on_input=on_full_name/>
            <FormField label="Email" kind="email" required=true value=email on_input=on_email/>
            <FormField label="Phone" kind="tel" value=phone on_input=on_phone/>
            <FormField label="Address" multiline=true value=address on_input=on_address/>

            <Show when=move || !message().is_empty()>
                <p class=move || MessageTone::of(&message()).class()>{message}</p>
            </Show>

            <button
                class="btn btn--primary btn--block"
                disabled=move || dashboard.with(|s| s.profile_pending)
                on:click=move |_| on_submit.run(())
            >
                "Save Changes"
            </button>
        </section>
    }
}
