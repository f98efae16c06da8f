//! Modal dialog for registering employees, riders, and customers.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::net::types::Role;
use crate::state::dashboard::{AddUserForm, DashboardState, MessageTone};

fn bind_field(
    state: RwSignal<DashboardState>,
    get: fn(&AddUserForm) -> &String,
    set: fn(&mut AddUserForm, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || state.with(|s| get(&s.add_user).clone())),
        Callback::new(move |v: String| state.update(|s| set(&mut s.add_user, v))),
    )
}

/// Add-user modal. Submission and the delayed close are owned by the page.
#[component]
pub fn AddUserDialog(state: RwSignal<DashboardState>, on_submit: Callback<()>) -> impl IntoView {
    let on_close = move |_| state.update(DashboardState::close_add_user);

    let (username, on_username) = bind_field(state, |f| &f.username, |f, v| f.username = v);
    let (password, on_password) = bind_field(state, |f| &f.password, |f, v| f.password = v);
    let (email, on_email) = bind_field(state, |f| &f.email, |f, v| f.email = v);
    let (full_name, on_full_name) = bind_field(state, |f| &f.full_name, |f, v| f.full_name = v);
    let (phone, on_phone) = bind_field(state, |f| &f.phone, |f, v| f.phone = v);
    let (address, on_address) = bind_field(state, |f| &f.address, |f, v| f.address = v);

    let message = move || state.with(|s| s.add_user_message.clone());

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--add-user">
                <div class="dialog__header">
                    <h2>"Add New User"</h2>
                    <button class="btn btn--icon" title="Close" on:click=on_close>
                        "✕"
                    </button>
                </div>

                <div class="dialog__grid">
                    <FormField label="Username" required=true placeholder="johndoe" value=username on_input=on_username/>
                    <FormField
                        label="Password"
                        required=true
                        kind="password"
                        placeholder="••••••••"
                        value=password
                        on_input=on_password
                    />
                </div>
                <FormField
                    label="Email"
                    required=true
                    kind="email"
                    placeholder="john@example.com"
                    value=email
                    on_input=on_email
                />
                <FormField label="Full Name" placeholder="John Doe" value=full_name on_input=on_full_name/>
                <div class="dialog__grid">
                    <FormField
                        label="Phone"
                        kind="tel"
                        placeholder="+1 (555) 000-0000"
                        value=phone
                        on_input=on_phone
                    />
                    <label class="form-field">
                        <span class="form-field__label">
                            "Role"
                            <span class="form-field__required">" *"</span>
                        </span>
                        <select
                            class="form-field__input"
                            prop:value=move || state.with(|s| s.add_user.role.as_str())
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    state.update(|s| s.add_user.role = role);
                                }
                            }
                        >
                            {Role::ASSIGNABLE
                                .into_iter()
                                .map(|role| view! { <option value=role.as_str()>{role.option_label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>
                <FormField
                    label="Address"
                    multiline=true
                    placeholder="123 Main St, City, State 12345"
                    value=address
                    on_input=on_address
                />

                <Show when=move || !message().is_empty()>
                    <p class=move || MessageTone::of(&message()).class()>{message}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || state.with(|s| s.add_user_pending)
                        on:click=move |_| on_submit.run(())
                    >
                        "Add User"
                    </button>
                </div>
            </div>
        </div>
    }
}
