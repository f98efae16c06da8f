//! Admin dashboard state: tabs, user list, stats, and the two forms.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so the page component only wires signals,
//! spawns the single API call per action, and schedules the modal close.
//! Nothing here performs I/O; selecting a tab in particular never touches
//! the network.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::ApiError;
use crate::net::types::{NewUser, Order, OrderStatus, ProfileUpdate, Role, User};
use crate::state::session::SessionState;
use crate::util::session::SessionStore;
use crate::util::storage::KeyValueStore;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const ADD_USER_SUCCESS_MESSAGE: &str = "User added successfully!";
pub const ADD_USER_FAILED_MESSAGE: &str = "Failed to add user. Try again.";
pub const PROFILE_SUCCESS_MESSAGE: &str = "Profile updated successfully!";
pub const PROFILE_FAILED_MESSAGE: &str = "Failed to update profile. Try again.";

/// Delay between a successful add-user and the modal closing.
pub const ADD_USER_CLOSE_DELAY_MS: u32 = 2000;

/// Number of orders listed under "Recent Orders" on the overview tab.
pub const RECENT_ORDER_LIMIT: usize = 5;

/// Mutually exclusive dashboard views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Users,
    Orders,
    Profile,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] =
        [DashboardTab::Overview, DashboardTab::Users, DashboardTab::Orders, DashboardTab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Users => "Users",
            Self::Orders => "Orders",
            Self::Profile => "Profile",
        }
    }
}

/// Presentation tone of an inline form message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Error,
}

impl MessageTone {
    pub fn of(message: &str) -> Self {
        if message.contains("success") { Self::Success } else { Self::Error }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "form-message form-message--success",
            Self::Error => "form-message form-message--error",
        }
    }
}

/// What the page does once `register` settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddUserFollowUp {
    /// Keep the modal open with the error shown.
    Stay,
    /// Reload the user list, then call `close_after_add` once `delay_ms` elapses.
    ReloadThenClose { delay_ms: u32 },
}

/// True when the user list should be fetched: a session user is present and
/// no fetch has been issued yet for this page.
pub fn should_load_users(requested: bool, session: &SessionState) -> bool {
    !requested && !session.loading && session.user.is_some()
}

/// Headline figures. Order figures are fixed until an orders endpoint exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub employees: usize,
    pub riders: usize,
    pub total_orders: u32,
    pub active_orders: u32,
    pub revenue: u32,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self { total_users: 0, employees: 0, riders: 0, total_orders: 24, active_orders: 12, revenue: 5420 }
    }
}

impl DashboardStats {
    /// Recompute the user-derived counts, keeping the order figures.
    #[must_use]
    pub fn with_users(self, users: &[User]) -> Self {
        let count = |role: Role| users.iter().filter(|u| u.role == role).count();
        Self { total_users: users.len(), employees: count(Role::Employee), riders: count(Role::Rider), ..self }
    }
}

/// Static order list shown until orders are served by the backend.
pub fn sample_orders() -> Vec<Order> {
    let order = |id, customer: &str, status, items: &str, amount, date: &str| Order {
        id,
        customer: customer.to_owned(),
        status,
        items: items.to_owned(),
        amount,
        date: date.to_owned(),
    };
    vec![
        order(1, "John Doe", OrderStatus::Processing, "5 shirts, 2 pants", 250, "2025-01-20"),
        order(2, "Jane Smith", OrderStatus::InTransit, "3 towels", 150, "2025-01-20"),
        order(3, "Bob Johnson", OrderStatus::Pending, "2 jackets", 400, "2025-01-19"),
    ]
}

/// Add-user modal fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddUserForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
}

impl Default for AddUserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            email: String::new(),
            full_name: String::new(),
            phone: String::new(),
            address: String::new(),
            role: Role::Employee,
        }
    }
}

impl AddUserForm {
    /// Check required-field presence only (username, password, email).
    ///
    /// # Errors
    ///
    /// Returns `REQUIRED_FIELDS_MESSAGE` when any required field is blank.
    pub fn validate(&self) -> Result<NewUser, &'static str> {
        if [&self.username, &self.password, &self.email]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(REQUIRED_FIELDS_MESSAGE);
        }
        Ok(NewUser {
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
            email: self.email.trim().to_owned(),
            full_name: self.full_name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            role: self.role,
        })
    }
}

/// Profile tab fields, seeded from the session user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ProfileForm {
    pub fn from_user(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        Self {
            full_name: user.full_name.clone().unwrap_or_default(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            address: user.address.clone().unwrap_or_default(),
        }
    }

    /// Email is the only required profile field.
    ///
    /// # Errors
    ///
    /// Returns `REQUIRED_FIELDS_MESSAGE` when the email is blank.
    pub fn validate(&self) -> Result<ProfileUpdate, &'static str> {
        if self.email.trim().is_empty() {
            return Err(REQUIRED_FIELDS_MESSAGE);
        }
        Ok(ProfileUpdate {
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
        })
    }
}

/// First character shown in the profile avatar.
pub fn avatar_initial(user: Option<&User>) -> char {
    let from = |s: Option<&str>| s.and_then(|s| s.trim().chars().next());
    user.and_then(|u| from(u.full_name.as_deref()).or_else(|| from(Some(u.username.as_str()))))
        .map_or('A', |c| c.to_ascii_uppercase())
}

/// Dashboard view state held in a single `RwSignal`.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub users: Vec<User>,
    pub loading: bool,
    pub stats: DashboardStats,
    pub orders: Vec<Order>,
    pub show_add_user: bool,
    pub add_user: AddUserForm,
    pub add_user_message: String,
    pub add_user_pending: bool,
    pub profile: ProfileForm,
    pub profile_message: String,
    pub profile_pending: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            active_tab: DashboardTab::Overview,
            users: Vec::new(),
            loading: true,
            stats: DashboardStats::default(),
            orders: sample_orders(),
            show_add_user: false,
            add_user: AddUserForm::default(),
            add_user_message: String::new(),
            add_user_pending: false,
            profile: ProfileForm::default(),
            profile_message: String::new(),
            profile_pending: false,
        }
    }
}

impl DashboardState {
    /// Fresh state with the profile form seeded from `admin`.
    pub fn new(admin: Option<&User>) -> Self {
        Self { profile: ProfileForm::from_user(admin), ..Self::default() }
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    pub fn recent_orders(&self) -> &[Order] {
        &self.orders[..self.orders.len().min(RECENT_ORDER_LIMIT)]
    }

    /// Apply the outcome of `get_users`. Failures leave the list untouched.
    pub fn users_loaded(&mut self, result: Result<Vec<User>, ApiError>) {
        self.loading = false;
        if let Ok(users) = result {
            self.stats = self.stats.with_users(&users);
            self.users = users;
        }
    }

    pub fn open_add_user(&mut self) {
        self.show_add_user = true;
    }

    /// Hide the modal and drop any message. Field values are kept.
    pub fn close_add_user(&mut self) {
        self.show_add_user = false;
        self.add_user_message.clear();
    }

    /// Validate the add-user form. `None` means no request should be sent.
    pub fn begin_add_user(&mut self) -> Option<NewUser> {
        if self.add_user_pending {
            return None;
        }
        match self.add_user.validate() {
            Ok(payload) => {
                self.add_user_pending = true;
                Some(payload)
            }
            Err(msg) => {
                self.add_user_message = msg.to_owned();
                None
            }
        }
    }

    /// Apply the outcome of `register`.
    pub fn finish_add_user(&mut self, result: Result<(), ApiError>) -> AddUserFollowUp {
        self.add_user_pending = false;
        match result {
            Ok(()) => {
                self.add_user_message = ADD_USER_SUCCESS_MESSAGE.to_owned();
                self.add_user = AddUserForm::default();
                AddUserFollowUp::ReloadThenClose { delay_ms: ADD_USER_CLOSE_DELAY_MS }
            }
            Err(e) => {
                self.add_user_message = e.message_or(ADD_USER_FAILED_MESSAGE);
                AddUserFollowUp::Stay
            }
        }
    }

    /// Delayed close after a successful add. A modal that was closed and
    /// reopened in the meantime no longer shows the success message and is
    /// left open.
    pub fn close_after_add(&mut self) {
        if self.show_add_user && self.add_user_message == ADD_USER_SUCCESS_MESSAGE {
            self.close_add_user();
        }
    }

    /// Validate the profile form. `None` means no request should be sent.
    pub fn begin_profile_save(&mut self) -> Option<ProfileUpdate> {
        if self.profile_pending {
            return None;
        }
        match self.profile.validate() {
            Ok(payload) => {
                self.profile_pending = true;
                Some(payload)
            }
            Err(msg) => {
                self.profile_message = msg.to_owned();
                None
            }
        }
    }

    /// Apply the outcome of `update_profile`, persisting the returned user.
    pub fn finish_profile_save<S: KeyValueStore>(
        &mut self,
        result: Result<User, ApiError>,
        session: &SessionStore<S>,
    ) -> Option<User> {
        self.profile_pending = false;
        match result {
            Ok(user) => {
                session.set_user(&user);
                self.profile = ProfileForm::from_user(Some(&user));
                self.profile_message = PROFILE_SUCCESS_MESSAGE.to_owned();
                Some(user)
            }
            Err(e) => {
                self.profile_message = e.message_or(PROFILE_FAILED_MESSAGE);
                None
            }
        }
    }
}
