use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("users"), "/api/users");
    assert_eq!(endpoint("/auth/register"), "/api/auth/register");
}

#[test]
fn bearer_value_prefixes_scheme() {
    assert_eq!(bearer_value("abc"), "Bearer abc");
}

#[test]
fn message_or_returns_server_body_unchanged() {
    let err = ApiError::Server { status: 409, body: "Username already exists".to_owned() };
    assert_eq!(err.message_or("Failed to add user. Try again."), "Username already exists");
}

#[test]
fn message_or_falls_back_on_empty_body() {
    let err = ApiError::Server { status: 500, body: "  ".to_owned() };
    assert_eq!(err.message_or("fallback"), "fallback");
}

#[test]
fn message_or_falls_back_on_transport_error() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.message_or("fallback"), "fallback");
    assert_eq!(ApiError::Unavailable.message_or("fallback"), "fallback");
}

#[test]
fn display_formats_each_variant() {
    assert_eq!(ApiError::Server { status: 401, body: String::new() }.to_string(), "request failed: 401");
    assert_eq!(ApiError::Server { status: 400, body: "bad".to_owned() }.to_string(), "bad");
    assert_eq!(ApiError::Transport("x".to_owned()).to_string(), "network error: x");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::*;
    use crate::net::types::Role;

    // Single poll: the SSR stubs resolve immediately.
    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("stub future should resolve immediately"),
        }
    }

    #[test]
    fn calls_are_unavailable_on_server() {
        let new_user = NewUser {
            username: "u".to_owned(),
            password: "p".to_owned(),
            email: "e".to_owned(),
            full_name: String::new(),
            phone: String::new(),
            address: String::new(),
            role: Role::Employee,
        };
        assert_eq!(block_on(register(&new_user)), Err(ApiError::Unavailable));
        assert_eq!(block_on(get_users()), Err(ApiError::Unavailable));
    }
}
