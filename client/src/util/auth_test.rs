use std::cell::RefCell;
use std::rc::Rc;

use any_spawner::Executor;
use tokio::task::LocalSet;

use super::*;

type Navigations = Rc<RefCell<Vec<(String, bool)>>>;

fn recorder() -> (Navigations, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let calls: Navigations = Rc::default();
    let sink = Rc::clone(&calls);
    let navigate = move |path: &str, options: NavigateOptions| {
        sink.borrow_mut().push((path.to_owned(), options.replace));
    };
    (calls, navigate)
}

fn signed_in() -> AuthSession {
    AuthSession { token: "tok".to_owned(), user: Some("admin".to_owned()) }
}

fn auth_in_context(initial: AuthState) -> RwSignal<AuthState> {
    let auth = RwSignal::new(initial);
    provide_context(auth);
    auth
}

#[tokio::test]
async fn unauthenticated_after_checking_redirects_once() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let auth = auth_in_context(AuthState::default());
            let (calls, navigate) = recorder();
            install_unauth_redirect(use_auth(), navigate);

            Executor::tick().await;
            assert!(calls.borrow().is_empty());

            auth.set(AuthState::resolved(None));
            Executor::tick().await;
            auth.set(AuthState::resolved(None));
            Executor::tick().await;

            assert_eq!(*calls.borrow(), vec![("/admin/login".to_owned(), true)]);
        })
        .await;
}

#[tokio::test]
async fn authenticated_after_checking_never_redirects_to_login() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let auth = auth_in_context(AuthState::default());
            let (calls, navigate) = recorder();
            install_unauth_redirect(use_auth(), navigate);

            Executor::tick().await;
            auth.set(AuthState::resolved(Some(signed_in())));
            Executor::tick().await;

            assert!(calls.borrow().is_empty());
        })
        .await;
}

#[tokio::test]
async fn login_navigates_to_dashboard_exactly_once() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let auth = auth_in_context(AuthState::resolved(None));
            let (calls, navigate) = recorder();
            install_signed_in_redirect(use_auth(), navigate);

            Executor::tick().await;
            assert!(calls.borrow().is_empty());

            complete_login(auth, signed_in());
            Executor::tick().await;
            auth.set(AuthState::resolved(Some(signed_in())));
            Executor::tick().await;

            assert_eq!(*calls.borrow(), vec![("/admin".to_owned(), true)]);
        })
        .await;
}

#[tokio::test]
async fn existing_session_skips_login_form() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let auth = auth_in_context(AuthState::default());
            let (calls, navigate) = recorder();
            install_signed_in_redirect(use_auth(), navigate);

            Executor::tick().await;
            auth.set(AuthState::resolved(Some(signed_in())));
            Executor::tick().await;

            assert_eq!(calls.borrow().len(), 1);
        })
        .await;
}

#[tokio::test]
async fn rejected_token_sends_viewer_back_to_login() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let auth = auth_in_context(AuthState::resolved(Some(signed_in())));
            let (calls, navigate) = recorder();
            install_unauth_redirect(use_auth(), navigate);

            Executor::tick().await;
            expire_session(auth);
            Executor::tick().await;
            expire_session(auth);
            Executor::tick().await;

            assert_eq!(*calls.borrow(), vec![("/admin/login".to_owned(), true)]);
        })
        .await;
}

#[test]
fn expire_session_signs_out_a_signed_in_viewer() {
    let owner = Owner::new();
    owner.set();
    let auth = RwSignal::new(AuthState::resolved(Some(signed_in())));

    expire_session(auth);

    assert_eq!(auth.get_untracked().phase(), AuthPhase::Unauthenticated);
}

#[tokio::test]
async fn expire_session_without_session_does_not_notify() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let auth = RwSignal::new(AuthState::resolved(None));
            let runs = Rc::new(RefCell::new(0_u32));
            Effect::new({
                let runs = Rc::clone(&runs);
                move || {
                    auth.track();
                    *runs.borrow_mut() += 1;
                }
            });

            Executor::tick().await;
            expire_session(auth);
            Executor::tick().await;

            assert_eq!(*runs.borrow(), 1);
        })
        .await;
}
