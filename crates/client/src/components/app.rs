use leptos::{component, create_signal, view, Callback, IntoView, SignalGet, SignalSet};
use shared::{seed::SeedConfig, session::Session};
use tracing::info;

#[cfg(feature = "debug-signals")]
use crate::components::DebugPanel;
use crate::{
    components::{AdminDashboard, Header, LoginScreen, TeacherDashboard, UserDashboard},
    store::Store,
};

#[component]
pub fn App(seed: SeedConfig) -> impl IntoView {
    Store::provide_context(&seed);

    let (session, set_session) = create_signal(None::<Session>);

    let on_login = Callback::new(move |session: Session| {
        info!(role = session.role_label(), "Logged in");
        set_session.set(Some(session));
    });
    let on_logout = Callback::new(move |_: ()| {
        info!("Logged out");
        set_session.set(None);
    });

    view! {
        { move || match session.get() {
            None => view! { <LoginScreen on_login/> }.into_view(),
            Some(session) => view! { <Dashboard session on_logout/> }.into_view(),
        }}
        { debug_panel() }
    }
}

#[cfg(feature = "debug-signals")]
fn debug_panel() -> impl IntoView {
    view! { <DebugPanel/> }
}

#[cfg(not(feature = "debug-signals"))]
fn debug_panel() -> impl IntoView {}

/// Screen for a logged in user: the header plus the view of their role
#[component]
fn Dashboard(session: Session, on_logout: Callback<()>) -> impl IntoView {
    let page = match &session {
        Session::Admin => view! { <AdminDashboard/> }.into_view(),
        Session::Teacher => view! { <TeacherDashboard/> }.into_view(),
        Session::Student(student_id) => {
            view! { <UserDashboard student_id=student_id.clone()/> }.into_view()
        }
    };

    view! {
        <div class="dashboard">
            <Header session on_logout/>
            <div class="content">{page}</div>
        </div>
    }
}

#[component]
pub fn SeedErrorView(message: String) -> impl IntoView {
    view! {
        <div class="seed-error">
            <h1>"Erro de configuração"</h1>
            <p>{message}</p>
        </div>
    }
}
