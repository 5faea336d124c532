/// Dashboard layout wrapping every page of the customer area
///
/// Sidebar on the left, top bar and page content on the right. Session and
/// navigator are passed in rather than looked up, so the layout can be mounted
/// with any implementation of either. The logout phase is owned by the caller
/// and stays `LoggingOut` until the redirect unmounts the layout.

use std::rc::Rc;

use leptos::*;

use tunecast_common::navigation::ShellView;
use tunecast_common::session::{sign_out_and_redirect, LogoutPhase, Navigator, SessionProvider};

use crate::components::{header::TopBar, sidebar::Sidebar};

#[component]
pub fn DashboardLayout(
    session: Rc<dyn SessionProvider>,
    navigator: Rc<dyn Navigator>,
    phase: RwSignal<LogoutPhase>,
    children: Children,
) -> impl IntoView {
    // Both reads are tracked: the location memo and the session's email signal
    let shell = {
        let session = session.clone();
        let navigator = navigator.clone();
        create_memo(move |_| {
            let email = session.current_email();
            ShellView::new(&navigator.current_path(), email.as_deref())
        })
    };

    let on_logout = Callback::new(move |_: ()| {
        if phase.get_untracked() == LogoutPhase::LoggingOut {
            return;
        }
        phase.set(LogoutPhase::LoggingOut);

        let session = session.clone();
        let navigator = navigator.clone();
        spawn_local(async move {
            // Failures are logged by the flow; the redirect happens either way
            let _ = sign_out_and_redirect(session.as_ref(), navigator.as_ref()).await;
        });
    });

    view! {
        <div class="min-h-screen flex bg-gray-900">
            <Sidebar
                entries=Signal::derive(move || shell.get().entries)
                phase=phase
                on_logout=on_logout
            />

            <div class="flex-1 flex flex-col min-w-0">
                <TopBar
                    heading=Signal::derive(move || shell.get().heading())
                    user_label=Signal::derive(move || shell.get().user_label)
                />

                <main class="flex-1 overflow-y-auto">
                    <div class="container mx-auto px-6 py-6 max-w-7xl">
                        {children()}
                    </div>
                </main>
            </div>
        </div>
    }
}
