/// Main application component and routing
///
/// Public pages at the top level; the nine dashboard routes nest under
/// `CustomerArea`, which requires a session and wraps them in the dashboard
/// layout.

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use tunecast_common::navigation::{
    shell_access, ShellAccess, ABOUT_ROUTE, CONTACT_ROUTE, HOME_ROUTE, LOGIN_ROUTE, PRICING_ROUTE,
    SERVICES_ROUTE,
};
use tunecast_common::session::{LogoutPhase, Navigator, SessionProvider};

use crate::auth::{use_auth, AuthProvider};
use crate::components::icons::LoadingIcon;
use crate::components::layout::DashboardLayout;
use crate::pages::{
    auth::LoginPage,
    dashboard::SectionPage,
    home::HomePage,
    marketing::{AboutPage, ContactPage, PricingPage, ServicesPage},
    not_found::NotFoundPage,
};
use crate::router::RouterNavigator;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/tunecast-web.css"/>
        <Title text="Tunecast - Music Distribution"/>
        <Meta name="description" content="Distribute your music to every major streaming platform"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <AuthProvider>
                <Routes>
                    <Route path=HOME_ROUTE view=HomePage/>
                    <Route path=ABOUT_ROUTE view=AboutPage/>
                    <Route path=SERVICES_ROUTE view=ServicesPage/>
                    <Route path=PRICING_ROUTE view=PricingPage/>
                    <Route path=CONTACT_ROUTE view=ContactPage/>
                    <Route path=LOGIN_ROUTE view=LoginPage/>

                    <Route path="" view=CustomerArea>
                        <Route path="/dashboard" view=SectionPage/>
                        <Route path="/upload-music" view=SectionPage/>
                        <Route path="/my-releases" view=SectionPage/>
                        <Route path="/wallet" view=SectionPage/>
                        <Route path="/management" view=SectionPage/>
                        <Route path="/copyright-removal" view=SectionPage/>
                        <Route path="/royalty-reports" view=SectionPage/>
                        <Route path="/oac-requests" view=SectionPage/>
                        <Route path="/profile" view=SectionPage/>
                    </Route>

                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </AuthProvider>
        </Router>
    }
}

/// Session guard plus dashboard layout around the nested routes
///
/// The logout phase lives here rather than in the layout: the session is gone
/// before the logout flow navigates away, and the guard must not redirect on
/// its own in that window.
#[component]
fn CustomerArea() -> impl IntoView {
    let auth = use_auth();
    let email = auth.email;
    let loaded = auth.loaded;
    let phase = create_rw_signal(LogoutPhase::Idle);

    let session: Rc<dyn SessionProvider> = Rc::new(auth);
    let navigator: Rc<dyn Navigator> = Rc::new(RouterNavigator::new());

    let access = create_memo(move |_| {
        shell_access(loaded.get(), email.with(|e| e.is_some()), phase.get())
    });

    move || match access.get() {
        ShellAccess::Loading => view! {
            <div class="min-h-screen flex items-center justify-center bg-gray-900 text-gray-400">
                <LoadingIcon/>
            </div>
        }
        .into_view(),
        ShellAccess::RedirectToLogin => view! { <Redirect path=LOGIN_ROUTE/> }.into_view(),
        ShellAccess::Shell => view! {
            <DashboardLayout session=session.clone() navigator=navigator.clone() phase=phase>
                <Outlet/>
            </DashboardLayout>
        }
        .into_view(),
    }
}
