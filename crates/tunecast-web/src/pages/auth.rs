/// Login page
///
/// Starts a session for the entered email. Signing in updates the auth
/// context, and the redirect effect then sends the user to the dashboard.

use leptos::*;
use leptos_router::*;

use tunecast_common::navigation::{DASHBOARD_ROUTE, HOME_ROUTE};

use crate::auth::use_auth;
use crate::components::icons::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal::<Option<String>>(None);

    // Redirect once signed in, whether on arrival or after submitting
    {
        let navigate = use_navigate();
        let signed_in = auth.email;
        create_effect(move |_| {
            if signed_in.get().is_some() {
                navigate(DASHBOARD_ROUTE, Default::default());
            }
        });
    }

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if let Err(e) = auth.sign_in(&email.get()) {
            set_error_message.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <div class="flex justify-center">
                        <TunecastLogo class="h-12 w-12 text-purple-500"/>
                    </div>
                    <h2 class="mt-6 text-3xl font-extrabold text-white">
                        "Sign in to Tunecast"
                    </h2>
                    <p class="mt-2 text-sm text-gray-400">
                        "Manage your releases and royalties"
                    </p>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-300">
                            "Email"
                        </label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            autocomplete="email"
                            class="mt-1 block w-full px-3 py-2 border border-gray-600 rounded-md shadow-sm bg-gray-800 text-white placeholder-gray-400 focus:outline-none focus:ring-purple-500 focus:border-purple-500"
                            placeholder="you@example.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <div class="bg-red-900/20 border border-red-800 rounded-md p-4 text-sm text-red-300">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-white bg-purple-600 hover:bg-purple-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-purple-500 transition-colors"
                    >
                        "Sign in"
                    </button>

                    <p class="text-center text-sm text-gray-400">
                        <A href=HOME_ROUTE class="hover:text-white">"Back to home"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
