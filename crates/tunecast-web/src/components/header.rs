/// Top bar of the customer area
///
/// Shows the active page title and the signed-in user's email.

use leptos::*;

use crate::components::icons::IconView;
use tunecast_common::navigation::Icon;

#[component]
pub fn TopBar(
    #[prop(into)]
    heading: Signal<&'static str>,
    #[prop(into)]
    user_label: Signal<String>,
) -> impl IntoView {
    view! {
        <header class="h-16 flex items-center justify-between px-6 bg-gray-900 border-b border-gray-800">
            <h1 class="text-lg font-semibold text-white">{move || heading.get()}</h1>

            <div class="flex items-center space-x-3">
                <span class="text-sm text-gray-400">{move || user_label.get()}</span>
                <div class="w-8 h-8 rounded-full bg-purple-600 flex items-center justify-center text-white">
                    <IconView icon=Icon::User class="w-4 h-4"/>
                </div>
            </div>
        </header>
    }
}
