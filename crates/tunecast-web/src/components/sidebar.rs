/// Sidebar navigation component
///
/// Left navigation for the customer area: the nine dashboard entries with
/// active state, and the sign-out button pinned to the bottom.

use leptos::*;
use leptos_router::*;

use tunecast_common::navigation::{Icon, MenuEntryState};
use tunecast_common::session::LogoutPhase;

use crate::components::icons::{IconView, LoadingIcon, TunecastLogo};

#[component]
pub fn Sidebar(
    #[prop(into)]
    entries: Signal<Vec<MenuEntryState>>,
    #[prop(into)]
    phase: Signal<LogoutPhase>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let logging_out = move || phase.get() == LogoutPhase::LoggingOut;

    view! {
        <aside class="hidden lg:flex lg:flex-col w-64 bg-gray-950 border-r border-gray-800">
            <div class="flex items-center space-x-2 h-16 px-6 border-b border-gray-800">
                <TunecastLogo class="h-7 w-7 text-purple-500"/>
                <span class="text-lg font-bold text-white">"Tunecast"</span>
            </div>

            <nav class="flex-1 px-3 py-4 space-y-1 overflow-y-auto">
                {move || entries.get().into_iter().map(|entry| view! { <SidebarLink entry=entry/> }).collect_view()}
            </nav>

            <div class="p-3 border-t border-gray-800">
                <button
                    on:click=move |_| on_logout.call(())
                    disabled=logging_out
                    class="w-full flex items-center space-x-3 px-3 py-2 text-sm font-medium rounded-lg text-red-400 hover:bg-red-900/20 disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                >
                    <Show
                        when=logging_out
                        fallback=|| view! {
                            <IconView icon=Icon::Logout/>
                            <span>"Logout"</span>
                        }
                    >
                        <LoadingIcon/>
                        <span>"Signing out..."</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(entry: MenuEntryState) -> impl IntoView {
    let class = if entry.active {
        "flex items-center space-x-3 px-3 py-2 text-sm font-medium rounded-lg bg-purple-600 text-white"
    } else {
        "flex items-center space-x-3 px-3 py-2 text-sm font-medium rounded-lg text-gray-400 hover:bg-gray-800 hover:text-white transition-colors"
    };

    view! {
        <A href=entry.item.path class=class>
            <IconView icon=entry.item.icon/>
            <span>{entry.item.title}</span>
        </A>
    }
}
