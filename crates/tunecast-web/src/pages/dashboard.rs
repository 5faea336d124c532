/// Customer area pages
///
/// One page per sidebar entry. Their content is owned by other features; the
/// shell only needs something to route to.

use leptos::*;
use leptos_router::*;

use tunecast_common::navigation::DASHBOARD_MENU;

fn describe(path: &str) -> &'static str {
    match path {
        "/dashboard" => "Overview of your catalog, streams and earnings",
        "/upload-music" => "Upload audio, artwork and metadata for a new release",
        "/my-releases" => "Track the delivery status of your releases across stores",
        "/wallet" => "Your balance, payouts and withdrawal history",
        "/management" => "Artists, labels and collaborators on your account",
        "/copyright-removal" => "Request removal of infringing copies of your work",
        "/royalty-reports" => "Monthly statements per store, territory and release",
        "/oac-requests" => "Apply for a YouTube Official Artist Channel",
        "/profile" => "Account details and payout information",
        _ => "",
    }
}

/// Placeholder page for whichever menu entry matches the current path.
#[component]
pub fn SectionPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let item = move || {
        let path = pathname.get();
        DASHBOARD_MENU.iter().find(|item| item.path == path).copied()
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-white">
                    {move || item().map(|item| item.title).unwrap_or_default()}
                </h1>
                <p class="mt-1 text-sm text-gray-400">
                    {move || item().map(|item| describe(item.path)).unwrap_or_default()}
                </p>
            </div>

            <div class="bg-gray-800 rounded-lg border border-gray-700 p-8 text-center">
                <p class="text-gray-400">"Nothing here yet."</p>
            </div>
        </div>
    }
}
