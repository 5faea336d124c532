/// Public landing page

use leptos::*;
use leptos_router::*;

use tunecast_common::navigation::{LOGIN_ROUTE, PRICING_ROUTE};

use crate::pages::marketing::MarketingShell;

const STORES: &[&str] = &["Spotify", "Apple Music", "JioSaavn", "YouTube Music", "Amazon Music", "Instagram"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <MarketingShell>
            <section class="container mx-auto px-4 py-24 text-center">
                <h1 class="text-4xl md:text-6xl font-extrabold">
                    "Release your music everywhere"
                </h1>
                <p class="mt-6 text-lg text-gray-400 max-w-2xl mx-auto">
                    "Upload once and reach listeners on every major streaming platform. "
                    "Track royalties, manage releases and keep 100% of your rights."
                </p>
                <div class="mt-10 flex justify-center space-x-4">
                    <A
                        href=LOGIN_ROUTE
                        class="px-6 py-3 font-medium rounded-md bg-purple-600 hover:bg-purple-700 transition-colors"
                    >
                        "Start Distributing"
                    </A>
                    <A
                        href=PRICING_ROUTE
                        class="px-6 py-3 font-medium rounded-md border border-gray-700 hover:bg-gray-800 transition-colors"
                    >
                        "See Pricing"
                    </A>
                </div>

                <ul class="mt-16 flex flex-wrap justify-center gap-3 text-sm text-gray-400">
                    {STORES.iter().map(|store| view! {
                        <li class="px-3 py-1 rounded-full border border-gray-800">{*store}</li>
                    }).collect_view()}
                </ul>
            </section>
        </MarketingShell>
    }
}
