/// 404 Not Found page

use leptos::*;
use leptos_router::*;

use crate::components::footer::Footer;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-900">
            <div class="flex-1 flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-white">"404"</h1>
                    <p class="mt-4 text-xl text-gray-400">"Page not found"</p>
                    <p class="mt-2 text-gray-500">"The page you're looking for doesn't exist."</p>
                    <div class="mt-8">
                        <A
                            href="/"
                            class="inline-flex items-center px-4 py-2 text-sm font-medium rounded-md text-white bg-purple-600 hover:bg-purple-700"
                        >
                            "Back to Home"
                        </A>
                    </div>
                </div>
            </div>
            <Footer/>
        </div>
    }
}
