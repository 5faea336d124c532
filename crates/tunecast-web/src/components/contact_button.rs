/// Floating WhatsApp button

use leptos::*;

use tunecast_common::contact::ContactDetails;
use tunecast_common::navigation::Icon;

use crate::components::icons::IconView;

#[component]
pub fn ContactButton() -> impl IntoView {
    let href = ContactDetails::default().link();

    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat with us on WhatsApp"
            title="Chat with us on WhatsApp"
            class="fixed bottom-6 right-6 z-50 flex items-center justify-center w-14 h-14 rounded-full bg-green-500 text-white shadow-lg hover:bg-green-600 hover:scale-110 transition-transform"
        >
            <IconView icon=Icon::WhatsApp class="w-8 h-8"/>
        </a>
    }
}
