/// Public marketing pages linked from the footer
///
/// All of them share the site header, the footer and the floating WhatsApp
/// button through `MarketingShell`.

use leptos::*;
use leptos_router::*;

use tunecast_common::contact::ContactDetails;
use tunecast_common::footer::FooterContent;
use tunecast_common::navigation::{HOME_ROUTE, LOGIN_ROUTE};

use crate::components::{contact_button::ContactButton, footer::Footer, icons::TunecastLogo};

struct Plan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Single",
        price: "₹199 / release",
        features: &["One track", "150+ stores", "100% royalties"],
    },
    Plan {
        name: "Artist",
        price: "₹999 / year",
        features: &["Unlimited releases", "Royalty reports", "YouTube Content ID"],
    },
    Plan {
        name: "Label",
        price: "₹4,999 / year",
        features: &["Multiple artists", "OAC requests", "Priority support"],
    },
];

const SERVICES: &[(&str, &str)] = &[
    ("Music Distribution", "Deliver releases to Spotify, Apple Music, JioSaavn and 150+ stores."),
    ("Royalty Reports", "Monthly store-by-store earnings with withdrawals to your wallet."),
    ("Copyright Protection", "Content ID claims and removal requests for reuploads of your tracks."),
    ("Official Artist Channel", "Verified YouTube channel requests for your artist profile."),
];

/// Site header, page body, footer and contact button.
#[component]
pub fn MarketingShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <header class="container mx-auto px-4 h-16 flex items-center justify-between">
                <A href=HOME_ROUTE class="flex items-center space-x-2">
                    <TunecastLogo class="h-8 w-8 text-purple-500"/>
                    <span class="text-xl font-bold">"Tunecast"</span>
                </A>
                <A
                    href=LOGIN_ROUTE
                    class="px-4 py-2 text-sm font-medium rounded-md bg-purple-600 hover:bg-purple-700 transition-colors"
                >
                    "Artist Login"
                </A>
            </header>

            <main class="flex-1">{children()}</main>

            <Footer/>
            <ContactButton/>
        </div>
    }
}

#[component]
fn PageHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <h1 class="text-4xl font-extrabold">{title}</h1>
            <p class="mt-4 text-lg text-gray-400 max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <MarketingShell>
            <section class="container mx-auto px-4 py-20 max-w-3xl space-y-8">
                <PageHeading
                    title="About Tunecast"
                    subtitle="A distribution service built for independent artists and labels."
                />
                <p class="text-gray-300">
                    "Tunecast gets your releases onto every major streaming platform without "
                    "asking for your rights. You own your masters, you keep your royalties, "
                    "and you see exactly where every play came from."
                </p>
            </section>
        </MarketingShell>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <MarketingShell>
            <section class="container mx-auto px-4 py-20 space-y-12">
                <PageHeading
                    title="Services"
                    subtitle="Everything an independent release needs after the final mix."
                />
                <div class="grid gap-6 md:grid-cols-2">
                    {SERVICES.iter().map(|(name, description)| view! {
                        <div class="rounded-lg border border-gray-800 bg-gray-950 p-6">
                            <h3 class="text-lg font-semibold">{*name}</h3>
                            <p class="mt-2 text-sm text-gray-400">{*description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </MarketingShell>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <MarketingShell>
            <section class="container mx-auto px-4 py-20 space-y-12">
                <PageHeading
                    title="Pricing"
                    subtitle="Simple plans. No commission on your royalties."
                />
                <div class="grid gap-6 md:grid-cols-3">
                    {PLANS.iter().map(|plan| view! {
                        <div class="rounded-lg border border-gray-800 bg-gray-950 p-6 flex flex-col">
                            <h3 class="text-lg font-semibold">{plan.name}</h3>
                            <p class="mt-2 text-2xl font-bold text-purple-400">{plan.price}</p>
                            <ul class="mt-4 space-y-2 text-sm text-gray-400 flex-1">
                                {plan.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                            </ul>
                            <A
                                href=LOGIN_ROUTE
                                class="mt-6 px-4 py-2 text-center text-sm font-medium rounded-md bg-purple-600 hover:bg-purple-700 transition-colors"
                            >
                                "Get Started"
                            </A>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </MarketingShell>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let footer = FooterContent::standard();
    let whatsapp = ContactDetails::default().link();

    view! {
        <MarketingShell>
            <section class="container mx-auto px-4 py-20 max-w-xl space-y-8">
                <PageHeading
                    title="Contact"
                    subtitle="Questions about a release or your royalties? Reach us any day."
                />
                <ul class="space-y-3 text-gray-300">
                    <li>
                        "Email: "
                        <a href=footer.mailto() class="text-purple-400 hover:text-purple-300">
                            {footer.brand.email}
                        </a>
                    </li>
                    <li>
                        "Phone: "
                        <a href=footer.tel() class="text-purple-400 hover:text-purple-300">
                            {footer.brand.phone}
                        </a>
                    </li>
                    <li>
                        <a
                            href=whatsapp
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-green-400 hover:text-green-300"
                        >
                            "Chat with us on WhatsApp"
                        </a>
                    </li>
                </ul>
            </section>
        </MarketingShell>
    }
}
