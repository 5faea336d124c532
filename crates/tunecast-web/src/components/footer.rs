/// Footer component
///
/// Marketing site footer: brand and contact details, quick links, legal links
/// and the copyright bar, rendered in the order `FooterContent::sections` gives.

use leptos::*;
use leptos_router::*;

use tunecast_common::footer::{FooterContent, FooterLink, FooterSection};

use crate::components::icons::TunecastLogo;

#[component]
pub fn Footer() -> impl IntoView {
    let content = FooterContent::standard();

    let sections = content
        .sections()
        .into_iter()
        .map(|section| section_view(&content, section))
        .collect_view();

    view! {
        <footer class="bg-gray-950 text-gray-300 border-t border-gray-800">
            <div class="container mx-auto px-4 py-12 grid gap-10 md:grid-cols-4">
                {sections}
            </div>
        </footer>
    }
}

fn section_view(content: &FooterContent, section: FooterSection) -> View {
    match section {
        FooterSection::Brand => view! {
            <div data-footer-section="brand" class="md:col-span-2 space-y-4">
                <div class="flex items-center space-x-2">
                    <TunecastLogo class="h-8 w-8 text-purple-500"/>
                    <span class="text-xl font-bold text-white">{content.brand.name}</span>
                </div>
                <p class="text-sm text-gray-400 max-w-md">{content.brand.tagline}</p>
                <div class="space-y-1 text-sm">
                    <p>
                        "Email: "
                        <a href=content.mailto() class="hover:text-white transition-colors">
                            {content.brand.email}
                        </a>
                    </p>
                    <p>
                        "Phone: "
                        <a href=content.tel() class="hover:text-white transition-colors">
                            {content.brand.phone}
                        </a>
                    </p>
                </div>
            </div>
        }
        .into_view(),
        FooterSection::QuickLinks => view! {
            <div data-footer-section="quick-links">
                <SectionTitle title="Quick Links"/>
                <ul class="space-y-2 text-sm">
                    {content.links(section).iter().map(|link| view! { <QuickLink link=*link/> }).collect_view()}
                </ul>
            </div>
        }
        .into_view(),
        FooterSection::Legal => view! {
            <div data-footer-section="legal">
                <SectionTitle title="Legal"/>
                <ul class="space-y-2 text-sm">
                    {content.links(section).iter().map(|link| view! {
                        <li>
                            <a href=link.target.href() class="hover:text-white transition-colors">
                                {link.label}
                            </a>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        }
        .into_view(),
        FooterSection::Copyright => view! {
            <div
                data-footer-section="copyright"
                class="md:col-span-4 pt-6 border-t border-gray-800 text-center text-sm text-gray-500"
            >
                {content.copyright.clone()}
            </div>
        }
        .into_view(),
    }
}

#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! {
        <h4 class="text-sm font-semibold text-white uppercase tracking-wider mb-4">{title}</h4>
    }
}

#[component]
fn QuickLink(link: FooterLink) -> impl IntoView {
    view! {
        <li>
            <A href=link.target.href() class="hover:text-white transition-colors">
                {link.label}
            </A>
        </li>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_footer() -> String {
        leptos::ssr::render_to_string(|| {
            provide_context(RouterIntegrationContext::new(ServerIntegration {
                path: "http://localhost/".to_string(),
            }));
            view! {
                <Router>
                    <Footer/>
                </Router>
            }
        })
        .to_string()
    }

    #[test]
    fn test_renders_every_section_in_order() {
        let html = render_footer();
        let positions: Vec<_> = ["brand", "quick-links", "legal", "copyright"]
            .iter()
            .map(|name| {
                html.find(&format!("data-footer-section=\"{}\"", name))
                    .unwrap_or_else(|| panic!("missing footer section {}", name))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
        assert_eq!(html.matches("data-footer-section=").count(), 4);
    }

    #[test]
    fn test_renders_link_hrefs() {
        let html = render_footer();
        for link in FooterContent::standard().quick_links {
            assert!(html.contains(&format!("href=\"{}\"", link.target.href())), "{}", link.label);
        }
        assert!(html.contains("href=\"mailto:support@tunecast.in\""));
        assert!(html.contains("href=\"tel:+917742789827\""));
        assert_eq!(html.matches("href=\"#\"").count(), 3);
    }
}
